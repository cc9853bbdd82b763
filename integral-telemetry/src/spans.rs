//! Span helpers for common pipeline operations

use tracing::Span;

/// Create a span for one full analysis run
///
/// # Example
/// ```
/// use integral_telemetry::pipeline_run_span;
/// let span = pipeline_run_span("run-123");
/// let _enter = span.enter();
/// ```
pub fn pipeline_run_span(run_id: &str) -> Span {
    tracing::info_span!("pipeline.run", run.id = run_id, otel.kind = "internal")
}

/// Create a span for one progress stage (a quadrant or the orchestrator)
pub fn stage_span(stage_id: &str) -> Span {
    tracing::info_span!("pipeline.stage", stage.id = stage_id, otel.kind = "internal")
}

/// Create a span for model API calls
///
/// # Example
/// ```
/// use integral_telemetry::model_call_span;
/// let span = model_call_span("gpt-5-nano");
/// let _enter = span.enter();
/// ```
pub fn model_call_span(model_name: &str) -> Span {
    tracing::info_span!("model.call", model.name = model_name, otel.kind = "client")
}

/// Create a span for dataset loading
pub fn dataset_load_span(resource: &str) -> Span {
    tracing::debug_span!("dataset.load", dataset.resource = resource)
}
