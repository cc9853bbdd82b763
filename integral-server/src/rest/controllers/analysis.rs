use crate::{ServerConfig, error::ApiError};
use axum::{
    Json,
    extract::{Query, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;
use integral_core::{
    AnalysisResult, ProgressEvent, ProgressSink, Result as IntegralResult, Selection, Stage,
    StageStatus,
};
use integral_telemetry::{info, warn};
use serde::Serialize;
use std::convert::Infallible;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct AnalysisController {
    pub(crate) config: ServerConfig,
}

impl AnalysisController {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}

pub async fn analyze(
    State(controller): State<AnalysisController>,
    Json(selection): Json<Selection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let expose = controller.config.security.expose_error_details;
    let selection = selection.complete().map_err(|e| ApiError::from_error(&e, expose))?;

    let result = controller
        .config
        .pipeline
        .analyze(&selection, &LoggingProgress)
        .await
        .map_err(|e| {
            warn!(error = %e, "Analysis run failed");
            ApiError::from_error(&e, expose)
        })?;

    Ok(Json(result))
}

/// Forwards progress records to the SSE response.
struct ChannelProgress {
    tx: mpsc::UnboundedSender<ProgressEvent>,
}

impl ProgressSink for ChannelProgress {
    fn update(&self, stage: Stage, status: StageStatus, message: &str) {
        // Receiver is gone once the client disconnects.
        let _ = self.tx.send(ProgressEvent { stage, status, message: message.to_string() });
    }
}

struct LoggingProgress;

impl ProgressSink for LoggingProgress {
    fn update(&self, stage: Stage, status: StageStatus, message: &str) {
        info!(stage = %stage, status = %status, "{}", message);
    }
}

enum Step {
    Progress(ProgressEvent),
    Finished(IntegralResult<AnalysisResult>),
}

#[derive(Serialize)]
struct StreamError<'a> {
    error: &'a str,
}

fn json_event<T: Serialize>(name: &str, value: &T) -> Event {
    Event::default()
        .event(name)
        .json_data(value)
        .unwrap_or_else(|_| Event::default().event("error").data("{\"error\":\"serialization failed\"}"))
}

/// Streams `progress` events while the run is active, then exactly one
/// `result` or `error` event. Dropping the connection drops the run.
pub async fn analyze_stream(
    State(controller): State<AnalysisController>,
    Query(selection): Query<Selection>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    let expose = controller.config.security.expose_error_details;
    let selection = selection.complete().map_err(|e| ApiError::from_error(&e, expose))?;
    let pipeline = controller.config.pipeline.clone();

    let stream = async_stream::stream! {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let sink = ChannelProgress { tx };
        let run = pipeline.analyze(&selection, &sink);
        tokio::pin!(run);

        let outcome = loop {
            let step = tokio::select! {
                biased;
                Some(event) = rx.recv() => Step::Progress(event),
                outcome = &mut run => Step::Finished(outcome),
            };
            match step {
                Step::Progress(event) => yield Ok(json_event("progress", &event)),
                Step::Finished(outcome) => break outcome,
            }
        };
        while let Ok(event) = rx.try_recv() {
            yield Ok(json_event("progress", &event));
        }

        match outcome {
            Ok(result) => yield Ok(json_event("result", &result)),
            Err(e) => {
                warn!(error = %e, "Streamed analysis run failed");
                let message = ApiError::from_error(&e, expose).message;
                yield Ok(json_event("error", &StreamError { error: &message }));
            }
        }
    };

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
