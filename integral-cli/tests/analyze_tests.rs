use integral_agent::{Pipeline, PipelineConfig};
use integral_cli::commands::analyze::{AnalyzeArgs, render_text, run_analyze};
use integral_core::{CompleteSelection, DatasetVariant, NoopProgress};
use integral_dataset::EmbeddedDatasets;
use integral_model::{MockLlm, ModelHandle};
use std::sync::Arc;

fn pipeline(llm: Arc<MockLlm>) -> Pipeline {
    Pipeline::new(
        ModelHandle::from_llm(llm),
        Arc::new(EmbeddedDatasets::new()),
        PipelineConfig::default().with_preflight(false),
    )
}

#[tokio::test]
async fn analyze_requires_every_quadrant() {
    let llm = Arc::new(MockLlm::new("mock"));
    let args = AnalyzeArgs { ul: Some(DatasetVariant::Negative), ..Default::default() };

    let err = run_analyze(&pipeline(llm.clone()), args).await.unwrap_err();

    assert!(err.to_string().contains("--ur, --ll, --lr"));
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn analyze_runs_all_agents() {
    let llm = Arc::new(MockLlm::new("mock"));
    let args = AnalyzeArgs {
        ul: Some(DatasetVariant::Negative),
        ur: Some(DatasetVariant::Positive),
        ll: Some(DatasetVariant::Mixed),
        lr: Some(DatasetVariant::Negative),
        json: true,
    };

    run_analyze(&pipeline(llm.clone()), args).await.unwrap();

    assert_eq!(llm.call_count(), 5);
}

#[tokio::test]
async fn text_report_has_every_section() {
    colored::control::set_override(false);
    let llm = Arc::new(MockLlm::new("mock").with_text("Drivers report poor sleep patterns."));
    let result = pipeline(llm)
        .analyze(&CompleteSelection::uniform(DatasetVariant::Negative), &NoopProgress)
        .await
        .unwrap();

    let text = render_text(&result);

    for heading in ["Agent Summaries", "Integrated Analysis", "Action Plan", "Dashboard"] {
        assert!(text.contains(heading), "missing {heading}");
    }
    assert!(text.contains("Poor Sleep 45"));
    assert!(text.contains("UL - Individual Internal"));
}
