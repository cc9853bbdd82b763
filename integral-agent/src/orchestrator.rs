use crate::prompts::{ORCHESTRATOR_SYSTEM_PROMPT, orchestrator_user_prompt};
use integral_core::{AgentSummaries, Llm, LlmRequest, Stage};
use integral_telemetry::{Instrument, stage_span, warn};

pub const ACTION_PLAN_LABEL: &str = "Generated 90-day action plan based on integral analysis";
pub const SYNTHESIS_UNAVAILABLE: &str =
    "Integrated analysis temporarily unavailable. Please try again later.";
pub const ACTION_PLAN_FAILED: &str = "Action plan generation failed. Please try again later.";

/// Outcome of the synthesis step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
    pub integrated_analysis: String,
    pub action_plan: String,
}

impl Synthesis {
    pub fn unavailable() -> Self {
        Self {
            integrated_analysis: SYNTHESIS_UNAVAILABLE.to_string(),
            action_plan: ACTION_PLAN_FAILED.to_string(),
        }
    }
}

/// Combines the four quadrant analyses into one narrative.
#[derive(Debug, Clone, Copy)]
pub struct OrchestratorAgent {
    temperature: f32,
}

impl OrchestratorAgent {
    pub fn new(temperature: f32) -> Self {
        Self { temperature }
    }

    pub fn request(&self, summaries: &AgentSummaries) -> LlmRequest {
        LlmRequest::prompt(ORCHESTRATOR_SYSTEM_PROMPT, orchestrator_user_prompt(summaries))
            .with_temperature(self.temperature)
    }

    pub async fn synthesize(&self, llm: &dyn Llm, summaries: &AgentSummaries) -> Synthesis {
        async move {
            match llm.generate_content(self.request(summaries)).await {
                Ok(response) => Synthesis {
                    integrated_analysis: response.text,
                    action_plan: ACTION_PLAN_LABEL.to_string(),
                },
                Err(error) => {
                    warn!(error = %error, "Integral synthesis failed");
                    Synthesis::unavailable()
                }
            }
        }
        .instrument(stage_span(Stage::Orchestrator.id()))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use integral_core::{IntegralError, LlmResponse};
    use integral_model::MockLlm;

    #[tokio::test]
    async fn test_synthesis_success_uses_label() {
        let llm = MockLlm::new("mock").with_text("EXECUTIVE SUMMARY ...");
        let synthesis = OrchestratorAgent::new(1.0).synthesize(&llm, &AgentSummaries::default()).await;
        assert_eq!(synthesis.integrated_analysis, "EXECUTIVE SUMMARY ...");
        assert_eq!(synthesis.action_plan, ACTION_PLAN_LABEL);
    }

    #[tokio::test]
    async fn test_synthesis_failure_uses_placeholders() {
        let llm = MockLlm::new("mock")
            .with_handler(|_| Err::<LlmResponse, _>(IntegralError::InvalidResponse("empty".into())));
        let synthesis = OrchestratorAgent::new(1.0).synthesize(&llm, &AgentSummaries::default()).await;
        assert_eq!(synthesis, Synthesis::unavailable());
    }
}
