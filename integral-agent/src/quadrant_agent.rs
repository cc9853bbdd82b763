use crate::prompts::{quadrant_system_prompt, quadrant_user_prompt};
use integral_core::{DatasetVariant, Llm, LlmRequest, Quadrant};
use integral_telemetry::{Instrument, stage_span, warn};

/// Text used in place of an analysis whose model call failed.
pub fn unavailable_placeholder(quadrant: Quadrant) -> String {
    format!("Analysis temporarily unavailable for {}. Please try again later.", quadrant.name())
}

/// Analyst for one quadrant's dataset.
#[derive(Debug, Clone)]
pub struct QuadrantAgent {
    quadrant: Quadrant,
    variant: DatasetVariant,
    data: String,
}

impl QuadrantAgent {
    pub fn new(quadrant: Quadrant, variant: DatasetVariant, data: impl Into<String>) -> Self {
        Self { quadrant, variant, data: data.into() }
    }

    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    pub fn variant(&self) -> DatasetVariant {
        self.variant
    }

    pub fn request(&self, temperature: f32) -> LlmRequest {
        LlmRequest::prompt(
            quadrant_system_prompt(self.quadrant),
            quadrant_user_prompt(self.quadrant, self.variant, &self.data),
        )
        .with_temperature(temperature)
    }

    /// Runs the analysis. A failed call yields the placeholder text instead
    /// of an error.
    pub async fn analyze(&self, llm: &dyn Llm, temperature: f32) -> String {
        let quadrant = self.quadrant;
        async move {
            match llm.generate_content(self.request(temperature)).await {
                Ok(response) => response.text,
                Err(error) => {
                    warn!(quadrant = quadrant.id(), error = %error, "Quadrant analysis failed");
                    unavailable_placeholder(quadrant)
                }
            }
        }
        .instrument(stage_span(quadrant.id()))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use integral_core::{IntegralError, LlmResponse, Role};
    use integral_model::MockLlm;

    #[test]
    fn test_placeholder_names_quadrant() {
        assert_eq!(
            unavailable_placeholder(Quadrant::Ur),
            "Analysis temporarily unavailable for Individual External (UR). Please try again later."
        );
    }

    #[test]
    fn test_request_shape() {
        let agent = QuadrantAgent::new(Quadrant::Ll, DatasetVariant::Positive, "week,score");
        let req = agent.request(1.0);
        assert_eq!(req.messages[0].role, Role::System);
        assert!(req.messages[0].content.starts_with("Analyze the cultural and relational data"));
        assert!(req.messages[1].content.contains("week,score"));
        assert_eq!(req.temperature(), Some(1.0));
    }

    #[tokio::test]
    async fn test_analyze_returns_model_text() {
        let llm = MockLlm::new("mock").with_text("Sleep is poor.");
        let agent = QuadrantAgent::new(Quadrant::Ul, DatasetVariant::Negative, "data");
        assert_eq!(agent.analyze(&llm, 1.0).await, "Sleep is poor.");
    }

    #[tokio::test]
    async fn test_analyze_degrades_to_placeholder() {
        let llm = MockLlm::new("mock")
            .with_handler(|_| Err::<LlmResponse, _>(IntegralError::Api { status: 500, message: "down".into() }));
        let agent = QuadrantAgent::new(Quadrant::Lr, DatasetVariant::Mixed, "data");
        assert_eq!(agent.analyze(&llm, 1.0).await, unavailable_placeholder(Quadrant::Lr));
    }
}
