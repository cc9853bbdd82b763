//! One end-to-end analysis run.

use crate::dashboard::derive_dashboard;
use crate::orchestrator::OrchestratorAgent;
use crate::preflight;
use crate::quadrant_agent::QuadrantAgent;
use futures::stream::{FuturesUnordered, StreamExt};
use integral_core::{
    AgentSummaries, AnalysisResult, CompleteSelection, IntegralError, PENDING_MESSAGE,
    ProgressSink, Quadrant, Result, Selection, Stage, StageStatus,
};
use integral_dataset::{DatasetSource, load_selection, resource_name};
use integral_model::ModelHandle;
use integral_telemetry::{Instrument, info, pipeline_run_span};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

pub const DEFAULT_TEMPERATURE: f32 = 1.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Sampling temperature for analysis and synthesis calls.
    pub temperature: f32,
    /// Send a probe request before the analyses.
    pub preflight: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { temperature: DEFAULT_TEMPERATURE, preflight: true }
    }
}

impl PipelineConfig {
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_preflight(mut self, preflight: bool) -> Self {
        self.preflight = preflight;
        self
    }
}

/// Runs the four quadrant analyses concurrently, then the synthesis.
///
/// Cheap to clone; clones share the model and dataset source.
#[derive(Clone)]
pub struct Pipeline {
    model: ModelHandle,
    datasets: Arc<dyn DatasetSource>,
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(model: ModelHandle, datasets: Arc<dyn DatasetSource>, config: PipelineConfig) -> Self {
        Self { model, datasets, config }
    }

    pub fn model(&self) -> &ModelHandle {
        &self.model
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Checks completeness first, then runs [`Pipeline::analyze`].
    pub async fn analyze_selection(
        &self,
        selection: &Selection,
        progress: &dyn ProgressSink,
    ) -> Result<AnalysisResult> {
        let selection = selection.complete()?;
        self.analyze(&selection, progress).await
    }

    /// Fails with no partial result when the model is unconfigured, a dataset
    /// cannot be loaded, or the probe fails. Failed analysis or synthesis
    /// calls are replaced by placeholder texts.
    pub async fn analyze(
        &self,
        selection: &CompleteSelection,
        progress: &dyn ProgressSink,
    ) -> Result<AnalysisResult> {
        let run_id = uuid::Uuid::new_v4().to_string();
        self.run(selection, progress).instrument(pipeline_run_span(&run_id)).await
    }

    async fn run(
        &self,
        selection: &CompleteSelection,
        progress: &dyn ProgressSink,
    ) -> Result<AnalysisResult> {
        let llm = self.model.get()?;

        for stage in Stage::ALL {
            progress.update(stage, StageStatus::Pending, PENDING_MESSAGE);
        }

        let datasets = load_selection(self.datasets.as_ref(), selection).await?;
        info!(source = %self.datasets.describe(), "Datasets loaded");
        let agents = quadrant_agents(selection, datasets)?;

        if self.config.preflight {
            preflight::probe(llm.as_ref()).await?;
        }

        let temperature = self.config.temperature;
        let mut pending: FuturesUnordered<_> = agents
            .iter()
            .map(|agent| {
                let llm = Arc::clone(&llm);
                async move {
                    let stage = Stage::from(agent.quadrant());
                    progress.update(stage, StageStatus::Processing, &stage.processing_message());
                    let text = agent.analyze(llm.as_ref(), temperature).await;
                    progress.update(stage, StageStatus::Completed, &stage.completed_message());
                    (agent.quadrant(), text)
                }
            })
            .collect();

        let mut summaries = AgentSummaries::default();
        while let Some((quadrant, text)) = pending.next().await {
            summaries.set(quadrant, text);
        }
        drop(pending);

        let stage = Stage::Orchestrator;
        progress.update(stage, StageStatus::Processing, &stage.processing_message());
        let synthesis = OrchestratorAgent::new(temperature).synthesize(llm.as_ref(), &summaries).await;
        progress.update(stage, StageStatus::Completed, &stage.completed_message());

        let dashboard_data = derive_dashboard(&summaries);
        info!("Integral analysis complete");

        Ok(AnalysisResult {
            agent_summaries: summaries,
            integrated_analysis: synthesis.integrated_analysis,
            action_plan: synthesis.action_plan,
            dashboard_data,
        })
    }
}

/// One agent per selected quadrant. Every quadrant must have its dataset.
fn quadrant_agents(
    selection: &CompleteSelection,
    mut datasets: BTreeMap<Quadrant, String>,
) -> Result<Vec<QuadrantAgent>> {
    selection
        .iter()
        .map(|(quadrant, variant)| -> Result<QuadrantAgent> {
            let data = datasets.remove(&quadrant).ok_or_else(|| IntegralError::DatasetLoad {
                path: resource_name(quadrant, variant),
                reason: "dataset missing from loaded selection".to_string(),
            })?;
            Ok(QuadrantAgent::new(quadrant, variant, data))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use integral_core::DatasetVariant;

    #[test]
    fn test_quadrant_agents_in_canonical_order() {
        let selection = CompleteSelection::uniform(DatasetVariant::Positive);
        let datasets = Quadrant::ALL.into_iter().map(|q| (q, format!("{q} data"))).collect();

        let agents = quadrant_agents(&selection, datasets).unwrap();
        let quadrants: Vec<_> = agents.iter().map(|a| a.quadrant()).collect();
        assert_eq!(quadrants, Quadrant::ALL.to_vec());
    }

    #[test]
    fn test_missing_dataset_is_load_error() {
        let selection = CompleteSelection::uniform(DatasetVariant::Mixed);
        let datasets: BTreeMap<_, _> = [Quadrant::Ul, Quadrant::Ur, Quadrant::Ll]
            .into_iter()
            .map(|q| (q, "a,b".to_string()))
            .collect();

        match quadrant_agents(&selection, datasets) {
            Err(IntegralError::DatasetLoad { path, .. }) => assert_eq!(path, "lr_inc.csv"),
            other => panic!("expected dataset load error, got {:?}", other.map(|a| a.len())),
        }
    }
}
