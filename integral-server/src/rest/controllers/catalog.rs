use super::AnalysisController;
use axum::{Json, extract::State};
use integral_dataset::{QuadrantInfo, catalog};
use serde::Serialize;

pub async fn list_quadrants() -> Json<Vec<QuadrantInfo>> {
    Json(catalog())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub model_ready: bool,
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub preflight: bool,
}

/// Whether runs can reach a model. The UI warns before the user starts one.
pub async fn status(State(controller): State<AnalysisController>) -> Json<StatusResponse> {
    let pipeline = &controller.config.pipeline;
    let handle = pipeline.model();
    Json(StatusResponse {
        model_ready: handle.is_ready(),
        model: handle.model_name().map(str::to_string),
        reason: handle.get().err().map(|e| crate::error::user_message(&e)),
        preflight: pipeline.config().preflight,
    })
}
