use crate::Quadrant;
use serde::{Deserialize, Serialize};

/// Raw analysis text per quadrant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSummaries {
    pub ul: String,
    pub ur: String,
    pub ll: String,
    pub lr: String,
}

impl AgentSummaries {
    pub fn get(&self, quadrant: Quadrant) -> &str {
        match quadrant {
            Quadrant::Ul => &self.ul,
            Quadrant::Ur => &self.ur,
            Quadrant::Ll => &self.ll,
            Quadrant::Lr => &self.lr,
        }
    }

    pub fn set(&mut self, quadrant: Quadrant, text: impl Into<String>) {
        let slot = match quadrant {
            Quadrant::Ul => &mut self.ul,
            Quadrant::Ur => &mut self.ur,
            Quadrant::Ll => &mut self.ll,
            Quadrant::Lr => &mut self.lr,
        };
        *slot = text.into();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Quadrant, &str)> {
        Quadrant::ALL.into_iter().map(move |q| (q, self.get(q)))
    }
}

/// One labelled value of a pie or bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: u32,
    pub color: String,
}

impl ChartSlice {
    pub fn new(name: &str, value: u32, color: &str) -> Self {
        Self { name: name.to_string(), value, color: color.to_string() }
    }
}

/// One week of the performance trend line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPoint {
    pub name: String,
    pub efficiency: u32,
    pub safety: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub sleep_data: Vec<ChartSlice>,
    pub performance_data: Vec<WeeklyPoint>,
    pub cost_data: Vec<ChartSlice>,
    pub culture_data: Vec<ChartSlice>,
}

/// Everything a finished run hands to the result viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub agent_summaries: AgentSummaries,
    pub integrated_analysis: String,
    pub action_plan: String,
    pub dashboard_data: DashboardData,
}
