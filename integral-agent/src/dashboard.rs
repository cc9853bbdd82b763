//! Chart presets picked from keywords in the quadrant analyses.
//!
//! Each chart reads one quadrant's text. A case-insensitive hit on any of the
//! chart's trigger words selects the alternate preset.

use integral_core::{AgentSummaries, ChartSlice, DashboardData, Quadrant, WeeklyPoint};

const SLEEP_TRIGGERS: &[&str] = &["poor", "low"];
const PERFORMANCE_TRIGGERS: &[&str] = &["high"];
const COST_TRIGGERS: &[&str] = &["fuel", "high"];
const CULTURE_TRIGGERS: &[&str] = &["high", "positive"];

fn mentions_any(text: &str, triggers: &[&str]) -> bool {
    let text = text.to_lowercase();
    triggers.iter().any(|t| text.contains(t))
}

pub fn sleep_data(ul_text: &str) -> Vec<ChartSlice> {
    let (poor, good, excellent) =
        if mentions_any(ul_text, SLEEP_TRIGGERS) { (45, 35, 20) } else { (25, 50, 25) };
    vec![
        ChartSlice::new("Poor Sleep", poor, "#d81b60"),
        ChartSlice::new("Good Sleep", good, "#26a69a"),
        ChartSlice::new("Excellent Sleep", excellent, "#00bfa5"),
    ]
}

pub fn performance_data(ur_text: &str) -> Vec<WeeklyPoint> {
    let base = if mentions_any(ur_text, PERFORMANCE_TRIGGERS) { 85 } else { 75 };
    [(base - 5, 85), (base, 88), (base - 3, 92), (base + 5, 95)]
        .into_iter()
        .enumerate()
        .map(|(i, (efficiency, safety))| WeeklyPoint {
            name: format!("Week {}", i + 1),
            efficiency,
            safety,
        })
        .collect()
}

pub fn cost_data(lr_text: &str) -> Vec<ChartSlice> {
    let fuel = if mentions_any(lr_text, COST_TRIGGERS) { 50 } else { 45 };
    vec![
        ChartSlice::new("Fuel", fuel, "#d81b60"),
        ChartSlice::new("Maintenance", 25, "#26a69a"),
        ChartSlice::new("Labor", 20, "#00bfa5"),
        ChartSlice::new("Other", 5, "#4db6ac"),
    ]
}

pub fn culture_data(ll_text: &str) -> Vec<ChartSlice> {
    let base = if mentions_any(ll_text, CULTURE_TRIGGERS) { 85 } else { 75 };
    vec![
        ChartSlice::new("Vendor Relations", base + 5, "#26a69a"),
        ChartSlice::new("Team Morale", base, "#00bfa5"),
        ChartSlice::new("Recognition", base - 10, "#4db6ac"),
        ChartSlice::new("Communication", base + 3, "#d81b60"),
    ]
}

pub fn derive_dashboard(summaries: &AgentSummaries) -> DashboardData {
    DashboardData {
        sleep_data: sleep_data(summaries.get(Quadrant::Ul)),
        performance_data: performance_data(summaries.get(Quadrant::Ur)),
        cost_data: cost_data(summaries.get(Quadrant::Lr)),
        culture_data: culture_data(summaries.get(Quadrant::Ll)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_presets() {
        assert_eq!(sleep_data("Drivers show poor sleep patterns")[0].value, 45);
        assert_eq!(sleep_data("Sleep is LOW on weekends")[0].value, 45);
        assert_eq!(sleep_data("Drivers rest well")[0].value, 25);
        assert_eq!(sleep_data("")[1].value, 50);
    }

    #[test]
    fn test_performance_weeks() {
        let weeks = performance_data("Efficiency remained high");
        let efficiency: Vec<_> = weeks.iter().map(|w| w.efficiency).collect();
        let safety: Vec<_> = weeks.iter().map(|w| w.safety).collect();
        assert_eq!(efficiency, vec![80, 85, 82, 90]);
        assert_eq!(safety, vec![85, 88, 92, 95]);
        assert_eq!(weeks[3].name, "Week 4");

        assert_eq!(performance_data("steady")[0].efficiency, 70);
    }

    #[test]
    fn test_cost_presets() {
        assert_eq!(cost_data("Fuel spend dominates")[0].value, 50);
        assert_eq!(cost_data("costs are moderate")[0].value, 45);
        let total: u32 = cost_data("")[1..].iter().map(|s| s.value).sum();
        assert_eq!(total, 50);
    }

    #[test]
    fn test_culture_presets() {
        let values: Vec<_> = culture_data("A positive culture").iter().map(|s| s.value).collect();
        assert_eq!(values, vec![90, 85, 75, 88]);
        assert_eq!(culture_data("tense")[1].value, 75);
    }

    #[test]
    fn test_each_chart_reads_its_own_quadrant() {
        let mut summaries = AgentSummaries::default();
        summaries.set(Quadrant::Ur, "poor sleep, high fuel, positive");
        let dashboard = derive_dashboard(&summaries);
        assert_eq!(dashboard.sleep_data[0].value, 25);
        assert_eq!(dashboard.performance_data[1].efficiency, 85);
        assert_eq!(dashboard.cost_data[0].value, 45);
        assert_eq!(dashboard.culture_data[1].value, 75);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let mut summaries = AgentSummaries::default();
        summaries.set(Quadrant::Ul, "low energy");
        assert_eq!(derive_dashboard(&summaries), derive_dashboard(&summaries));
    }
}
