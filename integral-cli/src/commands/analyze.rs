use anyhow::{Result, bail};
use colored::Colorize;
use integral_agent::Pipeline;
use integral_core::{
    AnalysisResult, DatasetVariant, ProgressSink, Quadrant, Selection, Stage, StageStatus,
};

/// Per-quadrant choices from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzeArgs {
    pub ul: Option<DatasetVariant>,
    pub ur: Option<DatasetVariant>,
    pub ll: Option<DatasetVariant>,
    pub lr: Option<DatasetVariant>,
    pub json: bool,
}

impl AnalyzeArgs {
    pub fn selection(&self) -> Selection {
        let mut selection = Selection::new();
        for (quadrant, variant) in [
            (Quadrant::Ul, self.ul),
            (Quadrant::Ur, self.ur),
            (Quadrant::Ll, self.ll),
            (Quadrant::Lr, self.lr),
        ] {
            if let Some(variant) = variant {
                selection.set(quadrant, variant);
            }
        }
        selection
    }
}

/// Prints stage transitions to stderr so stdout carries only the result.
struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn update(&self, stage: Stage, status: StageStatus, message: &str) {
        let marker = match status {
            StageStatus::Pending => "·".dimmed(),
            StageStatus::Processing => "…".yellow(),
            StageStatus::Completed => "✓".green(),
        };
        eprintln!("{} {:<13} {}", marker, stage.id(), message);
    }
}

pub async fn run_analyze(pipeline: &Pipeline, args: AnalyzeArgs) -> Result<()> {
    let selection = args.selection();
    let missing = selection.missing();
    if !missing.is_empty() {
        let flags: Vec<String> = missing.iter().map(|q| format!("--{}", q.id())).collect();
        bail!("select a dataset for every quadrant (missing {})", flags.join(", "));
    }

    let result = pipeline.analyze_selection(&selection, &ConsoleProgress).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_text(&result));
    }
    Ok(())
}

pub fn render_text(result: &AnalysisResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "Agent Summaries".yellow().bold()));
    for (quadrant, text) in result.agent_summaries.iter() {
        out.push_str(&format!("\n{}\n{}\n", quadrant.title().cyan().bold(), text));
    }
    out.push_str(&format!("\n{}\n{}\n", "Integrated Analysis".yellow().bold(), result.integrated_analysis));
    out.push_str(&format!("\n{}\n{}\n", "Action Plan".yellow().bold(), result.action_plan));

    let dashboard = &result.dashboard_data;
    out.push_str(&format!("\n{}\n", "Dashboard".yellow().bold()));
    for (title, slices) in [
        ("Sleep", &dashboard.sleep_data),
        ("Costs", &dashboard.cost_data),
        ("Culture", &dashboard.culture_data),
    ] {
        let parts: Vec<String> = slices.iter().map(|s| format!("{} {}", s.name, s.value)).collect();
        out.push_str(&format!("  {:<18} {}\n", title, parts.join(", ")));
    }
    let weeks: Vec<String> = dashboard
        .performance_data
        .iter()
        .map(|p| format!("{} {}/{}", p.name, p.efficiency, p.safety))
        .collect();
    out.push_str(&format!("  {:<18} {}\n", "Efficiency/safety", weeks.join(", ")));
    out
}
