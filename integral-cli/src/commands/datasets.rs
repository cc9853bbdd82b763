use colored::Colorize;
use integral_dataset::{QuadrantInfo, catalog};
use std::fmt::Write;

/// Human-readable listing of every quadrant and its dataset variants.
pub fn render_catalog(quadrants: &[QuadrantInfo]) -> String {
    let mut out = String::new();
    for quadrant in quadrants {
        let _ = writeln!(
            out,
            "{} ({})",
            quadrant.title.cyan().bold(),
            quadrant.id
        );
        let _ = writeln!(out, "   {}", quadrant.description);
        for variant in &quadrant.variants {
            let _ = writeln!(
                out,
                "   {:<4} {:<14} {} [{}]",
                variant.id.to_string().yellow(),
                variant.label,
                variant.description,
                variant.resource
            );
        }
    }
    out
}

pub fn run_datasets(source: &str) {
    println!("{} {}\n", "Datasets from".bold(), source);
    print!("{}", render_catalog(&catalog()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_every_resource() {
        colored::control::set_override(false);
        let rendered = render_catalog(&catalog());
        for name in ["ul_neg.csv", "ur_pos.csv", "ll_inc.csv", "lr_neg.csv"] {
            assert!(rendered.contains(name), "missing {name}");
        }
        assert!(rendered.contains("Mixed Results"));
    }
}
