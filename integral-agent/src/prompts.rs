//! Prompt templates for the quadrant analysts and the orchestrator.

use integral_core::{AgentSummaries, DatasetVariant, Quadrant};

/// User message of the connectivity probe.
pub const PROBE_MESSAGE: &str = "Hello";

pub fn quadrant_system_prompt(quadrant: Quadrant) -> &'static str {
    match quadrant {
        Quadrant::Ul => {
            "Analyze the driver sleep and mood data focusing on:
1. Average sleep duration and quality trends
2. Mood patterns and emotional well-being
3. Correlation between sleep quality and mood
4. Individual driver wellness indicators
5. Recommendations for improving sleep and emotional health"
        }
        Quadrant::Ur => {
            "Analyze the operational performance data focusing on:
1. Hours on road vs break time ratios
2. Delivery throughput and efficiency
3. Schedule adherence patterns
4. Productivity and safety indicators
5. Operational optimization recommendations"
        }
        Quadrant::Ll => {
            "Analyze the cultural and relational data focusing on:
1. Vendor relationship quality trends
2. Organizational culture sentiment
3. Appreciation and recognition patterns
4. Interpersonal dynamics and morale
5. Cultural improvement recommendations"
        }
        Quadrant::Lr => {
            "Analyze the business performance data focusing on:
1. Revenue and cost trend analysis
2. Safety incident patterns
3. Regulatory compliance metrics
4. Financial performance indicators
5. Business optimization recommendations"
        }
    }
}

pub fn quadrant_user_prompt(quadrant: Quadrant, variant: DatasetVariant, data: &str) -> String {
    format!(
        "Please analyze the following {} dataset for the {} quadrant:\n\n{}\n\nProvide a comprehensive summary of key insights, patterns, and recommendations based on the data available.",
        variant.id(),
        quadrant.name(),
        data
    )
}

pub const ORCHESTRATOR_SYSTEM_PROMPT: &str = "You are the Integral Orchestrator that synthesizes insights from four specialist agents (UL, UR, LL, LR) using Ken Wilber's Integral Theory framework.

Your role is to:
1. Synthesize the individual agent analyses into a cohesive understanding
2. Identify patterns and correlations across all four quadrants
3. Provide holistic recommendations that address all levels of the system
4. Create a comprehensive 90-day action plan that balances all perspectives
5. Ensure recommendations consider individual, collective, internal, and external dimensions

Please provide a balanced, integral analysis that considers the interplay between all four quadrants.";

/// The four analyses labelled by quadrant code, in canonical order.
pub fn synthesis_input(summaries: &AgentSummaries) -> String {
    summaries
        .iter()
        .map(|(quadrant, text)| format!("{}: {}", quadrant.code(), text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn orchestrator_user_prompt(summaries: &AgentSummaries) -> String {
    format!(
        "Please synthesize the following analyses from the four Integral Theory quadrants and provide a comprehensive integrated assessment with a 90-day action plan:

{}

Please provide:

1. EXECUTIVE SUMMARY: A concise overview of the key findings across all quadrants

2. CROSS-QUADRANT ANALYSIS: Identify specific patterns, correlations, and tensions between quadrants with concrete examples

3. INTEGRATED RECOMMENDATIONS: Specific, actionable recommendations that address root causes by leveraging strengths from multiple quadrants

4. 90-DAY ACTION PLAN: A detailed, phased plan organized by weeks with:
   - Specific actions for each week
   - Which quadrant insights each action addresses
   - Expected outcomes and success metrics
   - Resources needed
   - Priority level (High/Medium/Low)

5. IMPLEMENTATION CONSIDERATIONS:
   - Potential challenges and mitigation strategies
   - Change management recommendations
   - Measurement and evaluation framework
   - Long-term sustainability plan

Format your response with clear headings and bullet points. Be specific and actionable - cite specific data points and insights from each quadrant to support your recommendations.",
        synthesis_input(summaries)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_embeds_data() {
        let prompt = quadrant_user_prompt(Quadrant::Ul, DatasetVariant::Negative, "a,b\n1,2");
        assert!(prompt.starts_with(
            "Please analyze the following neg dataset for the Individual Internal (UL) quadrant:\n\na,b\n1,2\n\n"
        ));
    }

    #[test]
    fn test_synthesis_input_order_and_labels() {
        let mut summaries = AgentSummaries::default();
        for (quadrant, text) in [
            (Quadrant::Lr, "four"),
            (Quadrant::Ul, "one"),
            (Quadrant::Ll, "three"),
            (Quadrant::Ur, "two"),
        ] {
            summaries.set(quadrant, text);
        }
        assert_eq!(synthesis_input(&summaries), "UL: one\n\nUR: two\n\nLL: three\n\nLR: four");
        assert!(orchestrator_user_prompt(&summaries).contains("UL: one\n\nUR: two"));
    }

    #[test]
    fn test_each_quadrant_has_its_own_template() {
        let prompts: std::collections::HashSet<_> =
            Quadrant::ALL.into_iter().map(quadrant_system_prompt).collect();
        assert_eq!(prompts.len(), 4);
    }
}
