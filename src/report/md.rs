use crate::types::report::{AssessmentReport, Recommendation, Status};
use crate::types::scoring::Component;

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Good => "good",
        Status::Warning => "warning",
        Status::Bad => "bad",
    }
}

pub fn to_markdown(report: &AssessmentReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Capital Readiness Report: {}\n\n", report.company_name));
    output.push_str(&format!(
        "Overall score: {}/100 ({})\n\n",
        report.overall_score,
        report.tier.label()
    ));
    if let Some(year) = report.founding_year {
        output.push_str(&format!("Founded: {year}\n\n"));
    }
    output.push_str(&format!(
        "Location: {}, {}, {}\n\n",
        report.location.city, report.location.state, report.location.country
    ));

    output.push_str("## Score Breakdown\n\n");
    for component in Component::ALL {
        output.push_str(&format!(
            "- {}: {}/100\n  {}\n",
            component.label(),
            report.breakdown.component(component),
            component.description()
        ));
    }
    output.push('\n');

    output.push_str("## Narrative Summary\n\n");
    output.push_str(&report.narrative.summary);
    output.push_str("\n\n");

    output.push_str("## Recommendations\n\n");
    output.push_str(&recommendations_markdown(&report.recommendations));
    output.push('\n');

    output.push_str("## Next Steps\n\n");
    for (index, step) in report.next_steps.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, step));
    }

    if report.is_degraded() {
        output.push_str("\n## Notes\n\n");
        for stage in &report.degraded {
            output.push_str(&format!(
                "- {:?} enrichment was unavailable; a fallback value was used.\n",
                stage
            ));
        }
    }

    output
}

pub fn recommendations_markdown(recommendations: &[Recommendation]) -> String {
    let mut output = String::new();
    if recommendations.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for recommendation in recommendations {
        output.push_str(&format!(
            "### {} [{}]\n\n",
            recommendation.title,
            status_label(recommendation.status)
        ));
        for item in &recommendation.items {
            output.push_str(&format!("- {item}\n"));
        }
        output.push('\n');
    }
    output
}
