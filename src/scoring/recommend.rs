use crate::types::report::{Category, Recommendation, Status, GOOD_THRESHOLD};
use crate::types::scoring::{Score, ScoreBreakdown};

const TEAM_GOOD: [&str; 3] = [
    "Strong technical team composition with experienced founders.",
    "Consider adding advisors with industry-specific expertise.",
    "Maintain the current leadership structure which demonstrates clear roles.",
];

const TEAM_IMPROVE: [&str; 3] = [
    "Consider adding more technical talent to your founding team.",
    "Recruit advisors with industry-specific expertise.",
    "Seek mentorship from experienced entrepreneurs in your field.",
];

const MARKET_IMPROVE: [&str; 3] = [
    "Further define your target market segments to improve positioning.",
    "Conduct additional customer interviews to validate product-market fit.",
    "Develop a more detailed competitive analysis to highlight unique advantages.",
];

const ECOSYSTEM_IMPROVE: [&str; 3] = [
    "Consider participating in local accelerator programs to improve network.",
    "Leverage nearby university partnerships for talent acquisition.",
    "Attend regional investor events to increase visibility in your ecosystem.",
];

const OPERATIONS_IMPROVE: [&str; 3] = [
    "Implement more robust financial tracking and reporting systems.",
    "Document your business processes to demonstrate scalability.",
    "Develop clear metrics for measuring growth and customer satisfaction.",
];

const NARRATIVE_IMPROVE: [&str; 3] = [
    "Refine your product description to more clearly articulate your value proposition.",
    "Emphasize unique technological innovations in your pitch materials.",
    "Develop stronger storytelling around your company's origin and mission.",
];

pub fn generate_recommendations(scores: &ScoreBreakdown) -> Vec<Recommendation> {
    let mut recommendations = Vec::with_capacity(5);

    let team_status = Status::from_score(scores.team_strength);
    let team_items: &[&str] = match team_status {
        Status::Good => &TEAM_GOOD,
        Status::Warning | Status::Bad => &TEAM_IMPROVE,
    };
    recommendations.push(Recommendation::new(
        Category::TeamDevelopment,
        team_status,
        team_items,
    ));

    for (category, score, items) in [
        (Category::MarketStrategy, scores.market_fit, &MARKET_IMPROVE),
        (
            Category::GeoEcosystemUtilization,
            scores.geo_ecosystem,
            &ECOSYSTEM_IMPROVE,
        ),
        (
            Category::OperationalEfficiency,
            scores.operational_readiness,
            &OPERATIONS_IMPROVE,
        ),
        (
            Category::NarrativeImprovement,
            scores.narrative_and_innovation,
            &NARRATIVE_IMPROVE,
        ),
    ] {
        if let Some(recommendation) = improvement(category, score, items) {
            recommendations.push(recommendation);
        }
    }

    recommendations
}

fn improvement(category: Category, score: Score, items: &[&str]) -> Option<Recommendation> {
    if score >= GOOD_THRESHOLD {
        return None;
    }
    Some(Recommendation::new(
        category,
        Status::from_score(score),
        items,
    ))
}

pub fn next_steps(scores: &ScoreBreakdown, recommendations: &[Recommendation]) -> Vec<String> {
    let ecosystem = if scores.overall_score < GOOD_THRESHOLD {
        "Strengthen your geo-ecosystem connections through networking and local resources."
    } else {
        "Continue to leverage your strong ecosystem position for partnerships and resources."
    };

    let market_needs_work = recommendations.iter().any(|recommendation| {
        recommendation.category == Category::MarketStrategy
            && recommendation.status != Status::Good
    });
    let market = if market_needs_work {
        "Refine your market strategy with more detailed customer segmentation."
    } else {
        "Maintain your strong market positioning and continue gathering customer feedback."
    };

    let operations = if scores.operational_readiness < GOOD_THRESHOLD {
        "Improve operational documentation to demonstrate scalability to investors."
    } else {
        "Continue to optimize your operational efficiency to maintain investor confidence."
    };

    vec![
        ecosystem.to_string(),
        market.to_string(),
        operations.to_string(),
    ]
}
