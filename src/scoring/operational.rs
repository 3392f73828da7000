use crate::types::profile::TractionProfile;
use crate::types::scoring::Score;

pub fn operational_readiness_score(traction: &TractionProfile) -> Score {
    revenue_points(traction.monthly_revenue)
        + user_points(traction.user_count)
        + growth_points(traction.growth_rate)
}

fn revenue_points(monthly_revenue: f64) -> Score {
    if monthly_revenue >= 50_000.0 {
        40
    } else if monthly_revenue >= 20_000.0 {
        30
    } else if monthly_revenue >= 10_000.0 {
        20
    } else if monthly_revenue > 0.0 {
        10
    } else {
        0
    }
}

fn user_points(user_count: u64) -> Score {
    if user_count >= 10_000 {
        30
    } else if user_count >= 1_000 {
        20
    } else if user_count >= 100 {
        10
    } else if user_count > 0 {
        5
    } else {
        0
    }
}

fn growth_points(growth_rate: f64) -> Score {
    if growth_rate >= 50.0 {
        30
    } else if growth_rate >= 20.0 {
        20
    } else if growth_rate >= 10.0 {
        10
    } else if growth_rate > 0.0 {
        5
    } else {
        0
    }
}
