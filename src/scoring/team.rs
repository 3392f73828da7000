use crate::types::profile::TeamProfile;
use crate::types::scoring::Score;

pub fn team_strength_score(team: &TeamProfile) -> Score {
    let mut score: Score = 0;

    // Zero founders earns nothing here, unlike the floors below.
    if team.founder_count >= 3 {
        score += 25;
    } else if team.founder_count == 2 {
        score += 20;
    } else if team.founder_count == 1 {
        score += 15;
    }

    if team.team_size >= 10 {
        score += 25;
    } else if team.team_size >= 5 {
        score += 20;
    } else if team.team_size >= 2 {
        score += 15;
    } else {
        score += 10;
    }

    if team.tech_background_percentage >= 70.0 {
        score += 25;
    } else if team.tech_background_percentage >= 50.0 {
        score += 20;
    } else if team.tech_background_percentage >= 30.0 {
        score += 15;
    } else {
        score += 10;
    }

    if team.previous_startups >= 3 {
        score += 25;
    } else if team.previous_startups >= 1 {
        score += 15;
    } else {
        score += 5;
    }

    score
}
