//! Ratios derived from stored counters. All of these are total: a zero
//! denominator yields zero.

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub fn win_percentage(wins: i32, losses: i32) -> f64 {
    let total = wins as i64 + losses as i64;
    if total == 0 {
        return 0.0;
    }
    round2(100.0 * wins as f64 / total as f64)
}

pub fn goals_per_game(goals: i32, wins: i32, losses: i32) -> f64 {
    let total = wins as i64 + losses as i64;
    if total == 0 {
        return 0.0;
    }
    round2(goals as f64 / total as f64)
}

pub fn shot_accuracy(shots: i32, shots_on_target: i32) -> f64 {
    if shots == 0 {
        return 0.0;
    }
    round2(100.0 * shots_on_target as f64 / shots as f64)
}

pub fn goal_contributions(goals: i32, assists: i32) -> i64 {
    goals as i64 + assists as i64
}
