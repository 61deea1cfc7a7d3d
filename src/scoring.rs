/// Starting score for a round before deductions.
pub const BASE_SCORE: i64 = 10000;
/// Points lost per second of play.
pub const TIME_PENALTY_PER_SEC: f64 = 100.0;
/// Ceiling on the time deduction; after 50s time stops costing points.
pub const MAX_TIME_PENALTY: f64 = 5000.0;
/// Flat cost per mistake, whenever it was committed.
pub const MISTAKE_PENALTY: i64 = 500;

/// Score a finished round from elapsed time and mistake count.
pub fn score_round(elapsed_secs: f64, mistakes: u32) -> i64 {
    let time_deduction = (elapsed_secs * TIME_PENALTY_PER_SEC).min(MAX_TIME_PENALTY);
    let mistake_deduction = mistakes as i64 * MISTAKE_PENALTY;
    let score = (BASE_SCORE as f64 - time_deduction).floor() as i64 - mistake_deduction;
    score.max(0)
}

/// Final session score: floored mean of the per-round scores.
/// `None` when no rounds have completed.
pub fn finalize_session(per_round_scores: &[i64]) -> Option<i64> {
    if per_round_scores.is_empty() {
        return None;
    }
    let sum: i64 = per_round_scores.iter().sum();
    Some(sum / per_round_scores.len() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_round() {
        assert_eq!(score_round(0.0, 0), 10000);
    }

    #[test]
    fn test_time_penalty_caps_at_fifty_seconds() {
        assert_eq!(score_round(50.0, 0), 5000);
        assert_eq!(score_round(60.0, 0), 5000);
        assert_eq!(score_round(1000.0, 0), 5000);
    }

    #[test]
    fn test_each_mistake_costs_five_hundred() {
        assert_eq!(score_round(0.0, 1), 9500);
        assert_eq!(score_round(0.0, 4), 8000);
    }

    #[test]
    fn test_score_never_goes_negative() {
        assert_eq!(score_round(0.0, 20), 0);
        assert_eq!(score_round(1000.0, 1000), 0);
    }

    #[test]
    fn test_fractional_seconds_floor() {
        // 10000 - 333.5 = 9666.5, floored.
        assert_eq!(score_round(3.335, 0), 9666);
    }

    #[test]
    fn test_combined_deductions() {
        assert_eq!(score_round(10.0, 2), 8000);
    }

    #[test]
    fn test_finalize_is_the_floored_mean() {
        assert_eq!(
            finalize_session(&[10000, 8000, 6000, 4000, 2000]),
            Some(6000)
        );
        assert_eq!(finalize_session(&[9999, 9998]), Some(9998));
    }

    #[test]
    fn test_finalize_single_round() {
        assert_eq!(finalize_session(&[7500]), Some(7500));
    }

    #[test]
    fn test_finalize_empty_session() {
        assert_eq!(finalize_session(&[]), None);
    }
}
