//! Word prioritisation and selection.

pub mod scheduler;

use crate::types::WordRecord;
use chrono::{DateTime, Duration, Utc};

pub use scheduler::{Scheduler, DEFAULT_HISTORY_CAPACITY};

/// Length of the protected window in days.
pub const PROTECTED_WINDOW_DAYS: i64 = 3;

/// Interval after a word is asked during which it is deprioritised.
pub fn protected_window() -> Duration {
    Duration::days(PROTECTED_WINDOW_DAYS)
}

/// Selection priority of a word.
///
/// Long correct streaks shrink the score and past mistakes grow it. A word
/// that has never been answered correctly scores 0.
pub fn weight(word: &WordRecord) -> f64 {
    let times_correct = f64::from(word.times_correct);
    let streak = f64::from(word.consecutive_correct) + 1.0;
    let mistakes = f64::from(word.incorrect_count) + 1.0;
    (times_correct / streak) * mistakes
}

/// Whether `last_asked` falls inside `window` before `now`.
///
/// Never-asked words are outside every window; a timestamp ahead of `now`
/// counts as inside.
pub fn is_within_window(
    last_asked: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    window: Duration,
) -> bool {
    match last_asked {
        Some(asked) => now - asked < window,
        None => false,
    }
}

/// [`is_within_window`] with the default three-day window.
pub fn is_within_protected_window(last_asked: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    is_within_window(last_asked, now, protected_window())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(times_correct: u32, consecutive_correct: u32, incorrect_count: u32) -> WordRecord {
        WordRecord {
            times_correct,
            consecutive_correct,
            incorrect_count,
            ..WordRecord::new("w", "")
        }
    }

    #[test]
    fn weight_matches_formula() {
        assert_eq!(weight(&word(5, 1, 2)), 7.5);
        assert_eq!(weight(&word(1, 0, 0)), 1.0);
        assert_eq!(weight(&word(6, 2, 0)), 2.0);
    }

    #[test]
    fn unanswered_word_weighs_zero() {
        for incorrect in [0, 1, 7, 100] {
            assert_eq!(weight(&word(0, 0, incorrect)), 0.0);
        }
    }

    #[test]
    fn streak_lowers_weight() {
        assert!(weight(&word(4, 3, 0)) < weight(&word(4, 0, 0)));
    }

    #[test]
    fn never_asked_is_outside_window() {
        assert!(!is_within_protected_window(None, Utc::now()));
    }

    #[test]
    fn window_boundary_is_exclusive() {
        let now = Utc::now();
        let exactly = now - Duration::milliseconds(259_200_000);
        let just_inside = exactly + Duration::milliseconds(1);
        assert!(!is_within_protected_window(Some(exactly), now));
        assert!(is_within_protected_window(Some(just_inside), now));
    }

    #[test]
    fn old_ask_is_outside_window() {
        let now = Utc::now();
        assert!(!is_within_protected_window(Some(now - Duration::days(10)), now));
        assert!(is_within_protected_window(Some(now - Duration::hours(1)), now));
    }

    #[test]
    fn future_timestamp_is_inside_window() {
        let now = Utc::now();
        assert!(is_within_protected_window(Some(now + Duration::hours(2)), now));
    }

    #[test]
    fn custom_window() {
        let now = Utc::now();
        let asked = Some(now - Duration::hours(2));
        assert!(!is_within_window(asked, now, Duration::hours(1)));
        assert!(is_within_window(asked, now, Duration::hours(3)));
        assert!(!is_within_window(asked, now, Duration::zero()));
    }
}
