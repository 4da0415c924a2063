//! Relative date resolution
//!
//! Maps phrases like "yesterday" or "on tuesday" to a calendar date.

use std::sync::LazyLock;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use regex::Regex;

use super::segment::{contains_word, remove_matches};

/// Phrase groups checked in priority order, with how many days back they mean
static RELATIVE_PHRASES: &[(&[&str], u64)] = &[
    (&["yesterday", "last night"], 1),
    (&["today", "this morning", "this afternoon", "this evening", "tonight"], 0),
    (&["two days ago", "2 days ago"], 2),
    (&["three days ago", "3 days ago"], 3),
];

static WEEKDAYS: &[(&str, Weekday)] = &[
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

/// Every date phrase, including counts the resolver ignores ("12 days ago"),
/// so their numbers are not read as food quantities
static DATE_PHRASE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let mut phrases: Vec<String> = RELATIVE_PHRASES
        .iter()
        .flat_map(|(group, _)| group.iter())
        .map(|phrase| regex::escape(phrase))
        .collect();
    phrases.extend(WEEKDAYS.iter().map(|(name, _)| format!("(?:on )?{}", name)));
    phrases.push(r"\d+ days? ago".to_string());
    Regex::new(&format!(r"\b(?:{})\b", phrases.join("|"))).ok()
});

/// Resolve the date an utterance refers to. Never fails; defaults to `today`.
pub fn resolve_date(text: &str, today: NaiveDate) -> NaiveDate {
    for (phrases, days_back) in RELATIVE_PHRASES {
        if phrases.iter().any(|phrase| contains_word(text, phrase)) {
            return days_before(today, *days_back);
        }
    }

    if let Some((_, weekday)) = WEEKDAYS.iter().find(|(name, _)| contains_word(text, name)) {
        return days_before(today, days_since_last(today.weekday(), *weekday));
    }

    today
}

/// Remove date phrases from text
pub fn strip_date_phrases(text: &str) -> String {
    remove_matches(text, DATE_PHRASE_PATTERN.as_ref())
}

/// Days back to the most recent `target` strictly before a day that is
/// `current`; the same weekday means a week ago.
fn days_since_last(current: Weekday, target: Weekday) -> u64 {
    let diff = (current.num_days_from_monday() + 7 - target.num_days_from_monday()) % 7;
    if diff == 0 {
        7
    } else {
        diff as u64
    }
}

fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2026-01-15 is a Thursday
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_relative_phrases() {
        assert_eq!(resolve_date("ate pizza yesterday", today()), ymd(2026, 1, 14));
        assert_eq!(resolve_date("this morning i ran", today()), today());
        assert_eq!(resolve_date("two days ago i swam", today()), ymd(2026, 1, 13));
        assert_eq!(resolve_date("3 days ago", today()), ymd(2026, 1, 12));
    }

    #[test]
    fn test_yesterday_beats_today() {
        assert_eq!(resolve_date("yesterday, not today", today()), ymd(2026, 1, 14));
    }

    #[test]
    fn test_weekday_is_most_recent_past_occurrence() {
        assert_eq!(resolve_date("on monday", today()), ymd(2026, 1, 12));
        assert_eq!(resolve_date("on wednesday", today()), ymd(2026, 1, 14));
        assert_eq!(resolve_date("on friday", today()), ymd(2026, 1, 9));
    }

    #[test]
    fn test_same_weekday_means_last_week() {
        assert_eq!(resolve_date("on thursday", today()), ymd(2026, 1, 8));
    }

    #[test]
    fn test_weekdays_always_in_past_week() {
        for (name, _) in WEEKDAYS {
            let date = resolve_date(name, today());
            let back = (today() - date).num_days();
            assert!((1..=7).contains(&back), "{} resolved {} days back", name, back);
        }
    }

    #[test]
    fn test_phrases_match_whole_words_only() {
        assert_eq!(resolve_date("12 days ago ate an apple", today()), today());
        assert_eq!(resolve_date("13 days ago", today()), today());
        assert_eq!(resolve_date("2 days ago ate an apple", today()), ymd(2026, 1, 13));
        assert_eq!(resolve_date("todays special", today()), today());
        assert_eq!(resolve_date("mondays are rough", today()), today());
    }

    #[test]
    fn test_strip_date_phrases() {
        assert_eq!(strip_date_phrases("yesterday i ate 2 eggs"), "i ate 2 eggs");
        assert_eq!(strip_date_phrases("12 days ago ate an apple"), "ate an apple");
        assert_eq!(strip_date_phrases("pizza on friday"), "pizza");
        assert_eq!(strip_date_phrases("a big mac"), "a big mac");
    }

    #[test]
    fn test_default_is_today() {
        assert_eq!(resolve_date("ate a banana", today()), today());
        assert_eq!(resolve_date("", today()), today());
    }

    #[test]
    fn test_month_boundary() {
        assert_eq!(resolve_date("yesterday", ymd(2026, 3, 1)), ymd(2026, 2, 28));
    }
}
