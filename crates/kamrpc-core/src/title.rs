//! Window-title parsing.
//!
//! During a run the game writes its counters straight into the window
//! title, e.g. `I Wanna Kill The Kamilia 3 Death:1234 Time:0:59:31`. In
//! menus and on loading screens the counters are absent.

use std::sync::LazyLock;

use regex::Regex;

/// Counters captured from an in-game window title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayStats {
    pub deaths: u64,
    pub elapsed_secs: u64,
}

// Hours, minutes and seconds are each 1-2 digits. Minutes and seconds are
// deliberately not bounded to 0-59; the captured values are used as-is.
static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Death:(\d+)\s+Time:(\d{1,2}):(\d{1,2}):(\d{1,2})").expect("valid regex")
});

/// Extract play counters from a window title.
///
/// Returns `None` when the title does not carry the counter block, which
/// is the normal shape of the title outside of a run.
pub fn parse_title(title: &str) -> Option<PlayStats> {
    let caps = TITLE_PATTERN.captures(title)?;

    let deaths: u64 = caps[1].parse().ok()?;
    let hours: u64 = caps[2].parse().ok()?;
    let minutes: u64 = caps[3].parse().ok()?;
    let seconds: u64 = caps[4].parse().ok()?;

    Some(PlayStats {
        deaths,
        elapsed_secs: hours * 3600 + minutes * 60 + seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_counters() {
        let stats = parse_title("Death:7 Time:1:02:03").unwrap();
        assert_eq!(stats.deaths, 7);
        assert_eq!(stats.elapsed_secs, 3723);
    }

    #[test]
    fn parses_counters_with_surrounding_text() {
        let stats =
            parse_title("I Wanna Kill The Kamilia 3 Death:1234 Time:12:34:56").unwrap();
        assert_eq!(stats.deaths, 1234);
        assert_eq!(stats.elapsed_secs, 12 * 3600 + 34 * 60 + 56);
    }

    #[test]
    fn accepts_single_digit_time_fields() {
        let stats = parse_title("Death:0 Time:0:0:0").unwrap();
        assert_eq!(stats.deaths, 0);
        assert_eq!(stats.elapsed_secs, 0);
    }

    #[test]
    fn accepts_minutes_and_seconds_above_59() {
        // The title format does not promise normalized fields; raw values
        // are summed as-is.
        let stats = parse_title("Death:1 Time:0:99:99").unwrap();
        assert_eq!(stats.elapsed_secs, 99 * 60 + 99);
    }

    #[test]
    fn tolerates_multiple_spaces_between_fields() {
        let stats = parse_title("Death:5   Time:2:10:30").unwrap();
        assert_eq!(stats.deaths, 5);
        assert_eq!(stats.elapsed_secs, 2 * 3600 + 10 * 60 + 30);
    }

    #[test]
    fn menu_title_does_not_parse() {
        assert_eq!(parse_title("I Wanna Kill The Kamilia 3"), None);
        assert_eq!(parse_title("Some Random Title"), None);
    }

    #[test]
    fn partial_counter_block_does_not_parse() {
        assert_eq!(parse_title("Death:7"), None);
        assert_eq!(parse_title("Death:7 Time:1:02"), None);
        assert_eq!(parse_title("Time:1:02:03"), None);
    }

    #[test]
    fn three_digit_time_field_does_not_parse() {
        // `\d{1,2}` per field; a three-digit hours group cannot match with
        // the colon that follows it.
        assert_eq!(parse_title("Death:7 Time:123:02:03"), None);
    }
}
