//! Clock string parsing and wrapped durations.

/// Parses `HH:MM` (seconds tolerated and ignored) into minutes since
/// midnight. Malformed input fails the single comparison, not the whole
/// employee, so this returns `None` instead of an error.
pub fn parse_clock(raw: &str) -> Option<u32> {
    let mut parts = raw.trim().splitn(3, ':');
    let hours: u32 = parts.next()?.trim().parse().ok()?;
    let minutes: u32 = parts.next()?.trim().parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Minutes from `start` to `end`, interpreted as crossing midnight when
/// negative.
pub fn wrapped_duration(start: u32, end: u32) -> u32 {
    if end >= start {
        end - start
    } else {
        end + 1440 - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_clocks_parse() {
        assert_eq!(parse_clock("09:30"), Some(570));
        assert_eq!(parse_clock("9:05"), Some(545));
        assert_eq!(parse_clock("00:00"), Some(0));
        assert_eq!(parse_clock("23:59"), Some(1439));
        assert_eq!(parse_clock(" 10:15 "), Some(615));
        assert_eq!(parse_clock("18:00:27"), Some(1080));
    }

    #[test]
    fn malformed_clocks_are_none() {
        assert_eq!(parse_clock(""), None);
        assert_eq!(parse_clock("A"), None);
        assert_eq!(parse_clock("930"), None);
        assert_eq!(parse_clock("24:00"), None);
        assert_eq!(parse_clock("09:60"), None);
        assert_eq!(parse_clock("09:-5"), None);
    }

    #[test]
    fn durations_wrap_across_midnight() {
        assert_eq!(wrapped_duration(570, 1080), 510);
        assert_eq!(wrapped_duration(1320, 390), 510);
        assert_eq!(wrapped_duration(600, 600), 0);
    }
}
