use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::{Display, Write};

/// Shown instead of the time when a format cannot be rendered
pub const UNRENDERABLE_TIME: &str = "--:--:--";

/// Whether `format` is a strftime pattern chrono can render
pub fn is_valid_time_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Format `time`, returning `None` instead of panicking on a bad pattern
pub fn format_time<Tz: TimeZone>(time: &DateTime<Tz>, format: &str) -> Option<String>
where
    Tz::Offset: Display,
{
    let mut out = String::new();
    write!(out, "{}", time.format(format)).ok()?;
    Some(out)
}

/// Digital clock state, refreshed on every tick of its timer
#[derive(Debug, Clone)]
pub struct DigitalClock {
    format: String,
    now: DateTime<Local>,
}

impl DigitalClock {
    pub fn new(format: &str) -> Self {
        Self {
            format: format.to_string(),
            now: Local::now(),
        }
    }

    pub fn refresh(&mut self, now: DateTime<Local>) {
        self.now = now;
    }

    pub fn display(&self) -> String {
        format_time(&self.now, &self.format).unwrap_or_else(|| UNRENDERABLE_TIME.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_and_format() {
        let mut clock = DigitalClock::new("%H:%M:%S");
        let at = Local.with_ymd_and_hms(2024, 5, 1, 9, 5, 7).unwrap();
        clock.refresh(at);
        assert_eq!(clock.display(), "09:05:07");
    }

    #[test]
    fn test_bad_format_falls_back() {
        let clock = DigitalClock::new("%H:%Q");
        assert_eq!(clock.display(), UNRENDERABLE_TIME);
    }

    #[test]
    fn test_format_validation() {
        assert!(is_valid_time_format("%H:%M:%S"));
        assert!(is_valid_time_format("%I:%M %p"));
        assert!(!is_valid_time_format("%Q"));
        assert!(!is_valid_time_format("%H:%Q"));
    }
}
