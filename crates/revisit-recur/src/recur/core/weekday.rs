//! Day-of-week tokens for weekly patterns.

use std::fmt;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Returns the three-letter abbreviation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "MON",
            Self::Tuesday => "TUE",
            Self::Wednesday => "WED",
            Self::Thursday => "THU",
            Self::Friday => "FRI",
            Self::Saturday => "SAT",
            Self::Sunday => "SUN",
        }
    }

    /// Parses a weekday from a three-letter abbreviation (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "MON" => Self::Monday,
            "TUE" => Self::Tuesday,
            "WED" => Self::Wednesday,
            "THU" => Self::Thursday,
            "FRI" => Self::Friday,
            "SAT" => Self::Saturday,
            "SUN" => Self::Sunday,
            _ => return None,
        })
    }

    /// Returns all weekdays in order (Monday through Sunday).
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }

    /// Returns the equivalent `chrono` weekday.
    #[must_use]
    pub const fn to_chrono(self) -> chrono::Weekday {
        match self {
            Self::Monday => chrono::Weekday::Mon,
            Self::Tuesday => chrono::Weekday::Tue,
            Self::Wednesday => chrono::Weekday::Wed,
            Self::Thursday => chrono::Weekday::Thu,
            Self::Friday => chrono::Weekday::Fri,
            Self::Saturday => chrono::Weekday::Sat,
            Self::Sunday => chrono::Weekday::Sun,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_parse() {
        assert_eq!(Weekday::parse("MON"), Some(Weekday::Monday));
        assert_eq!(Weekday::parse("fri"), Some(Weekday::Friday));
        assert_eq!(Weekday::parse("XX"), None);
    }

    #[test]
    fn weekday_all_in_order() {
        let days = Weekday::all();
        assert_eq!(days[0], Weekday::Monday);
        assert_eq!(days[6], Weekday::Sunday);
    }

    #[test]
    fn weekday_to_chrono() {
        assert_eq!(Weekday::Monday.to_chrono(), chrono::Weekday::Mon);
        assert_eq!(Weekday::Sunday.to_chrono(), chrono::Weekday::Sun);
    }
}
