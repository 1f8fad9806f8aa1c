//! View state owned by the dashboard: selected month and page cursor

use std::fmt;
use std::str::FromStr;

use shared::CONFIG;
use thiserror::Error;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar month filter, always 1-12
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(u8);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid month value '{0}', expected an integer from 1 to 12")]
pub struct InvalidMonth(pub String);

impl Month {
    pub const MARCH: Month = Month(3);

    pub fn new(number: u8) -> Option<Self> {
        (1..=12).contains(&number).then_some(Self(number))
    }

    /// Month the selector starts on
    pub fn initial() -> Self {
        Self::new(CONFIG.default_month).unwrap_or(Self::MARCH)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        self.0
            .checked_sub(1)
            .and_then(|index| MONTH_NAMES.get(usize::from(index)))
            .copied()
            .unwrap_or_default()
    }

    /// January through December
    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Month)
    }
}

impl FromStr for Month {
    type Err = InvalidMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Month::new)
            .ok_or_else(|| InvalidMonth(s.to_string()))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based page index for the transactions query
///
/// Never drops below 1. There is no upper bound: past the last page the
/// backend answers with an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageCursor(u32);

impl PageCursor {
    pub const FIRST: PageCursor = PageCursor(1);

    pub fn get(self) -> u32 {
        self.0
    }

    /// Step back one page. Returns false (and stays put) on the first page.
    pub fn previous(&mut self) -> bool {
        if self.0 > 1 {
            self.0 -= 1;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_bounds() {
        assert_eq!(Month::new(0), None);
        assert_eq!(Month::new(13), None);
        assert_eq!(Month::new(1).map(Month::number), Some(1));
        assert_eq!(Month::new(12).map(Month::name), Some("December"));
        assert_eq!(Month::all().count(), 12);
    }

    #[test]
    fn test_month_name_out_of_range_is_empty() {
        assert_eq!(Month(0).name(), "");
        assert_eq!(Month(13).name(), "");
        assert_eq!(Month(1).name(), "January");
    }

    #[test]
    fn test_month_from_select_value() {
        assert_eq!("7".parse::<Month>(), Ok(Month(7)));
        assert_eq!(" 11 ".parse::<Month>(), Ok(Month(11)));
        assert!("0".parse::<Month>().is_err());
        assert!("march".parse::<Month>().is_err());
        assert!("".parse::<Month>().is_err());
    }

    #[test]
    fn test_initial_month_is_march() {
        assert_eq!(Month::initial(), Month::MARCH);
        assert_eq!(Month::initial().name(), "March");
    }

    #[test]
    fn test_page_cursor_stops_at_first_page() {
        let mut page = PageCursor::default();
        assert_eq!(page.get(), 1);
        assert!(!page.previous());
        assert_eq!(page.get(), 1);

        page.next();
        page.next();
        assert_eq!(page.get(), 3);
        assert!(page.previous());
        assert_eq!(page.get(), 2);
    }

    #[test]
    fn test_page_cursor_has_no_upper_bound() {
        let mut page = PageCursor::FIRST;
        for _ in 0..1000 {
            page.next();
        }
        assert_eq!(page.get(), 1001);

        let mut last = PageCursor(u32::MAX);
        last.next();
        assert_eq!(last.get(), u32::MAX);
    }
}
