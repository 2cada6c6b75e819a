//! Weekly opening hours of a store.
//!
//! The backend keeps the schedule as one flat string:
//! `"Sunday: 09:00–17:00, Monday: Closed, ..."`. The form edits it as
//! seven [`DaySchedule`] rows. [`StoreHours::parse`] never fails: a
//! segment it cannot read leaves that day closed.

use serde::{Deserialize, Serialize};

/// Separator written between open and close times
pub const EN_DASH: char = '–';

/// Canonical weekday keys, Sunday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    /// Case-insensitive lookup by English name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Hours of a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub open: String,
    pub close: String,
    pub closed: bool,
}

impl DaySchedule {
    pub fn closed() -> Self {
        Self {
            open: String::new(),
            close: String::new(),
            closed: true,
        }
    }

    pub fn open(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            closed: false,
        }
    }

    /// A day renders as Closed unless both times are present
    pub fn is_effectively_closed(&self) -> bool {
        self.closed || self.open.is_empty() || self.close.is_empty()
    }
}

impl Default for DaySchedule {
    fn default() -> Self {
        Self::closed()
    }
}

/// Full weekly schedule. Always holds all seven days.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreHours {
    days: [DaySchedule; 7],
}

impl StoreHours {
    /// Every day closed with empty times
    pub fn all_closed() -> Self {
        Self::default()
    }

    pub fn day(&self, day: Weekday) -> &DaySchedule {
        &self.days[day.index()]
    }

    pub fn set(&mut self, day: Weekday, schedule: DaySchedule) {
        self.days[day.index()] = schedule;
    }

    /// Iterate days in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> {
        Weekday::ALL.into_iter().zip(self.days.iter())
    }

    /// Picking an opening time reopens the day
    pub fn set_open_time(&mut self, day: Weekday, time: impl Into<String>) {
        let entry = &mut self.days[day.index()];
        entry.open = time.into();
        entry.closed = false;
    }

    /// Picking a closing time reopens the day
    pub fn set_close_time(&mut self, day: Weekday, time: impl Into<String>) {
        let entry = &mut self.days[day.index()];
        entry.close = time.into();
        entry.closed = false;
    }

    /// Closing a day wipes both times
    pub fn set_closed(&mut self, day: Weekday, closed: bool) {
        if closed {
            self.days[day.index()] = DaySchedule::closed();
        } else {
            self.days[day.index()].closed = false;
        }
    }

    /// Read the backend string form.
    ///
    /// Segments are comma separated. Each one must start with a weekday
    /// name followed by `:`; anything else is skipped. `Closed` (any case)
    /// closes the day, otherwise the value is split on `-` or `–`. A later
    /// segment for the same day overrides an earlier one.
    pub fn parse(text: &str) -> Self {
        let mut hours = Self::all_closed();
        if text.trim().is_empty() {
            return hours;
        }

        for segment in text.split(',').map(str::trim) {
            let Some((name, value)) = segment.split_once(':') else {
                continue;
            };
            let Some(day) = Weekday::from_name(name.trim_end()) else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            if value.eq_ignore_ascii_case("closed") {
                hours.set(day, DaySchedule::closed());
                continue;
            }

            let mut parts = value.split(['-', EN_DASH]).map(str::trim);
            let open = parts.next().unwrap_or_default();
            let close = parts.next().unwrap_or_default();
            if !open.is_empty() && !close.is_empty() {
                hours.set(day, DaySchedule::open(open, close));
            }
        }

        hours
    }

    /// Write the backend string form: seven entries, canonical order
    pub fn format(&self) -> String {
        self.iter()
            .map(|(day, schedule)| {
                if schedule.is_effectively_closed() {
                    format!("{}: Closed", day.name())
                } else {
                    format!(
                        "{}: {}{}{}",
                        day.name(),
                        schedule.open,
                        EN_DASH,
                        schedule.close
                    )
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Selectable times in the hours editor: 06:00 through 23:00
pub fn hour_options() -> Vec<String> {
    (6..=23).map(|h| format!("{:02}:00", h)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StoreHours {
        let mut hours = StoreHours::all_closed();
        hours.set(Weekday::Sunday, DaySchedule::open("08:00", "20:00"));
        hours.set(Weekday::Monday, DaySchedule::open("09:00", "17:00"));
        hours.set(Weekday::Friday, DaySchedule::open("07:00", "14:00"));
        hours
    }

    #[test]
    fn test_parse_empty_is_all_closed() {
        let hours = StoreHours::parse("");
        assert_eq!(hours, StoreHours::all_closed());
        for (_, day) in hours.iter() {
            assert!(day.closed);
            assert!(day.open.is_empty());
            assert!(day.close.is_empty());
        }
        assert_eq!(StoreHours::parse("   "), StoreHours::all_closed());
    }

    #[test]
    fn test_format_then_parse_round_trip() {
        let hours = sample();
        assert_eq!(StoreHours::parse(&hours.format()), hours);

        let mut open_all_week = StoreHours::all_closed();
        for day in Weekday::ALL {
            open_all_week.set(day, DaySchedule::open("06:00", "23:00"));
        }
        assert_eq!(StoreHours::parse(&open_all_week.format()), open_all_week);
        assert_eq!(
            StoreHours::parse(&StoreHours::all_closed().format()),
            StoreHours::all_closed()
        );
    }

    #[test]
    fn test_format_always_seven_entries() {
        let text = StoreHours::parse("Tuesday: 10:00-12:00").format();
        let entries: Vec<&str> = text.split(", ").collect();
        assert_eq!(entries.len(), 7);
        for (entry, day) in entries.iter().zip(Weekday::ALL) {
            assert!(entry.starts_with(day.name()));
        }
        assert_eq!(entries[2], "Tuesday: 10:00–12:00");
        assert_eq!(entries[0], "Sunday: Closed");
    }

    #[test]
    fn test_format_canonical_text() {
        assert_eq!(
            sample().format(),
            "Sunday: 08:00–20:00, Monday: 09:00–17:00, Tuesday: Closed, \
             Wednesday: Closed, Thursday: Closed, Friday: 07:00–14:00, Saturday: Closed"
        );
    }

    #[test]
    fn test_unknown_day_is_ignored() {
        let hours = StoreHours::parse("Monday: Closed, InvalidDay: 9-5");
        assert_eq!(hours, StoreHours::all_closed());
        assert!(hours.day(Weekday::Monday).closed);
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_separators() {
        let hours = StoreHours::parse("monday : 09:00 - 17:00,TUESDAY:10:00–18:00, wednesday: CLOSED");
        assert_eq!(hours.day(Weekday::Monday), &DaySchedule::open("09:00", "17:00"));
        assert_eq!(hours.day(Weekday::Tuesday), &DaySchedule::open("10:00", "18:00"));
        assert_eq!(hours.day(Weekday::Wednesday), &DaySchedule::closed());
    }

    #[test]
    fn test_hyphen_input_reformats_with_en_dash() {
        let text = StoreHours::parse("Sunday: 08:00-12:00").format();
        assert!(text.starts_with("Sunday: 08:00–12:00, "));
    }

    #[test]
    fn test_half_range_keeps_day_closed() {
        let hours = StoreHours::parse("Monday: 09:00-, Tuesday: -17:00, Wednesday: 09:00");
        assert_eq!(hours, StoreHours::all_closed());
    }

    #[test]
    fn test_later_segment_overrides_earlier() {
        let hours = StoreHours::parse("Monday: 09:00-17:00, Monday: Closed");
        assert!(hours.day(Weekday::Monday).closed);
    }

    #[test]
    fn test_open_day_with_missing_time_formats_as_closed() {
        let mut hours = StoreHours::all_closed();
        hours.set_open_time(Weekday::Monday, "09:00");
        assert!(!hours.day(Weekday::Monday).closed);
        assert!(hours.format().contains("Monday: Closed"));
    }

    #[test]
    fn test_set_closed_clears_times() {
        let mut hours = sample();
        hours.set_closed(Weekday::Sunday, true);
        assert_eq!(hours.day(Weekday::Sunday), &DaySchedule::closed());

        hours.set_close_time(Weekday::Sunday, "18:00");
        let sunday = hours.day(Weekday::Sunday);
        assert!(!sunday.closed);
        assert_eq!(sunday.close, "18:00");
        assert!(sunday.open.is_empty());
    }

    #[test]
    fn test_hour_options() {
        let options = hour_options();
        assert_eq!(options.len(), 18);
        assert_eq!(options.first().map(String::as_str), Some("06:00"));
        assert_eq!(options.last().map(String::as_str), Some("23:00"));
    }
}
