use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Lookup key for a day's recipe assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DayKey(pub NaiveDate);

impl DayKey {
    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %a"))
    }
}

/// One column of a week slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub day_of_month: u32,
}

impl DayCell {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weekday: date.weekday(),
            day_of_month: date.day(),
        }
    }

    pub fn key(&self) -> DayKey {
        DayKey(self.date)
    }
}

/// The Sunday on or before `anchor`, or `NaiveDate::MIN` if that Sunday is
/// out of range.
pub fn week_start(anchor: NaiveDate) -> NaiveDate {
    let back = anchor.weekday().num_days_from_sunday() as i64;
    anchor
        .checked_sub_signed(Duration::days(back))
        .unwrap_or(NaiveDate::MIN)
}

/// Seven cells, Sunday through Saturday, for the week containing `anchor`.
///
/// In the partial weeks at either end of chrono's date range, columns that
/// cannot be represented repeat the nearest valid date.
pub fn day_grid(anchor: NaiveDate) -> [DayCell; 7] {
    let start = week_start(anchor);
    std::array::from_fn(|col| {
        let date = start
            .checked_add_signed(Duration::days(col as i64))
            .unwrap_or(NaiveDate::MAX);
        DayCell::new(date)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_starts_on_sunday() {
        // 2024-06-15 is a Saturday
        let cells = day_grid(date(2024, 6, 15));
        assert_eq!(cells[0].date, date(2024, 6, 9));
        assert_eq!(cells[6].date, date(2024, 6, 15));
        let weekdays: Vec<Weekday> = cells.iter().map(|c| c.weekday).collect();
        assert_eq!(
            weekdays,
            [Weekday::Sun, Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri, Weekday::Sat]
        );
    }

    #[test]
    fn sunday_anchor_is_first_column() {
        let cells = day_grid(date(2024, 6, 16));
        assert_eq!(cells[0].date, date(2024, 6, 16));
        assert_eq!(cells[6].day_of_month, 22);
    }

    #[test]
    fn day_numbers_wrap_at_month_end() {
        // Week of Sun 2024-03-31 .. Sat 2024-04-06
        let cells = day_grid(date(2024, 4, 3));
        let days: Vec<u32> = cells.iter().map(|c| c.day_of_month).collect();
        assert_eq!(days, vec![31, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn days_increase_modulo_month_length() {
        let mut anchor = date(2024, 1, 1);
        while anchor < date(2025, 1, 1) {
            let cells = day_grid(anchor);
            for pair in cells.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                assert!(b.day_of_month == a.day_of_month + 1 || b.day_of_month == 1);
                assert_eq!(b.date, a.date.succ_opt().unwrap());
            }
            anchor += Duration::days(3);
        }
    }

    #[test]
    fn every_anchor_in_a_week_gives_same_grid() {
        let expected = day_grid(date(2024, 6, 9));
        for d in 9..=15 {
            assert_eq!(day_grid(date(2024, 6, d)), expected);
        }
    }

    #[test]
    fn key_follows_cell_date() {
        let cell = day_grid(date(2024, 6, 18))[2];
        assert_eq!(cell.weekday, Weekday::Tue);
        assert_eq!(cell.key(), DayKey(date(2024, 6, 18)));
        assert_eq!(cell.key().to_string(), "2024-06-18 Tue");
    }

    #[test]
    fn grid_clamps_at_date_range_limits() {
        let last = day_grid(NaiveDate::MAX);
        assert_eq!(last[6].date, NaiveDate::MAX);
        assert!(last.windows(2).all(|p| p[0].date <= p[1].date));

        let first = day_grid(NaiveDate::MIN);
        assert_eq!(first[0].date, NaiveDate::MIN);
        assert!(first.windows(2).all(|p| p[0].date <= p[1].date));
    }
}
