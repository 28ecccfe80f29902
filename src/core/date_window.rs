use chrono::{Duration, NaiveDate};

/// Number of week slides the carousel can show.
pub const WINDOW_SIZE: usize = 5;

/// Slide holding the base date.
pub const CENTER_INDEX: usize = WINDOW_SIZE / 2;

/// Week anchors around `base`: two weeks back through two weeks forward.
///
/// Anchors fall on the same weekday as `base`. Within two weeks of chrono's
/// date range the outer anchors clamp to `NaiveDate::MIN` / `NaiveDate::MAX`,
/// so the one-week spacing does not hold there.
pub fn week_anchors(base: NaiveDate) -> [NaiveDate; WINDOW_SIZE] {
    std::array::from_fn(|slot| {
        let weeks = slot as i64 - CENTER_INDEX as i64;
        base.checked_add_signed(Duration::weeks(weeks))
            .unwrap_or(if weeks < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_centers_on_base() {
        let base = date(2024, 6, 15);
        let anchors = week_anchors(base);
        assert_eq!(
            anchors,
            [
                date(2024, 6, 1),
                date(2024, 6, 8),
                date(2024, 6, 15),
                date(2024, 6, 22),
                date(2024, 6, 29),
            ]
        );
    }

    #[test]
    fn anchors_are_one_week_apart() {
        for base in [date(2023, 12, 28), date(2024, 2, 29), date(2025, 1, 1), date(2026, 10, 19)] {
            let anchors = week_anchors(base);
            assert_eq!(anchors[CENTER_INDEX], base);
            for pair in anchors.windows(2) {
                assert_eq!((pair[1] - pair[0]).num_days(), 7);
            }
            assert!(anchors.iter().all(|a| a.weekday() == base.weekday()));
        }
    }

    #[test]
    fn window_crosses_year_boundary() {
        let anchors = week_anchors(date(2025, 1, 3));
        assert_eq!(anchors[0], date(2024, 12, 20));
        assert_eq!(anchors[4], date(2025, 1, 17));
    }

    #[test]
    fn anchors_clamp_at_date_range_limits() {
        let anchors = week_anchors(NaiveDate::MAX);
        assert_eq!(anchors[0], NaiveDate::MAX - Duration::weeks(2));
        assert_eq!(anchors[CENTER_INDEX], NaiveDate::MAX);
        assert_eq!(anchors[3], NaiveDate::MAX);
        assert_eq!(anchors[4], NaiveDate::MAX);

        let anchors = week_anchors(NaiveDate::MIN + Duration::days(3));
        assert_eq!(anchors[0], NaiveDate::MIN);
        assert_eq!(anchors[1], NaiveDate::MIN);
        assert_eq!(anchors[4], NaiveDate::MIN + Duration::days(17));
    }
}
