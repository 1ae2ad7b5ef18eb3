use chrono::NaiveDateTime;

/// Shown when no usable `life_expectancy` is configured.
pub const UNSET_TEXT: &str = "Set your life expectancy in config.json";
/// Shown once the target date has been reached.
pub const REACHED_TEXT: &str = "Congratulations!";

const DAYS_PER_YEAR: i64 = 365;
const DAYS_PER_WEEK: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// `Life: {y}y {w}w {d}d`
    #[default]
    YearsWeeksDays,
    /// `Life: {n} days`
    TotalDays,
}

impl DisplayMode {
    pub fn toggle(self) -> Self {
        match self {
            DisplayMode::YearsWeeksDays => DisplayMode::TotalDays,
            DisplayMode::TotalDays => DisplayMode::YearsWeeksDays,
        }
    }
}

/// Split a day count into fixed 365-day years, 7-day weeks and the days left
/// over. Leap years are ignored.
pub fn breakdown(days_total: i64) -> (i64, i64, i64) {
    let years = days_total.div_euclid(DAYS_PER_YEAR);
    let rest = days_total.rem_euclid(DAYS_PER_YEAR);
    (years, rest / DAYS_PER_WEEK, rest % DAYS_PER_WEEK)
}

/// Label text for the countdown from `now` to `target`.
pub fn countdown_text(
    target: Option<NaiveDateTime>,
    now: NaiveDateTime,
    mode: DisplayMode,
) -> String {
    let Some(target) = target else {
        return UNSET_TEXT.to_string();
    };
    let delta = target - now;
    if delta <= chrono::Duration::zero() {
        return REACHED_TEXT.to_string();
    }
    // Partial days are truncated; `delta` is positive here.
    let days_total = delta.num_days();
    match mode {
        DisplayMode::YearsWeeksDays => {
            let (years, weeks, days) = breakdown(days_total);
            format!("Life: {years}y {weeks}w {days}d")
        }
        DisplayMode::TotalDays => format!("Life: {days_total} days"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn breakdown_recombines() {
        for days in [0, 1, 6, 7, 364, 365, 366, 372, 10_000, 356_112] {
            let (y, w, d) = breakdown(days);
            assert_eq!(d + 7 * w + 365 * y, days, "days={days}");
            assert!(d < 7);
            assert!(w < 53);
        }
    }

    #[test]
    fn weeks_reach_52_only_at_remainder_364() {
        for days in 0..2 * 365 {
            let (_, w, d) = breakdown(days);
            assert!(w <= 52 && d < 7);
            if w == 52 {
                // 364 is the only remainder that reaches a 52nd week.
                assert_eq!(days % 365, 364);
            }
        }
    }

    #[test]
    fn far_future_date() {
        let target = Some(at(2999, 1, 1, 0, 0, 0));
        let now = at(2024, 1, 1, 0, 0, 0);
        assert_eq!(
            countdown_text(target, now, DisplayMode::YearsWeeksDays),
            "Life: 975y 33w 6d"
        );
        assert_eq!(
            countdown_text(target, now, DisplayMode::TotalDays),
            "Life: 356112 days"
        );
    }

    #[test]
    fn partial_day_is_truncated() {
        let target = Some(at(2999, 1, 1, 0, 0, 0));
        let now = at(2024, 1, 1, 12, 0, 0);
        assert_eq!(
            countdown_text(target, now, DisplayMode::YearsWeeksDays),
            "Life: 975y 33w 5d"
        );
        assert_eq!(
            countdown_text(target, now, DisplayMode::TotalDays),
            "Life: 356111 days"
        );
    }

    #[test]
    fn less_than_a_day_left() {
        let target = Some(at(2030, 5, 1, 0, 0, 0));
        let now = at(2030, 4, 30, 23, 59, 59);
        assert_eq!(
            countdown_text(target, now, DisplayMode::YearsWeeksDays),
            "Life: 0y 0w 0d"
        );
    }

    #[test]
    fn reached_in_both_modes() {
        let target = Some(at(2020, 1, 1, 0, 0, 0));
        for now in [at(2020, 1, 1, 0, 0, 0), at(2024, 3, 3, 8, 0, 0)] {
            for mode in [DisplayMode::YearsWeeksDays, DisplayMode::TotalDays] {
                assert_eq!(countdown_text(target, now, mode), REACHED_TEXT);
            }
        }
    }

    #[test]
    fn unset_target() {
        let now = at(2024, 1, 1, 0, 0, 0);
        assert_eq!(countdown_text(None, now, DisplayMode::TotalDays), UNSET_TEXT);
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mode = DisplayMode::default();
        assert_eq!(mode.toggle().toggle(), mode);
        assert_ne!(mode.toggle(), mode);
    }
}
