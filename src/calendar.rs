//! Calendar grids, interval lists, and time formatting.
//!
//! The day-grid generator builds a year → month → day tree spanning
//! eleven years forward from a reference date, trimmed so the grid
//! starts at that date. Everything is leap-year aware through `chrono`.
//!
//! Functions that need "now" come in pairs: a convenience wrapper that
//! reads the local clock, and a pure core taking the reference instant
//! explicitly (the one the tests drive).

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// How many years forward [`date_grid`] spans, in addition to the
/// current year.
const GRID_YEARS_AHEAD: i32 = 10;

/// One level of the calendar tree.
///
/// Three levels deep in practice: year → month → day. Year names are
/// unpadded, month and day names are zero-padded to two digits. Leaf
/// (day) nodes have an empty `sub`, which is omitted when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarNode {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub: Vec<CalendarNode>,
}

/// Elapsed time split into zero-padded `day`/`hour`/`minute`/`second`
/// strings.
///
/// Each part is at least two digits; the day part grows beyond two
/// digits when needed, so the decomposition always round-trips to the
/// original seconds count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationParts {
    pub day: String,
    pub hour: String,
    pub minute: String,
    pub second: String,
}

impl DurationParts {
    /// Decomposes a seconds count into days, hours, minutes, and seconds.
    ///
    /// # Examples
    /// ```
    /// use kitbag::calendar::DurationParts;
    /// let parts = DurationParts::from_seconds(90_061);
    /// assert_eq!(parts.day, "01");
    /// assert_eq!(parts.hour, "01");
    /// assert_eq!(parts.minute, "01");
    /// assert_eq!(parts.second, "01");
    /// ```
    pub fn from_seconds(total: u64) -> Self {
        let day = total / 86_400;
        let hour = total / 3_600 - day * 24;
        let minute = total / 60 - day * 1_440 - hour * 60;
        let second = total - day * 86_400 - hour * 3_600 - minute * 60;
        Self {
            day: format!("{day:02}"),
            hour: format!("{hour:02}"),
            minute: format!("{minute:02}"),
            second: format!("{second:02}"),
        }
    }
}

/// Number of days in the given month, leap-year aware.
///
/// # Panics
/// Panics if `month` is outside `1..=12`.
///
/// # Examples
/// ```
/// use kitbag::calendar::days_in_month;
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2025, 2), 28);
/// assert_eq!(days_in_month(2025, 12), 31);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("month in 1..=12");
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("first of successor month is always valid");
    next.signed_duration_since(first).num_days() as u32
}

/// Builds the forward day grid starting from the local date. See
/// [`date_grid_from`].
pub fn date_grid() -> Vec<CalendarNode> {
    date_grid_from(Local::now().date_naive())
}

/// Builds a year → month → day tree covering `today` through the end of
/// the year ten years out.
///
/// Every year from `today`'s year through year + 10 gets all twelve
/// months with their correct day counts. The first year's months before
/// the current month are then removed, and the first remaining month's
/// days before the current day are removed, so the grid's first leaf is
/// `today` itself.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use kitbag::calendar::date_grid_from;
/// let grid = date_grid_from(NaiveDate::from_ymd_opt(2026, 11, 28).unwrap());
/// assert_eq!(grid.len(), 11);
/// assert_eq!(grid[0].name, "2026");
/// assert_eq!(grid[0].sub.len(), 2); // November, December
/// assert_eq!(grid[0].sub[0].sub.first().unwrap().name, "28");
/// ```
pub fn date_grid_from(today: NaiveDate) -> Vec<CalendarNode> {
    let min_year = today.year();
    let max_year = min_year + GRID_YEARS_AHEAD;
    let mut calendar: Vec<CalendarNode> = (min_year..=max_year)
        .map(|year| {
            let months = (1..=12u32)
                .map(|month| {
                    let days = (1..=days_in_month(year, month))
                        .map(|day| CalendarNode {
                            name: format!("{day:02}"),
                            sub: Vec::new(),
                        })
                        .collect();
                    CalendarNode {
                        name: format!("{month:02}"),
                        sub: days,
                    }
                })
                .collect();
            CalendarNode {
                name: year.to_string(),
                sub: months,
            }
        })
        .collect();
    // Trim the first year back to today: months strictly before the
    // current month, then days strictly before the current day.
    calendar[0].sub.drain(..(today.month() - 1) as usize);
    calendar[0].sub[0].sub.drain(..(today.day() - 1) as usize);
    calendar
}

/// `"HH:MM"` marks from midnight, stepping by `step_minutes`, covering
/// one day.
///
/// # Returns
/// An empty vector when `step_minutes` is zero.
///
/// # Examples
/// ```
/// use kitbag::calendar::time_intervals;
/// let marks = time_intervals(360);
/// assert_eq!(marks, vec!["00:00", "06:00", "12:00", "18:00"]);
/// ```
pub fn time_intervals(step_minutes: u32) -> Vec<String> {
    if step_minutes == 0 {
        return Vec::new();
    }
    let mut marks = Vec::with_capacity((1440 / step_minutes) as usize + 1);
    let mut total = 0u32;
    while total < 1440 {
        marks.push(format!("{:02}:{:02}", total / 60, total % 60));
        total += step_minutes;
    }
    marks
}

/// Formats an instant as `yyyy/mm/dd hh:mm:ss`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use kitbag::calendar::format_datetime;
/// let dt = NaiveDate::from_ymd_opt(2026, 8, 7)
///     .unwrap()
///     .and_hms_opt(9, 5, 0)
///     .unwrap();
/// assert_eq!(format_datetime(dt), "2026/08/07 09:05:00");
/// ```
pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y/%m/%d %H:%M:%S").to_string()
}

/// Formats local "now" shifted by whole days: `1` is this time
/// tomorrow, `-1` yesterday.
pub fn format_timestamp(day_offset: i64) -> String {
    format_datetime(Local::now().naive_local() + Duration::days(day_offset))
}

/// Whole seconds elapsed from `before` to `now` (negative if `now` is
/// earlier).
pub fn seconds_between(now: NaiveDateTime, before: NaiveDateTime) -> i64 {
    now.signed_duration_since(before).num_seconds()
}

/// Whole days elapsed from `before` to `now`, truncated toward zero.
pub fn days_between(now: NaiveDateTime, before: NaiveDateTime) -> i64 {
    now.signed_duration_since(before).num_days()
}
