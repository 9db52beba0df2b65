//! cal: Print a month calendar.
//!
//! ```text
//!     October 2026
//! Mo Tu We Th Fr Sa Su
//!           1  2  3  4
//!  5  6  7  8  9 10 11
//! ```

use chrono::{Datelike, Local, Month, NaiveDate};

use crate::commands::ExecContext;
use crate::interpreter::ExecResult;

const HEADER: &str = "Mo Tu We Th Fr Sa Su";
const YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// `cal [month [year]]` or `cal year month`. Missing parts default to today.
pub fn run(args: &[String], _ctx: &mut ExecContext) -> ExecResult {
    let today = Local::now().date_naive();

    let (month, year) = match args {
        [] => (today.month(), today.year()),
        [month] => match parse_month(month) {
            Ok(m) => (m, today.year()),
            Err(e) => return e,
        },
        [first, second] => match month_and_year(first, second) {
            Ok(pair) => pair,
            Err(e) => return e,
        },
        _ => return ExecResult::failure(ExecResult::FAILURE, "cal: too many arguments"),
    };

    match render_month(year, month) {
        Some(text) => ExecResult::success(text),
        None => ExecResult::failure(
            ExecResult::FAILURE,
            format!("cal: invalid date: {month} {year}"),
        ),
    }
}

/// Two arguments are `month year`, unless the first is a number above 12,
/// which can only be a year: `cal 2026 10`.
fn month_and_year(first: &str, second: &str) -> Result<(u32, i32), ExecResult> {
    let year_first = first.parse::<u32>().is_ok_and(|n| n > 12);
    if year_first {
        Ok((parse_month(second)?, parse_year(first)?))
    } else {
        Ok((parse_month(first)?, parse_year(second)?))
    }
}

fn parse_month(arg: &str) -> Result<u32, ExecResult> {
    let month: u32 = arg.parse().map_err(|_| invalid_argument(arg))?;
    if !(1..=12).contains(&month) {
        return Err(ExecResult::failure(
            ExecResult::FAILURE,
            format!("cal: invalid month: {month}"),
        ));
    }
    Ok(month)
}

fn parse_year(arg: &str) -> Result<i32, ExecResult> {
    let year: i32 = arg.parse().map_err(|_| invalid_argument(arg))?;
    if !YEARS.contains(&year) {
        return Err(ExecResult::failure(
            ExecResult::FAILURE,
            format!("cal: invalid year: {year}"),
        ));
    }
    Ok(year)
}

fn invalid_argument(arg: &str) -> ExecResult {
    ExecResult::failure(ExecResult::FAILURE, format!("cal: invalid argument: '{arg}'"))
}

/// Render one month, weeks starting on Monday. `None` for an impossible
/// month or a year outside 1..=9999.
pub fn render_month(year: i32, month: u32) -> Option<String> {
    if !YEARS.contains(&year) {
        return None;
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let name = Month::try_from(u8::try_from(month).ok()?).ok()?.name();
    let days = days_in_month(first)?;

    let mut lines = vec![
        format!("{:^20}", format!("{name} {year}")).trim_end().to_string(),
        HEADER.to_string(),
    ];

    let offset = first.weekday().num_days_from_monday() as usize;
    let mut cells: Vec<String> = vec!["  ".to_string(); offset];
    cells.extend((1..=days).map(|day| format!("{day:>2}")));
    for week in cells.chunks(7) {
        lines.push(week.join(" ").trim_end().to_string());
    }
    Some(lines.join("\n"))
}

fn days_in_month(first: NaiveDate) -> Option<u32> {
    let next = match first.month() {
        12 => NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)?,
        m => NaiveDate::from_ymd_opt(first.year(), m + 1, 1)?,
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}
