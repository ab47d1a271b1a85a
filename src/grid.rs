use crate::date_key::to_key;
use crate::ledger::CompletionLedger;
use crate::models::{ActivityCell, ActivityGrid};
use chrono::{Datelike, Duration, NaiveDate};

pub const WEEK_COUNT: usize = 53;
pub const DAYS_PER_WEEK: usize = 7;
const LOOKBACK_DAYS: i64 = 364;

/// Bucket for cells after today.
pub const FUTURE_BUCKET: u8 = 0;
/// Highest bucket, reached at five or more completions.
pub const MAX_BUCKET: u8 = 6;

/// Lays out the trailing year as Sunday-first weeks ending on or after `today`.
pub fn generate(today: NaiveDate, ledger: &CompletionLedger) -> ActivityGrid {
    let start = grid_start(today);
    let mut weeks = Vec::with_capacity(WEEK_COUNT);

    for week in 0..WEEK_COUNT {
        let mut cells = Vec::with_capacity(DAYS_PER_WEEK);
        for weekday in 0..DAYS_PER_WEEK {
            let date = start + Duration::days((week * DAYS_PER_WEEK + weekday) as i64);
            let date_key = to_key(date);
            let count = ledger.get(date_key);
            let is_future = date > today;
            cells.push(ActivityCell {
                date,
                date_key,
                count,
                is_future,
                bucket: bucket(count, is_future),
            });
        }
        weeks.push(cells);
    }

    let end = start + Duration::days((WEEK_COUNT * DAYS_PER_WEEK) as i64 - 1);
    ActivityGrid { start, end, weeks }
}

pub fn bucket(count: u64, is_future: bool) -> u8 {
    if is_future {
        return FUTURE_BUCKET;
    }
    match count {
        0 => 1,
        1 => 2,
        2 => 3,
        3 => 4,
        4 => 5,
        _ => MAX_BUCKET,
    }
}

fn grid_start(today: NaiveDate) -> NaiveDate {
    let start = today - Duration::days(LOOKBACK_DAYS);
    start - Duration::days(i64::from(start.weekday().num_days_from_sunday()))
}
