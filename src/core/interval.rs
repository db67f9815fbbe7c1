use chrono::{DateTime, Datelike, Duration, FixedOffset, TimeZone, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{DrawingError, DrawingResult};

/// Fundamental time bucket unit of the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// Base bucket descriptor: `count` consecutive units per bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseInterval {
    pub unit: TimeUnit,
    pub count: u32,
}

impl BaseInterval {
    #[must_use]
    pub fn new(unit: TimeUnit, count: u32) -> Self {
        Self { unit, count }
    }

    pub fn validate(self) -> DrawingResult<Self> {
        if self.count == 0 {
            return Err(DrawingError::InvalidData(
                "base interval count must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Locale parameters that bucket rounding depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLocale {
    pub first_day_of_week: Weekday,
    pub utc_offset_minutes: i32,
}

impl Default for AxisLocale {
    fn default() -> Self {
        Self {
            first_day_of_week: Weekday::Mon,
            utc_offset_minutes: 0,
        }
    }
}

impl AxisLocale {
    pub fn validate(self) -> DrawingResult<Self> {
        if self.utc_offset_minutes.abs() >= 24 * 60 {
            return Err(DrawingError::InvalidData(
                "utc offset must be inside +-24h".to_owned(),
            ));
        }
        Ok(self)
    }

    fn offset(self) -> DrawingResult<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .ok_or_else(|| DrawingError::InvalidData("utc offset out of range".to_owned()))
    }
}

/// Rounds `time_ms` (epoch milliseconds) down to its bucket open.
///
/// Sub-unit fields are zeroed, then the unit value is aligned to the
/// interval count: seconds within the minute, minutes within the hour,
/// hours within the day, days within the month, months within the year.
/// Weeks align to `first_day_of_week`; multi-week and multi-year counts
/// align to whole periods since the unix epoch.
pub fn round_to_interval(
    time_ms: f64,
    interval: BaseInterval,
    locale: AxisLocale,
) -> DrawingResult<f64> {
    let interval = interval.validate()?;
    let locale = locale.validate()?;
    if !time_ms.is_finite() {
        return Err(DrawingError::InvalidData("time must be finite".to_owned()));
    }

    let count = i64::from(interval.count);
    let millis = time_ms.floor() as i64;

    // Sub-day units divide the epoch timeline evenly, so alignment can stay
    // in integer epoch space (offset applied for the day-relative ones).
    match interval.unit {
        TimeUnit::Millisecond => {
            return Ok((millis - millis.rem_euclid(count)) as f64);
        }
        TimeUnit::Second => {
            let step = count * 1_000;
            return Ok((millis - millis.rem_euclid(step)) as f64);
        }
        TimeUnit::Minute => {
            let step = count * 60_000;
            return Ok((millis - millis.rem_euclid(step)) as f64);
        }
        TimeUnit::Hour => {
            let step = count * 3_600_000;
            return Ok((millis - millis.rem_euclid(step)) as f64);
        }
        _ => {}
    }

    let offset = locale.offset()?;
    let local = datetime_at(offset, millis)?;
    let midnight = local
        .with_hour(0)
        .and_then(|d| d.with_minute(0))
        .and_then(|d| d.with_second(0))
        .and_then(|d| d.with_nanosecond(0))
        .ok_or_else(|| DrawingError::InvalidData("time out of calendar range".to_owned()))?;

    let open = match interval.unit {
        TimeUnit::Day => {
            let day0 = i64::from(midnight.day0());
            midnight - Duration::days(day0.rem_euclid(count))
        }
        TimeUnit::Week => {
            let back = i64::from(
                (7 + midnight.weekday().num_days_from_monday()
                    - locale.first_day_of_week.num_days_from_monday())
                    % 7,
            );
            let week_start = midnight - Duration::days(back);
            if count > 1 {
                let weeks = week_start.timestamp_millis().div_euclid(7 * 86_400_000);
                week_start - Duration::weeks(weeks.rem_euclid(count))
            } else {
                week_start
            }
        }
        TimeUnit::Month => {
            let month0 = i64::from(midnight.month0());
            let aligned = month0 - month0.rem_euclid(count);
            ymd_midnight(offset, midnight.year(), aligned as u32 + 1, 1)?
        }
        TimeUnit::Year => {
            let year = i64::from(midnight.year());
            let aligned = year - year.rem_euclid(count);
            ymd_midnight(offset, aligned as i32, 1, 1)?
        }
        _ => unreachable!("sub-day units handled above"),
    };

    Ok(open.timestamp_millis() as f64)
}

/// Advances a bucket open by one interval, yielding the bucket close.
pub fn add_interval(
    open_ms: f64,
    interval: BaseInterval,
    locale: AxisLocale,
) -> DrawingResult<f64> {
    let interval = interval.validate()?;
    let locale = locale.validate()?;
    if !open_ms.is_finite() {
        return Err(DrawingError::InvalidData("time must be finite".to_owned()));
    }

    let count = i64::from(interval.count);
    let millis = open_ms.floor() as i64;

    let shifted = match interval.unit {
        TimeUnit::Millisecond => millis + count,
        TimeUnit::Second => millis + count * 1_000,
        TimeUnit::Minute => millis + count * 60_000,
        TimeUnit::Hour => millis + count * 3_600_000,
        TimeUnit::Day => millis + count * 86_400_000,
        TimeUnit::Week => millis + count * 7 * 86_400_000,
        TimeUnit::Month => {
            let offset = locale.offset()?;
            let local = datetime_at(offset, millis)?;
            let total = i64::from(local.year()) * 12 + i64::from(local.month0()) + count;
            let year = total.div_euclid(12) as i32;
            let month = total.rem_euclid(12) as u32 + 1;
            let day = local.day().min(days_in_month(year, month));
            ymd_midnight(offset, year, month, day)?.timestamp_millis()
        }
        TimeUnit::Year => {
            let offset = locale.offset()?;
            let local = datetime_at(offset, millis)?;
            let year = local.year() + interval.count as i32;
            let day = local.day().min(days_in_month(year, local.month()));
            ymd_midnight(offset, year, local.month(), day)?.timestamp_millis()
        }
    };

    Ok(shifted as f64)
}

fn datetime_at(offset: FixedOffset, millis: i64) -> DrawingResult<DateTime<FixedOffset>> {
    offset
        .timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| DrawingError::InvalidData("time out of calendar range".to_owned()))
}

fn ymd_midnight(
    offset: FixedOffset,
    year: i32,
    month: u32,
    day: u32,
) -> DrawingResult<DateTime<FixedOffset>> {
    offset
        .with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .ok_or_else(|| DrawingError::InvalidData("time out of calendar range".to_owned()))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                29
            } else {
                28
            }
        }
    }
}
