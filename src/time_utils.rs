use chrono::{DateTime, Duration, Timelike, Utc};

use crate::day_period::{DayPeriodTable, TimeOfDay};
use crate::error::{Result, TyrianTimeError};

/// Seconds in a day, real or Tyrian.
pub const SECONDS_IN_A_DAY: i64 = 86_400;

/// In-game days that pass during one real-world day.
pub const GAME_DAYS_IN_REAL_DAY: i32 = 12;

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_IN_A_DAY: i64 = SECONDS_IN_A_DAY * NANOS_PER_SECOND;

/// Converts a real-world wall-clock time to the time elapsed in the current Tyrian day.
///
/// Only the time of day of `real_time` is used; its date, if any, is ignored.
pub fn convert_to_tyrian_time<T: Timelike>(real_time: &T) -> Result<Duration> {
    convert_to_tyrian_time_with(real_time, GAME_DAYS_IN_REAL_DAY)
}

/// Same as [`convert_to_tyrian_time`] with an explicit number of game days per real day.
///
/// The real day is split into `game_days_per_real_day` windows and the position in the
/// current window is stretched to a full Tyrian day. Work happens in whole nanoseconds,
/// so the result stays below one day even when the factor does not divide a day evenly.
///
/// The window length is `86400e9 / factor` nanoseconds, floored in nanoseconds rather
/// than in whole seconds. For factors that do not divide 86400 the windows therefore
/// differ from a whole-second cycle of `86400 / factor` seconds: with a factor of 7,
/// 12342 s after midnight is still in the first window (86394 s of Tyrian time) where a
/// 12342 s cycle would already have wrapped to 0.
pub fn convert_to_tyrian_time_with<T: Timelike>(
    real_time: &T,
    game_days_per_real_day: i32,
) -> Result<Duration> {
    let factor = validate_factor(game_days_per_real_day)?;
    let cycle_nanos = NANOS_IN_A_DAY / factor;
    let cycle_position = nanos_since_midnight(real_time) % cycle_nanos;

    Ok(Duration::nanoseconds(cycle_position * factor))
}

/// Converts a UTC unix timestamp (seconds) to Tyrian time.
pub fn tyrian_time_from_unix(utc_timestamp: i64) -> Duration {
    let factor = i64::from(GAME_DAYS_IN_REAL_DAY);
    let cycle_seconds = SECONDS_IN_A_DAY / factor;

    // rem_euclid keeps pre-1970 timestamps on the same cycle grid
    let cycle_position = utc_timestamp.rem_euclid(SECONDS_IN_A_DAY) % cycle_seconds;

    Duration::seconds(cycle_position * factor)
}

/// Real time it takes for one Tyrian day to pass (two hours by default).
pub fn tyrian_day_length(game_days_per_real_day: i32) -> Result<Duration> {
    let factor = validate_factor(game_days_per_real_day)?;
    Ok(Duration::nanoseconds(NANOS_IN_A_DAY / factor))
}

/// The next real instant at which a Tyrian day starts, strictly after `now`.
///
/// Cycles restart at every real midnight, so for factors that do not divide a day
/// evenly the last, shortened cycle still ends at midnight.
pub fn next_tyrian_midnight(now: DateTime<Utc>, game_days_per_real_day: i32) -> Result<DateTime<Utc>> {
    let factor = validate_factor(game_days_per_real_day)?;
    let cycle_nanos = NANOS_IN_A_DAY / factor;
    let since_midnight = nanos_since_midnight(&now);

    let until_cycle_end = cycle_nanos - since_midnight % cycle_nanos;
    let until_real_midnight = NANOS_IN_A_DAY - since_midnight;

    let delta = Duration::nanoseconds(until_cycle_end.min(until_real_midnight));
    now.checked_add_signed(delta).ok_or_else(|| {
        TyrianTimeError::InvalidArgument(format!(
            "No Tyrian midnight after {now} fits in the supported date range"
        ))
    })
}

/// Returns the time of day for a Tyrian time.
///
/// Sub-second parts are dropped before the lookup. Values outside `[0, 86400)` seconds
/// are rejected.
pub fn get_tyrian_time_of_day(tyrian_time: &Duration) -> Result<TimeOfDay> {
    if *tyrian_time < Duration::zero() {
        return Err(TyrianTimeError::InvalidArgument(format!(
            "Tyrian time must not be negative, got {tyrian_time}"
        )));
    }

    let seconds = tyrian_time.num_seconds();
    if seconds >= SECONDS_IN_A_DAY {
        return Err(TyrianTimeError::InvalidArgument(format!(
            "Tyrian time must be less than one day, got {seconds} seconds"
        )));
    }

    let seconds = u32::try_from(seconds)
        .map_err(|e| TyrianTimeError::Internal(format!("Tyrian seconds out of range: {e}")))?;
    DayPeriodTable::standard()?.time_of_day(seconds)
}

/// Splits a Tyrian time into clock hours and minutes.
pub fn tyrian_clock(tyrian_time: &Duration) -> (u32, u32) {
    let seconds = tyrian_time.num_seconds().rem_euclid(SECONDS_IN_A_DAY);
    let hours = (seconds / 3600) as u32;
    let minutes = ((seconds % 3600) / 60) as u32;
    (hours, minutes)
}

/// Formats a Tyrian time as `HH:MM`, the way the in-game `/time` command shows it.
pub fn format_tyrian_time(tyrian_time: &Duration) -> String {
    let (hours, minutes) = tyrian_clock(tyrian_time);
    format!("{:02}:{:02}", hours, minutes)
}

fn validate_factor(game_days_per_real_day: i32) -> Result<i64> {
    if game_days_per_real_day <= 0 {
        return Err(TyrianTimeError::InvalidArgument(format!(
            "Game days per real day must be positive, got {game_days_per_real_day}"
        )));
    }
    Ok(i64::from(game_days_per_real_day))
}

fn nanos_since_midnight<T: Timelike>(time: &T) -> i64 {
    // Leap seconds report nanosecond() >= 1e9; keep them inside the current second
    let nanos = time.nanosecond().min(NANOS_PER_SECOND as u32 - 1);
    i64::from(time.num_seconds_from_midnight()) * NANOS_PER_SECOND + i64::from(nanos)
}
