//! Tyrian time: the in-game clock of Tyria, which runs through twelve days for every
//! real-world day.
//!
//! ```
//! use chrono::NaiveTime;
//! use tyrian_time::{convert_to_tyrian_time, format_tyrian_time, get_tyrian_time_of_day, TimeOfDay};
//!
//! let real = NaiveTime::from_hms_opt(8, 53, 0).unwrap();
//! let tyrian = convert_to_tyrian_time(&real).unwrap();
//! assert_eq!(format_tyrian_time(&tyrian), "10:36");
//! assert_eq!(get_tyrian_time_of_day(&tyrian).unwrap(), TimeOfDay::Day);
//! ```

mod clock;
mod config;
mod day_period;
mod error;
mod time_utils;
mod tyrian_clock;

pub use clock::{Clock, FixedClock, ManualClock, SystemClock};
pub use config::{ClockConfig, ConfigError};
pub use day_period::{DayPeriod, DayPeriodTable, TimeOfDay};
pub use error::{Result, TyrianTimeError};
pub use time_utils::{
    convert_to_tyrian_time, convert_to_tyrian_time_with, format_tyrian_time,
    get_tyrian_time_of_day, next_tyrian_midnight, tyrian_clock, tyrian_day_length,
    tyrian_time_from_unix, GAME_DAYS_IN_REAL_DAY, SECONDS_IN_A_DAY,
};
pub use tyrian_clock::{get_current_tyrian_time, get_current_tyrian_time_of_day, TyrianClock};
