use chrono::{DateTime, Duration, Utc};

use crate::clock::{Clock, SystemClock};
use crate::config::ClockConfig;
use crate::day_period::TimeOfDay;
use crate::error::Result;
use crate::time_utils::{
    convert_to_tyrian_time_with, get_tyrian_time_of_day, next_tyrian_midnight,
    GAME_DAYS_IN_REAL_DAY,
};

/// Converts the current time of a [`Clock`] to Tyrian time.
#[derive(Debug, Clone)]
pub struct TyrianClock<C: Clock = SystemClock> {
    clock: C,
    game_days_per_real_day: i32,
}

impl Default for TyrianClock<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> TyrianClock<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            game_days_per_real_day: GAME_DAYS_IN_REAL_DAY,
        }
    }

    pub fn from_config(clock: C, config: &ClockConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            clock,
            game_days_per_real_day: config.game_days_per_real_day,
        })
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn game_days_per_real_day(&self) -> i32 {
        self.game_days_per_real_day
    }

    pub fn current_time(&self) -> Result<Duration> {
        convert_to_tyrian_time_with(&self.clock.now(), self.game_days_per_real_day)
    }

    pub fn current_time_of_day(&self) -> Result<TimeOfDay> {
        get_tyrian_time_of_day(&self.current_time()?)
    }

    /// Real instant at which the next Tyrian day begins.
    pub fn next_midnight(&self) -> Result<DateTime<Utc>> {
        next_tyrian_midnight(self.clock.now(), self.game_days_per_real_day)
    }
}

/// Tyrian time right now, read from the system clock in UTC.
pub fn get_current_tyrian_time() -> Result<Duration> {
    TyrianClock::new(SystemClock).current_time()
}

/// Tyrian time of day right now, read from the system clock in UTC.
pub fn get_current_tyrian_time_of_day() -> Result<TimeOfDay> {
    TyrianClock::new(SystemClock).current_time_of_day()
}
