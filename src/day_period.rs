use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, TyrianTimeError};
use crate::time_utils::SECONDS_IN_A_DAY;

// === Time of Day ===

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Dawn,
    Day,
    Dusk,
    Night,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeOfDay::Dawn => "Dawn",
            TimeOfDay::Day => "Day",
            TimeOfDay::Dusk => "Dusk",
            TimeOfDay::Night => "Night",
        };
        write!(f, "{name}")
    }
}

// === Period Table ===

/// One row of the period table. Both bounds are inclusive, in Tyrian seconds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPeriod {
    pub start: u32,
    pub end: u32,
    pub time_of_day: TimeOfDay,
}

impl DayPeriod {
    pub const fn new(start: u32, end: u32, time_of_day: TimeOfDay) -> Self {
        Self { start, end, time_of_day }
    }

    pub fn contains(&self, seconds: u32) -> bool {
        seconds >= self.start && seconds <= self.end
    }
}

const STANDARD_PERIODS: [DayPeriod; 5] = [
    DayPeriod::new(0, 17_999, TimeOfDay::Night),
    DayPeriod::new(18_000, 21_599, TimeOfDay::Dawn),
    DayPeriod::new(21_600, 71_999, TimeOfDay::Day),
    DayPeriod::new(72_000, 75_599, TimeOfDay::Dusk),
    DayPeriod::new(75_600, 86_399, TimeOfDay::Night),
];

static STANDARD_TABLE: Lazy<Result<DayPeriodTable>> =
    Lazy::new(|| build_builtin_table(&STANDARD_PERIODS));

/// A built-in table that fails validation is a defect in this crate, not in the caller's input.
fn build_builtin_table(periods: &[DayPeriod]) -> Result<DayPeriodTable> {
    DayPeriodTable::new(periods.to_vec()).map_err(|e| {
        log::error!("Built-in day period table is invalid: {}", e);
        TyrianTimeError::Internal(format!("Built-in day period table is invalid: {e}"))
    })
}

/// Ordered, gap-free, non-overlapping mapping of every second of a Tyrian day
/// to its time of day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPeriodTable {
    periods: Vec<DayPeriod>,
}

impl DayPeriodTable {
    /// Builds a table, rejecting anything that does not cover `0..=86399`
    /// exactly once in ascending order.
    pub fn new(periods: Vec<DayPeriod>) -> Result<Self> {
        validate_periods(&periods)?;
        Ok(Self { periods })
    }

    /// The table the game uses: Night, Dawn at 05:00, Day at 06:00, Dusk at 20:00, Night at 21:00.
    pub fn standard() -> Result<&'static DayPeriodTable> {
        (*STANDARD_TABLE).as_ref().map_err(Clone::clone)
    }

    pub fn periods(&self) -> &[DayPeriod] {
        &self.periods
    }

    pub fn time_of_day(&self, seconds: u32) -> Result<TimeOfDay> {
        if i64::from(seconds) >= SECONDS_IN_A_DAY {
            return Err(TyrianTimeError::InvalidArgument(format!(
                "Tyrian time must be less than one day, got {seconds} seconds"
            )));
        }

        self.periods
            .iter()
            .find(|period| period.contains(seconds))
            .map(|period| period.time_of_day)
            .ok_or_else(|| {
                log::error!("No day period covers Tyrian second {}", seconds);
                TyrianTimeError::Internal(format!(
                    "Could not convert {seconds} seconds to a time of day"
                ))
            })
    }
}

fn validate_periods(periods: &[DayPeriod]) -> Result<()> {
    let invalid = |reason: String| Err(TyrianTimeError::InvalidArgument(reason));

    let (Some(first), Some(last)) = (periods.first(), periods.last()) else {
        return invalid("Day period table is empty".to_string());
    };

    if first.start != 0 {
        return invalid(format!("Day period table starts at {} instead of 0", first.start));
    }

    for period in periods {
        if period.start > period.end {
            return invalid(format!(
                "Day period {}..={} ends before it starts",
                period.start, period.end
            ));
        }
    }

    for pair in periods.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if next.start <= prev.end {
            return invalid(format!(
                "Day periods {}..={} and {}..={} overlap",
                prev.start, prev.end, next.start, next.end
            ));
        }
        if next.start != prev.end + 1 {
            return invalid(format!(
                "Gap between day periods ending at {} and starting at {}",
                prev.end, next.start
            ));
        }
    }

    if i64::from(last.end) != SECONDS_IN_A_DAY - 1 {
        return invalid(format!(
            "Day period table ends at {} instead of {}",
            last.end,
            SECONDS_IN_A_DAY - 1
        ));
    }

    Ok(())
}
