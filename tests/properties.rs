use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use proptest::prelude::*;
use tyrian_time::{
    convert_to_tyrian_time, convert_to_tyrian_time_with, get_tyrian_time_of_day,
    next_tyrian_midnight, tyrian_time_from_unix, DayPeriodTable, FixedClock, TimeOfDay,
    TyrianClock, TyrianTimeError, SECONDS_IN_A_DAY,
};

fn naive_time() -> impl Strategy<Value = NaiveTime> {
    (0u32..86_400, 0u32..1_000_000_000).prop_map(|(secs, nanos)| {
        NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos).unwrap()
    })
}

fn naive_date() -> impl Strategy<Value = NaiveDate> {
    (1970i32..2100, 1u32..=365).prop_map(|(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal).unwrap()
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn converted_time_is_within_a_day(time in naive_time()) {
        let tyrian = convert_to_tyrian_time(&time).unwrap();
        prop_assert!(tyrian >= Duration::zero());
        prop_assert!(tyrian < Duration::seconds(SECONDS_IN_A_DAY));
    }

    #[test]
    fn any_positive_factor_stays_within_a_day(time in naive_time(), factor in 1i32..=i32::MAX) {
        let tyrian = convert_to_tyrian_time_with(&time, factor).unwrap();
        prop_assert!(tyrian >= Duration::zero());
        prop_assert!(tyrian < Duration::seconds(SECONDS_IN_A_DAY));
    }

    #[test]
    fn non_positive_factor_is_rejected(time in naive_time(), factor in i32::MIN..=0) {
        prop_assert!(matches!(
            convert_to_tyrian_time_with(&time, factor),
            Err(TyrianTimeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn date_does_not_matter(time in naive_time(), a in naive_date(), b in naive_date()) {
        prop_assert_eq!(
            convert_to_tyrian_time(&a.and_time(time)),
            convert_to_tyrian_time(&b.and_time(time))
        );
    }

    #[test]
    fn unix_timestamps_agree_with_wall_clock(timestamp in -4_000_000_000i64..4_000_000_000) {
        let at = Utc.timestamp_opt(timestamp, 0).unwrap();
        prop_assert_eq!(Ok(tyrian_time_from_unix(timestamp)), convert_to_tyrian_time(&at));
    }

    #[test]
    fn next_midnight_starts_a_new_day(timestamp in 0i64..4_000_000_000) {
        let now = Utc.timestamp_opt(timestamp, 0).unwrap();
        let next = next_tyrian_midnight(now, 12).unwrap();

        prop_assert!(next > now);
        prop_assert!(next - now <= Duration::hours(2));
        prop_assert_eq!(convert_to_tyrian_time(&next), Ok(Duration::zero()));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Classification
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn out_of_range_is_rejected(seconds in SECONDS_IN_A_DAY..SECONDS_IN_A_DAY * 1000) {
        prop_assert!(matches!(
            get_tyrian_time_of_day(&Duration::seconds(seconds)),
            Err(TyrianTimeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn converted_time_always_classifies(time in naive_time()) {
        let tyrian = convert_to_tyrian_time(&time).unwrap();
        prop_assert!(get_tyrian_time_of_day(&tyrian).is_ok());
    }
}

#[test]
fn every_second_maps_to_exactly_one_period() {
    let table = DayPeriodTable::standard().unwrap();
    for second in 0..SECONDS_IN_A_DAY as u32 {
        let matches = table
            .periods()
            .iter()
            .filter(|period| period.contains(second))
            .count();
        assert_eq!(matches, 1, "second {second}");
        assert!(get_tyrian_time_of_day(&Duration::seconds(i64::from(second))).is_ok());
    }
}

#[test]
fn periods_are_disjoint_and_ordered() {
    let periods = DayPeriodTable::standard().unwrap().periods();
    assert_eq!(periods.first().map(|p| p.start), Some(0));
    assert_eq!(periods.last().map(|p| p.end), Some(86_399));
    for pair in periods.windows(2) {
        assert_eq!(pair[0].end + 1, pair[1].start);
    }
}

#[test]
fn observed_in_game_times() {
    let cases = [
        ((8, 50), (10, 0), TimeOfDay::Day),
        ((8, 53), (10, 36), TimeOfDay::Day),
    ];

    for ((real_h, real_m), (tyrian_h, tyrian_m), period) in cases {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, real_h, real_m, 0).unwrap();
        let clock = TyrianClock::new(FixedClock(at));

        let tyrian = clock.current_time().unwrap();
        assert_eq!(tyrian_time::tyrian_clock(&tyrian), (tyrian_h, tyrian_m));
        assert_eq!(clock.current_time_of_day(), Ok(period));
    }
}
