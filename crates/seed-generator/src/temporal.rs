//! Business-hour-aware random timestamps.

use crate::error::SynthError;
use chrono::{DateTime, Duration, NaiveTime, Utc};
use rand::Rng;

/// Business hours: start hour is sampled from `[8, 17)`.
pub const BUSINESS_HOUR_START: u32 = 8;
pub const BUSINESS_HOUR_END: u32 = 17;

/// Minutes are sampled at quarter-hour granularity.
pub const QUARTER_HOURS: [u32; 4] = [0, 15, 30, 45];

/// Sample a random point in time within `[start, end)` constrained to
/// business hours and quarter-hour minutes.
///
/// The day offset is drawn uniformly from the whole number of days between
/// the bounds, so a trailing partial day is never selected; spans shorter
/// than one day collapse to the start day. `end` must be strictly after
/// `start`.
pub fn sample_business_hours<R: Rng>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<DateTime<Utc>, SynthError> {
    if end <= start {
        return Err(SynthError::EmptyDateRange { start, end });
    }

    let whole_days = (end - start).num_days().max(1);
    let day = rng.gen_range(0..whole_days);
    let hour = rng.gen_range(BUSINESS_HOUR_START..BUSINESS_HOUR_END);
    let minute = QUARTER_HOURS[rng.gen_range(0..QUARTER_HOURS.len())];

    let date = start.date_naive() + Duration::days(day);
    // hour and minute are always in range for and_hms_opt
    let naive = date
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN));
    Ok(naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        chrono::NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_samples_stay_within_range_and_business_hours() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = utc(2025, 1, 5);
        let end = utc(2025, 6, 27);

        for _ in 0..1000 {
            let t = sample_business_hours(&mut rng, start, end).unwrap();
            assert!(t >= start, "{t} before start");
            assert!(t < end, "{t} past end");
            assert!((BUSINESS_HOUR_START..BUSINESS_HOUR_END).contains(&t.hour()));
            assert!(QUARTER_HOURS.contains(&t.minute()));
            assert_eq!(t.second(), 0);
        }
    }

    #[test]
    fn test_zero_span_is_an_error() {
        let mut rng = StdRng::seed_from_u64(42);
        let day = utc(2025, 3, 1);
        let err = sample_business_hours(&mut rng, day, day).unwrap_err();
        assert!(matches!(err, SynthError::EmptyDateRange { .. }));
    }

    #[test]
    fn test_inverted_span_is_an_error() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = sample_business_hours(&mut rng, utc(2025, 3, 2), utc(2025, 3, 1)).unwrap_err();
        assert!(matches!(err, SynthError::EmptyDateRange { .. }));
    }

    #[test]
    fn test_sub_day_span_collapses_to_start_day() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = utc(2025, 3, 1);
        let end = start + Duration::hours(12);
        let t = sample_business_hours(&mut rng, start, end).unwrap();
        assert_eq!(t.date_naive(), start.date_naive());
    }

    #[test]
    fn test_deterministic_with_same_seed() {
        let start = utc(2025, 1, 5);
        let end = utc(2025, 6, 27);
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        assert_eq!(
            sample_business_hours(&mut rng1, start, end).unwrap(),
            sample_business_hours(&mut rng2, start, end).unwrap()
        );
    }
}
