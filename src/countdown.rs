use chrono::NaiveDateTime;

pub const MS_PER_DAY: i64 = 86_400_000;
pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_SECOND: i64 = 1_000;

/// Time remaining until the launch instant, decomposed for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub launched: bool,
}

impl Countdown {
    /// Remaining time between `now` and `target`, floored to whole units.
    /// Once the target has passed the result is the terminal all-zero state,
    /// no matter how often it keeps being asked.
    pub fn at(target: NaiveDateTime, now: NaiveDateTime) -> Self {
        let distance = (target - now).num_milliseconds();
        if distance <= 0 {
            return Self::launched();
        }
        Self {
            days: distance / MS_PER_DAY,
            hours: distance % MS_PER_DAY / MS_PER_HOUR,
            minutes: distance % MS_PER_HOUR / MS_PER_MINUTE,
            seconds: distance % MS_PER_MINUTE / MS_PER_SECOND,
            launched: false,
        }
    }

    /// The terminal state. All fields are zero exactly when `launched` holds.
    pub fn launched() -> Self {
        Self {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            launched: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    fn launch() -> NaiveDateTime {
        instant(2026, 1, 1, 0, 0, 0)
    }

    #[test]
    fn two_seconds_before_launch() {
        let now = instant(2025, 12, 31, 23, 59, 58);
        assert_eq!(
            Countdown::at(launch(), now),
            Countdown {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 2,
                launched: false,
            }
        );
    }

    #[test]
    fn one_second_after_launch() {
        let now = instant(2026, 1, 1, 0, 0, 1);
        assert_eq!(Countdown::at(launch(), now), Countdown::launched());
    }

    #[test]
    fn exact_launch_instant_counts_as_launched() {
        assert_eq!(Countdown::at(launch(), launch()), Countdown::launched());
    }

    #[test]
    fn decomposes_mixed_distance() {
        let now = instant(2025, 12, 28, 19, 54, 54);
        // 3 days, 4 hours, 5 minutes, 6 seconds out.
        assert_eq!(
            Countdown::at(launch(), now),
            Countdown {
                days: 3,
                hours: 4,
                minutes: 5,
                seconds: 6,
                launched: false,
            }
        );
    }

    #[test]
    fn sub_second_remainders_floor_down() {
        let now = NaiveDate::from_ymd_opt(2025, 12, 31)
            .unwrap()
            .and_hms_milli_opt(23, 59, 57, 300)
            .unwrap();
        let remaining = Countdown::at(launch(), now);
        assert_eq!(remaining.seconds, 2);
        assert!(!remaining.launched);
    }

    #[test]
    fn reconstitution_stays_within_a_second() {
        let instants = [
            instant(2025, 12, 31, 23, 59, 59),
            instant(2025, 12, 1, 6, 30, 15),
            instant(2025, 6, 15, 12, 0, 1),
            NaiveDate::from_ymd_opt(2025, 12, 31)
                .unwrap()
                .and_hms_milli_opt(0, 0, 0, 999)
                .unwrap(),
        ];
        for now in instants {
            let remaining = Countdown::at(launch(), now);
            assert!(remaining.days >= 0);
            assert!(remaining.hours >= 0);
            assert!(remaining.minutes >= 0);
            assert!(remaining.seconds >= 0);
            let reconstituted = remaining.days * MS_PER_DAY
                + remaining.hours * MS_PER_HOUR
                + remaining.minutes * MS_PER_MINUTE
                + remaining.seconds * MS_PER_SECOND;
            let distance = (launch() - now).num_milliseconds();
            assert!(reconstituted <= distance, "floored units overshot {now}");
            assert!(distance - reconstituted < 1_000, "lost more than 999ms at {now}");
        }
    }

    #[test]
    fn launched_state_is_idempotent() {
        let first = Countdown::at(launch(), instant(2026, 1, 1, 0, 0, 1));
        let later = Countdown::at(launch(), instant(2026, 1, 1, 0, 0, 1) + Duration::hours(5));
        assert_eq!(first, later);
        assert!(later.launched);
    }
}
