use std::fmt;

/// Length of one period in minutes
pub const PERIOD_MINUTES: u8 = 8;

/// Length of one period in seconds
pub const PERIOD_SECONDS: u32 = PERIOD_MINUTES as u32 * 60;

/// Quick-set buttons, in minutes remaining
pub const CLOCK_PRESETS: [u8; 5] = [8, 6, 4, 2, 0];

/// Game clock as time remaining in the period
///
/// Minutes (0-8) and seconds (0-59) are clamped independently, matching the
/// two separate inputs on the tracker. The store keeps the clock as fractional
/// minutes (`minutes + seconds / 60`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    minutes: u8,
    seconds: u8,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::period_start()
    }
}

impl GameClock {
    pub fn new(minutes: i64, seconds: i64) -> Self {
        Self {
            minutes: minutes.clamp(0, PERIOD_MINUTES as i64) as u8,
            seconds: seconds.clamp(0, 59) as u8,
        }
    }

    /// Full period remaining (8:00)
    pub fn period_start() -> Self {
        Self { minutes: PERIOD_MINUTES, seconds: 0 }
    }

    pub fn preset(minutes: u8) -> Self {
        Self::new(minutes as i64, 0)
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    pub fn with_minutes(self, minutes: i64) -> Self {
        Self::new(minutes, self.seconds as i64)
    }

    pub fn with_seconds(self, seconds: i64) -> Self {
        Self::new(self.minutes as i64, seconds)
    }

    /// Value sent to the store
    pub fn as_minutes(&self) -> f64 {
        self.minutes as f64 + self.seconds as f64 / 60.0
    }

    /// Split a stored clock into whole minutes and rounded seconds
    ///
    /// A fraction that rounds to 60 seconds carries into the next minute.
    pub fn from_minutes(value: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return Self::new(0, 0);
        }
        let mut minutes = value.floor() as i64;
        let mut seconds = ((value - value.floor()) * 60.0).round() as i64;
        if seconds >= 60 {
            minutes += 1;
            seconds = 0;
        }
        Self::new(minutes, seconds)
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.minutes as u32 * 60 + self.seconds as u32
    }

    /// Whole seconds elapsed since the start of the period
    pub fn elapsed_seconds(&self) -> u32 {
        PERIOD_SECONDS.saturating_sub(self.remaining_seconds())
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_clamp_independently() {
        let clock = GameClock::new(12, -3);
        assert_eq!((clock.minutes(), clock.seconds()), (8, 0));

        let clock = GameClock::new(-1, 75);
        assert_eq!((clock.minutes(), clock.seconds()), (0, 59));

        let clock = GameClock::new(3, 20).with_seconds(99);
        assert_eq!(clock.to_string(), "3:59");
    }

    #[test]
    fn test_from_minutes_splits_fraction() {
        let clock = GameClock::from_minutes(6.5);
        assert_eq!((clock.minutes(), clock.seconds()), (6, 30));

        let clock = GameClock::from_minutes(3.25);
        assert_eq!((clock.minutes(), clock.seconds()), (3, 15));
    }

    #[test]
    fn test_from_minutes_carries_rounded_minute() {
        let clock = GameClock::from_minutes(4.999);
        assert_eq!(clock.to_string(), "5:00");
    }

    #[test]
    fn test_from_minutes_rejects_nonsense() {
        assert_eq!(GameClock::from_minutes(f64::NAN), GameClock::new(0, 0));
        assert_eq!(GameClock::from_minutes(-2.0), GameClock::new(0, 0));
        assert_eq!(GameClock::from_minutes(30.0), GameClock::period_start());
    }

    #[test]
    fn test_edit_round_trip_keeps_display() {
        let clock = GameClock::new(5, 47);
        assert_eq!(GameClock::from_minutes(clock.as_minutes()), clock);
    }

    #[test]
    fn test_elapsed_seconds_counts_up_from_period_start() {
        assert_eq!(GameClock::period_start().elapsed_seconds(), 0);
        assert_eq!(GameClock::new(5, 30).elapsed_seconds(), 150);
        assert_eq!(GameClock::new(0, 0).elapsed_seconds(), PERIOD_SECONDS);
        assert_eq!(GameClock::new(8, 30).elapsed_seconds(), 0);
    }
}
