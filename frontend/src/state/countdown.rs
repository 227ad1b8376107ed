/// Length of the bonus window shown on the page, in seconds (72 hours).
pub const OFFER_WINDOW_SECS: u32 = 72 * 60 * 60;

/// Seconds left before the bonuses "expire". Only ever counts down and
/// bottoms out at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(OFFER_WINDOW_SECS)
    }
}

impl Countdown {
    pub fn new(remaining: u32) -> Self {
        Self { remaining }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Advances the countdown by one second. Returns false once it has
    /// already hit zero, so callers can skip a re-render.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Formats seconds as `"{h}h {m}m {s}s"`. Every unit is always printed and
/// nothing is zero padded, e.g. `"0h 5m 3s"`.
pub fn format_time(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{}h {}m {}s", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_without_padding_or_unit_suppression() {
        assert_eq!(format_time(0), "0h 0m 0s");
        assert_eq!(format_time(59), "0h 0m 59s");
        assert_eq!(format_time(303), "0h 5m 3s");
        assert_eq!(format_time(3661), "1h 1m 1s");
        assert_eq!(format_time(OFFER_WINDOW_SECS), "72h 0m 0s");
    }

    #[test]
    fn starts_at_the_full_offer_window() {
        let countdown = Countdown::default();
        assert_eq!(countdown.remaining(), 259_200);
        assert_eq!(format_time(countdown.remaining()), "72h 0m 0s");
    }

    #[test]
    fn tick_decrements_by_exactly_one() {
        for n in [1u32, 2, 60, 3600, OFFER_WINDOW_SECS] {
            let mut countdown = Countdown::new(n);
            assert!(countdown.tick());
            assert_eq!(countdown.remaining(), n - 1);
        }
    }

    #[test]
    fn n_ticks_reach_zero_and_stay_there() {
        let mut countdown = Countdown::new(90);
        for _ in 0..90 {
            countdown.tick();
        }
        assert!(countdown.is_finished());

        assert!(!countdown.tick());
        assert_eq!(countdown.remaining(), 0);
        assert_eq!(format_time(countdown.remaining()), "0h 0m 0s");
    }

    #[test]
    fn one_hour_of_ticks_from_full_window() {
        let mut countdown = Countdown::default();
        for _ in 0..3600 {
            countdown.tick();
        }
        assert_eq!(countdown.remaining(), 255_600);
        assert_eq!(format_time(countdown.remaining()), "71h 0m 0s");

        for _ in 0..61 {
            countdown.tick();
        }
        assert_eq!(countdown.remaining(), 255_539);
        assert_eq!(format_time(countdown.remaining()), "70h 58m 59s");
    }
}
