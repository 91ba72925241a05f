//! Phase timing and its validation.
//!
//! Timing is validated with `Validation` so that a configuration with
//! several bad durations reports all of them at once.

use super::error::{ConfigError, ConfigViolation};
use chrono::TimeDelta;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Validated hold durations for one intersection.
///
/// There is no red field: an axis is red for exactly as long as the other
/// axis needs to complete green and yellow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    green: Duration,
    yellow: Duration,
}

impl Timing {
    /// Validate signed durations, rejecting any that is zero or negative.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stoplight::intersection::Timing;
    /// use chrono::TimeDelta;
    /// use std::time::Duration;
    ///
    /// let timing = Timing::new(TimeDelta::seconds(10), TimeDelta::seconds(3)).unwrap();
    /// assert_eq!(timing.red(), Duration::from_secs(13));
    ///
    /// let error = Timing::new(TimeDelta::zero(), TimeDelta::seconds(-1)).unwrap_err();
    /// assert_eq!(error.violations().len(), 2);
    /// ```
    pub fn new(green: TimeDelta, yellow: TimeDelta) -> Result<Self, ConfigError> {
        match Self::validate(green, yellow) {
            Validation::Success(timing) => Ok(timing),
            Validation::Failure(errors) => Err(ConfigError::InvalidConfiguration {
                violations: errors.iter().cloned().collect(),
            }),
        }
    }

    /// Check both durations, accumulating ALL violations.
    pub fn validate(
        green: TimeDelta,
        yellow: TimeDelta,
    ) -> Validation<Timing, NonEmptyVec<ConfigViolation>> {
        let checks = vec![positive("green", green), positive("yellow", yellow)];

        Validation::all_vec(checks).map(|held| Timing {
            green: held[0],
            yellow: held[1],
        })
    }

    pub fn green(&self) -> Duration {
        self.green
    }

    pub fn yellow(&self) -> Duration {
        self.yellow
    }

    /// Time each axis spends red per cycle.
    pub fn red(&self) -> Duration {
        self.green + self.yellow
    }

    /// Length of one full four-phase cycle.
    pub fn cycle(&self) -> Duration {
        2 * self.red()
    }
}

fn positive(
    field: &'static str,
    value: TimeDelta,
) -> Validation<Duration, NonEmptyVec<ConfigViolation>> {
    match value.to_std() {
        Ok(duration) if !duration.is_zero() => Validation::success(duration),
        _ => Validation::fail(ConfigViolation::NonPositiveDuration {
            field,
            millis: value.num_milliseconds(),
        }),
    }
}
