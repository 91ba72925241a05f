//! Builder for constructing intersections.

use super::error::ConfigError;
use super::timing::Timing;
use super::Intersection;
use chrono::TimeDelta;

pub const DEFAULT_AXIS_A: &str = "North-South";
pub const DEFAULT_AXIS_B: &str = "East-West";
pub const DEFAULT_GREEN_SECS: i64 = 10;
pub const DEFAULT_YELLOW_SECS: i64 = 3;

/// Builder for constructing intersections with a fluent API.
///
/// Every field has a default, so `IntersectionBuilder::new().build()`
/// yields the classic North-South / East-West crossing with 10s green and
/// 3s yellow.
///
/// # Example
///
/// ```rust
/// use stoplight::intersection::IntersectionBuilder;
/// use chrono::TimeDelta;
///
/// let intersection = IntersectionBuilder::new()
///     .axes("Main St", "1st Ave")
///     .green(TimeDelta::seconds(20))
///     .build()
///     .unwrap();
///
/// assert_eq!(intersection.axis_b().name(), "1st Ave");
/// assert_eq!(intersection.timing().red().as_secs(), 23);
/// ```
#[derive(Clone, Debug)]
pub struct IntersectionBuilder {
    axis_a: String,
    axis_b: String,
    green: TimeDelta,
    yellow: TimeDelta,
}

impl IntersectionBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            axis_a: DEFAULT_AXIS_A.to_string(),
            axis_b: DEFAULT_AXIS_B.to_string(),
            green: TimeDelta::seconds(DEFAULT_GREEN_SECS),
            yellow: TimeDelta::seconds(DEFAULT_YELLOW_SECS),
        }
    }

    /// Name both axes.
    pub fn axes(mut self, axis_a: impl Into<String>, axis_b: impl Into<String>) -> Self {
        self.axis_a = axis_a.into();
        self.axis_b = axis_b.into();
        self
    }

    /// Set the green hold.
    pub fn green(mut self, green: TimeDelta) -> Self {
        self.green = green;
        self
    }

    /// Set the yellow hold.
    pub fn yellow(mut self, yellow: TimeDelta) -> Self {
        self.yellow = yellow;
        self
    }

    /// Build the intersection.
    /// Returns an error listing every invalid duration.
    pub fn build(self) -> Result<Intersection, ConfigError> {
        let timing = Timing::new(self.green, self.yellow)?;
        Ok(Intersection::with_timing(self.axis_a, self.axis_b, timing))
    }
}

impl Default for IntersectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
