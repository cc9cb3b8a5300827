//! Debug readout: pair separation, pair force and the tracked body's speed

use std::fmt;

use orbitsim_physics::{Body, StepStats};

/// Formatted debug labels for one frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DebugTable {
    /// Separation of the last evaluated pair, e.g. `384400000.00 m`
    pub radius: Option<String>,
    /// Force between the last evaluated pair, e.g. `1.9820e20 N`
    pub force: Option<String>,
    /// Speed of the tracked body, e.g. `1023.006 m/s`
    pub speed: Option<String>,
}

impl DebugTable {
    /// Build the labels from a step summary and the tracked body
    pub fn new(stats: &StepStats, tracked: Option<&Body>) -> Self {
        Self {
            radius: stats.separation.map(|r| format!("{:.2} m", r)),
            force: stats.force.map(|f| format!("{:.4e} N", f)),
            speed: tracked.map(|b| format!("{:.3} m/s", b.speed())),
        }
    }
}

impl fmt::Display for DebugTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dash = "-";
        write!(
            f,
            "radius: {} | force: {} | speed: {}",
            self.radius.as_deref().unwrap_or(dash),
            self.force.as_deref().unwrap_or(dash),
            self.speed.as_deref().unwrap_or(dash),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbitsim_math::Vec2;

    #[test]
    fn test_labels() {
        let stats = StepStats {
            pairs: 1,
            separation: Some(384_400_000.0),
            force: Some(1.982e20),
        };
        let moon = Body::new(7.3e22, Vec2::ZERO, Vec2::new(0.0, 1023.006), 1.0);
        let table = DebugTable::new(&stats, Some(&moon));

        assert_eq!(table.radius.as_deref(), Some("384400000.00 m"));
        assert_eq!(table.force.as_deref(), Some("1.9820e20 N"));
        assert_eq!(table.speed.as_deref(), Some("1023.006 m/s"));
        assert_eq!(
            table.to_string(),
            "radius: 384400000.00 m | force: 1.9820e20 N | speed: 1023.006 m/s"
        );
    }

    #[test]
    fn test_empty_table() {
        let table = DebugTable::new(&StepStats::default(), None);
        assert_eq!(table, DebugTable::default());
        assert_eq!(table.to_string(), "radius: - | force: - | speed: -");
    }
}
