/// Centralized axis naming utilities
///
/// Provides consistent axis names across the differentiation engine, the CSV export and
/// the plot functions.
use std::fmt;

/// Component of a planar motion quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    /// Euclidean norm of the x and y components.
    Magnitude,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Magnitude];

    pub fn name(&self) -> &'static str {
        AXIS_NAMES[*self as usize]
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Get all axis names as a static array
pub const AXIS_NAMES: [&str; 3] = ["x", "y", "magnitude"];
