use crate::{
    error::IcosphereError,
    geometry::{self, Icosphere},
};

/// Highest level offered to interactive callers. `geometry::build` itself
/// has no ceiling.
pub const MAX_SUBDIVISIONS: u32 = 6;

/// Caller-side subdivision control: keeps the requested level inside
/// `0..=max_subdivisions` before anything is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    subdivisions: u32,
    max_subdivisions: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_max(MAX_SUBDIVISIONS)
    }
}

impl Settings {
    pub fn with_max(max_subdivisions: u32) -> Self {
        Self {
            subdivisions: 0,
            max_subdivisions,
        }
    }

    pub fn subdivisions(&self) -> u32 {
        self.subdivisions
    }

    pub fn max_subdivisions(&self) -> u32 {
        self.max_subdivisions
    }

    /// Stores `value` clamped into range and returns what was stored.
    pub fn set_subdivisions(&mut self, value: i64) -> u32 {
        let clamped = value.clamp(0, i64::from(self.max_subdivisions));
        if clamped != value {
            log::warn!(
                "subdivision level {} out of range, using {}",
                value,
                clamped
            );
        }
        self.subdivisions = u32::try_from(clamped).unwrap_or(self.max_subdivisions);
        self.subdivisions
    }

    pub fn reset(&mut self) {
        self.subdivisions = 0;
    }

    pub fn build(&self) -> Result<Icosphere, IcosphereError> {
        geometry::build(i64::from(self.subdivisions))
    }
}
