//! Zoom Levels
//!
//! Discrete zoom handling over a fixed level table.

/// Fixed zoom level table, in percent
pub const ZOOM_LEVELS: [u32; 19] = [
    10, 20, 30, 40, 50, 60, 80, 90, 100, 110, 120, 130, 140, 150, 160, 170, 180, 190, 200,
];

/// Index of the 100% entry
pub const DEFAULT_ZOOM_INDEX: usize = 8;

/// Discrete zoom state: an index into [`ZOOM_LEVELS`]
///
/// Mutating operations return `true` when the index actually changed, so
/// the owner can apply the new scale factor and notify listeners.
#[derive(Debug, Clone)]
pub struct ZoomController {
    level: usize,
    default_level: usize,
}

impl ZoomController {
    /// Create a controller at the given default level
    pub fn new(default_level: usize) -> Self {
        debug_assert!(default_level < ZOOM_LEVELS.len());
        Self {
            level: default_level,
            default_level,
        }
    }

    /// Current level index
    pub fn level(&self) -> usize {
        self.level
    }

    /// Rendering scale factor for the current level
    pub fn factor(&self) -> f64 {
        ZOOM_LEVELS[self.level] as f64 / 100.0
    }

    /// Advance one level; no-op at the maximum
    pub fn zoom_in(&mut self) -> bool {
        if self.level < ZOOM_LEVELS.len() - 1 {
            self.level += 1;
            true
        } else {
            false
        }
    }

    /// Retreat one level; no-op at the minimum
    pub fn zoom_out(&mut self) -> bool {
        if self.level > 0 {
            self.level -= 1;
            true
        } else {
            false
        }
    }

    /// Set the level directly. Passing an out-of-range index is a contract
    /// violation on the caller's side, not something clamped here.
    pub fn set_level(&mut self, level: usize) -> bool {
        debug_assert!(level < ZOOM_LEVELS.len(), "zoom level {level} out of range");
        if level >= ZOOM_LEVELS.len() || level == self.level {
            return false;
        }
        self.level = level;
        true
    }

    /// Return to the configured default level; no-op if already there
    pub fn reset(&mut self) -> bool {
        if self.level == self.default_level {
            return false;
        }
        self.level = self.default_level;
        true
    }

    /// Replace the configured default level
    pub fn set_default_level(&mut self, level: usize) {
        debug_assert!(level < ZOOM_LEVELS.len());
        if level < ZOOM_LEVELS.len() {
            self.default_level = level;
        }
    }
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_INDEX)
    }
}
