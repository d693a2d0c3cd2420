//! Construction options.

use serde::{Deserialize, Serialize};

/// Number of backing slots used when none is given.
pub const DEFAULT_SLOTS: usize = 50;

/// Controls how a buffer allocates its initial storage.
///
/// One slot is always kept empty, so a buffer built from `Config { slots: n }`
/// holds `n - 1` blocks before it has to grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Length of the initial backing storage.
    /// Zero is replaced by [`DEFAULT_SLOTS`].
    pub slots: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slots: DEFAULT_SLOTS,
        }
    }
}

impl Config {
    /// Creates a config with the given slot count.
    pub fn new(slots: usize) -> Self {
        Self { slots }
    }

    /// Set the slot count.
    pub fn with_slots(mut self, slots: usize) -> Self {
        self.slots = slots;
        self
    }

    pub(crate) fn with_defaults(mut self) -> Self {
        if self.slots == 0 {
            self.slots = DEFAULT_SLOTS;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slots() {
        assert_eq!(Config::default().slots, 50);
    }

    #[test]
    fn test_zero_slots_use_default() {
        assert_eq!(Config::new(0).with_defaults().slots, DEFAULT_SLOTS);
        assert_eq!(Config::new(8).with_defaults().slots, 8);
    }

    #[test]
    fn test_with_slots() {
        let cfg = Config::default().with_slots(16);
        assert_eq!(cfg, Config::new(16));
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());

        let cfg: Config = serde_json::from_str(r#"{"slots": 8}"#).unwrap();
        assert_eq!(cfg.slots, 8);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&Config::new(4)).unwrap();
        assert_eq!(json, r#"{"slots":4}"#);
    }
}
