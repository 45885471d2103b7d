//! Low-resource heuristics for degrading decorative animation.
//!
//! Signals are optional: an absent reading never marks a device as low-end.

/// Below this many gigabytes of reported memory the device is low-end.
pub const LOW_MEMORY_GB: f64 = 4.0;

/// Below this many logical cores the device is low-end.
pub const LOW_CORES: f64 = 4.0;

/// Battery charge fraction under which the rain canvas is hidden.
pub const LOW_BATTERY_LEVEL: f64 = 0.2;

/// Optional hardware signals read from the navigator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DeviceProfile {
    pub memory_gb: Option<f64>,
    pub cores: Option<f64>,
}

impl DeviceProfile {
    pub fn is_low_end(&self) -> bool {
        self.memory_gb.is_some_and(|m| m < LOW_MEMORY_GB)
            || self.cores.is_some_and(|c| c < LOW_CORES)
    }
}

/// One reading of the Battery Status API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryStatus {
    pub level: f64,
    pub charging: bool,
}

impl BatteryStatus {
    /// Hide the rain canvas when charge is low or the device is unplugged.
    pub fn hides_rain(&self) -> bool {
        self.level < LOW_BATTERY_LEVEL || !self.charging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_signals_are_not_low_end() {
        assert!(!DeviceProfile::default().is_low_end());
        assert!(!DeviceProfile {
            memory_gb: Some(8.0),
            cores: Some(8.0)
        }
        .is_low_end());
    }

    #[test]
    fn either_signal_below_threshold_is_low_end() {
        assert!(DeviceProfile {
            memory_gb: Some(2.0),
            cores: None
        }
        .is_low_end());
        assert!(DeviceProfile {
            memory_gb: None,
            cores: Some(2.0)
        }
        .is_low_end());
        assert!(DeviceProfile {
            memory_gb: Some(8.0),
            cores: Some(2.0)
        }
        .is_low_end());
    }

    #[test]
    fn battery_hides_rain_when_low_or_unplugged() {
        assert!(BatteryStatus {
            level: 0.1,
            charging: true
        }
        .hides_rain());
        assert!(BatteryStatus {
            level: 0.9,
            charging: false
        }
        .hides_rain());
        assert!(!BatteryStatus {
            level: 0.9,
            charging: true
        }
        .hides_rain());
    }
}
