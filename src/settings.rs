//! Scene tunables
//!
//! Persisted in LocalStorage so a page can be tuned without a rebuild.
//! Animation state itself is never stored.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{BurstPolicy, GardenSizes};

/// Scene settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Background ===
    /// Floating hearts kept alive in the background
    pub background_hearts: usize,

    // === Fireworks ===
    /// Per-frame probability of a burst
    pub burst_chance: f64,
    /// Sparks per burst
    pub burst_size: usize,

    // === Garden ===
    /// Flowers per "add more"
    pub flower_batch: usize,
    /// Grass blades per reset
    pub grass_blades: usize,

    // === Panorama ===
    /// Radians per dragged pixel
    pub drag_sensitivity: f32,

    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background_hearts: BACKGROUND_HEARTS,
            burst_chance: BURST_CHANCE,
            burst_size: BURST_SIZE,
            flower_batch: FLOWER_BATCH,
            grass_blades: GRASS_BLADES,
            drag_sensitivity: DRAG_SENSITIVITY,
            seed: None,
        }
    }
}

impl Settings {
    pub fn burst_policy(&self) -> BurstPolicy {
        BurstPolicy {
            chance: self.burst_chance.clamp(0.0, 1.0),
            size: self.burst_size,
        }
    }

    pub fn garden_sizes(&self) -> GardenSizes {
        GardenSizes {
            flower_batch: self.flower_batch,
            grass_blades: self.grass_blades,
        }
    }

    /// Seed for a scene: the fixed seed if set, else `clock`, mixed with
    /// `salt` so scenes don't share a stream
    pub fn seed_for(&self, clock: u64, salt: u64) -> u64 {
        self.seed.unwrap_or(clock) ^ salt.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }

    /// Parse settings JSON, falling back to defaults for missing fields
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                None
            }
        }
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "heart_garden_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        log::debug!("No {} outside the browser, using defaults", Self::STORAGE_KEY);
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"burst_chance":0.2,"seed":7}"#).unwrap();
        assert_eq!(settings.burst_chance, 0.2);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.background_hearts, BACKGROUND_HEARTS);
        assert_eq!(settings.grass_blades, GRASS_BLADES);
    }

    #[test]
    fn test_saved_json_loads_back() {
        let settings = Settings {
            burst_size: 12,
            drag_sensitivity: 0.02,
            seed: Some(3),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json), Some(settings));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(Settings::from_json("{not json").is_none());
    }

    #[test]
    fn test_burst_chance_is_clamped() {
        let settings = Settings {
            burst_chance: 3.0,
            ..Default::default()
        };
        assert_eq!(settings.burst_policy().chance, 1.0);
    }

    #[test]
    fn test_fixed_seed_is_stable_and_salted() {
        let settings = Settings {
            seed: Some(42),
            ..Default::default()
        };
        assert_eq!(settings.seed_for(1, 1), settings.seed_for(999, 1));
        assert_ne!(settings.seed_for(1, 1), settings.seed_for(1, 2));
    }
}
