//! Page configuration carried in the URL query, e.g. `/?seed=42&palette_step=45`.

use serde::{Deserialize, Serialize};

/// Separation between neighbouring hues of the color wheel.
pub const DEFAULT_PALETTE_STEP: u32 = 30;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Seed of the generator the gallery is drawn from.
    pub seed: u32,
    pub palette_step: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            palette_step: DEFAULT_PALETTE_STEP,
        }
    }
}

impl GalleryConfig {
    pub fn with_seed(&self, seed: u32) -> Self {
        Self {
            seed,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(
            GalleryConfig::default(),
            GalleryConfig {
                seed: 0,
                palette_step: 30
            }
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: GalleryConfig = serde_json::from_str(r#"{"seed": 42}"#).unwrap();
        assert_eq!(config, GalleryConfig::default().with_seed(42));

        let config: GalleryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn rejects_negative_seed() {
        assert!(serde_json::from_str::<GalleryConfig>(r#"{"seed": -1}"#).is_err());
    }

    #[test]
    fn with_seed_keeps_the_palette() {
        let config = GalleryConfig {
            seed: 1,
            palette_step: 45,
        };
        assert_eq!(
            config.with_seed(9),
            GalleryConfig {
                seed: 9,
                palette_step: 45
            }
        );
    }
}
