//! TOML shimmer presets.
//!
//! Every field is optional; a preset only overrides what it names and
//! goes through the same validation as the builder setters.
//!
//! ```toml
//! highlight_mode = "color"
//! shape = "radial"
//! direction = "top_to_bottom"
//! intensity = 0.35
//! dropoff = 0.1
//! highlight_color = 0xFFFFFFFF
//! base_color = 0xFF202020
//! duration_ms = 1500
//! repeat_count = -1
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShimmerError};
use crate::paint::Argb;

use super::config::{
    Direction, HighlightMode, RepeatCount, RepeatMode, Shape, ShimmerBuilder, ShimmerConfig,
};

/// Partial shimmer parameters read from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShimmerPreset {
    pub highlight_mode: Option<HighlightMode>,
    pub shape: Option<Shape>,
    pub direction: Option<Direction>,

    /// `0xAARRGGBB`.
    pub highlight_color: Option<u32>,
    /// `0xAARRGGBB`; only the RGB part is used, see `base_alpha`.
    pub base_color: Option<u32>,
    pub highlight_alpha: Option<f32>,
    pub base_alpha: Option<f32>,

    pub fixed_width: Option<i32>,
    pub fixed_height: Option<i32>,
    pub width_ratio: Option<f32>,
    pub height_ratio: Option<f32>,
    pub intensity: Option<f32>,
    pub dropoff: Option<f32>,
    pub tilt: Option<f32>,

    pub clip_to_children: Option<bool>,
    pub auto_start: Option<bool>,

    /// Extra sweeps after the first; `-1` repeats forever.
    pub repeat_count: Option<i64>,
    pub repeat_mode: Option<RepeatMode>,
    pub duration_ms: Option<i64>,
    pub repeat_delay_ms: Option<i64>,
    pub start_delay_ms: Option<i64>,
}

impl ShimmerPreset {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| ShimmerError::Preset(e.to_string()))
    }

    /// Reads a preset file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ShimmerError::Preset(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ShimmerError::Preset(e.to_string()))
    }

    /// Builds a configuration from defaults for the preset's highlight mode.
    pub fn to_config(&self) -> Result<ShimmerConfig> {
        let builder = match self.highlight_mode.unwrap_or_default() {
            HighlightMode::Alpha => ShimmerBuilder::alpha(),
            HighlightMode::Color => ShimmerBuilder::color(),
        };
        Ok(self.apply(builder)?.build())
    }

    /// Overrides the named parameters on `builder`.
    ///
    /// Alphas are applied after colors, so `base_alpha` wins over the alpha
    /// byte of `base_color` and `highlight_alpha` over that of
    /// `highlight_color`.
    pub fn apply(&self, mut b: ShimmerBuilder) -> Result<ShimmerBuilder> {
        if let Some(mode) = self.highlight_mode {
            b = b.highlight_mode(mode);
        }
        if let Some(shape) = self.shape {
            b = b.shape(shape);
        }
        if let Some(direction) = self.direction {
            b = b.direction(direction);
        }

        if let Some(c) = self.highlight_color {
            b = b.highlight_color(Argb(c));
        }
        if let Some(c) = self.base_color {
            b = b.base_color(Argb(c));
        }
        if let Some(a) = self.highlight_alpha {
            b = b.highlight_alpha(a);
        }
        if let Some(a) = self.base_alpha {
            b = b.base_alpha(a);
        }

        if let Some(px) = self.fixed_width {
            b = b.fixed_width(px)?;
        }
        if let Some(px) = self.fixed_height {
            b = b.fixed_height(px)?;
        }
        if let Some(r) = self.width_ratio {
            b = b.width_ratio(r)?;
        }
        if let Some(r) = self.height_ratio {
            b = b.height_ratio(r)?;
        }
        if let Some(v) = self.intensity {
            b = b.intensity(v)?;
        }
        if let Some(v) = self.dropoff {
            b = b.dropoff(v)?;
        }
        if let Some(v) = self.tilt {
            b = b.tilt(v)?;
        }

        if let Some(clip) = self.clip_to_children {
            b = b.clip_to_children(clip);
        }
        if let Some(auto) = self.auto_start {
            b = b.auto_start(auto);
        }

        if let Some(count) = self.repeat_count {
            b = b.repeat_count(repeat_count(count)?);
        }
        if let Some(mode) = self.repeat_mode {
            b = b.repeat_mode(mode);
        }
        if let Some(ms) = self.duration_ms {
            b = b.duration_ms(ms)?;
        }
        if let Some(ms) = self.repeat_delay_ms {
            b = b.repeat_delay_ms(ms)?;
        }
        if let Some(ms) = self.start_delay_ms {
            b = b.start_delay_ms(ms)?;
        }

        Ok(b)
    }
}

fn repeat_count(count: i64) -> Result<RepeatCount> {
    match count {
        -1 => Ok(RepeatCount::Infinite),
        n => u32::try_from(n)
            .map(RepeatCount::Finite)
            .map_err(|_| ShimmerError::invalid("repeat count", n)),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn empty_preset_is_default_config() {
        let preset = ShimmerPreset::from_toml_str("").unwrap();
        assert_eq!(preset, ShimmerPreset::default());
        assert_eq!(preset.to_config().unwrap(), ShimmerConfig::default());
    }

    #[test]
    fn partial_preset_overrides_named_fields() {
        let preset = ShimmerPreset::from_toml_str(
            r#"
            highlight_mode = "color"
            shape = "radial"
            direction = "bottom_to_top"
            intensity = 0.35
            dropoff = 0.1
            base_color = 0xFF102030
            duration_ms = 1500
            repeat_count = 2
            repeat_mode = "reverse"
            "#,
        )
        .unwrap();

        let config = preset.to_config().unwrap();
        assert_eq!(config.shape(), Shape::Radial);
        assert_eq!(config.direction(), Direction::BottomToTop);
        assert_eq!(config.highlight_mode(), HighlightMode::Color);
        assert_eq!(config.duration(), Duration::from_millis(1500));
        assert_eq!(config.repeat_count(), RepeatCount::Finite(2));
        assert_eq!(config.repeat_mode(), RepeatMode::Reverse);
        assert_eq!(config.base_color().red(), 0x10);
        assert!((config.positions()[2] - 0.45).abs() < 1e-6);
        // Untouched parameters keep their defaults.
        assert_eq!(config.tilt(), 20.0);
    }

    #[test]
    fn infinite_repeat_count() {
        let preset = ShimmerPreset::from_toml_str("repeat_count = -1").unwrap();
        let config = preset.to_config().unwrap();
        assert_eq!(config.repeat_count(), RepeatCount::Infinite);
    }

    #[test]
    fn invalid_values_fail_validation() {
        let preset = ShimmerPreset::from_toml_str("dropoff = -0.5").unwrap();
        assert!(matches!(
            preset.to_config(),
            Err(ShimmerError::InvalidArgument { what: "dropoff", .. })
        ));

        let preset = ShimmerPreset::from_toml_str("repeat_count = -3").unwrap();
        assert!(preset.to_config().is_err());

        let preset = ShimmerPreset::from_toml_str("duration_ms = -1").unwrap();
        assert!(preset.to_config().is_err());
    }

    #[test]
    fn malformed_toml_is_preset_error() {
        assert!(matches!(
            ShimmerPreset::from_toml_str("shape = \"hexagon\""),
            Err(ShimmerError::Preset(_))
        ));
        assert!(matches!(
            ShimmerPreset::from_toml_str("shimmer_speed = 3"),
            Err(ShimmerError::Preset(_))
        ));
    }

    #[test]
    fn alpha_overrides_color_alpha_byte() {
        let preset = ShimmerPreset::from_toml_str(
            r#"
            highlight_color = 0xFF00FF00
            highlight_alpha = 0.5
            "#,
        )
        .unwrap();
        let config = preset.to_config().unwrap();
        assert_eq!(config.highlight_color().alpha(), 127);
        assert_eq!(config.highlight_color().green(), 0xFF);
    }

    #[test]
    fn round_trips_through_toml() {
        let preset = ShimmerPreset {
            shape: Some(Shape::Radial),
            tilt: Some(10.0),
            ..Default::default()
        };
        let text = preset.to_toml_string().unwrap();
        assert_eq!(ShimmerPreset::from_toml_str(&text).unwrap(), preset);
    }
}
