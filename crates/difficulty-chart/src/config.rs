//! Canvas profiles.
//!
//! The compact and wide charts share one drawing algorithm; everything that
//! differs between them lives in a [`ChartConfig`].

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Geometry, typography and encoding parameters for one chart profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub left_margin: f32,
    pub right_margin: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
    /// Horizontal gap between adjacent bars.
    pub bar_gap: f32,
    /// Radius of the rounded top corners of each bar.
    pub bar_radius: f32,
    /// Font size of the level names under the bars.
    pub category_font_size: f32,
    /// Font size of the y-axis tick values.
    pub tick_font_size: f32,
    /// Font size of the vote counts and the average label.
    pub value_font_size: f32,
    /// Lossy WebP quality, 0-100.
    pub quality: f32,
}

impl ChartConfig {
    /// 1000x500 chart used for embeds.
    pub fn compact() -> Self {
        Self {
            width: 1000,
            height: 500,
            left_margin: 60.0,
            right_margin: 45.0,
            top_margin: 75.0,
            bottom_margin: 70.0,
            bar_gap: 9.0,
            bar_radius: 20.0,
            category_font_size: 16.0,
            tick_font_size: 12.0,
            value_font_size: 13.0,
            quality: 85.0,
        }
    }

    /// 1600x600 chart for full-width displays.
    pub fn wide() -> Self {
        Self {
            width: 1600,
            height: 600,
            left_margin: 80.0,
            right_margin: 60.0,
            top_margin: 90.0,
            bottom_margin: 80.0,
            bar_gap: 12.0,
            bar_radius: 24.0,
            category_font_size: 20.0,
            tick_font_size: 15.0,
            value_font_size: 16.0,
            quality: 90.0,
        }
    }

    /// Width of the plotting area between the left and right margins.
    pub fn chart_width(&self) -> f32 {
        self.width as f32 - self.left_margin - self.right_margin
    }

    /// Height of the plotting area between the top and bottom margins.
    pub fn chart_height(&self) -> f32 {
        self.height as f32 - self.top_margin - self.bottom_margin
    }

    /// Reject profiles that cannot produce a chart.
    pub fn validate(&self) -> ChartResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::Config(format!(
                "canvas size {}x{} is empty",
                self.width, self.height
            )));
        }
        if self.chart_width() <= 0.0 || self.chart_height() <= 0.0 {
            return Err(ChartError::Config(
                "margins leave no room for the chart area".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.quality) {
            return Err(ChartError::Config(format!(
                "quality {} is outside 0-100",
                self.quality
            )));
        }
        for (name, value) in [
            ("left_margin", self.left_margin),
            ("right_margin", self.right_margin),
            ("top_margin", self.top_margin),
            ("bottom_margin", self.bottom_margin),
            ("bar_gap", self.bar_gap),
            ("bar_radius", self.bar_radius),
            ("category_font_size", self.category_font_size),
            ("tick_font_size", self.tick_font_size),
            ("value_font_size", self.value_font_size),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::Config(format!("{} must be >= 0", name)));
            }
        }
        Ok(())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::compact()
    }
}

/// Named chart profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Compact,
    Wide,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Compact => "compact",
            Profile::Wide => "wide",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(Profile::Compact),
            "wide" => Ok(Profile::Wide),
            other => Err(ChartError::Config(format!("unknown profile '{}'", other))),
        }
    }
}

/// Both profiles, as loaded from YAML or built in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartProfiles {
    #[serde(default = "ChartConfig::compact")]
    pub compact: ChartConfig,
    #[serde(default = "ChartConfig::wide")]
    pub wide: ChartConfig,
}

impl Default for ChartProfiles {
    fn default() -> Self {
        Self {
            compact: ChartConfig::compact(),
            wide: ChartConfig::wide(),
        }
    }
}

impl ChartProfiles {
    /// Parse profiles from YAML. Fields left out of a section keep the
    /// compact defaults, so a wide override should be given in full.
    pub fn from_yaml(yaml: &str) -> ChartResult<Self> {
        let profiles: Self = serde_yaml::from_str(yaml)?;
        profiles.compact.validate()?;
        profiles.wide.validate()?;
        Ok(profiles)
    }

    /// Load profiles from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ChartError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    pub fn get(&self, profile: Profile) -> &ChartConfig {
        match profile {
            Profile::Compact => &self.compact,
            Profile::Wide => &self.wide,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profiles_are_valid() {
        assert!(ChartConfig::compact().validate().is_ok());
        assert!(ChartConfig::wide().validate().is_ok());
    }

    #[test]
    fn test_compact_chart_area() {
        let config = ChartConfig::compact();
        assert_eq!(config.chart_width(), 895.0);
        assert_eq!(config.chart_height(), 355.0);
    }

    #[test]
    fn test_quality_in_lossy_range() {
        for config in [ChartConfig::compact(), ChartConfig::wide()] {
            assert!((85.0..=90.0).contains(&config.quality));
        }
    }

    #[test]
    fn test_validate_rejects_oversized_margins() {
        let config = ChartConfig {
            left_margin: 600.0,
            right_margin: 500.0,
            ..ChartConfig::compact()
        };
        assert!(matches!(config.validate(), Err(ChartError::Config(_))));
    }

    #[test]
    fn test_profile_parsing() {
        assert_eq!("wide".parse::<Profile>().unwrap(), Profile::Wide);
        assert_eq!("COMPACT".parse::<Profile>().unwrap(), Profile::Compact);
        assert!("huge".parse::<Profile>().is_err());
    }

    #[test]
    fn test_profiles_yaml_partial_override() {
        let yaml = r#"
compact:
  quality: 88
  bar_radius: 12
"#;
        let profiles = ChartProfiles::from_yaml(yaml).unwrap();
        assert_eq!(profiles.compact.quality, 88.0);
        assert_eq!(profiles.compact.bar_radius, 12.0);
        assert_eq!(profiles.compact.width, 1000);
        assert_eq!(profiles.wide, ChartConfig::wide());
    }

    #[test]
    fn test_profiles_yaml_rejects_bad_quality() {
        let yaml = "wide:\n  quality: 140\n";
        assert!(ChartProfiles::from_yaml(yaml).is_err());
    }
}
