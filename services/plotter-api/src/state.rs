//! Application state for the plotter API.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use difficulty_chart::{ChartProfiles, ChartRenderer, Profile, TextRenderer};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

/// Shared application state.
pub struct AppState {
    compact: ChartRenderer,
    wide: ChartRenderer,

    /// Prometheus exporter, absent when no recorder is installed.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Build renderers for both profiles.
    ///
    /// A bad font file, profile file or encoder setting fails here rather
    /// than on the first request.
    pub fn new(profiles_path: Option<&Path>, font_path: Option<&Path>) -> Result<Self> {
        let profiles = match profiles_path {
            Some(path) => ChartProfiles::from_file(path)
                .with_context(|| format!("Failed to load chart profiles from {}", path.display()))?,
            None => ChartProfiles::default(),
        };

        let text = match font_path {
            Some(path) => TextRenderer::from_font_file(path)?,
            None => {
                info!("No label font configured, using built-in glyphs");
                TextRenderer::builtin()
            }
        };

        Self::from_profiles(profiles, Arc::new(text))
    }

    pub fn from_profiles(profiles: ChartProfiles, text: Arc<TextRenderer>) -> Result<Self> {
        let compact = ChartRenderer::with_text(profiles.compact, Arc::clone(&text))
            .context("Invalid compact chart profile")?;
        let wide =
            ChartRenderer::with_text(profiles.wide, text).context("Invalid wide chart profile")?;

        Ok(Self {
            compact,
            wide,
            prometheus: None,
        })
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }

    pub fn renderer(&self, profile: Profile) -> &ChartRenderer {
        match profile {
            Profile::Compact => &self.compact,
            Profile::Wide => &self.wide,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_state_has_both_profiles() {
        let state = AppState::new(None, None).unwrap();
        assert_eq!(state.renderer(Profile::Compact).config().width, 1000);
        assert_eq!(state.renderer(Profile::Wide).config().width, 1600);
        assert!(state.prometheus.is_none());
    }

    #[test]
    fn test_profiles_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "wide:\n  width: 1200\n  height: 500").unwrap();

        let state = AppState::new(Some(file.path()), None).unwrap();
        assert_eq!(state.renderer(Profile::Wide).config().width, 1200);
        assert_eq!(state.renderer(Profile::Compact).config().width, 1000);
    }

    #[test]
    fn test_missing_font_fails_startup() {
        let result = AppState::new(None, Some(Path::new("/nonexistent/font.ttf")));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_profile_fails_startup() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "compact:\n  quality: 500").unwrap();
        assert!(AppState::new(Some(file.path()), None).is_err());
    }
}
