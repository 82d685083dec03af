//! End-to-end rendering tests.

use std::io::Write;
use std::sync::Arc;

use difficulty_chart::{
    ChartConfig, ChartProfiles, ChartRenderer, Profile, TextRenderer, VoteHistogram,
};

fn sample_votes() -> VoteHistogram {
    VoteHistogram::from([
        ("Easy", 2),
        ("Easy +", 5),
        ("Medium -", 8),
        ("Medium", 12),
        ("Medium +", 6),
        ("Hard -", 3),
        ("Hard", 1),
    ])
}

fn assert_webp(data: &[u8]) {
    assert!(data.len() > 12, "output too short: {} bytes", data.len());
    assert_eq!(&data[0..4], b"RIFF");
    assert_eq!(&data[8..12], b"WEBP");
    let riff_len = u32::from_le_bytes([data[4], data[5], data[6], data[7]]) as usize;
    assert_eq!(riff_len + 8, data.len());
}

// ============================================================================
// Profiles
// ============================================================================

#[test]
fn test_compact_and_wide_render_webp() {
    let votes = sample_votes();
    for config in [ChartConfig::compact(), ChartConfig::wide()] {
        let renderer = ChartRenderer::new(config).unwrap();
        assert_webp(&renderer.render(&votes).unwrap());
    }
}

#[test]
fn test_canvas_size_follows_profile() {
    let votes = sample_votes();

    let compact = ChartRenderer::new(ChartConfig::compact()).unwrap();
    let canvas = compact.rasterize(&votes).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (1000, 500));

    let wide = ChartRenderer::new(ChartConfig::wide()).unwrap();
    let canvas = wide.rasterize(&votes).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (1600, 600));
}

#[test]
fn test_profiles_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "compact:\n  width: 800\n  height: 400\n  quality: 70").unwrap();

    let profiles = ChartProfiles::from_file(file.path()).unwrap();
    let config = profiles.get(Profile::Compact).clone();
    assert_eq!(config.width, 800);
    assert_eq!(profiles.get(Profile::Wide), &ChartConfig::wide());

    let renderer = ChartRenderer::new(config).unwrap();
    let canvas = renderer.rasterize(&sample_votes()).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (800, 400));
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_empty_histogram_still_renders() {
    let renderer = ChartRenderer::new(ChartConfig::compact()).unwrap();
    assert_webp(&renderer.render(&VoteHistogram::new()).unwrap());
}

#[test]
fn test_only_unknown_levels_still_renders() {
    let renderer = ChartRenderer::new(ChartConfig::compact()).unwrap();
    let votes = VoteHistogram::from([("Trivial", 9)]);
    let summary = renderer.summarize(&votes);
    assert_eq!(summary.average, 0.0);
    assert_eq!(summary.label, "Easy -");
    assert_webp(&renderer.render(&votes).unwrap());
}

#[test]
fn test_single_level_at_scale_ends() {
    let renderer = ChartRenderer::new(ChartConfig::wide()).unwrap();
    for name in ["Easy -", "Hell"] {
        let votes = VoteHistogram::from([(name, 1)]);
        assert_webp(&renderer.render(&votes).unwrap());
    }
}

#[test]
fn test_huge_counts_render() {
    let renderer = ChartRenderer::new(ChartConfig::compact()).unwrap();
    let votes = VoteHistogram::from([("Hard", 1_000_000), ("Hard +", 1)]);
    assert_webp(&renderer.render(&votes).unwrap());
}

#[test]
fn test_largest_accepted_counts_render() {
    let renderer = ChartRenderer::new(ChartConfig::compact()).unwrap();
    let max = i64::MAX as u64;

    let votes = VoteHistogram::from([("Hell", max)]);
    assert_webp(&renderer.render(&votes).unwrap());

    let votes = VoteHistogram::from([("Easy", max), ("Hard", max), ("Hell", max)]);
    let summary = renderer.summarize(&votes);
    assert!((0.0..10.0).contains(&summary.average));
    assert_webp(&renderer.render(&votes).unwrap());
}

// ============================================================================
// Pixels
// ============================================================================

#[test]
fn test_background_and_bar_colors() {
    let renderer = ChartRenderer::new(ChartConfig::compact()).unwrap();
    let votes = VoteHistogram::from([("Medium", 10)]);
    let canvas = renderer.rasterize(&votes).unwrap();

    assert_eq!(canvas.pixel(3, 3), Some([0x2b, 0x2d, 0x31, 255]));

    // Window 2..=6 puts Medium in the middle slot.
    let config = renderer.config();
    let bar_width = (config.chart_width() - 4.0 * config.bar_gap) / 5.0;
    let x = config.left_margin + 2.0 * (bar_width + config.bar_gap) + bar_width / 4.0;
    let y = config.height as f32 - config.bottom_margin - 20.0;
    assert_eq!(canvas.pixel(x as u32, y as u32), Some([0x99, 0xe6, 0x00, 255]));
}

#[test]
fn test_rendering_is_deterministic() {
    let renderer = ChartRenderer::new(ChartConfig::compact()).unwrap();
    let votes = sample_votes();
    let a = renderer.rasterize(&votes).unwrap();
    let b = renderer.rasterize(&votes).unwrap();
    assert_eq!(a.data(), b.data());
}

#[test]
fn test_shared_text_renderer() {
    let text = Arc::new(TextRenderer::builtin());
    let compact = ChartRenderer::with_text(ChartConfig::compact(), Arc::clone(&text)).unwrap();
    let wide = ChartRenderer::with_text(ChartConfig::wide(), text).unwrap();
    assert_webp(&compact.render(&sample_votes()).unwrap());
    assert_webp(&wide.render(&sample_votes()).unwrap());
}
