//! Difficulty vote histograms rendered as WebP bar charts.
//!
//! The pipeline is synchronous and single-threaded per chart:
//! - Weighted average and label from level midpoints
//! - Selection of a contiguous window of at least five levels
//! - Layout and rasterization onto an RGBA canvas
//! - Pixel reordering and lossy WebP encoding

pub mod aggregate;
pub mod canvas;
pub mod config;
pub mod encode;
pub mod error;
pub mod glyphs;
pub mod layout;
pub mod pixels;
pub mod raster;
pub mod renderer;
pub mod taxonomy;
pub mod text;
pub mod votes;
pub mod window;

pub use aggregate::{format_average, label_for_average, weighted_average};
pub use canvas::{Canvas, Rgba};
pub use config::{ChartConfig, ChartProfiles, Profile};
pub use encode::WebpEncoder;
pub use error::{ChartError, ChartResult};
pub use layout::{AverageMarker, AxisTick, BarGeometry, ChartLayout};
pub use pixels::{to_rgba, ChannelOrder};
pub use renderer::{ChartRenderer, ChartSummary};
pub use taxonomy::{DifficultyLevel, Rgb, ValueRange};
pub use text::{TextRenderer, TextStyle};
pub use votes::VoteHistogram;
pub use window::{select_window, Window};
