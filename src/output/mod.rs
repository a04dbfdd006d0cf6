pub mod formatter;

pub use formatter::{format_breakdown, format_points, format_standings, should_use_colors};
