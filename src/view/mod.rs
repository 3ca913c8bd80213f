mod build;
mod chart;

pub use build::{build_pie_view, build_scatter_view};
pub use chart::{ChartSpec, PieChart, ScatterChart};
