//! Historical h-index series computation and trend estimation.
//!
//! This module holds the computational core of the system:
//! - [`h_index_series`] - Reconstructs the year-by-year h-index over the
//!   fixed window from a researcher's works
//! - [`trend_slope`] - Fits an ordinary-least-squares line to the series
//!   and returns its slope as the growth indicator
//!
//! The window is a design constant, not configuration: every researcher's
//! series covers exactly [`WINDOW_START`]..=[`WINDOW_END`].

mod series;
mod trend;

pub use series::h_index_series;
pub use trend::trend_slope;

/// First year of the history window (inclusive).
pub const WINDOW_START: i32 = 2015;

/// Last year of the history window (inclusive).
pub const WINDOW_END: i32 = 2025;

/// Number of years in the history window.
#[allow(clippy::cast_sign_loss)]
pub const WINDOW_LEN: usize = (WINDOW_END - WINDOW_START + 1) as usize;

/// Iterates the window years in ascending order.
pub fn window_years() -> impl Iterator<Item = i32> {
    WINDOW_START..=WINDOW_END
}

/// Pairs a computed series with its window years for regression input.
#[must_use]
pub fn series_points(series: &[u32; WINDOW_LEN]) -> Vec<(i32, u32)> {
    window_years().zip(series.iter().copied()).collect()
}
