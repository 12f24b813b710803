//! Projection of an agrifield's model results into what the performance page
//! displays: the summary totals, three aligned bar series and the chart payload.
//!
//! Everything in here is pure. The page's server function calls [`render`],
//! the chart component turns the [`ViewModel`] into Highcharts options.

pub mod error;
pub mod format;
pub mod layout;
pub mod payload;
pub mod projection;
pub mod summary;

pub use format::NumberFormat;
pub use payload::ChartPayload;
pub use projection::{render, Totals, ViewModel};
