//! Display formatting for DECP records.
//!
//! Pure functions shared by every rendering surface — terminal tables,
//! the export encoders, summaries — so one record shows the same cell
//! values everywhere.

pub mod text;
pub mod value;

pub use text::{long_labels_breaker, structure_name};
pub use value::{duration_in_months, format_boolean, format_currency, format_date};
