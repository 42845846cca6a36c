//! Async client for the DECP listing and lookup API.
//!
//! Construction takes an explicit [`Settings`] value; endpoints and
//! query-parameter names mirror the API's routers. The table-state
//! crate's tickets translate to wire parameters via
//! [`ParamsStructuresAgg::from_ticket`] and
//! [`FiltresMarches::from_ticket`].

pub mod client;
pub mod error;
pub mod params;
pub mod settings;

pub use client::ApiClient;
pub use error::{ClientError, Result};
pub use params::{ChampsOrdre, FiltresMarches, ParamsStructuresAgg};
pub use settings::{ApiSettings, Settings};
