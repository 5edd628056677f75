//! Tabular inputs for the fact sheet pipeline.
//!
//! Loading and filtering of the three extracts, the vendor roster, typed
//! record extraction, spend history simulation and the JSON profile store.

pub mod cleaned;
pub mod dataset;
pub mod error;
pub mod extract;
pub mod profiles;
pub mod roster;
pub mod schema;
pub mod simulate;

pub use cleaned::{CleanedData, CleanedDatasets, RawDatasets, VendorSlice};
pub use dataset::{Dataset, Filter, Predicate};
pub use error::SourceError;
pub use profiles::JsonProfileProvider;
pub use roster::VendorRoster;
pub use simulate::{SERIES_YEARS, SimulatedSpend, simulate_history};
