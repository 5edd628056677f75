pub mod color;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod profile;
pub mod records;

pub use color::Color;
pub use error::{DataShapeError, FormatWarning};
pub use geometry::{Point, Rect, Size};
pub use ids::VendorId;
pub use profile::{Financials, VendorProfile};
pub use records::{ContractRecord, ContractTerm, ProjectRecord, SpendRecord};
