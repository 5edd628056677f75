pub mod font;

pub use font::{FontAttributes, FontStyle, FontWeight};
