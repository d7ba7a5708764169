//! Layout engine for positioning text and borders
//!
//! This module takes the classified blocks and computes the spatial layout,
//! producing a `LayoutResult` of positioned primitives and the final value
//! of the vertical cursor.

pub mod config;
pub mod engine;
pub mod error;
pub mod types;
pub mod wrap;

pub use config::LayoutConfig;
pub use engine::compute;
pub use error::LayoutError;
pub use types::{BorderLine, LayoutResult, Primitive, TextBlock};
pub use wrap::wrap_cell;
