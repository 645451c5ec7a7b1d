//! Separator-agnostic path model used by the expander

pub mod segments;
pub mod separator;

pub use segments::{PathRoot, SegmentPath};
pub use separator::Separator;
