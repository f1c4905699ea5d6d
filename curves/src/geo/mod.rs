//!
//! # Axis-aligned bounding boxes
//!
//! `Bounds` describes the rectangle that contains a curve. Bounding boxes drive most of the adaptive
//! algorithms in this crate: a curve is considered flat once its best-fit bounding box is thin, and
//! two curves can't intersect if their bounding boxes don't overlap.
//!

mod bounding_box;

pub use self::bounding_box::*;
pub use super::coordinate::*;
