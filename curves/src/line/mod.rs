//!
//! # Straight line segments
//!
//! Curves that have been subdivided far enough are treated as the straight line between their end
//! points. A line is anything implementing `Line`; the simplest is a tuple of two points.
//!

mod line;
mod intersection;

pub use self::line::*;
pub use self::intersection::*;
