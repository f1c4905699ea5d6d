//!
//! # Describing circular arcs
//!
//! The `arc` module approximates circular arcs with cubic bezier curves. These are used for the rounded
//! joints and end caps of offset paths.
//!

mod circle;

pub use self::circle::*;
