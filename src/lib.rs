//!
//! # Slider curves
//!
//! A slider is a path made from a list of anchor points, which the player follows over time. `SliderCurve`
//! turns the anchor points into a set of bezier curves (a repeated anchor point starts a new curve) and
//! produces the polylines used to draw the slider and to test whether a pointer is on it: the flattened
//! centre line and the outline around it at a given radius.
//!
//! The geometry itself is in the `owp_curves` crate.
//!

#![warn(bare_trait_objects)]

#[macro_use]
extern crate log;

mod settings;
mod slider_curve;
mod arc_length;
mod progress;

pub use self::settings::*;
pub use self::slider_curve::*;
pub use self::arc_length::*;
pub use self::progress::*;

pub use owp_curves::{Coord2, Bounds, CurveError, CurveResult, CurveSettings};
