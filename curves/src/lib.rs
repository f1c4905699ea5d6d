//!
//! # owp_curves
//!
//! Geometry for the slider paths of a rhythm game. A slider is authored as a list of anchor
//! points, which is turned into a `BezierSet` of independent bezier segments. This crate
//! evaluates, subdivides and bounds those segments, flattens them into polylines, offsets
//! them (with circular joints and caps) to build the outline of the slider track and finds
//! where two curves intersect.
//!
//! All of the operations here are pure functions of their inputs: nothing is cached and
//! nothing is mutated after construction, so curves can be shared freely between threads.
//!

#![warn(bare_trait_objects)]

#[macro_use] extern crate log;

pub mod bezier;
pub mod line;
pub mod arc;

mod consts;
pub use self::consts::*;

mod error;
pub use self::error::*;

mod settings;
pub use self::settings::*;

pub mod coordinate;
pub use self::coordinate::*;

pub mod geo;
pub use self::geo::*;

pub use self::bezier::{Bezier, BezierSet, SetPosition};
