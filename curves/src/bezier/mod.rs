//!
//! # Bezier curves
//!
//! `Bezier` is a single bezier curve of any supported order (lines, quadratic and cubic curves are the
//! usual ones) and `BezierSet` is a list of them making up a path. The functions here evaluate curves,
//! subdivide them with de Casteljau's algorithm, find their bounds, flatten them into polylines,
//! compute offset curves and find where two curves intersect.
//!
//! The adaptive algorithms (`flatten`, `offset_adaptive` and `curve_intersection_parameters`) all
//! work by splitting curves in half until a bounding box test passes. They keep an explicit stack of
//! pieces rather than recursing, and fail with `CurveError::SubdivisionTooDeep` if a piece still hasn't
//! passed the test after `CurveSettings::max_subdivision_depth` splits.
//!

mod combinatorics;
mod curve;
mod basis;
mod derivative;
mod subdivide;
mod bounds;
mod set;
mod flatten;
mod offset;
mod intersection;
mod joint;

pub use self::combinatorics::*;
pub use self::curve::*;
pub use self::basis::*;
pub use self::bounds::*;
pub use self::set::*;
pub use self::flatten::*;
pub use self::offset::*;
pub use self::intersection::*;
pub use self::joint::*;
