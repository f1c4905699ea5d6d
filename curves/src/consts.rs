/// Length we consider a small distance (points whose components are all closer than this are considered to be the same)
pub const SMALL_DISTANCE: f64 = 0.001;

/// Largest value that `factorial` can be called with (so the largest bezier has this many control points plus one)
pub const MAX_FACTORIAL: usize = 16;

/// Default number of times a subdividing operation may split a curve before giving up
pub const DEFAULT_MAX_SUBDIVISION_DEPTH: usize = 32;

/// Default flattening tolerance, in game-world units
pub const DEFAULT_TOLERANCE: f64 = 1.0;

/// Default size (squared diagonal of the bounding box) below which two curves are treated as line segments when intersecting
pub const DEFAULT_INTERSECTION_AREA: f64 = 4.0;

/// Largest number of steps `flatten_uniform` will evaluate a curve at
pub const MAX_UNIFORM_STEPS: usize = 1_000_000;
