use super::consts::*;

use serde::{Serialize, Deserialize};

///
/// Parameters shared by the operations that adaptively subdivide curves
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveSettings {
    /// A curve whose best-fit bounding box is thinner than this in either direction is treated as a straight line
    pub tolerance: f64,

    /// Maximum number of times a curve is split before an operation gives up with `SubdivisionTooDeep`
    pub max_subdivision_depth: usize,

    /// Once both curves being intersected have bounding boxes with a squared diagonal below this, they are treated as lines
    pub intersection_area: f64,
}

impl CurveSettings {
    ///
    /// Creates the default settings with a different flattening tolerance
    ///
    pub fn with_tolerance(tolerance: f64) -> CurveSettings {
        CurveSettings {
            tolerance: tolerance,
            ..CurveSettings::default()
        }
    }
}

impl Default for CurveSettings {
    fn default() -> CurveSettings {
        CurveSettings {
            tolerance:              DEFAULT_TOLERANCE,
            max_subdivision_depth:  DEFAULT_MAX_SUBDIVISION_DEPTH,
            intersection_area:      DEFAULT_INTERSECTION_AREA
        }
    }
}
