use thiserror::Error;

///
/// Errors that can occur while building or processing curves
///
#[derive(Error, Clone, Debug, PartialEq)]
pub enum CurveError {
    /// A bezier curve was created with fewer than two control points
    #[error("a bezier curve needs at least 2 control points (got {0})")]
    TooFewControlPoints(usize),

    /// A bezier curve was created with more control points than the basis function supports
    #[error("a bezier curve can have at most 17 control points (got {0})")]
    TooManyControlPoints(usize),

    /// `factorial` or `choose` was called with a value outside of the lookup table
    #[error("factorial of {0} is outside of the supported range")]
    FactorialOutOfRange(usize),

    /// A recursive subdivision did not converge before reaching the depth limit
    #[error("{operation} did not converge after subdividing {depth} times")]
    SubdivisionTooDeep { operation: &'static str, depth: usize },

    /// A curve was requested from an empty list of anchor points
    #[error("a slider needs at least one anchor point")]
    EmptyCurve,

    /// A parameter was not a valid position on a curve or a set of curves
    #[error("{0} is not a valid position on this curve")]
    InvalidParameter(f64),
}

/// Result of an operation on a curve
pub type CurveResult<T> = Result<T, CurveError>;
