//! Error types for quadrature operations.

use std::fmt;

/// Result type for quadrature operations.
pub type QuadResult<T> = Result<T, QuadError>;

/// Errors that can occur during numerical quadrature.
#[derive(Debug, Clone)]
pub enum QuadError {
    /// Invalid interval provided (e.g., a >= b).
    InvalidInterval { a: f64, b: f64, context: String },

    /// Invalid parameter value.
    InvalidParameter { parameter: String, message: String },

    /// A refinement loop did not reach the requested tolerance.
    DidNotConverge {
        iterations: usize,
        tolerance: f64,
        context: String,
    },
}

impl fmt::Display for QuadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval { a, b, context } => {
                write!(
                    f,
                    "Invalid interval [{}, {}] in {}: bounds must satisfy a < b",
                    a, b, context
                )
            }
            Self::InvalidParameter { parameter, message } => {
                write!(f, "Invalid parameter '{}': {}", parameter, message)
            }
            Self::DidNotConverge {
                iterations,
                tolerance,
                context,
            } => {
                write!(
                    f,
                    "{}: did not converge after {} refinements (tolerance: {:.2e})",
                    context, iterations, tolerance
                )
            }
        }
    }
}

impl std::error::Error for QuadError {}
