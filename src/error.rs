//! Error types for the ray casting engine.

use thiserror::Error;

/// Errors raised while constructing scene entities or tracing rays.
///
/// Every variant is unrecoverable for the operation that raised it and
/// propagates to the caller; the renderer treats any of them as fatal for
/// the whole render.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The solver received coefficients with no defined solution set.
    #[error("no solution set for {0}x^2 + {1}x + {2} = 0")]
    InvalidEquation(f32, f32, f32),

    /// A line was built with a zero direction, or an operation needed a
    /// direction the line cannot provide.
    #[error("invalid line: {0}")]
    InvalidLine(String),

    /// A color component fell outside [0; 255], or a negative multiplier
    /// was applied.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A pixel read or write landed outside the film dimensions.
    #[error("pixel ({x}, {y}) is out of bounds for a {width}x{height} film")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, RenderError>;
