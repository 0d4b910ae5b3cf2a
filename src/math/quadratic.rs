use approx::relative_eq;
use smallvec::{smallvec, SmallVec};

use crate::error::{RenderError, Result};

/// Real roots of a quadratic. Holds at most two values inline.
pub type Roots = SmallVec<[f32; 2]>;

const ROOT_TOLERANCE: f32 = 1e-4;

/// Real solution set of `a*x^2 + b*x + c = 0`.
///
/// Degenerates to the linear case when `a` is zero; `a == b == 0` has no
/// defined solution set and fails. A repeated root is returned once: the
/// two closed-form roots rarely compare bit-equal after the `±sqrt`
/// arithmetic, so deduplication goes through a relative tolerance rather
/// than `==`. Root order is unspecified.
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> Result<Roots> {
    if a == 0.0 {
        if b == 0.0 {
            return Err(RenderError::InvalidEquation(a, b, c));
        }
        return Ok(smallvec![-c / b]);
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Ok(Roots::new());
    }
    let sqrt_d = discriminant.sqrt();
    let first = (-b - sqrt_d) / (2.0 * a);
    let second = (-b + sqrt_d) / (2.0 * a);
    if relative_eq!(
        first,
        second,
        epsilon = ROOT_TOLERANCE,
        max_relative = ROOT_TOLERANCE
    ) {
        Ok(smallvec![first])
    } else {
        Ok(smallvec![first, second])
    }
}
