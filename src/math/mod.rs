mod bounds;
mod point;
mod quadratic;
mod vec;

pub use bounds::Bounds1D;
pub use point::Point3;
pub use quadratic::{solve_quadratic, Roots};
pub use vec::Vec3;

use crate::error::{RenderError, Result};

/// A parametric line `origin + k * direction`, restricted to the parameters
/// in `bounds`. Depending on the bounds this is a segment, a half-line, or
/// an infinite line. The direction is never the zero vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
    pub bounds: Bounds1D,
}

impl Ray {
    /// Half-line from `origin`, parameters in `[0, inf)`.
    pub fn new(origin: Point3, direction: Vec3) -> Result<Ray> {
        if direction == Vec3::ZERO {
            return Err(RenderError::InvalidLine(
                "direction must be nonzero".to_string(),
            ));
        }
        Ok(Ray {
            origin,
            direction,
            bounds: Bounds1D::POSITIVE,
        })
    }

    /// Infinite line, valid at every parameter.
    pub fn line(origin: Point3, direction: Vec3) -> Result<Ray> {
        Ok(Ray::new(origin, direction)?.with_bounds(Bounds1D::FULL))
    }

    /// Half-line from `origin` aimed at `target`.
    pub fn through(origin: Point3, target: Point3) -> Result<Ray> {
        if origin == target {
            return Err(RenderError::InvalidLine(format!(
                "a line through two points needs them distinct, got {:?} twice",
                origin
            )));
        }
        Ray::new(origin, target - origin)
    }

    /// Segment between two points, parameters in `[0, 1]`.
    pub fn segment(from: Point3, to: Point3) -> Result<Ray> {
        Ok(Ray::through(from, to)?.with_bounds(Bounds1D::UNIT))
    }

    pub fn with_bounds(mut self, bounds: Bounds1D) -> Ray {
        self.bounds = bounds;
        self
    }

    pub fn point_at_parameter(&self, k: f32) -> Point3 {
        self.origin + self.direction * k
    }

    /// Whether `k` lies in this line's validity interval.
    pub fn contains(&self, k: f32) -> bool {
        self.bounds.contains(k)
    }

    /// Ray from `self.origin` to the foot of the perpendicular dropped onto
    /// `other`, ignoring `other`'s bounds. Fails when `self.origin` already
    /// lies on `other`.
    pub fn perpendicular_foot(&self, other: &Ray) -> Result<Ray> {
        let denominator = other.direction * other.direction;
        if denominator == 0.0 {
            return Err(RenderError::InvalidLine(
                "cannot project onto a zero-direction line".to_string(),
            ));
        }
        let k = (other.direction * (self.origin - other.origin)) / denominator;
        let foot = other.origin + other.direction * k;
        Ray::through(self.origin, foot)
    }

    /// Reflect `self.origin` across `axis`: the result runs from
    /// `axis.origin` through the mirrored point, as a half-line.
    pub fn mirror(&self, axis: &Ray) -> Result<Ray> {
        let perpendicular = self.perpendicular_foot(axis)?;
        let target = perpendicular.origin + perpendicular.direction * 2.0;
        Ray::through(axis.origin, target)
    }
}
