use crate::error::{RenderError, Result};
use crate::geometry::Intersections;
use crate::math::{Point3, Ray, Vec3};

use smallvec::smallvec;

/// The plane `a*x + b*y + c*z + d = 0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

impl Plane {
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Plane {
        Plane { a, b, c, d }
    }

    fn coefficients(&self) -> Vec3 {
        Vec3::new(self.a, self.b, self.c)
    }

    /// Substituting the line into the plane equation gives `t*k + s = 0`;
    /// a parallel line (`t == 0`) never intersects.
    pub fn intersections(&self, ray: &Ray) -> Intersections {
        let coefficients = self.coefficients();
        let t = coefficients * ray.direction;
        if t == 0.0 {
            return Intersections::new();
        }
        let s = coefficients * Vec3::from(ray.origin) + self.d;
        let k = -s / t;
        if ray.contains(k) {
            smallvec![ray.point_at_parameter(k)]
        } else {
            Intersections::new()
        }
    }

    /// Surface normal rooted at `point`. Only axis-aligned planes (exactly
    /// one nonzero coefficient) have a defined normal here; the direction
    /// is the normalized coefficient vector.
    pub fn surface_normal(&self, point: Point3) -> Result<Ray> {
        let zeros = [self.a, self.b, self.c]
            .iter()
            .filter(|coefficient| **coefficient == 0.0)
            .count();
        if zeros != 2 {
            return Err(RenderError::InvalidLine(format!(
                "only axis-aligned planes are supported: {:?}",
                self
            )));
        }
        Ray::new(point, self.coefficients().normalized())
    }
}
