mod plane;
mod sphere;

pub use plane::Plane;
pub use sphere::Sphere;

use crate::error::Result;
use crate::math::{Point3, Ray};

use smallvec::SmallVec;

/// Intersection points of a line with a shape; at most two for the shapes
/// here, so they stay inline.
pub type Intersections = SmallVec<[Point3; 2]>;

/// Analytic surface in the scene, dispatched by match. The variant set is
/// closed and known at compile time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Plane(Plane),
    Sphere(Sphere),
}

impl From<Plane> for Shape {
    fn from(data: Plane) -> Self {
        Shape::Plane(data)
    }
}

impl From<Sphere> for Shape {
    fn from(data: Sphere) -> Self {
        Shape::Sphere(data)
    }
}

impl Shape {
    /// Intersection points with `ray`, restricted to `ray.bounds`.
    pub fn intersections(&self, ray: &Ray) -> Result<Intersections> {
        match self {
            Shape::Plane(plane) => Ok(plane.intersections(ray)),
            Shape::Sphere(sphere) => sphere.intersections(ray),
        }
    }

    /// Surface normal at `point`, as a ray pointing out of the surface.
    pub fn surface_normal(&self, point: Point3) -> Result<Ray> {
        match self {
            Shape::Plane(plane) => plane.surface_normal(point),
            Shape::Sphere(sphere) => sphere.surface_normal(point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_through_shape() {
        let shapes: Vec<Shape> = vec![
            Plane::new(1.0, 0.0, 0.0, 0.0).into(),
            Sphere::new(Point3::ORIGIN, 0.5).into(),
        ];
        let ray = Ray::through(Point3::new(1.0, 0.0, 0.0), Point3::ORIGIN).unwrap();
        assert_eq!(shapes[0].intersections(&ray).unwrap().len(), 1);
        assert_eq!(shapes[1].intersections(&ray).unwrap().len(), 2);
    }
}
