use crate::error::Result;
use crate::geometry::Intersections;
use crate::math::{solve_quadratic, Point3, Ray};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f32,
}

impl Sphere {
    pub const fn new(center: Point3, radius: f32) -> Sphere {
        Sphere { center, radius }
    }

    /// Substituting the line into `|P - center|^2 = radius^2` gives a
    /// quadratic in the line parameter.
    pub fn intersections(&self, ray: &Ray) -> Result<Intersections> {
        let oc = ray.origin - self.center;
        let a = ray.direction * ray.direction;
        let b = 2.0 * (oc * ray.direction);
        let c = oc * oc - self.radius * self.radius;
        let roots = solve_quadratic(a, b, c)?;
        Ok(roots
            .into_iter()
            .filter(|k| ray.contains(*k))
            .map(|k| ray.point_at_parameter(k))
            .collect())
    }

    /// Surface normal at `point`: the line from the center through `point`.
    pub fn surface_normal(&self, point: Point3) -> Result<Ray> {
        Ray::through(self.center, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    fn x_axis_ray() -> Ray {
        Ray::through(Point3::new(1.0, 0.0, 0.0), Point3::ORIGIN).unwrap()
    }

    #[test]
    fn test_ray_through_small_sphere() {
        let sphere = Sphere::new(Point3::ORIGIN, 0.5);
        let points = sphere.intersections(&x_axis_ray()).unwrap();
        assert_eq!(
            points.to_vec(),
            vec![Point3::new(0.5, 0.0, 0.0), Point3::new(-0.5, 0.0, 0.0)]
        );
    }

    #[test]
    fn test_ray_starting_inside_large_sphere() {
        let sphere = Sphere::new(Point3::ORIGIN, 2.0);
        let points = sphere.intersections(&x_axis_ray()).unwrap();
        // the +x intersection sits behind the ray origin and is filtered
        assert_eq!(points.to_vec(), vec![Point3::new(-2.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_ray_missing_sphere() {
        let sphere = Sphere::new(Point3::new(0.0, 10.0, 0.0), 1.0);
        assert!(sphere.intersections(&x_axis_ray()).unwrap().is_empty());
    }

    #[test]
    fn test_surface_normal_points_outward() {
        let sphere = Sphere::new(Point3::new(1.0, 0.0, 0.0), 1.0);
        let normal = sphere.surface_normal(Point3::new(2.0, 0.0, 0.0)).unwrap();
        assert_eq!(normal.origin, sphere.center);
        assert_eq!(normal.direction, Vec3::X);
    }

    #[test]
    fn test_surface_normal_at_center_rejected() {
        let sphere = Sphere::new(Point3::ORIGIN, 1.0);
        assert!(sphere.surface_normal(Point3::ORIGIN).is_err());
    }
}
