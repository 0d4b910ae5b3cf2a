pub use crate::color::Color;
pub use crate::error::{RenderError, Result};
pub use crate::geometry::{Intersections, Plane, Shape, Sphere};
pub use crate::integrator::RayCastIntegrator;
pub use crate::materials::{CheckerPlane, Checkered, Material, Monochrome};
pub use crate::math::{solve_quadratic, Bounds1D, Point3, Ray, Vec3};
pub use crate::renderer::{output_film, Film, NaiveRenderer};
pub use crate::world::{Body, HitRecord, World};
