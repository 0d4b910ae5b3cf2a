use crate::color::Color;
use crate::error::Result;
use crate::geometry::Shape;
use crate::materials::Material;
use crate::math::{Point3, Ray};

use ordered_float::OrderedFloat;
use tracing::warn;

/// A shape placed in the scene together with its surface material. Bodies
/// are addressed by their index in [`World::bodies`]; that index is the
/// body's identity for reflection exclusion.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub shape: Shape,
    pub material: Material,
}

impl Body {
    pub fn new(shape: impl Into<Shape>, material: impl Into<Material>) -> Body {
        Body {
            shape: shape.into(),
            material: material.into(),
        }
    }
}

/// One shape intersection: where, and which body produced it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    pub point: Point3,
    pub body_index: usize,
}

/// The scene: bodies, point lights, the camera position and the background
/// color a missing ray resolves to. Immutable for the duration of a render
/// and shared read-only between workers.
#[derive(Clone, Debug)]
pub struct World {
    pub bodies: Vec<Body>,
    pub lights: Vec<Point3>,
    pub camera: Point3,
    pub background: Color,
}

impl World {
    pub fn new(bodies: Vec<Body>, lights: Vec<Point3>, camera: Point3, background: Color) -> World {
        if lights.is_empty() {
            warn!("the world has no lights, every surface renders at full brightness");
        }
        World {
            bodies,
            lights,
            camera,
            background,
        }
    }

    /// Closest intersection along `ray`, skipping the body at `excluded`.
    ///
    /// Brute-force linear scan over every body. Hits are gathered in
    /// body-declaration order and reduced with a stable minimum, so ties at
    /// equal distance resolve to the earliest body.
    pub fn hit(&self, ray: &Ray, excluded: Option<usize>) -> Result<Option<HitRecord>> {
        let mut hits = Vec::new();
        for (body_index, body) in self.bodies.iter().enumerate() {
            if excluded == Some(body_index) {
                continue;
            }
            for point in body.shape.intersections(ray)? {
                hits.push(HitRecord { point, body_index });
            }
        }
        Ok(hits
            .into_iter()
            .min_by_key(|hit| OrderedFloat((hit.point - ray.origin).norm())))
    }
}
