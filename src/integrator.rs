//! Color resolution for a single camera ray: the bounded mirror-bounce
//! loop, the hard-shadow test and the distance falloff.

use std::sync::Arc;

use crate::color::Color;
use crate::error::Result;
use crate::materials::Material;
use crate::math::{Point3, Ray};
use crate::world::World;

/// Bounce cap for mirror reflection chains.
pub const MAX_BOUNCES: u16 = 5;
/// Lights further away than this contribute `LIGHT_REACH / distance`.
pub const LIGHT_REACH: f32 = 800.0;
/// Attenuation for a surface point occluded from a light.
pub const SHADOW_COEFFICIENT: f32 = 0.5;
/// Intersections closer than this to the lit point are the surface itself,
/// not an occluder.
pub const OCCLUDER_MIN_DISTANCE: f32 = 1.0;

pub struct RayCastIntegrator {
    pub world: Arc<World>,
    pub max_bounces: u16,
}

impl RayCastIntegrator {
    pub fn new(world: Arc<World>) -> RayCastIntegrator {
        RayCastIntegrator {
            world,
            max_bounces: MAX_BOUNCES,
        }
    }

    /// Resolve the color seen along `camera_ray`.
    ///
    /// Each iteration intersects the current ray against every body except
    /// the one the ray just reflected off. A mirror hit swaps the ray for
    /// its reflection and keeps going; any other hit resolves to the
    /// material color scaled by the lighting coefficient. A miss, or
    /// exhausting the bounce cap inside a mirror corridor, resolves to the
    /// background.
    pub fn color(&self, camera_ray: Ray) -> Result<Color> {
        let mut ray = camera_ray;
        let mut excluded = None;
        let mut resolved = self.world.background;
        for _ in 0..self.max_bounces {
            let hit = match self.world.hit(&ray, excluded)? {
                Some(hit) => hit,
                None => break,
            };
            let body = &self.world.bodies[hit.body_index];
            match &body.material {
                Material::Mirror => {
                    let normal = body.shape.surface_normal(hit.point)?;
                    ray = ray.mirror(&normal)?;
                    // exclusion covers the mirrored body only, never
                    // accumulates across bounces
                    excluded = Some(hit.body_index);
                }
                Material::Monochrome(monochrome) => {
                    resolved = monochrome.color.scaled(self.light_coefficient(hit.point)?)?;
                    break;
                }
                Material::Checkered(checkered) => {
                    resolved = checkered
                        .color_at(hit.point)
                        .scaled(self.light_coefficient(hit.point)?)?;
                    break;
                }
            }
        }
        Ok(resolved)
    }

    /// Lighting factor at `point`: the best-lit light wins. Shadowed lights
    /// contribute a fixed coefficient, distant lights fall off inversely,
    /// near lights contribute full brightness. Defaults to full brightness
    /// when the scene has no lights.
    fn light_coefficient(&self, point: Point3) -> Result<f32> {
        if self.world.lights.is_empty() {
            return Ok(1.0);
        }
        let mut coefficient: f32 = 0.0;
        for light in &self.world.lights {
            let contribution = if self.occluded(point, *light)? {
                SHADOW_COEFFICIENT
            } else {
                let distance = (*light - point).norm();
                if distance > LIGHT_REACH {
                    LIGHT_REACH / distance
                } else {
                    1.0
                }
            };
            coefficient = coefficient.max(contribution);
        }
        Ok(coefficient)
    }

    /// Whether anything blocks the segment from `point` to `light`.
    /// Intersections within [`OCCLUDER_MIN_DISTANCE`] of `point` are the
    /// surface the point sits on and do not count.
    fn occluded(&self, point: Point3, light: Point3) -> Result<bool> {
        let segment = Ray::segment(point, light)?;
        for body in &self.world.bodies {
            for intersection in body.shape.intersections(&segment)? {
                if (intersection - point).norm() > OCCLUDER_MIN_DISTANCE {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Plane, Sphere};
    use crate::materials::Monochrome;
    use crate::math::Vec3;
    use crate::world::Body;

    const FLOOR_COLOR: Color = Color::rgb(170, 170, 170);
    const SKY: Color = Color::rgb(0, 0, 60);

    fn floor_world(lights: Vec<Point3>) -> Arc<World> {
        Arc::new(World::new(
            vec![Body::new(
                Plane::new(0.0, 1.0, 0.0, 0.0),
                Monochrome::new(FLOOR_COLOR),
            )],
            lights,
            Point3::new(0.0, 100.0, -100.0),
            SKY,
        ))
    }

    #[test]
    fn test_floor_hit_resolves_material_under_one_light() {
        // light close enough for full brightness, nothing to occlude it
        let world = floor_world(vec![Point3::new(0.0, 200.0, 100.0)]);
        let integrator = RayCastIntegrator::new(world.clone());
        let ray = Ray::through(world.camera, Point3::new(0.0, 50.0, 0.0)).unwrap();
        assert_eq!(integrator.color(ray).unwrap(), FLOOR_COLOR);
    }

    #[test]
    fn test_miss_resolves_sky() {
        let world = floor_world(vec![Point3::new(0.0, 200.0, 100.0)]);
        let integrator = RayCastIntegrator::new(world.clone());
        let ray = Ray::through(world.camera, Point3::new(0.0, 150.0, 0.0)).unwrap();
        assert_eq!(integrator.color(ray).unwrap(), SKY);
    }

    #[test]
    fn test_distant_light_falls_off() {
        let light = Point3::new(0.0, 1600.0, 0.0);
        let world = floor_world(vec![light]);
        let integrator = RayCastIntegrator::new(world.clone());
        let ray = Ray::through(world.camera, Point3::new(0.0, 50.0, 0.0)).unwrap();
        // the ray hits the floor at y = 0 directly below the light
        let hit = world.bodies[0]
            .shape
            .intersections(&ray)
            .unwrap()
            .to_vec()[0];
        let expected = FLOOR_COLOR
            .scaled(LIGHT_REACH / (light - hit).norm())
            .unwrap();
        assert_eq!(integrator.color(ray).unwrap(), expected);
    }

    #[test]
    fn test_occluder_casts_hard_shadow() {
        let light = Point3::new(0.0, 400.0, 0.0);
        let mut world = (*floor_world(vec![light])).clone();
        // a sphere centered on the midpoint of the floor-to-light segment
        world.bodies.push(Body::new(
            Sphere::new(Point3::new(0.0, 200.0, 50.0), 20.0),
            Monochrome::new(Color::WHITE),
        ));
        let world = Arc::new(world);
        let integrator = RayCastIntegrator::new(world.clone());
        let ray = Ray::through(world.camera, Point3::new(0.0, 50.0, 0.0)).unwrap();
        let expected = FLOOR_COLOR.scaled(SHADOW_COEFFICIENT).unwrap();
        assert_eq!(integrator.color(ray).unwrap(), expected);
    }

    #[test]
    fn test_brightest_light_wins() {
        // one shadowed light, one clear light: the clear one dominates
        let clear = Point3::new(300.0, 300.0, 0.0);
        let blocked = Point3::new(0.0, 400.0, 0.0);
        let mut world = (*floor_world(vec![blocked, clear])).clone();
        world.bodies.push(Body::new(
            Sphere::new(Point3::new(0.0, 200.0, 50.0), 20.0),
            Monochrome::new(Color::WHITE),
        ));
        let world = Arc::new(world);
        let integrator = RayCastIntegrator::new(world.clone());
        let ray = Ray::through(world.camera, Point3::new(0.0, 50.0, 0.0)).unwrap();
        assert_eq!(integrator.color(ray).unwrap(), FLOOR_COLOR);
    }

    #[test]
    fn test_mirror_corridor_terminates_at_bounce_cap() {
        // two facing mirror planes and nothing else: the ray ping-pongs
        // until the cap and resolves to the background
        let world = Arc::new(World::new(
            vec![
                Body::new(Plane::new(1.0, 0.0, 0.0, 0.0), Material::Mirror),
                Body::new(Plane::new(1.0, 0.0, 0.0, -100.0), Material::Mirror),
            ],
            vec![],
            Point3::new(50.0, 5.0, 5.0),
            SKY,
        ));
        let integrator = RayCastIntegrator::new(world.clone());
        let ray = Ray::new(world.camera, Vec3::new(-1.0, 0.1, 0.0)).unwrap();
        assert_eq!(integrator.color(ray).unwrap(), SKY);
    }

    #[test]
    fn test_mirror_reflects_onto_colored_wall() {
        // camera ray bounces off the mirror at x = 0 and lands on the
        // monochrome plane at y = 100
        let world = Arc::new(World::new(
            vec![
                Body::new(Plane::new(1.0, 0.0, 0.0, 0.0), Material::Mirror),
                Body::new(
                    Plane::new(0.0, 1.0, 0.0, -100.0),
                    Monochrome::new(Color::GRAY),
                ),
            ],
            vec![],
            Point3::new(50.0, 5.0, 5.0),
            SKY,
        ));
        let integrator = RayCastIntegrator::new(world.clone());
        let ray = Ray::new(world.camera, Vec3::new(-1.0, 0.1, 0.0)).unwrap();
        assert_eq!(integrator.color(ray).unwrap(), Color::GRAY);
    }

    #[test]
    fn test_tilted_mirror_is_fatal() {
        let world = Arc::new(World::new(
            vec![Body::new(
                Plane::new(1.0, 1.0, 0.0, 0.0),
                Material::Mirror,
            )],
            vec![],
            Point3::new(50.0, 5.0, 5.0),
            SKY,
        ));
        let integrator = RayCastIntegrator::new(world.clone());
        let ray = Ray::new(world.camera, Vec3::new(-1.0, -1.0, 0.0)).unwrap();
        assert!(integrator.color(ray).is_err());
    }
}
