//! Declarative scene description: TOML data structs and their conversion
//! into a [`World`].

pub mod config;

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use serde::Deserialize;

use crate::color::Color;
use crate::geometry::{Plane, Shape, Sphere};
use crate::materials::{CheckerPlane, Checkered, Material, Monochrome};
use crate::math::Point3;
use crate::world::{Body, World};

pub type Point3Data = [f32; 3];
pub type ColorData = [i32; 3];

#[derive(Deserialize, Clone, Debug)]
#[serde(tag = "type")]
pub enum ShapeData {
    Plane { a: f32, b: f32, c: f32, d: f32 },
    Sphere { center: Point3Data, radius: f32 },
}

#[derive(Deserialize, Copy, Clone, Debug)]
pub enum CheckerPlaneData {
    XY,
    XZ,
    YZ,
}

impl From<CheckerPlaneData> for CheckerPlane {
    fn from(data: CheckerPlaneData) -> Self {
        match data {
            CheckerPlaneData::XY => CheckerPlane::XY,
            CheckerPlaneData::XZ => CheckerPlane::XZ,
            CheckerPlaneData::YZ => CheckerPlane::YZ,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(tag = "type")]
pub enum MaterialData {
    Monochrome {
        color: ColorData,
    },
    Checkered {
        square_width: f32,
        lighter: ColorData,
        darker: ColorData,
        plane: CheckerPlaneData,
    },
    Mirror,
}

#[derive(Deserialize, Clone, Debug)]
pub struct BodyData {
    pub shape: ShapeData,
    pub material: MaterialData,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SceneData {
    pub camera: Point3Data,
    #[serde(default)]
    pub lights: Vec<Point3Data>,
    pub background: Option<ColorData>,
    pub bodies: Vec<BodyData>,
}

fn parse_color(data: ColorData) -> anyhow::Result<Color> {
    Ok(Color::new(data[0], data[1], data[2])?)
}

fn parse_shape(data: ShapeData) -> anyhow::Result<Shape> {
    match data {
        ShapeData::Plane { a, b, c, d } => {
            if a == 0.0 && b == 0.0 && c == 0.0 {
                bail!("plane ({}, {}, {}, {}) has a zero coefficient vector", a, b, c, d);
            }
            Ok(Plane::new(a, b, c, d).into())
        }
        ShapeData::Sphere { center, radius } => {
            if radius <= 0.0 {
                bail!("sphere radius must be positive, got {}", radius);
            }
            Ok(Sphere::new(Point3::from(center), radius).into())
        }
    }
}

fn parse_material(data: MaterialData) -> anyhow::Result<Material> {
    Ok(match data {
        MaterialData::Monochrome { color } => Monochrome::new(parse_color(color)?).into(),
        MaterialData::Checkered {
            square_width,
            lighter,
            darker,
            plane,
        } => {
            if square_width <= 0.0 {
                bail!("checker square width must be positive, got {}", square_width);
            }
            Checkered {
                square_width,
                lighter: parse_color(lighter)?,
                darker: parse_color(darker)?,
                plane: plane.into(),
            }
            .into()
        }
        MaterialData::Mirror => Material::Mirror,
    })
}

pub fn parse_scene(data: SceneData) -> anyhow::Result<World> {
    let background = match data.background {
        Some(color) => parse_color(color)?,
        None => Color::BLACK,
    };
    let bodies = data
        .bodies
        .into_iter()
        .map(|body| Ok(Body::new(parse_shape(body.shape)?, parse_material(body.material)?)))
        .collect::<anyhow::Result<Vec<Body>>>()?;
    let lights = data.lights.into_iter().map(Point3::from).collect();
    Ok(World::new(bodies, lights, Point3::from(data.camera), background))
}

pub fn construct_world(scene_file: PathBuf) -> anyhow::Result<World> {
    let mut input = String::new();
    File::open(&scene_file)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("couldn't read scene file {}", scene_file.display()))?;
    let data: SceneData = toml::from_str(&input)
        .with_context(|| format!("couldn't parse scene file {}", scene_file.display()))?;
    parse_scene(data)
}
