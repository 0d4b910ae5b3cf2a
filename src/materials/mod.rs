use crate::color::Color;
use crate::math::Point3;

/// Local 2-D plane a surface point projects onto before the checker
/// pattern index is computed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CheckerPlane {
    XY,
    XZ,
    YZ,
}

impl CheckerPlane {
    pub fn project(&self, point: Point3) -> (f32, f32) {
        match self {
            CheckerPlane::XY => (point.x, point.y),
            CheckerPlane::XZ => (point.x, point.z),
            CheckerPlane::YZ => (point.y, point.z),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Monochrome {
    pub color: Color,
}

impl Monochrome {
    pub const fn new(color: Color) -> Monochrome {
        Monochrome { color }
    }
}

/// Procedural checkerboard over squares of `square_width` scene units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Checkered {
    pub square_width: f32,
    pub lighter: Color,
    pub darker: Color,
    pub plane: CheckerPlane,
}

impl Checkered {
    pub fn color_at(&self, point: Point3) -> Color {
        let (u, v) = self.plane.project(point);
        if (self.square_index(u) + self.square_index(v)) % 2 != 0 {
            self.darker
        } else {
            self.lighter
        }
    }

    fn square_index(&self, coordinate: f32) -> i64 {
        (coordinate / self.square_width).floor() as i64
    }
}

/// Surface material. `Mirror` carries no color of its own; the integrator
/// special-cases it and bounces the ray instead of asking for one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Material {
    Monochrome(Monochrome),
    Checkered(Checkered),
    Mirror,
}

impl From<Monochrome> for Material {
    fn from(data: Monochrome) -> Self {
        Material::Monochrome(data)
    }
}

impl From<Checkered> for Material {
    fn from(data: Checkered) -> Self {
        Material::Checkered(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkered() -> Checkered {
        Checkered {
            square_width: 20.0,
            lighter: Color::WHITE,
            darker: Color::BLACK,
            plane: CheckerPlane::XY,
        }
    }

    #[test]
    fn test_monochrome_ignores_point() {
        let material = Monochrome::new(Color::GRAY);
        assert_eq!(material.color, Color::GRAY);
    }

    #[test]
    fn test_projections() {
        let point = Point3::new(3.0, 4.0, 5.0);
        assert_eq!(CheckerPlane::XY.project(point), (3.0, 4.0));
        assert_eq!(CheckerPlane::XZ.project(point), (3.0, 5.0));
        assert_eq!(CheckerPlane::YZ.project(point), (4.0, 5.0));
    }

    #[test]
    fn test_checkered_pattern() {
        let material = checkered();
        let cases = [
            (Point3::new(10.0, 10.0, 90.0), Color::WHITE),
            (Point3::new(-10.0, -10.0, 90.0), Color::WHITE),
            (Point3::new(10.0, -10.0, 90.0), Color::BLACK),
            (Point3::new(30.0, 10.0, 90.0), Color::BLACK),
        ];
        for (point, expected) in cases {
            assert_eq!(material.color_at(point), expected, "at {:?}", point);
        }
    }
}
