//! Patch (area) and node (point) fibers.

use crate::geometry::{Point, polygon_area_centroid, rotate_about};
use fk_core::Real;
use fk_materials::MaterialLaw;
use nalgebra::Rotation2;
use std::sync::Arc;

/// Material law shared between the fibers of one region.
pub type SharedLaw = Arc<dyn MaterialLaw>;

/// A polygonal slice of concrete.
#[derive(Debug, Clone)]
pub struct PatchFiber {
    vertices: Vec<Point>,
    centroid: Point,
    area: Real,
    material: SharedLaw,
}

impl PatchFiber {
    pub fn new(vertices: Vec<Point>, material: SharedLaw) -> Self {
        let (area, centroid) = polygon_area_centroid(&vertices);
        Self {
            vertices,
            centroid,
            area,
            material,
        }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn centroid(&self) -> Point {
        self.centroid
    }

    pub fn area(&self) -> Real {
        self.area
    }

    pub fn material(&self) -> &SharedLaw {
        &self.material
    }
}

/// A discrete reinforcing bar.
#[derive(Debug, Clone)]
pub struct NodeFiber {
    coord: Point,
    area: Real,
    material: SharedLaw,
}

impl NodeFiber {
    pub fn new(coord: Point, area: Real, material: SharedLaw) -> Self {
        Self {
            coord,
            area,
            material,
        }
    }

    pub fn coord(&self) -> Point {
        self.coord
    }

    pub fn area(&self) -> Real {
        self.area
    }

    pub fn material(&self) -> &SharedLaw {
        &self.material
    }

    /// Radius of a circle with the bar's area.
    pub fn radius(&self) -> Real {
        (self.area / std::f64::consts::PI).sqrt()
    }
}

/// Geometric outline of a fiber for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Footprint {
    Polygon(Vec<[Real; 2]>),
    Circle { center: [Real; 2], radius: Real },
}

#[derive(Debug, Clone)]
pub enum Fiber {
    Patch(PatchFiber),
    Node(NodeFiber),
}

impl Fiber {
    /// Point used for strain evaluation and moment arms.
    pub fn position(&self) -> Point {
        match self {
            Fiber::Patch(p) => p.centroid,
            Fiber::Node(n) => n.coord,
        }
    }

    pub fn area(&self) -> Real {
        match self {
            Fiber::Patch(p) => p.area,
            Fiber::Node(n) => n.area,
        }
    }

    pub fn material(&self) -> &SharedLaw {
        match self {
            Fiber::Patch(p) => &p.material,
            Fiber::Node(n) => &n.material,
        }
    }

    pub fn is_patch(&self) -> bool {
        matches!(self, Fiber::Patch(_))
    }

    /// Axial force at the given strain (compression-positive).
    pub fn force(&self, strain: Real) -> Real {
        self.material().force(strain, self.area())
    }

    pub fn footprint(&self) -> Footprint {
        match self {
            Fiber::Patch(p) => Footprint::Polygon(p.vertices.iter().map(|v| [v.x, v.y]).collect()),
            Fiber::Node(n) => Footprint::Circle {
                center: [n.coord.x, n.coord.y],
                radius: n.radius(),
            },
        }
    }

    /// Copy of this fiber rotated about `center`.
    pub(crate) fn rotated(&self, center: &Point, rotation: &Rotation2<Real>) -> Fiber {
        match self {
            Fiber::Patch(p) => {
                let vertices = p
                    .vertices
                    .iter()
                    .map(|v| rotate_about(v, center, rotation))
                    .collect();
                Fiber::Patch(PatchFiber::new(vertices, p.material.clone()))
            }
            Fiber::Node(n) => Fiber::Node(NodeFiber::new(
                rotate_about(&n.coord, center, rotation),
                n.area,
                n.material.clone(),
            )),
        }
    }
}
