//! Immutable fiber section with derived properties.

use crate::error::{SectionError, SectionResult};
use crate::fiber::{Fiber, NodeFiber, PatchFiber};
use crate::geometry::Point;
use fk_core::Real;

/// Ordered fibers plus centroid, area, and extent along `y`.
///
/// Derived quantities are computed once in `from_fibers` and never change.
#[derive(Debug, Clone)]
pub struct Section {
    fibers: Vec<Fiber>,
    centroid: Point,
    total_area: Real,
    y_min: Real,
    y_max: Real,
}

impl Section {
    /// Assemble a section from an arbitrary fiber collection.
    ///
    /// Patch fibers are ordered before node fibers; relative order within
    /// each kind is preserved.
    pub fn from_fibers(fibers: Vec<Fiber>) -> SectionResult<Self> {
        if fibers.is_empty() {
            return Err(SectionError::Empty);
        }

        let (mut ordered, nodes): (Vec<Fiber>, Vec<Fiber>) =
            fibers.into_iter().partition(Fiber::is_patch);
        ordered.extend(nodes);

        let total_area: Real = ordered.iter().map(Fiber::area).sum();
        if !total_area.is_finite() || total_area <= 0.0 {
            return Err(SectionError::ZeroArea);
        }

        let (sx, sy) = ordered.iter().fold((0.0, 0.0), |(sx, sy), f| {
            let p = f.position();
            (sx + f.area() * p.x, sy + f.area() * p.y)
        });
        let centroid = Point::new(sx / total_area, sy / total_area);

        let mut y_min = Real::INFINITY;
        let mut y_max = Real::NEG_INFINITY;
        for fiber in &ordered {
            match fiber {
                Fiber::Patch(p) => {
                    for v in p.vertices() {
                        y_min = y_min.min(v.y);
                        y_max = y_max.max(v.y);
                    }
                }
                Fiber::Node(n) => {
                    y_min = y_min.min(n.coord().y);
                    y_max = y_max.max(n.coord().y);
                }
            }
        }

        Ok(Self {
            fibers: ordered,
            centroid,
            total_area,
            y_min,
            y_max,
        })
    }

    pub fn fibers(&self) -> &[Fiber] {
        &self.fibers
    }

    pub fn patch_fibers(&self) -> impl Iterator<Item = &PatchFiber> {
        self.fibers.iter().filter_map(|f| match f {
            Fiber::Patch(p) => Some(p),
            Fiber::Node(_) => None,
        })
    }

    pub fn node_fibers(&self) -> impl Iterator<Item = &NodeFiber> {
        self.fibers.iter().filter_map(|f| match f {
            Fiber::Node(n) => Some(n),
            Fiber::Patch(_) => None,
        })
    }

    pub fn centroid(&self) -> Point {
        self.centroid
    }

    /// Sum of all fiber areas.
    pub fn total_area(&self) -> Real {
        self.total_area
    }

    /// Sum of patch fiber areas.
    pub fn concrete_area(&self) -> Real {
        self.patch_fibers().map(PatchFiber::area).sum()
    }

    /// Sum of node fiber areas.
    pub fn steel_area(&self) -> Real {
        self.node_fibers().map(NodeFiber::area).sum()
    }

    /// Lowest and highest `y` reached by any fiber.
    pub fn extent_y(&self) -> (Real, Real) {
        (self.y_min, self.y_max)
    }

    /// Extent along the bending axis.
    pub fn depth(&self) -> Real {
        self.y_max - self.y_min
    }

    pub fn has_steel(&self) -> bool {
        self.node_fibers().next().is_some()
    }
}
