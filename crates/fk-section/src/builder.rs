//! Section builder: meshes macroscopic geometry into fibers.

use crate::error::{SectionError, SectionResult, check_positive};
use crate::fiber::{Fiber, NodeFiber, PatchFiber, SharedLaw};
use crate::geometry::{Point, rectangle};
use crate::section::Section;
use fk_core::Real;
use nalgebra::Rotation2;
use tracing::{debug, info};

/// Target fiber size along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshSize {
    pub dx: Real,
    pub dy: Real,
}

impl Default for MeshSize {
    fn default() -> Self {
        Self { dx: 0.85, dy: 0.85 }
    }
}

/// A layer of bars spread across the core width at the top or bottom cover line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayer {
    /// Area of one bar
    pub area: Real,
    /// Bars per row
    pub count: usize,
    /// Number of rows, stepping inward from the cover line
    pub rows: usize,
    pub row_spacing: Real,
}

impl BarLayer {
    /// One row of `count` bars.
    pub fn new(area: Real, count: usize) -> Self {
        Self {
            area,
            count,
            rows: 1,
            row_spacing: 0.0,
        }
    }

    pub fn none() -> Self {
        Self::new(0.0, 0)
    }
}

/// Rectangular grid of bars.
///
/// `nx × ny` bars evenly spaced over the rectangle starting at `(x0, y0)`;
/// a single bar along an axis sits at mid-span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGroup {
    pub x0: Real,
    pub y0: Real,
    pub width: Real,
    pub height: Real,
    pub nx: usize,
    pub ny: usize,
    pub area: Real,
    /// Keep only the bars on the boundary of the grid
    pub perimeter_only: bool,
}

impl BarGroup {
    fn positions(&self) -> Vec<Point> {
        let spread = |start: Real, span: Real, n: usize, i: usize| {
            if n == 1 {
                start + 0.5 * span
            } else {
                start + span * i as Real / (n - 1) as Real
            }
        };

        let mut out = Vec::with_capacity(self.nx * self.ny);
        for j in 0..self.ny {
            for i in 0..self.nx {
                let on_edge = i == 0 || i + 1 == self.nx || j == 0 || j + 1 == self.ny;
                if self.perimeter_only && !on_edge {
                    continue;
                }
                out.push(Point::new(
                    spread(self.x0, self.width, self.nx, i),
                    spread(self.y0, self.height, self.ny, j),
                ));
            }
        }
        out
    }
}

/// Rectangle with a confined core inside the cover line.
///
/// Centered on the origin; `cover` is measured to the bar centerline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangularConfined {
    pub width: Real,
    pub height: Real,
    pub cover: Real,
    pub mesh: MeshSize,
    pub top_bars: BarLayer,
    pub bottom_bars: BarLayer,
}

impl RectangularConfined {
    pub fn validate(&self) -> SectionResult<()> {
        check_positive(self.width, "width")?;
        check_positive(self.height, "height")?;
        check_positive(self.cover, "cover")?;
        check_positive(self.mesh.dx, "mesh dx")?;
        check_positive(self.mesh.dy, "mesh dy")?;
        let limit = 0.5 * self.width.min(self.height);
        if self.cover >= limit {
            return Err(SectionError::CoverTooLarge {
                cover: self.cover,
                limit,
            });
        }
        Ok(())
    }
}

/// Collects patch and node fibers, then freezes them into a `Section`.
#[derive(Debug, Default)]
pub struct SectionBuilder {
    patches: Vec<Fiber>,
    nodes: Vec<Fiber>,
}

impl SectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rectangular section with confined core, unconfined cover, and top and
    /// bottom bar layers.
    pub fn rectangular_confined(
        geometry: &RectangularConfined,
        core: SharedLaw,
        cover: SharedLaw,
        steel: SharedLaw,
    ) -> SectionResult<Self> {
        geometry.validate()?;
        let RectangularConfined {
            width: w,
            height: h,
            cover: c,
            mesh,
            top_bars,
            bottom_bars,
        } = *geometry;

        let (xl, xr, yb, yt) = (-0.5 * w, 0.5 * w, -0.5 * h, 0.5 * h);
        let mut builder = Self::new();

        builder.add_patch_region(xl + c, yb + c, xr - c, yt - c, mesh, &core)?;

        // Cover ring: full-width strips top and bottom, side strips between
        builder.add_patch_region(xl, yt - c, xr, yt, mesh, &cover)?;
        builder.add_patch_region(xl, yb, xr, yb + c, mesh, &cover)?;
        builder.add_patch_region(xl, yb + c, xl + c, yt - c, mesh, &cover)?;
        builder.add_patch_region(xr - c, yb + c, xr, yt - c, mesh, &cover)?;

        let layer_height = |layer: &BarLayer| layer.row_spacing * layer.rows.saturating_sub(1) as Real;
        let top = BarGroup {
            x0: xl + c,
            y0: yt - c - layer_height(&top_bars),
            width: w - 2.0 * c,
            height: layer_height(&top_bars),
            nx: top_bars.count,
            ny: top_bars.rows,
            area: top_bars.area,
            perimeter_only: false,
        };
        let bottom = BarGroup {
            x0: xl + c,
            y0: yb + c,
            width: w - 2.0 * c,
            height: layer_height(&bottom_bars),
            nx: bottom_bars.count,
            ny: bottom_bars.rows,
            area: bottom_bars.area,
            perimeter_only: false,
        };
        builder.add_bar_group("top", &top, steel.clone())?;
        builder.add_bar_group("bottom", &bottom, steel)?;

        Ok(builder)
    }

    /// Subdivide an axis-aligned rectangle into patch fibers of one material.
    pub fn add_patch_region(
        &mut self,
        x0: Real,
        y0: Real,
        x1: Real,
        y1: Real,
        mesh: MeshSize,
        material: &SharedLaw,
    ) -> SectionResult<&mut Self> {
        check_positive(mesh.dx, "mesh dx")?;
        check_positive(mesh.dy, "mesh dy")?;
        let (lx, ly) = (x1 - x0, y1 - y0);
        check_positive(lx, "region width")?;
        check_positive(ly, "region height")?;

        let divisions = |length: Real, size: Real| ((length / size) - 1e-9).ceil().max(1.0) as usize;
        let nx = divisions(lx, mesh.dx);
        let ny = divisions(ly, mesh.dy);
        let (sx, sy) = (lx / nx as Real, ly / ny as Real);

        for j in 0..ny {
            for i in 0..nx {
                let cx0 = x0 + i as Real * sx;
                let cy0 = y0 + j as Real * sy;
                let cx1 = if i + 1 == nx { x1 } else { cx0 + sx };
                let cy1 = if j + 1 == ny { y1 } else { cy0 + sy };
                self.patches.push(Fiber::Patch(PatchFiber::new(
                    rectangle(cx0, cy0, cx1, cy1),
                    material.clone(),
                )));
            }
        }
        Ok(self)
    }

    /// Add a grid of bars. Empty groups (no bars or zero area) contribute nothing.
    pub fn add_bar_group(
        &mut self,
        name: &str,
        group: &BarGroup,
        steel: SharedLaw,
    ) -> SectionResult<&mut Self> {
        for (what, value) in [
            ("area", group.area),
            ("width", group.width),
            ("height", group.height),
        ] {
            if !value.is_finite() {
                return Err(SectionError::NonFinite { what, value });
            }
            if value < 0.0 {
                return Err(SectionError::NegativeBarValue {
                    name: name.to_string(),
                    what,
                    value,
                });
            }
        }
        if !group.x0.is_finite() || !group.y0.is_finite() {
            return Err(SectionError::NonFinite {
                what: "bar group origin",
                value: if group.x0.is_finite() { group.y0 } else { group.x0 },
            });
        }

        if group.nx == 0 || group.ny == 0 || group.area == 0.0 {
            debug!(layer = name, "skipping empty bar group");
            return Ok(self);
        }

        let positions = group.positions();
        debug!(layer = name, bars = positions.len(), "placed bar group");
        self.nodes.extend(
            positions
                .into_iter()
                .map(|p| Fiber::Node(NodeFiber::new(p, group.area, steel.clone()))),
        );
        Ok(self)
    }

    /// Freeze the fibers into a section, rotating every fiber counter-clockwise
    /// about the centroid by `rotate_deg` degrees.
    pub fn mesh(self, rotate_deg: Real) -> SectionResult<Section> {
        if !rotate_deg.is_finite() || !(0.0..360.0).contains(&rotate_deg) {
            return Err(SectionError::RotationOutOfRange {
                degrees: rotate_deg,
            });
        }

        let mut fibers = self.patches;
        fibers.extend(self.nodes);
        let section = Section::from_fibers(fibers)?;

        let section = if rotate_deg == 0.0 {
            section
        } else {
            let center = section.centroid();
            let rotation = Rotation2::new(rotate_deg.to_radians());
            let rotated = section
                .fibers()
                .iter()
                .map(|f| f.rotated(&center, &rotation))
                .collect();
            Section::from_fibers(rotated)?
        };

        info!(
            patches = section.patch_fibers().count(),
            bars = section.node_fibers().count(),
            area = section.total_area(),
            rotate_deg,
            "meshed section"
        );
        Ok(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_bar_sits_at_mid_span() {
        let group = BarGroup {
            x0: -9.5,
            y0: 0.0,
            width: 19.0,
            height: 0.0,
            nx: 1,
            ny: 1,
            area: 0.79,
            perimeter_only: false,
        };
        let pts = group.positions();
        assert_eq!(pts.len(), 1);
        assert!(pts[0].x.abs() < 1e-12);
    }

    #[test]
    fn perimeter_only_drops_interior_bars() {
        let group = BarGroup {
            x0: 0.0,
            y0: 0.0,
            width: 10.0,
            height: 10.0,
            nx: 4,
            ny: 4,
            area: 1.0,
            perimeter_only: true,
        };
        assert_eq!(group.positions().len(), 12);
        let full = BarGroup {
            perimeter_only: false,
            ..group
        };
        assert_eq!(full.positions().len(), 16);
    }

    #[test]
    fn cover_must_fit() {
        let geometry = RectangularConfined {
            width: 24.0,
            height: 36.0,
            cover: 12.0,
            mesh: MeshSize::default(),
            top_bars: BarLayer::none(),
            bottom_bars: BarLayer::none(),
        };
        assert!(matches!(
            geometry.validate(),
            Err(SectionError::CoverTooLarge { .. })
        ));
    }
}
