//! Planar polygon helpers.

use fk_core::Real;
use nalgebra::{Point2, Rotation2};

pub type Point = Point2<Real>;

/// Axis-aligned rectangle as a counter-clockwise polygon.
pub fn rectangle(x0: Real, y0: Real, x1: Real, y1: Real) -> Vec<Point> {
    vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ]
}

/// Area and centroid of a simple polygon (shoelace formula).
///
/// Degenerate polygons return zero area and the vertex average.
pub fn polygon_area_centroid(vertices: &[Point]) -> (Real, Point) {
    let n = vertices.len();
    if n == 0 {
        return (0.0, Point::origin());
    }

    let mut twice_area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let p = vertices[i];
        let q = vertices[(i + 1) % n];
        let cross = p.x * q.y - q.x * p.y;
        twice_area += cross;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }

    if twice_area.abs() < 1e-300 {
        let sum = vertices
            .iter()
            .fold(nalgebra::Vector2::zeros(), |acc, p| acc + p.coords);
        return (0.0, Point::from(sum / n as Real));
    }

    let area = 0.5 * twice_area;
    let centroid = Point::new(cx / (6.0 * area), cy / (6.0 * area));
    (area.abs(), centroid)
}

/// Clip a polygon against the horizontal line `y = y_cut`.
///
/// Keeps the part with `y >= y_cut` when `keep_above`, else `y <= y_cut`.
pub fn clip_horizontal(vertices: &[Point], y_cut: Real, keep_above: bool) -> Vec<Point> {
    let inside = |p: &Point| {
        if keep_above {
            p.y >= y_cut
        } else {
            p.y <= y_cut
        }
    };

    let n = vertices.len();
    let mut out = Vec::with_capacity(n + 2);
    for i in 0..n {
        let cur = vertices[i];
        let next = vertices[(i + 1) % n];
        let cur_in = inside(&cur);
        let next_in = inside(&next);

        if cur_in {
            out.push(cur);
        }
        if cur_in != next_in {
            let t = (y_cut - cur.y) / (next.y - cur.y);
            out.push(Point::new(cur.x + t * (next.x - cur.x), y_cut));
        }
    }
    out
}

/// Rotate `p` counter-clockwise about `center`.
pub fn rotate_about(p: &Point, center: &Point, rotation: &Rotation2<Real>) -> Point {
    center + rotation * (p - center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_area_and_centroid() {
        let rect = rectangle(-12.0, -18.0, 12.0, 18.0);
        let (area, c) = polygon_area_centroid(&rect);
        assert!((area - 864.0).abs() < 1e-9);
        assert!(c.x.abs() < 1e-12 && c.y.abs() < 1e-12);
    }

    #[test]
    fn clockwise_polygon_has_positive_area() {
        let mut rect = rectangle(0.0, 0.0, 2.0, 1.0);
        rect.reverse();
        let (area, c) = polygon_area_centroid(&rect);
        assert!((area - 2.0).abs() < 1e-12);
        assert!((c.x - 1.0).abs() < 1e-12);
        assert!((c.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn clip_keeps_upper_part() {
        let rect = rectangle(0.0, 0.0, 2.0, 4.0);
        let top = clip_horizontal(&rect, 3.0, true);
        let (area, c) = polygon_area_centroid(&top);
        assert!((area - 2.0).abs() < 1e-12);
        assert!((c.y - 3.5).abs() < 1e-12);

        let bottom = clip_horizontal(&rect, 3.0, false);
        let (area, _) = polygon_area_centroid(&bottom);
        assert!((area - 6.0).abs() < 1e-12);
    }

    #[test]
    fn clip_outside_is_empty() {
        let rect = rectangle(0.0, 0.0, 2.0, 4.0);
        assert!(clip_horizontal(&rect, 5.0, true).is_empty());
        assert_eq!(clip_horizontal(&rect, -1.0, true).len(), 4);
    }

    #[test]
    fn quarter_turn() {
        let rot = Rotation2::new(std::f64::consts::FRAC_PI_2);
        let p = rotate_about(&Point::new(2.0, 1.0), &Point::new(1.0, 1.0), &rot);
        assert!((p.x - 1.0).abs() < 1e-12);
        assert!((p.y - 2.0).abs() < 1e-12);
    }
}
