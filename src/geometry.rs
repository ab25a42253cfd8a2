//! Shared geometry helpers for the gesture path pipeline.

use crate::point::Point;

/// Computes the Euclidean distance between two points
pub fn euclidean_distance(a: &Point, b: &Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Computes the centroid for an array of points
pub fn centroid(points: &[Point]) -> Point {
    let mut cx = 0.0;
    let mut cy = 0.0;
    for p in points {
        cx += p.x;
        cy += p.y;
    }
    let n = points.len() as f64;
    Point::new(cx / n, cy / n)
}

/// Computes the path length for an array of points
pub fn path_length(points: &[Point]) -> f64 {
    let mut length = 0.0;
    for i in 1..points.len() {
        length += euclidean_distance(&points[i - 1], &points[i]);
    }
    length
}

/// Rotates the array of points by the given angle around its centroid
pub fn rotate_by(points: &[Point], radians: f64) -> Vec<Point> {
    let c = centroid(points);
    let (sine, cosine) = radians.sin_cos();
    points
        .iter()
        .map(|p| {
            Point::new(
                (p.x - c.x) * cosine - (p.y - c.y) * sine + c.x,
                (p.x - c.x) * sine + (p.y - c.y) * cosine + c.y,
            )
        })
        .collect()
}

/// Axis-aligned bounding box of a set of points.
///
/// `width` and `height` collapse to zero for collinear or constant paths;
/// the scaling step checks for that instead of dividing blindly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Computes the bounding box of an array of points
pub fn bounding_box(points: &[Point]) -> BoundingBox {
    let (mut minx, mut miny) = (f64::MAX, f64::MAX);
    let (mut maxx, mut maxy) = (f64::MIN, f64::MIN);
    for p in points {
        if p.x < minx { minx = p.x; }
        if p.y < miny { miny = p.y; }
        if p.x > maxx { maxx = p.x; }
        if p.y > maxy { maxy = p.y; }
    }
    BoundingBox {
        x: minx,
        y: miny,
        width: maxx - minx,
        height: maxy - miny,
    }
}
