use super::{Point, Rect};

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p1.x as f64 - p2.x as f64;
    let dy = p1.y as f64 - p2.y as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Distance from `p` to the segment `a`-`b`.
///
/// The projection scalar is clamped to `[0, 1]`, so points beyond either end
/// measure to that endpoint. A zero-length segment measures to `a`.
pub fn distance_point_to_segment(p: Point, a: Point, b: Point) -> f64 {
    // Differences are taken in f64; file coordinates may span the whole i32 range.
    let seg_x = b.x as f64 - a.x as f64;
    let seg_y = b.y as f64 - a.y as f64;
    let len_sq = seg_x * seg_x + seg_y * seg_y;
    if len_sq == 0.0 {
        return distance(p, a);
    }

    let rel_x = p.x as f64 - a.x as f64;
    let rel_y = p.y as f64 - a.y as f64;
    let t = ((rel_x * seg_x + rel_y * seg_y) / len_sq).clamp(0.0, 1.0);

    let dx = rel_x - t * seg_x;
    let dy = rel_y - t * seg_y;
    (dx * dx + dy * dy).sqrt()
}

/// Inclusive on all four edges.
pub fn point_in_rect(p: Point, r: Rect) -> bool {
    p.x >= r.left() && p.x <= r.right() && p.y >= r.top() && p.y <= r.bottom()
}

/// Strict test against the ellipse inscribed in `r`; the boundary is outside.
///
/// An ellipse with a zero (or negative) axis contains nothing.
pub fn point_in_ellipse(p: Point, r: Rect) -> bool {
    let rx = r.width as f64 / 2.0;
    let ry = r.height as f64 / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }

    let (cx, cy) = r.center();
    let nx = (p.x as f64 - cx) / rx;
    let ny = (p.y as f64 - cy) / ry;
    nx * nx + ny * ny < 1.0
}
