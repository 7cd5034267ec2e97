use nalgebra::Vector2;

use crate::utils::{constants::ARROW_EPSILON, rotate};

/// Two triangles covering a `size`-wide square centred on `center`.
pub fn square(center: [f32; 2], size: f32) -> Vec<[f32; 2]> {
    let half = size / 2.0;
    let [x, y] = center;
    vec![
        [x - half, y - half],
        [x + half, y - half],
        [x - half, y + half],
        [x - half, y + half],
        [x + half, y - half],
        [x + half, y + half],
    ]
}

/// Edge arrow pointing at an off-screen target.
///
/// The tip sits where the ray towards `target` leaves the view, i.e. the
/// target scaled so that `max(|x|, |y|) = 1`. `None` when the target is too
/// close to the centre to have a direction.
pub fn edge_arrow(target: Vector2<f64>, size: f32) -> Option<Vec<[f32; 2]>> {
    let reach = target.x.abs().max(target.y.abs());
    if reach < ARROW_EPSILON {
        return None;
    }

    let tip = target / reach;
    let angle = tip.y.atan2(tip.x);
    let (sin, cos) = angle.sin_cos();
    let size = f64::from(size);
    let half_base = size / 2.0;

    let base = tip - Vector2::new(cos, sin) * size;
    let left = base + Vector2::new(sin, -cos) * half_base;
    let right = base - Vector2::new(sin, -cos) * half_base;

    Some(vec![to_f32(tip), to_f32(left), to_f32(right)])
}

/// Heading marker for the mini-map: a triangle pointing along `heading`.
pub fn heading_marker(center: Vector2<f64>, heading: f64, size: f32) -> Vec<[f32; 2]> {
    let s = f64::from(size);
    [
        Vector2::new(0.0, s),
        Vector2::new(-s, -s),
        Vector2::new(s, -s),
    ]
    .into_iter()
    .map(|corner| to_f32(rotate(corner, heading) + center))
    .collect()
}

/// Corner positions and texture coordinates of a `±half_extent` quad, two
/// triangles. Texture `v` grows upwards.
pub fn textured_quad(half_extent: f32) -> (Vec<[f32; 3]>, Vec<[f32; 2]>) {
    let h = half_extent;
    let positions = vec![
        [-h, -h, 0.0],
        [h, -h, 0.0],
        [-h, h, 0.0],
        [-h, h, 0.0],
        [h, -h, 0.0],
        [h, h, 0.0],
    ];
    let uvs = vec![
        [0.0, 0.0],
        [1.0, 0.0],
        [0.0, 1.0],
        [0.0, 1.0],
        [1.0, 0.0],
        [1.0, 1.0],
    ];
    (positions, uvs)
}

fn to_f32(v: Vector2<f64>) -> [f32; 2] {
    [v.x as f32, v.y as f32]
}
