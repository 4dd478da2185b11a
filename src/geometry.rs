//! Small 2D helpers used across the pipeline. Points are `[x, y]` arrays.

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: [f32; 2], b: [f32; 2]) -> f32 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    (dx * dx + dy * dy).sqrt()
}

/// Linear interpolation between two scalars at parameter `t`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Point on the segment `a`→`b` at parameter `t` (0 = `a`, 1 = `b`).
#[inline]
pub fn lerp_point(a: [f32; 2], b: [f32; 2], t: f32) -> [f32; 2] {
    [lerp(a[0], b[0], t), lerp(a[1], b[1], t)]
}

/// Point at `radius` from `center` in direction `angle` (radians,
/// x axis = 0, counter-clockwise in image coordinates).
#[inline]
pub fn polar_offset(center: [f32; 2], radius: f32, angle: f32) -> [f32; 2] {
    [
        center[0] + radius * angle.cos(),
        center[1] + radius * angle.sin(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn distance_basic() {
        assert!(approx_eq(distance([0.0, 0.0], [3.0, 4.0]), 5.0));
        assert!(approx_eq(distance([1.0, 1.0], [1.0, 1.0]), 0.0));
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert!(approx_eq(lerp(2.0, 6.0, 0.0), 2.0));
        assert!(approx_eq(lerp(2.0, 6.0, 1.0), 6.0));
        assert!(approx_eq(lerp(2.0, 6.0, 0.5), 4.0));

        let mid = lerp_point([0.0, 0.0], [10.0, -4.0], 0.5);
        assert!(approx_eq(mid[0], 5.0));
        assert!(approx_eq(mid[1], -2.0));
    }

    #[test]
    fn polar_offset_cardinals() {
        let c = [100.0f32, 100.0];
        let right = polar_offset(c, 40.0, 0.0);
        assert!(approx_eq(right[0], 140.0));
        assert!(approx_eq(right[1], 100.0));

        let down = polar_offset(c, 40.0, std::f32::consts::FRAC_PI_2);
        assert!(approx_eq(down[0], 100.0));
        assert!(approx_eq(down[1], 140.0));
    }
}
