/// HSV to linear RGB. Hue is in turns and wraps, so `1.25` equals `0.25`.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let c = v * s;
    let sector = h.rem_euclid(1.0) * 6.0;
    let x = c * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match sector as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b).all(|(x, y)| (x - y).abs() < 0.01)
    }

    #[test]
    fn primary_hues() {
        assert!(close(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]));
        assert!(close(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), [0.0, 1.0, 0.0]));
        assert!(close(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn zero_saturation_is_grey() {
        assert!(close(hsv_to_rgb(0.4, 0.0, 0.5), [0.5, 0.5, 0.5]));
        assert!(close(hsv_to_rgb(0.0, 1.0, 0.0), [0.0, 0.0, 0.0]));
    }

    #[test]
    fn hue_wraps() {
        assert!(close(hsv_to_rgb(1.25, 0.8, 0.9), hsv_to_rgb(0.25, 0.8, 0.9)));
        assert!(close(hsv_to_rgb(-0.75, 0.8, 0.9), hsv_to_rgb(0.25, 0.8, 0.9)));
    }
}
