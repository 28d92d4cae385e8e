//! Linear crossfade compositing.

use image::RgbaImage;

/// Composite `to` over `from` at the given blend factor, producing a freshly
/// owned frame. The factor scales the destination's own alpha, so a
/// transparent destination pixel leaves the source untouched at any factor.
pub(crate) fn crossfade(from: &RgbaImage, to: &RgbaImage, factor: f32) -> RgbaImage {
    let factor = factor.clamp(0.0, 1.0);
    let mut out = RgbaImage::new(from.width(), from.height());
    for (dst, (src, over)) in out.pixels_mut().zip(from.pixels().zip(to.pixels())) {
        let a = (over.0[3] as f32 / 255.0) * factor;
        for c in 0..3 {
            dst.0[c] = (src.0[c] as f32 * (1.0 - a) + over.0[c] as f32 * a).round() as u8;
        }
        let src_a = src.0[3] as f32 / 255.0;
        dst.0[3] = ((a + src_a * (1.0 - a)) * 255.0).round() as u8;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(w: u32, h: u32, px: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba(px))
    }

    #[test]
    fn factor_zero_is_the_source() {
        let from = solid(2, 2, [10, 20, 30, 255]);
        let to = solid(2, 2, [200, 200, 200, 255]);
        let out = crossfade(&from, &to, 0.0);
        assert_eq!(out.get_pixel(0, 0).0, [10, 20, 30, 255]);
    }

    #[test]
    fn factor_one_with_opaque_destination_is_the_destination() {
        let from = solid(2, 2, [10, 20, 30, 255]);
        let to = solid(2, 2, [200, 100, 50, 255]);
        let out = crossfade(&from, &to, 1.0);
        assert_eq!(out.get_pixel(1, 1).0, [200, 100, 50, 255]);
    }

    #[test]
    fn transparent_destination_leaves_source_untouched() {
        let from = solid(1, 1, [10, 20, 30, 255]);
        let to = solid(1, 1, [200, 100, 50, 0]);
        let out = crossfade(&from, &to, 0.75);
        assert_eq!(out.get_pixel(0, 0).0, [10, 20, 30, 255]);
    }

    #[test]
    fn halfway_blend_averages_opaque_states() {
        let from = solid(1, 1, [0, 0, 0, 255]);
        let to = solid(1, 1, [200, 100, 50, 255]);
        let out = crossfade(&from, &to, 0.5);
        assert_eq!(out.get_pixel(0, 0).0, [100, 50, 25, 255]);
    }
}
