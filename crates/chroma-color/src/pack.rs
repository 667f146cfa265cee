//! Packed 8-bit ARGB encoding.
//!
//! The only lossy step in the crate. A color is packed as `0xAARRGGBB`
//! with alpha fixed at 255. Channels are intensity-normalized first, then
//! scaled to 0-255, clamped, and truncated. Packing never wraps.

use crate::convert::normalize_intensity;

/// Opaque alpha in the top byte.
pub const OPAQUE_ALPHA: u32 = 0xFF00_0000;

/// Scales a 0-1 channel to a byte: clamp to [0, 255], then truncate.
#[inline]
pub fn channel_to_u8(v: f64) -> u8 {
    // NaN casts to 0
    (v * 255.0).clamp(0.0, 255.0) as u8
}

/// Packs RGB channels into `0xAARRGGBB`, intensity-normalizing first.
pub fn pack_argb32(rgb: [f64; 3]) -> u32 {
    let [r, g, b] = normalize_intensity(rgb).map(channel_to_u8);
    OPAQUE_ALPHA | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Unpacks the RGB bytes of `0xAARRGGBB` into 0-1 channels. Alpha is ignored.
pub fn unpack_argb32(argb: u32) -> [f64; 3] {
    let r = (argb >> 16) & 0xFF;
    let g = (argb >> 8) & 0xFF;
    let b = argb & 0xFF;
    [r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0]
}

/// Bytes to 0-1 channels.
#[inline]
pub fn rgb8_to_unit(rgb: [u8; 3]) -> [f64; 3] {
    rgb.map(|c| c as f64 / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_primaries() {
        assert_eq!(pack_argb32([1.0, 0.0, 0.0]), 0xFFFF_0000);
        assert_eq!(pack_argb32([0.0, 1.0, 0.0]), 0xFF00_FF00);
        assert_eq!(pack_argb32([0.0, 0.0, 1.0]), 0xFF00_00FF);
    }

    #[test]
    fn test_pack_black() {
        assert_eq!(pack_argb32([0.0; 3]), 0xFF00_0000);
    }

    #[test]
    fn test_pack_normalizes_intensity() {
        // Half-intensity red still packs as full red
        assert_eq!(pack_argb32([0.5, 0.0, 0.0]), 0xFFFF_0000);
        // Over-range values are scaled down, not wrapped
        assert_eq!(pack_argb32([4.0, 2.0, 0.0]), 0xFFFF_7F00);
    }

    #[test]
    fn test_pack_clamps_negative() {
        assert_eq!(pack_argb32([1.0, -0.5, 0.0]), 0xFFFF_0000);
    }

    #[test]
    fn test_channel_truncates() {
        assert_eq!(channel_to_u8(0.5), 127);
        assert_eq!(channel_to_u8(1.5), 255);
        assert_eq!(channel_to_u8(-1.0), 0);
        assert_eq!(channel_to_u8(f64::NAN), 0);
    }

    #[test]
    fn test_unpack() {
        assert_eq!(unpack_argb32(0x80FF_0000), [1.0, 0.0, 0.0]);
        assert_eq!(unpack_argb32(0xFF00_00FF), [0.0, 0.0, 1.0]);
        assert_eq!(rgb8_to_unit([255, 0, 255]), [1.0, 0.0, 1.0]);
    }
}
