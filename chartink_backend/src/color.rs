// Copyright 2025 the Chartink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Premultiplied color handling.
//!
//! Style records carry premultiplied sRGB colors: compositing chart layers is
//! a sequence of `over` operations, and premultiplied channels make those
//! associative. Engines that take color and alpha separately get the split
//! via [`split_premultiplied`].

use peniko::color::{PremulColor, Srgb};

/// The color type used by style records: premultiplied sRGB with alpha.
pub type Color = PremulColor<Srgb>;

/// Creates a fully opaque color from sRGB channels in `[0, 1]`.
#[must_use]
pub fn opaque(r: f32, g: f32, b: f32) -> Color {
    PremulColor::new([r, g, b, 1.0])
}

/// The fully transparent color.
#[must_use]
pub fn transparent() -> Color {
    PremulColor::new([0.0, 0.0, 0.0, 0.0])
}

/// Splits a premultiplied color into non-premultiplied RGB channels and a
/// separate alpha, as `f64` components ready for an engine's
/// `set_source_rgba`-style call.
///
/// The RGB channels are scaled back by the reciprocal of alpha. At alpha 0
/// the reciprocal does not exist and the channel values are invisible anyway,
/// so fully transparent black is returned instead.
#[must_use]
pub fn split_premultiplied(color: Color) -> (f64, f64, f64, f64) {
    let [r, g, b, a] = color.components;
    if a == 0.0 {
        return (0.0, 0.0, 0.0, 0.0);
    }
    let inv = 1.0 / f64::from(a);
    (
        f64::from(r) * inv,
        f64::from(g) * inv,
        f64::from(b) * inv,
        f64::from(a),
    )
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn full_opacity_passes_channels_through() {
        let (r, g, b, a) = split_premultiplied(opaque(0.25, 0.5, 0.75));
        assert!((r - 0.25).abs() < 1e-7);
        assert!((g - 0.5).abs() < 1e-7);
        assert!((b - 0.75).abs() < 1e-7);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn half_alpha_undoes_the_premultiplication() {
        // 50% transparent red, premultiplied: channels already scaled by 0.5.
        let (r, g, b, a) = split_premultiplied(PremulColor::new([0.5, 0.0, 0.0, 0.5]));
        assert!((r - 1.0).abs() < 1e-7);
        assert_eq!(g, 0.0);
        assert_eq!(b, 0.0);
        assert!((a - 0.5).abs() < 1e-7);
    }

    #[test]
    fn zero_alpha_does_not_divide() {
        let (r, g, b, a) = split_premultiplied(PremulColor::new([0.3, 0.3, 0.3, 0.0]));
        assert_eq!((r, g, b, a), (0.0, 0.0, 0.0, 0.0));
    }
}
