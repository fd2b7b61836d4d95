//! Colorimetric conversion chain: LCH ↔ LUV ↔ XYZ ↔ linear RGB ↔
//! gamma-encoded sRGB ↔ 8-bit device colors, plus a `#RRGGBB` codec.
//!
//! All conversions are referenced to the D65 white point (2° observer,
//! Y normalized to 100).  Out-of-gamut values are passed through
//! unclamped until the final 8-bit quantization step.

use std::f64::consts::PI;
use lazy_static::lazy_static;
use rgb::RGB8;

use crate::Error;

/// D65 reference white (2° observer), Y normalized to 100.
const XN: f64 = 95.047;
const YN: f64 = 100.000;
const ZN: f64 = 108.883;

lazy_static! {
    /// Chromaticity (u′n, v′n) of the reference white, computed once
    /// from (XN, YN, ZN).
    static ref WHITE_UV: (f64, f64) = {
        let d = XN + 15. * YN + 3. * ZN;
        (4. * XN / d, 9. * YN / d)
    };
}

/// A color in the cylindrical CIE L*C*h°_uv space.
///
/// `l` is conventionally in \[0, 100\] and `c` in \[0, 100\] but
/// neither is enforced; `h` is in degrees and may be any real value
/// on input.  Reverse conversions produce `h` in \[0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// A color in the rectangular CIE L*u*v* space, the Cartesian
/// counterpart of [`Lch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Luv {
    pub l: f64,
    pub u: f64,
    pub v: f64,
}

/// A tristimulus coordinate relative to the D65 white point
/// (Y normalized to 100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// RGB proportional to physical light intensity, before gamma
/// encoding.  Channels are unbounded; colors outside the sRGB gamut
/// yield values below 0 or above 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Gamma-encoded (sRGB) channels, intended in \[0, 1\].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Converts cylindrical LCH to rectangular LUV.
pub fn lch_to_luv(c: Lch) -> Luv {
    let h = c.h * PI / 180.;
    Luv { l: c.l, u: c.c * h.cos(), v: c.c * h.sin() }
}

/// Converts rectangular LUV to cylindrical LCH.
///
/// The hue is normalized into \[0, 360); at the origin (`u = v = 0`)
/// it is 0 by convention.
pub fn luv_to_lch(c: Luv) -> Lch {
    let h = (c.v.atan2(c.u) * 180. / PI + 360.) % 360.;
    Lch { l: c.l, c: c.u.hypot(c.v), h }
}

/// Converts LUV to XYZ.
///
/// `l <= 0` maps to black rather than dividing by zero in the
/// chromaticity terms.
pub fn luv_to_xyz(c: Luv) -> Xyz {
    if c.l <= 0. {
        return Xyz { x: 0., y: 0., z: 0. };
    }
    let (un, vn) = *WHITE_UV;
    let y = if c.l <= 8. {
        YN * c.l * (3. / 29.) * (3. / 29.) * (3. / 29.)
    } else {
        let t = (c.l + 16.) / 116.;
        YN * t * t * t
    };
    let u = c.u / (13. * c.l) + un;
    let v = c.v / (13. * c.l) + vn;
    let x = 9. * y * u / (4. * v);
    let z = y * (12. - 3. * u - 20. * v) / (4. * v);
    Xyz { x, y, z }
}

/// Converts XYZ to LUV.
pub fn xyz_to_luv(c: Xyz) -> Luv {
    const EPS: f64 = (6. / 29.) * (6. / 29.) * (6. / 29.);
    let yr = c.y / YN;
    let l = if yr <= EPS {
        yr * (29. / 3.) * (29. / 3.) * (29. / 3.)
    } else {
        116. * yr.cbrt() - 16.
    };
    let d = c.x + 15. * c.y + 3. * c.z;
    // The 13L multiplier is zero at L = 0, so the chromaticity offset
    // never needs to be evaluated there.
    if l <= 0. || d <= 0. {
        return Luv { l, u: 0., v: 0. };
    }
    let (un, vn) = *WHITE_UV;
    let u = 13. * l * (4. * c.x / d - un);
    let v = 13. * l * (9. * c.y / d - vn);
    Luv { l, u, v }
}

/// Converts XYZ to linear-light RGB using the standard D65 sRGB
/// matrix.  Out-of-gamut inputs yield channels outside \[0, 1\].
pub fn xyz_to_linear_rgb(c: Xyz) -> LinearRgb {
    let x = c.x / YN;
    let y = c.y / YN;
    let z = c.z / YN;
    LinearRgb {
        r: 3.2404542 * x - 1.5371385 * y - 0.4985314 * z,
        g: -0.9692660 * x + 1.8760108 * y + 0.0415560 * z,
        b: 0.0556434 * x - 0.2040259 * y + 1.0572252 * z,
    }
}

/// Converts linear-light RGB to XYZ (inverse of [`xyz_to_linear_rgb`]).
pub fn linear_rgb_to_xyz(c: LinearRgb) -> Xyz {
    Xyz {
        x: YN * (0.4124564 * c.r + 0.3575761 * c.g + 0.1804375 * c.b),
        y: YN * (0.2126729 * c.r + 0.7151522 * c.g + 0.0721750 * c.b),
        z: YN * (0.0193339 * c.r + 0.1191920 * c.g + 0.9503041 * c.b),
    }
}

// IEC 61966-2-1 piecewise transfer function, applied per channel.
// Inputs outside [0, 1] go through the same formulas unclamped.
fn srgb_encode(c: f64) -> f64 {
    if c <= 0.0031308 { 12.92 * c } else { 1.055 * c.powf(1. / 2.4) - 0.055 }
}

fn srgb_decode(c: f64) -> f64 {
    if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

/// Applies the sRGB gamma curve to each channel.
pub fn gamma_encode(c: LinearRgb) -> GammaRgb {
    GammaRgb { r: srgb_encode(c.r), g: srgb_encode(c.g), b: srgb_encode(c.b) }
}

/// Removes the sRGB gamma curve from each channel.
pub fn gamma_decode(c: GammaRgb) -> LinearRgb {
    LinearRgb { r: srgb_decode(c.r), g: srgb_decode(c.g), b: srgb_decode(c.b) }
}

fn quantize_channel(c: f64) -> u8 {
    // ×256 then truncation toward zero, then clamp.  Truncation, not
    // rounding; see `dequantize` for the matching ÷255 and the
    // resulting non-bijection.
    ((c * 256.) as i32).clamp(0, 255) as u8
}

/// Quantizes gamma-encoded channels to a discrete 8-bit device color.
pub fn quantize(c: GammaRgb) -> RGB8 {
    RGB8 {
        r: quantize_channel(c.r),
        g: quantize_channel(c.g),
        b: quantize_channel(c.b),
    }
}

/// Normalizes a device color back to \[0, 1\] channels.
///
/// Divides by 255 while [`quantize`] scales by 256; the asymmetry is
/// long-standing observable behavior and is preserved as-is.
pub fn dequantize(c: RGB8) -> GammaRgb {
    GammaRgb {
        r: c.r as f64 / 255.,
        g: c.g as f64 / 255.,
        b: c.b as f64 / 255.,
    }
}

/// Maps a perceptual LCH coordinate to a discrete device color
/// through the full five-stage chain.
pub fn lch_to_color(c: Lch) -> RGB8 {
    quantize(gamma_encode(xyz_to_linear_rgb(luv_to_xyz(lch_to_luv(c)))))
}

/// Maps a device color back to a perceptual LCH coordinate.
///
/// The round trip through [`lch_to_color`] is approximate, bounded by
/// the 8-bit quantization step.
pub fn color_to_lch(c: RGB8) -> Lch {
    luv_to_lch(xyz_to_luv(linear_rgb_to_xyz(gamma_decode(dequantize(c)))))
}

/// Formats a device color as `#RRGGBB` with uppercase hex digits.
pub fn color_to_hex(c: RGB8) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
}

fn nibble(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        _ => b - b'A' + 10, // caller checked `is_ascii_hexdigit`
    }
}

/// Parses a `#RRGGBB` string (case-insensitive) back to a device
/// color.  This direction is exact.
///
/// Fails with [`Error::InvalidFormat`] unless the input matches
/// `#` followed by exactly six hex digits.
pub fn hex_to_color(s: &str) -> Result<RGB8, Error> {
    let t = s.to_ascii_uppercase();
    let b = t.as_bytes();
    if b.len() != 7 || b[0] != b'#' || !b[1..].iter().all(u8::is_ascii_hexdigit) {
        return Err(Error::InvalidFormat { input: s.to_string() });
    }
    let chan = |i: usize| 16 * nibble(b[i]) + nibble(b[i + 1]);
    Ok(RGB8 { r: chan(1), g: chan(3), b: chan(5) })
}
