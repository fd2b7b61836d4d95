//! HCL-based color palettes for data visualization.
//!
//! Colors are specified in the perceptually uniform cylindrical LCH
//! (a.k.a. HCL) space and mapped to 8-bit sRGB device colors through
//! a D65-referenced conversion chain ([`lch_to_color`] and friends,
//! re-exported at the crate root).  Three palette families are
//! provided, mirroring the classification used by statistical
//! graphics packages:
//!
//! - [`qualitative`]: hues swept at fixed luminance and chroma, for
//!   categorical data;
//! - [`sequential`]: a monotone ramp in all three channels, for
//!   ordered data;
//! - [`diverging`]: two flat-hue ramps meeting at a neutral center,
//!   for signed data around a critical value.
//!
//! Each family has a fully parametrized entry point and convenience
//! presets.  Every generator returns an ordered `Vec<RGB8>` ready to
//! hand to whatever does the rendering.
//!
//! ```
//! use hcl_palettes::diverging_basic;
//! let colors = diverging_basic(7).unwrap();
//! assert_eq!(colors.len(), 7);
//! ```

use std::fmt;
use rgb::RGB8;

mod convert;
pub use convert::{Lch, Luv, Xyz, LinearRgb, GammaRgb,
                  lch_to_luv, luv_to_lch, luv_to_xyz, xyz_to_luv,
                  xyz_to_linear_rgb, linear_rgb_to_xyz,
                  gamma_encode, gamma_decode, quantize, dequantize,
                  lch_to_color, color_to_lch,
                  color_to_hex, hex_to_color};

/// Errors reported by palette construction and hex decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A palette or range was requested with fewer than 2 entries.
    InvalidCount {
        /// The offending count.
        n: usize,
    },
    /// A hex color string did not match `#RRGGBB`.
    InvalidFormat {
        /// The rejected input, unmodified.
        input: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCount { n } =>
                write!(f, "palette needs at least 2 colors, got {}", n),
            Error::InvalidFormat { input } =>
                write!(f, "{:?} is not a #RRGGBB hex color", input),
        }
    }
}

impl std::error::Error for Error {}

/// Returns `n` evenly spaced values from `start` to `end` inclusive
/// (`n − 1` equal steps).  Both endpoints are reproduced exactly.
///
/// Fails with [`Error::InvalidCount`] when `n < 2`: the step size
/// divides by `n − 1`, so a single-point range is undefined.
pub fn range(n: usize, start: f64, end: f64) -> Result<Vec<f64>, Error> {
    if n < 2 {
        return Err(Error::InvalidCount { n });
    }
    let step = (end - start) / (n - 1) as f64;
    let mut xs: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
    xs[n - 1] = end;
    Ok(xs)
}

/// Qualitative palette: `n` hues swept linearly over `hue` degrees at
/// fixed luminance `l` and chroma `c`.
pub fn qualitative(n: usize, hue: (f64, f64), l: f64, c: f64)
                   -> Result<Vec<RGB8>, Error> {
    let hues = range(n, hue.0, hue.1)?;
    Ok(hues.into_iter()
       .map(|h| lch_to_color(Lch { l, c, h }))
       .collect())
}

/// Qualitative palette with the default parameters: luminance 65,
/// chroma 100, hues over `[15, 375 − 360/n]`.
///
/// The asymmetric hue window keeps the last of `n` equally spaced
/// hues from landing back on the first one after a full revolution.
/// L = 65, C = 100 gives stronger on-screen contrast than the
/// L = 70, C = 50 used by colorimetric packages.
pub fn qualitative_basic(n: usize) -> Result<Vec<RGB8>, Error> {
    if n < 2 {
        return Err(Error::InvalidCount { n });
    }
    qualitative(n, (15., 375. - 360. / n as f64), 65., 100.)
}

/// Sequential palette: `n` colors along power-curved ramps.
///
/// The parameter `x` runs from 1 down to 0; at each sample
/// `C = c₂ − (c₂−c₁)·x^pow_c`, `L = l₂ − (l₂−l₁)·x^pow_l` and
/// `H = h₂ − (h₂−h₁)·x`, so the first color carries the `.0`
/// endpoints and the last the `.1` endpoints.
pub fn sequential(n: usize, hue: (f64, f64), chroma: (f64, f64),
                  luminance: (f64, f64), power: (f64, f64))
                  -> Result<Vec<RGB8>, Error> {
    let xs = range(n, 1., 0.)?;
    Ok(xs.into_iter()
       .map(|x| {
           let c = chroma.1 - (chroma.1 - chroma.0) * x.powf(power.0);
           let l = luminance.1 - (luminance.1 - luminance.0) * x.powf(power.1);
           let h = hue.1 - (hue.1 - hue.0) * x;
           lch_to_color(Lch { l, c, h })
       })
       .collect())
}

/// Sequential preset from red through orange to light yellow.
pub fn heat(n: usize) -> Result<Vec<RGB8>, Error> {
    sequential(n, (0., 90.), (100., 30.), (50., 90.), (0.2, 1.))
}

/// Sequential preset from green through brown to light grey,
/// suitable for elevation-like data.
pub fn terrain(n: usize) -> Result<Vec<RGB8>, Error> {
    sequential(n, (130., 0.), (80., 0.), (60., 95.), (0.1, 1.))
}

/// Sequential preset ramping a single hue `h` from dark and
/// saturated to light and neutral.
pub fn single_hue(n: usize, h: f64) -> Result<Vec<RGB8>, Error> {
    sequential(n, (h, h), (80., 0.), (30., 90.), (1.5, 1.5))
}

/// [`single_hue`] at the default hue of 260° (blue).
pub fn sequential_basic(n: usize) -> Result<Vec<RGB8>, Error> {
    single_hue(n, 260.)
}

/// Diverging palette: two single-hue ramps meeting at a neutral
/// center.
///
/// The parameter `x` runs from 1 down to −1; at each sample
/// `C = c_max·|x|^pow_c`, `L = l₂ − (l₂−l₁)·|x|^pow_l`, and the hue
/// is a step function of the sign of `x`: `hue.0` on the positive
/// half, `hue.1` on the negative half.  When `n` is odd the middle
/// color sits at `x = 0` and has zero chroma.
pub fn diverging(n: usize, hue: (f64, f64), c_max: f64,
                 luminance: (f64, f64), power: (f64, f64))
                 -> Result<Vec<RGB8>, Error> {
    let xs = range(n, 1., -1.)?;
    Ok(xs.into_iter()
       .map(|x| {
           let c = c_max * x.abs().powf(power.0);
           let l = luminance.1 - (luminance.1 - luminance.0) * x.abs().powf(power.1);
           let h = if x > 0. { hue.0 } else { hue.1 };
           lch_to_color(Lch { l, c, h })
       })
       .collect())
}

/// Diverging preset from blue (260°) through grey to red (0°).
pub fn diverging_basic(n: usize) -> Result<Vec<RGB8>, Error> {
    diverging(n, (260., 0.), 100., (30., 90.), (1.5, 1.5))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Signed hue difference in (−180, 180].
    fn hue_diff(a: f64, b: f64) -> f64 {
        (a - b + 540.) % 360. - 180.
    }

    #[test]
    fn range_endpoints_exact() {
        let xs = range(5, 0.3, 0.7).unwrap();
        assert_eq!(xs.len(), 5);
        assert_eq!(xs[0], 0.3);
        assert_eq!(xs[4], 0.7);
        for w in xs.windows(2) {
            assert!(w[1] > w[0]);
        }
    }

    #[test]
    fn range_descending() {
        let xs = range(3, 1., -1.).unwrap();
        assert_eq!(xs[0], 1.);
        assert!(xs[1].abs() <= 1e-15);
        assert_eq!(xs[2], -1.);
    }

    #[test]
    fn range_rejects_small_counts() {
        assert_eq!(range(1, 0., 1.), Err(Error::InvalidCount { n: 1 }));
        assert_eq!(range(0, 0., 1.), Err(Error::InvalidCount { n: 0 }));
    }

    #[test]
    fn generators_reject_small_counts() {
        assert!(matches!(qualitative_basic(1), Err(Error::InvalidCount { n: 1 })));
        assert!(matches!(sequential_basic(0), Err(Error::InvalidCount { n: 0 })));
        assert!(matches!(diverging_basic(1), Err(Error::InvalidCount { n: 1 })));
        assert!(matches!(heat(1), Err(Error::InvalidCount { .. })));
        assert!(matches!(terrain(0), Err(Error::InvalidCount { .. })));
    }

    #[test]
    fn generators_produce_n_colors() {
        for n in [2, 3, 7, 12] {
            assert_eq!(qualitative_basic(n).unwrap().len(), n);
            assert_eq!(sequential_basic(n).unwrap().len(), n);
            assert_eq!(diverging_basic(n).unwrap().len(), n);
        }
    }

    #[test]
    fn qualitative_hues_evenly_spaced() {
        // Default window for n = 4 is [15, 375 − 90] = [15, 285]:
        // targets 15, 105, 195, 285.  Some of these are out of gamut
        // at C = 100, so the clamped colors only approximate them.
        let colors = qualitative_basic(4).unwrap();
        let hues: Vec<f64> = colors.iter().map(|&c| color_to_lch(c).h).collect();
        for (h, target) in hues.iter().zip([15., 105., 195., 285.]) {
            assert!(hue_diff(*h, target).abs() <= 8.,
                    "hue {} ≉ {}", h, target);
        }
        for w in hues.windows(2) {
            let step = hue_diff(w[1], w[0]);
            assert!((step - 90.).abs() <= 15., "hue step {} ≉ 90", step);
        }
    }

    #[test]
    fn qualitative_override_parameters() {
        // A muted, fully in-gamut sweep round-trips tightly.
        let colors = qualitative(6, (0., 300.), 70., 30.).unwrap();
        for (i, &c) in colors.iter().enumerate() {
            let p = color_to_lch(c);
            assert!((p.l - 70.).abs() <= 1.);
            assert!((p.c - 30.).abs() <= 2.);
            assert!(hue_diff(p.h, 60. * i as f64).abs() <= 4.);
        }
    }

    #[test]
    fn sequential_monotone() {
        let colors = sequential_basic(12).unwrap();
        let ps: Vec<Lch> = colors.iter().map(|&c| color_to_lch(c)).collect();
        // Nominal chroma falls 80 → 0 and luminance rises 30 → 90;
        // gamut clamping on the darkest colors can wiggle the measured
        // values by a little, hence the slack.
        for w in ps.windows(2) {
            assert!(w[1].c <= w[0].c + 2.,
                    "chroma rose: {} → {}", w[0].c, w[1].c);
            assert!(w[1].l >= w[0].l - 1.,
                    "luminance fell: {} → {}", w[0].l, w[1].l);
        }
        assert!(ps[0].c > ps[11].c + 30.);
        assert!(ps[11].l > ps[0].l + 30.);
        assert!(ps[11].c <= 2.); // ends neutral
    }

    #[test]
    fn heat_ramp_shape() {
        let colors = heat(8).unwrap();
        let ps: Vec<Lch> = colors.iter().map(|&c| color_to_lch(c)).collect();
        // Luminance rises from 50 toward 90.
        for w in ps.windows(2) {
            assert!(w[1].l >= w[0].l - 1.);
        }
        assert!(ps[0].l < ps[7].l);
        // First color is a saturated red, last a pale yellow.
        assert!(hue_diff(ps[0].h, 0.).abs() <= 15.);
        assert!(hue_diff(ps[7].h, 90.).abs() <= 15.);
    }

    #[test]
    fn diverging_center_is_neutral() {
        let colors = diverging_basic(7).unwrap();
        let ps: Vec<Lch> = colors.iter().map(|&c| color_to_lch(c)).collect();
        // Middle sample sits at x = 0: zero chroma, maximal luminance.
        assert!(ps[3].c <= 2.5, "center chroma {} not neutral", ps[3].c);
        assert!(ps[3].l > 85.);
        // Ends are the two saturated anchors.
        assert!(hue_diff(ps[0].h, 260.).abs() <= 6.,
                "left hue {} ≉ 260", ps[0].h);
        assert!(hue_diff(ps[6].h, 0.).abs() <= 6.,
                "right hue {} ≉ 0", ps[6].h);
        assert!(ps[0].c > 30. && ps[6].c > 30.);
    }

    #[test]
    fn diverging_halves_are_flat_hued() {
        let colors = diverging(9, (120., 320.), 60., (35., 92.), (1., 1.)).unwrap();
        let ps: Vec<Lch> = colors.iter().map(|&c| color_to_lch(c)).collect();
        // Hue is a step function of sign(x); skip the near-neutral
        // center where hue is numerically meaningless.
        for p in &ps[..3] {
            assert!(hue_diff(p.h, 120.).abs() <= 8., "left hue {}", p.h);
        }
        for p in &ps[6..] {
            assert!(hue_diff(p.h, 320.).abs() <= 8., "right hue {}", p.h);
        }
    }

    #[test]
    fn palettes_are_deterministic() {
        assert_eq!(diverging_basic(5).unwrap(), diverging_basic(5).unwrap());
        assert_eq!(heat(6).unwrap(), heat(6).unwrap());
    }
}
