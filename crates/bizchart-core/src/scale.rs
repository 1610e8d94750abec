// File: crates/bizchart-core/src/scale.rs
// Summary: "Nice ruler" axis scaling and guarded value-to-pixel scaling.

use tracing::debug;

/// Starting level count for the ruler search.
pub const INITIAL_LEVEL: usize = 4;

/// Gridline step for `value` split into `level` parts, rounded down to its
/// leading digit times a power of ten. `calc_factor(1330, 4) == 300`.
pub fn calc_factor(value: u64, level: u64) -> u64 {
    if level == 0 {
        return 0;
    }
    let q = value / level;
    let base = 10u64.pow(digit_count(q) - 1);
    q - q % base
}

/// Floating-point form of [`calc_factor`], exact for integral inputs below
/// 2^53 and free of integer saturation above that.
fn nice_factor(value: f64, level: f64) -> f64 {
    let q = (value / level).floor();
    if !(q >= 1.0) || !q.is_finite() {
        return 0.0;
    }
    let mut base = 10f64.powi(q.log10().floor() as i32);
    // log10 can land one digit off near exact powers of ten
    if base > q {
        base /= 10.0;
    } else if base * 10.0 <= q {
        base *= 10.0;
    }
    q - q % base
}

fn digit_count(mut n: u64) -> u32 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

/// Y-axis gridline values: `levels[i] = i * factor`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ruler {
    pub factor: f64,
    pub levels: Vec<f64>,
}

impl Default for Ruler {
    fn default() -> Self {
        Self::from_factor(0.0, INITIAL_LEVEL)
    }
}

impl Ruler {
    /// Ruler covering `extreme` starting from [`INITIAL_LEVEL`] levels.
    pub fn nice(extreme: f64) -> Self {
        Self::with_initial_level(extreme, INITIAL_LEVEL)
    }

    /// Smallest level count `>= initial` with `factor * (level - 1) >= extreme`.
    /// A zero factor (extreme below `initial`) keeps `initial` all-zero levels.
    pub fn with_initial_level(extreme: f64, initial: usize) -> Self {
        let initial = initial.max(2);
        let e = if extreme.is_finite() { extreme.max(0.0) } else { 0.0 };
        let factor = nice_factor(e, initial as f64);

        let mut level = initial;
        if factor > 0.0 {
            while factor * ((level - 1) as f64) < e {
                level += 1;
            }
        }
        debug!(extreme = e, factor, level, "ruler computed");
        Self::from_factor(factor, level)
    }

    fn from_factor(factor: f64, level: usize) -> Self {
        Self { factor, levels: (0..level).map(|i| i as f64 * factor).collect() }
    }

    pub fn level(&self) -> usize { self.levels.len() }

    /// Value of the top gridline.
    pub fn max(&self) -> f64 { self.levels.last().copied().unwrap_or(0.0) }
}

/// `value / extent * span`, or 0 (the baseline) when `extent` is zero.
#[inline]
pub fn scaled(value: f64, extent: f64, span: f32) -> f32 {
    if extent == 0.0 || !extent.is_finite() {
        0.0
    } else {
        (value * span as f64 / extent) as f32
    }
}
