//! Small numeric helpers shared by the curve, chart and backdrop code.

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: callers feed it viewport-derived bounds that can
/// momentarily invert during resize, in which case `min` wins.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Linear interpolation from `from` to `to` at `t` (not clamped).
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// One coordinate of a cubic Bezier with control values `p0..p3` at parameter `t`.
pub fn cubic(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    mt * mt * mt * p0 + 3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t * p3
}

/// Hermite smoothstep between `edge0` and `edge1`.
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let span = edge1 - edge0;
    if span == 0.0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = clamp((x - edge0) / span, 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Fractional part, always in `[0, 1)` for finite input.
///
/// Tiny negative inputs round `value - floor` up to exactly `1.0`; that case folds to `0.0`.
pub fn fract(value: f64) -> f64 {
    let f = value - value.floor();
    if f >= 1.0 { 0.0 } else { f }
}

/// Classic shader-style sine hash of a 2D position, in `[0, 1)`.
pub fn sine_hash(x: f64, y: f64) -> f64 {
    fract((x * 12.9898 + y * 78.233).sin() * 43758.5453)
}

/// Time-varying variant of [`sine_hash`] used for shimmer and sparkle.
pub fn sine_hash_t(x: f64, y: f64, t: f64) -> f64 {
    fract((x * 12.9898 + y * 78.233 + t * 0.04).sin() * 43758.5453)
}

/// Deterministic SplitMix64 generator standing in for `Math.random()`.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)` with 53 bits of precision.
    pub fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform in `[lo, lo + span)`.
    pub fn range(&mut self, lo: f64, span: f64) -> f64 {
        lo + self.next_f64() * span
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
