use crate::field::frame_loop::Backdrop;
use crate::foundation::core::{Point, Rect, Rgba, SurfaceSize};
use crate::foundation::math::{Rng64, clamp, sine_hash_t, smoothstep};
use crate::render::backend::{DrawList, DrawOp, GradientStop};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BeamOpts {
    /// Falloff exponent of the beam's Gaussian profile.
    pub sharpness: f64,
    pub glow_strength: f64,
    /// Extra intensity blooming towards the bottom.
    pub base_bloom: f64,
    /// Dots dimmer than this are skipped.
    pub intensity_threshold: f64,
    pub seed: u64,
}

impl Default for BeamOpts {
    fn default() -> Self {
        Self {
            sharpness: 3.2,
            glow_strength: 1.0,
            base_bloom: 0.6,
            intensity_threshold: 0.12,
            seed: 0x6265_616d,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct RainStreak {
    x: f64,
    y: f64,
    length: f64,
    speed: f64,
    alpha: f64,
}

/// Vertical light beam made of dots, with soft glow bands and faint falling rain streaks.
#[derive(Clone, Debug)]
pub struct CanvasBeam {
    opts: BeamOpts,
    size: SurfaceSize,
    rng: Rng64,
    rain: Vec<RainStreak>,
}

impl CanvasBeam {
    pub fn new(size: SurfaceSize, opts: BeamOpts) -> Self {
        let mut beam = Self {
            opts,
            size,
            rng: Rng64::new(opts.seed),
            rain: Vec::new(),
        };
        beam.setup_rain();
        beam
    }

    /// Half-width of the beam in CSS px.
    pub fn beam_radius(&self) -> f64 {
        clamp(self.size.width * 0.12, 70.0, 180.0)
    }

    pub fn dot_spacing(&self) -> f64 {
        clamp(6.0 * self.size.dpr, 6.0, 10.0)
    }

    pub fn rain_count(&self) -> usize {
        self.rain.len()
    }

    fn setup_rain(&mut self) {
        let SurfaceSize { width, height, .. } = self.size;
        let count = clamp((width / 80.0).floor(), 10.0, 24.0) as usize;
        self.rain = (0..count)
            .map(|_| RainStreak {
                x: self.rng.next_f64() * width,
                y: self.rng.next_f64() * height,
                length: self.rng.range(60.0, 120.0),
                speed: self.rng.range(0.2, 0.4),
                alpha: self.rng.range(0.02, 0.035),
            })
            .collect();
    }

    fn draw_glow(&self, list: &mut DrawList) {
        let SurfaceSize { width, height, .. } = self.size;
        let center = width / 2.0;
        let g = self.opts.glow_strength;
        let radius = self.beam_radius();

        let band = |list: &mut DrawList, band_width: f64, r: u8, gr: u8, b: u8, a: [f64; 3]| {
            let c = |alpha: f64| Rgba::new(r, gr, b, alpha * g);
            list.push(DrawOp::VerticalGradient {
                rect: Rect::new(center - band_width / 2.0, 0.0, center + band_width / 2.0, height),
                y0: 0.0,
                y1: height,
                stops: vec![
                    GradientStop::new(0.0, c(a[0])),
                    GradientStop::new(0.5, c(a[1])),
                    GradientStop::new(1.0, c(a[2])),
                ],
            });
        };
        band(list, radius * 1.4, 60, 140, 255, [0.04, 0.12, 0.03]);
        band(list, radius * 0.4, 110, 200, 255, [0.08, 0.2, 0.06]);
    }

    fn draw_beam_dots(&self, list: &mut DrawList, t: f64) {
        let SurfaceSize { width, height, .. } = self.size;
        let center = width / 2.0;
        let radius = self.beam_radius();
        let spacing = self.dot_spacing();
        let BeamOpts {
            sharpness,
            base_bloom,
            intensity_threshold,
            ..
        } = self.opts;

        let mut x = center - radius;
        while x <= center + radius {
            let d = (x - center).abs() / radius;
            let profile = (-d * d * sharpness).exp();
            if profile >= 0.02 {
                let mut y = 0.0;
                while y <= height {
                    let flow = (y * 0.02 + t * 0.9).sin() * 0.2;
                    let shimmer = (sine_hash_t(x, y, t) - 0.5) * 0.25;
                    let base = smoothstep(height * 0.55, height * 0.95, y) * base_bloom;
                    let mut intensity = profile + flow + shimmer + base;
                    if sine_hash_t(x * 1.3, y * 1.7, t * 1.4) > 0.997 {
                        intensity += 0.8;
                    }
                    let intensity = clamp(intensity, 0.0, 1.0);
                    if intensity >= intensity_threshold {
                        list.circle(
                            Point::new(x, y),
                            clamp(1.0 + intensity * 1.4, 1.0, 2.6),
                            Rgba::new(150, 220, 255, intensity * 0.65),
                        );
                    }
                    y += spacing;
                }
            }
            x += spacing;
        }
    }

    fn draw_and_step_rain(&mut self, list: &mut DrawList) {
        let SurfaceSize { width, height, .. } = self.size;
        let stroke = Rgba::new(120, 170, 255, 0.08);
        for i in 0..self.rain.len() {
            let s = self.rain[i];
            if (s.x - width / 2.0).abs() < width * 0.1 {
                continue;
            }
            list.line(
                Point::new(s.x, s.y),
                Point::new(s.x, s.y + s.length),
                1.0,
                stroke.fade(s.alpha),
            );
            let mut next = s;
            next.y += s.speed;
            if next.y > height + s.length {
                next.y = -s.length;
                next.x = self.rng.next_f64() * width;
            }
            self.rain[i] = next;
        }
    }
}

impl Backdrop for CanvasBeam {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.setup_rain();
    }

    #[tracing::instrument(level = "trace", skip(self))]
    fn frame(&mut self, time_s: f64) -> DrawList {
        let mut list = DrawList::new(self.size);
        self.draw_glow(&mut list);
        self.draw_beam_dots(&mut list, time_s);
        self.draw_and_step_rain(&mut list);
        list
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/beam.rs"]
mod tests;
