use std::f64::consts::TAU;

use crate::field::frame_loop::Backdrop;
use crate::foundation::core::{Point, Rect, Rgba, SurfaceSize};
use crate::foundation::math::{Rng64, clamp, sine_hash};
use crate::render::backend::{DrawList, DrawOp, GradientStop};

/// Tuning knobs for [`BeamField`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FieldOpts {
    /// Dot spacing before DPR scaling; clamped into `[6, 12]` after.
    pub dot_spacing: f64,
    pub wave_amplitude: f64,
    pub wave_speed: f64,
    /// Fraction of the height covered by the gradient wash.
    pub gradient_height: f64,
    pub dot_alpha: f64,
    /// First dot row, as a fraction of the height.
    pub start_y_ratio: f64,
    pub particle_count: usize,
    /// Extra canvas below the visible section, in CSS px.
    pub extend_bottom: f64,
    pub seed: u64,
}

impl Default for FieldOpts {
    fn default() -> Self {
        Self {
            dot_spacing: 7.0,
            wave_amplitude: 38.0,
            wave_speed: 0.62,
            gradient_height: 0.9,
            dot_alpha: 0.8,
            start_y_ratio: 0.06,
            particle_count: 220,
            extend_bottom: 0.0,
            seed: 0x6d69_6e63_666f,
        }
    }
}

const DOT_COLOR: Rgba = Rgba::new(120, 130, 255, 1.0);
const PARTICLE_COLOR: Rgba = Rgba::new(162, 181, 255, 0.58);

#[derive(Clone, Copy, Debug, PartialEq)]
struct Dot {
    x: f64,
    y: f64,
    phase: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Particle {
    x: f64,
    y: f64,
    vy: f64,
    alpha: f64,
    size: f64,
    drift: f64,
}

/// Per-frame vertical zones shared by dots and particles.
#[derive(Clone, Copy, Debug)]
struct Zones {
    height: f64,
    active: f64,
    tail_zone: f64,
    tail_start: f64,
}

impl Zones {
    fn new(height: f64, extend_bottom: f64) -> Self {
        let active = (height - extend_bottom).max(height * 0.62);
        Self {
            height,
            active,
            tail_zone: (extend_bottom + 40.0).max(height * 0.14),
            tail_start: active - 28.0_f64.max(extend_bottom * 0.12),
        }
    }

    fn edge_falloff(&self, y: f64) -> f64 {
        clamp((self.height - y) / self.tail_zone, 0.0, 1.0)
    }

    fn tail_atten(&self, y: f64) -> f64 {
        1.0 - clamp(
            (y - self.tail_start) / (self.height - self.tail_start),
            0.0,
            1.0,
        )
    }

    fn lower_atten(&self, y: f64) -> f64 {
        1.0 - clamp(
            (y - self.height * 0.62) / (self.height * 0.38),
            0.0,
            1.0,
        )
    }
}

/// Hero background: a wavy grid of dots over a gradient wash, with particles rising through it.
#[derive(Clone, Debug)]
pub struct BeamField {
    opts: FieldOpts,
    size: SurfaceSize,
    rng: Rng64,
    dots: Vec<Dot>,
    particles: Vec<Particle>,
}

impl BeamField {
    pub fn new(size: SurfaceSize, opts: FieldOpts) -> Self {
        let mut field = Self {
            opts,
            size,
            rng: Rng64::new(opts.seed),
            dots: Vec::new(),
            particles: Vec::new(),
        };
        field.layout();
        field
    }

    pub fn opts(&self) -> &FieldOpts {
        &self.opts
    }

    /// Device-scaled dot spacing.
    pub fn spacing(&self) -> f64 {
        clamp(self.opts.dot_spacing * self.size.dpr, 6.0, 12.0)
    }

    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Particle positions, for inspection.
    pub fn particle_positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.particles.iter().map(|p| Point::new(p.x, p.y))
    }

    fn layout(&mut self) {
        let SurfaceSize { width, height, .. } = self.size;
        let spacing = self.spacing();

        self.dots.clear();
        let mut y = height * self.opts.start_y_ratio;
        while y <= height + spacing {
            let mut x = -spacing;
            while x <= width + spacing {
                let phase = self.rng.next_f64() * TAU;
                self.dots.push(Dot { x, y, phase });
                x += spacing;
            }
            y += spacing;
        }

        self.particles.clear();
        for _ in 0..self.opts.particle_count {
            let x = self.rng.next_f64() * width;
            let y = height * self.rng.range(0.55, 0.4);
            let vy = self.rng.range(0.08, 0.22);
            let alpha = self.rng.range(0.08, 0.1);
            let size = self.rng.range(0.5, 0.9);
            let drift = (self.rng.next_f64() - 0.5) * 0.16;
            self.particles.push(Particle {
                x,
                y,
                vy,
                alpha,
                size,
                drift,
            });
        }
        tracing::debug!(
            dots = self.dots.len(),
            particles = self.particles.len(),
            spacing,
            "beam field layout"
        );
    }

    fn draw_wash(&self, list: &mut DrawList, zones: &Zones) {
        let SurfaceSize { width, height, .. } = self.size;
        let g = self.opts.gradient_height;
        let accent = |a| Rgba::new(83, 90, 255, a);
        list.push(DrawOp::VerticalGradient {
            rect: Rect::new(0.0, height * (1.0 - g), width, height),
            y0: zones.active * (1.0 - g),
            y1: height,
            stops: vec![
                GradientStop::new(0.0, Rgba::new(20, 24, 32, 0.0)),
                GradientStop::new(0.56, accent(0.44)),
                GradientStop::new(0.82, accent(0.12)),
                GradientStop::new(1.0, accent(0.0)),
            ],
        });
    }

    fn draw_dots(&self, list: &mut DrawList, zones: &Zones, t: f64) {
        let amp = self.opts.wave_amplitude;
        let speed = self.opts.wave_speed;
        let dot_alpha = self.opts.dot_alpha;
        let color = DOT_COLOR.fade(dot_alpha);

        for dot in &self.dots {
            let wave = (dot.x * 0.018 + t * speed + dot.phase).sin() * (amp * 0.35);
            let wave2 =
                (dot.x * 0.006 - t * speed * 0.6 + dot.phase * 0.6).sin() * (amp * 0.25);
            let y = dot.y + wave + wave2;
            if y < zones.active * 0.08 {
                continue;
            }

            let fade = clamp((y - zones.active * 0.06) / (zones.active * 0.94), 0.0, 1.0);
            let edge = zones.edge_falloff(y);
            if edge < 0.05 {
                continue;
            }
            let tail = zones.tail_atten(y);
            let lower = zones.lower_atten(y);
            let density = clamp(tail.powf(1.12) * lower.powf(0.78), 0.32, 1.0);
            if sine_hash(dot.x, dot.y) > density {
                continue;
            }
            let radius = clamp(
                (1.0 + fade * 1.4)
                    * (0.42 + edge * 0.28)
                    * (0.5 + tail * 0.5)
                    * (0.58 + lower * 0.34),
                0.44,
                2.2,
            );
            let alpha = dot_alpha * fade * edge * tail * (0.62 + lower * 0.38);
            list.circle(Point::new(dot.x, y), radius, color.fade(alpha));
        }
    }

    fn draw_and_step_particles(&mut self, list: &mut DrawList, zones: &Zones) {
        let width = self.size.width;
        for i in 0..self.particles.len() {
            let p = self.particles[i];
            let visibility = clamp(
                (p.y - zones.active * 0.45) / (zones.active * 0.28),
                0.0,
                1.0,
            );
            let edge = zones.edge_falloff(p.y);
            if edge < 0.06 {
                continue;
            }
            let tail = zones.tail_atten(p.y);
            let lower = zones.lower_atten(p.y);
            let density = clamp(tail.powf(1.06) * lower.powf(0.72), 0.34, 1.0);
            if sine_hash(p.x, p.y) > density {
                continue;
            }
            let size = p.size
                * (0.42 + edge * 0.28)
                * (0.52 + tail * 0.4)
                * (0.64 + lower * 0.3);
            let alpha = p.alpha * visibility * edge * tail * (0.62 + lower * 0.38);
            list.circle(Point::new(p.x, p.y), size, PARTICLE_COLOR.fade(alpha));

            let mut next = p;
            next.y -= p.vy;
            next.x += p.drift;
            if next.y < zones.active * 0.12 {
                next.y = zones.active * self.rng.range(0.5, 0.22);
                next.x = self.rng.next_f64() * width;
                next.alpha = self.rng.range(0.08, 0.1);
                next.size = self.rng.range(0.5, 0.9);
                next.drift = (self.rng.next_f64() - 0.5) * 0.16;
            }
            self.particles[i] = next;
        }
    }
}

impl Backdrop for BeamField {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.layout();
    }

    #[tracing::instrument(level = "trace", skip(self))]
    fn frame(&mut self, time_s: f64) -> DrawList {
        let zones = Zones::new(self.size.height, self.opts.extend_bottom);
        let mut list = DrawList::new(self.size);
        self.draw_wash(&mut list, &zones);
        self.draw_dots(&mut list, &zones, time_s);
        self.draw_and_step_particles(&mut list, &zones);
        list
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/dots.rs"]
mod tests;
