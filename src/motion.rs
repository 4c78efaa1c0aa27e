//! Motion styling for the visual front end.
//!
//! Maps an emotion label and intensity to a gradient palette, a sine wave and
//! a drifting particle field.

use std::f64::consts::PI;

use rand::Rng;

use crate::emotion::EmotionResult;
use crate::metrics;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionStyle {
    pub palette: [&'static str; 3],
    pub speed: f64,
    pub wave: f64,
}

const NEUTRAL: MotionStyle = MotionStyle {
    palette: ["#2a2f45", "#5b6a9b", "#8799c5"],
    speed: 0.6,
    wave: 22.0,
};

const STYLES: &[(&str, MotionStyle)] = &[
    ("neutral", NEUTRAL),
    (
        "melancholic",
        MotionStyle {
            palette: ["#1c2c3a", "#3f5675", "#6c7ea7"],
            speed: 0.4,
            wave: 28.0,
        },
    ),
    (
        "melancholic-hope",
        MotionStyle {
            palette: ["#1d2d45", "#455f9e", "#a4b8ff"],
            speed: 0.55,
            wave: 26.0,
        },
    ),
    (
        "hope",
        MotionStyle {
            palette: ["#2d3b5f", "#6f87d4", "#c5d4ff"],
            speed: 0.8,
            wave: 20.0,
        },
    ),
    (
        "joy",
        MotionStyle {
            palette: ["#f76c6c", "#fdd56a", "#ff9ff3"],
            speed: 1.2,
            wave: 18.0,
        },
    ),
    (
        "calm",
        MotionStyle {
            palette: ["#1c3b46", "#2f6f7a", "#74bfc9"],
            speed: 0.5,
            wave: 30.0,
        },
    ),
    (
        "anger",
        MotionStyle {
            palette: ["#4a0d0d", "#c72f2f", "#ff7d3a"],
            speed: 1.4,
            wave: 14.0,
        },
    ),
    (
        "fear",
        MotionStyle {
            palette: ["#2b223f", "#4d3b78", "#8a6fd1"],
            speed: 0.9,
            wave: 24.0,
        },
    ),
];

const MIN_PARTICLES: usize = 80;
const MAX_PARTICLES: usize = 180;

/// Style for an emotion label; unknown labels get the neutral style.
pub fn style_for(label: &str) -> MotionStyle {
    STYLES
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, style)| *style)
        .unwrap_or(NEUTRAL)
}

pub fn particle_count(intensity: f64) -> usize {
    let extra = (metrics::clamp01(intensity) * 120.0).floor() as usize;
    (MIN_PARTICLES + extra).min(MAX_PARTICLES)
}

pub fn wave_height(style: &MotionStyle, intensity: f64) -> f64 {
    style.wave + metrics::clamp01(intensity) * 40.0
}

/// Vertical position of the wave at horizontal offset `x`.
pub fn wave_y(x: f64, height: f64, time_ms: f64, style: &MotionStyle, intensity: f64) -> f64 {
    height / 2.0 + (x / 80.0 + time_ms * 0.001 * style.speed).sin() * wave_height(style, intensity)
}

pub fn particle_alpha(intensity: f64) -> f64 {
    0.3 + metrics::clamp01(intensity) * 0.6
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub speed: f64,
    pub drift: f64,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    pub width: f64,
    pub height: f64,
    pub particles: Vec<Particle>,
}

impl ParticleField {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, intensity: f64) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let intensity = metrics::clamp01(intensity);

        let particles = (0..particle_count(intensity))
            .map(|_| Particle {
                x: rng.gen_range(0.0..1.0) * width,
                y: rng.gen_range(0.0..1.0) * height,
                radius: 1.0 + rng.gen_range(0.0..1.0) * (2.0 + intensity * 3.0),
                speed: 0.4 + rng.gen_range(0.0..1.0) * (1.2 + intensity),
                drift: rng.gen_range(0.0..1.0) * PI * 2.0,
            })
            .collect();

        Self {
            width,
            height,
            particles,
        }
    }

    /// Moves every particle one frame forward; particles leaving the viewport
    /// re-enter from the opposite edge.
    pub fn advance(&mut self, time_ms: f64) {
        let t = time_ms * 0.001;
        for p in &mut self.particles {
            p.y += (t * p.speed + p.drift).sin() * 0.6;
            p.x += (t * p.speed + p.drift).cos() * 0.4;

            if p.x < 0.0 {
                p.x = self.width;
            }
            if p.x > self.width {
                p.x = 0.0;
            }
            if p.y < 0.0 {
                p.y = self.height;
            }
            if p.y > self.height {
                p.y = 0.0;
            }
        }
    }
}

/// Everything needed to draw one result.
#[derive(Debug, Clone)]
pub struct Scene {
    pub label: &'static str,
    pub style: MotionStyle,
    pub intensity: f64,
    pub energy: &'static str,
    pub field: ParticleField,
}

impl Scene {
    pub fn from_result<R: Rng + ?Sized>(
        result: &EmotionResult,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> Self {
        let label = result.emotion.as_str();
        Self {
            label,
            style: style_for(label),
            intensity: result.intensity,
            energy: result.energy,
            field: ParticleField::spawn(rng, width, height, result.intensity),
        }
    }

    pub fn wave_height(&self) -> f64 {
        wave_height(&self.style, self.intensity)
    }

    pub fn particle_alpha(&self) -> f64 {
        particle_alpha(self.intensity)
    }
}
