//! Particle model for impact bursts and the victory confetti

use std::f64::consts::TAU;

use rand::Rng;

pub const GRAVITY: f64 = 0.5;
pub const DRAG: f64 = 0.98;
pub const DECAY: f64 = 0.02;
pub const MIN_RADIUS: f64 = 0.1;

pub const VICTORY_PALETTE: [&str; 5] = ["#FFD700", "#FFA500", "#FF69B4", "#00CED1", "#7FFF00"];
pub const VICTORY_COUNT: usize = 50;
/// Delay between two confetti spawns
pub const VICTORY_STAGGER_MS: u64 = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub vx: f64,
    pub vy: f64,
    pub color: &'static str,
    pub size: f64,
    /// 1.0 at spawn, dead at 0
    pub life: f64,
}

impl Particle {
    pub fn new(origin: Point, color: &'static str, velocity: f64, angle: f64, size: f64) -> Self {
        Self {
            position: origin,
            vx: angle.cos() * velocity,
            vy: angle.sin() * velocity,
            color,
            size,
            life: 1.0,
        }
    }

    /// Advance one frame
    pub fn update(&mut self) {
        self.position.x += self.vx;
        self.position.y += self.vy;
        self.vy += GRAVITY;
        self.vx *= DRAG;
        self.vy *= DRAG;
        self.life -= DECAY;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Draw radius; never negative
    pub fn radius(&self) -> f64 {
        (self.size * self.life).max(MIN_RADIUS)
    }

    pub fn alpha(&self) -> f64 {
        self.life.clamp(0.0, 1.0)
    }
}

/// Evenly spread burst with randomised speed (40-100) and size (4-12)
pub fn impact_burst<R: Rng + ?Sized>(
    rng: &mut R,
    origin: Point,
    color: &'static str,
    count: usize,
) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let angle = (i as f64 / count as f64) * TAU;
            let velocity = rng.gen_range(40.0..100.0);
            let size = rng.gen_range(4.0..12.0);
            Particle::new(origin, color, velocity, angle, size)
        })
        .collect()
}

/// Confetti from the screen centre; spawn `i` is meant to appear after
/// `i * VICTORY_STAGGER_MS`
pub fn victory_burst<R: Rng + ?Sized>(rng: &mut R, center: Point) -> Vec<Particle> {
    (0..VICTORY_COUNT)
        .map(|_| {
            let color = VICTORY_PALETTE[rng.gen_range(0..VICTORY_PALETTE.len())];
            let velocity = rng.gen_range(100.0..200.0);
            let angle = rng.gen_range(0.0..TAU);
            Particle::new(center, color, velocity, angle, 10.0)
        })
        .collect()
}

/// Live particles, stepped once per frame
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, particles: impl IntoIterator<Item = Particle>) {
        self.particles.extend(particles);
    }

    /// Update every particle and drop the dead ones
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.update();
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
