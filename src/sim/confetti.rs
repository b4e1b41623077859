//! Win celebration confetti
//!
//! A single burst of particles spawned the frame the puzzle is solved, then
//! advanced once per frame under constant gravity until every piece has
//! expired. No new particles after the initial burst; the collection simply
//! drains to empty.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{
    CONFETTI_COUNT, CONFETTI_GRAVITY, CONFETTI_LIFE_MAX, CONFETTI_LIFE_MIN, CONFETTI_SPAWN_BAND,
};

/// One confetti particle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Confetti {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: [u8; 3],
    /// Remaining lifetime in ticks; removed once it reaches zero
    pub life: i32,
}

impl Confetti {
    fn spawn(rng: &mut Pcg32, width: f32) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..=width),
                rng.random_range(0.0..=CONFETTI_SPAWN_BAND),
            ),
            vel: Vec2::new(rng.random_range(-1.0..=1.0), rng.random_range(-4.0..=-1.0)),
            color: [rng.random(), rng.random(), rng.random()],
            life: rng.random_range(CONFETTI_LIFE_MIN..=CONFETTI_LIFE_MAX),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }
}

/// The particle collection, with its own seeded RNG so spawns are
/// reproducible in tests
#[derive(Debug, Clone)]
pub struct ConfettiSky {
    particles: Vec<Confetti>,
    rng: Pcg32,
}

impl ConfettiSky {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Spawn the celebration burst along the top band of the frame
    pub fn spawn_burst(&mut self, width: f32) {
        log::info!("spawning {CONFETTI_COUNT} confetti particles");
        self.particles.reserve(CONFETTI_COUNT);
        for _ in 0..CONFETTI_COUNT {
            let piece = Confetti::spawn(&mut self.rng, width);
            self.particles.push(piece);
        }
    }

    /// Advance every particle one tick and drop the expired ones
    pub fn update(&mut self) {
        for piece in &mut self.particles {
            piece.pos += piece.vel;
            piece.vel.y += CONFETTI_GRAVITY;
            piece.life -= 1;
        }
        self.particles.retain(Confetti::is_alive);
    }

    pub fn particles(&self) -> &[Confetti] {
        &self.particles
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
