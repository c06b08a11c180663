// Canvas particle simulation.
//
// Platform independent: the web front-end owns the canvas and feeds pointer
// positions and canvas sizes in, then reads particle state back out to draw.

use super::constants::*;
use glam::Vec2;
use rand::prelude::*;

/// Population size for a canvas of the given pixel dimensions.
#[inline]
pub fn particle_count(width: f32, height: f32) -> usize {
    let area = (width.max(0.0) * height.max(0.0)) / PARTICLE_AREA_PER_PARTICLE;
    (area.floor() as usize).min(PARTICLE_MAX_COUNT)
}

#[derive(Clone, Debug)]
pub struct ParticleParams {
    pub max_count: usize,
    pub influence_radius: f32,
    pub pull: f32,
    pub link_distance: f32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            max_count: PARTICLE_MAX_COUNT,
            influence_radius: POINTER_INFLUENCE_RADIUS,
            pull: POINTER_PULL,
            link_distance: LINK_DISTANCE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    life: f32,
    max_life: f32,
}

impl Particle {
    fn spawn(rng: &mut StdRng, size: Vec2) -> Self {
        let life = PARTICLE_LIFE_MIN + rng.gen::<f32>() * PARTICLE_LIFE_SPAN;
        Self {
            pos: Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y),
            vel: random_velocity(rng),
            radius: PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN,
            life,
            max_life: life,
        }
    }

    fn respawn(&mut self, rng: &mut StdRng, size: Vec2) {
        let fresh = Self::spawn(rng, size);
        self.pos = fresh.pos;
        self.vel = fresh.vel;
        self.life = fresh.life;
        self.max_life = fresh.max_life;
    }

    /// Fades linearly with age, from 0.5 at spawn to 0 at end of life.
    #[inline]
    pub fn opacity(&self) -> f32 {
        (self.life / self.max_life).clamp(0.0, 1.0) * PARTICLE_MAX_OPACITY
    }

    #[inline]
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn life(&self) -> f32 {
        self.life
    }

    #[inline]
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn max_life(&self) -> f32 {
        self.max_life
    }
}

#[inline]
fn random_velocity(rng: &mut StdRng) -> Vec2 {
    Vec2::new(
        (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN,
        (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN,
    )
}

pub struct ParticleField {
    pub params: ParticleParams,
    size: Vec2,
    pointer: Vec2,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, params: ParticleParams, rng: StdRng) -> Self {
        let mut field = Self {
            params,
            size: Vec2::new(width, height),
            pointer: Vec2::ZERO,
            particles: Vec::new(),
            rng,
        };
        field.populate();
        field
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_seed(width: f32, height: f32, seed: u64) -> Self {
        Self::new(
            width,
            height,
            ParticleParams::default(),
            StdRng::seed_from_u64(seed),
        )
    }

    /// Old particles are discarded, not rescaled.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
        self.populate();
    }

    fn populate(&mut self) {
        let n = particle_count(self.size.x, self.size.y).min(self.params.max_count);
        self.particles.clear();
        self.particles.reserve(n);
        for _ in 0..n {
            let p = Particle::spawn(&mut self.rng, self.size);
            self.particles.push(p);
        }
    }

    #[inline]
    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    #[inline]
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let size = self.size;
        let pointer = self.pointer;
        let radius = self.params.influence_radius;
        let pull = self.params.pull;
        for p in self.particles.iter_mut() {
            p.pos += p.vel;
            p.life -= 1.0;

            let d = pointer - p.pos;
            let dist = d.length();
            if dist < radius {
                let force = (radius - dist) / radius;
                p.vel += d * force * pull;
            }

            if p.pos.x < 0.0 || p.pos.x > size.x {
                p.vel.x = -p.vel.x;
            }
            if p.pos.y < 0.0 || p.pos.y > size.y {
                p.vel.y = -p.vel.y;
            }

            if p.life <= 0.0 {
                p.respawn(&mut self.rng, size);
            }
        }
    }

    /// Unordered index pairs closer than the link distance.
    pub fn connections(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let max_sq = self.params.link_distance * self.params.link_distance;
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |i| {
            ((i + 1)..ps.len())
                .filter(move |&j| ps[i].pos.distance_squared(ps[j].pos) < max_sq)
                .map(move |j| (i, j))
        })
    }
}
