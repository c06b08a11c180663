// Host-side tests for the particle simulation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use glam::Vec2;
use particles::*;

#[test]
fn count_follows_canvas_area() {
    assert_eq!(particle_count(800.0, 600.0), 32);
    assert_eq!(particle_count(300.0, 200.0), 4);
    assert_eq!(particle_count(100.0, 100.0), 0);
    assert_eq!(particle_count(0.0, 0.0), 0);
}

#[test]
fn count_is_capped_at_fifty() {
    assert_eq!(particle_count(1920.0, 1080.0), 50);
    assert_eq!(particle_count(10_000.0, 10_000.0), 50);
}

#[test]
fn population_is_constant_across_frames() {
    let mut field = ParticleField::with_seed(800.0, 600.0, 7);
    let n = field.particles().len();
    assert_eq!(n, 32);
    // Longer than any lifetime, so every particle respawns at least once
    for frame in 0..1000 {
        if frame % 50 == 0 {
            field.set_pointer(Vec2::new((frame % 800) as f32, (frame % 600) as f32));
        }
        field.step();
        assert_eq!(field.particles().len(), n);
    }
}

#[test]
fn opacity_stays_in_range_and_tracks_life() {
    let mut field = ParticleField::with_seed(640.0, 480.0, 11);
    for _ in 0..400 {
        field.step();
        for p in field.particles() {
            let o = p.opacity();
            assert!((0.0..=0.5).contains(&o), "opacity {} out of range", o);
            let expected = (p.life() / p.max_life()) * 0.5;
            assert!((o - expected).abs() < 1e-6);
        }
    }
}

#[test]
fn opacity_fades_until_respawn() {
    let mut field = ParticleField::with_seed(640.0, 480.0, 5);
    let mut prev: Vec<(f32, f32)> = field
        .particles()
        .iter()
        .map(|p| (p.opacity(), p.max_life()))
        .collect();
    for _ in 0..200 {
        field.step();
        for (p, (prev_opacity, prev_max)) in field.particles().iter().zip(prev.iter()) {
            if p.max_life() == *prev_max {
                assert!(p.opacity() <= *prev_opacity);
            }
        }
        prev = field
            .particles()
            .iter()
            .map(|p| (p.opacity(), p.max_life()))
            .collect();
    }
}

#[test]
fn fresh_particles_start_at_full_opacity() {
    let field = ParticleField::with_seed(800.0, 600.0, 1);
    for p in field.particles() {
        assert!((p.opacity() - 0.5).abs() < 1e-6);
        assert!(p.max_life() >= 50.0 && p.max_life() < 150.0);
        assert!(p.radius >= 1.0 && p.radius < 3.0);
        assert!(p.vel.x.abs() <= 0.25 && p.vel.y.abs() <= 0.25);
        assert!(p.pos.x >= 0.0 && p.pos.x <= 800.0);
        assert!(p.pos.y >= 0.0 && p.pos.y <= 600.0);
    }
}

#[test]
fn resize_repopulates_for_new_dimensions() {
    let mut field = ParticleField::with_seed(800.0, 600.0, 9);
    assert_eq!(field.particles().len(), 32);

    field.resize(1920.0, 1080.0);
    assert_eq!(field.particles().len(), 50);
    assert_eq!(field.size(), Vec2::new(1920.0, 1080.0));

    field.resize(390.0, 300.0);
    assert_eq!(field.particles().len(), particle_count(390.0, 300.0));
    for p in field.particles() {
        assert!(p.pos.x <= 390.0 && p.pos.y <= 300.0);
    }
}

#[test]
fn connections_are_unique_close_pairs() {
    let mut field = ParticleField::with_seed(1200.0, 900.0, 21);
    for _ in 0..30 {
        field.step();
    }
    let ps = field.particles();
    let links: Vec<(usize, usize)> = field.connections().collect();
    for &(i, j) in &links {
        assert!(i < j);
        assert!(ps[i].pos.distance(ps[j].pos) < 80.0);
    }
    let expected = (0..ps.len())
        .flat_map(|i| ((i + 1)..ps.len()).map(move |j| (i, j)))
        .filter(|&(i, j)| ps[i].pos.distance(ps[j].pos) < 80.0)
        .count();
    assert_eq!(links.len(), expected);
}

#[test]
fn same_seed_same_field() {
    let mut a = ParticleField::with_seed(800.0, 600.0, 42);
    let mut b = ParticleField::with_seed(800.0, 600.0, 42);
    for _ in 0..100 {
        a.step();
        b.step();
    }
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.pos, pb.pos);
        assert_eq!(pa.vel, pb.vel);
    }
}

#[test]
fn pointer_defaults_to_origin() {
    let field = ParticleField::with_seed(800.0, 600.0, 2);
    assert_eq!(field.pointer(), Vec2::ZERO);
}
