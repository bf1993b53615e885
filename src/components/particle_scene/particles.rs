//! Short-lived particles that drift upward, shy away from the pointer and fade out.

use std::f64::consts::TAU;

use rand::Rng;

use super::config::{Range, sample};
use super::theme::Color;

/// Lifespan of a fresh particle. Doubles as its opacity on the 0-255 scale.
pub const LIFESPAN: f64 = 255.0;
/// Lifespan lost per update.
pub const FADE_PER_FRAME: f64 = 2.0;
/// Pointer distance under which particles are pushed away.
pub const REPEL_RADIUS: f64 = 100.0;
/// Push applied to a particle sitting exactly on the pointer.
pub const REPEL_FORCE: f64 = 0.5;
/// Velocity factor applied on leaving the canvas.
pub const BOUNCE: f64 = -0.5;

/// A single fading particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Diameter.
	pub size: f64,
	/// Counts down from [`LIFESPAN`]; the particle is dead once negative.
	pub lifespan: f64,
	pub color: Color,
}

impl Particle {
	/// A white particle at (x, y) with a small, mostly upward velocity.
	pub fn new<R: Rng>(x: f64, y: f64, rng: &mut R) -> Self {
		Self {
			x,
			y,
			vx: rng.gen_range(-1.0..1.0),
			vy: rng.gen_range(-2.0..-0.5),
			size: rng.gen_range(3.0..8.0),
			lifespan: LIFESPAN,
			color: Color::WHITE,
		}
	}

	/// A burst particle at (x, y) flying off in a random direction.
	pub fn burst<R: Rng>(x: f64, y: f64, speed: Range, size: Range, rng: &mut R) -> Self {
		let mut p = Self::new(x, y, rng);
		let angle = rng.gen_range(0.0..TAU);
		let speed = sample(rng, speed);
		p.vx = angle.cos() * speed;
		p.vy = angle.sin() * speed;
		p.size = sample(rng, size);
		p
	}

	/// Advance one frame: move, fade, get pushed by the pointer, bounce off the edges.
	pub fn update(&mut self, pointer: (f64, f64), width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;
		self.lifespan -= FADE_PER_FRAME;

		let (px, py) = pointer;
		let (dx, dy) = (self.x - px, self.y - py);
		let d = (dx * dx + dy * dy).sqrt();
		if d < REPEL_RADIUS {
			// Linear falloff, no damping: lingering near the pointer keeps accelerating.
			let force = REPEL_FORCE * (1.0 - d / REPEL_RADIUS);
			let angle = dy.atan2(dx);
			self.vx += angle.cos() * force;
			self.vy += angle.sin() * force;
		}

		if self.x < 0.0 || self.x > width {
			self.vx *= BOUNCE;
		}
		if self.y < 0.0 || self.y > height {
			self.vy *= BOUNCE;
		}
	}

	pub fn is_dead(&self) -> bool {
		self.lifespan < 0.0
	}

	/// Draw opacity in [0, 1].
	pub fn alpha(&self) -> f64 {
		(self.lifespan / LIFESPAN).clamp(0.0, 1.0)
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	const FAR: (f64, f64) = (-10_000.0, -10_000.0);

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			vx,
			vy,
			size: 4.0,
			lifespan: LIFESPAN,
			color: Color::WHITE,
		}
	}

	#[test]
	fn new_particle_ranges() {
		let mut rng = SmallRng::seed_from_u64(11);
		for _ in 0..500 {
			let p = Particle::new(10.0, 20.0, &mut rng);
			assert_eq!((p.x, p.y), (10.0, 20.0));
			assert!((-1.0..1.0).contains(&p.vx));
			assert!((-2.0..-0.5).contains(&p.vy));
			assert!((3.0..8.0).contains(&p.size));
			assert_eq!(p.lifespan, 255.0);
			assert_eq!(p.color, Color::WHITE);
			assert!(!p.is_dead());
		}
	}

	#[test]
	fn burst_speed_and_size() {
		let mut rng = SmallRng::seed_from_u64(5);
		for _ in 0..500 {
			let p = Particle::burst(0.0, 0.0, (2.0, 5.0), (5.0, 12.0), &mut rng);
			let speed = p.vx.hypot(p.vy);
			assert!(speed >= 2.0 - 1e-9 && speed < 5.0 + 1e-9, "speed {speed}");
			assert!((5.0..12.0).contains(&p.size));
		}
	}

	#[test]
	fn dies_only_below_zero() {
		let mut p = particle(50.0, 50.0, 0.0, 0.0);
		p.lifespan = 0.0;
		assert!(!p.is_dead());
		assert_eq!(p.alpha(), 0.0);
		p.lifespan = -1.0;
		assert!(p.is_dead());
		assert_eq!(p.alpha(), 0.0);
	}

	#[test]
	fn dies_after_128_updates() {
		let mut p = particle(50.0, 50.0, 0.0, 0.0);
		for _ in 0..127 {
			p.update(FAR, 100.0, 100.0);
		}
		assert_eq!(p.lifespan, 1.0);
		assert!(!p.is_dead());
		p.update(FAR, 100.0, 100.0);
		assert!(p.is_dead());
	}

	#[test]
	fn bounces_off_y_edge() {
		let mut p = particle(50.0, 650.0, 0.0, 3.0);
		p.update(FAR, 800.0, 600.0);
		assert_eq!(p.vy, -1.5);
		assert_eq!(p.vx, 0.0);
		// Position is not clamped.
		assert_eq!(p.y, 653.0);
	}

	#[test]
	fn bounces_off_left_edge() {
		let mut p = particle(-5.0, 300.0, -2.0, 0.0);
		p.update(FAR, 800.0, 600.0);
		assert_eq!(p.vx, 1.0);
		assert_eq!(p.vy, 0.0);
	}

	#[test]
	fn pointer_pushes_away() {
		let mut p = particle(110.0, 100.0, 0.0, 0.0);
		// Ends up 10 px right of the pointer: force 0.5 * 0.9 along +x.
		p.update((100.0, 100.0), 800.0, 600.0);
		assert!((p.vx - 0.45).abs() < 1e-12);
		assert!(p.vy.abs() < 1e-12);
	}

	#[test]
	fn pointer_outside_radius_has_no_effect() {
		let mut p = particle(300.0, 300.0, 1.0, 1.0);
		p.update((100.0, 100.0), 800.0, 600.0);
		assert_eq!((p.vx, p.vy), (1.0, 1.0));
	}

	#[test]
	fn repulsion_accumulates() {
		let mut p = particle(120.0, 100.0, 0.0, 0.0);
		let mut last = 0.0;
		for _ in 0..5 {
			// Hold the particle in place so it keeps feeling the pointer.
			p.x = 120.0;
			p.update((100.0, 100.0), 800.0, 600.0);
			assert!(p.vx > last);
			last = p.vx;
		}
	}

	proptest! {
		#[test]
		fn lifespan_drops_two_per_update(
			n in 0usize..400,
			x in -500.0f64..1500.0,
			y in -500.0f64..1500.0,
			vx in -10.0f64..10.0,
			vy in -10.0f64..10.0,
			px in 0.0f64..800.0,
			py in 0.0f64..600.0,
		) {
			let mut p = particle(x, y, vx, vy);
			for _ in 0..n {
				p.update((px, py), 800.0, 600.0);
			}
			prop_assert_eq!(p.lifespan, 255.0 - 2.0 * n as f64);
			prop_assert_eq!(p.is_dead(), p.lifespan < 0.0);
		}

		#[test]
		fn bounce_halves_and_flips_x(v in 0.01f64..50.0, over in 0.0f64..100.0) {
			let mut p = particle(800.0 + over + 0.01, 300.0, v, 0.0);
			p.update(FAR, 800.0, 600.0);
			prop_assert_eq!(p.vx, -0.5 * v);
		}
	}
}
