//! Scene state and input reactions.
//!
//! [`SceneState`] owns everything that changes from frame to frame: the
//! particle collection, the profile rotation, the pointer and the viewport
//! size. Each input event maps to one method. The per-frame steps are exposed
//! separately so the renderer can interleave drawing between them; [`SceneState::tick`]
//! runs them back to back for headless use.

use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::config::{SceneConfig, sample};
use super::particles::Particle;
use super::theme::Color;
use super::types::SceneKey;

/// Linear interpolation from `a` toward `b` by `t`.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
	a + (b - a) * t
}

/// Core scene state, created once when the canvas mounts and mutated by the
/// animation loop and the input handlers.
pub struct SceneState {
	pub config: SceneConfig,
	pub particles: Vec<Particle>,
	/// Current profile rotation in degrees. Not wrapped.
	pub rotation: f64,
	/// Rotation the profile is easing toward. Grows by a full turn per click.
	pub target_rotation: f64,
	pub profile_x: f64,
	pub profile_y: f64,
	/// Last known pointer position in canvas coordinates.
	pub pointer: (f64, f64),
	pub width: f64,
	pub height: f64,
	pub frame_count: u64,
	pub move_count: u64,
	rng: SmallRng,
}

impl SceneState {
	pub fn new(config: SceneConfig, width: f64, height: f64) -> Self {
		Self::with_rng(config, width, height, SmallRng::from_entropy())
	}

	/// Builds the scene with a caller-supplied generator, e.g. a seeded one.
	pub fn with_rng(config: SceneConfig, width: f64, height: f64, mut rng: SmallRng) -> Self {
		let particles = (0..config.initial_particles)
			.map(|_| {
				let x = sample(&mut rng, (0.0, width));
				let y = sample(&mut rng, (0.0, height));
				Particle::new(x, y, &mut rng)
			})
			.collect();

		Self {
			profile_x: width / 2.0,
			profile_y: config.profile_offset_y,
			config,
			particles,
			rotation: 0.0,
			target_rotation: 0.0,
			pointer: (0.0, 0.0),
			width,
			height,
			frame_count: 0,
			move_count: 0,
			rng,
		}
	}

	pub fn begin_frame(&mut self) {
		self.frame_count += 1;
	}

	/// Advances every particle one step and drops the dead ones, keeping order.
	pub fn update_particles(&mut self) {
		let (pointer, width, height) = (self.pointer, self.width, self.height);
		for p in &mut self.particles {
			p.update(pointer, width, height);
		}
		self.particles.retain(|p| !p.is_dead());
	}

	pub fn ease_rotation(&mut self) {
		self.rotation = lerp(self.rotation, self.target_rotation, self.config.rotation_ease);
	}

	/// Drops one particle at the pointer on every `ambient_interval`-th frame,
	/// unless the population has reached `ambient_cap`.
	pub fn spawn_ambient(&mut self) {
		let interval = self.config.ambient_interval.max(1);
		if self.frame_count % interval == 0 && self.particles.len() < self.config.ambient_cap {
			let (x, y) = self.pointer;
			let p = Particle::new(x, y, &mut self.rng);
			self.particles.push(p);
		}
	}

	/// One frame without drawing.
	pub fn tick(&mut self) {
		self.begin_frame();
		self.update_particles();
		self.ease_rotation();
		self.spawn_ambient();
	}

	pub fn profile_hovered(&self) -> bool {
		let (dx, dy) = (self.pointer.0 - self.profile_x, self.pointer.1 - self.profile_y);
		(dx * dx + dy * dy).sqrt() < self.config.profile_radius()
	}

	/// Spins the profile and bursts particles from it when the click lands on it.
	/// Returns whether it did.
	pub fn click(&mut self, x: f64, y: f64) -> bool {
		self.pointer = (x, y);
		if !self.profile_hovered() {
			return false;
		}
		self.target_rotation += self.config.rotation_step;
		self.explode(self.profile_x, self.profile_y);
		true
	}

	/// Adds `explosion_count` particles at (x, y) flying outward in random directions.
	pub fn explode(&mut self, x: f64, y: f64) {
		let SceneConfig {
			explosion_count,
			explosion_speed,
			explosion_size,
			..
		} = self.config;
		let rng = &mut self.rng;
		self.particles.extend(
			(0..explosion_count)
				.map(|_| Particle::burst(x, y, explosion_speed, explosion_size, rng)),
		);
		debug!("profile-particles: explosion of {} at ({:.0}, {:.0})", explosion_count, x, y);
	}

	pub fn key_pressed(&mut self, key: SceneKey) {
		match key {
			SceneKey::Space => self.explode(self.profile_x, self.profile_y),
			SceneKey::Reset => {
				self.rotation = 0.0;
				self.target_rotation = 0.0;
				debug!("profile-particles: rotation reset");
			}
			SceneKey::Clear => self.clear(),
			SceneKey::Other => {}
		}
	}

	/// Leaves a sparse trail: one small particle every `move_interval`-th
	/// move, while the population is under `move_cap`.
	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		self.pointer = (x, y);
		self.move_count += 1;
		let interval = self.config.move_interval.max(1);
		if self.move_count % interval == 0 && self.particles.len() < self.config.move_cap {
			let mut p = Particle::new(x, y, &mut self.rng);
			p.size = sample(&mut self.rng, self.config.move_size);
			self.particles.push(p);
		}
	}

	/// Sprays `drag_count` pale, randomly tinted particles around the pointer.
	/// Not capped.
	pub fn pointer_dragged(&mut self, x: f64, y: f64) {
		self.pointer = (x, y);
		let jitter = (-self.config.drag_jitter, self.config.drag_jitter);
		for _ in 0..self.config.drag_count {
			let (jx, jy) = (sample(&mut self.rng, jitter), sample(&mut self.rng, jitter));
			let mut p = Particle::new(x + jx, y + jy, &mut self.rng);
			p.size = sample(&mut self.rng, self.config.drag_size);
			p.color = self.random_tint();
			self.particles.push(p);
		}
	}

	fn random_tint(&mut self) -> Color {
		let range = self.config.drag_color;
		let mut channel = || sample(&mut self.rng, range) as u8;
		Color::rgb(channel(), channel(), channel())
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.profile_x = width / 2.0;
		self.profile_y = self.config.profile_offset_y;
		debug!("profile-particles: resized to {}x{}", width, height);
	}

	pub fn clear(&mut self) {
		debug!("profile-particles: cleared {} particles", self.particles.len());
		self.particles.clear();
	}
}
