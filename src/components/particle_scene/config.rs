//! Tunable spawn and animation parameters for the particle scene.
//!
//! Every field has a default, so a page can override any subset of them with
//! a partial JSON object:
//!
//! ```json
//! { "ambient_cap": 60, "explosion_count": 40, "drag_color": [120, 255] }
//! ```
//!
//! Ranges are half-open `[min, max)` pairs. A range with `max <= min` always
//! yields `min`.

use rand::Rng;
use serde::Deserialize;

/// A half-open `[min, max)` sampling range.
pub type Range = (f64, f64);

/// Samples uniformly from `range`, collapsing empty ranges to their lower bound.
pub(crate) fn sample<R: Rng>(rng: &mut R, (min, max): Range) -> f64 {
	if max > min {
		rng.gen_range(min..max)
	} else {
		min
	}
}

/// Scene configuration: population caps, spawn throttles and randomization ranges.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
	/// Particles scattered across the canvas at startup.
	pub initial_particles: usize,
	/// Profile marker diameter. The hover and click radius is half of this.
	pub profile_size: f64,
	/// Fixed vertical position of the profile marker center.
	pub profile_offset_y: f64,
	/// Degrees added to the rotation target per click on the profile.
	pub rotation_step: f64,
	/// Fraction of the remaining rotation covered each frame.
	pub rotation_ease: f64,

	/// Spawn one ambient particle every this many frames.
	pub ambient_interval: u64,
	/// Ambient spawning pauses while the population is at or above this.
	pub ambient_cap: usize,

	/// Spawn one trail particle every this many pointer-move events.
	pub move_interval: u64,
	/// Trail spawning pauses while the population is at or above this.
	pub move_cap: usize,
	pub move_size: Range,

	/// Particles spawned per drag event. Drag spawning is never capped.
	pub drag_count: usize,
	/// Maximum positional offset from the pointer on each axis.
	pub drag_jitter: f64,
	pub drag_size: Range,
	/// Per-channel RGB range for drag particles.
	pub drag_color: Range,

	/// Particles per explosion burst.
	pub explosion_count: usize,
	pub explosion_speed: Range,
	pub explosion_size: Range,
}

impl Default for SceneConfig {
	fn default() -> Self {
		Self {
			initial_particles: 50,
			profile_size: 200.0,
			profile_offset_y: 150.0,
			rotation_step: 360.0,
			rotation_ease: 0.1,

			ambient_interval: 3,
			ambient_cap: 100,

			move_interval: 5,
			move_cap: 150,
			move_size: (2.0, 5.0),

			drag_count: 3,
			drag_jitter: 10.0,
			drag_size: (4.0, 8.0),
			drag_color: (200.0, 255.0),

			explosion_count: 20,
			explosion_speed: (2.0, 5.0),
			explosion_size: (5.0, 12.0),
		}
	}
}

impl SceneConfig {
	/// Radius around the profile center that counts as hovering or clicking it.
	pub fn profile_radius(&self) -> f64 {
		self.profile_size / 2.0
	}
}
