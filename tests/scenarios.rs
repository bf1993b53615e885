//! End-to-end interaction scenarios driven through the public scene API.

use profile_particles::components::particle_scene::render::{Painter, render_frame};
use profile_particles::components::particle_scene::theme::{Color, RingStyle, Theme};
use profile_particles::components::particle_scene::{CursorStyle, SceneConfig, SceneKey, SceneState};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Counts filled circles, ignoring everything else.
#[derive(Default)]
struct CountingPainter {
	fills: usize,
	cursor: CursorStyle,
}

impl Painter for CountingPainter {
	fn vertical_gradient(&mut self, _: f64, _: f64, _: Color, _: Color) {
		self.fills = 0;
	}
	fn fill_circle(&mut self, _: f64, _: f64, _: f64, _: Color) {
		self.fills += 1;
	}
	fn stroke_circle(&mut self, _: f64, _: f64, _: f64, _: RingStyle) {}
	fn glyph(&mut self, _: &str, _: f64, _: f64, _: f64, _: Color) {}
	fn push_transform(&mut self, _: f64, _: f64, _: f64) {}
	fn pop_transform(&mut self) {}
	fn set_cursor(&mut self, cursor: CursorStyle) {
		self.cursor = cursor;
	}
}

fn scene(seed: u64) -> SceneState {
	SceneState::with_rng(SceneConfig::default(), 1024.0, 768.0, SmallRng::seed_from_u64(seed))
}

#[test]
fn click_spin_then_reset() {
	let mut s = scene(1);
	let theme = Theme::default();
	let mut painter = CountingPainter::default();

	assert!(s.click(512.0, 150.0));
	for _ in 0..10 {
		render_frame(&mut s, &mut painter, &theme);
	}
	assert!(s.rotation > 200.0 && s.rotation < 360.0);
	assert_eq!(s.target_rotation, 360.0);
	assert_eq!(painter.cursor, CursorStyle::Pointer);

	s.key_pressed(SceneKey::from_key("R"));
	assert_eq!(s.rotation, 0.0);
	assert_eq!(s.target_rotation, 0.0);
}

#[test]
fn rotation_accumulates_across_clicks() {
	let mut s = scene(2);
	for _ in 0..3 {
		s.click(512.0, 150.0);
	}
	assert_eq!(s.target_rotation, 1080.0);
	for _ in 0..400 {
		s.tick();
	}
	assert!((s.rotation - 1080.0).abs() < 1e-6);
}

#[test]
fn clear_then_ambient_refill_stays_capped() {
	let mut s = scene(3);
	let theme = Theme::default();
	let mut painter = CountingPainter::default();

	s.key_pressed(SceneKey::from_key("c"));
	assert!(s.particles.is_empty());

	// Pointer parked off-canvas and far from everything.
	s.pointer_moved(-5_000.0, -5_000.0);
	for _ in 0..1_000 {
		render_frame(&mut s, &mut painter, &theme);
		assert!(s.particles.len() <= 100);
	}
	// One spawn per three frames, each living 128 frames.
	assert!(s.particles.len() >= 40);
	assert_eq!(painter.cursor, CursorStyle::Default);
}

#[test]
fn drag_can_exceed_other_caps() {
	let mut s = scene(4);
	for i in 0..60 {
		s.pointer_dragged(300.0 + i as f64, 300.0);
	}
	assert_eq!(s.particles.len(), 50 + 180);

	let before = s.particles.len();
	for _ in 0..20 {
		s.pointer_moved(10.0, 10.0);
	}
	assert_eq!(s.particles.len(), before);
}

#[test]
fn resize_then_click_uses_new_center() {
	let mut s = scene(5);
	s.resize(400.0, 900.0);
	assert_eq!((s.profile_x, s.profile_y), (200.0, 150.0));
	assert!(!s.click(512.0, 150.0));
	assert!(s.click(200.0, 150.0));
	assert!(s.particles.iter().rev().take(20).all(|p| (p.x, p.y) == (200.0, 150.0)));
}

#[test]
fn space_burst_is_drawn_next_frame() {
	let mut s = scene(6);
	let theme = Theme::default();
	let mut painter = CountingPainter::default();
	s.pointer_moved(-5_000.0, -5_000.0);

	s.key_pressed(SceneKey::from_key(" "));
	assert_eq!(s.particles.len(), 70);

	render_frame(&mut s, &mut painter, &theme);
	// 70 particles plus the profile disc.
	assert_eq!(painter.fills, 71);
}
