//! Frame rendering for the particle scene.
//!
//! Drawing goes through the [`Painter`] trait so the frame sequence can run
//! against something other than a browser canvas. Each frame is, in order:
//! 1. Background gradient
//! 2. Particle update, cull and draw
//! 3. Rotation easing, then the profile marker with its glow and hover ring
//! 4. Ambient spawn (drawn from the next frame on)

use std::f64::consts::PI;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::state::SceneState;
use super::theme::{Color, RingStyle, Theme};
use super::types::CursorStyle;

/// Drawing primitives needed by the scene. Sizes are diameters.
pub trait Painter {
	/// Fills the whole `width` x `height` area with a top-to-bottom gradient.
	fn vertical_gradient(&mut self, width: f64, height: f64, top: Color, bottom: Color);
	fn fill_circle(&mut self, x: f64, y: f64, diameter: f64, color: Color);
	fn stroke_circle(&mut self, x: f64, y: f64, diameter: f64, ring: RingStyle);
	/// Draws `text` centered on (x, y).
	fn glyph(&mut self, text: &str, x: f64, y: f64, size: f64, color: Color);
	/// Moves the origin to (x, y) and rotates by `degrees` until the matching
	/// [`Painter::pop_transform`].
	fn push_transform(&mut self, x: f64, y: f64, degrees: f64);
	fn pop_transform(&mut self);
	fn set_cursor(&mut self, cursor: CursorStyle);
}

/// Advances the scene by one frame and draws it.
pub fn render_frame<P: Painter>(scene: &mut SceneState, painter: &mut P, theme: &Theme) {
	scene.begin_frame();

	painter.vertical_gradient(
		scene.width,
		scene.height,
		theme.background.top,
		theme.background.bottom,
	);

	scene.update_particles();
	draw_particles(scene, painter);

	scene.ease_rotation();
	draw_profile(scene, painter, theme);

	scene.spawn_ambient();
}

fn draw_particles<P: Painter>(scene: &SceneState, painter: &mut P) {
	for p in &scene.particles {
		let alpha = p.alpha();
		if alpha <= 0.0 {
			continue;
		}
		painter.fill_circle(p.x, p.y, p.size, p.color.with_alpha(alpha));
	}
}

fn draw_profile<P: Painter>(scene: &SceneState, painter: &mut P, theme: &Theme) {
	let style = &theme.profile;
	let size = scene.config.profile_size;

	painter.push_transform(scene.profile_x, scene.profile_y, scene.rotation);

	for i in (1..=style.glow_rings).rev() {
		painter.stroke_circle(0.0, 0.0, size + i as f64 * style.glow_step, style.glow);
	}

	painter.fill_circle(0.0, 0.0, size, style.fill);
	painter.stroke_circle(0.0, 0.0, size, style.outline);
	painter.glyph(style.glyph, 0.0, 0.0, style.glyph_size, style.glyph_color);

	if scene.profile_hovered() {
		painter.set_cursor(CursorStyle::Pointer);
		painter.stroke_circle(0.0, 0.0, size + style.glow_step, style.hover);
	} else {
		painter.set_cursor(CursorStyle::Default);
	}

	painter.pop_transform();
}

/// [`Painter`] backed by a 2D canvas context.
pub struct CanvasPainter {
	ctx: CanvasRenderingContext2d,
	canvas: HtmlCanvasElement,
	cursor: Option<CursorStyle>,
}

impl CanvasPainter {
	pub fn new(ctx: CanvasRenderingContext2d, canvas: HtmlCanvasElement) -> Self {
		Self {
			ctx,
			canvas,
			cursor: None,
		}
	}
}

impl Painter for CanvasPainter {
	fn vertical_gradient(&mut self, width: f64, height: f64, top: Color, bottom: Color) {
		let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, height);
		let _ = gradient.add_color_stop(0.0, &top.to_css());
		let _ = gradient.add_color_stop(1.0, &bottom.to_css());

		#[allow(deprecated)]
		self.ctx.set_fill_style(&gradient);
		self.ctx.fill_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, diameter: f64, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, diameter / 2.0, 0.0, PI * 2.0);
		self.ctx.fill();
	}

	fn stroke_circle(&mut self, x: f64, y: f64, diameter: f64, ring: RingStyle) {
		self.ctx.set_stroke_style_str(&ring.color.to_css());
		self.ctx.set_line_width(ring.width);
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, diameter / 2.0, 0.0, PI * 2.0);
		self.ctx.stroke();
	}

	fn glyph(&mut self, text: &str, x: f64, y: f64, size: f64, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.set_font(&format!("{}px sans-serif", size));
		self.ctx.set_text_align("center");
		self.ctx.set_text_baseline("middle");
		let _ = self.ctx.fill_text(text, x, y);
	}

	fn push_transform(&mut self, x: f64, y: f64, degrees: f64) {
		self.ctx.save();
		let _ = self.ctx.translate(x, y);
		let _ = self.ctx.rotate(degrees.to_radians());
	}

	fn pop_transform(&mut self) {
		self.ctx.restore();
	}

	fn set_cursor(&mut self, cursor: CursorStyle) {
		if self.cursor == Some(cursor) {
			return;
		}
		if self
			.canvas
			.style()
			.set_property("cursor", cursor.as_css())
			.is_ok()
		{
			self.cursor = Some(cursor);
		}
	}
}
