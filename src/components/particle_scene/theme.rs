//! Visual theming for the particle scene.
//!
//! Colors and stroke styles for the background, the profile marker and its rings.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const WHITE: Color = Color::rgb(255, 255, 255);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// An outline circle style.
#[derive(Clone, Copy, Debug)]
pub struct RingStyle {
	pub color: Color,
	pub width: f64,
}

/// Background gradient, top to bottom.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	pub top: Color,
	pub bottom: Color,
}

/// Profile marker style.
#[derive(Clone, Debug)]
pub struct ProfileStyle {
	/// Disc fill behind the glyph
	pub fill: Color,
	pub outline: RingStyle,
	/// Concentric rings drawn outside the disc
	pub glow: RingStyle,
	/// Number of glow rings
	pub glow_rings: usize,
	/// Diameter added per glow ring
	pub glow_step: f64,
	/// Extra ring drawn while the pointer hovers the marker
	pub hover: RingStyle,
	pub glyph: &'static str,
	pub glyph_size: f64,
	pub glyph_color: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub background: BackgroundStyle,
	pub profile: ProfileStyle,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: BackgroundStyle {
				top: Color::rgb(102, 126, 234),
				bottom: Color::rgb(118, 75, 162),
			},
			profile: ProfileStyle {
				fill: Color::rgb(118, 75, 162),
				outline: RingStyle {
					color: Color::WHITE,
					width: 5.0,
				},
				glow: RingStyle {
					color: Color::rgba(255, 255, 255, 30.0 / 255.0),
					width: 2.0,
				},
				glow_rings: 5,
				glow_step: 10.0,
				hover: RingStyle {
					color: Color::rgba(255, 255, 255, 100.0 / 255.0),
					width: 3.0,
				},
				glyph: "👤",
				glyph_size: 100.0,
				glyph_color: Color::WHITE,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_uses_hex_when_opaque() {
		assert_eq!(Color::rgb(118, 75, 162).to_css(), "#764ba2");
		assert_eq!(
			Color::WHITE.with_alpha(0.5).to_css(),
			"rgba(255, 255, 255, 0.5)"
		);
	}
}
