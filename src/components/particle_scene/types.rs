//! Input and output vocabulary shared by the scene and its canvas host.

/// Keys the scene reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneKey {
	/// Burst of particles from the profile marker.
	Space,
	/// Snap the profile rotation back to zero.
	Reset,
	/// Remove every particle.
	Clear,
	Other,
}

impl SceneKey {
	/// Maps a DOM `KeyboardEvent.key` value.
	pub fn from_key(key: &str) -> Self {
		match key {
			" " | "Spacebar" => SceneKey::Space,
			"r" | "R" => SceneKey::Reset,
			"c" | "C" => SceneKey::Clear,
			_ => SceneKey::Other,
		}
	}
}

/// Mouse cursor shown over the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorStyle {
	#[default]
	Default,
	Pointer,
}

impl CursorStyle {
	pub fn as_css(self) -> &'static str {
		match self {
			CursorStyle::Default => "default",
			CursorStyle::Pointer => "pointer",
		}
	}
}
