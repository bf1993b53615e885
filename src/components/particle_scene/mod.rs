//! Interactive particle scene behind a rotating profile marker.
//!
//! Renders on an HTML canvas:
//! - A vertical gradient background
//! - Fading particles that drift upward and are pushed away by the pointer
//! - A profile marker that spins a full turn when clicked
//!
//! Particles come from a steady trickle at the pointer, a sparse trail while
//! moving, a tinted spray while dragging, and bursts from the marker on click
//! or Space. `R` resets the rotation and `C` clears every particle.
//!
//! # Example
//!
//! ```ignore
//! use profile_particles::{ParticleSceneCanvas, SceneConfig};
//!
//! let config = SceneConfig { explosion_count: 40, ..SceneConfig::default() };
//!
//! view! { <ParticleSceneCanvas config=config /> }
//! ```

mod component;
pub mod config;
pub mod particles;
pub mod render;
pub mod state;
pub mod theme;
mod types;

pub use component::ParticleSceneCanvas;
pub use config::SceneConfig;
pub use particles::Particle;
pub use render::{Painter, render_frame};
pub use state::SceneState;
pub use theme::Theme;
pub use types::{CursorStyle, SceneKey};
