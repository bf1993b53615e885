//! profile-particles: Animated profile backdrop for a personal page.
//!
//! This crate provides a WASM-based canvas component that renders a gradient
//! background, a spinning profile marker and particles that react to the
//! pointer and keyboard.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Enables the browser entropy source for `rand` on wasm32.
use getrandom as _;

pub mod components;

pub use components::particle_scene::{
	Particle, ParticleSceneCanvas, SceneConfig, SceneKey, SceneState,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("profile-particles: logging initialized");
}

/// Load scene overrides from a script element with id="scene-config".
/// Expected format: a JSON object with any subset of [`SceneConfig`] fields.
fn load_scene_config() -> Option<SceneConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("scene-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match parse_scene_config(&json_text) {
		Ok(config) => {
			info!("profile-particles: loaded scene config");
			Some(config)
		}
		Err(e) => {
			warn!("profile-particles: failed to parse scene config: {}", e);
			None
		}
	}
}

fn parse_scene_config(json_text: &str) -> serde_json::Result<SceneConfig> {
	serde_json::from_str(json_text)
}

/// Main application component.
/// Loads the scene config from the DOM and renders the particle backdrop.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_scene_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Profile" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div id="canvas-container" class="fullscreen-scene">
			<ParticleSceneCanvas config=config />
		</div>
	}
}
