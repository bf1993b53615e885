//! Leptos component wrapping the particle scene canvas.
//!
//! The component creates a full-viewport canvas, forwards mouse, keyboard and
//! resize events to the [`SceneState`], and runs the frame loop via
//! `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

use super::config::SceneConfig;
use super::render::{self, CanvasPainter};
use super::state::SceneState;
use super::theme::Theme;
use super::types::SceneKey;

/// Scene state plus everything needed to draw it.
struct SceneContext {
	scene: SceneState,
	painter: CanvasPainter,
	theme: Theme,
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let w = window.inner_width().ok()?.as_f64()?;
	let h = window.inner_height().ok()?.as_f64()?;
	Some((w, h))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Pointer position relative to the canvas.
fn canvas_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Renders the particle scene on a canvas that tracks the viewport size.
#[component]
pub fn ParticleSceneCanvas(#[prop(optional)] config: SceneConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<SceneContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let key_cb: Rc<RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>> =
		Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init, key_cb_init) = (
		context.clone(),
		animate.clone(),
		resize_cb.clone(),
		key_cb.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("profile-particles: no window, scene not started");
			return;
		};
		let Some((w, h)) = viewport_size(&window) else {
			warn!("profile-particles: viewport size unavailable, scene not started");
			return;
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = context_2d(&canvas) else {
			warn!("profile-particles: 2d canvas context unavailable");
			return;
		};

		*context_init.borrow_mut() = Some(SceneContext {
			scene: SceneState::new(config.clone(), w, h),
			painter: CanvasPainter::new(ctx, canvas.clone()),
			theme: Theme::default(),
		});
		info!("profile-particles: scene started at {}x{}", w, h);

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
				return;
			};
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.scene.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let context_key = context_init.clone();
		*key_cb_init.borrow_mut() = Some(Closure::new(move |ev: KeyboardEvent| {
			if let Some(ref mut c) = *context_key.borrow_mut() {
				c.scene.key_pressed(SceneKey::from_key(&ev.key()));
			}
		}));
		if let Some(ref cb) = *key_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				render::render_frame(&mut c.scene, &mut c.painter, &c.theme);
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = canvas_point(&canvas, &ev);

		if let Some(ref mut c) = *context_md.borrow_mut() {
			if c.scene.click(x, y) {
				info!("profile-particles: profile clicked");
			}
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = canvas_point(&canvas, &ev);

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			// Primary button held: drag
			if ev.buttons() & 1 != 0 {
				c.scene.pointer_dragged(x, y);
			} else {
				c.scene.pointer_moved(x, y);
			}
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-scene-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			style="display: block;"
		/>
	}
}
