use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::animation::AnimationLoop;
use super::render;
use super::state::NetworkState;
use super::surface::{self, ResizeListener, SurfaceError};
use super::types::NetworkParams;

/// Everything that must be released together when the canvas goes away.
struct Running {
	state: Rc<RefCell<NetworkState>>,
	animation: AnimationLoop,
	resize: ResizeListener,
}

impl Running {
	fn stop(self) {
		self.state.borrow_mut().stop();
		self.animation.cancel();
		self.resize.detach();
		log::debug!("network animation stopped");
	}
}

fn start(
	canvas: HtmlCanvasElement,
	params: NetworkParams,
	seed: u64,
) -> Result<Running, SurfaceError> {
	let window = surface::window()?;
	let ctx: CanvasRenderingContext2d = surface::context_2d(&canvas)?;

	let initial = surface::measure(&canvas, &window)?;
	surface::apply(&canvas, &ctx, initial)?;
	let size = Rc::new(Cell::new(initial));

	let state = Rc::new(RefCell::new(NetworkState::new(
		params,
		initial.width,
		initial.height,
		seed,
	)));

	let (size_resize, canvas_resize, ctx_resize, window_resize) =
		(size.clone(), canvas.clone(), ctx.clone(), window.clone());
	let resize = ResizeListener::attach(&window, &canvas, move || {
		// a failed measurement skips this event, the next one is applied normally
		let measured = surface::measure(&canvas_resize, &window_resize)
			.and_then(|s| surface::apply(&canvas_resize, &ctx_resize, s).map(|_| s));
		match measured {
			Ok(s) => {
				log::debug!("network surface resized to {}x{} @{}", s.width, s.height, s.pixel_ratio);
				size_resize.set(s);
			}
			Err(err) => log::debug!("skipping resize: {err}"),
		}
	})?;

	let state_anim = state.clone();
	let animation = match AnimationLoop::start(move || {
		render::frame(&mut state_anim.borrow_mut(), size.get(), &ctx)
	}) {
		Ok(animation) => animation,
		Err(err) => {
			resize.detach();
			return Err(err);
		}
	};

	log::debug!(
		"network animation started: {} nodes on {}x{}",
		state.borrow().nodes.len(),
		initial.width,
		initial.height
	);
	Ok(Running {
		state,
		animation,
		resize,
	})
}

fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Animated mesh of drifting nodes linked to their close neighbours.
///
/// Fills its positioned parent. Renders nothing if the canvas cannot be drawn on.
#[component]
pub fn NetworkCanvas(
	#[prop(optional)] params: Option<NetworkParams>,
	#[prop(optional)] seed: Option<u64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let running: Rc<RefCell<Option<Running>>> = Rc::new(RefCell::new(None));
	let running_init = running.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if running_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let params = params.clone().unwrap_or_default();
		match start(canvas, params, seed.unwrap_or_else(random_seed)) {
			Ok(r) => *running_init.borrow_mut() = Some(r),
			Err(err) => log::warn!("network animation disabled: {err}"),
		}
	});

	let teardown = SendWrapper::new(running);
	on_cleanup(move || {
		let running = teardown.take().borrow_mut().take();
		if let Some(r) = running {
			r.stop();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="network-canvas"
			style="position: absolute; inset: 0; width: 100%; height: 100%;"
		/>
	}
}
