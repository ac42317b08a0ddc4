use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use super::surface::{SurfaceError, window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Repeating `requestAnimationFrame` work with a single cancellation point.
pub struct AnimationLoop {
	callback: FrameCallback,
	pending: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
	/// Schedule `work` before every repaint for as long as it returns `true`.
	pub fn start(mut work: impl FnMut() -> bool + 'static) -> Result<Self, SurfaceError> {
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let pending = Rc::new(Cell::new(None));
		let (callback_inner, pending_inner) = (callback.clone(), pending.clone());

		*callback.borrow_mut() = Some(Closure::new(move || {
			pending_inner.set(None);
			if !work() {
				return;
			}
			if let Some(ref cb) = *callback_inner.borrow() {
				match request_frame(cb) {
					Ok(id) => pending_inner.set(Some(id)),
					Err(err) => log::warn!("network animation stopped: {err}"),
				}
			}
		}));

		if let Some(ref cb) = *callback.borrow() {
			pending.set(Some(request_frame(cb)?));
		}
		Ok(Self { callback, pending })
	}

	/// Cancel the pending frame and drop the callback. Nothing runs afterwards.
	pub fn cancel(self) {
		if let Some(id) = self.pending.take() {
			if let Ok(win) = window() {
				let _ = win.cancel_animation_frame(id);
			}
		}
		// breaks the callback's reference to itself
		self.callback.borrow_mut().take();
	}
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Result<i32, SurfaceError> {
	Ok(window()?.request_animation_frame(cb.as_ref().unchecked_ref())?)
}
