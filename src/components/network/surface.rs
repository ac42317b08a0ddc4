//! Canvas sizing and the host resize hook.

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, ResizeObserver, Window};

/// Failures talking to the host page. None of these are shown to the user; the
/// network panel is decorative and simply stays blank.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
	/// Not running inside a page.
	#[error("no browser window")]
	NoWindow,
	/// `getContext("2d")` returned nothing usable.
	#[error("2d drawing context unavailable")]
	NoContext,
	/// The canvas has left the document, so it has no laid-out size.
	#[error("canvas is not attached to a container")]
	Detached,
	/// A browser API threw.
	#[error("host call failed: {0}")]
	Host(String),
}

impl From<JsValue> for SurfaceError {
	fn from(value: JsValue) -> Self {
		SurfaceError::Host(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

/// Logical (CSS pixel) size of the drawing area and its device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
	/// CSS pixels.
	pub width: f64,
	/// CSS pixels.
	pub height: f64,
	/// Device pixels per CSS pixel, always positive.
	pub pixel_ratio: f64,
}

impl SurfaceSize {
	/// Negative sizes become 0; a ratio that is not a positive number becomes 1.
	pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
		let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
			pixel_ratio
		} else {
			1.0
		};
		Self {
			width: width.max(0.0),
			height: height.max(0.0),
			pixel_ratio,
		}
	}

	/// Backing buffer dimensions in device pixels.
	pub fn backing_size(&self) -> (u32, u32) {
		(
			(self.width * self.pixel_ratio) as u32,
			(self.height * self.pixel_ratio) as u32,
		)
	}
}

/// The page's window.
pub fn window() -> Result<Window, SurfaceError> {
	web_sys::window().ok_or(SurfaceError::NoWindow)
}

/// The canvas' 2d context.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
	canvas
		.get_context("2d")?
		.ok_or(SurfaceError::NoContext)?
		.dyn_into()
		.map_err(|_| SurfaceError::NoContext)
}

/// Measure the canvas as laid out by its container.
pub fn measure(canvas: &HtmlCanvasElement, window: &Window) -> Result<SurfaceSize, SurfaceError> {
	if !canvas.is_connected() {
		return Err(SurfaceError::Detached);
	}
	let rect = canvas.get_bounding_client_rect();
	Ok(SurfaceSize::new(
		rect.width(),
		rect.height(),
		window.device_pixel_ratio(),
	))
}

/// Resize the backing buffer and reset the context transform so drawing stays
/// in logical pixels.
pub fn apply(
	canvas: &HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
	size: SurfaceSize,
) -> Result<(), SurfaceError> {
	let (w, h) = size.backing_size();
	canvas.set_width(w);
	canvas.set_height(h);
	ctx.set_transform(size.pixel_ratio, 0.0, 0.0, size.pixel_ratio, 0.0, 0.0)?;
	Ok(())
}

/// Resize notifications for a canvas: the window `resize` event (also fired on
/// zoom, which changes the pixel ratio) plus a `ResizeObserver` on the canvas
/// for layout-only changes. Both stay registered until [`detach`](Self::detach).
pub struct ResizeListener {
	window: Window,
	observer: ResizeObserver,
	callback: Closure<dyn FnMut()>,
}

impl ResizeListener {
	/// Call `on_resize` whenever the window or `target`'s box changes size.
	pub fn attach(
		window: &Window,
		target: &Element,
		on_resize: impl FnMut() + 'static,
	) -> Result<Self, SurfaceError> {
		let callback = Closure::<dyn FnMut()>::new(on_resize);
		let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())?;
		window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())?;
		observer.observe(target);
		Ok(Self {
			window: window.clone(),
			observer,
			callback,
		})
	}

	/// Unregister both sources and drop the callback.
	pub fn detach(self) {
		self.observer.disconnect();
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
	}
}
