//! Fade-in of page blocks as they scroll into view.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::network::surface::SurfaceError;

/// Share of the element that must be on screen before it counts as seen.
const VISIBLE_THRESHOLD: f64 = 0.1;

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Calls back once, the first time an element enters the viewport.
pub struct ViewportWatch {
	observer: IntersectionObserver,
	_callback: EntriesCallback,
}

impl ViewportWatch {
	/// Watch `target`. `on_visible` runs at most once, after which the observer
	/// disconnects itself.
	pub fn observe(target: &Element, on_visible: impl FnOnce() + 'static) -> Result<Self, SurfaceError> {
		let mut on_visible = Some(on_visible);
		let callback: EntriesCallback = Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
			let seen = entries
				.iter()
				.filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
				.any(|e| e.is_intersecting());
			if !seen {
				return;
			}
			observer.disconnect();
			if let Some(f) = on_visible.take() {
				f();
			}
		});

		let init = IntersectionObserverInit::new();
		init.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));
		let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
		observer.observe(target);
		Ok(Self {
			observer,
			_callback: callback,
		})
	}

	/// Stop watching. Safe after the watch already fired.
	pub fn disconnect(self) {
		self.observer.disconnect();
	}
}

fn reveal_class(extra: &str, visible: bool) -> String {
	let mut class = String::from("reveal");
	if visible {
		class.push_str(" reveal--visible");
	}
	if !extra.is_empty() {
		class.push(' ');
		class.push_str(extra);
	}
	class
}

/// Wraps `children` in a block that fades and slides up the first time it is
/// scrolled into view. Without `IntersectionObserver` the block is shown as is.
#[component]
pub fn Reveal(
	#[prop(optional, into)] class: String,
	/// Extra transition delay, used to stagger cards in a grid.
	#[prop(optional)]
	delay_ms: u32,
	children: Children,
) -> impl IntoView {
	let node_ref = NodeRef::<leptos::html::Div>::new();
	let visible = RwSignal::new(false);
	let watch: Rc<RefCell<Option<ViewportWatch>>> = Rc::new(RefCell::new(None));
	let watch_init = watch.clone();

	Effect::new(move |_| {
		let Some(el) = node_ref.get() else {
			return;
		};
		if visible.get_untracked() || watch_init.borrow().is_some() {
			return;
		}
		let el: Element = el.into();
		match ViewportWatch::observe(&el, move || visible.set(true)) {
			Ok(w) => *watch_init.borrow_mut() = Some(w),
			Err(err) => {
				log::debug!("showing block without scroll reveal: {err}");
				visible.set(true);
			}
		}
	});

	let teardown = SendWrapper::new(watch);
	on_cleanup(move || {
		if let Some(w) = teardown.take().borrow_mut().take() {
			w.disconnect();
		}
	});

	view! {
		<div
			node_ref=node_ref
			class=move || reveal_class(&class, visible.get())
			style=format!("transition-delay: {delay_ms}ms")
		>
			{children()}
		</div>
	}
}
