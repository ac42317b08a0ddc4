use leptos::ev;
use leptos::prelude::*;

use super::scroll::scroll_to_section;
use super::theme::{Theme, use_theme};
use crate::content::{BRAND, CONTACT_SECTION, SECTIONS};

/// Scroll offset past which the bar gets its solid background.
const SCROLLED_AFTER: f64 = 20.0;

#[component]
pub fn Navbar() -> impl IntoView {
	let theme = use_theme();
	let scrolled = RwSignal::new(false);
	let menu_open = RwSignal::new(false);

	let on_scroll = window_event_listener(ev::scroll, move |_| {
		let y = web_sys::window()
			.and_then(|w| w.scroll_y().ok())
			.unwrap_or(0.0);
		scrolled.set(y > SCROLLED_AFTER);
	});
	on_cleanup(move || on_scroll.remove());

	let go_to = move |id: &'static str| {
		scroll_to_section(id);
		menu_open.set(false);
	};

	view! {
		<nav class=move || { if scrolled.get() { "navbar navbar--scrolled" } else { "navbar" } }>
			<div class="container navbar__inner">
				<div class="brand">
					<div class="brand__mark">"L"</div>
					<span class="brand__name">{BRAND}</span>
				</div>

				<div class="navbar__links">
					{SECTIONS
						.iter()
						.map(move |&id| view! {
							<button class="nav-link" on:click=move |_| go_to(id)>{id}</button>
						})
						.collect_view()}
				</div>

				<div class="navbar__actions">
					<button
						class="icon-button"
						aria-label="Toggle theme"
						on:click=move |_| theme.toggle()
					>
						{move || if theme.get() == Theme::Dark { "☀" } else { "☾" }}
					</button>
					<button class="btn btn--primary navbar__cta" on:click=move |_| go_to(CONTACT_SECTION)>
						"Cotizar"
					</button>
					<button
						class="icon-button navbar__menu-toggle"
						aria-label="Toggle menu"
						on:click=move |_| menu_open.update(|open| *open = !*open)
					>
						{move || if menu_open.get() { "✕" } else { "☰" }}
					</button>
				</div>
			</div>

			<Show when=move || menu_open.get()>
				<div class="container navbar__mobile">
					{SECTIONS
						.iter()
						.map(move |&id| view! {
							<button class="nav-link nav-link--block" on:click=move |_| go_to(id)>{id}</button>
						})
						.collect_view()}
					<button class="btn btn--primary btn--block" on:click=move |_| go_to(CONTACT_SECTION)>
						"Cotizar"
					</button>
				</div>
			</Show>
		</nav>
	}
}
