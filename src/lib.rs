//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod content;
mod pages;

// Browser-side pieces driven directly by the wasm tests
#[doc(hidden)]
pub use components::network::{AnimationLoop, surface};
#[doc(hidden)]
pub use components::reveal::ViewportWatch;

// Top-Level pages
use crate::components::theme::provide_theme;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the landing page and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	let theme = provide_theme();

	view! {
		<Html attr:lang="es" attr:dir="ltr" attr:data-theme=move || theme.get().as_str() />

		// sets the document title
		<Title text="Lumintel | Hogares Inteligentes" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta
			name="description"
			content="Instalación profesional de seguridad, conectividad y automatización para tu hogar."
		/>

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
