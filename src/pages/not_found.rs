use leptos::prelude::*;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"Página no encontrada"</h1>
			<a href="/" class="btn btn--primary">"Volver al inicio"</a>
		</div>
	}
}
