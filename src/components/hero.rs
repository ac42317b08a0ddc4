use leptos::prelude::*;

use super::network::NetworkPanel;
use super::scroll::scroll_to_section;
use crate::content::{CONTACT_SECTION, HERO_STATS, SERVICES_SECTION};

#[component]
pub fn HeroSection() -> impl IntoView {
	view! {
		<section class="hero">
			<div class="hero__glow"></div>
			<div class="container hero__grid">
				<div class="hero__copy">
					<span class="badge">"Instalación Profesional"</span>
					<h1>
						"Tu Hogar."
						<br />
						<span class="gradient-text">"Conectado de Verdad."</span>
					</h1>
					<p class="lead">
						"Transformamos tu casa en un hogar inteligente con tecnología de vanguardia. "
						"Seguridad, eficiencia y control total desde tu smartphone."
					</p>

					<div class="hero__actions">
						<button class="btn btn--primary" on:click=move |_| scroll_to_section(CONTACT_SECTION)>
							"Cotizar Ahora →"
						</button>
						<button class="btn btn--outline" on:click=move |_| scroll_to_section(SERVICES_SECTION)>
							"Ver Servicios"
						</button>
					</div>

					<div class="hero__stats">
						{HERO_STATS
							.iter()
							.map(|(value, label)| view! {
								<div class="stat">
									<div class="stat__value">{*value}</div>
									<div class="stat__label">{*label}</div>
								</div>
							})
							.collect_view()}
					</div>
				</div>

				<div class="hero__visual">
					<NetworkPanel />
				</div>
			</div>
			<div class="scroll-hint">
				<div class="scroll-hint__dot"></div>
			</div>
		</section>
	}
}
