use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{SERVICES, SERVICES_SECTION, Service};

const CARD_STAGGER_MS: u32 = 100;

fn service_card(index: usize, service: &'static Service) -> impl IntoView {
	let delay_ms = index as u32 * CARD_STAGGER_MS;
	view! {
		<Reveal delay_ms=delay_ms>
			<article class="card service-card">
				<div class="service-card__icon">{service.icon}</div>
				<h3>{service.title}</h3>
				<p>{service.description}</p>
				<ul class="bullets">
					{service.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
				</ul>
			</article>
		</Reveal>
	}
}

#[component]
pub fn ServicesGrid() -> impl IntoView {
	view! {
		<section id=SERVICES_SECTION class="section">
			<div class="container">
				<Reveal>
					<header class="section-header">
						<h2>"Soluciones Integrales"</h2>
						<p>
							"Tecnología de vanguardia para transformar tu hogar en un espacio inteligente, seguro y eficiente"
						</p>
					</header>
				</Reveal>
				<div class="services-grid">
					{SERVICES.iter().enumerate().map(|(i, s)| service_card(i, s)).collect_view()}
				</div>
			</div>
		</section>
	}
}
