use leptos::prelude::*;

use super::reveal::Reveal;
use super::scroll::scroll_to_section;
use crate::content::{CONTACT_SECTION, PLANS, Plan};

const CARD_STAGGER_MS: u32 = 100;

fn plan_card(index: usize, plan: &'static Plan) -> impl IntoView {
	let delay_ms = index as u32 * CARD_STAGGER_MS;
	let (card_class, button_class) = if plan.popular {
		("card plan-card plan-card--popular", "btn btn--primary btn--block")
	} else {
		("card plan-card", "btn btn--block")
	};

	view! {
		<Reveal delay_ms=delay_ms>
			<article class=card_class>
				{plan.popular.then(|| view! { <div class="plan-card__badge">"★ Más Vendido"</div> })}
				<h3>{plan.name}</h3>
				<p class="plan-card__description">{plan.description}</p>
				<div class="plan-card__price">
					<span class="amount">{format!("${}", plan.price)}</span>
					<span class="currency">"CLP"</span>
				</div>
				<button
					class=button_class
					on:click=move |_| scroll_to_section(CONTACT_SECTION)
				>
					"Cotizar Plan"
				</button>
				<ul class="checks">
					{plan.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
				</ul>
			</article>
		</Reveal>
	}
}

#[component]
pub fn PricingTable() -> impl IntoView {
	view! {
		<section id="precios" class="section section--alt">
			<div class="container">
				<Reveal>
					<header class="section-header">
						<h2>"Planes a tu Medida"</h2>
						<p>"Elige el plan perfecto para tu hogar. Todos incluyen instalación profesional y garantía"</p>
					</header>
				</Reveal>
				<div class="plans-grid">
					{PLANS.iter().enumerate().map(|(i, p)| plan_card(i, p)).collect_view()}
				</div>
				<Reveal>
					<p class="section-footnote">
						"¿Necesitas un plan personalizado? Contáctanos para una cotización a medida"
					</p>
				</Reveal>
			</div>
		</section>
	}
}
