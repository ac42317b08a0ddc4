use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::validation::{Field, QuoteRequest};
use crate::components::reveal::Reveal;
use crate::content::{EMAIL, OFFICE, PHONE, PROPERTY_TYPES, SERVICES, WHY_US};

const SUCCESS_VISIBLE: Duration = Duration::from_secs(5);

/// Error line under a field, shown once the field has been edited.
fn field_error(
	form: RwSignal<QuoteRequest>,
	dirty: RwSignal<Vec<Field>>,
	field: Field,
) -> impl IntoView {
	move || {
		if !dirty.with(|d| d.contains(&field)) {
			return None;
		}
		form.with(|f| f.check(field).err())
			.map(|err| view! { <p class="field-error">{err.to_string()}</p> })
	}
}

/// Quote request section: contact details and the validated form.
#[component]
pub fn ContactForm() -> impl IntoView {
	let form = RwSignal::new(QuoteRequest::default());
	let dirty = RwSignal::new(Vec::<Field>::new());
	let submitted = RwSignal::new(false);
	let is_valid = Memo::new(move |_| form.with(QuoteRequest::is_valid));

	let edit = move |field: Field, value: String| {
		form.update(|f| f.set(field, value));
		dirty.update(|d| {
			if !d.contains(&field) {
				d.push(field);
			}
		});
	};

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		if !is_valid.get_untracked() {
			dirty.set(Field::ALL.to_vec());
			return;
		}
		let request = form.get_untracked();
		log::info!("quote request: {request:?}");
		form.set(QuoteRequest::default());
		dirty.set(Vec::new());
		submitted.set(true);
		set_timeout(move || submitted.set(false), SUCCESS_VISIBLE);
	};

	view! {
		<section id="contacto" class="section section--contact">
			<div class="container">
				<Reveal>
					<header class="section-header">
						<h2>"Solicita tu Cotización"</h2>
						<p>"Cuéntanos sobre tu proyecto y te contactaremos en menos de 24 horas"</p>
					</header>
				</Reveal>

				<div class="contact-grid">
					<Reveal class="contact-aside">
						<div class="card contact-info">
							<h3>"Información de Contacto"</h3>
							<div class="contact-item">
								<span class="icon">"✉"</span>
								<div>
									<h4>"Email"</h4>
									<p>{EMAIL}</p>
								</div>
							</div>
							<div class="contact-item">
								<span class="icon">"☎"</span>
								<div>
									<h4>"Teléfono"</h4>
									<p>{PHONE}</p>
								</div>
							</div>
							<div class="contact-item">
								<span class="icon">"⌖"</span>
								<div>
									<h4>"Oficina"</h4>
									<p>{OFFICE}</p>
								</div>
							</div>
						</div>

						<div class="card card--accent why-us">
							<h3>"¿Por qué elegirnos?"</h3>
							<ul>
								{WHY_US
									.iter()
									.map(|item| view! { <li><span class="check">"✓"</span>{*item}</li> })
									.collect_view()}
							</ul>
						</div>
					</Reveal>

					<Reveal delay_ms=200>
						<form class="card contact-form" on:submit=on_submit novalidate=true>
							<div class="form-field">
								<label for="name">"Nombre completo"</label>
								<input
									id="name"
									type="text"
									placeholder="Juan Pérez"
									prop:value=move || form.with(|f| f.name.clone())
									on:input=move |ev| edit(Field::Name, event_target_value(&ev))
								/>
								{field_error(form, dirty, Field::Name)}
							</div>

							<div class="form-field">
								<label for="email">"Email"</label>
								<input
									id="email"
									type="email"
									placeholder="juan@ejemplo.com"
									prop:value=move || form.with(|f| f.email.clone())
									on:input=move |ev| edit(Field::Email, event_target_value(&ev))
								/>
								{field_error(form, dirty, Field::Email)}
							</div>

							<div class="form-field">
								<label for="phone">"Teléfono"</label>
								<input
									id="phone"
									type="tel"
									placeholder="+56 9 8765 4321"
									prop:value=move || form.with(|f| f.phone.clone())
									on:input=move |ev| edit(Field::Phone, event_target_value(&ev))
								/>
								{field_error(form, dirty, Field::Phone)}
							</div>

							<div class="form-field">
								<label for="propertyType">"Tipo de Propiedad"</label>
								<select
									id="propertyType"
									prop:value=move || form.with(|f| f.property_type.clone())
									on:change=move |ev| edit(Field::PropertyType, event_target_value(&ev))
								>
									<option value="">"Selecciona una opción"</option>
									{PROPERTY_TYPES
										.iter()
										.map(|(value, label)| view! { <option value=*value>{*label}</option> })
										.collect_view()}
								</select>
								{field_error(form, dirty, Field::PropertyType)}
							</div>

							<div class="form-field">
								<label for="service">"Servicio de Interés"</label>
								<select
									id="service"
									prop:value=move || form.with(|f| f.service.clone())
									on:change=move |ev| edit(Field::Service, event_target_value(&ev))
								>
									<option value="">"Selecciona una opción"</option>
									{SERVICES
										.iter()
										.map(|s| view! { <option value=s.key>{s.title}</option> })
										.collect_view()}
								</select>
								{field_error(form, dirty, Field::Service)}
							</div>

							<div class="form-field">
								<label for="message">"Mensaje adicional"</label>
								<textarea
									id="message"
									rows="4"
									placeholder="Cuéntanos más sobre tu proyecto..."
									prop:value=move || form.with(|f| f.message.clone())
									on:input=move |ev| edit(Field::Message, event_target_value(&ev))
								/>
							</div>

							<button type="submit" class="btn btn--primary btn--block" disabled=move || !is_valid.get()>
								{move || if submitted.get() { "✓ Enviado" } else { "Enviar Cotización ➤" }}
							</button>

							<Show when=move || submitted.get()>
								<div class="form-success">
									<p>"¡Gracias! Te contactaremos pronto."</p>
								</div>
							</Show>
						</form>
					</Reveal>
				</div>
			</div>
		</section>
	}
}
