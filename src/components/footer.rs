use leptos::prelude::*;

use crate::content::{
	BRAND, CITY, COMPANY, COMPANY_LINKS, EMAIL, PHONE, PHONE_HREF, SERVICES, SOCIAL_LINKS, STREET,
};

fn current_year() -> u32 {
	js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer() -> impl IntoView {
	view! {
		<footer class="footer">
			<div class="container">
				<div class="footer__grid">
					<div>
						<div class="brand">
							<div class="brand__mark">"L"</div>
							<span class="brand__name">{BRAND}</span>
						</div>
						<p class="footer__blurb">
							"Transformamos hogares en espacios inteligentes con tecnología de vanguardia y servicio de excelencia."
						</p>
						<div class="footer__social">
							{SOCIAL_LINKS
								.iter()
								.map(|(label, icon)| view! {
									<a href="#" class="icon-button" aria-label=*label>{*icon}</a>
								})
								.collect_view()}
						</div>
					</div>

					<div>
						<h3>"Servicios"</h3>
						<ul>
							{SERVICES
								.iter()
								.map(|s| view! { <li><a href="#servicios">{s.title}</a></li> })
								.collect_view()}
						</ul>
					</div>

					<div>
						<h3>"Compañía"</h3>
						<ul>
							{COMPANY_LINKS
								.iter()
								.map(|item| view! { <li><a href="#">{*item}</a></li> })
								.collect_view()}
						</ul>
					</div>

					<div>
						<h3>"Contacto"</h3>
						<ul class="footer__contact">
							<li>{STREET}</li>
							<li>{CITY}</li>
							<li><a href=PHONE_HREF>{PHONE}</a></li>
							<li><a href=format!("mailto:{EMAIL}")>{EMAIL}</a></li>
						</ul>
					</div>
				</div>

				<div class="footer__bottom">
					<p>{format!("© {} {COMPANY}. Todos los derechos reservados.", current_year())}</p>
					<div class="footer__legal">
						<a href="#">"Términos y Condiciones"</a>
						<a href="#">"Privacidad"</a>
					</div>
				</div>
			</div>
		</footer>
	}
}
