use leptos::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::footer::Footer;
use crate::components::hero::HeroSection;
use crate::components::navbar::Navbar;
use crate::components::pricing::PricingTable;
use crate::components::services::ServicesGrid;

/// Landing page: every section stacked in scroll order.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<div class="page">
			<Navbar />
			<main>
				<HeroSection />
				<ServicesGrid />
				<PricingTable />
				<ContactForm />
			</main>
			<Footer />
		</div>
	}
}
