use leptos::prelude::*;

use super::component::NetworkCanvas;

/// Bordered panel hosting the network animation with a caption on top.
#[component]
pub fn NetworkPanel(#[prop(into, default = "Red Inteligente Conectada".into())] caption: String) -> impl IntoView {
	view! {
		<div class="network-panel">
			<div class="network-panel__backdrop"></div>
			<NetworkCanvas />
			<div class="network-panel__overlay">
				<div class="network-panel__caption">
					<div class="pulse-ring">
						<div class="pulse-core"></div>
					</div>
					<p>{caption}</p>
				</div>
			</div>
		</div>
	}
}
