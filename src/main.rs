use leptos::prelude::*;
use lumintel_site::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
