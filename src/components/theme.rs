//! Light/dark theme shared through context. Lives only for the session.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	Light,
	#[default]
	Dark,
}

impl Theme {
	pub fn toggled(self) -> Self {
		match self {
			Theme::Light => Theme::Dark,
			Theme::Dark => Theme::Light,
		}
	}

	/// Value written to the document's `data-theme` attribute.
	pub fn as_str(self) -> &'static str {
		match self {
			Theme::Light => "light",
			Theme::Dark => "dark",
		}
	}
}

#[derive(Clone, Copy)]
pub struct ThemeContext(pub RwSignal<Theme>);

impl ThemeContext {
	pub fn get(&self) -> Theme {
		self.0.get()
	}

	pub fn toggle(&self) {
		self.0.update(|t| *t = t.toggled());
		log::debug!("theme switched to {}", self.0.get_untracked().as_str());
	}
}

pub fn provide_theme() -> ThemeContext {
	let ctx = ThemeContext(RwSignal::new(Theme::default()));
	provide_context(ctx);
	ctx
}

pub fn use_theme() -> ThemeContext {
	use_context::<ThemeContext>().unwrap_or_else(provide_theme)
}
