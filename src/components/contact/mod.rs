mod form;
mod validation;

pub use form::ContactForm;
