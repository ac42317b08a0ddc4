use std::sync::LazyLock;

use regex::Regex;

use crate::content::{PROPERTY_TYPES, service_by_key};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i-u)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("valid email pattern")
});
static PHONE_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[0-9+\s-]+$").expect("valid phone pattern"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
	Name,
	Email,
	Phone,
	PropertyType,
	Service,
	Message,
}

impl Field {
	pub const ALL: [Field; 6] = [
		Field::Name,
		Field::Email,
		Field::Phone,
		Field::PropertyType,
		Field::Service,
		Field::Message,
	];
}

/// Validation failure for one field. `Display` is the message shown under it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("El nombre es requerido")]
	NameRequired,
	#[error("Mínimo 2 caracteres")]
	NameTooShort,
	#[error("El email es requerido")]
	EmailRequired,
	#[error("Email inválido")]
	EmailInvalid,
	#[error("El teléfono es requerido")]
	PhoneRequired,
	#[error("Teléfono inválido")]
	PhoneInvalid,
	#[error("Selecciona un tipo de propiedad")]
	PropertyTypeRequired,
	#[error("Selecciona un servicio")]
	ServiceRequired,
}

/// Quote request as typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteRequest {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub property_type: String,
	pub service: String,
	pub message: String,
}

impl QuoteRequest {
	pub fn value(&self, field: Field) -> &str {
		match field {
			Field::Name => &self.name,
			Field::Email => &self.email,
			Field::Phone => &self.phone,
			Field::PropertyType => &self.property_type,
			Field::Service => &self.service,
			Field::Message => &self.message,
		}
	}

	pub fn set(&mut self, field: Field, value: String) {
		match field {
			Field::Name => self.name = value,
			Field::Email => self.email = value,
			Field::Phone => self.phone = value,
			Field::PropertyType => self.property_type = value,
			Field::Service => self.service = value,
			Field::Message => self.message = value,
		}
	}

	pub fn check(&self, field: Field) -> Result<(), FieldError> {
		let value = self.value(field);
		match field {
			Field::Name if value.is_empty() => Err(FieldError::NameRequired),
			Field::Name if value.chars().count() < 2 => Err(FieldError::NameTooShort),
			Field::Email if value.is_empty() => Err(FieldError::EmailRequired),
			Field::Email if !EMAIL_RE.is_match(value) => Err(FieldError::EmailInvalid),
			Field::Phone if value.is_empty() => Err(FieldError::PhoneRequired),
			Field::Phone if !PHONE_RE.is_match(value) => Err(FieldError::PhoneInvalid),
			Field::PropertyType if !PROPERTY_TYPES.iter().any(|(key, _)| *key == value) => {
				Err(FieldError::PropertyTypeRequired)
			}
			Field::Service if service_by_key(value).is_none() => Err(FieldError::ServiceRequired),
			_ => Ok(()),
		}
	}

	pub fn is_valid(&self) -> bool {
		Field::ALL.iter().all(|&f| self.check(f).is_ok())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn valid() -> QuoteRequest {
		QuoteRequest {
			name: "Juan Pérez".into(),
			email: "juan@ejemplo.com".into(),
			phone: "+56 9 8765 4321".into(),
			property_type: "casa".into(),
			service: "automatizacion".into(),
			message: String::new(),
		}
	}

	#[test]
	fn complete_request_is_valid() {
		assert!(valid().is_valid());
	}

	#[test]
	fn empty_request_reports_every_required_field() {
		let req = QuoteRequest::default();
		let errors: Vec<_> = Field::ALL.iter().filter_map(|&f| req.check(f).err()).collect();
		assert_eq!(
			errors,
			vec![
				FieldError::NameRequired,
				FieldError::EmailRequired,
				FieldError::PhoneRequired,
				FieldError::PropertyTypeRequired,
				FieldError::ServiceRequired,
			]
		);
	}

	#[test]
	fn name_needs_two_characters() {
		let mut req = valid();
		req.name = "J".into();
		assert_eq!(req.check(Field::Name), Err(FieldError::NameTooShort));
		req.name = "Jé".into();
		assert_eq!(req.check(Field::Name), Ok(()));
	}

	#[test]
	fn email_pattern() {
		let mut req = valid();
		for ok in ["A.B%c+d@Sub.Example.CL", "x_y@dominio.org"] {
			req.email = ok.into();
			assert_eq!(req.check(Field::Email), Ok(()), "{ok}");
		}
		for bad in ["juan", "juan@ejemplo", "juan@ejemplo.c", "ju an@ejemplo.com"] {
			req.email = bad.into();
			assert_eq!(req.check(Field::Email), Err(FieldError::EmailInvalid), "{bad}");
		}
	}

	#[test]
	fn email_case_folding_is_ascii_only() {
		let mut req = valid();
		// KELVIN SIGN and LATIN SMALL LETTER LONG S fold to k/s under Unicode rules
		for bad in ["\u{212A}@x.cl", "a@b.\u{017F}\u{017F}"] {
			req.email = bad.into();
			assert_eq!(req.check(Field::Email), Err(FieldError::EmailInvalid), "{bad:?}");
		}
		req.email = "JUAN@EJEMPLO.CL".into();
		assert_eq!(req.check(Field::Email), Ok(()));
	}

	#[test]
	fn phone_pattern() {
		let mut req = valid();
		req.phone = "22-345 678".into();
		assert_eq!(req.check(Field::Phone), Ok(()));
		req.phone = "56 9 abc".into();
		assert_eq!(req.check(Field::Phone), Err(FieldError::PhoneInvalid));
	}

	#[test]
	fn selectors_only_accept_known_options() {
		let mut req = valid();
		req.property_type = "castillo".into();
		req.service = "piscina".into();
		assert_eq!(req.check(Field::PropertyType), Err(FieldError::PropertyTypeRequired));
		assert_eq!(req.check(Field::Service), Err(FieldError::ServiceRequired));
		assert!(!req.is_valid());
	}

	#[test]
	fn error_messages() {
		assert_eq!(FieldError::EmailInvalid.to_string(), "Email inválido");
		assert_eq!(FieldError::NameTooShort.to_string(), "Mínimo 2 caracteres");
	}

	#[test]
	fn set_and_read_back() {
		let mut req = QuoteRequest::default();
		req.set(Field::Message, "Hola".into());
		assert_eq!(req.value(Field::Message), "Hola");
	}
}
