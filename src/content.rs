//! Static copy for the landing page.

pub const BRAND: &str = "Lumintel";
pub const COMPANY: &str = "Lumintel Smart Homes";

/// Section anchors, in page order. Each doubles as the navbar label.
pub const SECTIONS: &[&str] = &["servicios", "precios", "contacto"];
pub const CONTACT_SECTION: &str = "contacto";
pub const SERVICES_SECTION: &str = "servicios";

pub struct Service {
	/// Value used by the contact form's service selector.
	pub key: &'static str,
	pub icon: &'static str,
	pub title: &'static str,
	pub description: &'static str,
	pub features: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
	Service {
		key: "seguridad",
		icon: "🛡",
		title: "Seguridad Total",
		description: "Protección inteligente para tu familia y patrimonio",
		features: &[
			"Alarmas inteligentes",
			"Sensores de movimiento",
			"Notificaciones en tiempo real",
		],
	},
	Service {
		key: "conectividad",
		icon: "📶",
		title: "Conectividad WiFi",
		description: "Red mesh de alta velocidad en todo tu hogar",
		features: &["Cobertura total", "Roaming automático", "Red segura y rápida"],
	},
	Service {
		key: "automatizacion",
		icon: "⚡",
		title: "Automatización",
		description: "Control inteligente de luces y electrodomésticos",
		features: &["Escenas personalizadas", "Control por voz", "Ahorro energético"],
	},
	Service {
		key: "videovigilancia",
		icon: "📷",
		title: "Videovigilancia",
		description: "Monitoreo 24/7 con cámaras de alta definición",
		features: &["Visión nocturna", "Grabación en la nube", "Acceso remoto"],
	},
	Service {
		key: "climatizacion",
		icon: "🌡",
		title: "Climatización",
		description: "Control inteligente de temperatura y confort",
		features: &[
			"Termostatos smart",
			"Programación horaria",
			"Detección de presencia",
		],
	},
	Service {
		key: "acceso",
		icon: "🔒",
		title: "Acceso Inteligente",
		description: "Cerraduras y control de acceso sin llaves",
		features: &["Apertura remota", "Códigos temporales", "Historial de accesos"],
	},
];

pub struct Plan {
	pub name: &'static str,
	/// Price in CLP, already formatted with thousands separators.
	pub price: &'static str,
	pub description: &'static str,
	pub features: &'static [&'static str],
	pub popular: bool,
}

pub const PLANS: &[Plan] = &[
	Plan {
		name: "Hogar Básico",
		price: "289.990",
		description: "Ideal para comenzar tu transformación inteligente",
		features: &[
			"Control de luces (5 puntos)",
			"Cerradura inteligente",
			"Termostato smart",
			"Asistente de voz",
			"App móvil incluida",
			"Instalación profesional",
		],
		popular: false,
	},
	Plan {
		name: "Hogar Smart",
		price: "489.990",
		description: "La opción más completa para tu familia",
		features: &[
			"Todo de Plan Básico",
			"Control de luces (10 puntos)",
			"2 Cámaras HD WiFi",
			"Sensores de movimiento (4)",
			"Sistema de alarma",
			"Red WiFi mesh",
			"Soporte prioritario 24/7",
			"Garantía extendida 3 años",
		],
		popular: true,
	},
	Plan {
		name: "Hogar Premium",
		price: "789.990",
		description: "Automatización total sin límites",
		features: &[
			"Todo de Plan Smart",
			"Control de luces (20 puntos)",
			"4 Cámaras HD WiFi",
			"Sensores de movimiento (8)",
			"Control de cortinas",
			"Sistema de audio multiroom",
			"Panel de control táctil",
			"Mantenimiento anual incluido",
		],
		popular: false,
	},
];

/// (value, label)
pub const HERO_STATS: &[(&str, &str)] = &[
	("500+", "Hogares"),
	("24/7", "Soporte"),
	("98%", "Satisfacción"),
];

/// (value, label) pairs for the property type selector.
pub const PROPERTY_TYPES: &[(&str, &str)] = &[
	("casa", "Casa"),
	("departamento", "Departamento"),
	("oficina", "Oficina"),
];

pub const EMAIL: &str = "contacto@lumintel.cl";
pub const PHONE: &str = "+56 9 8765 4321";
pub const PHONE_HREF: &str = "tel:+56987654321";
pub const STREET: &str = "Av. Providencia 2133";
pub const CITY: &str = "Santiago, Chile";
pub const OFFICE: &str = "Av. Providencia 2133, Santiago";

pub const WHY_US: &[&str] = &[
	"Instalación profesional certificada",
	"Soporte técnico 24/7",
	"Garantía de satisfacción",
	"Tecnología de última generación",
];

/// (label, icon)
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
	("Facebook", "f"),
	("Instagram", "ig"),
	("Twitter", "x"),
	("LinkedIn", "in"),
];

pub const COMPANY_LINKS: &[&str] = &[
	"Sobre Nosotros",
	"Blog",
	"Casos de Éxito",
	"Soporte",
	"Garantía",
	"Contacto",
];

pub fn service_by_key(key: &str) -> Option<&'static Service> {
	SERVICES.iter().find(|s| s.key == key)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn exactly_one_popular_plan() {
		assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
	}

	#[test]
	fn service_keys_are_unique() {
		for s in SERVICES {
			assert_eq!(service_by_key(s.key).map(|found| found.title), Some(s.title));
		}
		assert!(service_by_key("").is_none());
	}

	#[test]
	fn sections_include_form_anchor() {
		assert!(SECTIONS.contains(&CONTACT_SECTION));
		assert!(SECTIONS.contains(&SERVICES_SECTION));
	}
}
