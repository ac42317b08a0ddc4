//! Page sections, the scroll reveal wrapper and the animated network panel.

pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod network;
pub mod pricing;
pub mod reveal;
mod scroll;
pub mod services;
pub mod theme;
