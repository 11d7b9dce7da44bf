//! Domain Layer
//!
//! Immutable records loaded from the static manifests.

mod property;
mod testimonial;
mod service;

pub use property::{Property, PropertyStatus, PropertyType};
pub use testimonial::Testimonial;
pub use service::{Service, ServiceIcon};
