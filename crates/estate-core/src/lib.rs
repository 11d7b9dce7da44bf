//! Estate Core
//!
//! Presentation state for the Atlantis landing site, kept free of any browser
//! dependency so it can be tested natively:
//! - domain: property, testimonial and service records
//! - catalog: property filtering and pagination
//! - carousel: circular window with autoplay state machine
//! - scroll_spy: active section and header state from scroll samples
//! - contact: contact form validation and simulated submission
//! - links: `tel:` and WhatsApp deep links
//! - format: display helpers for cards
//! - config / manifest: embedded JSON loading

pub mod domain;
pub mod catalog;
pub mod carousel;
pub mod scroll_spy;
pub mod contact;
pub mod links;
pub mod format;
pub mod config;
pub mod manifest;
mod error;

pub use domain::{Property, PropertyStatus, PropertyType, Service, ServiceIcon, Testimonial};
pub use catalog::{filter_properties, page_count, CatalogState, PropertyFilter, ViewMode};
pub use carousel::{AutoplayState, Carousel, CarouselLayout};
pub use scroll_spy::{active_section, is_scrolled, SectionBounds};
pub use contact::{ContactField, ContactForm, ContactSession, SubmissionState};
pub use config::SiteConfig;
pub use error::{ContactError, ManifestError};
