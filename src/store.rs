//! Site Data Store
//!
//! Uses Leptos reactive_stores for the static records loaded at startup.

use estate_core::{Property, Service, Testimonial};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::data;

/// Records shown on the page, loaded once
#[derive(Clone, Debug, Default, Store)]
pub struct SiteState {
    /// Featured property listings
    pub properties: Vec<Property>,
    /// Carousel reviews
    pub testimonials: Vec<Testimonial>,
    /// Services section cards
    pub services: Vec<Service>,
}

impl SiteState {
    pub fn load() -> Self {
        let state = Self {
            properties: data::properties(),
            testimonials: data::testimonials(),
            services: data::services(),
        };
        log::info!(
            "[Data] loaded {} properties, {} testimonials, {} services",
            state.properties.len(),
            state.testimonials.len(),
            state.services.len()
        );
        state
    }
}

/// Type alias for the store
pub type SiteStore = Store<SiteState>;

/// Get the site store from context
pub fn use_site_store() -> SiteStore {
    expect_context::<SiteStore>()
}
