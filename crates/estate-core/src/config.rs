//! Site Configuration
//!
//! Contact details and timing knobs, read from the embedded `site.json`.
//! Every field has a default so a partial file is fine.

use serde::Deserialize;

use crate::links;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub agency_name: String,
    pub phone_display: String,
    pub whatsapp_message: String,
    pub floating_whatsapp_message: String,
    pub office_address: String,
    pub business_hours: String,
    pub page_size: usize,
    pub testimonial_interval_ms: u32,
    pub locality_interval_ms: u32,
    pub header_scroll_threshold: f64,
    pub floating_whatsapp_delay_ms: u32,
    pub submit_delay_ms: u32,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            agency_name: "Atlantis Real Estate".to_string(),
            phone_display: "+91 98765 43210".to_string(),
            whatsapp_message: "Hi, I'm interested in Atlantis properties".to_string(),
            floating_whatsapp_message: "Hi! I'm interested in your properties. Can you help me?".to_string(),
            office_address: "Sector 1, Rourkela, Odisha 769001".to_string(),
            business_hours: "Mon - Sat: 9:00 AM - 7:00 PM".to_string(),
            page_size: 6,
            testimonial_interval_ms: 5000,
            locality_interval_ms: 3000,
            header_scroll_threshold: 50.0,
            floating_whatsapp_delay_ms: 3000,
            submit_delay_ms: 800,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse the embedded settings, falling back to defaults on a bad file
    pub fn from_json_or_default(json: &str) -> Self {
        match serde_json::from_str::<SiteConfig>(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[Config] site.json unreadable, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn phone_url(&self) -> String {
        links::phone_url(&self.phone_display)
    }

    pub fn whatsapp_url(&self) -> String {
        links::whatsapp_url(&self.phone_display, &self.whatsapp_message)
    }

    pub fn floating_whatsapp_url(&self) -> String {
        links::whatsapp_url(&self.phone_display, &self.floating_whatsapp_message)
    }
}
