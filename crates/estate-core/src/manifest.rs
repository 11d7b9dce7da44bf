//! Manifest Loading
//!
//! The property, testimonial and service lists ship as JSON arrays. Each is
//! parsed once; a broken manifest becomes an empty list rather than a panic.

use serde::de::DeserializeOwned;

use crate::domain::{Property, Service, Testimonial};
use crate::error::ManifestError;

pub fn parse<T: DeserializeOwned>(manifest: &'static str, json: &str) -> Result<Vec<T>, ManifestError> {
    serde_json::from_str(json).map_err(|source| ManifestError::Parse { manifest, source })
}

pub fn parse_properties(json: &str) -> Result<Vec<Property>, ManifestError> {
    parse("properties", json)
}

pub fn parse_testimonials(json: &str) -> Result<Vec<Testimonial>, ManifestError> {
    parse("testimonials", json)
}

pub fn parse_services(json: &str) -> Result<Vec<Service>, ManifestError> {
    parse("services", json)
}

/// Log and swallow a manifest error
pub fn or_empty<T>(result: Result<Vec<T>, ManifestError>) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            log::error!("[Data] {}", e);
            Vec::new()
        }
    }
}
