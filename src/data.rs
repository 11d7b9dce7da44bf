//! Embedded Manifests
//!
//! JSON files under `assets/` are compiled into the binary.

use estate_core::{manifest, Property, Service, SiteConfig, Testimonial};

const SITE_JSON: &str = include_str!("../assets/site.json");
const PROPERTIES_JSON: &str = include_str!("../assets/data/properties.json");
const TESTIMONIALS_JSON: &str = include_str!("../assets/data/testimonials.json");
const SERVICES_JSON: &str = include_str!("../assets/data/services.json");

pub fn site_config() -> SiteConfig {
    SiteConfig::from_json_or_default(SITE_JSON)
}

pub fn properties() -> Vec<Property> {
    manifest::or_empty(manifest::parse_properties(PROPERTIES_JSON))
}

pub fn testimonials() -> Vec<Testimonial> {
    manifest::or_empty(manifest::parse_testimonials(TESTIMONIALS_JSON))
}

pub fn services() -> Vec<Service> {
    manifest::or_empty(manifest::parse_services(SERVICES_JSON))
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_core::{filter_properties, PropertyFilter};
    use std::collections::HashSet;

    #[test]
    fn test_embedded_manifests_parse() {
        assert!(manifest::parse_properties(PROPERTIES_JSON).is_ok());
        assert!(manifest::parse_testimonials(TESTIMONIALS_JSON).is_ok());
        assert!(manifest::parse_services(SERVICES_JSON).is_ok());
    }

    #[test]
    fn test_site_config_is_complete() {
        let config: SiteConfig = serde_json::from_str(SITE_JSON).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_property_ids_unique() {
        let list = properties();
        let ids: HashSet<u32> = list.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn test_every_filter_has_listings() {
        let list = properties();
        for filter in PropertyFilter::ALL {
            assert!(!filter_properties(&list, filter).is_empty(), "{:?} is empty", filter);
        }
    }

    #[test]
    fn test_catalog_spans_several_pages() {
        let config = site_config();
        assert!(properties().len() > config.page_size);
    }

    #[test]
    fn test_testimonials_fill_wide_carousel() {
        let list = testimonials();
        assert!(list.len() >= 3);
        assert!(list.iter().all(|t| t.rating <= 5));
    }
}
