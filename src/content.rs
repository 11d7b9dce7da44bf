//! Static Page Content
//!
//! Navigation targets and copy for the sections that have no manifest.

/// Section highlighted when none is under the viewport middle
pub const DEFAULT_SECTION: &str = "hero";

/// Header navigation: (section id, label)
pub const HEADER_NAV: &[(&str, &str)] = &[
    ("hero", "Home"),
    ("properties", "Properties"),
    ("about", "About"),
    ("services", "Services"),
    ("contact", "Contact"),
];

/// Bottom navigation on phones: (section id, label, glyph)
pub const BOTTOM_NAV: &[(&str, &str, &str)] = &[
    ("hero", "Home", "🏠"),
    ("properties", "Properties", "🏢"),
    ("localities", "Areas", "📍"),
    ("about", "About", "ℹ️"),
    ("contact", "Contact", "📞"),
];

/// Sections the scroll spy checks, in page order
pub const TRACKED_SECTIONS: &[&str] = &["hero", "localities", "properties", "about", "contact"];

pub struct Locality {
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub const LOCALITIES: &[Locality] = &[
    Locality {
        name: "Koel Nagar",
        image: "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?auto=format&fit=crop&w=1000&q=80",
        description: "Premium waterfront locality",
    },
    Locality {
        name: "Civil Township",
        image: "https://images.unsplash.com/photo-1570129477492-45c003edd2be?auto=format&fit=crop&w=1000&q=80",
        description: "Modern family community",
    },
    Locality {
        name: "Panposh",
        image: "https://images.unsplash.com/photo-1605146769289-440113cc3d00?auto=format&fit=crop&w=1000&q=80",
        description: "Executive residential area",
    },
    Locality {
        name: "Sector 1",
        image: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?auto=format&fit=crop&w=1000&q=80",
        description: "Central business district",
    },
    Locality {
        name: "Sector 2",
        image: "https://images.unsplash.com/photo-1582407947304-fd86f028f716?auto=format&fit=crop&w=1000&q=80",
        description: "Modern residential hub",
    },
    Locality {
        name: "Fertilizer Township",
        image: "https://images.unsplash.com/photo-1449824913935-59a10b8d2000?auto=format&fit=crop&w=1000&q=80",
        description: "Established community",
    },
];

/// Headline numbers: (glyph, value, label, description)
pub const METRICS: &[(&str, &str, &str, &str)] = &[
    ("🏠", "500+", "Properties Sold", "Successfully completed"),
    ("👪", "1000+", "Happy Families", "Satisfied customers"),
    ("🏆", "15+", "Years Experience", "Trusted expertise"),
    ("⭐", "4.9", "Customer Rating", "Average rating"),
];

/// Testimonial section stats: (value, label)
pub const REVIEW_STATS: &[(&str, &str)] = &[
    ("4.9", "Average Rating"),
    ("1000+", "Happy Clients"),
    ("98%", "Satisfaction Rate"),
    ("500+", "Properties Sold"),
];

/// About section values: (title, description)
pub const VALUES: &[(&str, &str)] = &[
    ("Luxury Redefined", "We specialize in premium waterfront properties and luxury homes that exceed expectations."),
    ("Local Expertise", "Deep knowledge of Rourkela's real estate market with insights into the best neighborhoods."),
    ("Transparent Process", "Complete transparency in all transactions with no hidden costs or surprises."),
    ("Personalized Service", "Tailored solutions that match your unique requirements and lifestyle preferences."),
];

/// (glyph, title, description)
pub const WHY_CHOOSE_US: &[(&str, &str, &str)] = &[
    ("🛡️", "Trusted & Secure", "All transactions are secure with complete legal documentation and transparency."),
    ("⏱️", "Quick Process", "Streamlined processes to help you buy, sell, or rent properties faster."),
    ("🏆", "Expert Team", "15+ years of experience with deep knowledge of Rourkela's real estate market."),
    ("🤝", "Personalized Service", "Dedicated support throughout your real estate journey with customized solutions."),
];

/// (title, description)
pub const PROCESS_STEPS: &[(&str, &str)] = &[
    ("Consult", "Tell us what you need"),
    ("Search", "Find matching properties"),
    ("Visit", "Property tours and inspections"),
    ("Close", "Complete documentation"),
];

/// Contact section social proof: (value, label)
pub const SOCIAL_PROOF: &[(&str, &str)] = &[
    ("1000+", "Happy Clients"),
    ("4.9", "Average Rating"),
    ("15+", "Years Experience"),
];

/// Footer quick links: (label, section id)
pub const FOOTER_LINKS: &[(&str, &str)] = &[
    ("About Us", "about"),
    ("Properties", "properties"),
    ("Services", "services"),
    ("Testimonials", "testimonials"),
    ("Contact", "contact"),
];

pub const FOOTER_SERVICES: &[&str] = &[
    "Buy Properties",
    "Sell Properties",
    "Rent Properties",
    "Property Valuation",
    "Legal Support",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_nav_sections_are_tracked() {
        for (id, _, _) in BOTTOM_NAV {
            assert!(TRACKED_SECTIONS.contains(id), "{} is not tracked", id);
        }
        assert!(TRACKED_SECTIONS.contains(&DEFAULT_SECTION));
    }

    #[test]
    fn test_process_has_four_steps() {
        assert_eq!(PROCESS_STEPS.len(), 4);
    }
}
