//! UI Components
//!
//! Page sections and the cards they render.

mod section_heading;
mod header;
mod bottom_nav;
mod hero;
mod localities;
mod metrics;
mod property_card;
mod featured_properties;
mod about;
mod testimonial_card;
mod testimonials;
mod service_card;
mod services;
mod contact_form;
mod contact;
mod footer;
mod floating_whatsapp;

pub use section_heading::SectionHeading;
pub use header::SiteHeader;
pub use bottom_nav::BottomNavigation;
pub use hero::HeroSection;
pub use localities::PopularLocalities;
pub use metrics::MetricsSection;
pub use property_card::PropertyCard;
pub use featured_properties::FeaturedProperties;
pub use about::AboutSection;
pub use testimonial_card::TestimonialCard;
pub use testimonials::TestimonialsSection;
pub use service_card::ServiceCard;
pub use services::ServicesSection;
pub use contact_form::ContactFormPanel;
pub use contact::ContactSection;
pub use footer::SiteFooter;
pub use floating_whatsapp::FloatingWhatsApp;
