//! Testimonial Entity

use serde::{Deserialize, Serialize};

/// A customer review shown in the testimonial carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub location: String,
    /// Star rating, 0 to 5
    pub rating: u8,
    pub text: String,
    pub avatar: String,
    /// Label of the property the client bought or rented
    pub property: String,
    /// ISO date, `YYYY-MM-DD`
    pub date: String,
}
