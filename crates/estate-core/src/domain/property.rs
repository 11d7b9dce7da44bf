//! Property Entity
//!
//! A real-estate listing shown in the featured properties catalog.

use serde::{Deserialize, Serialize};

/// Transaction type of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyStatus {
    #[serde(rename = "For Sale")]
    ForSale,
    #[serde(rename = "For Rent")]
    ForRent,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::ForSale => "For Sale",
            PropertyStatus::ForRent => "For Rent",
        }
    }
}

/// Property category
///
/// Labels outside the known set are kept as `Other` so a manifest with a new
/// category still loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    Villa,
    Apartment,
    Bungalow,
    Other(String),
}

impl PropertyType {
    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::Villa => "Villa",
            PropertyType::Apartment => "Apartment",
            PropertyType::Bungalow => "Bungalow",
            PropertyType::Other(label) => label,
        }
    }
}

impl From<String> for PropertyType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Villa" => PropertyType::Villa,
            "Apartment" => PropertyType::Apartment,
            "Bungalow" => PropertyType::Bungalow,
            _ => PropertyType::Other(label),
        }
    }
}

impl From<PropertyType> for String {
    fn from(kind: PropertyType) -> Self {
        match kind {
            PropertyType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// A listing record (matches the properties manifest)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: u32,
    pub title: String,
    /// Currency-formatted price, e.g. "₹1.2 Cr"
    pub price: String,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Area with unit, e.g. "2400 sq ft"
    pub area: String,
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: PropertyStatus,
}

impl Property {
    pub fn is_for_sale(&self) -> bool {
        self.status == PropertyStatus::ForSale
    }
}
