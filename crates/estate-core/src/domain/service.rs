//! Service Entity

use serde::{Deserialize, Serialize};

/// Icon keys used by the services manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceIcon {
    #[default]
    Home,
    TrendingUp,
    Key,
}

impl ServiceIcon {
    /// Unknown keys fall back to `Home`
    pub fn from_key(key: &str) -> Self {
        match key {
            "trending-up" => ServiceIcon::TrendingUp,
            "key" => ServiceIcon::Key,
            _ => ServiceIcon::Home,
        }
    }

    /// Glyph rendered in the service card badge
    pub fn glyph(&self) -> &'static str {
        match self {
            ServiceIcon::Home => "🏠",
            ServiceIcon::TrendingUp => "📈",
            ServiceIcon::Key => "🔑",
        }
    }
}

fn icon_from_key<'de, D>(deserializer: D) -> Result<ServiceIcon, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let key = String::deserialize(deserializer)?;
    Ok(ServiceIcon::from_key(&key))
}

/// A service offered by the agency (matches the services manifest)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default, deserialize_with = "icon_from_key")]
    pub icon: ServiceIcon,
    #[serde(default)]
    pub features: Vec<String>,
    pub cta: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_fallback() {
        assert_eq!(ServiceIcon::from_key("trending-up"), ServiceIcon::TrendingUp);
        assert_eq!(ServiceIcon::from_key("sparkles"), ServiceIcon::Home);
    }

    #[test]
    fn test_service_with_unknown_icon_loads() {
        let json = r#"{"id":1,"title":"Buy","description":"d","icon":"rocket","features":[],"cta":"Go"}"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.icon, ServiceIcon::Home);
    }
}
