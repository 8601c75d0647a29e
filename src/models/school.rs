use serde::{Deserialize, Serialize};

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Public description of the school served to the website frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolInfo {
    #[serde(default = "default_school_name")]
    pub name: String,
    pub address: String,
    pub phone: String,
    /// Human readable opening hours, e.g. "Ouvert · Ferme à 18h"
    pub hours_label: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub maps_url: Option<String>,
}

fn default_school_name() -> String {
    "École".to_string()
}

impl SchoolInfo {
    /// The fixed record for École Ibnou Sina in Casablanca.
    pub fn ibnou_sina() -> Self {
        let address = "58 Bd Ibnou Sina, Casablanca 20210";

        SchoolInfo {
            name: "École Ibnou Sina".to_string(),
            address: address.to_string(),
            phone: "05229-44803".to_string(),
            hours_label: "Ouvert · Ferme à 18h".to_string(),
            city: Some("Casablanca".to_string()),
            country: Some("Maroc".to_string()),
            maps_url: Some(maps_search_url(address)),
        }
    }
}

/// Google Maps search link for an address. Spaces become `+`, nothing else is escaped.
pub fn maps_search_url(address: &str) -> String {
    format!("{}{}", MAPS_SEARCH_URL, address.replace(' ', "+"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ibnou_sina_values() {
        let info = SchoolInfo::ibnou_sina();

        assert_eq!(info.name, "École Ibnou Sina");
        assert_eq!(info.address, "58 Bd Ibnou Sina, Casablanca 20210");
        assert_eq!(info.phone, "05229-44803");
        assert_eq!(info.hours_label, "Ouvert · Ferme à 18h");
        assert_eq!(info.city.as_deref(), Some("Casablanca"));
        assert_eq!(info.country.as_deref(), Some("Maroc"));
        assert_eq!(
            info.maps_url.as_deref(),
            Some("https://www.google.com/maps/search/?api=1&query=58+Bd+Ibnou+Sina,+Casablanca+20210")
        );
    }

    #[test]
    fn test_maps_url_only_replaces_spaces() {
        assert_eq!(
            maps_search_url("1 Rue A,B"),
            "https://www.google.com/maps/search/?api=1&query=1+Rue+A,B"
        );
        assert_eq!(maps_search_url(""), MAPS_SEARCH_URL);
    }

    #[test]
    fn test_deserialization_defaults() {
        let json = r#"{"address":"1 Rue X","phone":"0500","hours_label":"Fermé"}"#;
        let info: SchoolInfo = serde_json::from_str(json).expect("Failed to deserialize SchoolInfo");

        assert_eq!(info.name, "École");
        assert_eq!(info.city, None);
        assert_eq!(info.maps_url, None);
    }

    #[test]
    fn test_absent_optionals_serialize_as_null() {
        let info = SchoolInfo {
            name: "École".to_string(),
            address: "1 Rue X".to_string(),
            phone: "0500".to_string(),
            hours_label: "Fermé".to_string(),
            city: None,
            country: None,
            maps_url: None,
        };

        let value = serde_json::to_value(&info).expect("Failed to serialize SchoolInfo");
        assert!(value["city"].is_null());
        assert!(value["maps_url"].is_null());
    }
}
