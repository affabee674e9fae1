use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessData {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_maps_url: Option<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialMedia>,
    pub website_status: WebsiteStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_quality: Option<WebsiteQuality>,
    pub score: u8,
    pub opportunity: Opportunity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebsiteStatus {
    None,
    Found,
}

impl WebsiteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WebsiteStatus::None => "none",
            WebsiteStatus::Found => "found",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opportunity {
    High,
    Medium,
    Low,
}

impl Opportunity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Opportunity::High => "high",
            Opportunity::Medium => "medium",
            Opportunity::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadSpeed {
    Fast,
    Medium,
    Slow,
}

/// Structured assessment of an existing website. Only present on leads with
/// `website_status == found`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteQuality {
    pub score: u8,
    pub mobile_responsive: bool,
    pub load_speed: LoadSpeed,
    pub has_ssl: bool,
    pub modern_design: bool,
    pub has_contact_form: bool,
    pub has_social_links: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl SocialMedia {
    pub fn is_empty(&self) -> bool {
        self.facebook.is_none() && self.instagram.is_none() && self.linkedin.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_data_serializes_with_camel_case_wire_names() {
        let lead = BusinessData {
            id: "b1".to_string(),
            name: "Golden Crust Bakery".to_string(),
            address: "12 Mission St, San Francisco".to_string(),
            phone: None,
            email: None,
            website: None,
            google_maps_url: Some("https://maps.google.com/?cid=42".to_string()),
            category: "Bakery".to_string(),
            social_media: None,
            website_status: WebsiteStatus::None,
            website_quality: None,
            score: 95,
            opportunity: Opportunity::High,
        };

        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["websiteStatus"], "none");
        assert_eq!(json["opportunity"], "high");
        assert_eq!(json["googleMapsUrl"], "https://maps.google.com/?cid=42");
        // Absent optionals are omitted entirely, not serialized as null.
        assert!(json.get("phone").is_none());
        assert!(json.get("websiteQuality").is_none());
    }

    #[test]
    fn load_speed_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_value(LoadSpeed::Fast).unwrap(), "fast");
        assert_eq!(serde_json::to_value(LoadSpeed::Slow).unwrap(), "slow");
    }
}
