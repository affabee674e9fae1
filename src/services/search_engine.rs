use itertools::Itertools;
use uuid::Uuid;

use crate::domain::{
    business::{BusinessData, Opportunity, WebsiteQuality, WebsiteStatus},
    report::SearchParams,
};

use super::{PlaceContact, PlaceSummary, PlacesClient, WebsiteAudit, WebsiteAuditor};

pub struct BusinessSearchEngine {
    places: PlacesClient,
    auditor: WebsiteAuditor,
}

impl BusinessSearchEngine {
    pub fn new(places: PlacesClient) -> Self {
        BusinessSearchEngine {
            places,
            auditor: WebsiteAuditor::new(),
        }
    }

    /// Discovers businesses for the search, audits their websites, and
    /// returns one scored lead per business. A failed details or audit call
    /// only degrades that lead; a failed discovery call fails the search.
    pub async fn search_businesses(
        &self,
        params: &SearchParams,
    ) -> anyhow::Result<Vec<BusinessData>> {
        let wanted = params.lead_count as usize;
        let places = self.places.text_search(params, wanted).await?;
        let places = dedupe_places(places);

        let mut leads: Vec<BusinessData> = vec![];

        for place in places.into_iter().take(wanted) {
            let contact = match self.places.place_details(&place.place_id).await {
                Ok(contact) => contact,
                Err(e) => {
                    log::error!("Failed to fetch details for {}: {:?}", place.name, e);
                    PlaceContact::default()
                }
            };

            let mut email = None;
            let mut social_media = None;
            let (website_status, website_quality) = match contact.website {
                Some(ref website) => {
                    let audit = match self.auditor.audit(website).await {
                        Ok(audit) => audit,
                        Err(e) => {
                            log::error!("Failed to audit {}: {:?}", website, e);
                            WebsiteAudit::unreachable()
                        }
                    };
                    email = audit.email;
                    social_media = audit.social;
                    (WebsiteStatus::Found, Some(audit.quality))
                }
                None => (WebsiteStatus::None, None),
            };

            let score = opportunity_score(website_status, website_quality.as_ref());

            leads.push(BusinessData {
                id: Uuid::new_v4().to_string(),
                name: place.name,
                address: place.formatted_address,
                phone: contact.formatted_phone_number,
                email,
                website: contact.website,
                google_maps_url: contact.url,
                category: params.category.clone(),
                social_media,
                website_status,
                website_quality,
                score,
                opportunity: classify_opportunity(score),
            });
        }

        log::info!(
            "Built {} leads for {} in {}",
            leads.len(),
            params.category,
            params.city
        );

        Ok(leads)
    }
}

fn dedupe_places(places: Vec<PlaceSummary>) -> Vec<PlaceSummary> {
    places
        .into_iter()
        .unique_by(|place| (place.name.to_lowercase(), place.formatted_address.clone()))
        .collect()
}

/// A business with no web presence is the strongest prospect; for the rest
/// the opportunity is the inverse of the website quality.
pub fn opportunity_score(status: WebsiteStatus, quality: Option<&WebsiteQuality>) -> u8 {
    match (status, quality) {
        (WebsiteStatus::None, _) => 95,
        (WebsiteStatus::Found, Some(quality)) => 100 - quality.score.min(100),
        (WebsiteStatus::Found, None) => 95,
    }
}

pub fn classify_opportunity(score: u8) -> Opportunity {
    match score {
        70.. => Opportunity::High,
        40..=69 => Opportunity::Medium,
        _ => Opportunity::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::business::LoadSpeed;

    fn quality(score: u8) -> WebsiteQuality {
        WebsiteQuality {
            score,
            mobile_responsive: true,
            load_speed: LoadSpeed::Fast,
            has_ssl: true,
            modern_design: true,
            has_contact_form: true,
            has_social_links: true,
            last_updated: None,
            issues: vec![],
        }
    }

    fn place(name: &str, address: &str) -> PlaceSummary {
        PlaceSummary {
            place_id: format!("id-{}-{}", name, address),
            name: name.to_string(),
            formatted_address: address.to_string(),
        }
    }

    #[test]
    fn missing_website_scores_as_a_strong_prospect() {
        let score = opportunity_score(WebsiteStatus::None, None);

        assert_eq!(score, 95);
        assert_eq!(classify_opportunity(score), Opportunity::High);
    }

    #[test]
    fn opportunity_is_the_inverse_of_website_quality() {
        let poor = quality(10);
        let fair = quality(49);
        let good = quality(90);

        assert_eq!(opportunity_score(WebsiteStatus::Found, Some(&poor)), 90);
        assert_eq!(opportunity_score(WebsiteStatus::Found, Some(&fair)), 51);
        assert_eq!(opportunity_score(WebsiteStatus::Found, Some(&good)), 10);
    }

    #[test]
    fn classification_thresholds() {
        assert_eq!(classify_opportunity(100), Opportunity::High);
        assert_eq!(classify_opportunity(70), Opportunity::High);
        assert_eq!(classify_opportunity(69), Opportunity::Medium);
        assert_eq!(classify_opportunity(40), Opportunity::Medium);
        assert_eq!(classify_opportunity(39), Opportunity::Low);
        assert_eq!(classify_opportunity(0), Opportunity::Low);
    }

    #[test]
    fn duplicate_listings_are_dropped_case_insensitively() {
        let places = vec![
            place("Golden Crust Bakery", "12 Mission St"),
            place("golden crust bakery", "12 Mission St"),
            place("Golden Crust Bakery", "900 Valencia St"),
        ];

        let deduped = dedupe_places(places);

        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].formatted_address, "12 Mission St");
        assert_eq!(deduped[1].formatted_address, "900 Valencia St");
    }
}
