use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::business::{BusinessData, Opportunity, WebsiteStatus};

pub const DEFAULT_LEAD_COUNT: u32 = 10;

/// Normalized search input. `lead_count` has already been defaulted, so it is
/// always present here even though it is optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub city: String,
    pub state: String,
    pub country: String,
    pub category: String,
    pub lead_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSummary {
    pub no_website: usize,
    pub poor_website: usize,
    pub high_opportunity: usize,
    pub medium_opportunity: usize,
    pub low_opportunity: usize,
}

impl LeadSummary {
    pub fn from_leads(leads: &[BusinessData]) -> Self {
        LeadSummary {
            no_website: leads
                .iter()
                .filter(|l| l.website_status == WebsiteStatus::None)
                .count(),
            poor_website: leads
                .iter()
                .filter(|l| l.website_quality.as_ref().is_some_and(|q| q.score < 50))
                .count(),
            high_opportunity: leads
                .iter()
                .filter(|l| l.opportunity == Opportunity::High)
                .count(),
            medium_opportunity: leads
                .iter()
                .filter(|l| l.opportunity == Opportunity::Medium)
                .count(),
            low_opportunity: leads
                .iter()
                .filter(|l| l.opportunity == Opportunity::Low)
                .count(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadReport {
    pub search_params: SearchParams,
    pub timestamp: String,
    pub total_leads: usize,
    pub leads: Vec<BusinessData>,
    pub summary: LeadSummary,
}

impl LeadReport {
    /// Builds a report from the search results. Reports are immutable once
    /// built; `total_leads` and the summary counts are derived here and
    /// nowhere else.
    pub fn build(search_params: SearchParams, leads: Vec<BusinessData>) -> Self {
        let summary = LeadSummary::from_leads(&leads);
        LeadReport {
            search_params,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            total_leads: leads.len(),
            leads,
            summary,
        }
    }
}
