use chrono::NaiveDate;
use itertools::Itertools;

use crate::domain::business::BusinessData;

pub const CSV_HEADERS: [&str; 9] = [
    "Business Name",
    "Address",
    "Phone",
    "Email",
    "Website",
    "Website Status",
    "Quality Score",
    "Opportunity Level",
    "Google Maps",
];

/// Renders the lead list as CSV: a fixed header row, then one row per lead
/// with every cell double-quoted and comma-joined.
pub fn render_csv(leads: &[BusinessData]) -> String {
    let header = CSV_HEADERS.join(",");
    let rows = leads.iter().map(csv_row);

    std::iter::once(header).chain(rows).join("\n")
}

fn csv_row(lead: &BusinessData) -> String {
    let quality_score = lead
        .website_quality
        .as_ref()
        .map(|q| q.score)
        .unwrap_or(0)
        .to_string();

    let cells = [
        lead.name.as_str(),
        lead.address.as_str(),
        lead.phone.as_deref().unwrap_or("N/A"),
        lead.email.as_deref().unwrap_or("N/A"),
        lead.website.as_deref().unwrap_or("None"),
        lead.website_status.as_str(),
        quality_score.as_str(),
        lead.opportunity.as_str(),
        lead.google_maps_url.as_deref().unwrap_or("N/A"),
    ];

    cells.iter().map(|cell| format!("\"{}\"", cell)).join(",")
}

/// Filename uses the date at export time, not the report timestamp.
pub fn csv_filename(date: NaiveDate) -> String {
    format!("leads-{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::business::{
        LoadSpeed, Opportunity, WebsiteQuality, WebsiteStatus,
    };

    fn bare_lead() -> BusinessData {
        BusinessData {
            id: "b1".to_string(),
            name: "Rosewater Salon".to_string(),
            address: "44 Pine Ave, Oakland".to_string(),
            phone: None,
            email: None,
            website: None,
            google_maps_url: None,
            category: "Salon & Spa".to_string(),
            social_media: None,
            website_status: WebsiteStatus::None,
            website_quality: None,
            score: 95,
            opportunity: Opportunity::High,
        }
    }

    #[test]
    fn header_row_has_the_nine_fixed_columns() {
        let csv = render_csv(&[]);

        assert_eq!(
            csv,
            "Business Name,Address,Phone,Email,Website,Website Status,Quality Score,Opportunity Level,Google Maps"
        );
    }

    #[test]
    fn missing_contact_fields_fall_back_to_literals() {
        let csv = render_csv(&[bare_lead()]);
        let row = csv.lines().nth(1).unwrap();

        assert_eq!(
            row,
            "\"Rosewater Salon\",\"44 Pine Ave, Oakland\",\"N/A\",\"N/A\",\"None\",\"none\",\"0\",\"high\",\"N/A\""
        );
    }

    #[test]
    fn populated_lead_renders_every_cell_quoted() {
        let mut lead = bare_lead();
        lead.phone = Some("(510) 555-0143".to_string());
        lead.email = Some("hello@rosewater.example".to_string());
        lead.website = Some("https://rosewater.example".to_string());
        lead.google_maps_url = Some("https://maps.google.com/?cid=7".to_string());
        lead.website_status = WebsiteStatus::Found;
        lead.opportunity = Opportunity::Low;
        lead.website_quality = Some(WebsiteQuality {
            score: 82,
            mobile_responsive: true,
            load_speed: LoadSpeed::Fast,
            has_ssl: true,
            modern_design: true,
            has_contact_form: true,
            has_social_links: false,
            last_updated: None,
            issues: vec!["No social media links".to_string()],
        });

        let csv = render_csv(&[lead]);
        let row = csv.lines().nth(1).unwrap();

        assert_eq!(
            row,
            "\"Rosewater Salon\",\"44 Pine Ave, Oakland\",\"(510) 555-0143\",\"hello@rosewater.example\",\"https://rosewater.example\",\"found\",\"82\",\"low\",\"https://maps.google.com/?cid=7\""
        );
    }

    #[test]
    fn one_record_per_lead_joined_with_newlines() {
        let csv = render_csv(&[bare_lead(), bare_lead()]);

        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn filename_embeds_the_export_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();

        assert_eq!(csv_filename(date), "leads-2026-08-07.csv");
    }
}
