use actix_web::{get, http::header, post, web, HttpResponse};
use askama::Template;
use chrono::Utc;
use serde::Deserialize;

use crate::{
    domain::{
        business::BusinessData,
        report::{LeadReport, SearchParams},
    },
    routes::{
        default_route::IndexTemplate,
        search_route::{normalized_params, SearchRequestBody},
    },
    services::{csv_filename, render_csv, BusinessSearchEngine},
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFormBody {
    city: String,
    state: String,
    country: String,
    category: String,
    #[serde(default)]
    lead_count: String,
}

impl SearchFormBody {
    /// Form fields arrive as strings; the lead count mirrors the original
    /// client's integer parsing with a fallback of 10.
    fn into_request_body(self) -> SearchRequestBody {
        SearchRequestBody {
            city: Some(self.city),
            state: Some(self.state),
            country: Some(self.country),
            category: Some(self.category),
            lead_count: self.lead_count.parse().ok(),
        }
    }
}

pub struct LeadCardView {
    pub name: String,
    pub category: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub maps_url: Option<String>,
    pub has_website: bool,
    pub quality_score: Option<u8>,
    pub issues: Vec<String>,
    pub opportunity_label: String,
    pub badge_class: &'static str,
}

impl From<&BusinessData> for LeadCardView {
    fn from(lead: &BusinessData) -> Self {
        LeadCardView {
            name: lead.name.clone(),
            category: lead.category.clone(),
            address: lead.address.clone(),
            phone: lead.phone.clone(),
            email: lead.email.clone(),
            website: lead.website.clone(),
            maps_url: lead.google_maps_url.clone(),
            has_website: lead.website.is_some(),
            quality_score: lead.website_quality.as_ref().map(|q| q.score),
            issues: lead
                .website_quality
                .as_ref()
                .map(|q| q.issues.clone())
                .unwrap_or_default(),
            opportunity_label: lead.opportunity.as_str().to_uppercase(),
            badge_class: badge_class(lead.opportunity.as_str()),
        }
    }
}

pub fn badge_class(opportunity: &str) -> &'static str {
    match opportunity {
        "high" => "badge badge-green",
        "medium" => "badge badge-yellow",
        "low" => "badge badge-red",
        _ => "badge badge-gray",
    }
}

#[derive(Template)]
#[template(path = "report.html")]
pub struct ReportTemplate {
    pub report: LeadReport,
    pub cards: Vec<LeadCardView>,
    pub export_query: String,
}

impl ReportTemplate {
    pub fn new(report: LeadReport) -> Self {
        let cards = report.leads.iter().map(LeadCardView::from).collect();
        let export_query = export_query(&report.search_params);
        ReportTemplate {
            report,
            cards,
            export_query,
        }
    }
}

/// Query string for the CSV download link, reproducing the search that built
/// the report.
fn export_query(params: &SearchParams) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("city", &params.city)
        .append_pair("state", &params.state)
        .append_pair("country", &params.country)
        .append_pair("category", &params.category)
        .append_pair("leadCount", &params.lead_count.to_string())
        .finish()
}

#[post("/search")]
async fn search_page(
    engine: web::Data<BusinessSearchEngine>,
    form: web::Form<SearchFormBody>,
) -> HttpResponse {
    let params = match normalized_params(form.into_inner().into_request_body()) {
        Some(params) => params,
        None => {
            let page = IndexTemplate::new(Some("Missing required fields".to_string()));
            return HttpResponse::BadRequest().body(page.render().unwrap());
        }
    };

    match engine.search_businesses(&params).await {
        Ok(leads) => {
            let report = LeadReport::build(params, leads);
            HttpResponse::Ok().body(ReportTemplate::new(report).render().unwrap())
        }
        Err(e) => {
            log::error!("Search failed for {:?}: {:?}", params, e);
            let page = IndexTemplate::new(Some("Search failed".to_string()));
            HttpResponse::InternalServerError().body(page.render().unwrap())
        }
    }
}

#[get("/search/export")]
async fn export_csv(
    engine: web::Data<BusinessSearchEngine>,
    query: web::Query<SearchRequestBody>,
) -> HttpResponse {
    let params = match normalized_params(query.into_inner()) {
        Some(params) => params,
        None => {
            return HttpResponse::BadRequest()
                .json(serde_json::json!({"error": "Missing required fields"}))
        }
    };

    match engine.search_businesses(&params).await {
        Ok(leads) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!(
                    "attachment; filename=\"{}\"",
                    csv_filename(Utc::now().date_naive())
                ),
            ))
            .body(render_csv(&leads)),
        Err(e) => {
            log::error!("CSV export failed for {:?}: {:?}", params, e);
            HttpResponse::InternalServerError().json(serde_json::json!({"error": "Search failed"}))
        }
    }
}
