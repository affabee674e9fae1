use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::{
    domain::report::{LeadReport, SearchParams, DEFAULT_LEAD_COUNT},
    services::BusinessSearchEngine,
};

/// Raw request body before validation. Every field is optional here so that
/// absent, null, and empty all funnel through the same rejection path.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequestBody {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub lead_count: Option<u32>,
}

/// Validates the four required fields and defaults the lead count. The 5-50
/// range shown in the form is a hint only; out-of-range counts pass through
/// unchecked.
pub fn normalized_params(body: SearchRequestBody) -> Option<SearchParams> {
    let city = body.city.filter(|f| !f.is_empty())?;
    let state = body.state.filter(|f| !f.is_empty())?;
    let country = body.country.filter(|f| !f.is_empty())?;
    let category = body.category.filter(|f| !f.is_empty())?;
    let lead_count = body
        .lead_count
        .filter(|count| *count != 0)
        .unwrap_or(DEFAULT_LEAD_COUNT);

    Some(SearchParams {
        city,
        state,
        country,
        category,
        lead_count,
    })
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

#[post("")]
async fn search(
    engine: web::Data<BusinessSearchEngine>,
    body: web::Json<SearchRequestBody>,
) -> HttpResponse {
    let params = match normalized_params(body.into_inner()) {
        Some(params) => params,
        None => {
            return HttpResponse::BadRequest().json(ErrorBody {
                error: "Missing required fields",
            })
        }
    };

    match engine.search_businesses(&params).await {
        Ok(leads) => HttpResponse::Ok().json(LeadReport::build(params, leads)),
        Err(e) => {
            log::error!("Search failed for {:?}: {:?}", params, e);
            HttpResponse::InternalServerError().json(ErrorBody {
                error: "Search failed",
            })
        }
    }
}
