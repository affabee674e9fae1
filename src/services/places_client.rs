use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::report::SearchParams;

// Google returns at most 20 results per page and rejects a next_page_token
// that is used before it becomes active.
const PAGE_TOKEN_DELAY: Duration = Duration::from_secs(2);

pub struct PlacesClient {
    client: Client,
    api_key: String,
    search_url: String,
    details_url: String,
}

#[derive(Serialize)]
struct TextSearchQuery {
    query: String,
    key: String,
}

#[derive(Serialize)]
struct NextPageQuery {
    pagetoken: String,
    key: String,
}

#[derive(Serialize)]
struct DetailsQuery {
    place_id: String,
    fields: &'static str,
    key: String,
}

#[derive(Debug, Deserialize)]
pub struct PlaceSummary {
    pub place_id: String,
    pub name: String,
    pub formatted_address: String,
}

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<PlaceSummary>,
    next_page_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlaceContact {
    pub formatted_phone_number: Option<String>,
    pub website: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    result: Option<PlaceContact>,
}

impl PlacesClient {
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::new();

        PlacesClient {
            client,
            api_key,
            search_url: "https://maps.googleapis.com/maps/api/place/textsearch/json".to_string(),
            details_url: "https://maps.googleapis.com/maps/api/place/details/json".to_string(),
        }
    }

    /// Text search for businesses matching the category in the given
    /// location. Follows pagination until `wanted` results are collected or
    /// the directory runs out of pages.
    pub async fn text_search(
        &self,
        params: &SearchParams,
        wanted: usize,
    ) -> anyhow::Result<Vec<PlaceSummary>> {
        let query = build_search_query(params);
        log::info!("Places text search: {}", query);

        let mut places: Vec<PlaceSummary> = vec![];
        let mut page_token: Option<String> = None;

        loop {
            let request = match page_token.take() {
                Some(pagetoken) => {
                    tokio::time::sleep(PAGE_TOKEN_DELAY).await;
                    self.client.get(&self.search_url).query(&NextPageQuery {
                        pagetoken,
                        key: self.api_key.clone(),
                    })
                }
                None => self.client.get(&self.search_url).query(&TextSearchQuery {
                    query: query.clone(),
                    key: self.api_key.clone(),
                }),
            };

            let response = request.send().await?.json::<TextSearchResponse>().await?;

            match response.status.as_str() {
                "OK" => {}
                "ZERO_RESULTS" => {
                    log::info!("No businesses found for query: {}", query);
                    break;
                }
                other => anyhow::bail!("Places text search returned status {}", other),
            }

            places.extend(response.results);
            log::info!("Collected {} places so far", places.len());

            match response.next_page_token {
                Some(token) if places.len() < wanted => page_token = Some(token),
                _ => break,
            }
        }

        Ok(places)
    }

    /// Contact fields for a single place. Callers treat a failure here as
    /// non-fatal; the summary row already carries name and address.
    pub async fn place_details(&self, place_id: &str) -> anyhow::Result<PlaceContact> {
        let response = self
            .client
            .get(&self.details_url)
            .query(&DetailsQuery {
                place_id: place_id.to_string(),
                fields: "formatted_phone_number,website,url",
                key: self.api_key.clone(),
            })
            .send()
            .await?
            .json::<DetailsResponse>()
            .await?;

        if response.status != "OK" {
            anyhow::bail!(
                "Place details for {} returned status {}",
                place_id,
                response.status
            );
        }

        Ok(response.result.unwrap_or_default())
    }
}

pub fn build_search_query(params: &SearchParams) -> String {
    format!(
        "{} in {}, {}, {}",
        params.category, params.city, params.state, params.country
    )
}
