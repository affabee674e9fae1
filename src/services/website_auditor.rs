use std::time::{Duration, Instant};

use fake_user_agent::get_rua;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::domain::business::{LoadSpeed, SocialMedia, WebsiteQuality};

const FETCH_TIMEOUT: Duration = Duration::from_secs(20);
const FAST_LOAD: Duration = Duration::from_millis(1000);
const SLOW_LOAD: Duration = Duration::from_millis(3000);

pub struct WebsiteAuditor {
    client: Client,
}

/// Everything learned from one visit to a lead's website: the quality
/// assessment plus any contact data found on the page.
pub struct WebsiteAudit {
    pub quality: WebsiteQuality,
    pub email: Option<String>,
    pub social: Option<SocialMedia>,
}

impl WebsiteAudit {
    /// Assessment for a site that exists in the directory but did not answer.
    pub fn unreachable() -> Self {
        WebsiteAudit {
            quality: WebsiteQuality {
                score: 0,
                mobile_responsive: false,
                load_speed: LoadSpeed::Slow,
                has_ssl: false,
                modern_design: false,
                has_contact_form: false,
                has_social_links: false,
                last_updated: None,
                issues: vec!["Website could not be reached".to_string()],
            },
            email: None,
            social: None,
        }
    }
}

impl Default for WebsiteAuditor {
    fn default() -> Self {
        Self::new()
    }
}

impl WebsiteAuditor {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(get_rua())
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap();

        WebsiteAuditor { client }
    }

    pub async fn audit(&self, website: &str) -> anyhow::Result<WebsiteAudit> {
        log::info!("Auditing website: {}", website);

        let started = Instant::now();
        let response = self.client.get(website).send().await?.error_for_status()?;
        let elapsed = started.elapsed();

        let has_ssl = response.url().scheme() == "https";
        let last_updated = response
            .headers()
            .get(reqwest::header::LAST_MODIFIED)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        let body = response.text().await?;

        let checks = analyze_document(&body);
        let load_speed = classify_load_speed(elapsed);
        let quality = build_quality(has_ssl, load_speed, last_updated, &checks);

        log::info!(
            "Audit of {} scored {} with {} issues",
            website,
            quality.score,
            quality.issues.len()
        );

        let DocumentChecks { email, social, .. } = checks;
        let social = match social.is_empty() {
            true => None,
            false => Some(social),
        };

        Ok(WebsiteAudit {
            quality,
            email,
            social,
        })
    }
}

#[derive(Debug)]
pub struct DocumentChecks {
    pub mobile_responsive: bool,
    pub has_contact_form: bool,
    pub modern_design: bool,
    pub email: Option<String>,
    pub social: SocialMedia,
}

impl DocumentChecks {
    pub fn has_social_links(&self) -> bool {
        !self.social.is_empty()
    }
}

/// Static inspection of the fetched page. Network-free so the heuristics can
/// be exercised against fixture markup.
pub fn analyze_document(html: &str) -> DocumentChecks {
    let viewport_selector = Selector::parse(r#"meta[name="viewport"]"#).unwrap();
    let stylesheet_selector = Selector::parse(r#"link[rel="stylesheet"], style"#).unwrap();
    let deprecated_selector = Selector::parse("font, center, marquee, frameset").unwrap();
    let form_field_selector =
        Selector::parse("form input, form textarea, form select").unwrap();
    let a_tag_selector = Selector::parse("a").unwrap();

    let document = Html::parse_document(html);

    let mobile_responsive = document.select(&viewport_selector).next().is_some();
    let has_stylesheet = document.select(&stylesheet_selector).next().is_some();
    let has_deprecated_tags = document.select(&deprecated_selector).next().is_some();
    let has_form_fields = document.select(&form_field_selector).next().is_some();

    let hrefs: Vec<String> = document
        .select(&a_tag_selector)
        .filter_map(|tag| tag.value().attr("href").map(|href| href.to_string()))
        .collect();

    let has_contact_link = hrefs.iter().any(|href| href.to_lowercase().contains("contact"));
    let email = hrefs.iter().find_map(|href| {
        href.strip_prefix("mailto:")
            .map(|address| address.split('?').next().unwrap_or(address).to_string())
            .filter(|address| !address.is_empty())
    });

    let social = SocialMedia {
        facebook: first_link_to(&hrefs, "facebook.com"),
        instagram: first_link_to(&hrefs, "instagram.com"),
        linkedin: first_link_to(&hrefs, "linkedin.com"),
    };

    DocumentChecks {
        mobile_responsive,
        has_contact_form: has_form_fields || has_contact_link,
        modern_design: has_stylesheet && !has_deprecated_tags,
        email,
        social,
    }
}

fn first_link_to(hrefs: &[String], host: &str) -> Option<String> {
    hrefs
        .iter()
        .find(|href| {
            url::Url::parse(href)
                .ok()
                .and_then(|parsed| parsed.host_str().map(|h| h.to_string()))
                .is_some_and(|h| h == host || h.ends_with(&format!(".{}", host)))
        })
        .cloned()
}

pub fn classify_load_speed(elapsed: Duration) -> LoadSpeed {
    if elapsed < FAST_LOAD {
        LoadSpeed::Fast
    } else if elapsed < SLOW_LOAD {
        LoadSpeed::Medium
    } else {
        LoadSpeed::Slow
    }
}

fn build_quality(
    has_ssl: bool,
    load_speed: LoadSpeed,
    last_updated: Option<String>,
    checks: &DocumentChecks,
) -> WebsiteQuality {
    let mut issues: Vec<String> = vec![];
    if !has_ssl {
        issues.push("No SSL certificate".to_string());
    }
    if load_speed == LoadSpeed::Slow {
        issues.push("Slow page load".to_string());
    }
    if !checks.mobile_responsive {
        issues.push("Not mobile responsive".to_string());
    }
    if !checks.modern_design {
        issues.push("Outdated design patterns".to_string());
    }
    if !checks.has_contact_form {
        issues.push("No contact form".to_string());
    }
    if !checks.has_social_links() {
        issues.push("No social media links".to_string());
    }

    WebsiteQuality {
        score: quality_score(
            has_ssl,
            checks.mobile_responsive,
            load_speed,
            checks.modern_design,
            checks.has_contact_form,
            checks.has_social_links(),
        ),
        mobile_responsive: checks.mobile_responsive,
        load_speed,
        has_ssl,
        modern_design: checks.modern_design,
        has_contact_form: checks.has_contact_form,
        has_social_links: checks.has_social_links(),
        last_updated,
        issues,
    }
}

pub fn quality_score(
    has_ssl: bool,
    mobile_responsive: bool,
    load_speed: LoadSpeed,
    modern_design: bool,
    has_contact_form: bool,
    has_social_links: bool,
) -> u8 {
    let mut score: i32 = 100;
    if !has_ssl {
        score -= 25;
    }
    if !mobile_responsive {
        score -= 25;
    }
    score -= match load_speed {
        LoadSpeed::Fast => 0,
        LoadSpeed::Medium => 10,
        LoadSpeed::Slow => 20,
    };
    if !modern_design {
        score -= 10;
    }
    if !has_contact_form {
        score -= 10;
    }
    if !has_social_links {
        score -= 10;
    }

    score.max(0) as u8
}
