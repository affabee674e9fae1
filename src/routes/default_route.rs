use actix_web::{get, HttpResponse};
use askama::Template;

pub const CATEGORIES: [&str; 20] = [
    "Restaurant",
    "Salon & Spa",
    "Gym & Fitness",
    "Boutique & Retail",
    "Coaching Classes",
    "Medical Clinic",
    "Dental Clinic",
    "Real Estate",
    "Auto Repair",
    "Plumbing Services",
    "Electrical Services",
    "Bakery",
    "Cafe",
    "Barber Shop",
    "Pet Services",
    "Cleaning Services",
    "Photography",
    "Event Planning",
    "Consulting",
    "Other",
];

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub categories: &'static [&'static str],
    pub error: Option<String>,
}

impl IndexTemplate {
    pub fn new(error: Option<String>) -> Self {
        IndexTemplate {
            categories: &CATEGORIES,
            error,
        }
    }
}

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok().body(IndexTemplate::new(None).render().unwrap())
}
