use std::net::TcpListener;

use env_logger::Env;
use prospect::{
    configuration::get_configuration,
    services::{BusinessSearchEngine, PlacesClient},
    startup::run,
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;

    let places_client = PlacesClient::new(configuration.api_keys.places);
    let search_engine = BusinessSearchEngine::new(places_client);

    run(listener, search_engine)?.await
}
