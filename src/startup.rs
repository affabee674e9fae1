use std::net::TcpListener;

use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    routes::{default_route, report_route, search_route},
    services::BusinessSearchEngine,
};

pub fn run(
    listener: TcpListener,
    search_engine: BusinessSearchEngine,
) -> Result<Server, std::io::Error> {
    let search_engine = web::Data::new(search_engine);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(default_route::index)
            .service(report_route::search_page)
            .service(report_route::export_csv)
            .service(web::scope("/api/search").service(search_route::search))
            .app_data(search_engine.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
