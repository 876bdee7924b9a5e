use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};

use stroke_trail::args;
use stroke_trail::controller::entry::{self, SessionStore};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();
    let store = Data::new(SessionStore::new());
    let static_dir = args.static_dir.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .route("/", web::get().to(entry::entry_page))
            .route("/round", web::post().to(entry::submit_round))
            .route("/holes", web::post().to(entry::submit_holes))
            .route("/shots", web::post().to(entry::submit_shots))
            .route("/export", web::get().to(entry::export_csv))
            .route("/export/preview", web::get().to(entry::export_preview))
            .route("/state", web::get().to(entry::session_state))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind((args.bind_addr.as_str(), args.bind_port));

    match server {
        Ok(server) => {
            server.run().await?;
            Ok(())
        }
        Err(e) => {
            eprintln!("Error binding {}:{}: {e}", args.bind_addr, args.bind_port);
            std::process::exit(1);
        }
    }
}
