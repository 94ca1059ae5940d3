mod assets;
mod config;
mod error;
mod pipeline;
mod services;
mod state;

use crate::assets::layout::AssetLayout;
use crate::config::Config;
use crate::pipeline::CopyPipeline;
use crate::state::TryOnState;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::load()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    let url = config.url();

    let layout = AssetLayout::new(&config.base_dir);
    layout.ensure_directories()?;
    info!("Storing assets under {}", layout.base_dir().display());

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    // Swap `CopyPipeline` for a model-backed pipeline once one exists.
    let state = web::Data::new(TryOnState::new(layout, Arc::new(CopyPipeline)));

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(services::configure)
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
