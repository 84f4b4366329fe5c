use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use log::info;

use downtime_predictor::{api, AppConfig};

#[actix_rt::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env()?;
    let addr = config.bind_addr();
    let storage = web::Data::new(config.storage.clone());

    info!(
        "dataset at {}, model at {}",
        config.storage.dataset().display(),
        config.storage.model().display()
    );

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(storage.clone())
            .configure(api::configure)
    })
    .bind(&addr)
    .with_context(|| format!("failed to bind {addr}"))?;

    info!("listening at {addr}");
    server.run().await?;

    Ok(())
}
