use actix_web::{middleware::Logger, App, HttpServer};
use dotenvy::dotenv;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

use order_service::config::Config;
use order_service::repositories::postgres::PostgresOrderRepository;
use order_service::{routes, state};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let config = Config::from_env();

    // fatal if the store is unreachable
    let repo = PostgresOrderRepository::connect(&config.database_url()).await?;
    let state = state::AppState::new(repo);

    tracing::info!(port = config.listen_port, "order service listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::config)
    })
    .bind(("0.0.0.0", config.listen_port))?
    .run()
    .await?;

    Ok(())
}
