use std::io;

use dotenvy::dotenv;
use order_catalog::{build_server, create_pool, run_migrations, seed_sample_data, AppConfig};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(io::Error::other)?;

    let pool = create_pool(&config.database_url, config.pool_size).map_err(io::Error::other)?;
    run_migrations(&pool).map_err(io::Error::other)?;

    if config.seed_sample_data && seed_sample_data(&pool).map_err(io::Error::other)? {
        log::info!("Inserted sample orders");
    }

    log::info!(
        "Starting server at http://{}:{} (pool size {}, batch fetch size {})",
        config.host,
        config.port,
        config.pool_size,
        config.batch_fetch_size
    );

    build_server(pool, &config)?.await
}
