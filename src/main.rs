use campaigns_api::models::config::ServerConfig;
use config::{Config, Environment, File};

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    Config::builder()
        .set_default("address", "127.0.0.1")?
        .set_default("port", 8080)?
        .set_default("database_url", "campaigns.db")?
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default())
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let server_config = load_config()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    campaigns_api::run(server_config).await
}
