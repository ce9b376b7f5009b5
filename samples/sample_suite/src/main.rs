mod config;
mod scenarios;

use personio_client::config::ClientConfig;
use personio_client::{Credentials, LogLevel, ServiceClient};

use config::load_secrets;

#[tokio::main]
async fn main() -> Result<(), String> {
    let secrets = load_secrets()?;

    let mut config = ClientConfig::default().with_log_level(LogLevel::Information);
    if let Some(base_url) = &secrets.base_url {
        config = config.with_base_url(base_url.as_str());
    }

    let credentials = Credentials::new(&secrets.client_id, &secrets.client_secret);
    let client = ServiceClient::with_config(credentials, config).map_err(|e| e.to_string())?;

    scenarios::employees::run(&client, &secrets).await?;
    scenarios::timeoffs::run(&client, &secrets).await?;

    Ok(())
}
