use anyhow::Result;
use serde_json::json;
use tracing::info;
use zabbix_rs::{Config, ZabbixApiClient};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Zabbix Host Listing Example Starting...");

    let config = Config::new()?;
    let mut client = ZabbixApiClient::new(config)?;

    info!("Server API version: {}", client.api_version().await?);

    client.login().await?;
    info!("Successfully logged in");

    let hosts = client
        .host_get(json!({
            "output": ["hostid", "host", "name", "status", "available"],
            "selectInterfaces": ["ip", "dns", "port"],
        }))
        .await?;

    for host in hosts.as_array().into_iter().flatten() {
        info!(
            "Host {} ({}): status={}",
            host["name"], host["hostid"], host["status"]
        );
    }

    client.logout().await?;
    info!("Host Listing Example Completed");
    Ok(())
}
