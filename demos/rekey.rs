use anyhow::Result;
use serde_json::json;
use tracing::info;
use zabbix_rs::constants::API_OUTPUT_EXTEND;
use zabbix_rs::{Config, ZabbixApiClient};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Zabbix Re-keying Example Starting...");

    let config = Config::new()?;
    let mut client = ZabbixApiClient::new(config)?;
    client.login().await?;

    // host.get normally returns a list; re-key it into a map by hostid so
    // single hosts can be looked up directly.
    let hosts_by_id = client
        .call_re_keyed("host.get", json!({ "output": API_OUTPUT_EXTEND }), "hostid")
        .await?;

    for (hostid, host) in &hosts_by_id {
        info!("{} -> {}", hostid, host["name"]);
    }

    client.logout().await?;
    info!("Re-keying Example Completed");
    Ok(())
}
