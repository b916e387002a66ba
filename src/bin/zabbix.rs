use anyhow::Result;
use chrono::DateTime;
use clap::{Parser, Subcommand};
use serde_json::json;
use zabbix_rs::constants::TRIGGER_SEVERITY_DISASTER;
use zabbix_rs::{Config, ZabbixApiClient};

#[derive(Parser)]
#[command(name = "zabbix")]
#[command(about = "Zabbix API CLI tool", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Show the server API version
    zabbix version

    # List monitored hosts
    zabbix hosts

    # List current problems, most recent first
    zabbix problems

    # List triggers for one host
    zabbix triggers --host 'Zabbix server'")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the server API version
    Version,

    /// List monitored hosts
    Hosts,

    /// List current problems
    Problems {
        /// Minimum severity (0-5)
        #[arg(short, long)]
        severity: Option<u8>,
    },

    /// List triggers
    Triggers {
        /// Limit to one host by its visible name
        #[arg(long)]
        host: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zabbix_rs=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_path(&cli.config)?;
    let mut client = ZabbixApiClient::new(config)?;

    if let Commands::Version = cli.command {
        println!("{}", client.api_version().await?);
        return Ok(());
    }

    client.login().await?;

    match cli.command {
        Commands::Version => unreachable!(),
        Commands::Hosts => {
            let hosts = client
                .host_get(json!({
                    "output": ["hostid", "host", "name", "status"],
                    "monitored_hosts": true,
                    "sortfield": "host",
                }))
                .await?;
            for host in hosts.as_array().into_iter().flatten() {
                println!(
                    "{:>8}  {}",
                    host["hostid"].as_str().unwrap_or("-"),
                    host["name"].as_str().unwrap_or("-"),
                );
            }
        }
        Commands::Problems { severity } => {
            let mut params = json!({
                "output": "extend",
                "recent": true,
                "sortfield": ["eventid"],
                "sortorder": "DESC",
            });
            if let Some(severity) = severity {
                let severities: Vec<i32> = (i32::from(severity)..=TRIGGER_SEVERITY_DISASTER).collect();
                params["severities"] = json!(severities);
            }
            let problems = client.problem_get(params).await?;
            for problem in problems.as_array().into_iter().flatten() {
                let clock = problem["clock"]
                    .as_str()
                    .and_then(|s| s.parse::<i64>().ok())
                    .and_then(|ts| DateTime::from_timestamp(ts, 0))
                    .map(|dt| dt.to_rfc3339())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{}  [{}]  {}",
                    clock,
                    problem["severity"].as_str().unwrap_or("?"),
                    problem["name"].as_str().unwrap_or("-"),
                );
            }
        }
        Commands::Triggers { host } => {
            let mut params = json!({
                "output": ["triggerid", "description", "priority", "status"],
                "expandDescription": true,
                "sortfield": "description",
            });
            if let Some(host) = host {
                params["host"] = json!(host);
            }
            let triggers = client.trigger_get(params).await?;
            for trigger in triggers.as_array().into_iter().flatten() {
                println!(
                    "{:>8}  sev={}  {}",
                    trigger["triggerid"].as_str().unwrap_or("-"),
                    trigger["priority"].as_str().unwrap_or("?"),
                    trigger["description"].as_str().unwrap_or("-"),
                );
            }
        }
    }

    client.logout().await?;
    Ok(())
}
