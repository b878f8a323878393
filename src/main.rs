use anyhow::Context;
use clap::Parser;

use outline_api::model::arg::{Args, Command};
use outline_api::model::config::Config;
use outline_api::{AccessKey, OutlineClient};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| Config::default_config_path().to_string());
    let mut config = Config::load(&config_path).unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {}", e);
        std::process::exit(1);
    });

    if args.insecure {
        config.verify_tls = false;
    }

    let Some(api_url) = args.api_url.clone().or_else(|| config.api_url.clone()) else {
        tracing::error!("apiUrl not set in config file and --api-url not given");
        std::process::exit(1);
    };

    let client = OutlineClient::with_config(&api_url, &config).unwrap_or_else(|e| {
        tracing::error!("Failed to connect to Outline server: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = run(&client, args.command) {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn print_key(key: &AccessKey<'_>) {
    let limit = key
        .data_limit()
        .map(|l| format!("{} bytes", l.bytes))
        .unwrap_or_else(|| "none".to_string());
    println!(
        "{}\t{}\tport {}\t{}\tlimit {}",
        key.id(),
        key.name(),
        key.port(),
        key.method(),
        limit
    );
}

fn run(client: &OutlineClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Info => {
            let info = client.server_info();
            println!("Name:      {}", info.name);
            println!("Server ID: {}", info.server_id);
            println!("Version:   {}", info.version);
            if let Some(created) = info.created_at() {
                println!("Created:   {}", created.to_rfc3339());
            }
            println!("Hostname:  {}", info.hostname_for_keys);
            println!("Key port:  {}", info.port_for_new_keys);
            if let Some(limit) = info.access_key_data_limit {
                println!("Key limit: {} bytes", limit.bytes);
            }
        }
        Command::Rename { name } => client.rename(&name)?,
        Command::Hostname { hostname } => client.change_hostname(&hostname)?,
        Command::Port { port } => client.change_port(port)?,
        Command::MetricsEnabled { set: Some(enabled) } => client.set_metrics_enabled(enabled)?,
        Command::MetricsEnabled { set: None } => println!("{}", client.metrics_enabled()?),
        Command::DataLimit { reset: true, .. } => client.reset_data_limit()?,
        Command::DataLimit { bytes, .. } => {
            let bytes = bytes.context("data limit in bytes is required")?;
            client.change_data_limit(bytes)?;
        }
        Command::Keys => {
            for key in client.keys()? {
                print_key(&key);
            }
        }
        Command::Key { id } => {
            let key = client.key(&id)?;
            print_key(&key);
            println!("{}", key.url(""));
        }
        Command::New { method, name } => {
            let key = client.create_key(&method, name.as_deref().unwrap_or(""))?;
            print_key(&key);
            println!("{}", key.url(""));
        }
        Command::Delete { id } => client.delete_key(&id)?,
        Command::DeleteAll => {
            let count = client.delete_all_keys()?;
            println!("Deleted {} access keys", count);
        }
        Command::RenameKey { id, name } => client.rename_key(&id, &name)?,
        Command::KeyLimit { id, reset: true, .. } => client.reset_data_limit_for_key(&id)?,
        Command::KeyLimit { id, bytes, .. } => {
            let bytes = bytes.context("data limit in bytes is required")?;
            client.change_data_limit_for_key(&id, bytes)?;
        }
        Command::Url { id, label } => {
            let key = client.key(&id)?;
            println!("{}", key.url(label.as_deref().unwrap_or("")));
        }
        Command::Usage { id: Some(id) } => println!("{}", client.metrics()?.by_key(&id)),
        Command::Usage { id: None } => println!("{}", client.metrics()?.total()),
    }
    Ok(())
}
