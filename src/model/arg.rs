use clap::{Parser, Subcommand};

/// Outline server management client
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Management API URL, overrides `apiUrl` from the config file
    #[arg(long)]
    pub api_url: Option<String>,

    /// Skip TLS certificate verification (self-signed servers)
    #[arg(long)]
    pub insecure: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show server info
    Info,
    /// Rename the server
    Rename { name: String },
    /// Change the hostname used in access key URLs
    Hostname { hostname: String },
    /// Change the default port for new access keys
    Port {
        #[arg(allow_negative_numbers = true)]
        port: i64,
    },
    /// Show or change metrics sharing
    MetricsEnabled {
        #[arg(long)]
        set: Option<bool>,
    },
    /// Set or remove the data limit for all access keys
    DataLimit {
        #[arg(required_unless_present = "reset", conflicts_with = "reset")]
        bytes: Option<u64>,
        #[arg(long)]
        reset: bool,
    },
    /// List access keys
    Keys,
    /// Show one access key
    Key { id: String },
    /// Create an access key
    New {
        #[arg(long, default_value = crate::outline::DEFAULT_METHOD)]
        method: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete an access key
    Delete { id: String },
    /// Delete every access key
    DeleteAll,
    /// Rename an access key
    RenameKey { id: String, name: String },
    /// Set or remove the data limit for one access key
    KeyLimit {
        id: String,
        #[arg(required_unless_present = "reset", conflicts_with = "reset")]
        bytes: Option<u64>,
        #[arg(long)]
        reset: bool,
    },
    /// Print a shareable access URL
    Url {
        id: String,
        label: Option<String>,
    },
    /// Show bytes transferred, in total or for one key
    Usage { id: Option<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_new_defaults() {
        let args = Args::try_parse_from(["outline-api", "new"]).unwrap();
        assert_eq!(
            args.command,
            Command::New {
                method: "aes-192-gcm".to_string(),
                name: None,
            }
        );
        assert!(!args.insecure);
    }

    #[test]
    fn test_parse_key_limit_reset() {
        let args = Args::try_parse_from(["outline-api", "key-limit", "3", "--reset"]).unwrap();
        assert_eq!(
            args.command,
            Command::KeyLimit {
                id: "3".to_string(),
                bytes: None,
                reset: true,
            }
        );
    }

    #[test]
    fn test_data_limit_requires_bytes_or_reset() {
        assert!(Args::try_parse_from(["outline-api", "data-limit"]).is_err());
        assert!(Args::try_parse_from(["outline-api", "data-limit", "10", "--reset"]).is_err());
    }

    #[test]
    fn test_parse_negative_port() {
        let args = Args::try_parse_from(["outline-api", "port", "-1"]).unwrap();
        assert_eq!(args.command, Command::Port { port: -1 });
    }

    #[test]
    fn test_global_flags() {
        let args = Args::try_parse_from([
            "outline-api",
            "--api-url",
            "https://127.0.0.1:8081/Secret",
            "--insecure",
            "url",
            "1",
            "office",
        ])
        .unwrap();
        assert_eq!(args.api_url.as_deref(), Some("https://127.0.0.1:8081/Secret"));
        assert!(args.insecure);
        assert_eq!(
            args.command,
            Command::Url {
                id: "1".to_string(),
                label: Some("office".to_string()),
            }
        );
    }
}
