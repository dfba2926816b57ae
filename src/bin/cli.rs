//! Pulseboard CLI
//!
//! Command-line helpers for operating a Pulseboard server:
//! - Check server status
//! - Generate a default config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pulseboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Operator tools for the Pulseboard analytics dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, default_value = "http://localhost:8080", global = true)]
    pub url: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show server health and readiness
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Status => {
            let client = reqwest::Client::new();
            let base = cli.url.trim_end_matches('/');

            println!("Pulseboard CLI v{}", env!("CARGO_PKG_VERSION"));
            println!();

            match client.get(format!("{}/api/health", base)).send().await {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;
                    println!(
                        "Health:    {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                }
                Ok(resp) => {
                    println!("Health:    HTTP {}", resp.status());
                }
                Err(e) => {
                    eprintln!("Cannot reach {}: {}", base, e);
                    std::process::exit(1);
                }
            }

            // Readiness answers 503 with a body when the upstream is down
            let resp = client
                .get(format!("{}/api/health/ready", base))
                .send()
                .await?;
            let code = resp.status();
            let ready: serde_json::Value = resp.json().await.unwrap_or_default();

            println!(
                "Readiness: {} (HTTP {})",
                ready["status"].as_str().unwrap_or("unknown"),
                code.as_u16()
            );
            println!(
                "Upstream:  {}",
                ready["upstream"].as_str().unwrap_or("unknown")
            );
            if let Some(version) = ready["version"].as_str() {
                println!("Version:   {}", version);
            }
            if let Some(uptime) = ready["uptime_seconds"].as_u64() {
                println!("Uptime:    {}", format_duration(uptime));
            }
        }

        Commands::Config { output } => {
            let config = pulseboard::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn format_duration(seconds: u64) -> String {
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(42), "42s");
        assert_eq!(format_duration(125), "2m 5s");
        assert_eq!(format_duration(3 * 3600 + 60), "3h 1m");
        assert_eq!(format_duration(2 * 86400 + 3600), "2d 1h 0m");
    }

    #[test]
    fn test_cli_parses_status() {
        let cli = Cli::try_parse_from(["pulseboard", "status", "--url", "http://host:1"]).unwrap();
        assert!(matches!(cli.command, Commands::Status));
        assert_eq!(cli.url, "http://host:1");
    }
}
