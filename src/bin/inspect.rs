use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

const SECTIONS: [&str; 9] = [
    "headers",
    "environment",
    "request",
    "cloudflare",
    "traefik",
    "remoteInfo",
    "serverInfo",
    "tls",
    "cookies",
];

#[derive(Parser)]
#[command(name = "inspect")]
#[command(about = "Fetch a debug report from a running request inspector", long_about = None)]
struct Cli {
    /// Base URL of the inspector, usually the public URL behind the proxy chain.
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    /// Extra request header as `Name: value`. Repeatable.
    #[arg(short = 'H', long = "header")]
    headers: Vec<String>,

    /// Accept self-signed or otherwise invalid certificates.
    #[arg(short = 'k', long)]
    insecure: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the whole report
    Report,
    /// Print a single section of the report
    Section {
        /// One of headers, environment, request, cloudflare, traefik,
        /// remoteInfo, serverInfo, tls, cookies
        name: String,
    },
}

fn parse_header(raw: &str) -> Result<(HeaderName, HeaderValue), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("header '{}' is not in 'Name: value' form", raw))?;
    let name = HeaderName::from_bytes(name.trim().as_bytes())
        .map_err(|e| format!("invalid header name '{}': {}", name.trim(), e))?;
    let value = HeaderValue::from_str(value.trim())
        .map_err(|e| format!("invalid value for '{}': {}", name, e))?;
    Ok((name, value))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut headers = HeaderMap::new();
    for raw in &cli.headers {
        let (name, value) = parse_header(raw)?;
        headers.append(name, value);
    }

    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(cli.insecure)
        .build()?;

    let res = client
        .get(format!("{}/api/debug-info", cli.url.trim_end_matches('/')))
        .headers(headers)
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: inspector returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    let report: Value = res.json().await?;

    let output = match cli.command {
        Commands::Report => report,
        Commands::Section { name } => match report.get(&name) {
            Some(section) => section.clone(),
            None => {
                eprintln!(
                    "Error: unknown section '{}', expected one of: {}",
                    name,
                    SECTIONS.join(", ")
                );
                std::process::exit(2);
            }
        },
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
