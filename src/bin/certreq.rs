//! Terminal client for the certificate API.
//!
//! Runs the same request workflow as the web page: load the permitted
//! domains, pick a server name and subzone, request the certificate and
//! show (or save) the certificate and private key.
//!
//! # Usage
//!
//! ```bash
//! # Show permitted domains
//! cargo run --bin certreq -- domains
//!
//! # Request interactively
//! cargo run --bin certreq -- request
//!
//! # Request non-interactively and save to files
//! cargo run --bin certreq -- request --server foo --subzone .example.com -y --write
//!
//! # Show the API listing
//! cargo run --bin certreq -- list
//! ```
//!
//! # Environment Variables
//!
//! - `API_ENDPOINT`: Base URL of the certificate API (overridden by `--endpoint`)
//! - `CERT_VALID_FOR_DAYS`, `API_TIMEOUT_SECONDS`, `API_RETRY_ATTEMPTS`: as for the server

use certmgr_web::application::services::CertificateService;
use certmgr_web::config;
use certmgr_web::domain::entities::{DEFAULT_VALID_FOR_DAYS, IssuedCertificate};
use certmgr_web::infrastructure::http::HttpCertificateApi;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Select};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// CLI tool for requesting certificates.
#[derive(Parser)]
#[command(name = "certreq")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Certificate API base URL
    #[arg(short, long, env = "API_ENDPOINT")]
    endpoint: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List permitted domains
    Domains,

    /// Request a certificate
    Request {
        /// Server part of the host name (e.g., "foo")
        #[arg(short, long)]
        server: Option<String>,

        /// Permitted subzone with leading dot (e.g., ".example.com")
        #[arg(short = 'z', long)]
        subzone: Option<String>,

        /// Validity in days
        #[arg(long, env = "CERT_VALID_FOR_DAYS", default_value_t = DEFAULT_VALID_FOR_DAYS)]
        valid_for: u32,

        /// Write the certificate to this file instead of printing it
        #[arg(long)]
        cert_out: Option<PathBuf>,

        /// Write the private key to this file instead of printing it
        #[arg(long)]
        key_out: Option<PathBuf>,

        /// Shorthand for `--cert-out cert.pem --key-out key.pem`
        #[arg(short, long)]
        write: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the API root listing
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let options = config::client_options_from_env()?;
    let api = HttpCertificateApi::new(&cli.endpoint, options)
        .context("Failed to create certificate API client")?;
    let api = Arc::new(api);

    match cli.command {
        Commands::Domains => show_domains(api).await?,
        Commands::Request {
            server,
            subzone,
            valid_for,
            cert_out,
            key_out,
            write,
            yes,
        } => {
            config::validate_valid_for(valid_for)?;

            let (cert_out, key_out) = output_paths(cert_out, key_out, write);

            let service = CertificateService::new(api, valid_for);
            request_certificate(&service, server, subzone, cert_out, key_out, yes).await?;
        }
        Commands::List => show_listing(api).await?,
    }

    Ok(())
}

/// Resolves output files; `--write` fills in `cert.pem` / `key.pem` for any
/// path not given explicitly.
fn output_paths(
    cert_out: Option<PathBuf>,
    key_out: Option<PathBuf>,
    write: bool,
) -> (Option<PathBuf>, Option<PathBuf>) {
    if write {
        (
            cert_out.or_else(|| Some(PathBuf::from("cert.pem"))),
            key_out.or_else(|| Some(PathBuf::from("key.pem"))),
        )
    } else {
        (cert_out, key_out)
    }
}

/// Prints the permitted domains as selectable subzones.
///
/// # Output Format
///
/// ```text
/// 🌐 Permitted domains
///
///   .example.com (default)
///   .example.org
/// ```
async fn show_domains(api: Arc<HttpCertificateApi>) -> Result<()> {
    println!("{}", "🌐 Permitted domains".bright_blue().bold());
    println!();

    let service = CertificateService::new(api, DEFAULT_VALID_FOR_DAYS);
    let domains = service
        .permitted_domains()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load permitted domains: {}", e))?;

    for (i, subzone) in domains.subzones().iter().enumerate() {
        if i == 0 {
            println!("  {} {}", subzone.cyan(), "(default)".bright_black());
        } else {
            println!("  {}", subzone.cyan());
        }
    }

    println!();
    println!(
        "  Total: {}",
        domains.domains().len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Requests a certificate with interactive prompts.
///
/// # Flow
///
/// 1. Load permitted domains (nothing can be requested without them)
/// 2. Prompt for server name and subzone (or use provided)
/// 3. Confirm the host name (unless `--yes` flag)
/// 4. Request the certificate
/// 5. Print or save certificate and private key
async fn request_certificate(
    service: &CertificateService<HttpCertificateApi>,
    server: Option<String>,
    subzone: Option<String>,
    cert_out: Option<PathBuf>,
    key_out: Option<PathBuf>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔐 Request Certificate".bright_blue().bold());
    println!();

    let mut form = service.load_form().await;
    if let Some(error) = form.error() {
        anyhow::bail!("{}", error);
    }

    let server = match server {
        Some(s) => s,
        None => Input::new().with_prompt("Server name").interact_text()?,
    };
    form.set_server(server);

    let subzone = match subzone {
        Some(z) => z,
        None => {
            let subzones = form.subzones();
            let index = Select::new()
                .with_prompt("Subzone")
                .items(&subzones)
                .default(0)
                .interact()?;
            subzones[index].clone()
        }
    };
    form.set_subzone(subzone);

    println!();
    println!("{}", "Request details:".bright_white().bold());
    println!(
        "  Host name: {}{}",
        form.server().cyan(),
        form.subzone().cyan()
    );
    println!("  Validity:  {} days", service.valid_for_days());
    println!("  API:       {}", service.endpoint().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Request this certificate?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .submit(&mut form)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let issued = form
        .certificate()
        .context("Certificate API returned no certificate")?;

    println!(
        "{}",
        format!("✅ Certificate issued for {}", issued.hostname)
            .green()
            .bold()
    );
    println!();

    output_certificate(issued, cert_out.as_deref(), key_out.as_deref())
}

/// Prints or writes the issued certificate and key.
fn output_certificate(
    issued: &IssuedCertificate,
    cert_out: Option<&Path>,
    key_out: Option<&Path>,
) -> Result<()> {
    match cert_out {
        Some(path) => {
            write_file(path, &issued.certificate, false)?;
            println!("  Certificate: {}", path.display().to_string().cyan());
        }
        None => {
            println!("{}", "Certificate:".bright_white().bold());
            println!("{}", issued.certificate);
        }
    }

    match key_out {
        Some(path) => {
            write_file(path, &issued.key, true)?;
            println!("  Private key: {}", path.display().to_string().cyan());
        }
        None => {
            println!("{}", "Private key:".bright_white().bold());
            println!("{}", issued.key);
            println!(
                "{}",
                "⚠️  The private key is not stored anywhere else. Save it now."
                    .red()
                    .bold()
            );
        }
    }

    println!();
    Ok(())
}

/// Writes `contents` to `path`, owner-only on Unix when `private` is set.
///
/// An existing private file is narrowed to `0600` before anything is written.
fn write_file(path: &Path, contents: &str, private: bool) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    if private {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    #[cfg(unix)]
    if private {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))
            .with_context(|| format!("Failed to restrict permissions of {}", path.display()))?;
    }
    #[cfg(not(unix))]
    let _ = private;

    file.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

/// Pretty-prints the API root listing.
async fn show_listing(api: Arc<HttpCertificateApi>) -> Result<()> {
    println!("{}", "📋 API Listing".bright_blue().bold());
    println!();

    let service = CertificateService::new(api, DEFAULT_VALID_FOR_DAYS);
    let listing = service
        .listing()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load listing: {}", e))?;

    println!("  Endpoint: {}", service.endpoint().cyan());
    println!();
    println!("{}", serde_json::to_string_pretty(&listing)?);
    println!();

    Ok(())
}
