//! showtrack - command line client for the show tracking service.
//!
//! Handles account registration, login and session management from the
//! terminal. A successful login stores the bearer token for later use;
//! `--remember` additionally keeps the credentials in the OS keychain so
//! the next `showtrack login` needs no typing at all.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use showtrack_core::api::AuthClient;
use showtrack_core::auth::{CredentialCache, KeyringStore, Session, SessionData};
use showtrack_core::config::Config;
use showtrack_core::models::Credentials;

/// Environment variable overriding the API base URL (also read from .env)
const API_URL_ENV: &str = "SHOWTRACK_API_URL";

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn print_usage() {
    eprintln!("Usage: showtrack <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  login [EMAIL] [--remember]   Log in, optionally remembering credentials");
    eprintln!("  register [EMAIL]             Create a new account");
    eprintln!("  logout                       Clear the session and remembered credentials");
    eprintln!("  status                       Show whether a session exists");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let mut config = Config::load()?;

    match args.get(1).map(String::as_str) {
        Some("login") => login(&mut config, &args[2..]).await,
        Some("register") => register(&config, &args[2..]).await,
        Some("logout") => logout(),
        Some("status") => status(),
        _ => {
            print_usage();
            Ok(())
        }
    }
}

/// Build the API client, honoring base URL overrides from the environment
/// or the config file
fn build_client(config: &Config) -> Result<AuthClient> {
    let override_url = std::env::var(API_URL_ENV)
        .ok()
        .or_else(|| config.base_url.clone());

    let client = match override_url {
        Some(url) => {
            debug!(url = %url, "Using base URL override");
            AuthClient::with_base_url(url)
        }
        None => AuthClient::new(),
    };

    client.context("Failed to build API client")
}

async fn login(config: &mut Config, args: &[String]) -> Result<()> {
    let remember = args.iter().any(|a| a == "--remember");
    let email_arg = args.iter().find(|a| !a.starts_with("--")).cloned();

    let cache = CredentialCache::new(KeyringStore::new());

    // With no email argument, fall back to the remembered pair before
    // prompting, mirroring the auto-login the app screen performed
    let credentials = match email_arg {
        Some(email) => Credentials::new(email, prompt_password()?),
        None => match cache.recall() {
            Some(remembered) => {
                info!(email = %remembered.email, "Using remembered credentials");
                remembered
            }
            None => {
                let email = prompt_email(config.last_email.as_deref())?;
                Credentials::new(email, prompt_password()?)
            }
        },
    };

    let client = build_client(config)?;
    let login_session = client
        .login(&credentials.email, &credentials.password)
        .await?;

    // Only now, with a successful login in hand, is the remember-me
    // choice allowed to touch persistent state
    if remember {
        cache.remember(&credentials)?;
    }

    let mut session = Session::new(Config::cache_dir()?);
    session.update(SessionData::new(
        login_session.token,
        credentials.email.clone(),
    ));
    session.save()?;

    config.last_email = Some(credentials.email.clone());
    config.save()?;

    println!("Logged in as {}", credentials.email);
    Ok(())
}

async fn register(config: &Config, args: &[String]) -> Result<()> {
    let email = match args.iter().find(|a| !a.starts_with("--")) {
        Some(email) => email.clone(),
        None => prompt_email(None)?,
    };
    let password = prompt_password()?;

    let client = build_client(config)?;
    let user = client.register(&email, &password).await?;

    println!("Registered {} (id {})", user.email, user.id);
    Ok(())
}

fn logout() -> Result<()> {
    let mut session = Session::new(Config::cache_dir()?);
    session.clear()?;

    CredentialCache::new(KeyringStore::new()).forget()?;

    println!("Logged out.");
    Ok(())
}

fn status() -> Result<()> {
    let mut session = Session::new(Config::cache_dir()?);
    if session.load()? {
        let data = session
            .data
            .as_ref()
            .context("Session loaded without data")?;
        println!(
            "Logged in as {} (since {})",
            data.email,
            data.created_at.format("%Y-%m-%d %H:%M UTC")
        );
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

fn prompt_email(default: Option<&str>) -> Result<String> {
    match default {
        Some(last) => print!("Email [{}]: ", last),
        None => print!("Email: "),
    }
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read email")?;

    let email = input.trim();
    if email.is_empty() {
        match default {
            Some(last) => Ok(last.to_string()),
            None => anyhow::bail!("An email address is required"),
        }
    } else {
        Ok(email.to_string())
    }
}

fn prompt_password() -> Result<String> {
    let password =
        rpassword::prompt_password("Password: ").context("Failed to read password")?;
    if password.is_empty() {
        anyhow::bail!("A password is required");
    }
    Ok(password)
}
