use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::sync::mpsc;

use patrika::app::App;
use patrika::catalog::Catalog;
use patrika::chrome::{ChromeEvent, TermChrome};
use patrika::config::Config;
use patrika::prefs::PreferenceStore;
use patrika::storage::Database;
use patrika::ui;

/// Get the config directory path (~/.config/patrika/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    let config_dir = PathBuf::from(home).join(".config").join("patrika");
    Ok(config_dir)
}

#[derive(Parser, Debug)]
#[command(name = "patrika", about = "Terminal directory of Bangladeshi news sources")]
struct Args {
    /// Delete all stored preferences (favorites, theme, text size)
    #[arg(long)]
    reset_prefs: bool,

    /// Skip the startup splash screen
    #[arg(long)]
    no_splash: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Set up config directory
    let config_dir = get_config_dir()?;
    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        println!("Created config directory: {}", config_dir.display());
    }

    // Set directory permissions on Unix (user-only access)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        match std::fs::metadata(&config_dir) {
            Ok(metadata) => {
                let mut perms = metadata.permissions();
                perms.set_mode(0o700);
                if let Err(e) = std::fs::set_permissions(&config_dir, perms) {
                    tracing::warn!(
                        path = %config_dir.display(),
                        error = %e,
                        "Failed to set config directory permissions to 0700"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(
                    path = %config_dir.display(),
                    error = %e,
                    "Failed to read config directory metadata"
                );
            }
        }
    }

    // Load config.toml; a broken config falls back to defaults rather than
    // blocking startup.
    let config_path = config_dir.join("config.toml");
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: ignoring config file: {}", e);
            Config::default()
        }
    };

    // Open the preference database. Storage being unavailable is never
    // fatal: the session runs with in-memory preferences instead.
    let db_path = config_dir.join("patrika.db");
    let db_path_str = db_path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid UTF-8 in database path"))?;
    let db = match Database::open(db_path_str).await {
        Ok(db) => Some(db),
        Err(e) => {
            tracing::warn!(error = %e, "Preference storage unavailable; favorites and settings will not persist");
            None
        }
    };

    // Handle --reset-prefs flag
    if args.reset_prefs {
        match &db {
            Some(db) => {
                let removed = db
                    .clear_preferences()
                    .await
                    .context("Failed to reset preferences")?;
                println!("Preferences reset ({} entries removed).", removed);
            }
            None => eprintln!("Warning: no preference storage to reset"),
        }
    }

    let catalog = Catalog::bundled();
    tracing::info!(
        sources = catalog.len(),
        categories = catalog.categories().len(),
        "Catalog loaded"
    );

    // Chrome event channel: fullscreen confirmations flow back through it.
    let (chrome_tx, chrome_rx) = mpsc::channel::<ChromeEvent>(8);
    let mut chrome = TermChrome::new(chrome_tx);

    // Load preferences and synchronize the chrome before the first frame.
    let prefs = PreferenceStore::load(&config, db).await;
    prefs.apply_to_chrome(&mut chrome);

    let show_splash = config.splash && !args.no_splash;
    let mut app = App::new(catalog, prefs, chrome, &config, show_splash);

    // Run the TUI
    ui::run(&mut app, chrome_rx).await?;

    println!("Goodbye!");
    Ok(())
}
