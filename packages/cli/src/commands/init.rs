use super::now_millis;
use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use landkit_catalog::Catalog;
use landkit_common::{FileStorage, Storage};
use landkit_editor::{persistence::STATE_KEY, EditSession};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing config and saved page
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing landing page...".bright_blue().bold());

    let config = Config::default();
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let mut storage = FileStorage::new(config.get_storage_dir(cwd));
    if storage.read(STATE_KEY)?.is_some() && !args.force {
        println!("  {} Kept existing page in {}/", "✓".green(), config.storage_dir);
    } else {
        let mut session = EditSession::with_sample_page(Arc::new(Catalog::builtin()))?;
        session.save_to(&mut storage, now_millis())?;
        println!(
            "  {} Created sample page ({} components) in {}/",
            "✓".green(),
            session.document().len(),
            config.storage_dir
        );
    }

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: landkit catalog");
    println!("  2. Run: landkit add hero");
    println!("  3. Run: landkit export");

    Ok(())
}
