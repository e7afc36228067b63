use super::Project;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use landkit_compiler_html::{AssetMode, ExportOptions};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Keep the stylesheet unminified
    #[arg(long)]
    pub no_minify: bool,

    /// Keep editor controls, classes and data attributes
    #[arg(long)]
    pub keep_editor_artifacts: bool,

    /// Bundle the FAQ accordion script
    #[arg(long)]
    pub faq: bool,

    /// Write styles.css and script.js next to the page
    #[arg(long)]
    pub external: bool,
}

impl ExportArgs {
    /// Config export options with command-line overrides applied
    fn options(&self, base: &ExportOptions) -> ExportOptions {
        let mut options = base.clone();
        if self.no_minify {
            options.minify = false;
        }
        if self.keep_editor_artifacts {
            options.strip_editor_artifacts = false;
        }
        if self.faq {
            options.include_faq_script = true;
        }
        if self.external {
            options.assets = AssetMode::External;
        }
        options
    }
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let project = Project::open(cwd)?;
    let options = args.options(&project.config.export);
    let bundle = project
        .session
        .export_bundle(&project.config.page, &options);

    if args.stdout {
        print!("{}", bundle.html);
        return Ok(());
    }

    let out_dir = match &args.out_dir {
        Some(dir) => PathBuf::from(cwd).join(dir),
        None => project.config.get_out_dir(cwd),
    };
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    println!("{}", "📦 Exporting landing page...".bright_blue().bold());
    for (name, contents) in bundle.files() {
        let path = out_dir.join(name);
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  {} {}", "✓".green(), path.display());
    }

    println!();
    println!(
        "{} Exported {} components",
        "✅".green(),
        project.session.document().len()
    );

    Ok(())
}
