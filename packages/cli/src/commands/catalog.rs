use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use landkit_catalog::{Catalog, Category, ComponentDefinition};

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Only list one category (header, social-proof, content, footer)
    #[arg(short, long)]
    pub category: Option<String>,
}

pub fn catalog(args: CatalogArgs) -> Result<()> {
    let catalog = Catalog::builtin();

    let categories = match args.category.as_deref() {
        Some(name) => vec![name.parse::<Category>().map_err(|e| anyhow!(e))?],
        None => Category::ALL.to_vec(),
    };

    for category in categories {
        let entries = catalog.list_by_category(category);
        if entries.is_empty() {
            continue;
        }

        println!("{}", category.as_str().bright_blue().bold());
        for (component_type, definition) in entries {
            print_definition(component_type, definition);
        }
        println!();
    }

    Ok(())
}

fn print_definition(component_type: &str, definition: &ComponentDefinition) {
    println!(
        "  {} {}",
        component_type.bright_white().bold(),
        format!("({})", definition.name).dimmed()
    );

    let fields: Vec<&str> = definition.fields.iter().map(|f| f.key.as_str()).collect();
    if !fields.is_empty() {
        println!("    fields: {}", fields.join(", "));
    }
    for style in &definition.styles {
        println!("    {}: {}", style.key.name(), style.options.join(", "));
    }
}
