use super::Project;
use anyhow::{anyhow, Result};
use clap::Subcommand;
use colored::Colorize;
use landkit_catalog::StyleKey;
use landkit_common::GlobalStyleKey;
use landkit_editor::Preset;

/// Commands that change the saved page
#[derive(Subcommand, Debug)]
pub enum EditCommand {
    /// List the page's components in order
    List,

    /// Add a component, at the end or after another one
    Add {
        /// Component type (see `landkit catalog`)
        component_type: String,

        /// Insert after this component id
        #[arg(short, long)]
        after: Option<String>,
    },

    /// Set a component field
    Set {
        id: String,
        field: String,
        value: String,
    },

    /// Set a style override
    ///
    /// `background`, `position` and `textAlign` pick one of the component's
    /// options; any other key is an inline CSS property. Prefix with `css:`
    /// (`css:background`) to set a CSS property that shares an option's name.
    Style {
        id: String,
        key: String,
        value: String,
    },

    /// Remove a style override (same key forms as `style`)
    Unstyle { id: String, key: String },

    /// Remove a component
    Remove { id: String },

    /// Duplicate a component right after itself
    Duplicate { id: String },

    /// Move a component to a position
    Move { id: String, index: usize },

    /// Set a global style (primaryColor, secondaryColor, fontFamily, baseFontSize)
    Theme { key: String, value: String },

    /// Apply a theme preset (modern, classic, minimal, vibrant)
    Preset { name: String },

    /// Reset global and per-component styles
    ResetStyles,

    /// Remove every component
    Clear,
}

pub fn edit(command: EditCommand, cwd: &str) -> Result<()> {
    let mut project = Project::open(cwd)?;
    if let EditCommand::List = command {
        print_instances(&project);
        return Ok(());
    }

    let session = &mut project.session;
    match command {
        EditCommand::List => {}
        EditCommand::Add {
            component_type,
            after,
        } => {
            let id = session.add_component(&component_type, after.as_deref())?;
            println!("{} Added {} {}", "✓".green(), component_type, id.bright_white());
        }
        EditCommand::Set { id, field, value } => {
            session.set_field(&id, &field, &value)?;
            println!("{} Set {}.{}", "✓".green(), id, field);
        }
        EditCommand::Style { id, key, value } => {
            session.set_instance_style(&id, StyleKey::from(key.as_str()), &value)?;
            println!("{} Styled {} {} = {}", "✓".green(), id, key, value);
        }
        EditCommand::Unstyle { id, key } => {
            session.clear_instance_style(&id, StyleKey::from(key.as_str()))?;
            println!("{} Cleared {} {}", "✓".green(), id, key);
        }
        EditCommand::Remove { id } => {
            session.remove_component(&id)?;
            println!("{} Removed {}", "✓".green(), id);
        }
        EditCommand::Duplicate { id } => {
            let copy = session.duplicate_component(&id)?;
            println!("{} Duplicated {} as {}", "✓".green(), id, copy.bright_white());
        }
        EditCommand::Move { id, index } => {
            session.move_component(&id, index)?;
            println!("{} Moved {} to {}", "✓".green(), id, index);
        }
        EditCommand::Theme { key, value } => {
            let key: GlobalStyleKey = key.parse().map_err(|e: String| anyhow!(e))?;
            session.set_global_style(key, &value)?;
            println!("{} Set {} = {}", "✓".green(), key, value);
        }
        EditCommand::Preset { name } => {
            let preset: Preset = name.parse()?;
            session.apply_preset(preset)?;
            println!("{} Applied {} preset", "✓".green(), preset);
        }
        EditCommand::ResetStyles => {
            session.reset_styles()?;
            println!("{} Styles reset to defaults", "✓".green());
        }
        EditCommand::Clear => {
            session.clear_page()?;
            println!("{} Page cleared", "✓".green());
        }
    }

    project.save()
}

fn print_instances(project: &Project) {
    let document = project.session.document();
    if document.is_empty() {
        println!("{}", "Page is empty".dimmed());
        return;
    }

    for (index, instance) in document.instances().iter().enumerate() {
        println!(
            "{:>3}  {}  {}",
            index,
            instance.id.bright_white(),
            instance.component_type.bright_blue()
        );
        for (field, value) in &instance.field_values {
            println!("       {}: {}", field.dimmed(), value);
        }
        for (key, value) in &instance.style_overrides {
            println!("       {} {}: {}", "style".dimmed(), key.name(), value);
        }
    }
}
