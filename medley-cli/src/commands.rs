//! CLI command implementations

use std::io;

use clap::Subcommand;
use medley_core::menu::run_menu;
use medley_core::{Catalog, MedleyError};

/// Available CLI commands
#[derive(Subcommand, Default)]
pub enum Commands {
    /// Run the interactive catalog menu (the default)
    #[default]
    Menu,
    /// Print the catalog listing
    List {
        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play one catalog entry by its listed number
    Play {
        /// One-based catalog position
        position: usize,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub fn handle_command(command: Commands) -> anyhow::Result<()> {
    let catalog = Catalog::demo();

    match command {
        Commands::Menu => run_interactive(&catalog),
        Commands::List { json } => list_catalog(&catalog, json),
        Commands::Play { position } => play_entry(&catalog, position),
    }
}

/// Drive the menu loop over the real console streams.
fn run_interactive(catalog: &Catalog) -> anyhow::Result<()> {
    tracing::debug!("entering interactive menu with {} entries", catalog.len());

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_menu(catalog, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}

fn list_catalog(catalog: &Catalog, json: bool) -> anyhow::Result<()> {
    let entries = catalog.entries();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        println!("{}. {}", entry.position, entry.description);
    }

    Ok(())
}

fn play_entry(catalog: &Catalog, position: usize) -> anyhow::Result<()> {
    match catalog.play(position) {
        Ok(block) => {
            println!("{block}");
            Ok(())
        }
        Err(err) => {
            tracing::warn!("play command rejected: {err}");
            let err = MedleyError::from(err);
            anyhow::bail!("{}", err.user_message())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_catalog_plain() {
        let catalog = Catalog::demo();
        assert!(list_catalog(&catalog, false).is_ok());
    }

    #[test]
    fn test_list_catalog_json() {
        let catalog = Catalog::demo();
        assert!(list_catalog(&catalog, true).is_ok());
    }

    #[test]
    fn test_play_entry_valid() {
        let catalog = Catalog::demo();
        assert!(play_entry(&catalog, 1).is_ok());
    }

    #[test]
    fn test_play_entry_out_of_range() {
        let catalog = Catalog::demo();
        let err = play_entry(&catalog, 9).unwrap_err();
        assert!(err.to_string().contains("valid choices: 1-4"));
    }
}
