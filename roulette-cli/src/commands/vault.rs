use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use roulette_catalog::{CatalogClient, GameDetails};
use roulette_core::AppConfig;
use roulette_vault::{SavedGame, VaultClient, VaultStore};

use crate::VaultCommands;
use crate::error::CliError;
use crate::spinner;

pub(crate) async fn run(command: VaultCommands) -> Result<(), CliError> {
    let config = AppConfig::load();
    let mut store = VaultStore::new(VaultClient::new(config.vault_url.as_str())?);

    let pb = spinner::start("Loading the vault...");
    let loaded = store.load().await;
    pb.finish_and_clear();
    loaded?;

    match command {
        VaultCommands::List => {
            if store.is_empty() {
                println!("The vault is empty.");
                return Ok(());
            }
            for game in store.games() {
                print_game(game);
            }
        }
        VaultCommands::Stats => {
            print_stats(&store);
        }
        VaultCommands::Toggle { id } => {
            // The backend stores a snapshot of catalog fields, so a save
            // needs the full record from the catalog first.
            let details = if store.is_saved(id) {
                None
            } else {
                let catalog = CatalogClient::new(config.require_catalog_key()?)?;
                let pb = spinner::start("Fetching game details...");
                let details = catalog.game_details(id).await;
                pb.finish_and_clear();
                Some(details?)
            };

            let game = match &details {
                Some(details) => saved_from_details(details),
                None => store.games().iter().find(|g| g.id == id).cloned().ok_or(
                    roulette_vault::VaultError::NotFound,
                )?,
            };

            let now_saved = store.toggle(&game).await?;
            if now_saved {
                println!(
                    "{} \"{}\" saved ({} in the vault)",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                    game.name,
                    store.len()
                );
            } else {
                println!(
                    "{} \"{}\" removed ({} in the vault)",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                    game.name,
                    store.len()
                );
            }
        }
        VaultCommands::Remove { id } => {
            store.remove(id).await?;
            println!("Removed {id} ({} in the vault)", store.len());
        }
        VaultCommands::Clear => {
            store.clear_all().await?;
            println!("Vault cleared.");
        }
        VaultCommands::Search { query } => {
            let results = store_client(&config)?.search(&query).await?;
            if results.is_empty() {
                println!("No saved games match \"{query}\".");
                return Ok(());
            }
            for game in &results {
                print_game(game);
            }
        }
        VaultCommands::Note { id, note } => {
            store.set_note(id, &note).await?;
            println!("Note added to {id}.");
        }
        VaultCommands::Rate { id, rating } => {
            store.set_rating(id, rating).await?;
            println!("Rating saved for {id}.");
        }
        VaultCommands::Export => {
            let export = store_client(&config)?.export().await?;
            println!(
                "{}",
                serde_json::to_string_pretty(&export).unwrap_or_else(|_| export.to_string())
            );
        }
        VaultCommands::Import { file } => {
            let text = std::fs::read_to_string(&file)?;
            let data: serde_json::Value = serde_json::from_str(&text)?;
            store_client(&config)?.import(&data).await?;
            store.load().await?;
            println!("Imported {} ({} in the vault)", file.display(), store.len());
        }
    }

    Ok(())
}

/// A second client for endpoints the store does not mirror.
fn store_client(config: &AppConfig) -> Result<VaultClient, CliError> {
    Ok(VaultClient::new(config.vault_url.as_str())?)
}

fn saved_from_details(details: &GameDetails) -> SavedGame {
    SavedGame {
        id: details.id,
        name: details.name.clone(),
        background_image: details.background_image.clone(),
        rating: details.rating,
        released: details.released.clone(),
        genres: details.genres.clone(),
        platforms: details.platforms.clone(),
        metacritic: details.metacritic,
        description_raw: details.description_raw.clone(),
        personal_note: None,
        personal_rating: None,
    }
}

fn print_game(game: &SavedGame) {
    let personal = match (game.personal_rating, game.personal_note.is_some()) {
        (Some(rating), true) => format!("  [{rating}/5, note]"),
        (Some(rating), false) => format!("  [{rating}/5]"),
        (None, true) => "  [note]".to_string(),
        (None, false) => String::new(),
    };
    println!(
        "  {:>8}  {} {}{}",
        game.id,
        game.name.if_supports_color(Stdout, |t| t.bold()),
        format!("({:.1}\u{2605})", game.rating).if_supports_color(Stdout, |t| t.cyan()),
        personal,
    );
    if let Some(note) = &game.personal_note {
        println!("            {note}");
    }
}

fn print_stats(store: &VaultStore<VaultClient>) {
    let stats = store.statistics();
    println!(
        "{}: {} games, average rating {:.2}",
        "Vault".if_supports_color(Stdout, |t| t.bold()),
        stats.total_games,
        stats.average_rating,
    );

    if !stats.genre_count.is_empty() {
        println!("  By genre:");
        for (name, count) in sorted_counts(&stats.genre_count) {
            println!("    {count:>4}  {name}");
        }
    }
    if !stats.platform_count.is_empty() {
        println!("  By platform:");
        for (name, count) in sorted_counts(&stats.platform_count) {
            println!("    {count:>4}  {name}");
        }
    }
}

/// Highest count first, then alphabetical for stable output.
fn sorted_counts(counts: &std::collections::HashMap<String, u64>) -> Vec<(&str, u64)> {
    let mut entries: Vec<(&str, u64)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}
