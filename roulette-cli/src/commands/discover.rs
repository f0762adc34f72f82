use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use roulette_catalog::CatalogClient;
use roulette_core::{AppConfig, FilterSpec};
use roulette_engine::{DiscoveryEngine, DiscoveryError, DiscoverySession, Selection};
use roulette_translate::Translator;
use roulette_vault::{SavedGame, VaultClient, VaultStore};

use crate::error::CliError;
use crate::spinner;

pub(crate) async fn run(filters: FilterSpec, count: usize, save: bool) -> Result<(), CliError> {
    let config = AppConfig::load();
    let catalog = CatalogClient::new(config.require_catalog_key()?)?;
    let translator = Translator::new(
        config.translate_key.clone(),
        config.source_lang.as_str(),
        config.target_lang.as_str(),
    )?;

    if !translator.has_credential() {
        log::info!("No translation credential configured; descriptions use the local fallback");
    }

    let engine = DiscoveryEngine::new(catalog, translator);
    let mut session = DiscoverySession::new(filters);

    let mut store = if save {
        let mut store = VaultStore::new(VaultClient::new(config.vault_url.as_str())?);
        store.load().await?;
        Some(store)
    } else {
        None
    };

    for _ in 0..count {
        let pb = spinner::start("Consulting the catalog...");
        let result = engine.generate(&mut session).await;
        pb.finish_and_clear();

        let selection = match result {
            Ok(selection) => selection,
            // Informational outcomes: report and stop, keep exit code 0.
            Err(e @ (DiscoveryError::NoResults | DiscoveryError::Exhausted)) => {
                println!(
                    "{} {}",
                    "\u{2013}".if_supports_color(Stdout, |t| t.yellow()),
                    e
                );
                break;
            }
            Err(e) => return Err(e.into()),
        };

        print_selection(&selection);

        if let Some(store) = &mut store {
            if store.is_saved(selection.entry.id) {
                println!("  (already in the vault)");
            } else {
                store
                    .toggle(&SavedGame::from_entry(&selection.entry))
                    .await?;
                println!(
                    "  {} saved to vault ({} total)",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                    store.len()
                );
            }
        }
    }

    if session.history().len() > 1 {
        println!();
        println!(
            "Shown this session: {}",
            session
                .history()
                .entries()
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}

fn print_selection(selection: &Selection) {
    let entry = &selection.entry;

    println!();
    println!(
        "{} {}",
        entry.name.if_supports_color(Stdout, |t| t.bold()),
        format!("({:.1}\u{2605})", entry.rating).if_supports_color(Stdout, |t| t.cyan()),
    );
    if let Some(released) = &entry.released {
        println!("  Released: {released}");
    }
    if let Some(metacritic) = entry.metacritic {
        println!(
            "  Metacritic: {}",
            metacritic.if_supports_color(Stdout, |t| t.green())
        );
    }
    if !entry.genres.is_empty() {
        println!("  Genres: {}", entry.genre_names().join(", "));
    }
    if !entry.platforms.is_empty() {
        println!("  Platforms: {}", entry.platform_names().join(", "));
    }
    println!();
    println!("  {}", selection.description);
}
