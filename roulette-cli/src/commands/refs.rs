use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use roulette_catalog::{CatalogClient, NamedRef};
use roulette_core::AppConfig;

use crate::error::CliError;
use crate::spinner;

pub(crate) async fn run_genres() -> Result<(), CliError> {
    let catalog = client()?;
    let pb = spinner::start("Fetching genres...");
    let result = catalog.list_genres().await;
    pb.finish_and_clear();

    print_refs("Genres", &result?);
    Ok(())
}

pub(crate) async fn run_platforms() -> Result<(), CliError> {
    let catalog = client()?;
    let pb = spinner::start("Fetching platforms...");
    let result = catalog.list_platforms().await;
    pb.finish_and_clear();

    print_refs("Platforms", &result?);
    Ok(())
}

fn client() -> Result<CatalogClient, CliError> {
    let config = AppConfig::load();
    Ok(CatalogClient::new(config.require_catalog_key()?)?)
}

fn print_refs(heading: &str, refs: &[NamedRef]) {
    println!("{}:", heading.if_supports_color(Stdout, |t| t.bold()));
    for r in refs {
        let count = r
            .games_count
            .map(|n| format!("  ({n} games)"))
            .unwrap_or_default();
        println!("  {:>6}  {}{}", r.id, r.name, count);
    }
}
