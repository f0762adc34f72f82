use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use roulette_core::{AppConfig, config_path, save_to_file, setting_sources};

use crate::ConfigCommands;
use crate::error::CliError;

pub(crate) fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set {
            catalog_key,
            translate_key,
            vault_url,
            target_lang,
        } => set(catalog_key, translate_key, vault_url, target_lang),
    }
}

fn show() -> Result<(), CliError> {
    match config_path() {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (no config directory on this system)"),
    }
    println!();

    let sources = setting_sources();
    println!("  {:<16} {}", "catalog key:", sources.catalog_key);
    println!("  {:<16} {}", "translate key:", sources.translate_key);
    println!("  {:<16} {}", "vault url:", sources.vault_url);
    println!("  {:<16} {}", "target lang:", sources.target_lang);

    let config = AppConfig::load();
    println!();
    if config.translate_key.is_some() {
        println!(
            "{} Translation enabled ({} \u{2192} {})",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            config.source_lang,
            config.target_lang,
        );
    } else {
        println!(
            "{} No translation credential; descriptions will use the local fallback",
            "\u{2013}".if_supports_color(Stdout, |t| t.yellow()),
        );
    }

    Ok(())
}

fn set(
    catalog_key: Option<String>,
    translate_key: Option<String>,
    vault_url: Option<String>,
    target_lang: Option<String>,
) -> Result<(), CliError> {
    let mut config = AppConfig::load();

    if catalog_key.is_some() {
        config.catalog_key = catalog_key;
    }
    if translate_key.is_some() {
        config.translate_key = translate_key;
    }
    if let Some(url) = vault_url {
        config.vault_url = url;
    }
    if let Some(lang) = target_lang {
        config.target_lang = lang;
    }

    let path = save_to_file(&config)?;
    println!(
        "{} Config written to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display()
    );
    Ok(())
}
