use anyhow::{Context, Result};
use colored::Colorize;

use wkfs_core::modules::config as core_config;

pub fn show_config(json: bool, token: Option<&str>) -> Result<()> {
    let config = core_config::load_config().context("Failed to load configuration")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let path = core_config::config_path()?;
    println!("{}", "Configuration:".cyan().bold());
    println!("  File: {}", path.display());
    println!("  API: {} (revision {})", config.api_base_url, config.api_revision);
    println!("  Datasets: {}", config.dataset_base_url);
    println!("  Max synonyms: {}", config.max_synonyms);
    println!("  Request ceiling: {}", config.request_ceiling);
    println!("  Include radicals: {}", config.include_radicals);
    println!("  Delete after run: {}", config.delete_after_run);
    println!("  Timeout: {}s", config.timeout_secs);
    match token {
        Some(token) => println!("  API Token: {}", mask_key(token)),
        None => println!("  API Token: {}", "not set (WANIKANI_API_TOKEN)".yellow()),
    }
    Ok(())
}

pub fn get_config_value(key: &str) -> Result<()> {
    let config = core_config::load_config().context("Failed to load configuration")?;
    let value = core_config::get_value(&config, key).map_err(|e| {
        anyhow::anyhow!("{e}. Known keys: {}", core_config::CONFIG_KEYS.join(", "))
    })?;

    println!("{}", value);
    Ok(())
}

pub fn set_config_value(key: &str, value: &str) -> Result<()> {
    core_config::update_config(|config| core_config::set_value(config, key, value))
        .with_context(|| format!("Failed to set {key}"))?;

    println!("{} Config updated: {} = {}", "✓".green(), key, value);
    Ok(())
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars.iter().take(4).collect();
    let tail: String = chars.iter().skip(chars.len() - 4).collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key_hides_short_tokens() {
        assert_eq!(mask_key("abcd"), "****");
        assert_eq!(mask_key("12345678"), "********");
    }

    #[test]
    fn test_mask_key_keeps_both_ends() {
        assert_eq!(mask_key("abcd-1234-efgh-5678"), "abcd...5678");
    }
}
