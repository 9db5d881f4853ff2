use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};
use tracing::info;

use wkfs_client::{ClientConfig, WaniKaniClient};
use wkfs_core::modules::config as core_config;
use wkfs_core::sync::{run_sync, DatasetLoader, SyncOptions, WaniKaniInventory};
use wkfs_types::{AppConfig, ConfigError, ItemFilter, SubjectKind, SyncReport, TranslationSet};

use crate::cli::SyncArgs;

pub async fn run(args: SyncArgs, token: Option<String>) -> Result<()> {
    let mut config = core_config::load_config().context("Failed to load configuration")?;
    if args.include_radicals {
        config.include_radicals = true;
    }
    if args.delete_after_run {
        config.delete_after_run = true;
    }
    if let Some(ceiling) = args.max_requests {
        config.request_ceiling = ceiling;
    }
    config.validate().context("Invalid settings for this run")?;

    let token = token.filter(|t| !t.trim().is_empty()).ok_or(ConfigError::MissingToken)?;

    let client = WaniKaniClient::new(ClientConfig {
        base_url: config.api_base_url.clone(),
        api_token: token,
        revision: config.api_revision.clone(),
        timeout_secs: config.timeout_secs,
    })
    .context("Failed to build WaniKani client")?;

    let translations = load_translations(&config).await?;

    let user = client.user().await.context("Failed to fetch WaniKani user")?;
    let max_level = args.max_level.map_or(user.level, |level| level.min(user.level));
    info!(user = %user.username, level = user.level, max_level, "Authenticated");

    let mut filter = ItemFilter::up_to_level(max_level);
    if !config.include_radicals {
        filter.kinds.retain(|kind| *kind != SubjectKind::Radical);
    }

    let mut options = SyncOptions::from_config(&config);
    options.dry_run = args.dry_run;

    let report = run_sync(
        &WaniKaniInventory::new(&client),
        &client,
        &translations,
        &filter,
        options,
        config.request_ceiling,
    )
    .await
    .context("Synchronization failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.dry_run);
    }
    Ok(())
}

pub async fn show_datasets() -> Result<()> {
    let config = core_config::load_config().context("Failed to load configuration")?;
    let set = load_translations(&config).await?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Kind", "Entries"]);
    for kind in SubjectKind::ALL {
        table.add_row(vec![kind.to_string(), set.for_kind(kind).len().to_string()]);
    }

    println!("{}", "French datasets:".cyan().bold());
    println!("  Source: {}", config.dataset_base_url);
    println!("{table}");
    Ok(())
}

async fn load_translations(config: &AppConfig) -> Result<TranslationSet> {
    let loader =
        DatasetLoader::new(&config.dataset_base_url, Duration::from_secs(config.timeout_secs))?;
    loader.load_all().await.context("Failed to load French datasets")
}

fn print_report(report: &SyncReport, dry_run: bool) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Outcome", "Items"]);

    let rows: &[(&str, usize)] = if dry_run {
        &[
            ("Would update", report.planned),
            ("Unchanged", report.unchanged),
            ("No translation", report.no_translation),
            ("Locked", report.locked),
        ]
    } else {
        &[
            ("Created", report.created),
            ("Updated existing", report.recovered),
            ("Failed", report.recovery_failed),
            ("Unchanged", report.unchanged),
            ("No translation", report.no_translation),
            ("Locked", report.locked),
            ("Skipped (ceiling)", report.budget_exhausted),
        ]
    };
    for (label, count) in rows {
        table.add_row(vec![label.to_string(), count.to_string()]);
    }
    if report.cleared > 0 {
        table.add_row(vec!["Cleared after run".to_string(), report.cleared.to_string()]);
    }

    println!("{table}");
    println!(
        "  {} items, {} written, {}/{} requests",
        report.processed(),
        report.writes(),
        report.requests_used,
        report.request_ceiling
    );
    if let Some(ms) = report.elapsed_ms() {
        println!("  Finished in {:.1}s", ms as f64 / 1000.0);
    }
    if report.budget_exhausted > 0 {
        println!(
            "{} {} items skipped at the request ceiling, run again later",
            "!".yellow(),
            report.budget_exhausted
        );
    }
    if report.recovery_failed > 0 {
        println!("{} {} items could not be written", "✗".red(), report.recovery_failed);
    }
}
