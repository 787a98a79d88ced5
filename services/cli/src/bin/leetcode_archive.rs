//! services/cli/src/bin/leetcode_archive.rs

use archive_cli::{
    adapters::{BrowserCookieAdapter, Html2TextRenderer, LeetCodeGraphQlAdapter, StaticTokenAdapter},
    config::{Cli, Config},
    error::AppError,
};
use clap::Parser;
use leetcode_archive_core::{
    ArchiveLayout, ArchiveWriter, CatalogReader, Completeness, PlanOptions, SessionProvider,
    SyncEngine, SyncOptions,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let cli = Cli::parse();
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!(output = %cli.output.display(), "Configuration loaded");

    // --- 2. Acquire the Session ---
    let session: Box<dyn SessionProvider> = match &config.session_token {
        Some(token) => Box::new(StaticTokenAdapter::new(token.clone())),
        None => Box::new(BrowserCookieAdapter::new(cli.browser)),
    };
    let token = session.session_token()?;

    // --- 3. Initialize Service Adapters ---
    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;
    let catalog = Arc::new(LeetCodeGraphQlAdapter::new(
        http,
        config.graphql_url.clone(),
        token,
    ));
    let renderer = Arc::new(Html2TextRenderer::new()?);

    // --- 4. Build the Engine ---
    let reader = CatalogReader::new(catalog).with_paging(config.page_size, config.max_pages);
    let writer = ArchiveWriter::new(reader.clone(), renderer)
        .with_languages(config.languages.clone())
        .with_template_language(config.template_language.clone());
    let options = SyncOptions {
        only_accepted: cli.only_accepted,
        plan: PlanOptions {
            incremental: cli.incremental,
            completeness: if cli.verify {
                Completeness::Verified
            } else {
                Completeness::Presence
            },
        },
        dry_run: cli.dry_run,
    };
    let engine = SyncEngine::new(reader, writer, ArchiveLayout::new(&cli.output), options);

    // --- 5. Run ---
    let report = engine.run().await?;

    if cli.dry_run {
        println!("Would archive {} problems ({} already present):", report.planned.len(), report.skipped);
        for slug in &report.planned {
            println!("  {}", slug);
        }
        return Ok(());
    }

    for (slug, error) in report.failures() {
        println!("[FAILED] {}: {}", slug, error);
    }
    println!(
        "Archived {} of {} problems ({} skipped) into {}",
        report.archived().count(),
        report.planned.len(),
        report.skipped,
        cli.output.display()
    );
    Ok(())
}
