// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sectra::build::{load_site, load_site_with_progress, read_records, write_records};
use sectra::{
    highlight, records_from_documents, search, DefaultTokenizer, MemoryIndex, SearchConfig,
    SearchDocument, SearchRecord, SNIPPET_TOKENS,
};

mod cli;
use cli::display::{
    breadcrumb, format_size, highlight_markers, kind_badge, pad_right, ranking_summary, row,
    section_bot, section_mid, section_top, themed, title, truncate, CYAN, DIM, GRAY,
};
use cli::{Cli, CommonArgs, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SECTRA_LOG").unwrap_or_else(|_| EnvFilter::new("sectra=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli.common)?;

    match cli.command {
        Commands::Index { input, output } => run_index(&input, &output, &config),
        Commands::Search {
            input,
            records,
            query,
            limit,
            json,
        } => {
            let records = match (input, records) {
                (Some(site), _) => site_records(&site, &config)?,
                (None, Some(path)) => read_records(&path)
                    .with_context(|| format!("reading records from {}", path.display()))?,
                (None, None) => bail!("either --input or --records is required"),
            };
            run_search(records, &query, limit, json, &config)
        }
        Commands::Inspect { input, page } => run_inspect(&input, page.as_deref(), &config),
    }
}

/// Config file first, then flag overrides, then validation.
fn resolve_config(common: &CommonArgs) -> Result<SearchConfig> {
    let mut config = match &common.config {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SearchConfig::default(),
    };
    if let Some(base_url) = &common.base_url {
        config.base_url = base_url.trim_end_matches('/').to_string();
    }
    if let Some(fuzzy) = common.fuzzy {
        config.fuzzy = fuzzy;
    }
    if common.no_prefix {
        config.prefix = false;
    }
    config.validate().context("invalid search config")?;
    Ok(config)
}

fn site_records(site: &Path, config: &SearchConfig) -> Result<Vec<SearchRecord>> {
    let docs = load_site(site, config)
        .with_context(|| format!("loading site {}", site.display()))?;
    Ok(records_from_documents(&docs)?)
}

// ============================================================================
// INDEX
// ============================================================================

fn run_index(input: &Path, output: &Path, config: &SearchConfig) -> Result<()> {
    let docs = load_site_with_progress(input, config)
        .with_context(|| format!("loading site {}", input.display()))?;
    let records = records_from_documents(&docs)?;
    write_records(output, &records)
        .with_context(|| format!("writing records to {}", output.display()))?;

    let size = std::fs::metadata(output).map(|m| m.len() as usize).unwrap_or(0);
    println!(
        "{} {} records from {} pages → {} ({})",
        themed(CYAN, &[], "indexed"),
        records.len(),
        docs.len(),
        output.display(),
        format_size(size)
    );
    Ok(())
}

// ============================================================================
// SEARCH
// ============================================================================

fn run_search(
    records: Vec<SearchRecord>,
    query: &str,
    limit: usize,
    json: bool,
    config: &SearchConfig,
) -> Result<()> {
    let index = MemoryIndex::new(records, &DefaultTokenizer, config);
    let mut ranked = search(&index, &DefaultTokenizer, query, config.proximity_bound);
    let total = ranked.len();
    ranked.truncate(limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    title(&format!("\"{}\": {} of {} results", query, ranked.len(), total));
    let (open, close) = highlight_markers();
    for (rank, hit) in ranked.iter().enumerate() {
        let record = &hit.result.record;
        let label = format!("{}. {}", rank + 1, record.url);
        if rank == 0 {
            section_top(&label);
        } else {
            section_mid(&label);
        }
        row(&format!(" {} {}", kind_badge(&record.kind), breadcrumb(&record.hierarchy)));
        let snippet = highlight(
            record.display_text(),
            &hit.result,
            SNIPPET_TOKENS,
            &open,
            &close,
        );
        row(&format!(" {}", snippet.replace('\n', " ")));
        row(&format!(" {}", ranking_summary(&hit.ranking)));
    }
    if !ranked.is_empty() {
        section_bot();
    }
    Ok(())
}

// ============================================================================
// INSPECT
// ============================================================================

fn run_inspect(input: &Path, page: Option<&str>, config: &SearchConfig) -> Result<()> {
    let docs = load_site(input, config)
        .with_context(|| format!("loading site {}", input.display()))?;
    let selected: Vec<&SearchDocument> = docs
        .iter()
        .filter(|doc| page.is_none_or(|slug| doc.slug == slug))
        .collect();
    if selected.is_empty() {
        bail!("no page matches {}", page.unwrap_or("(any)"));
    }

    for doc in selected {
        inspect_document(doc)?;
    }
    Ok(())
}

fn inspect_document(doc: &SearchDocument) -> Result<()> {
    title(doc.title.as_deref().unwrap_or(&doc.slug));
    section_top("PAGE");
    row(&format!(" location  {}", doc.location));
    row(&format!(" digest    {:08x}", doc.digest));
    row(&format!(
        " body      {} chars, stops {:?}",
        doc.body_corpus.char_len(),
        doc.body_corpus.stops
    ));
    row(&format!(" headings  stops {:?}", doc.heading_corpus.stops));

    section_mid("SECTIONS");
    let records = doc.records()?;
    for (index, section) in doc.sections.iter().enumerate() {
        let heading = match &section.heading {
            Some(h) => truncate(&format!("h{} {}", h.depth.depth(), h.text), 32),
            None => themed(GRAY, &[DIM], "(preamble)"),
        };
        let text = doc.body_corpus.section_text(index, None)?;
        row(&format!(
            " {:>3} {} {}",
            index,
            pad_right(&heading, 34),
            themed(GRAY, &[], &truncate(&text.replace('\n', " "), 40))
        ));
        if let Some(record) = records.get(2 * index) {
            row(&format!("     {}", breadcrumb(&record.hierarchy)));
        }
    }
    section_bot();
    Ok(())
}
