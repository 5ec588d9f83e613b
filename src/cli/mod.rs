// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sectra command-line interface.
//!
//! Three subcommands: `index` to turn a built site into a record file,
//! `search` to rank a query against a site or a record file, and `inspect`
//! to look at how pages were sectionized.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sectra",
    about = "Section-aware search records and ranking for documentation sites",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every subcommand.
#[derive(Args, Clone, Debug, Default)]
pub struct CommonArgs {
    /// JSON config file; flags below override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Prefix for page locations (e.g. https://docs.example.org)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Fuzzy tolerance as a fraction of term length
    #[arg(long, global = true)]
    pub fuzzy: Option<f64>,

    /// Disable prefix expansion of query terms
    #[arg(long, global = true)]
    pub no_prefix: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build search records from a site directory
    Index {
        /// Site directory containing myst.xref.json
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file for the records
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Rank a query against a site or a record file
    Search {
        /// Site directory to load and index
        #[arg(short, long, conflicts_with = "records", required_unless_present = "records")]
        input: Option<PathBuf>,

        /// Records written by `sectra index`
        #[arg(short, long)]
        records: Option<PathBuf>,

        /// Search query
        query: String,

        /// Maximum number of results to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print ranked results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show sections, corpus stops and breadcrumbs of a site's pages
    Inspect {
        /// Site directory containing myst.xref.json
        #[arg(short, long)]
        input: PathBuf,

        /// Only this page slug
        #[arg(long)]
        page: Option<String>,
    },
}
