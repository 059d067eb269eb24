use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::api;
use crate::config::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Website {
    Wikipedia,
    Google,
}

#[derive(Debug, Parser)]
#[command(name = "wikibox", version, about = "Scraper options (JSON output)")]
pub struct Cli {
    /// The website to scrape
    #[arg(long, value_enum, value_name = "WEBSITE")]
    pub website: Website,

    /// The page title, as it appears at the end of the article URL
    #[arg(long = "page_title", value_name = "PAGE_TITLE")]
    pub page_title: String,

    /// Directory the JSON files are written to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON settings file (base URLs, timeout, exchange rates, billion scale)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => Settings::default(),
        };
        if let Some(dir) = &self.output_dir {
            settings = settings.with_output_dir(dir);
        }
        Ok(settings)
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;

    match cli.website {
        Website::Wikipedia => {
            let saved = api::scrape_and_save(&cli.page_title, &settings)
                .with_context(|| format!("scraping {} failed", cli.page_title))?;
            tracing::info!(
                tables = %saved.tables.display(),
                info_box = %saved.info_box.display(),
                "wrote output files"
            );
        }
        Website::Google => {
            let texts = api::search_google(&cli.page_title, &settings)
                .with_context(|| format!("searching {} failed", cli.page_title))?;
            for text in texts {
                println!("{text}");
                println!("------");
            }
        }
    }

    println!("Finished scraping data");
    Ok(())
}
