use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use plover::taxonomy::{Taxonomies, TaxonomyPath, Term};
use plover::SiteConfig;
use serde::Serialize;

#[derive(Parser)]
#[command(about = "Browse the taxonomies of a site")]
struct Args {
    /// The root of the site, containing `plover.toml`.
    #[arg(long, default_value = "demos/site")]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Prints every term of a taxonomy, e.g. `blog/tags`.
    Terms { path: TaxonomyPath },

    /// Prints the term of a taxonomy with the given slug.
    Find { path: TaxonomyPath, slug: String },

    /// Prints the terms of every taxonomy in `plover.toml`.
    List,
}

#[derive(Serialize)]
struct TaxonomyListing {
    path: String,
    terms: Vec<Term>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();

    let config_path = args.root.join("plover.toml");
    let config = SiteConfig::from_path(&config_path)
        .with_context(|| format!("failed to load {config_path:?}"))?;

    info!("reading content from {:?}", config.content_dir);

    let taxonomies = Taxonomies::new(config.disk_source());

    match args.command {
        Command::Terms { path } => {
            let terms = taxonomies.all_at(&path).await?;

            println!("{}", serde_json::to_string_pretty(&terms)?);
        }
        Command::Find { path, slug } => match taxonomies.find_at(&path, &slug).await? {
            Some(term) => println!("{}", serde_json::to_string_pretty(&term)?),
            None => {
                eprintln!("no term '{slug}' in {path}");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::List => {
            let mut listings = Vec::with_capacity(config.taxonomies.len());

            for taxonomy in &config.taxonomies {
                let path = taxonomy.path();
                let terms = taxonomies.all_at(&path).await?;

                listings.push(TaxonomyListing {
                    path: path.to_string(),
                    terms,
                });
            }

            println!("{}", serde_json::to_string_pretty(&listings)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
