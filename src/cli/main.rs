use anyhow::Context;
use clap::{Parser, Subcommand};
use groupie_tracker::{
    config::UpstreamConfig,
    models::FilterCriteria,
    search::{CapPolicy, QueryEngine, SearchConfigBuilder},
    state::CatalogCache,
    upstream::{HttpRecordSource, RecordSource},
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "groupie-cli")]
#[command(about = "Query the Groupie Tracker catalog from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Catalog API base URL
    #[arg(
        short,
        long,
        env = "GROUPIE_UPSTREAM_URL",
        default_value = "https://groupietrackers.herokuapp.com/api"
    )]
    base_url: String,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "10")]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Free-text search across names, members, years and locations
    Search {
        #[arg(value_name = "QUERY")]
        query: String,

        /// Cap every pass at the result limit
        #[arg(long)]
        strict: bool,
    },

    /// Structured filter
    Filter {
        #[arg(long)]
        creation_min: Option<i32>,

        #[arg(long)]
        creation_max: Option<i32>,

        #[arg(long)]
        album_min: Option<i32>,

        #[arg(long)]
        album_max: Option<i32>,

        /// Accepted member count, repeatable
        #[arg(short, long = "members", value_name = "N")]
        members: Vec<usize>,

        /// Location suffix, e.g. "usa"
        #[arg(short, long)]
        city: Option<String>,
    },

    /// Every distinct concert location
    Locations,

    /// Full detail of one artist
    Profile {
        #[arg(value_name = "ARTIST_ID")]
        id: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let source = HttpRecordSource::new(&UpstreamConfig {
        base_url: cli.base_url.clone(),
        timeout_secs: cli.timeout,
        ..UpstreamConfig::default()
    })
    .context("building upstream client")?;

    match cli.command {
        Commands::Search { query, strict } => {
            let snapshot = load(&source).await?;
            let policy = if strict {
                CapPolicy::Strict
            } else {
                CapPolicy::Legacy
            };
            let engine = QueryEngine::new(SearchConfigBuilder::new().cap_policy(policy).build());
            print_json(&engine.search(&snapshot, &query))?;
        }

        Commands::Filter {
            creation_min,
            creation_max,
            album_min,
            album_max,
            members,
            city,
        } => {
            let snapshot = load(&source).await?;

            let mut criteria = FilterCriteria::new();
            if creation_min.is_some() || creation_max.is_some() {
                criteria.creation_years = Some(groupie_tracker::models::YearRange {
                    min: creation_min,
                    max: creation_max,
                });
            }
            if album_min.is_some() || album_max.is_some() {
                criteria.first_album_years = Some(groupie_tracker::models::YearRange {
                    min: album_min,
                    max: album_max,
                });
            }
            for count in members {
                criteria = criteria.with_member_count(count);
            }
            if let Some(city) = city {
                criteria = criteria.with_location_suffix(city);
            }

            print_json(&QueryEngine::default().filter(&snapshot, &criteria))?;
        }

        Commands::Locations => {
            let snapshot = load(&source).await?;
            for location in snapshot.unique_locations() {
                println!("{}", location);
            }
        }

        Commands::Profile { id } => {
            let profile = source
                .fetch_profile(id)
                .await
                .with_context(|| format!("fetching profile {}", id))?;
            print_json(&profile)?;
        }
    }

    Ok(())
}

async fn load(
    source: &HttpRecordSource,
) -> anyhow::Result<std::sync::Arc<groupie_tracker::state::Snapshot>> {
    let cache = CatalogCache::new();
    cache
        .reload(source)
        .await
        .with_context(|| format!("loading catalog from {}", source.base_url()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
