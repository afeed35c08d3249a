use anyhow::bail;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use ipdb_domain::{CliOverrides, PageSpec};
use serde::Serialize;
use tracing::info;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "ipdb")]
#[command(version)]
#[command(about = "Query IPv4/IPv6 address provenance and list membership")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Addresses contributed by a source
    BySource {
        name: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Addresses between two addresses of the same version (inclusive)
    Range {
        start: String,
        end: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Whitelist/blacklist membership of an address
    Classify { address: String },
    /// Addresses added between two dates (YYYY-MM-DD, inclusive)
    Added {
        start: NaiveDate,
        end: NaiveDate,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Sources modified between two dates (YYYY-MM-DD, inclusive)
    Modified {
        start: NaiveDate,
        end: NaiveDate,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Whether an address is stored at all
    Contains { address: String },
}

#[derive(Args)]
struct PageArgs {
    /// Rows to skip in each IP version block
    #[arg(long, requires = "count")]
    offset: Option<u32>,

    /// Maximum rows per IP version block
    #[arg(long)]
    count: Option<u32>,
}

impl PageArgs {
    fn page(&self) -> anyhow::Result<Option<PageSpec>> {
        match (self.offset, self.count) {
            (None, None) => Ok(None),
            (offset, Some(count)) => Ok(Some(PageSpec::new(offset.unwrap_or(0), count))),
            (Some(_), None) => bail!("--offset needs --count"),
        }
    }
}

#[derive(Serialize)]
struct Classification<'a> {
    address: &'a str,
    list: Option<ipdb_domain::ListKind>,
}

#[derive(Serialize)]
struct Presence<'a> {
    address: &'a str,
    found: bool,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);
    info!("Starting ipdb v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;
    let repos = di::Repositories::new(pool.clone());
    let addresses = &repos.addresses;

    match &cli.command {
        Command::BySource { name, page } => {
            print_json(&addresses.addresses_by_source(name, page.page()?).await?)?
        }
        Command::Range { start, end, page } => {
            print_json(&addresses.addresses_in_range(start, end, page.page()?).await?)?
        }
        Command::Classify { address } => {
            let list = addresses.classify(address).await?;
            print_json(&Classification {
                address: address.as_str(),
                list,
            })?
        }
        Command::Added { start, end, page } => print_json(
            &addresses
                .addresses_added_between(*start, *end, page.page()?)
                .await?,
        )?,
        Command::Modified { start, end, page } => print_json(
            &addresses
                .sources_modified_between(*start, *end, page.page()?)
                .await?,
        )?,
        Command::Contains { address } => {
            let found = addresses.contains(address).await?;
            print_json(&Presence {
                address: address.as_str(),
                found,
            })?
        }
    }

    pool.close().await;
    Ok(())
}
