use chrono::{DateTime, Local, NaiveDate, TimeZone};
use clap::Parser;
use sproutbook::application::{
    ChildAgeService, ConfigService, InitService, ListItemsService, WeekProgressService,
};
use sproutbook::cli::{
    format_age, format_entry_list, format_recap_list, format_week, parse_date_arg, Cli, Commands,
};
use sproutbook::domain::{FilterParams, ItemTag, Timeline};
use sproutbook::error::{Result, SproutError};
use sproutbook::infrastructure::FileSystemRepository;
use std::str::FromStr;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: {}", e);
    }

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr, filtered by RUST_LOG (default: warnings only)
fn init_logging() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("could not install log subscriber: {}", e))
}

/// "Now" for a command: the given date at noon local time, or the real clock
fn resolve_now(on: Option<&str>) -> Result<DateTime<Local>> {
    let Some(input) = on else {
        return Ok(Local::now());
    };
    let date = parse_date_arg(input)?;
    date.and_hms_opt(12, 0, 0)
        .and_then(|noon| Local.from_local_datetime(&noon).earliest())
        .ok_or_else(|| SproutError::InvalidDate(input.to_string()))
}

fn resolve_date(on: Option<&str>) -> Result<NaiveDate> {
    match on {
        Some(input) => parse_date_arg(input),
        None => Ok(Local::now().date_naive()),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { path }) => {
            let snapshot = InitService::execute(&path)?;
            println!("Initialized sproutbook journal at {}", path.display());
            println!("Snapshot: {}", snapshot.display());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("snapshot = {}", config.snapshot);
                println!(
                    "default_child = {}",
                    config.default_child.unwrap_or_default()
                );
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: sproutbook config [--list | <key> [<value>]]");
                println!("Valid keys: snapshot, default_child, created");
                Ok(())
            }
        }
        Some(Commands::Age { child, on }) => {
            let date = resolve_date(on.as_deref())?;
            let repo = FileSystemRepository::discover()?;
            let mut service = ChildAgeService::new(repo);
            let report = service.execute(child.as_deref(), date)?;
            println!("{}", format_age(&report));
            Ok(())
        }
        Some(Commands::Week { child, on }) => {
            let now = resolve_now(on.as_deref())?;
            let repo = FileSystemRepository::discover()?;
            let service = WeekProgressService::new(repo);
            let progress = service.execute(child.as_deref(), &now)?;
            print!("{}", format_week(&progress));
            Ok(())
        }
        Some(Commands::List {
            recaps,
            timeline,
            child,
            search,
            tags,
            limit,
            on,
        }) => {
            let now = resolve_now(on.as_deref())?;
            let mut params =
                FilterParams::new(Timeline::from_str(&timeline).map_err(SproutError::Config)?);
            params.owner_or_child_id = child;
            params.search_text = search;
            for tag in &tags {
                params = params.with_tag(ItemTag::from_str(tag).map_err(SproutError::Config)?);
            }
            debug!(?params, recaps, "listing");

            let repo = FileSystemRepository::discover()?;
            let service = ListItemsService::new(repo);
            if recaps {
                let items = service.list_recaps(&params, &now, limit)?;
                print_list(format_recap_list(&items, &now.timezone()));
            } else {
                let rows = service.list_entries(&params, &now, limit)?;
                print_list(format_entry_list(&rows));
            }
            Ok(())
        }
        None => {
            println!("sproutbook - Child journal toolkit");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn print_list(output: String) {
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}
