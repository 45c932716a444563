use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fakebook_engine::config::Settings;
use fakebook_engine::db::Database;
use fakebook_engine::{DatasetStore, QueryEngine, QueryResult};

/// Fakebook query runner
///
/// Runs one of the analytical queries against a Fakebook SQLite dataset and
/// prints the result as JSON.
#[derive(Parser, Debug)]
#[command(name = "fakebook")]
#[command(about = "Run analytical queries over a Fakebook dataset", long_about = None)]
struct Args {
    /// Path to the SQLite database file (overrides settings)
    #[arg(short, long, global = true)]
    database: Option<String>,

    /// Create the schema and load the bundled sample dataset first
    #[arg(long, global = true)]
    seed: bool,

    /// Query the database directly instead of loading a snapshot first
    #[arg(long, global = true)]
    live: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Most and least common birth months
    BirthMonths,
    /// Longest, shortest and most common first names
    FirstNames,
    /// Users without any friends
    Friendless,
    /// Users living away from their hometown
    Relocated,
    /// Photos with the most tagged users
    MostTagged {
        #[arg(short, long)]
        count: Option<i64>,
    },
    /// Same-gender pairs tagged together who are not friends
    Matches {
        #[arg(short, long)]
        count: Option<i64>,
        #[arg(short, long)]
        year_diff: Option<i64>,
    },
    /// Non-friends with the most mutual friends
    SuggestFriends {
        #[arg(short, long)]
        count: Option<i64>,
    },
    /// States hosting the most events
    EventStates,
    /// Oldest and youngest friend of a user
    AgeExtremes {
        #[arg(short, long)]
        user: i64,
    },
    /// Friends who might be siblings
    Siblings,
    /// Every query, using configured defaults
    All,
}

fn to_json<T: Serialize>(result: QueryResult<T>) -> Result<Value> {
    Ok(serde_json::to_value(result?)?)
}

/// Like `to_json`, but a failed query becomes an error entry
fn entry<T: Serialize>(result: QueryResult<T>) -> Value {
    match result {
        Ok(value) => serde_json::to_value(value).unwrap_or_else(|e| json!({ "error": e.to_string() })),
        Err(e) => json!({ "error": e.to_string() }),
    }
}

fn run<S: DatasetStore + ?Sized>(
    engine: QueryEngine<'_, S>,
    command: &Command,
    settings: &Settings,
) -> Result<Value> {
    let top_k = settings.queries.top_k;
    let year_diff = settings.queries.year_diff;

    match command {
        Command::BirthMonths => to_json(engine.birth_month_summary()),
        Command::FirstNames => to_json(engine.first_name_stats()),
        Command::Friendless => to_json(engine.friendless_users()),
        Command::Relocated => to_json(engine.relocated_users()),
        Command::MostTagged { count } => {
            to_json(engine.most_tagged_photos(count.unwrap_or(top_k)))
        }
        Command::Matches { count, year_diff: diff } => to_json(
            engine.potential_matches(count.unwrap_or(top_k), diff.unwrap_or(year_diff)),
        ),
        Command::SuggestFriends { count } => {
            to_json(engine.suggest_friends(count.unwrap_or(top_k)))
        }
        Command::EventStates => to_json(engine.event_heavy_states()),
        Command::AgeExtremes { user } => to_json(engine.friend_age_extremes(*user)),
        Command::Siblings => to_json(engine.potential_siblings()),
        Command::All => Ok(json!({
            "birth_months": entry(engine.birth_month_summary()),
            "first_names": entry(engine.first_name_stats()),
            "friendless": entry(engine.friendless_users()),
            "relocated": entry(engine.relocated_users()),
            "most_tagged": entry(engine.most_tagged_photos(top_k)),
            "matches": entry(engine.potential_matches(top_k, year_diff)),
            "suggest_friends": entry(engine.suggest_friends(top_k)),
            "event_states": entry(engine.event_heavy_states()),
            "siblings": entry(engine.potential_siblings()),
        })),
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fakebook_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let settings = Settings::new().context("Failed to load settings")?;
    let db_path = args
        .database
        .clone()
        .unwrap_or_else(|| settings.database.path.clone());

    let db = Database::new(&db_path)
        .with_context(|| format!("Failed to open database at {}", db_path))?;

    if args.seed {
        db.initialize()?;
        db.seed_test_data()?;
        tracing::info!("Sample dataset seeded into {}", db_path);
    }

    let output = if args.live {
        tracing::info!("Running {:?} against live database", args.command);
        run(QueryEngine::new(&db), &args.command, &settings)?
    } else {
        let snapshot = db.load_snapshot()?;
        tracing::info!(
            "Running {:?} against snapshot of {} users",
            args.command,
            snapshot.users.len()
        );
        run(QueryEngine::new(&snapshot), &args.command, &settings)?
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
