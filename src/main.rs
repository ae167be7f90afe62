use std::path::PathBuf;

use clap::Parser;
use colored::{ColoredString, Colorize};
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::RecvError;
use web_navigator::agent::BrowserAgent;
use web_navigator::config::AgentConfig;
use web_navigator::context::Context;
use web_navigator::memory::{LogCategory, LogEntry};
use web_navigator::model::ResultItem;
use web_navigator::protocol::SessionEvent;
use web_navigator::AgentResult;

/// Run one natural-language command through the simulated browsing agent.
#[derive(Parser, Debug)]
#[command(name = "web-navigator", version)]
struct Cli {
    /// The command, e.g. "Search for laptops under $1000 and list top 5"
    #[arg(required = true)]
    command: Vec<String>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the simulated delays
    #[arg(long)]
    instant: bool,

    /// Print the final snapshot and results as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> AgentResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("web_navigator=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AgentConfig::load(path)?,
        None => AgentConfig::default(),
    };
    let mut context = Context::new().with_config(config);
    if cli.instant {
        context = context.instant();
    }

    let agent = BrowserAgent::new(context);
    let session = agent.session();
    let mut events = session.subscribe();

    let handle = agent.run(&cli.command.join(" ")).await?;

    if !cli.json {
        follow_activity(&mut events, print_entry).await;
    }

    let outcome = handle.wait().await;
    let results = session.results().await;

    if cli.json {
        let report = serde_json::json!({
            "task": session.snapshot().await,
            "results": results,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if outcome.is_ok() {
        println!("\n--- RESULTS ({}) ---", results.len());
        for item in &results {
            print_result(item);
        }
    }

    outcome.map(|_| ())
}

/// Feeds log entries to `on_entry` until the task finishes. A lagging
/// receiver keeps going with whatever is still buffered.
async fn follow_activity(events: &mut Receiver<SessionEvent>, mut on_entry: impl FnMut(&LogEntry)) {
    loop {
        match events.recv().await {
            Ok(SessionEvent::LogAppended(entry)) => on_entry(&entry),
            Ok(SessionEvent::Finished { .. }) | Err(RecvError::Closed) => break,
            Ok(_) => {}
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("activity output skipped {skipped} events");
            }
        }
    }
}

fn tag(category: LogCategory) -> ColoredString {
    let label = format!("[{category}]");
    match category {
        LogCategory::Planning => label.magenta(),
        LogCategory::Navigation => label.blue(),
        LogCategory::Interaction => label.yellow(),
        LogCategory::Extraction => label.green(),
        LogCategory::Completion => label.green().bold(),
        LogCategory::Error => label.red().bold(),
    }
}

fn print_entry(entry: &LogEntry) {
    let time = entry.timestamp.format("%H:%M:%S");
    println!("{} {} {}", time.to_string().dimmed(), tag(entry.category), entry.message);
    if let Some(detail) = &entry.detail {
        println!("         {}", detail.dimmed());
    }
}

fn print_result(item: &ResultItem) {
    println!("{}. {}", item.id, item.title.bold());
    println!("   {}", item.description);
    let mut meta = vec![item.url.cyan().to_string()];
    if let Some(price) = &item.price {
        meta.push(price.green().to_string());
    }
    if let Some(rating) = item.rating {
        meta.push(format!("★ {rating:.1}"));
    }
    println!("   {}", meta.join("  "));
}
