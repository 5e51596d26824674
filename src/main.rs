use chrono::Local;
use clap::Parser;
use moodlog::application::{compose_entry, init, ConfigService, EntryStore};
use moodlog::cli::{self, Cli, Commands};
use moodlog::domain::export::ExportFormat;
use moodlog::domain::{export, filter, stats, Entry, Mood, TimeRange};
use moodlog::error::MoodlogError;
use moodlog::infrastructure::FileSystemRepository;
use std::fs;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Quiet by default; MOODLOG_LOG (e.g. "moodlog=debug") turns diagnostics on
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("MOODLOG_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::Add {
            mood,
            message,
            quick,
        } => {
            let mood = Mood::from_str(&mood).map_err(|_| MoodlogError::InvalidMood(mood))?;
            let repo = FileSystemRepository::discover()?;

            let content = match message {
                Some(text) => text,
                None => compose_entry::compose_content(&repo, "")?,
            };

            let mut store = EntryStore::open(repo);
            let mut entry = Entry::new(mood, content);
            if quick {
                entry = entry.quick();
            }
            let id = entry.id;
            store.add(entry)?;

            println!("Added entry {}", id);
            println!(
                "{}",
                cli::format_summary(store.total_entries(), store.current_streak())
            );
            Ok(())
        }
        Commands::List {
            range,
            search,
            limit,
        } => {
            let range = TimeRange::from_str(&range).map_err(MoodlogError::Config)?;
            let repo = FileSystemRepository::discover()?;
            let store = EntryStore::open(repo);

            let mut entries =
                filter::filter_entries(store.entries(), range, &search, Local::now());
            if let Some(n) = limit {
                entries.truncate(n);
            }

            println!("{}", cli::format_entry_list(&entries));
            Ok(())
        }
        Commands::Delete { id } => {
            let repo = FileSystemRepository::discover()?;
            let mut store = EntryStore::open(repo);

            if store.delete(id) {
                println!("Deleted entry {}", id);
                Ok(())
            } else {
                Err(MoodlogError::EntryNotFound(id.to_string()))
            }
        }
        Commands::Edit {
            id,
            mood,
            message,
            quick,
            no_quick,
        } => {
            let repo = FileSystemRepository::discover()?;
            let mut store = EntryStore::open(repo.clone());

            let Some(existing) = store.get(id) else {
                return Err(MoodlogError::EntryNotFound(id.to_string()));
            };
            let mut entry = existing.clone();

            let edits_given = mood.is_some() || message.is_some() || quick || no_quick;

            if let Some(name) = mood {
                entry.mood =
                    Mood::from_str(&name).map_err(|_| MoodlogError::InvalidMood(name))?;
            }
            if let Some(text) = message {
                entry.content = text;
            }
            if quick {
                entry.is_quick_entry = true;
            }
            if no_quick {
                entry.is_quick_entry = false;
            }
            if !edits_given {
                entry.content = compose_entry::compose_content(&repo, &entry.content)?;
            }

            store.update(entry)?;
            println!("Updated entry {}", id);
            Ok(())
        }
        Commands::Stats => {
            let repo = FileSystemRepository::discover()?;
            let store = EntryStore::open(repo);
            let today = Local::now().date_naive();

            let report = [
                cli::format_summary(store.total_entries(), store.current_streak()),
                cli::format_mood_flow(&stats::seven_day_series(store.entries(), today)),
                cli::format_distribution(&stats::mood_distribution(store.entries())),
                cli::format_time_pattern(&stats::time_of_day_pattern(store.entries())),
            ];
            println!("{}", report.join("\n\n"));
            Ok(())
        }
        Commands::Export { format, output } => {
            let format = ExportFormat::from_str(&format).map_err(MoodlogError::Config)?;
            let repo = FileSystemRepository::discover()?;
            let store = EntryStore::open(repo);

            let rendered = match format {
                ExportFormat::Csv => export::export_csv(store.entries()),
                ExportFormat::Html => export::export_html(store.entries(), Local::now()),
            };

            match output {
                Some(path) => {
                    fs::write(&path, rendered)?;
                    println!(
                        "Exported {} entries to {}",
                        store.total_entries(),
                        path.display()
                    );
                }
                None => print!("{}", rendered),
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: moodlog config [--list | <key> [<value>]]");
                println!("Valid keys: editor, created");
                Ok(())
            }
        }
    }
}
