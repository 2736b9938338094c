use chrono::{Local, NaiveDate};
use clap::Parser;
use moodjournal::application::{
    analyze, delete_entry, init, list_entries, stats, AddEntryService, ConfigService,
    EditEntryService, EditFields, EntryFilter,
};
use moodjournal::cli::{
    format_classification, format_entry, format_entry_list, format_stats, Cli, Commands,
};
use moodjournal::domain::Mood;
use moodjournal::error::MoodJournalError;
use moodjournal::infrastructure::{FileSystemRepository, JournalRepository};
use std::io::Read;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

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

/// Parse a YYYY-MM-DD date argument
fn parse_date(s: &str) -> Result<NaiveDate, MoodJournalError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| MoodJournalError::InvalidDate(s.to_string()))
}

fn parse_date_opt(s: Option<&String>) -> Result<Option<NaiveDate>, MoodJournalError> {
    s.map(|s| parse_date(s)).transpose()
}

fn run(cli: Cli) -> Result<(), MoodJournalError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),

        Commands::Add {
            date,
            title,
            content,
        } => {
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => Local::now().date_naive(),
            };

            let repo = FileSystemRepository::discover()?;
            let show_quotes = repo.load_config()?.show_quotes;

            let service = AddEntryService::new(repo);
            let (id, classification) = service.execute(date, &title, &content)?;

            println!("Saved entry {}", id);
            print!("{}", format_classification(&classification, show_quotes));
            Ok(())
        }

        Commands::Edit {
            id,
            date,
            title,
            content,
        } => {
            let repo = FileSystemRepository::discover()?;
            let show_quotes = repo.load_config()?.show_quotes;

            let fields = EditFields {
                date: parse_date_opt(date.as_ref())?,
                title,
                content,
            };

            let service = EditEntryService::new(repo);
            let (entry, classification) = service.execute(&id, fields)?;

            println!("Updated entry {}", entry.id);
            print!("{}", format_classification(&classification, show_quotes));
            Ok(())
        }

        Commands::Delete { id } => {
            let repo = FileSystemRepository::discover()?;
            delete_entry::delete_entry(&repo, &id)?;
            println!("Deleted entry {}", id);
            Ok(())
        }

        Commands::Show { id } => {
            let repo = FileSystemRepository::discover()?;
            let entry = list_entries::get_entry(&repo, &id)?;
            print!("{}", format_entry(&entry));
            Ok(())
        }

        Commands::List {
            mood,
            search,
            from,
            to,
            limit,
        } => {
            let repo = FileSystemRepository::discover()?;

            let mood = mood
                .map(|s| Mood::from_str(&s).map_err(MoodJournalError::Config))
                .transpose()?;

            let filter = EntryFilter {
                mood,
                search,
                from: parse_date_opt(from.as_ref())?,
                to: parse_date_opt(to.as_ref())?,
                limit,
            };

            let entries = list_entries::list_entries(&repo, &filter)?;
            println!("{}", format_entry_list(&entries).trim_end());
            Ok(())
        }

        Commands::Stats { from, to } => {
            let repo = FileSystemRepository::discover()?;
            let stats = stats::mood_stats(
                &repo,
                parse_date_opt(from.as_ref())?,
                parse_date_opt(to.as_ref())?,
            )?;
            println!("{}", format_stats(&stats).trim_end());
            Ok(())
        }

        Commands::Analyze { text } => {
            let repo = FileSystemRepository::discover()?;
            let show_quotes = repo.load_config()?.show_quotes;

            let text = match text {
                Some(text) => text,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };

            let classification = analyze::analyze(&repo, &text);
            print!("{}", format_classification(&classification, show_quotes));
            Ok(())
        }

        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("entries_file = {}", config.entries_file);
                println!("show_quotes = {}", config.show_quotes);
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
                println!("Usage: moodjournal config [--list | <key> [<value>]]");
                println!("Valid keys: entries_file, show_quotes, created");
                Ok(())
            }
        }
    }
}
