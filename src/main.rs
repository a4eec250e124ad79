use clap::Parser;
use psytrack::app::command::{self, Command};
use psytrack::app::render;
use psytrack::config::toml_config::TomlConfig;
use psytrack::core::session::{AdvisoryKind, EventOutcome};
use psytrack::utils::error::ErrorSeverity;
use psytrack::utils::{logger, validation::Validate};
use psytrack::{
    AdvisoryClient, CliConfig, Dashboard, GeminiClient, RecordStore, SeedData, Session,
    SystemClipboard, TrackerError,
};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🚀 Starting psytrack");

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file_config = TomlConfig::from_file(path).unwrap_or_else(|e| exit_with(&e));
            if let Err(e) = file_config.validate() {
                exit_with(&e);
            }
            Some(file_config)
        }
        None => None,
    };

    let advisory_config = config.advisory_config(file_config.as_ref());
    if let Err(e) = advisory_config.validate() {
        exit_with(&e);
    }
    tracing::debug!(
        "Advisory model {} at {} (timeout {:?}, credential set: {})",
        advisory_config.model,
        advisory_config.base_url,
        advisory_config.timeout,
        advisory_config.has_credential()
    );

    let seed = match config.seed_path(file_config.as_ref()) {
        Some(path) => {
            tracing::info!("📁 Loading seed data from: {}", path);
            SeedData::from_file(path).unwrap_or_else(|e| exit_with(&e))
        }
        None => SeedData::mock(),
    };
    tracing::info!(
        "Loaded {} specialists and {} daily stats",
        seed.specialists.len(),
        seed.daily_stats.len()
    );

    let client = AdvisoryClient::new(GeminiClient::new(advisory_config)?);
    let dashboard = Dashboard::new(RecordStore::new(seed.specialists));
    let mut session = Session::new(dashboard, seed.daily_stats, client);
    let mut clipboard = SystemClipboard;

    session.start();

    println!("Specialist Management. Type 'help' for commands.");
    print_overview(&session);
    prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match command::parse(&line) {
                    Ok(None) => {}
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(cmd)) => {
                        if let Err(e) = execute(&mut session, cmd, &mut clipboard) {
                            report(&e);
                        }
                    }
                    Err(e) => report(&e),
                }
                prompt();
            }
            Some(outcome) = session.next_event() => {
                if announce(&session, &outcome) {
                    prompt();
                }
            }
        }
    }

    tracing::info!("👋 Session closed");
    Ok(())
}

fn execute(
    session: &mut Session<GeminiClient>,
    command: Command,
    clipboard: &mut SystemClipboard,
) -> psytrack::Result<()> {
    match command {
        Command::List(filter) => {
            let dashboard = session.dashboard();
            let filter = filter.unwrap_or(dashboard.filter());
            let records = dashboard.store().list_by_status(filter);
            println!("{}", render::records_table(&records, filter));
        }
        Command::Filter(filter) => {
            session.dashboard_mut().change_filter(filter);
            let records = session.dashboard().visible_records();
            println!("{}", render::records_table(&records, filter));
        }
        Command::Stats => print_overview(session),
        Command::Activity => println!("{}", render::activity_table(session.daily_stats())),
        Command::View(id) => {
            session.view_details(&id)?;
            print_selected(session)?;
        }
        Command::Show => print_selected(session)?,
        Command::Close => session.dashboard_mut().deselect(),
        Command::Status { id, status } => {
            session.dashboard_mut().change_status(&id, status)?;
            println!("{} is now {}", id, status);
        }
        Command::Note(text) => {
            session.dashboard_mut().add_note(&text)?;
            println!("Note added.");
        }
        Command::Regenerate => {
            session.regenerate_follow_up()?;
            println!("Generating personalized message...");
        }
        Command::Copy => {
            session.dashboard().copy_follow_up(clipboard)?;
            println!("Follow-up message copied!");
        }
        Command::Insights => println!("{}", render::insights(session.dashboard().insights())),
        Command::Help => println!("{}", render::HELP),
        Command::Quit => {}
    }
    Ok(())
}

/// Prints an applied advisory result. Returns whether anything was printed.
fn announce(session: &Session<GeminiClient>, outcome: &EventOutcome) -> bool {
    if !outcome.applied {
        return false;
    }

    println!();
    match outcome.kind {
        AdvisoryKind::FollowUp => {
            if print_selected(session).is_err() {
                return false;
            }
        }
        AdvisoryKind::Insights => println!("{}", render::insights(session.dashboard().insights())),
    }
    true
}

fn print_overview(session: &Session<GeminiClient>) {
    let dashboard = session.dashboard();
    println!(
        "{}",
        render::stats_summary(&dashboard.stats(), dashboard.store().list_all())
    );
}

fn print_selected(session: &Session<GeminiClient>) -> psytrack::Result<()> {
    let dashboard = session.dashboard();
    let record = dashboard.selected().ok_or(TrackerError::NoSelection)?;
    println!("{}", render::record_detail(record, dashboard.follow_up()));
    Ok(())
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn report(e: &TrackerError) {
    if e.severity() > ErrorSeverity::Low {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
    }
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

fn exit_with(e: &TrackerError) -> ! {
    tracing::error!("❌ Configuration failed: {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}
