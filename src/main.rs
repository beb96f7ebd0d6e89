use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use seas_alerts::cli::{display, Cli};
use seas_alerts::source::json::JsonFileSource;
use seas_alerts::source::EventSource;
use seas_alerts::{compose_report, rank_events, Event, LoadError, OverlapScorer};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    // Logging is best-effort; a second init (e.g. under a test harness) is
    // not worth failing the run over.
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let events = load_events(cli)?;
    log::info!("loaded {} events", events.len());

    // The overlap scorer is the shipped default: deterministic and offline.
    // The embedding strategy stays available through the library API for
    // callers that bring a provider.
    let matches = rank_events(&events, &cli.topic, cli.threshold, &OverlapScorer)?;
    let body = compose_report(&cli.topic, &matches);

    println!(
        "{}",
        display::dim(&format!(
            "Generated {} alert(s) for topic: {}",
            matches.len(),
            cli.topic
        ))
    );
    println!();
    println!("{}", display::banner());
    println!();
    print!("{}", body);

    Ok(())
}

fn load_events(cli: &Cli) -> Result<Vec<Event>, LoadError> {
    if let Some(path) = &cli.events_json {
        return JsonFileSource::new(path).fetch();
    }

    #[cfg(feature = "scrape")]
    {
        log::info!("no --events-json given, scraping the live SEAS calendar");
        seas_alerts::SeasCalendarSource::new(cli.limit).fetch()
    }

    #[cfg(not(feature = "scrape"))]
    {
        Err(LoadError::NoSource)
    }
}
