use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sbogrid::editor::LAYOUT_KEY;
use sbogrid::prelude::*;
use sbogrid::{ConfigError, JsonFileStore, LayoutData, LayoutError, LayoutStore, SimulatedLookup};
use serde::{Deserialize, Serialize};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "sbogrid")]
#[command(version)]
#[command(about = "Render and exercise data grids and entry matrices", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Settings file (locale, scroll step, layout directory)
    #[arg(short, long, global = true)]
    settings: Option<PathBuf>,

    /// Write debug logs to this file instead of warnings to stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the markup of a table configuration
    Render {
        /// Table configuration (JSON)
        config: PathBuf,

        /// Locale tag, overrides the settings file
        #[arg(short, long)]
        locale: Option<String>,

        /// Indent the markup
        #[arg(short, long)]
        pretty: bool,
    },

    /// Dispatch scripted events against a rendered table
    Replay {
        /// Table configuration (JSON)
        config: PathBuf,

        /// Event script: a JSON array of events
        events: PathBuf,

        /// Write the final page markup to this file
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// Show or clear the saved editor layout
    Layout {
        /// Remove the saved layout
        #[arg(long)]
        reset: bool,
    },
}

/// One scripted event.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ScriptEvent {
    Click(String),
    Change { target: String, value: String },
    Input { target: String, value: String },
}

impl ScriptEvent {
    fn to_event(&self) -> Event {
        match self {
            ScriptEvent::Click(target) => Event::click(target),
            ScriptEvent::Change { target, value } => Event::change(target, value),
            ScriptEvent::Input { target, value } => Event::input(target, value),
        }
    }
}

/// A line of replay output.
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum Output<'a> {
    Notification(&'a Notification),
    Advisory(&'a Advisory),
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid event script: {0}")]
    Script(#[from] serde_json::Error),
    #[error("no layout directory configured")]
    NoLayoutDir,
}

fn init_logging(log_file: Option<&Path>) -> Result<(), CliError> {
    let result = match log_file {
        Some(path) => WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(path)?),
        None => TermLogger::init(
            LevelFilter::Warn,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    };
    if let Err(e) = result {
        eprintln!("Warning: logging disabled: {}", e);
    }
    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<Settings, CliError> {
    match path {
        Some(path) => Ok(Settings::load(path)?),
        None => Ok(Settings::default()),
    }
}

fn render(
    settings: &Settings,
    config: &Path,
    locale: Option<&str>,
    pretty: bool,
) -> Result<(), CliError> {
    let config = TableConfig::load(config)?;
    let locale = match locale {
        Some(tag) => settings.clone().locale_tag(tag).locale(),
        None => settings.locale(),
    };
    let rendered = render_table(&config, &SequentialIds::new(), &locale);
    if pretty {
        print!("{}", sbodom::render_pretty(&rendered.root));
    } else {
        println!("{}", rendered.to_html());
    }
    Ok(())
}

fn print_line(output: &Output<'_>) {
    match serde_json::to_string(output) {
        Ok(line) => println!("{}", line),
        Err(e) => log::error!("failed to encode output: {}", e),
    }
}

async fn replay(
    settings: &Settings,
    config: &Path,
    events: &Path,
    export: Option<&Path>,
) -> Result<(), CliError> {
    let config = TableConfig::load(config)?;
    let script: Vec<ScriptEvent> = serde_json::from_str(&fs::read_to_string(events)?)?;

    let mut page = Page::from_settings(settings);
    page.subscribe(|notification| print_line(&Output::Notification(notification)));
    page.mount(render_table(&config, &SequentialIds::new(), page.locale()));

    let lookup = SimulatedLookup::new();
    for event in &script {
        let event = event.to_event();
        if let EventResult::Deferred(request) = page.dispatch(&event) {
            if let Err(e) = page.run_lookup(&lookup, &request).await {
                log::warn!("lookup for {} failed: {}", request.input_id, e);
            }
        }
        for advisory in page.drain_advisories() {
            print_line(&Output::Advisory(&advisory));
        }
    }

    if let Some(path) = export {
        fs::write(path, page.to_html())?;
        log::info!("page markup written to {}", path.display());
    }
    Ok(())
}

fn layout(settings: &Settings, reset: bool) -> Result<(), CliError> {
    let dir = settings.layout_dir.clone().ok_or(CliError::NoLayoutDir)?;
    let mut store = JsonFileStore::new(dir);

    if reset {
        store.delete(LAYOUT_KEY)?;
        println!("layout cleared");
        return Ok(());
    }
    match store.get(LAYOUT_KEY)? {
        Some(text) => {
            let data: LayoutData = serde_json::from_str(&text).map_err(LayoutError::from)?;
            println!("saved {}", data.timestamp);
            for (id, position) in &data.positions {
                println!("{id}\t{}\t{}", position.left, position.top);
            }
        }
        None => println!("no saved layout"),
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<(), CliError> {
    init_logging(cli.log_file.as_deref())?;
    let settings = load_settings(cli.settings.as_deref())?;

    match &cli.command {
        Command::Render {
            config,
            locale,
            pretty,
        } => render(&settings, config, locale.as_deref(), *pretty),
        Command::Replay {
            config,
            events,
            export,
        } => replay(&settings, config, events, export.as_deref()).await,
        Command::Layout { reset } => layout(&settings, *reset),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_events_parse() {
        let script: Vec<ScriptEvent> = serde_json::from_str(
            r#"[
                {"click": "m_add"},
                {"change": {"target": "m_0_qty", "value": "3"}},
                {"input": {"target": "m_0_item", "value": ""}}
            ]"#,
        )
        .unwrap();

        assert_eq!(script.len(), 3);
        assert_eq!(script[0].to_event(), Event::click("m_add"));
        assert_eq!(script[1].to_event(), Event::change("m_0_qty", "3"));
        assert_eq!(script[2].to_event(), Event::input("m_0_item", ""));
    }

    #[test]
    fn test_output_lines_are_tagged() {
        let advisory = Advisory::warning("pick a row");
        let line = serde_json::to_string(&Output::Advisory(&advisory)).unwrap();
        assert_eq!(line, r#"{"kind":"advisory","level":"warning","message":"pick a row"}"#);
    }

    #[test]
    fn test_cli_parses_global_settings() {
        let cli = Cli::parse_from([
            "sbogrid", "render", "table.json", "--locale", "en", "-s", "s.json",
        ]);
        assert_eq!(cli.settings.as_deref(), Some(Path::new("s.json")));
        assert!(matches!(cli.command, Command::Render { locale: Some(ref l), .. } if l == "en"));
    }

    #[tokio::test]
    async fn test_replay_exports_final_markup() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("table.json");
        let events = dir.path().join("events.json");
        let export = dir.path().join("page.html");
        fs::write(
            &config,
            r#"{
                "id": "m",
                "mode": "matrix",
                "rowCount": 2,
                "columns": [
                    {"id": "item", "type": "lookup-pair", "linkedObject": "4"},
                    {"id": "qty", "title": "Quantity"}
                ]
            }"#,
        )
        .unwrap();
        fs::write(
            &events,
            r#"[
                {"change": {"target": "m_1_qty", "value": "7"}},
                {"click": "m_lk_0_item"}
            ]"#,
        )
        .unwrap();

        replay(&Settings::default(), &config, &events, Some(&export))
            .await
            .unwrap();

        let html = fs::read_to_string(&export).unwrap();
        assert!(html.contains(r#"id="m""#));
        assert!(html.contains("sbo-matrix-wrapper"));
        assert!(html.contains(r#"value="7""#));
        assert!(html.contains(r#"value="A00001""#));
    }

    #[tokio::test]
    async fn test_replay_without_export_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("table.json");
        let events = dir.path().join("events.json");
        fs::write(&config, r#"{"mode": "grid", "columns": [{"id": "a"}]}"#).unwrap();
        fs::write(&events, "[]").unwrap();

        replay(&Settings::default(), &config, &events, None)
            .await
            .unwrap();

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }
}
