use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::error::Error;
use std::fs::{self, File};
use std::io;
use std::process::ExitCode;

use tally::cli::{self, Args};
use tally::core::config::{self, ResolvedConfig};
use tally::core::editor::Editor;
use tally::core::state::App;
use tally::core::store::FileStore;
use tally::tui;

/// Initialize the file logger. The TUI owns the terminal, so logs never go to stdout.
fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Some(parent) = config.log_file.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let (file_config, source) = config::load_config(args.config.as_deref())?;
    let config = config::resolve(&file_config, &args.overrides());
    init_logging(&config);

    // Loading happened before the logger existed
    source.log();
    for warning in &config.warnings {
        log::warn!("{}", warning);
    }
    log::info!("Tally starting with data file {}", config.data_file.display());

    let store = FileStore::new(&config.data_file);
    let mut editor = Editor::open(Box::new(store))?;

    match args.command {
        Some(command) => {
            let stdout = io::stdout();
            cli::run_command(command, &mut editor, &mut stdout.lock())?;
        }
        None => {
            let mut app = App::new(editor);
            tui::run(&mut app, &config)?;
            if let Some(error) = app.error.take() {
                return Err(error.into());
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Exiting: {}", e);
            eprintln!("tally: {e}");
            ExitCode::FAILURE
        }
    }
}
