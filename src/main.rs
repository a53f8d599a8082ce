use clap::Parser;
use menu_shell::core::config::{self, CliOverrides};
use menu_shell::core::navigation::LaunchMode;
use menu_shell::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "menu-shell", about = "Six-screen menu shell for the terminal")]
struct Args {
    /// Treat navigating to the screen already on top as a no-op
    #[arg(long)]
    single_top: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<LevelFilter>,

    /// Log file path (default: menu-shell.log in the current directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {e}, using defaults");
            config::ShellConfig::default()
        }
    };
    let cli = CliOverrides {
        launch_mode: args.single_top.then_some(LaunchMode::SingleTop),
        log_level: args.log_level,
        log_file: args.log_file,
    };
    let resolved = config::resolve(&file_config, &cli);

    // The terminal belongs to the UI, so logs go to a file.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match File::create(&resolved.log_file) {
        Ok(log_file) => {
            let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
        }
        Err(e) => eprintln!(
            "Warning: cannot open log file {}: {e}",
            resolved.log_file.display()
        ),
    }

    log::info!(
        "menu-shell starting (launch mode: {:?})",
        resolved.launch_mode
    );

    tui::run(resolved)
}
