mod config;
mod ui;

use clap::{Parser, ValueEnum};
use common::games::tictactoe::{ComputerMoveScheduler, GameMode};
use common::{log, logger};
use eframe::egui;
use std::path::PathBuf;

use config::{get_config_manager, Config, DEFAULT_CONFIG_FILE};
use ui::TicTacToeApp;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Human,
    Computer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Human => GameMode::HumanVsHuman,
            ModeArg::Computer => GameMode::HumanVsComputer,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_desktop")]
struct Args {
    /// YAML config file; defaults are used when it does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Overrides the configured starting mode
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = match get_config_manager(&args.config).get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load {}: {}. Using defaults", args.config.display(), e);
            Config::default()
        }
    };

    let mode = args.mode.map(GameMode::from).unwrap_or(config.game.default_mode);
    log!("Starting in {} mode", mode);

    let runtime = tokio::runtime::Runtime::new()?;
    let scheduler = ComputerMoveScheduler::new(
        runtime.handle().clone(),
        config.game.computer_move_delay(),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width as f32, config.window.height as f32])
            .with_min_inner_size([300.0, 360.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(mode, scheduler)))),
    )?;

    log!("Window closed");
    Ok(())
}
