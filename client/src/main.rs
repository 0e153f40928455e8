mod commands;
mod config;
mod presenter;
mod render;

use std::sync::Arc;

use clap::Parser;
use common::games::snake::{SessionPhase, SnakeSession, SnakeSettings};
use common::{log, logger};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{Notify, mpsc};

use commands::{Command, HELP, parse_command};
use config::{ClientConfigManager, DEFAULT_CONFIG_FILE_NAME, get_config_manager};
use presenter::{GameEnded, TerminalPresenter};

#[derive(Parser)]
#[command(name = "snake_client")]
struct Args {
    /// YAML config file; created by `save`, defaults are used while it is missing.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE_NAME)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,

    /// Let the autopilot steer.
    #[arg(long)]
    cheating: bool,

    #[arg(long)]
    seed: Option<u64>,

    /// Print the board after every tick.
    #[arg(long)]
    render: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(&args.config);
    let mut config = config_manager.get_config()?;
    if args.cheating {
        config.snake.cheating = true;
    }
    if args.seed.is_some() {
        config.snake.seed = args.seed;
    }
    let render_board = args.render || config.render;

    let redraw = Arc::new(Notify::new());
    let (ended_tx, mut ended_rx) = mpsc::unbounded_channel();
    let session = SnakeSession::new(TerminalPresenter::new(redraw.clone(), ended_tx));

    session.start(&config.snake).await?;
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut settings = config.snake.clone();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        if let Err(e) = execute(command, &session, &mut settings, &config_manager).await {
                            println!("{}", e);
                        }
                    }
                    Err(e) => println!("{}", e),
                }
            }
            Some(ended) = ended_rx.recv() => {
                report_game_end(&ended);
            }
            _ = redraw.notified(), if render_board => {
                if let Some(snapshot) = session.snapshot().await {
                    print!("{}", render::render(&snapshot));
                }
            }
        }
    }

    log!("Exiting with score {}", session.score().await);
    Ok(())
}

async fn execute(
    command: Command,
    session: &SnakeSession<TerminalPresenter>,
    settings: &mut SnakeSettings,
    config_manager: &ClientConfigManager,
) -> Result<(), String> {
    match command {
        Command::Input(event) => session.handle_input(event).await,
        Command::Resume => session.resume().await,
        Command::Restart => session.start(settings).await,
        Command::Set(change) => {
            let mut updated = settings.clone();
            change.apply(&mut updated);
            session.reconfigure(&updated).await?;
            *settings = updated;
            Ok(())
        }
        Command::Save => {
            let mut config = config_manager.get_config()?;
            config.snake = settings.clone();
            config_manager.set_config(&config)?;
            println!("Options saved");
            Ok(())
        }
        Command::Status => {
            let phase = session.phase().await;
            println!("Game {}, score {}", describe_phase(phase), session.score().await);
            Ok(())
        }
        Command::Help => {
            println!("{}", HELP);
            Ok(())
        }
        Command::Quit => Ok(()),
    }
}

fn report_game_end(ended: &GameEnded) {
    println!("{} Score: {}", ended.message, ended.score);
    if ended.cause.is_resumable() {
        println!("Type 'resume' to continue or 'set <option> <value>' to change options.");
    } else {
        println!("Game over. Type 'restart' for a new game.");
    }
}

fn describe_phase(phase: SessionPhase) -> &'static str {
    match phase {
        SessionPhase::NotStarted => "not started",
        SessionPhase::Running => "running",
        SessionPhase::Paused => "paused",
        SessionPhase::Ended(_) => "over",
        SessionPhase::Faulted => "faulted",
    }
}
