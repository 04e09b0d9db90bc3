use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use line_chess::engines::line_engine::{choose_and_play, EngineConfig};
use line_chess::game_state::board::Board;
use line_chess::game_state::chess_types::Color;
use line_chess::utils::long_algebraic::line_to_long_algebraic;
use line_chess::utils::position_json::{board_from_request, parse_request, render_response};
use line_chess::utils::render_board::render_board;

#[derive(Debug, Parser)]
#[command(name = "line_chess", about = "Material-only alpha-beta chess engine")]
struct Cli {
    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Line length of the first engine pass.
    #[arg(long, default_value_t = EngineConfig::default().min_plies)]
    min_plies: usize,

    /// Line length of the last engine pass.
    #[arg(long, default_value_t = EngineConfig::default().max_plies)]
    max_plies: usize,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Play the engine against itself from the starting position.
    SelfPlay {
        /// Number of full turns (one move per side).
        #[arg(long, default_value_t = 10)]
        turns: usize,
    },
    /// Read a JSON position request, play one move, print the new position.
    Analyze {
        /// Request file; stdin when omitted.
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn play_one(board: &mut Board, player: Color, config: &EngineConfig) -> Result<bool, Box<dyn Error>> {
    let root = board.clone();
    let report = choose_and_play(board, player, config)?;
    let Some(played) = report.played else {
        info!(?player, "no moves available");
        return Ok(false);
    };

    info!(
        ?player,
        played = %line_to_long_algebraic(&root, &[played]),
        line = %line_to_long_algebraic(&root, report.final_line()),
        nodes = report.total_nodes(),
        score = board.score_for(player),
        "move played"
    );
    Ok(true)
}

fn self_play(turns: usize, config: &EngineConfig) -> Result<(), Box<dyn Error>> {
    let mut board = Board::new_game();
    println!("{}\n", render_board(&board));

    for turn in 1..=turns {
        for player in [Color::Light, Color::Dark] {
            if !play_one(&mut board, player, config)? {
                return Ok(());
            }
            println!("turn {turn} {player:?}\n{}\n", render_board(&board));
        }
    }

    Ok(())
}

fn analyze(input: Option<PathBuf>, config: &EngineConfig) -> Result<(), Box<dyn Error>> {
    let json = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let request = parse_request(&json)?;
    let (mut board, to_move) = board_from_request(&request)?;
    eprintln!("{}", render_board(&board));

    play_one(&mut board, to_move, config)?;
    eprintln!("{}", render_board(&board));
    println!("{}", render_response(&board)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = EngineConfig {
        min_plies: cli.min_plies,
        max_plies: cli.max_plies,
    };

    match cli.mode {
        Mode::SelfPlay { turns } => self_play(turns, &config),
        Mode::Analyze { input } => analyze(input, &config),
    }
}
