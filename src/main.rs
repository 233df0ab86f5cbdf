//! Morris: terminal driver for the Nine Men's Morris engine.
//!
//! ## Usage
//!
//! - `morris` - Computer-vs-computer game with default settings
//! - `morris selfplay --depth 4` - Computer-vs-computer game
//! - `morris play --human B` - Play against the engine on stdin
//!
//! Notation on stdin: `5` places on point 5, `1-2` moves from 1 to 2,
//! `x7` removes the piece on 7. Also `moves`, `status`, `history`, `quit`.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use morris::search::DEFAULT_DEPTH;
use morris::{
    AIEngine, AutomatedTurn, EngineConfig, GameController, Move, PlacementStrategy, Player, Pos,
    Status,
};

/// Nine Men's Morris engine with an alpha-beta opponent
#[derive(Parser)]
#[command(name = "morris")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log verbosity: -v for debug, -vv for trace (RUST_LOG overrides)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Let the engine play both sides
    Selfplay {
        #[command(flatten)]
        engine: EngineArgs,

        /// Stop after this many turns if the game has not ended
        #[arg(long, default_value_t = 400)]
        max_plies: u32,
    },
    /// Play against the engine on stdin
    Play {
        /// Side the human plays; A moves first
        #[arg(long, value_enum, default_value_t = Side::A)]
        human: Side,

        #[command(flatten)]
        engine: EngineArgs,
    },
}

#[derive(Args, Clone, Copy)]
struct EngineArgs {
    /// Search depth in plies
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,

    /// Use the one-ply placement heuristic instead of search while placing
    #[arg(long)]
    greedy_placement: bool,

    /// Print one JSON record per turn instead of the board
    #[arg(long)]
    json: bool,
}

impl Default for EngineArgs {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            greedy_placement: false,
            json: false,
        }
    }
}

impl EngineArgs {
    fn engine(self) -> AIEngine {
        let placement = if self.greedy_placement {
            PlacementStrategy::Greedy
        } else {
            PlacementStrategy::Search
        };
        AIEngine::with_config(EngineConfig {
            depth: self.depth,
            placement,
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    A,
    B,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::A => Player::A,
            Side::B => Player::B,
        }
    }
}

/// One line of `--json` output
#[derive(Serialize)]
struct TurnRecord<'a> {
    ply: u32,
    player: Player,
    mv: Option<Move>,
    removal: Option<Pos>,
    status: &'a Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Selfplay { engine, max_plies }) => run_selfplay(engine, max_plies),
        Some(Commands::Play { human, engine }) => run_play(human.into(), engine),
        None => run_selfplay(EngineArgs::default(), 400),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_selfplay(args: EngineArgs, max_plies: u32) -> Result<()> {
    let mut game = GameController::new(args.engine());
    let mut out = io::stdout().lock();

    if !args.json {
        writeln!(out, "{}", game.state().board)?;
    }

    for ply in 1..=max_plies {
        if game.state().is_over() {
            break;
        }
        let player = game.state().current;
        let turn = game
            .choose_and_apply_automated_move()
            .with_context(|| format!("automated turn {ply} for {player} failed"))?;
        report_turn(&mut out, &game, ply, player, turn, args.json)?;
    }

    let status = game.status();
    if !args.json {
        match status.winner {
            Some(winner) => writeln!(out, "{winner} wins after {} actions", game.history().len())?,
            None => writeln!(out, "no result after {max_plies} turns")?,
        }
    }
    Ok(())
}

fn run_play(human: Player, args: EngineArgs) -> Result<()> {
    let mut game = GameController::new(args.engine());
    let mut out = io::stdout().lock();
    let mut lines = io::stdin().lock().lines();
    let mut ply = 0;

    writeln!(out, "{}", game.state().board)?;

    while !game.state().is_over() {
        let current = game.state().current;

        if current != human {
            ply += 1;
            let turn = game
                .choose_and_apply_automated_move()
                .context("engine turn failed")?;
            report_turn(&mut out, &game, ply, current, turn, args.json)?;
            continue;
        }

        let removing = game.state().pending_removal == Some(human);
        write!(out, "{} {}> ", human, if removing { "remove" } else { "move" })?;
        out.flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read stdin")?;
        let input = line.trim();

        match input {
            "" => {}
            "quit" | "q" => break,
            "moves" => {
                let moves: Vec<String> = if removing {
                    game.removable_positions().iter().map(|p| format!("x{p}")).collect()
                } else {
                    game.legal_moves().iter().map(Move::to_string).collect()
                };
                writeln!(out, "{}", moves.join(" "))?;
            }
            "status" => writeln!(out, "{}", serde_json::to_string(&game.status())?)?,
            "history" => {
                for entry in game.history() {
                    writeln!(out, "{entry}")?;
                }
            }
            _ => {
                let before = game.history().len();
                if let Err(e) = apply_human_input(&mut game, input) {
                    writeln!(out, "{e}")?;
                } else if game.history().len() > before {
                    ply += 1;
                    if !args.json {
                        writeln!(out, "{}", game.state().board)?;
                    }
                }
            }
        }
    }

    if let Some(winner) = game.state().winner {
        writeln!(out, "{winner} wins")?;
    }
    Ok(())
}

/// `x7` removes, anything else is move notation
fn apply_human_input(game: &mut GameController, input: &str) -> Result<()> {
    if let Some(target) = input.strip_prefix('x') {
        let pos: Pos = target.parse()?;
        game.apply_removal(pos)?;
    } else {
        let mv: Move = input.parse()?;
        game.apply_move(mv)?;
    }
    Ok(())
}

fn report_turn(
    out: &mut impl Write,
    game: &GameController,
    ply: u32,
    player: Player,
    turn: AutomatedTurn,
    json: bool,
) -> Result<()> {
    if json {
        let status = game.status();
        let record = TurnRecord {
            ply,
            player,
            mv: turn.mv,
            removal: turn.removal,
            status: &status,
        };
        writeln!(out, "{}", serde_json::to_string(&record)?)?;
        return Ok(());
    }

    let mut line = format!("{ply:>3}. {player}:");
    if let Some(mv) = turn.mv {
        line.push_str(&format!(" {mv}"));
    }
    if let Some(pos) = turn.removal {
        line.push_str(&format!(" x{pos}"));
    }
    writeln!(out, "{line}  [{}]", game.status().stage)?;
    writeln!(out, "{}", game.state().board)?;
    Ok(())
}
