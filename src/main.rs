use anyhow::Result;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use woodpusher::board::{parse_square, Board, Move, Side};
use woodpusher::movegen::legal_moves_from;
use woodpusher::record::GameRecord;
use woodpusher::rules::is_legal;
use woodpusher::search::{select_move, Difficulty};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play casual chess against a tiered engine", long_about = None)]
struct Args {
    /// Operation mode: 'h' human vs engine, 's' engine self-play, '2' two humans
    #[arg(long, default_value = "h")]
    mode: String,

    /// Your color: 'w' for white, 'b' for black
    #[arg(long, default_value = "w")]
    color: String,

    /// Engine difficulty: easy, medium or hard
    #[arg(long, default_value = "medium")]
    difficulty: String,

    /// Seed for the engine's randomized tiers (omit for a fresh seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Starting position as a FEN piece placement
    #[arg(long)]
    fen: Option<String>,

    /// Artificial thinking delay before each engine move, in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Stop self-play after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: u32,

    /// Write the finished game as JSON
    #[arg(long)]
    save: Option<PathBuf>,
}

fn parse_color(color_str: &str) -> Result<Side> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Side::White),
        "b" | "black" => Ok(Side::Black),
        _ => anyhow::bail!("Invalid color: use 'w' or 'b'"),
    }
}

fn parse_difficulty(s: &str) -> Result<Difficulty> {
    match s.to_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        _ => anyhow::bail!("Invalid difficulty: use 'easy', 'medium' or 'hard'"),
    }
}

enum Command {
    Play(Move),
    Resign,
    Quit,
}

/// Prompt until we get a legal move or a game command. `moves <square>`
/// lists the destinations of the piece on that square, standing in for the
/// click-to-highlight flow of a graphical board.
fn get_human_move(board: &Board, turn: Side) -> Result<Command> {
    loop {
        print!("Enter your move (e.g., e2e4): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        match input {
            "quit" => return Ok(Command::Quit),
            "resign" => return Ok(Command::Resign),
            _ => {}
        }

        if let Some(square) = input.strip_prefix("moves ") {
            match parse_square(square.trim()) {
                Some((row, col)) => {
                    let targets = legal_moves_from(board, turn, row as i32, col as i32);
                    if targets.is_empty() {
                        println!("No moves from {square} for {turn}.");
                    } else {
                        let names: Vec<String> =
                            targets.iter().map(|m| m.to_string()).collect();
                        println!("{}", names.join(" "));
                    }
                }
                None => println!("Bad square '{square}'. Use a file and rank like 'e2'."),
            }
            continue;
        }

        let mv = match Move::from_str(input) {
            Ok(mv) => mv,
            Err(_) => {
                println!("Invalid move format! Use format like 'e2e4'");
                continue;
            }
        };

        // Legality says nothing about whose turn it is; that check belongs
        // here in the game loop.
        let owns_piece = board
            .piece_at(mv.from_row as usize, mv.from_col as usize)
            .map_or(false, |p| p.side == turn);
        if owns_piece
            && is_legal(
                board,
                mv.from_row as i32,
                mv.from_col as i32,
                mv.to_row as i32,
                mv.to_col as i32,
            )
        {
            return Ok(Command::Play(mv));
        }
        println!("Illegal move!");
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mode = args.mode.chars().next().unwrap_or('h');
    let human_color = parse_color(&args.color)?;
    let difficulty = parse_difficulty(&args.difficulty)?;

    let mut board = match &args.fen {
        Some(fen) => Board::from_fen(fen)?,
        None => Board::initial(),
    };
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let mut turn = Side::White;
    let mut record = GameRecord::new();
    if mode != '2' {
        record.difficulty = Some(difficulty);
    }
    let mut plies = 0u32;

    loop {
        println!("\n{board}");

        // King capture ends the game; with check out of scope this is the
        // only win condition the board itself can show.
        if !board.has_king(turn) {
            let winner = turn.opponent();
            println!("\n{turn}'s king is gone. {winner} wins!");
            record.winner = Some(winner);
            break;
        }

        println!("\n{turn}'s turn");

        let is_human_turn = match mode {
            '2' => true,
            's' => false,
            _ => turn == human_color,
        };

        let mv = if is_human_turn {
            match get_human_move(&board, turn)? {
                Command::Play(mv) => mv,
                Command::Resign => {
                    let winner = turn.opponent();
                    println!("\n{turn} resigns! {winner} wins!");
                    record.winner = Some(winner);
                    break;
                }
                Command::Quit => {
                    println!("Thanks for playing!");
                    break;
                }
            }
        } else {
            if args.delay_ms > 0 {
                thread::sleep(Duration::from_millis(args.delay_ms));
            }
            match select_move(&board, turn, difficulty, &mut rng) {
                Some(mv) => {
                    println!("Engine plays: {mv}");
                    mv
                }
                None => {
                    println!("No legal moves for {turn}!");
                    break;
                }
            }
        };

        board = board.apply_move(mv);
        record.push(mv);
        turn = turn.opponent();

        plies += 1;
        if plies >= args.max_plies {
            println!("\nReached the {} ply cap, calling it a day.", args.max_plies);
            break;
        }
    }

    if let Some(path) = &args.save {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &record)?;
        println!("Saved game record to {}", path.display());
    }

    Ok(())
}
