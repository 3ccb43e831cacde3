use std::io::{self, BufRead, Write};

use chess_rules_engine::config::RunConfig;
use chess_rules_engine::engines::engine_random::RandomEngine;
use chess_rules_engine::engines::engine_trait::Engine;
use chess_rules_engine::game_state::chess_types::{GameState, Square};
use chess_rules_engine::session::game_session::{ClickOutcome, GameSession};
use chess_rules_engine::utils::render_game_state::{
    render_captured, render_game_state, render_with_hints,
};
use log::{info, warn};

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{ts} - {level}][{module_path}] {args}",
                ts = chrono::Local::now().format("%Y/%m/%d-%H:%M:%S"),
                level = record.level(),
                module_path = record.module_path().unwrap_or("<unknown>"),
                args = record.args()
            )
        })
        .init();
}

fn print_position(session: &GameSession) {
    println!("{}", render_game_state(&session.game_state));
    println!("{}", render_captured(&session.captured));
    println!("{:?} to move", session.game_state.side_to_move);
}

fn new_engine(config: &RunConfig) -> RandomEngine {
    match config.seed {
        Some(seed) => RandomEngine::with_seed(seed),
        None => RandomEngine::new(),
    }
}

/// Let the random engine make one move for the side to move.
fn engine_move(session: &mut GameSession, engine: &mut RandomEngine) -> Result<bool, String> {
    let Some(mv) = engine.choose_move(&session.game_state) else {
        return Ok(false);
    };
    session.deselect();
    session.click(mv.from).map_err(|e| e.to_string())?;
    match session.click(mv.to).map_err(|e| e.to_string())? {
        ClickOutcome::Moved(_) => Ok(true),
        other => Err(format!(
            "{} picked {} -> {} but the session answered {other:?}",
            engine.name(),
            mv.from,
            mv.to
        )),
    }
}

fn run_self_play(
    session: &mut GameSession,
    engine: &mut RandomEngine,
    plies: u32,
) -> Result<(), String> {
    info!("{} self-play for {plies} plies", engine.name());
    for ply in 1..=plies {
        if !engine_move(session, engine)? {
            println!("no legal moves left after {} plies", ply - 1);
            break;
        }
    }
    print_position(session);
    Ok(())
}

fn parse_square(line: &str) -> Option<Square> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse::<i8>().ok()?;
    let col = parts.next()?.parse::<i8>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Square::new(row, col).ok()
}

fn run_interactive(session: &mut GameSession, engine: &mut RandomEngine) -> Result<(), String> {
    println!("enter `row col` to select or move, `random`, `board`, `quit`");
    print_position(session);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| e.to_string())?;
        match line.trim() {
            "" => continue,
            "quit" => break,
            "board" => print_position(session),
            "random" => {
                if engine_move(session, engine)? {
                    print_position(session);
                } else {
                    println!("no legal moves");
                }
            }
            input => {
                let Some(square) = parse_square(input) else {
                    warn!("unreadable input: {input}");
                    println!("expected two numbers in 0..=7");
                    continue;
                };
                match session.click(square).map_err(|e| e.to_string())? {
                    ClickOutcome::Ignored => println!("nothing to select on {square}"),
                    ClickOutcome::Deselected => println!("selection cleared"),
                    ClickOutcome::Selected(selection) => {
                        println!("{}", render_with_hints(&session.game_state, &selection.hints));
                    }
                    ClickOutcome::Moved(_) => print_position(session),
                }
            }
        }
        io::stdout().flush().map_err(|e| e.to_string())?;
    }

    Ok(())
}

fn main() -> Result<(), String> {
    init_logger();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = RunConfig::from_args(&args)?;

    let game_state = match config.fen.as_deref() {
        Some(fen) => GameState::from_fen(fen).map_err(|e| e.to_string())?,
        None => GameState::new_game(),
    };
    let mut session = GameSession::from_game_state(game_state);
    let mut engine = new_engine(&config);

    match config.self_play_plies {
        Some(plies) => run_self_play(&mut session, &mut engine, plies),
        None => run_interactive(&mut session, &mut engine),
    }
}
