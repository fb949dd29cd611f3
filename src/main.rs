use std::env;
use std::error::Error;
use std::process::ExitCode;

use bitboard_negamax::board::{find_best_move, Game, SearchParams, STARTING_FEN};
use log::info;

const USAGE: &str = "usage: bitboard_negamax [FEN] [DEPTH]";

fn parse_args() -> Result<(Game, SearchParams), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        return Err(USAGE.into());
    }
    let fen = args.first().map_or(STARTING_FEN, String::as_str);
    let game = Game::try_from_fen(fen)?;
    let params = match args.get(1) {
        Some(depth) => SearchParams::with_depth(
            depth
                .parse::<u32>()
                .map_err(|_| format!("invalid depth '{depth}'\n{USAGE}"))?,
        ),
        None => SearchParams::default(),
    };
    Ok((game, params))
}

fn run() -> Result<(), Box<dyn Error>> {
    let (mut game, params) = parse_args()?;
    println!("{}\n", game.position);
    info!("searching {} to depth {}", game.to_fen(), params.root_depth());

    let result = find_best_move(&game.position, &game.context, &params)?;
    println!(
        "best move: {} (score {}, {} nodes)",
        result.best_move, result.score, result.stats.nodes
    );

    game.play(result.best_move)?;
    println!("\n{}\n{}", game.position, game.to_fen());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
