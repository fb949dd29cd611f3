use serde::Deserialize;

use bitboard_negamax::board::search::MATE_SCORE;
use bitboard_negamax::board::{find_best_move, Game, GameStatus, SearchParams};

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    kind: String,
    name: String,
    fen: String,
    depth: u32,
    #[serde(default)]
    best: Option<String>,
}

fn load() -> ProblemSet {
    let data = include_str!("data/tactics.json");
    serde_json::from_str(data).expect("invalid tactics.json")
}

#[test]
fn mate_in_one_suite() {
    let set = load();
    let mut solved = 0;
    for problem in set.problems.iter().filter(|p| p.kind == "mate_in_one") {
        let mut game = Game::from_fen(&problem.fen);
        let result = find_best_move(
            &game.position,
            &game.context,
            &SearchParams::with_depth(problem.depth),
        )
        .unwrap();
        assert_eq!(result.score, MATE_SCORE + 1, "{}", problem.name);

        game.play(result.best_move).unwrap();
        assert_eq!(
            game.position.status(&game.context),
            Ok(GameStatus::Checkmate),
            "{}: {} does not mate",
            problem.name,
            result.best_move
        );
        solved += 1;
    }
    assert_eq!(solved, 6);
}

#[test]
fn win_material_suite() {
    let set = load();
    for problem in set.problems.iter().filter(|p| p.kind == "win_material") {
        let game = Game::from_fen(&problem.fen);
        let result = find_best_move(
            &game.position,
            &game.context,
            &SearchParams::with_depth(problem.depth),
        )
        .unwrap();
        assert_eq!(
            Some(result.best_move.to_string()),
            problem.best,
            "{}",
            problem.name
        );
        assert!(result.score > 0, "{}", problem.name);
    }
}
