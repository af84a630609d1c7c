//! The request/response boundary driven with hand-written JSON.

use async_std::task;
use sable_othello::{Board, Player};
use sable_player::{Engine, EngineError, SearchRequest, SearchResponse};
use sable_search::search_root;
use serde_json::{json, Value};

fn grid(board: &Board) -> Value {
    json!(Vec::<Vec<i8>>::from(*board))
}

fn ask(engine: &Engine, request: Value) -> Result<SearchResponse, EngineError> {
    let request: SearchRequest = serde_json::from_value(request).unwrap();
    task::block_on(engine.request(&request))
}

#[test]
fn opening_request() {
    let engine = Engine::new();
    let response = ask(
        &engine,
        json!({"board": grid(&Board::new()), "depth": 4, "aiPlayer": 1, "totalPieces": 4}),
    )
    .unwrap();

    let expected = search_root(Board::new(), 4, Player::Black, 4);
    assert_eq!(response.score, expected.value);
    assert_eq!(response.best_move, expected.best_move);
    assert_eq!(response.log[0], (response.score, response.best_move.unwrap()));
}

#[test]
fn nothing_to_play_gives_null_move() {
    // White cannot move here, so the root passes.
    let board: Board = format!("XO{}", "-".repeat(62)).parse().unwrap();
    let engine = Engine::new();
    let response = ask(
        &engine,
        json!({"board": grid(&board), "depth": 2, "aiPlayer": -1, "totalPieces": 2}),
    )
    .unwrap();

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["move"], Value::Null);
    assert_eq!(value["log"], json!([]));
}

#[test]
fn zero_depth_gives_null_move() {
    let engine = Engine::new();
    let response = ask(
        &engine,
        json!({"board": grid(&Board::new()), "depth": 0, "aiPlayer": -1, "totalPieces": 4}),
    )
    .unwrap();
    assert_eq!(response.best_move, None);
    assert_eq!(response.score, 0);
}

#[test]
fn malformed_requests_fail_fast() {
    let engine = Engine::new();
    let mut rows = Vec::<Vec<i8>>::from(Board::new());
    rows[2].truncate(6);

    let outcome = ask(
        &engine,
        json!({"board": rows, "depth": 2, "aiPlayer": 1, "totalPieces": 4}),
    );
    assert!(matches!(outcome, Err(EngineError::InvalidRequest { .. })));
    assert!(!engine.is_busy());

    let outcome = ask(
        &engine,
        json!({"board": grid(&Board::new()), "depth": 2, "aiPlayer": 3, "totalPieces": 4}),
    );
    assert!(matches!(outcome, Err(EngineError::InvalidRequest { .. })));
}

#[test]
fn caller_copy_is_independent() {
    let engine = Engine::new();
    let mut request = SearchRequest::new(&Board::new(), Player::Black, Default::default());
    let handle = engine.submit(&request).unwrap();

    // Scribbling over the caller's copy cannot reach the running search.
    request.board[0][0] = 1;
    let response = task::block_on(handle.response()).unwrap();
    let expected = search_root(Board::new(), 4, Player::Black, 4);
    assert_eq!(response, SearchResponse::from(expected));
}
