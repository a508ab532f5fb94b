//! Tests for win and draw evaluation.

use tri_tactics::{Board, CONNECT_LENGTH, Mark, WinResult, WinSummary, evaluate, evaluate_with};

fn board(cells: &str) -> Board {
    cells.parse().expect("Valid board")
}

#[test]
fn test_empty_board_is_ongoing() {
    let result = evaluate(&Board::new());
    assert_eq!(result, WinResult::Ongoing);
    assert!(!result.is_terminal());
}

#[test]
fn test_no_run_with_empty_cells_is_ongoing() {
    let result = evaluate(&board("XXX.O OO▲.. ▲▲... ..... ....."));
    assert_eq!(result.winner(), None);
    assert!(!result.is_draw());
}

#[test]
fn test_full_board_without_run_is_draw() {
    let result = evaluate(&board("XXOO▲ OO▲▲X ▲▲XXO XXOO▲ OO▲▲X"));
    assert!(result.is_draw());
    assert_eq!(result.winner(), None);
    assert_eq!(result.line(), None);
}

#[test]
fn test_top_row_run() {
    let result = evaluate(&board("XXXX. ..... ..... ..... ....."));
    assert_eq!(result.winner(), Some(Mark::X));
    assert_eq!(result.line(), Some(&[0, 1, 2, 3][..]));
}

#[test]
fn test_run_touching_last_row_and_column() {
    let result = evaluate(&board("..... ....▲ ....▲ ....▲ ....▲"));
    assert_eq!(result.winner(), Some(Mark::Triangle));
    assert_eq!(result.line(), Some(&[9, 14, 19, 24][..]));
}

#[test]
fn test_diagonal_runs() {
    let down_right = evaluate(&board(".X... ..X.. ...X. ....X ....."));
    assert_eq!(down_right.line(), Some(&[1, 7, 13, 19][..]));

    let down_left = evaluate(&board("....O ...O. ..O.. .O... ....."));
    assert_eq!(down_left.winner(), Some(Mark::O));
    assert_eq!(down_left.line(), Some(&[4, 8, 12, 16][..]));
}

#[test]
fn test_run_wrapping_row_boundary_is_not_a_win() {
    // Indices 3, 4, 5, 6 are contiguous in memory but span two rows.
    let result = evaluate(&board("...XX XX... ..... ..... ....."));
    assert_eq!(result, WinResult::Ongoing);
}

#[test]
fn test_tie_break_prefers_horizontal_at_same_origin() {
    let result = evaluate(&board("XXXX. X.... X.... X.... ....."));
    assert_eq!(result.line(), Some(&[0, 1, 2, 3][..]));
}

#[test]
fn test_tie_break_prefers_earlier_origin() {
    // X's vertical run starts on row 1; O's horizontal run starts on row 3.
    let result = evaluate(&board("..... X.... X.... XOOOO X...."));
    assert_eq!(result.winner(), Some(Mark::X));
    assert_eq!(result.line(), Some(&[5, 10, 15, 20][..]));
}

#[test]
fn test_winning_line_has_connect_length_valid_indices() {
    let b = board("..... .OOOO ..... ..... .....");
    let line = evaluate(&b).line().expect("Winning line").to_vec();
    assert_eq!(line.len(), CONNECT_LENGTH);
    assert!(line.iter().all(|&i| i < b.len()));
}

#[test]
fn test_evaluate_is_idempotent() {
    let b = board("X.O.▲ .XO.▲ ..XO▲ ...X. .....");
    assert_eq!(evaluate(&b), evaluate(&b));
}

#[test]
fn test_connect_length_is_a_parameter() {
    let b = board("XXX.. ..... ..... ..... .....");
    assert_eq!(evaluate(&b), WinResult::Ongoing);
    assert_eq!(evaluate_with(&b, 3).line(), Some(&[0, 1, 2][..]));
}

#[test]
fn test_summary_for_draw() {
    let summary = WinSummary::from(&evaluate(&board("OOXX▲ XX▲▲O ▲▲OOX OOXX▲ XX▲▲O")));
    let json = serde_json::to_string(&summary).expect("Serializes");
    assert_eq!(json, r#"{"winner":null,"line":null,"is_draw":true}"#);
}

#[test]
fn test_summary_for_triangle_win_uses_glyph() {
    let summary = WinSummary::from(&evaluate(&board("▲▲▲▲. ..... ..... ..... .....")));
    let json = serde_json::to_string(&summary).expect("Serializes");
    assert_eq!(json, r#"{"winner":"▲","line":[0,1,2,3],"is_draw":false}"#);
}
