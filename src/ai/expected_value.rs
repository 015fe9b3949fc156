use std::cmp::Reverse;

use super::graph::{NodeId, OutcomeGraph};
use crate::game::{Board, Node};

/// Every edge strictly increases the row, and slots sit below the last row,
/// so evaluating nodes deepest-first visits children before parents.
fn depth(node: Node, rows: usize) -> usize {
    match node {
        Node::Peg(pos) => pos.row,
        Node::Slot(_) => rows,
    }
}

/// Expected score of every node in `graph`, indexed by [`NodeId`].
///
/// A slot is worth its score. A peg is worth the weighted sum of its
/// children, so a peg with no edges is worth 0.
pub fn node_values(board: &Board, graph: &OutcomeGraph) -> Vec<f64> {
    let mut order: Vec<NodeId> = (0..graph.len()).collect();
    order.sort_by_key(|&id| Reverse(depth(graph.node(id), board.rows())));

    let mut values = vec![0.0; graph.len()];
    for id in order {
        let value = match graph.node(id) {
            Node::Slot(col) => board.slot_scores()[col] as f64,
            Node::Peg(_) => graph
                .edges(id)
                .iter()
                .map(|edge| edge.weight * values[edge.to])
                .sum::<f64>(),
        };
        values[id] = value;
    }
    values
}

/// Expected score of dropping into each column, one entry per column.
pub fn compute_expected_values(board: &Board) -> Vec<f64> {
    let graph = OutcomeGraph::build(board);
    let values = node_values(board, &graph);
    graph.start_nodes().iter().map(|&id| values[id]).collect()
}

/// Index and value of the first maximum. Later columns only win on a
/// strictly greater value.
pub fn best_column(values: &[f64]) -> (usize, f64) {
    let mut best = (0, values.first().copied().unwrap_or(0.0));
    for (col, &value) in values.iter().enumerate().skip(1) {
        if value > best.1 {
            best = (col, value);
        }
    }
    best
}

/// The column with the highest expected score; ties go to the lowest index.
pub fn choose_best_column(board: &Board) -> (usize, f64) {
    let values = compute_expected_values(board);
    let (col, value) = best_column(&values);
    log::debug!("best column {col} (expected {value:.2}) from {values:?}");
    (col, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{parse, OffBoardPolicy};

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_one_value_per_column() {
        let board = Board::default_board();
        assert_eq!(compute_expected_values(&board).len(), board.columns());
    }

    #[test]
    fn test_no_pegs_returns_slot_scores() {
        let board = Board::empty(4, vec![3, -1, 8, 0]).unwrap();
        assert_close(&compute_expected_values(&board), &[3.0, -1.0, 8.0, 0.0]);
    }

    #[test]
    fn test_single_peg_scenario() {
        let board = parse(&[".o."], vec![5, 7, 9]).unwrap();
        assert_close(&compute_expected_values(&board), &[5.0, 7.0, 9.0]);
        assert_eq!(choose_best_column(&board), (2, 9.0));
    }

    #[test]
    fn test_single_peg_averages_its_slots() {
        let board = parse(&["...", ".o."], vec![10, 0, 30]).unwrap();
        assert_close(&compute_expected_values(&board)[1..2], &[20.0]);
    }

    #[test]
    fn test_two_level_expectation() {
        // Peg (0,2) splits onto pegs (1,1) and (1,3), each splitting to slots.
        let board = parse(&["..o..", ".o.o."], vec![0, 4, 8, 12, 16]).unwrap();
        let values = compute_expected_values(&board);
        // (1,1) -> 0 and 8 = 4; (1,3) -> 8 and 16 = 12; (0,2) -> 8
        assert_close(&values, &[0.0, 4.0, 8.0, 12.0, 16.0]);
    }

    #[test]
    fn test_both_branches_off_board_is_worth_zero() {
        let board = parse(&["o"], vec![50]).unwrap();
        assert_close(&compute_expected_values(&board), &[0.0]);
    }

    #[test]
    fn test_off_board_policies() {
        let board = parse(&["o.."], vec![100, 40, 0]).unwrap();
        assert_close(&compute_expected_values(&board), &[40.0, 40.0, 0.0]);

        let lost = board.with_off_board_policy(OffBoardPolicy::Lost);
        assert_close(&compute_expected_values(&lost), &[20.0, 40.0, 0.0]);
    }

    #[test]
    fn test_ties_resolve_to_lowest_column() {
        let board = Board::empty(1, vec![3, 9, 9, 2]).unwrap();
        assert_eq!(choose_best_column(&board), (1, 9.0));

        // Mirror-image columns.
        let board = parse(&[".o.", "o.o"], vec![5, 1, 5]).unwrap();
        let values = compute_expected_values(&board);
        assert_eq!(values[0], values[2]);
        assert_eq!(choose_best_column(&board).0, 0);
    }

    #[test]
    fn test_best_column_of_empty_slice() {
        assert_eq!(best_column(&[]), (0, 0.0));
    }

    #[test]
    fn test_values_track_board_edits() {
        let mut board = Board::empty(1, vec![0, 10, 20]).unwrap();
        assert_close(&compute_expected_values(&board), &[0.0, 10.0, 20.0]);
        board.add_peg(0, 1).unwrap();
        assert_close(&compute_expected_values(&board), &[0.0, 10.0, 20.0]);
        board.add_peg(0, 2).unwrap();
        // (0,2) nudges left onto slot 1; (0,1) splits to slot 0 and slot 2.
        assert_close(&compute_expected_values(&board), &[0.0, 10.0, 10.0]);
    }
}
