//! Winning line generation for N×N boards.

use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which family a winning line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineKind {
    /// Horizontal line through the given row.
    #[display("row {}", _0)]
    Row(usize),
    /// Vertical line through the given column.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// A set of N cell indices that wins when uniformly occupied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Line {
    kind: LineKind,
    cells: Vec<usize>,
}

impl Line {
    /// Returns the line family.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Returns the cell indices, in board order.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Checks whether the line passes through a cell.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Generates every winning line for a board with the given side length.
///
/// Order is rows, then columns, then the main diagonal and the
/// anti-diagonal, giving `2 * side + 2` lines.
#[instrument]
pub fn lines_for(side: usize) -> Vec<Line> {
    let rows = (0..side).map(|r| {
        Line::new(LineKind::Row(r), (0..side).map(|c| r * side + c).collect())
    });
    let columns = (0..side).map(|c| {
        Line::new(LineKind::Column(c), (0..side).map(|r| r * side + c).collect())
    });
    let diagonal = Line::new(LineKind::Diagonal, (0..side).map(|k| k * (side + 1)).collect());
    let anti_diagonal = Line::new(
        LineKind::AntiDiagonal,
        (0..side).map(|k| (k + 1) * (side - 1)).collect(),
    );

    rows.chain(columns)
        .chain([diagonal, anti_diagonal])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_line_count_and_shape() {
        for side in [3, 4, 5] {
            let lines = lines_for(side);
            assert_eq!(lines.len(), 2 * side + 2);
            for line in &lines {
                assert_eq!(line.cells().len(), side);
                assert!(line.cells().iter().all(|&i| i < side * side));
            }
            let unique: HashSet<Vec<usize>> = lines.iter().map(|l| l.cells().to_vec()).collect();
            assert_eq!(unique.len(), lines.len());
        }
    }

    #[test]
    fn test_three_matches_classic_table() {
        let cells: Vec<Vec<usize>> = lines_for(3).iter().map(|l| l.cells().to_vec()).collect();
        assert_eq!(
            cells,
            vec![
                vec![0, 1, 2],
                vec![3, 4, 5],
                vec![6, 7, 8],
                vec![0, 3, 6],
                vec![1, 4, 7],
                vec![2, 5, 8],
                vec![0, 4, 8],
                vec![2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_five_diagonals() {
        let lines = lines_for(5);
        let diagonal = lines.iter().find(|l| l.kind() == LineKind::Diagonal).unwrap();
        let anti = lines.iter().find(|l| l.kind() == LineKind::AntiDiagonal).unwrap();
        assert_eq!(diagonal.cells(), &[0, 6, 12, 18, 24]);
        assert_eq!(anti.cells(), &[4, 8, 12, 16, 20]);
    }

    #[test]
    fn test_four_columns() {
        let lines = lines_for(4);
        assert_eq!(lines[4].kind(), LineKind::Column(0));
        assert_eq!(lines[4].cells(), &[0, 4, 8, 12]);
        assert_eq!(lines[7].cells(), &[3, 7, 11, 15]);
    }
}
