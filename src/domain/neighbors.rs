use super::Grid;

/// Moore neighborhood offsets as (d_row, d_col), excluding the cell itself.
#[rustfmt::skip]
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Count live neighbors with fixed edges: positions outside the grid are dead.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (row, col) = (row as isize, col as isize);
    OFFSETS
        .iter()
        .filter(|&&(dr, dc)| grid.is_alive_at(row + dr, col + dc))
        .count() as u8
}
