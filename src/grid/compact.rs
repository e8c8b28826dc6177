//! Vertical compaction and collision handling.
//!
//! Compaction moves every panel up as far as it can go. Panels are visited in
//! ascending row order, ties broken by their position in the input (never by
//! identifier), and each is placed at the smallest row where it overlaps no
//! panel placed before it. The output keeps the input order.

use super::position::GridPosition;

/// Compacts `positions` vertically on a grid of `columns`.
///
/// Every position is first forced on-grid, so the result never exceeds the
/// column count. Compacting an already compacted sequence returns it
/// unchanged.
pub fn compact(positions: &[GridPosition], columns: u32) -> Vec<GridPosition> {
    let mut out: Vec<GridPosition> = positions.to_vec();
    for pos in &mut out {
        pos.fit_to_columns(columns);
    }

    let mut order: Vec<usize> = (0..out.len()).collect();
    // Stable sort: equal rows keep input order.
    order.sort_by_key(|&i| out[i].row);

    let mut placed: Vec<usize> = Vec::with_capacity(out.len());
    for i in order {
        out[i].row = lowest_free_row(&out, &placed, i);
        placed.push(i);
    }
    out
}

/// Smallest row where `out[index]` overlaps none of the `placed` panels.
fn lowest_free_row(out: &[GridPosition], placed: &[usize], index: usize) -> u32 {
    let mut candidate = out[index].clone();
    candidate.row = 0;
    loop {
        // Every blocker covers the rows from `candidate.row` down to its own
        // bottom, so the next row that can possibly fit is below all of them.
        let next = placed
            .iter()
            .map(|&j| &out[j])
            .filter(|other| other.overlaps(&candidate))
            .map(GridPosition::bottom)
            .max();
        match next {
            Some(row) => candidate.row = row,
            None => return candidate.row,
        }
    }
}

/// Pushes every panel that collides with `positions[anchor]` to just below
/// it, cascading through panels those pushes collide with.
///
/// The anchor itself never moves. Panels only ever move down, and colliding
/// panels are pushed top-most first so their relative order is kept.
pub fn push_down_collisions(positions: &mut [GridPosition], anchor: usize) {
    push_below(positions, anchor, anchor);
}

fn push_below(positions: &mut [GridPosition], pusher: usize, anchor: usize) {
    let mut colliding: Vec<usize> = (0..positions.len())
        .filter(|&i| i != pusher && i != anchor && positions[i].overlaps(&positions[pusher]))
        .collect();
    colliding.sort_by_key(|&i| positions[i].row);

    for i in colliding {
        // An earlier cascade may already have moved this one clear.
        if !positions[i].overlaps(&positions[pusher]) {
            continue;
        }
        let bottom = positions[pusher].bottom();
        positions[i].row = bottom;
        push_below(positions, i, anchor);
    }
}

/// First empty row below every panel (the grid height).
pub fn grid_height(positions: &[GridPosition]) -> u32 {
    positions.iter().map(GridPosition::bottom).max().unwrap_or(0)
}

/// Whether any two positions share a cell.
pub fn has_overlap(positions: &[GridPosition]) -> bool {
    positions
        .iter()
        .enumerate()
        .any(|(i, a)| positions[i + 1..].iter().any(|b| a.overlaps(b)))
}
