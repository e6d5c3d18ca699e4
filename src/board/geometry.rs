//! Per-square direction masks for king steps and knight jumps.
//!
//! Bit `i` of `KING_DIRECTIONS[sq]` is set when a step in king direction `i`
//! stays on the board; likewise for `KNIGHT_DIRECTIONS` and knight jumps.
//! Sliders walk king directions, so the same mask stops them at the edge.

use once_cell::sync::Lazy;

use super::Square;

// King step directions, bit order: N, NE, E, SE, S, SW, W, NW
const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

// Knight jump directions, bit order: NNE, ENE, ESE, SSE, SSW, WSW, WNW, NNW
const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Square index offset per king direction
pub(crate) const KING_STEPS: [i8; 8] = offsets(KING_DELTAS);

/// Square index offset per knight direction
pub(crate) const KNIGHT_JUMPS: [i8; 8] = offsets(KNIGHT_DELTAS);

pub(crate) const ROOK_DIRECTIONS: u8 = 0b0101_0101;
pub(crate) const BISHOP_DIRECTIONS: u8 = 0b1010_1010;
pub(crate) const QUEEN_DIRECTIONS: u8 = ROOK_DIRECTIONS | BISHOP_DIRECTIONS;

pub(crate) static KING_DIRECTIONS: Lazy<[u8; 64]> = Lazy::new(|| direction_masks(&KING_DELTAS));

pub(crate) static KNIGHT_DIRECTIONS: Lazy<[u8; 64]> =
    Lazy::new(|| direction_masks(&KNIGHT_DELTAS));

const fn offsets(deltas: [(i8, i8); 8]) -> [i8; 8] {
    let mut out = [0i8; 8];
    let mut i = 0;
    while i < 8 {
        out[i] = deltas[i].0 * 8 + deltas[i].1;
        i += 1;
    }
    out
}

fn direction_masks(deltas: &[(i8, i8); 8]) -> [u8; 64] {
    let mut masks = [0u8; 64];
    for (sq, slot) in masks.iter_mut().enumerate() {
        let r = (sq / 8) as i8;
        let f = (sq % 8) as i8;
        for (bit, (dr, df)) in deltas.iter().enumerate() {
            if (0..8).contains(&(r + dr)) && (0..8).contains(&(f + df)) {
                *slot |= 1 << bit;
            }
        }
    }
    masks
}

/// Direction indices set in `mask`, lowest bit first
#[inline]
pub(crate) fn directions(mask: u8) -> impl Iterator<Item = usize> {
    (0..8).filter(move |&bit| mask & (1u8 << bit) != 0)
}

/// Squares one king step away from `sq`
#[inline]
pub(crate) fn king_steps(sq: Square) -> impl Iterator<Item = Square> {
    directions(KING_DIRECTIONS[sq.index()]).map(move |dir| sq.offset(KING_STEPS[dir]))
}

/// Squares one knight jump away from `sq`
#[inline]
pub(crate) fn knight_jumps(sq: Square) -> impl Iterator<Item = Square> {
    directions(KNIGHT_DIRECTIONS[sq.index()]).map(move |dir| sq.offset(KNIGHT_JUMPS[dir]))
}

/// Walk from `sq` in king direction `dir`, yielding squares up to the board edge
pub(crate) fn ray(sq: Square, dir: usize) -> impl Iterator<Item = Square> {
    let mut current = sq;
    std::iter::from_fn(move || {
        if KING_DIRECTIONS[current.index()] & (1 << dir) == 0 {
            return None;
        }
        current = current.offset(KING_STEPS[dir]);
        Some(current)
    })
}
