//! Optimal lineup assignment.
//!
//! Players are matched to slot instances (2×C, 4×D, ...) by a maximum-weight
//! bipartite matching (Hungarian method). Every player also gets a private
//! zero-weight bench column, so the matrix is always solvable and any player
//! the matching leaves out of the active lineup falls through to the bench.

use log::debug;
use pathfinding::kuhn_munkres::kuhn_munkres;
use pathfinding::matrix::Matrix;
use serde::Serialize;

use crate::cli::types::SlotType;
use crate::engine::scoring::{ensure_unique_players, index_projections, score_indexed};
use crate::error::{FantasyError, Result};
use crate::league::{LeagueSettings, Player, Projection};


/// An active lineup slot and the player filling it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupSlot {
    pub slot_type: SlotType,
    pub player: Option<Player>,
    pub projection: Option<Projection>,
    pub projected_points: f64,
}

/// A player outside the active lineup. `slot_type` is `None` once BN and IR
/// capacity is used up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchedPlayer {
    pub slot_type: Option<SlotType>,
    pub player: Player,
    pub projection: Option<Projection>,
    pub projected_points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupResult {
    pub active_roster: Vec<LineupSlot>,
    pub bench: Vec<BenchedPlayer>,
    pub empty_slots: Vec<SlotType>,
    pub total_projected_points: f64,
}

/// Assign `roster` to the league's lineup slots, maximizing projected points.
///
/// Players without a projection are worth zero but are still placed. Ties in
/// total points go to the assignment favoring earlier roster entries.
pub fn optimize_lineup(
    roster: &[Player],
    projections: &[Projection],
    settings: &LeagueSettings,
) -> Result<LineupResult> {
    settings.validate()?;
    if settings.weights().is_none() {
        return Err(FantasyError::UnsupportedScoring);
    }
    ensure_unique_players(roster, "roster")?;
    let index = index_projections(projections)?;

    let scored = roster
        .iter()
        .map(|player| score_indexed(player, &index, settings))
        .collect::<Result<Vec<_>>>()?;
    let points: Vec<f64> = scored
        .iter()
        .map(|s| s.map(|(_, pts)| pts).unwrap_or(0.0))
        .collect();

    let slots = settings.roster_slots.expand();
    let active: Vec<SlotType> = slots.iter().copied().filter(|s| s.is_active()).collect();
    let reserve: Vec<SlotType> = slots.iter().copied().filter(|s| !s.is_active()).collect();

    let assignment = solve_assignment(roster, &points, &active)?;

    let mut filled: Vec<Option<usize>> = vec![None; active.len()];
    for (player_idx, slot_idx) in assignment.iter().enumerate() {
        if let Some(slot_idx) = slot_idx {
            filled[*slot_idx] = Some(player_idx);
        }
    }

    let mut active_roster = Vec::new();
    let mut empty_slots = Vec::new();
    let mut total_projected_points = 0.0;
    for (slot_idx, occupant) in filled.iter().enumerate() {
        match occupant {
            Some(player_idx) => {
                total_projected_points += points[*player_idx];
                active_roster.push(LineupSlot {
                    slot_type: active[slot_idx],
                    player: Some(roster[*player_idx].clone()),
                    projection: scored[*player_idx].map(|(p, _)| p.clone()),
                    projected_points: points[*player_idx],
                });
            }
            None => empty_slots.push(active[slot_idx]),
        }
    }

    let mut reserve_slots = reserve.into_iter();
    let bench = roster
        .iter()
        .enumerate()
        .filter(|(idx, _)| assignment[*idx].is_none())
        .map(|(idx, player)| BenchedPlayer {
            slot_type: reserve_slots.next(),
            player: player.clone(),
            projection: scored[idx].map(|(p, _)| p.clone()),
            projected_points: points[idx],
        })
        .collect();

    Ok(LineupResult {
        active_roster,
        bench,
        empty_slots,
        total_projected_points,
    })
}

/// Split a finite `x` into `(mantissa, exponent)` with `x == mantissa * 2^exponent`
/// and an odd mantissa. Zero has no such form.
fn dyadic_parts(x: f64) -> Option<(i128, i32)> {
    if x == 0.0 {
        return None;
    }
    let bits = x.to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if exp_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exp_bits - 1075)
    };
    let shift = mantissa.trailing_zeros();
    let mantissa = (mantissa >> shift) as i128;
    let signed = if x.is_sign_negative() { -mantissa } else { mantissa };
    Some((signed, exponent + shift as i32))
}

/// Exact integer images of `points` on a common power-of-two grid, so sums
/// compare exactly as the underlying f64 values do.
fn exact_weights(points: &[f64]) -> Result<Vec<i128>> {
    let parts: Vec<Option<(i128, i32)>> = points.iter().map(|p| dyadic_parts(*p)).collect();
    let Some(base) = parts.iter().flatten().map(|(_, e)| *e).min() else {
        return Ok(vec![0; points.len()]);
    };

    parts
        .iter()
        .map(|part| match part {
            None => Ok(0),
            Some((mantissa, exponent)) => {
                let shift = (exponent - base) as u32;
                let width = 128 - mantissa.unsigned_abs().leading_zeros();
                if width + shift > 120 {
                    return Err(out_of_range());
                }
                Ok(mantissa << shift)
            }
        })
        .collect()
}

fn out_of_range() -> FantasyError {
    FantasyError::validation("projected points span too wide a range to optimize exactly")
}

/// Solve the player × slot matching. Returns, per player, the index of the
/// active slot instance it fills.
fn solve_assignment(
    roster: &[Player],
    points: &[f64],
    active: &[SlotType],
) -> Result<Vec<Option<usize>>> {
    let n = roster.len();
    let m = active.len();
    if n == 0 || m == 0 {
        return Ok(vec![None; n]);
    }

    // Earlier roster entries earn a bonus strictly smaller than one grid unit
    // in total, so it only decides between lineups with equal point totals.
    let tie_scale = (n * (n + 1) / 2) as i128 + 1;
    let weights = exact_weights(points)?
        .into_iter()
        .enumerate()
        .map(|(idx, w)| {
            w.checked_mul(tie_scale)
                .and_then(|w| w.checked_add((n - idx) as i128))
                .ok_or_else(out_of_range)
        })
        .collect::<Result<Vec<i128>>>()?;

    // The solver sums up to n + m weights while relabelling.
    let max_abs = weights.iter().map(|w| w.unsigned_abs()).max().unwrap_or(0);
    if max_abs
        .checked_mul((n + m) as u128)
        .map_or(true, |total| total > i128::MAX as u128)
    {
        return Err(out_of_range());
    }

    // Each row has a private zero-weight bench column, so any negative
    // weight keeps a player out of a slot they are not eligible for.
    let forbidden: i128 = -1;

    let matrix = Matrix::from_fn(n, m + n, |(row, col)| {
        if col >= m {
            0
        } else if active[col].accepts(&roster[row]) {
            weights[row]
        } else {
            forbidden
        }
    });

    debug!("Solving lineup assignment: {} players x {} active slots", n, m);
    let (_, columns) = kuhn_munkres(&matrix);

    Ok(columns
        .into_iter()
        .enumerate()
        .map(|(row, col)| (col < m && active[col].accepts(&roster[row])).then_some(col))
        .collect())
}
