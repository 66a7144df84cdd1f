//! Block scheduler: packs every project's weekly blocks into the slot grid.
//!
//! DESIGN
//! ======
//! Each project needs `blocks_per_week` blocks of contiguous slots, each on
//! a distinct available day. Fixed constraints and other blocks may not be
//! overlapped. Among all complete placements, the solver prefers the one
//! that spreads each multi-block project widest across the week: the sum
//! over projects of (last block day - first block day).
//!
//! The search is a depth-first branch and bound:
//! - projects are placed most-demanding first;
//! - for each project, day combinations are tried widest spread first, so
//!   the first complete placement is usually already good;
//! - a branch is cut when its score plus the best possible spread of the
//!   remaining projects cannot beat the incumbent.
//!
//! TRADE-OFFS
//! ==========
//! The search is exact but exponential. A node budget caps the work; when it
//! runs out, the best placement so far is returned as `Feasible` rather than
//! `Optimal`.

use serde::{Deserialize, Serialize};

use crate::clock::{ClockTime, SlotGrid};
use crate::model::PlanRequest;
use crate::weekday::Weekday;

pub const DEFAULT_NODE_BUDGET: u64 = 200_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum number of block placements tried before giving up on optimality.
    pub node_budget: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { node_budget: DEFAULT_NODE_BUDGET }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolveStatus {
    /// Best possible placement found.
    Optimal,
    /// A complete placement found, not proven best.
    Feasible,
    /// Proven that no complete placement exists.
    Infeasible,
    /// Budget ran out before any complete placement was found.
    Unknown,
}

impl SolveStatus {
    #[must_use]
    pub fn has_solution(self) -> bool {
        matches!(self, Self::Optimal | Self::Feasible)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("constraint '{name}' is on {day}, which is not an available day")]
    DayUnavailable { name: String, day: Weekday },
    #[error("constraint '{name}' time {time} is not a half-hour slot inside the window")]
    OffGrid { name: String, time: ClockTime },
}

/// One placed block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Index into `PlanRequest::projects`.
    pub project: usize,
    /// Block number within the project, in day order.
    pub block: usize,
    /// Index into `PlanRequest::days`.
    pub day: usize,
    pub start_slot: usize,
    pub len: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub status: SolveStatus,
    /// Empty unless `status.has_solution()`. Sorted by project, then block.
    pub placements: Vec<Placement>,
    /// Total spread score of `placements`.
    pub score: u32,
    /// Slots blocked by fixed constraints, `[day][slot]`.
    pub blocked: Vec<Vec<Option<usize>>>,
}

/// Schedule every project block of `request`.
///
/// # Errors
///
/// Returns [`SolveError`] when a fixed constraint names a day that is not
/// available or a time that is not on the slot grid.
pub fn schedule_blocks(request: &PlanRequest, config: &SolverConfig) -> Result<Schedule, SolveError> {
    let grid = request.grid();
    let days = request.days();
    let blocked = blocked_slots(request, &days, &grid)?;
    let n_days = days.len();
    let n_slots = grid.len();

    let mut jobs: Vec<Job> = request
        .projects
        .iter()
        .enumerate()
        .filter(|(_, p)| p.blocks_per_week > 0 && p.block_slots() > 0)
        .map(|(project, p)| Job {
            project,
            blocks: p.blocks_per_week as usize,
            len: p.block_slots(),
            combos: Vec::new(),
        })
        .collect();

    let free_slots = blocked.iter().flatten().filter(|cell| cell.is_none()).count();
    let demand = jobs.iter().fold(0_usize, |acc, j| acc.saturating_add(j.blocks.saturating_mul(j.len)));
    let impossible = demand > free_slots || jobs.iter().any(|j| j.blocks > n_days || j.len > n_slots);
    if impossible {
        return Ok(Schedule { status: SolveStatus::Infeasible, placements: Vec::new(), score: 0, blocked });
    }

    jobs.sort_by_key(|j| std::cmp::Reverse(j.blocks * j.len));
    for job in &mut jobs {
        job.combos = day_combinations(n_days, job.blocks);
    }

    let mut search = Search::new(jobs, n_slots, &blocked, config.node_budget);
    search.place_job(0, 0);

    let status = match (&search.best, search.exhausted) {
        (Some(_), false) => SolveStatus::Optimal,
        (Some(_), true) => SolveStatus::Feasible,
        (None, false) => SolveStatus::Infeasible,
        (None, true) => SolveStatus::Unknown,
    };
    let (score, mut placements) = search.best.unwrap_or_default();
    placements.sort_by_key(|p| (p.project, p.block));
    Ok(Schedule { status, placements, score, blocked })
}

/// Mark fixed-constraint slots with the constraint's index.
fn blocked_slots(
    request: &PlanRequest,
    days: &[Weekday],
    grid: &SlotGrid,
) -> Result<Vec<Vec<Option<usize>>>, SolveError> {
    let mut blocked = vec![vec![None; grid.len()]; days.len()];
    for (idx, constraint) in request.constraints.iter().enumerate() {
        let day = days
            .iter()
            .position(|d| *d == constraint.day)
            .ok_or_else(|| SolveError::DayUnavailable { name: constraint.name.clone(), day: constraint.day })?;
        let off_grid = |time| SolveError::OffGrid { name: constraint.name.clone(), time };
        let start = grid.index_of(constraint.start_time).ok_or_else(|| off_grid(constraint.start_time))?;
        let end = grid.boundary_of(constraint.end_time).ok_or_else(|| off_grid(constraint.end_time))?;
        for cell in blocked[day].iter_mut().take(end).skip(start) {
            *cell = Some(idx);
        }
    }
    Ok(blocked)
}

/// All `k`-subsets of `0..n`, widest spread first.
fn day_combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn extend(n: usize, k: usize, from: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for day in from..n {
            current.push(day);
            extend(n, k, day + 1, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    if k > 0 && k <= n {
        extend(n, k, 0, &mut Vec::with_capacity(k), &mut out);
    }
    out.sort_by_key(|combo| std::cmp::Reverse(spread(combo)));
    out
}

fn spread(days: &[usize]) -> u32 {
    match (days.first(), days.last()) {
        (Some(first), Some(last)) => u32::try_from(last - first).unwrap_or(u32::MAX),
        _ => 0,
    }
}

// =============================================================================
// SEARCH
// =============================================================================

struct Job {
    project: usize,
    blocks: usize,
    len: usize,
    combos: Vec<Vec<usize>>,
}

struct Search {
    jobs: Vec<Job>,
    n_slots: usize,
    occupied: Vec<Vec<bool>>,
    current: Vec<Placement>,
    best: Option<(u32, Vec<Placement>)>,
    /// Best achievable spread for `jobs[i..]`.
    suffix_bound: Vec<u32>,
    nodes: u64,
    budget: u64,
    exhausted: bool,
}

impl Search {
    fn new(jobs: Vec<Job>, n_slots: usize, blocked: &[Vec<Option<usize>>], budget: u64) -> Self {
        let occupied = blocked
            .iter()
            .map(|day| day.iter().map(Option::is_some).collect())
            .collect();
        let mut suffix_bound = vec![0; jobs.len() + 1];
        for i in (0..jobs.len()).rev() {
            let widest = jobs[i].combos.first().map_or(0, |c| spread(c));
            suffix_bound[i] = suffix_bound[i + 1] + widest;
        }
        Self {
            jobs,
            n_slots,
            occupied,
            current: Vec::new(),
            best: None,
            suffix_bound,
            nodes: 0,
            budget,
            exhausted: false,
        }
    }

    fn done(&self) -> bool {
        self.exhausted || self.best.as_ref().is_some_and(|(score, _)| *score >= self.suffix_bound[0])
    }

    fn place_job(&mut self, j: usize, score: u32) {
        if self.done() {
            return;
        }
        if j == self.jobs.len() {
            if self.best.as_ref().is_none_or(|(best, _)| score > *best) {
                self.best = Some((score, self.current.clone()));
            }
            return;
        }
        if !self.remaining_fit(j) {
            return;
        }
        for combo in 0..self.jobs[j].combos.len() {
            let gain = spread(&self.jobs[j].combos[combo]);
            if let Some((best, _)) = &self.best {
                // Combos are sorted by spread, so no later combo can do better.
                if score + gain + self.suffix_bound[j + 1] <= *best {
                    break;
                }
            }
            self.place_block(j, combo, 0, score + gain);
            if self.done() {
                return;
            }
        }
    }

    /// Forward check: every unplaced job still has enough days with a free
    /// run long enough for one of its blocks.
    fn remaining_fit(&self, from: usize) -> bool {
        self.jobs[from..].iter().all(|job| {
            let days = self.occupied.iter().filter(|day| longest_free_run(day) >= job.len).count();
            days >= job.blocks
        })
    }

    fn place_block(&mut self, j: usize, combo: usize, block: usize, score: u32) {
        let job = &self.jobs[j];
        if block == job.blocks {
            self.place_job(j + 1, score);
            return;
        }
        let (project, len, day) = (job.project, job.len, job.combos[combo][block]);

        for start in 0..=(self.n_slots - len) {
            if self.done() {
                return;
            }
            if self.occupied[day][start..start + len].iter().any(|taken| *taken) {
                continue;
            }
            self.nodes += 1;
            if self.nodes > self.budget {
                self.exhausted = true;
                return;
            }
            self.occupied[day][start..start + len].fill(true);
            self.current.push(Placement { project, block, day, start_slot: start, len });
            self.place_block(j, combo, block + 1, score);
            self.current.pop();
            self.occupied[day][start..start + len].fill(false);
        }
    }
}

fn longest_free_run(day: &[bool]) -> usize {
    let mut longest = 0;
    let mut run = 0;
    for taken in day {
        run = if *taken { 0 } else { run + 1 };
        longest = longest.max(run);
    }
    longest
}

#[cfg(test)]
#[path = "solver_test.rs"]
mod tests;
