use crate::api::{PlayerId, RosterPlayer};

use super::error::TrackerError;

/// Players in the water at once
pub const LINEUP_SIZE: usize = 7;

pub const NO_GOALKEEPER_WARNING: &str = "No goalkeeper in water";

/// Who is in the water for the active period, plus a pending substitution
///
/// `in_water` keeps insertion order and never holds duplicates. While a
/// substitution or lineup save is outstanding, further confirms and saves are
/// dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineupTracker {
    in_water: Vec<PlayerId>,
    pending_out: Option<PlayerId>,
    pending_in: Option<PlayerId>,
    in_flight: bool,
}

impl LineupTracker {
    pub fn in_water(&self) -> &[PlayerId] {
        &self.in_water
    }

    pub fn is_in_water(&self, player_id: PlayerId) -> bool {
        self.in_water.contains(&player_id)
    }

    pub fn pending_out(&self) -> Option<PlayerId> {
        self.pending_out
    }

    pub fn pending_in(&self) -> Option<PlayerId> {
        self.pending_in
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Re-seed from a period's saved lineup, discarding unsaved edits
    pub fn select_period(&mut self, saved: Option<&[PlayerId]>) {
        self.in_water.clear();
        for &id in saved.unwrap_or_default() {
            if !self.in_water.contains(&id) {
                self.in_water.push(id);
            }
        }
        self.pending_out = None;
        self.pending_in = None;
    }

    /// Fill a free slot, or mark the player as coming in
    pub fn toggle_bench_player(&mut self, player_id: PlayerId) {
        if self.is_in_water(player_id) {
            return;
        }
        if self.in_water.len() < LINEUP_SIZE && self.pending_out.is_none() {
            self.in_water.push(player_id);
        } else {
            self.pending_in = Some(player_id);
        }
    }

    pub fn select_in_water_player(&mut self, player_id: PlayerId) {
        if self.is_in_water(player_id) {
            self.pending_out = Some(player_id);
        }
    }

    /// Claim the pending pair for a remote call, as `(out, in)`
    ///
    /// Returns `None` without changing anything when the pair is incomplete,
    /// no longer valid, or another call is outstanding.
    pub fn begin_substitution(&mut self) -> Option<(PlayerId, PlayerId)> {
        if self.in_flight {
            return None;
        }
        let (out, into) = (self.pending_out?, self.pending_in?);
        if !self.is_in_water(out) || self.is_in_water(into) {
            return None;
        }
        self.in_flight = true;
        Some((out, into))
    }

    /// Apply a confirmed substitution in place of the outgoing player
    ///
    /// A pair picked while the call was outstanding stays pending.
    pub fn complete_substitution(&mut self, out: PlayerId, into: PlayerId) {
        self.in_flight = false;
        if let Some(slot) = self.in_water.iter().position(|&id| id == out) {
            if self.is_in_water(into) {
                self.in_water.remove(slot);
            } else {
                self.in_water[slot] = into;
            }
        }
        if self.pending_out == Some(out) {
            self.pending_out = None;
        }
        if self.pending_in == Some(into) {
            self.pending_in = None;
        }
    }

    /// Release the in-flight guard and keep the pending pair for a retry
    pub fn abort_substitution(&mut self) {
        self.in_flight = false;
    }

    /// Snapshot the in-water set for saving
    ///
    /// `Ok(None)` means a save is already outstanding.
    pub fn begin_save(&mut self) -> Result<Option<Vec<PlayerId>>, TrackerError> {
        if self.in_water.len() != LINEUP_SIZE {
            return Err(TrackerError::LineupSize { found: self.in_water.len() });
        }
        if self.in_flight {
            return Ok(None);
        }
        self.in_flight = true;
        Ok(Some(self.in_water.clone()))
    }

    pub fn finish_save(&mut self) {
        self.in_flight = false;
    }

    /// Roster players not in the water, by cap number
    pub fn bench<'a>(&self, roster: &'a [RosterPlayer]) -> Vec<&'a RosterPlayer> {
        let mut bench: Vec<&RosterPlayer> =
            roster.iter().filter(|r| !self.is_in_water(r.player_id)).collect();
        bench.sort_by_key(|r| r.cap_number);
        bench
    }

    pub fn in_water_players<'a>(&self, roster: &'a [RosterPlayer]) -> Vec<&'a RosterPlayer> {
        self.in_water
            .iter()
            .filter_map(|id| roster.iter().find(|r| r.player_id == *id))
            .collect()
    }

    pub fn goalkeepers_in_water<'a>(
        &self,
        roster: &'a [RosterPlayer],
        goalkeeper_caps: &[u8],
    ) -> Vec<&'a RosterPlayer> {
        self.in_water_players(roster)
            .into_iter()
            .filter(|r| goalkeeper_caps.contains(&r.cap_number))
            .collect()
    }

    /// Advisory only; never blocks a substitution or save
    pub fn goalkeeper_warning(
        &self,
        roster: &[RosterPlayer],
        goalkeeper_caps: &[u8],
    ) -> Option<&'static str> {
        if self.in_water.is_empty() || !self.goalkeepers_in_water(roster, goalkeeper_caps).is_empty() {
            None
        } else {
            Some(NO_GOALKEEPER_WARNING)
        }
    }
}
