//! Anti-duplication tile search with escalating color tolerance
//!
//! Each cycle runs up to three passes over the library at the current
//! threshold:
//!
//! 1. Primary: the first unused tile (ascending identifier) within the
//!    threshold wins. Tiles within the threshold that are already used are
//!    skipped but remembered as a near hit.
//! 2. Widened: only after a near hit, the first unused tile within
//!    `threshold + WIDENED_MARGIN` wins.
//! 3. Fallback: the first used tile (in the order tiles were placed) within
//!    the cycle's threshold is placed again. The used set is unchanged.
//!
//! When all three passes fail the threshold grows by `THRESHOLD_STEP` and the
//! cycle repeats. Delta E is bounded, so once the threshold passes the
//! largest distance to the target some tile qualifies in pass 1 or pass 3.

use crate::algorithm::session::MatchSession;
use crate::color::average::Color;
use crate::color::distance::{lab_distance, to_lab};
use crate::io::configuration::{
    INITIAL_THRESHOLD, THRESHOLD_CEILING, THRESHOLD_STEP, WIDENED_MARGIN,
};
use crate::library::tiles::{Tile, TileLibrary};

/// Tolerances controlling the threshold escalation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileMatcher {
    /// Threshold of the first cycle
    pub initial_threshold: f64,
    /// Threshold increase after a failed cycle
    pub threshold_step: f64,
    /// Extra tolerance of the widened pass
    pub widened_margin: f64,
    /// Threshold at which escalation gives up
    pub threshold_ceiling: f64,
}

impl Default for TileMatcher {
    fn default() -> Self {
        Self {
            initial_threshold: INITIAL_THRESHOLD,
            threshold_step: THRESHOLD_STEP,
            widened_margin: WIDENED_MARGIN,
            threshold_ceiling: THRESHOLD_CEILING,
        }
    }
}

impl TileMatcher {
    /// Select a tile for a cell color and record it in the session
    ///
    /// Returns `None` only when no tile qualifies below the ceiling, which
    /// cannot happen for a loaded library and a target on the 0-255 scale.
    pub fn match_tile<'a>(
        &self,
        target: Color,
        session: &mut MatchSession,
        library: &'a TileLibrary,
    ) -> Option<&'a Tile> {
        let target_lab = to_lab(target);
        // Indexed by tile identifier
        let distances: Vec<f64> = library
            .iter()
            .map(|tile| lab_distance(target_lab, tile.lab()))
            .collect();

        for cycle in 0..self.cycle_count() {
            let threshold = self.threshold_step.mul_add(f64::from(cycle), self.initial_threshold);
            if let Some(tile) = self.run_cycle(threshold, &distances, session, library) {
                return Some(tile);
            }
            session.stats_mut().escalations += 1;
        }

        log::warn!("No tile within {} of {target:?}", self.threshold_ceiling);
        None
    }

    /// Number of thresholds tried before giving up
    ///
    /// Counts `initial + step * k` for every `k` that stays within the ceiling.
    pub fn cycle_count(&self) -> u32 {
        if self.threshold_ceiling < self.initial_threshold {
            return 0;
        }
        let span = (self.threshold_ceiling - self.initial_threshold) / self.threshold_step;
        (span.floor() as u32).saturating_add(1)
    }

    fn run_cycle<'a>(
        &self,
        threshold: f64,
        distances: &[f64],
        session: &mut MatchSession,
        library: &'a TileLibrary,
    ) -> Option<&'a Tile> {
        let mut hit_match = false;
        for (tile, &distance) in library.iter().zip(distances) {
            if distance <= threshold {
                if session.is_used(tile.id()) {
                    hit_match = true;
                    continue;
                }
                session.mark_used(tile.id());
                session.stats_mut().primary += 1;
                return Some(tile);
            }
        }

        if hit_match {
            let widened = threshold + self.widened_margin;
            let candidate = library
                .iter()
                .zip(distances)
                .find(|&(tile, &distance)| !session.is_used(tile.id()) && distance <= widened)
                .map(|(tile, _)| tile);
            if let Some(tile) = candidate {
                session.mark_used(tile.id());
                session.stats_mut().widened += 1;
                return Some(tile);
            }
        }

        let reused = session
            .used_tiles()
            .iter()
            .find(|&&id| distances.get(id).is_some_and(|&distance| distance <= threshold))
            .and_then(|&id| library.get(id));
        if let Some(tile) = reused {
            log::debug!("Reusing tile {} at threshold {threshold}", tile.id());
            session.stats_mut().reused += 1;
        }
        reused
    }
}

/// Select a tile with the default tolerances
///
/// Shorthand for [`TileMatcher::match_tile`] on [`TileMatcher::default`].
pub fn match_tile<'a>(
    target: Color,
    session: &mut MatchSession,
    library: &'a TileLibrary,
) -> Option<&'a Tile> {
    TileMatcher::default().match_tile(target, session, library)
}
