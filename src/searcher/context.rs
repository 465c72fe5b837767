use std::time::{Duration, Instant};

use crate::state::{GameState, GameTree, Multiplier, NodeId};

use super::{NodeValue, SearchResult, DEFAULT_SEARCH_DEPTH};

/// Search configuration parameters.
struct SearchConfig {
    depth: u8,
}

/// Statistics collected during the most recent search.
#[derive(Default)]
struct SearchStats {
    position_count: usize,
    started_at: Option<Instant>,
    last_move: Option<Multiplier>,
    last_score: Option<f64>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn record_result(&mut self, value: NodeValue, duration: Duration) {
        self.last_move = value.best_move;
        self.last_score = Some(value.score);
        self.last_duration = Some(duration);
    }
}

/// Owns everything one search needs between calls: the configured depth,
/// the counters for the most recent search, and the scratch arena the search
/// expands hypothetical positions into.
pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
    tree: GameTree,
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl SearchContext {
    pub fn new(depth: u8) -> Self {
        Self {
            config: SearchConfig { depth },
            stats: SearchStats::default(),
            tree: GameTree::new(),
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.config.depth
    }

    pub fn set_search_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count
    }

    pub fn last_move(&self) -> Option<Multiplier> {
        self.stats.last_move
    }

    pub fn last_score(&self) -> Option<f64> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    /// Positions explored by the most recent search.
    pub fn tree(&self) -> &GameTree {
        &self.tree
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
        self.tree.clear();
    }

    /// Discards the previous search and seeds the arena with a copy of `state`.
    pub(super) fn begin(&mut self, state: &GameState) -> NodeId {
        self.reset_stats();
        self.stats.started_at = Some(Instant::now());
        self.tree.add_root(*state)
    }

    pub(super) fn finish(&mut self, value: NodeValue) -> SearchResult {
        let duration = self
            .stats
            .started_at
            .take()
            .map(|start| start.elapsed())
            .unwrap_or_default();
        self.stats.record_result(value, duration);

        SearchResult {
            best_move: value.best_move,
            score: value.score,
            nodes_visited: self.stats.position_count,
            duration,
        }
    }

    pub(super) fn increment_position_count(&mut self) {
        self.stats.position_count += 1;
    }

    pub(super) fn tree_mut(&mut self) -> &mut GameTree {
        &mut self.tree
    }
}
