//! Alpha-beta pruning over the same tree minimax explores.
//!
//! The window `[alpha, beta]` holds the scores that can still influence the
//! choice at the root: `alpha` is what the maximizer is already guaranteed,
//! `beta` what the minimizer is already guaranteed. As soon as `beta <= alpha`
//! at a node, its remaining siblings cannot change the result and are skipped.
//! Traversal order and tie-breaking are identical to minimax, so both return
//! the same move and score; alpha-beta just visits fewer nodes.

use log::debug;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::evaluate;
use crate::state::{GameState, Multiplier, NodeId, Player};

use super::{update_best, NodeValue, SearchContext, SearchError, SearchResult};

#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn alpha_beta(
    context: &mut SearchContext,
    state: &GameState,
    depth: u8,
    maximizing: bool,
) -> Result<SearchResult, SearchError> {
    debug!("alpha-beta search depth: {}", depth);
    let root = context.begin(state);
    let value = alpha_beta_node(
        context,
        root,
        depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        maximizing,
    )?;
    Ok(context.finish(value))
}

fn alpha_beta_node(
    context: &mut SearchContext,
    node: NodeId,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
) -> Result<NodeValue, SearchError> {
    context.increment_position_count();

    let state = *context.tree().state(node)?;
    if depth == 0 || state.is_terminal() {
        return Ok(NodeValue::leaf(evaluate::score(&state)));
    }

    let mover = Player::from_maximizing(maximizing);
    let mut best = NodeValue::unexplored(maximizing);

    for multiplier in Multiplier::ALL.iter() {
        let child = context.tree_mut().apply_move(node, *multiplier, mover)?;
        let value = alpha_beta_node(context, child, depth - 1, alpha, beta, !maximizing)?;
        update_best(&mut best, *multiplier, value.score, maximizing);

        if maximizing {
            alpha = alpha.max(best.score);
        } else {
            beta = beta.min(best.score);
        }

        if beta <= alpha {
            break;
        }
    }

    Ok(best)
}
