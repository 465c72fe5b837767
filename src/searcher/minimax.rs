use log::debug;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::evaluate;
use crate::state::{GameState, Multiplier, NodeId, Player};

use super::{update_best, NodeValue, SearchContext, SearchError, SearchResult};

/// Plain minimax: every move is expanded down to `depth` plies or a terminal
/// state. `maximizing` is true when the computer acts at `state`.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn minimax(
    context: &mut SearchContext,
    state: &GameState,
    depth: u8,
    maximizing: bool,
) -> Result<SearchResult, SearchError> {
    debug!("minimax search depth: {}", depth);
    let root = context.begin(state);
    let value = minimax_node(context, root, depth, maximizing)?;
    Ok(context.finish(value))
}

fn minimax_node(
    context: &mut SearchContext,
    node: NodeId,
    depth: u8,
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
        let value = minimax_node(context, child, depth - 1, !maximizing)?;
        update_best(&mut best, *multiplier, value.score, maximizing);
    }

    Ok(best)
}
