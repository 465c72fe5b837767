//! Arena-backed game tree.
//!
//! Every node is stored in a flat `Vec` and addressed by `NodeId`. A node
//! owns nothing: its `parent` is a navigational index used for depth and path
//! bookkeeping, and `children` lists the indices of nodes derived from it in
//! the order the moves were applied. Clearing the arena drops every node at
//! once, which is how a search discards its subtree between turns.

use smallvec::SmallVec;

use super::error::StateError;
use super::game_state::GameState;
use super::multiplier::Multiplier;
use super::player::Player;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    state: GameState,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 3]>,
    multiplier: Option<Multiplier>,
    depth: u8,
}

impl Node {
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The move that produced this node, `None` for a root.
    pub fn multiplier(&self) -> Option<Multiplier> {
        self.multiplier
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

#[derive(Clone, Debug, Default)]
pub struct GameTree {
    nodes: Vec<Node>,
}

impl GameTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(state: GameState) -> (Self, NodeId) {
        let mut tree = Self::new();
        let root = tree.add_root(state);
        (tree, root)
    }

    /// Adds a parentless node at depth 0.
    pub fn add_root(&mut self, state: GameState) -> NodeId {
        self.push(Node {
            state,
            parent: None,
            children: SmallVec::new(),
            multiplier: None,
            depth: 0,
        })
    }

    /// Applies `multiplier` for `mover` to the state at `parent` and links the
    /// resulting node under it. Nothing is added when the move is rejected.
    pub fn apply_move(
        &mut self,
        parent: NodeId,
        multiplier: Multiplier,
        mover: Player,
    ) -> Result<NodeId, StateError> {
        let parent_node = self.node(parent)?;
        let state = parent_node.state.apply(multiplier, mover)?;
        let depth = parent_node.depth.saturating_add(1);

        let child = self.push(Node {
            state,
            parent: Some(parent),
            children: SmallVec::new(),
            multiplier: Some(multiplier),
            depth,
        });
        self.nodes[parent.0].children.push(child);

        Ok(child)
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, StateError> {
        self.nodes
            .get(id.0)
            .ok_or(StateError::UnknownNodeError { id: id.0 })
    }

    pub fn state(&self, id: NodeId) -> Result<&GameState, StateError> {
        self.node(id).map(Node::state)
    }

    /// Node ids from the root down to `id`, inclusive.
    pub fn path_to(&self, id: NodeId) -> Result<Vec<NodeId>, StateError> {
        let mut path = vec![id];
        let mut current = self.node(id)?;
        while let Some(parent) = current.parent {
            path.push(parent);
            current = self.node(parent)?;
        }
        path.reverse();
        Ok(path)
    }

    /// Moves along the path from the root down to `id`.
    pub fn moves_to(&self, id: NodeId) -> Result<Vec<Multiplier>, StateError> {
        let path = self.path_to(id)?;
        let mut moves = Vec::with_capacity(path.len());
        for node_id in path {
            if let Some(multiplier) = self.node(node_id)?.multiplier {
                moves.push(multiplier);
            }
        }
        Ok(moves)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops every node but keeps the allocation for the next search.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_state() -> GameState {
        GameState::new(8, Player::Human).unwrap()
    }

    #[test]
    fn test_root_has_depth_zero_and_no_parent() {
        let (tree, root) = GameTree::with_root(root_state());
        let node = tree.node(root).unwrap();

        assert_eq!(node.depth(), 0);
        assert_eq!(node.parent(), None);
        assert_eq!(node.multiplier(), None);
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_apply_move_links_parent_and_child() {
        let (mut tree, root) = GameTree::with_root(root_state());
        let child = tree
            .apply_move(root, Multiplier::Three, Player::Human)
            .unwrap();

        let child_node = tree.node(child).unwrap();
        assert_eq!(child_node.depth(), 1);
        assert_eq!(child_node.parent(), Some(root));
        assert_eq!(child_node.state().number(), 24);
        assert_eq!(child_node.state().computer_score(), -1);
        assert_eq!(tree.node(root).unwrap().children(), &[child]);
    }

    #[test]
    fn test_children_keep_application_order() {
        let (mut tree, root) = GameTree::with_root(root_state());
        let children: Vec<NodeId> = Multiplier::ALL
            .iter()
            .map(|m| tree.apply_move(root, *m, Player::Human).unwrap())
            .collect();

        assert_eq!(tree.node(root).unwrap().children(), children.as_slice());
        let numbers: Vec<u32> = children
            .iter()
            .map(|id| tree.state(*id).unwrap().number())
            .collect();
        assert_eq!(numbers, vec![16, 24, 32]);
    }

    #[test]
    fn test_path_and_moves_to_leaf() {
        let (mut tree, root) = GameTree::with_root(root_state());
        let a = tree.apply_move(root, Multiplier::Two, Player::Human).unwrap();
        let b = tree.apply_move(a, Multiplier::Four, Player::Computer).unwrap();
        let c = tree.apply_move(b, Multiplier::Three, Player::Human).unwrap();

        assert_eq!(tree.path_to(c).unwrap(), vec![root, a, b, c]);
        assert_eq!(
            tree.moves_to(c).unwrap(),
            vec![Multiplier::Two, Multiplier::Four, Multiplier::Three]
        );
        assert_eq!(tree.node(c).unwrap().depth(), 3);
    }

    #[test]
    fn test_numbers_strictly_increase_along_paths() {
        let (mut tree, root) = GameTree::with_root(root_state());
        let mut frontier = vec![root];
        while let Some(id) = frontier.pop() {
            if tree.state(id).unwrap().is_terminal() {
                continue;
            }
            let mover = tree.state(id).unwrap().to_move();
            for multiplier in Multiplier::ALL.iter() {
                let child = tree.apply_move(id, *multiplier, mover).unwrap();
                let parent_number = tree.state(id).unwrap().number();
                assert!(tree.state(child).unwrap().number() > parent_number);
                if tree.node(child).unwrap().depth() < 3 {
                    frontier.push(child);
                }
            }
        }
        assert_eq!(tree.len(), 1 + 3 + 9 + 27);
    }

    #[test]
    fn test_rejected_move_leaves_tree_unchanged() {
        let terminal = GameState::new(1500, Player::Human).unwrap();
        let (mut tree, root) = GameTree::with_root(terminal);

        assert!(tree.apply_move(root, Multiplier::Two, Player::Human).is_err());
        assert_eq!(tree.len(), 1);
        assert!(tree.node(root).unwrap().children().is_empty());
    }

    #[test]
    fn test_clear_drops_all_nodes() {
        let (mut tree, root) = GameTree::with_root(root_state());
        tree.apply_move(root, Multiplier::Two, Player::Human).unwrap();
        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(
            tree.node(root).unwrap_err(),
            StateError::UnknownNodeError { id: 0 }
        );
    }
}
