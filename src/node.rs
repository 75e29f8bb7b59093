use std::{iter, rc::Rc};

use crate::board::Board;

/// A board reached during search, with the path that led to it.
///
/// Children hold a shared handle to their parent, so the nodes of one search
/// form an append-only tree rooted at the start board.
#[derive(Debug)]
pub struct Node {
    board: Board,
    moves: usize,
    parent: Option<Rc<Node>>,
}

impl Node {
    pub fn root(board: Board) -> Rc<Self> {
        Rc::new(Self {
            board,
            moves: 0,
            parent: None,
        })
    }

    pub fn child(self: &Rc<Self>, board: Board) -> Rc<Self> {
        Rc::new(Self {
            board,
            moves: self.moves + 1,
            parent: Some(Rc::clone(self)),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Slides taken from the root.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Moves so far plus the Manhattan estimate of what remains.
    pub fn priority(&self) -> usize {
        self.moves + self.board.manhattan() as usize
    }

    pub fn parent(&self) -> Option<&Rc<Node>> {
        self.parent.as_ref()
    }

    /// This node followed by each of its ancestors up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = &Node> {
        iter::successors(Some(self), |node| node.parent.as_deref())
    }

    /// Returns `true` if `board` is this node's board or any ancestor's.
    pub fn has_ancestor(&self, board: &Board) -> bool {
        self.ancestors().any(|node| node.board == *board)
    }

    /// Boards from the root to this node, inclusive.
    pub fn path(&self) -> Vec<Board> {
        let mut path: Vec<Board> = self.ancestors().map(|node| node.board.clone()).collect();
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;

    #[test]
    fn chain_tracks_moves_and_path() {
        let start = Board::new(&[[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
        let root = Node::root(start.clone());
        assert_eq!(root.moves(), 0);
        assert_eq!(root.priority(), 2);
        assert!(root.parent().is_none());

        let middle = start.apply(Move::Up).unwrap();
        let child = root.child(middle.clone());
        assert_eq!(child.moves(), 1);
        assert_eq!(child.priority(), 1 + middle.manhattan() as usize);

        let goal = middle.apply(Move::Left).unwrap();
        assert!(goal.is_goal());
        let leaf = child.child(goal.clone());
        assert_eq!(leaf.moves(), 2);
        assert_eq!(leaf.priority(), 2);
        assert_eq!(leaf.path(), vec![start.clone(), middle.clone(), goal.clone()]);
        assert_eq!(leaf.ancestors().count(), 3);

        assert!(leaf.has_ancestor(&start));
        assert!(leaf.has_ancestor(&goal));
        assert!(!child.has_ancestor(&goal));
    }

    #[test]
    fn siblings_share_parent() {
        let root = Node::root(Board::goal(3).unwrap());
        let children: Vec<_> = root.board().neighbors().map(|b| root.child(b)).collect();
        assert_eq!(children.len(), 2);
        assert_eq!(Rc::strong_count(&root), 3);
        for child in &children {
            assert!(Rc::ptr_eq(child.parent().unwrap(), &root));
        }
    }
}
