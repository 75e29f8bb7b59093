use std::{cmp::Ordering, collections::BinaryHeap, rc::Rc};

use crate::node::Node;

struct Entry {
    priority: usize,
    manhattan: u32,
    seq: u64,
    node: Rc<Node>,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed so the max-heap yields the lowest priority first. Ties go to
    // the board closer to the goal, then to the earlier insertion.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.manhattan.cmp(&self.manhattan))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Open set of a best-first search, popped in ascending priority.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Rc<Node>) {
        let entry = Entry {
            priority: node.priority(),
            manhattan: node.board().manhattan(),
            seq: self.next_seq,
            node,
        };
        self.next_seq += 1;
        self.heap.push(entry);
    }

    pub fn pop(&mut self) -> Option<Rc<Node>> {
        self.heap.pop().map(|entry| entry.node)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
