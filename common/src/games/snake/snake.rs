use std::collections::{HashSet, VecDeque};

use crate::games::Cell;

/// Ordered snake body, head first. The set mirrors the deque for O(1) lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeBody {
    segments: VecDeque<Cell>,
    occupied: HashSet<Cell>,
}

impl SnakeBody {
    /// Callers guarantee `cells` is non-empty and duplicate-free.
    pub(crate) fn new(cells: &[Cell]) -> Self {
        Self {
            segments: cells.iter().copied().collect(),
            occupied: cells.iter().copied().collect(),
        }
    }

    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.occupied.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.segments.iter()
    }

    pub fn to_vec(&self) -> Vec<Cell> {
        self.segments.iter().copied().collect()
    }

    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.segments.push_front(cell);
        self.occupied.insert(cell);
    }

    pub(crate) fn drop_tail(&mut self) {
        if let Some(tail) = self.segments.pop_back() {
            self.occupied.remove(&tail);
        }
    }
}
