use std::collections::VecDeque;

use crate::board::Board;

/// How many past generations are kept for loop detection. Loops with a longer period are never
/// detected
pub const HISTORY_SIZE: usize = 15;

/// A bounded first in, first out store of past boards
#[derive(Debug, Clone)]
pub struct BoardHistory {
    boards: VecDeque<Board>,
    capacity: usize,
}

impl BoardHistory {
    /// makes an empty history holding at most `capacity` boards. Panics if `capacity` is zero
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "a board history needs room for at least one board");
        BoardHistory {
            boards: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Stores a copy of `board`, evicting the oldest board when the history is full
    pub fn push(&mut self, board: &Board) {
        if self.boards.len() == self.capacity {
            self.boards.pop_front();
        }
        self.boards.push_back(board.clone());
    }

    /// The index of a stored board equal to `board`, oldest first
    pub fn position(&self, board: &Board) -> Option<usize> {
        self.boards.iter().position(|stored| stored == board)
    }

    /// checks whether an equal board is stored
    pub fn contains(&self, board: &Board) -> bool {
        self.position(board).is_some()
    }

    /// the stored board at `index`, 0 being the oldest
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// the most recently stored board
    pub fn latest(&self) -> Option<&Board> {
        self.boards.back()
    }

    /// stored boards, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    #[allow(missing_docs)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// forgets every stored board
    pub fn clear(&mut self) {
        self.boards.clear();
    }
}

impl Default for BoardHistory {
    fn default() -> Self {
        Self::new(HISTORY_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Topology;

    fn board_with_cell(x: i32) -> Board {
        let mut board = Board::new(20, 1, Topology::Solid);
        board.set_state(x, 0, true);
        board
    }

    #[test]
    fn test_evicts_oldest_first() {
        let mut history = BoardHistory::new(3);
        for x in 0..5 {
            history.push(&board_with_cell(x));
        }
        assert_eq!(history.len(), 3);
        assert!(!history.contains(&board_with_cell(0)));
        assert!(!history.contains(&board_with_cell(1)));
        assert_eq!(history.position(&board_with_cell(2)), Some(0));
        assert_eq!(history.position(&board_with_cell(4)), Some(2));
        assert_eq!(history.latest(), Some(&board_with_cell(4)));
        assert_eq!(history.get(1), Some(&board_with_cell(3)));
    }

    #[test]
    fn test_stores_copies() {
        let mut history = BoardHistory::default();
        let mut board = board_with_cell(1);
        history.push(&board);
        board.set_state(2, 0, true);
        assert!(!history.contains(&board));
        assert!(history.contains(&board_with_cell(1)));
        assert_eq!(history.capacity(), HISTORY_SIZE);
    }

    #[test]
    fn test_clear() {
        let mut history = BoardHistory::new(2);
        history.push(&board_with_cell(0));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.iter().count(), 0);
    }

    #[test]
    #[should_panic]
    fn test_zero_capacity_panics() {
        BoardHistory::new(0);
    }
}
