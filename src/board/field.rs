use crate::types::Coordinate;

/// A single cell of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    coordinate: Coordinate,
    alive: bool,
}

impl Field {
    /// makes a new field at the given coordinate
    pub fn new(coordinate: Coordinate, alive: bool) -> Self {
        Field { coordinate, alive }
    }

    /// the position of this field on its board
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[allow(missing_docs)]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[allow(missing_docs)]
    pub fn is_dead(&self) -> bool {
        !self.alive
    }

    #[allow(missing_docs)]
    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    /// kills a living cell and revives a dead one
    pub fn invert(&mut self) {
        self.alive = !self.alive;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert() {
        let mut field = Field::new(Coordinate::new(1, 2), false);
        assert!(field.is_dead());
        field.invert();
        assert!(field.is_alive());
        assert_eq!(field.coordinate(), Coordinate::new(1, 2));
    }
}
