//! Collaborators that write living cells into a board before a simulation starts
pub mod template;

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::error::{ConfigurationError, TemplateError};
use crate::types::{CellStateGettableBoard, CellStateSettableBoard, Coordinate};
use template::Template;

/// The predefined objects that can be dropped on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardObject {
    /// a vertical line of three cells, oscillates with period 2
    Blinker,
    /// the smallest spaceship, travels diagonally
    Glider,
    /// a lightweight spaceship, travels horizontally
    Spaceship,
}

impl BoardObject {
    /// every object, in the order they are listed to users
    pub fn all() -> [BoardObject; 3] {
        [BoardObject::Blinker, BoardObject::Glider, BoardObject::Spaceship]
    }

    /// Looks up an object by name, ignoring case
    pub fn from_name(name: &str) -> Result<BoardObject, ConfigurationError> {
        Self::all()
            .iter()
            .find(|object| object.name().eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| ConfigurationError::UnknownObject(name.to_string()))
    }

    #[allow(missing_docs)]
    pub fn name(&self) -> &'static str {
        match self {
            BoardObject::Blinker => "Blinker",
            BoardObject::Glider => "Glider",
            BoardObject::Spaceship => "Spaceship",
        }
    }

    /// the cells of this object
    pub fn template(&self) -> Template {
        let text = match self {
            BoardObject::Blinker => include_str!("../../fixtures/blinker.txt"),
            BoardObject::Glider => include_str!("../../fixtures/glider.txt"),
            BoardObject::Spaceship => include_str!("../../fixtures/spaceship.txt"),
        };
        Template::parse(text).expect("the object templates are valid")
    }

    /// Places this object with its top left corner at `top_left`. Objects usually go to
    /// [crate::board::Board::center]
    pub fn place_on<B: CellStateSettableBoard>(
        &self,
        board: &mut B,
        top_left: Coordinate,
    ) -> Result<(), TemplateError> {
        self.template().place_on(board, top_left)
    }
}

/// Revives random dead cells until `fill_percent` percent of the board has been set alive by this
/// call. Without a percentage one between 15 and 70 is picked. Returns how many cells were set
pub fn fill_random<B, R>(
    board: &mut B,
    fill_percent: Option<f64>,
    rng: &mut R,
) -> Result<usize, TemplateError>
where
    B: CellStateGettableBoard + CellStateSettableBoard,
    R: Rng + ?Sized,
{
    let fill_percent = fill_percent.unwrap_or_else(|| rng.gen_range(15.0..70.0));
    if !(0.0..=100.0).contains(&fill_percent) {
        return Err(TemplateError::FillPercentage(fill_percent));
    }

    let total = board.get_width() as usize * board.get_height() as usize;
    let wanted = (fill_percent * total as f64 / 100.0).ceil() as usize;

    let dead = (0..board.get_height() as i32)
        .cartesian_product(0..board.get_width() as i32)
        .map(|(y, x)| Coordinate::new(x, y))
        .filter(|pos| !board.is_alive(*pos))
        .collect::<Vec<_>>();
    let chosen = dead
        .choose_multiple(rng, wanted.min(dead.len()))
        .copied()
        .collect::<Vec<_>>();

    trace!(fill_percent, wanted, set = chosen.len(), "filling board randomly");
    for pos in chosen.iter() {
        board.set_alive(*pos, true);
    }
    Ok(chosen.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::{SizeDeterminableBoard, Topology};
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_object_shapes() {
        assert_eq!(BoardObject::Blinker.template().to_string(), "X\nX\nX");
        assert_eq!(BoardObject::Glider.template().to_string(), ".X.\n..X\nXXX");
        let spaceship = BoardObject::Spaceship.template();
        assert_eq!((spaceship.width(), spaceship.height()), (5, 4));
        assert_eq!(spaceship.living_coordinates().count(), 9);
    }

    #[test]
    fn test_object_names() {
        assert_eq!(BoardObject::from_name("glider").unwrap(), BoardObject::Glider);
        assert!(matches!(
            BoardObject::from_name("pulsar"),
            Err(ConfigurationError::UnknownObject(_))
        ));
    }

    #[test]
    fn test_place_object_at_center() {
        let mut board = Board::new(20, 10, Topology::Solid);
        let center = board.center();
        BoardObject::Blinker.place_on(&mut board, center).unwrap();
        assert!(board.get_state(9, 4));
        assert!(board.get_state(9, 5));
        assert!(board.get_state(9, 6));
        assert_eq!(board.living_cell_count(), 3);
    }

    #[test]
    fn test_object_must_fit() {
        let mut board = Board::new(4, 4, Topology::Solid);
        assert!(BoardObject::Spaceship
            .place_on(&mut board, Coordinate::new(0, 0))
            .is_err());
        assert_eq!(board.living_cell_count(), 0);
    }

    #[test]
    fn test_fill_random_reaches_percentage() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut board = Board::new(10, 10, Topology::Solid);
        let set = fill_random(&mut board, Some(25.0), &mut rng).unwrap();
        assert_eq!(set, 25);
        assert_eq!(board.living_cell_count(), 25);

        let mut odd = Board::new(3, 3, Topology::Passthrough);
        fill_random(&mut odd, Some(50.0), &mut rng).unwrap();
        assert_eq!(odd.living_cell_count(), 5);
    }

    #[test]
    fn test_fill_random_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut board = Board::new(4, 4, Topology::Solid);
        assert_eq!(
            fill_random(&mut board, Some(100.5), &mut rng),
            Err(TemplateError::FillPercentage(100.5))
        );
        assert_eq!(
            fill_random(&mut board, Some(-1.0), &mut rng),
            Err(TemplateError::FillPercentage(-1.0))
        );
        assert_eq!(fill_random(&mut board, Some(0.0), &mut rng), Ok(0));
        assert_eq!(fill_random(&mut board, Some(100.0), &mut rng), Ok(16));
        assert_eq!(board.living_cell_count(), board.get_width() as usize * 4);
        // nothing left to revive
        assert_eq!(fill_random(&mut board, Some(50.0), &mut rng), Ok(0));
    }

    #[test]
    fn test_fill_random_default_percentage() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut board = Board::new(20, 20, Topology::Solid);
        fill_random(&mut board, None, &mut rng).unwrap();
        let fraction = board.living_cell_fraction();
        assert!(fraction >= 0.15 && fraction <= 0.70, "{}", fraction);
    }
}
