use crate::error::BoardError;
use crate::random::Randomizer;

/// Minimum playable board size: below this the board has no room for a
/// non-start cell on the winning axis.
pub const MIN_BOARD_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Empty,
    Mine,
}

/// The board seam the game state machine depends on.
pub trait MineField {
    /// Generate randomly positioned mines. The starting position is excluded
    /// and is always a safe field.
    fn generate(
        &mut self,
        board_size: usize,
        number_of_mines: usize,
        start_x: usize,
        start_y: usize,
    ) -> Result<(), BoardError>;

    /// Check whether there is a mine at the given field.
    fn is_mine_hit(&self, x: usize, y: usize) -> Result<bool, BoardError>;
}

#[derive(Debug)]
struct Grid {
    size: usize,
    fields: Vec<FieldType>,
}

/// Square board holding the mine layout. Empty until [`MineField::generate`]
/// is called; regenerated from scratch on every call.
pub struct Board<R: Randomizer> {
    randomizer: R,
    grid: Option<Grid>,
}

impl<R: Randomizer> Board<R> {
    pub fn new(randomizer: R) -> Self {
        Board {
            randomizer,
            grid: None,
        }
    }

    fn validate_input(
        board_size: usize,
        number_of_mines: usize,
        start_x: usize,
        start_y: usize,
    ) -> Result<(), BoardError> {
        if board_size < MIN_BOARD_SIZE {
            return Err(BoardError::BoardTooSmall {
                size: board_size,
                min: MIN_BOARD_SIZE,
            });
        }

        let max_mines = board_size * board_size - 1;
        if number_of_mines > max_mines {
            return Err(BoardError::TooManyMines {
                mines: number_of_mines,
                max: max_mines,
            });
        }

        validate_position(board_size, start_x, "start position 'x'")?;
        validate_position(board_size, start_y, "start position 'y'")?;
        Ok(())
    }
}

fn validate_position(size: usize, value: usize, name: &'static str) -> Result<(), BoardError> {
    if value >= size {
        return Err(BoardError::PositionOutOfRange {
            name,
            value,
            max: size - 1,
        });
    }
    Ok(())
}

impl<R: Randomizer> MineField for Board<R> {
    fn generate(
        &mut self,
        board_size: usize,
        number_of_mines: usize,
        start_x: usize,
        start_y: usize,
    ) -> Result<(), BoardError> {
        Self::validate_input(board_size, number_of_mines, start_x, start_y)?;

        let start_index = start_y * board_size + start_x;

        // Pair every cell index except the start with one random sort key,
        // sort ascending by key, and take the first n indices as mines. The
        // sort is stable, so tied keys fall back to ascending index order.
        let mut keyed: Vec<(u32, usize)> = (0..board_size * board_size)
            .filter(|&index| index != start_index)
            .map(|index| (self.randomizer.next(), index))
            .collect();
        keyed.sort_by_key(|&(key, _)| key);

        let mut fields = vec![FieldType::Empty; board_size * board_size];
        for &(_, index) in keyed.iter().take(number_of_mines) {
            fields[index] = FieldType::Mine;
        }

        self.grid = Some(Grid {
            size: board_size,
            fields,
        });
        Ok(())
    }

    fn is_mine_hit(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        let grid = self.grid.as_ref().ok_or(BoardError::NotGenerated)?;

        validate_position(grid.size, x, "position 'x'")?;
        validate_position(grid.size, y, "position 'y'")?;

        Ok(grid.fields[y * grid.size + x] == FieldType::Mine)
    }
}
