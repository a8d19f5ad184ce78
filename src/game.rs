use crate::board::MineField;
use crate::config::GameConfig;
use crate::console::{Console, Key};
use crate::error::GameError;

/// Traversal orientation chosen at the start of a session. Fixes both the
/// starting position and the winning axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    TopToBottom,
    LeftToRight,
}

/// The single row or column whose reach ends the session in victory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WinAxis {
    Row(usize),
    Col(usize),
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
    Exited,
}

const DIRECTION_CHOICES: [(Key, &str); 2] = [
    (Key::Char('1'), "1) Top -> Down"),
    (Key::Char('2'), "2) Left -> Right"),
];

const MOVE_CHOICES: [(Key, &str); 5] = [
    (Key::Escape, "ESC"),
    (Key::Left, "LEFT"),
    (Key::Up, "UP"),
    (Key::Right, "RIGHT"),
    (Key::Down, "DOWN"),
];

/// Interactive session state machine. Owns player position, lives and move
/// count; delegates mine placement and queries to the injected board and all
/// text I/O to the injected console.
pub struct Game<'a, C: Console, B: MineField> {
    console: &'a mut C,
    board: &'a mut B,
    config: GameConfig,
    pos_x: usize,
    pos_y: usize,
    lives: u32,
    moves: u32,
    win_axis: Option<WinAxis>,
}

impl<'a, C: Console, B: MineField> Game<'a, C, B> {
    pub fn new(console: &'a mut C, board: &'a mut B, config: GameConfig) -> Self {
        let lives = config.lives;
        Game {
            console,
            board,
            config,
            pos_x: 0,
            pos_y: 0,
            lives,
            moves: 0,
            win_axis: None,
        }
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn position(&self) -> (usize, usize) {
        (self.pos_x, self.pos_y)
    }

    /// Run the session to one of its terminal states.
    pub fn run(&mut self) -> Result<GameOutcome, GameError> {
        self.console.write_line("Welcome to Minefield game!")?;

        let direction = match self.prompt_key("Enter moving direction", &DIRECTION_CHOICES, true)? {
            Key::Char('1') => Direction::TopToBottom,
            _ => Direction::LeftToRight,
        };
        self.set_starting_position(direction);
        self.set_winning_axis(direction);

        self.board.generate(
            self.config.board_size,
            self.config.mine_count,
            self.pos_x,
            self.pos_y,
        )?;

        self.console.write_line(
            "Use keyboard arrows (LEFT, UP, RIGHT, DOWN) to move through the board \
             or ESC to exit game. Good luck!",
        )?;

        let outcome = loop {
            let prompt = format!(
                "Position: {} | Lives: {} | Moves: {} | Next move",
                self.printable_position(),
                self.lives,
                self.moves
            );
            let key = self.prompt_key(&prompt, &MOVE_CHOICES, false)?;

            if key == Key::Escape {
                break GameOutcome::Exited;
            }

            self.change_position(key)?;

            if self.lives == 0 {
                self.write_status_line()?;
                self.console.write_line("You lost all lives! Game over!")?;
                break GameOutcome::Lost;
            }

            if self.is_end_reached() {
                self.write_status_line()?;
                self.console
                    .write_line("Congratulations! You reached the other side.")?;
                break GameOutcome::Won;
            }
        };

        self.console
            .write_line("Thank you for playing Minefield game. Goodbye!")?;
        Ok(outcome)
    }

    /// Prompt until one of the listed keys is pressed. Every read key is
    /// followed by a line break; unknown keys re-prompt in place.
    fn prompt_key(
        &mut self,
        message: &str,
        choices: &[(Key, &str)],
        show_choices: bool,
    ) -> Result<Key, GameError> {
        let choice_list = choices
            .iter()
            .map(|&(_, label)| label)
            .collect::<Vec<_>>()
            .join(", ");

        if show_choices {
            self.console.write(&format!("{} {}: ", message, choice_list))?;
        } else {
            self.console.write(&format!("{}: ", message))?;
        }

        loop {
            let key = self.console.read_key()?;
            self.console.write_line("")?;

            if choices.iter().any(|&(choice, _)| choice == key) {
                return Ok(key);
            }

            self.console
                .write(&format!("Invalid input. Choose between {}: ", choice_list))?;
        }
    }

    fn set_starting_position(&mut self, direction: Direction) {
        // Start in the middle of the entry edge
        let mid = self.config.board_size / 2;
        (self.pos_x, self.pos_y) = match direction {
            Direction::TopToBottom => (mid, 0),
            Direction::LeftToRight => (0, mid),
        };
    }

    fn set_winning_axis(&mut self, direction: Direction) {
        let far_edge = self.config.board_size - 1;
        self.win_axis = Some(match direction {
            Direction::TopToBottom => WinAxis::Row(far_edge),
            Direction::LeftToRight => WinAxis::Col(far_edge),
        });
    }

    /// Apply one directional move. Moves that would leave the board are
    /// rejected with a message and change nothing, not even the move count.
    fn change_position(&mut self, key: Key) -> Result<(), GameError> {
        let edge = self.config.board_size - 1;
        let blocked = (key == Key::Left && self.pos_x == 0)
            || (key == Key::Right && self.pos_x == edge)
            || (key == Key::Up && self.pos_y == 0)
            || (key == Key::Down && self.pos_y == edge);

        if blocked {
            self.console.write_line("Cannot move outside of the board!")?;
            return Ok(());
        }

        match key {
            Key::Left => self.pos_x -= 1,
            Key::Right => self.pos_x += 1,
            Key::Up => self.pos_y -= 1,
            Key::Down => self.pos_y += 1,
            _ => {}
        }

        // Mines are never defused: stepping onto one again costs another life.
        // Saturating keeps the decrement total even for an unvalidated
        // zero-lives config constructed directly.
        if self.board.is_mine_hit(self.pos_x, self.pos_y)? {
            self.lives = self.lives.saturating_sub(1);
        }

        self.moves += 1;
        Ok(())
    }

    fn write_status_line(&mut self) -> Result<(), GameError> {
        let line = format!(
            "Position: {} | Lives: {} | Moves: {}",
            self.printable_position(),
            self.lives,
            self.moves
        );
        self.console.write_line(&line)?;
        Ok(())
    }

    /// Human-readable position label: column letter from 'A', row number
    /// from 1. Board sizes are capped at 26 so one letter always suffices.
    fn printable_position(&self) -> String {
        format!("{}{}", (b'A' + self.pos_x as u8) as char, self.pos_y + 1)
    }

    fn is_end_reached(&self) -> bool {
        match self.win_axis {
            Some(WinAxis::Row(row)) => self.pos_y == row,
            Some(WinAxis::Col(col)) => self.pos_x == col,
            None => false,
        }
    }
}
