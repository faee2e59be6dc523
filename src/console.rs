//! Text front-end: prints the board and messages, asks the human for Min's move.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::common::Move;
use crate::config::ThemeKind;
use crate::error::{Error, Result};
use crate::game::Frontend;
use crate::min_max::Player;
use crate::ranking::{MinRanking, Tier};
use crate::ttt::{CellState, GameBoard, Outcome};

/// Names, marks and messages of one presentation variant.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Theme {
    pub max_mark: char,
    pub min_mark: char,
    pub welcome: &'static [&'static str],
    pub grid_title: &'static str,
    pub max_turn: &'static str,
    pub max_moved: &'static str,
    pub min_turn: &'static str,
    pub min_moved: &'static str,
    pub win_tier: &'static str,
    pub draw_tier: &'static str,
    pub any_tier: &'static str,
    pub max_wins: &'static str,
    pub min_wins: &'static str,
    pub draw: &'static str,
}

impl Theme {
    pub fn marvel() -> Self {
        Self {
            max_mark: 'X',
            min_mark: 'O',
            welcome: &[
                "⚡ Welcome to the Marvel Battle Arena! ⚡",
                "THANOS  v/s  CAPTAIN AMERICA",
                "Thanos goes first (he's powerful and thinks ahead!).",
            ],
            grid_title: "Current Battle Grid:",
            max_turn: "⚡ THANOS's turn...",
            max_moved: "⚡ THANOS strikes at:",
            min_turn: "🛡 CAPTAIN AMERICA! Your turn... Minimax is analyzing options...",
            min_moved: "🛡 Captain places at:",
            win_tier: "Recommended moves (lead to CAPTAIN win if played perfectly):",
            draw_tier: "No immediate winning move. Recommended draws (force at least a draw):",
            any_tier: "No guaranteed win/draw, choose any move (Thanos may force a win):",
            max_wins: "⚡ THANOS WINS! Perfectly balanced victory! ⚡",
            min_wins: "🛡 CAPTAIN AMERICA WINS! Freedom prevails! 🛡",
            draw: "🤝 It's a DRAW. Peace is restored.",
        }
    }

    pub fn classic() -> Self {
        Self {
            max_mark: 'X',
            min_mark: 'O',
            welcome: &[
                "Tic-tac-toe: computer (X) v/s you (O)",
                "The computer plays perfectly and moves first.",
            ],
            grid_title: "Board:",
            max_turn: "Computer's turn...",
            max_moved: "Computer plays",
            min_turn: "Your turn. Analyzing your options...",
            min_moved: "You play",
            win_tier: "Recommended moves (you win if played perfectly):",
            draw_tier: "No winning move. Recommended moves (force at least a draw):",
            any_tier: "No guaranteed win/draw, choose any move (the computer may force a win):",
            max_wins: "The computer wins.",
            min_wins: "You win!",
            draw: "It's a draw.",
        }
    }

    fn mark(&self, cell: CellState) -> char {
        match cell {
            CellState::EMPTY => ' ',
            CellState::X => self.max_mark,
            CellState::O => self.min_mark,
        }
    }

    fn tier_header(&self, tier: Tier) -> &'static str {
        match tier {
            Tier::WinForMin => self.win_tier,
            Tier::DrawOrBetter => self.draw_tier,
            Tier::NoGuarantee => self.any_tier,
        }
    }
}

impl From<ThemeKind> for Theme {
    fn from(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Marvel => Theme::marvel(),
            ThemeKind::Classic => Theme::classic(),
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    theme: Theme,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, theme: Theme) -> Self {
        Self { input, output, theme }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}").map_err(|source| Error::Io { operation: "write to console", source })
    }

    fn print_board(&mut self, board: &GameBoard) -> Result<()> {
        self.line("")?;
        self.line(self.theme.grid_title)?;
        self.line("-------------")?;
        for row in board.cells.chunks(3) {
            let marks = row.iter().map(|&c| self.theme.mark(c).to_string()).collect::<Vec<_>>();
            self.line(format_args!("| {} |", marks.join(" | ")))?;
            self.line("-------------")?;
        }
        Ok(())
    }

    fn print_moves(&mut self, moves: &[Move]) -> Result<()> {
        for (i, m) in moves.iter().enumerate() {
            self.line(format_args!("{i}: {m}"))?;
        }
        Ok(())
    }

    /// Prompts until a valid index below `len` is entered.
    pub fn read_index(&mut self, len: usize) -> Result<usize> {
        loop {
            write!(self.output, "Enter move index (0 - {}): ", len.saturating_sub(1))
                .and_then(|_| self.output.flush())
                .map_err(|source| Error::Io { operation: "write prompt", source })?;

            let mut buf = String::new();
            let read = self.input.read_line(&mut buf)
                .map_err(|source| Error::Io { operation: "read move index", source })?;
            if read == 0 {
                return Err(Error::InputClosed);
            }

            let entry = buf.trim();
            if entry.is_empty() {
                self.line("Please enter a number.")?;
                continue;
            }
            match entry.parse::<usize>() {
                Ok(index) if index < len => return Ok(index),
                _ => self.line("Invalid input. Try again.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Frontend for Console<R, W> {
    fn choose_min_move(&mut self, _board: &GameBoard, ranking: &MinRanking) -> Result<Move> {
        self.line(self.theme.tier_header(ranking.tier))?;
        self.print_moves(&ranking.moves)?;
        let index = self.read_index(ranking.moves.len())?;
        Ok(ranking.moves[index])
    }

    fn on_start(&mut self, board: &GameBoard) -> Result<()> {
        for &line in self.theme.welcome {
            self.line(line)?;
        }
        self.line("")?;
        self.print_board(board)
    }

    fn on_turn(&mut self, player: Player) -> Result<()> {
        let text = match player {
            Player::Max => self.theme.max_turn,
            Player::Min => self.theme.min_turn,
        };
        self.line("")?;
        self.line(text)
    }

    fn on_move(&mut self, board: &GameBoard, player: Player, cell: Move) -> Result<()> {
        let text = match player {
            Player::Max => self.theme.max_moved,
            Player::Min => self.theme.min_moved,
        };
        self.line(format_args!("{text} {cell}"))?;
        self.print_board(board)
    }

    fn on_finished(&mut self, outcome: Outcome) -> Result<()> {
        let text = match outcome {
            Outcome::MaxWon => self.theme.max_wins,
            Outcome::MinWon => self.theme.min_wins,
            Outcome::Draw | Outcome::Ongoing => self.theme.draw,
        };
        self.line("")?;
        self.line(text)
    }
}
