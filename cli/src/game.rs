use anyhow::Result;
use sapper_core::{Board, Cell, CellContent, Coord2, RevealOutcome};
use std::io::{self, BufRead, Write};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Quit,
}

/// Parses one input line: `r <row> <col>`, `f <row> <col>`, or `q`.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["q"] | ["quit"] => Some(Command::Quit),
        [verb, row, col] => {
            let coords = (row.parse().ok()?, col.parse().ok()?);
            match *verb {
                "r" => Some(Command::Reveal(coords)),
                "f" => Some(Command::Flag(coords)),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Glyph for one cell. A flag is only shown while its cell is unrevealed;
/// once revealed, the content wins.
fn glyph(cell: Cell) -> char {
    if !cell.revealed {
        if cell.flagged {
            'F'
        } else {
            '.'
        }
    } else {
        match cell.content {
            CellContent::Empty => ' ',
            CellContent::Adjacent(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
            CellContent::Mine => '*',
        }
    }
}

pub fn render(board: &Board) -> String {
    let size = board.size();
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..size {
        out.push_str(&format!("{} ", col));
    }
    out.push('\n');

    for row in 0..size {
        out.push_str(&format!("{:2} ", row));
        for col in 0..size {
            // in-bounds by construction
            let cell = board.cell_at((row, col)).unwrap_or_default();
            out.push(glyph(cell));
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

pub fn run(mut board: Board) -> Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout();

    loop {
        writeln!(out, "{}", render(&board))?;
        writeln!(out, "Enter move (r <row> <col>, f <row> <col>, q to quit)")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // stdin closed
            return Ok(());
        }

        let Some(command) = parse_command(&line) else {
            writeln!(out, "Invalid input.")?;
            continue;
        };

        match command {
            Command::Quit => return Ok(()),
            Command::Flag(coords) => {
                if !board.toggle_flag(coords).has_update() {
                    writeln!(out, "Nothing to flag there.")?;
                }
            }
            Command::Reveal(coords) => {
                if board.reveal(coords) == RevealOutcome::HitMine {
                    board.reveal_all();
                    writeln!(out, "{}", render(&board))?;
                    writeln!(out, "Game over! You hit a mine.")?;
                    return Ok(());
                }
                if board.check_win() {
                    writeln!(out, "{}", render(&board))?;
                    writeln!(out, "Congratulations! You win!")?;
                    return Ok(());
                }
            }
        }
    }
}
