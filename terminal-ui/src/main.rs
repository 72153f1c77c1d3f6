//! Text front end for the match engine
//!
//! Stands in for the graphical shell: draws the board, reads one clicked
//! square per line from stdin, and reports turns, rejected moves, and the
//! winner. `quit` ends the session.

use std::io::{self, BufRead, Write};

use arbiter::{Match, TurnEvent};
use board::{Player, Role, Square, BOARD_SIDE};
use clap::Parser;

/// Two-player chess in the terminal: click squares by typing their names
#[derive(Debug, Parser)]
struct Args {
    /// Draw pieces as chess glyphs instead of letters
    #[arg(long)]
    unicode: bool,
}

fn main() {
    let args = Args::parse();
    let mut game = Match::new();

    println!("White = Player 1");
    println!("Black = Player 2");
    println!("Turn: {}", game.turn());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if let Some(TurnEvent::GameWon(winner)) = game.check_game_won() {
            render(&game, args.unicode);
            println!(
                "{} won",
                match winner {
                    Player::One => "Player 1",
                    Player::Two => "Player 2",
                }
            );
            break;
        }

        render(&game, args.unicode);
        print!("square> ");
        let _ = io::stdout().flush();
        let Some(line) = lines.next() else { break };
        let line = line.expect("error reading input");
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" {
            break;
        }
        let square: Square = match input.parse() {
            Ok(square) => square,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        match game.click(square) {
            Ok(TurnEvent::MoveApplied { .. }) => println!("Turn: {}", game.turn()),
            Ok(TurnEvent::IllegalMove) => println!("Invalid Move"),
            Ok(_) => {}
            // The driver always resolves occupancy through the match itself,
            // so a contract violation here is a bug worth dying loudly on.
            Err(err) => panic!("{err}"),
        }
    }
}

/// Draw the board with rank and file labels, marking the selected square
fn render(game: &Match, unicode: bool) {
    let selected = game.selected().map(|id| game.roster().get(id).square());
    for rank in 0..BOARD_SIDE {
        print!("{} ", BOARD_SIDE - rank);
        for file in 0..BOARD_SIDE {
            let square = Square::new(file, rank).expect("iterating the board");
            let cell = match game.roster().piece_at(square) {
                Some(id) => {
                    let piece = game.roster().get(id);
                    piece_char(piece.role(), piece.player(), unicode)
                }
                None => '.',
            };
            if selected == Some(square) {
                print!("[{cell}]");
            } else {
                print!(" {cell} ");
            }
        }
        println!();
    }
    println!("   a  b  c  d  e  f  g  h");
}

fn piece_char(role: Role, player: Player, unicode: bool) -> char {
    if !unicode {
        return match player {
            Player::One => role.letter(),
            Player::Two => role.letter().to_ascii_lowercase(),
        };
    }
    match (player, role) {
        (Player::One, Role::King) => '♔',
        (Player::One, Role::Queen) => '♕',
        (Player::One, Role::Rook) => '♖',
        (Player::One, Role::Bishop) => '♗',
        (Player::One, Role::Knight) => '♘',
        (Player::One, Role::Pawn) => '♙',
        (Player::Two, Role::King) => '♚',
        (Player::Two, Role::Queen) => '♛',
        (Player::Two, Role::Rook) => '♜',
        (Player::Two, Role::Bishop) => '♝',
        (Player::Two, Role::Knight) => '♞',
        (Player::Two, Role::Pawn) => '♟',
    }
}
