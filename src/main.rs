//! Line-oriented text client for the puzzle engine.
//!
//! With no argument, plays the fixed default puzzle; with one argument, loads
//! a snapshot file.

use std::io::{self, BufRead, Write};
use std::process::exit;

use pipenet::{codec, Game};

fn print_help() {
    println!("Available commands:");
    println!("h       : Show help");
    println!("r       : Shuffle the grid");
    println!("q       : Quit");
    println!("c i j   : Rotate the piece at (i,j) clockwise");
    println!("a i j   : Rotate the piece at (i,j) counterclockwise");
    println!("z       : Undo the last move");
    println!("y       : Redo the last undone move");
    println!("s       : Solve the puzzle");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut game = match args.len() {
        1 => Game::new_default(),
        2 => match codec::load(&args[1]) {
            Ok(board) => Game::new(board),
            Err(err) => {
                eprintln!("cannot load {}: {}", args[1], err);
                exit(1);
            }
        },
        _ => {
            eprintln!("Usage: {} [snapshot]", args[0]);
            exit(1);
        }
    };

    let mut rng = rand::rng();
    let stdin = io::stdin();
    let mut quit = false;

    while !quit && !game.is_won() {
        print!("{}\n", game.board());
        println!("Enter a command (h for help):");
        io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let mut words = line.split_whitespace();

        match words.next() {
            Some("h") => print_help(),
            Some("r") => {
                game.shuffle(&mut rng);
                println!("Grid has been shuffled");
            }
            Some("q") => {
                quit = true;
                println!("You have quit the game");
            }
            Some("z") => {
                if let Err(err) = game.undo() {
                    println!("{}", err);
                }
            }
            Some("y") => {
                if let Err(err) = game.redo() {
                    println!("{}", err);
                }
            }
            Some("s") => {
                if let Err(err) = game.solve() {
                    println!("{}", err);
                }
            }
            Some(command @ ("c" | "a")) => {
                let coords: Option<(usize, usize)> = (|| {
                    let i = words.next()?.parse().ok()?;
                    let j = words.next()?.parse().ok()?;
                    Some((i, j))
                })();
                let turns = if command == "c" { 1 } else { -1 };
                match coords {
                    Some((i, j)) => {
                        if let Err(err) = game.play_move(i, j, turns) {
                            println!("{}", err);
                        }
                    }
                    None => println!("Invalid coordinates"),
                }
            }
            _ => println!("Unknown command (h for help)"),
        }
    }

    print!("{}\n", game.board());
    if game.is_won() {
        println!("Congratulations: You won the game!");
    } else {
        println!("You gave up the game. Better luck next time!");
    }
}
