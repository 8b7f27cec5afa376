//! Reads a board descriptor as JSON on stdin, writes the chosen move as JSON
//! on stdout. Failures go to stderr with a nonzero exit.

use std::io::Read;

use cascade_api::{ai_move, BoardDescriptor};

fn run() -> Result<String, Box<dyn std::error::Error>> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let descriptor: BoardDescriptor = serde_json::from_str(&input)?;
    let chosen = ai_move(&descriptor)?;
    Ok(serde_json::to_string(&chosen)?)
}

fn main() {
    match run() {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("ai-move: {err}");
            std::process::exit(1);
        }
    }
}
