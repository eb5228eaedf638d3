//! Terminal front end for the deduction engine
//!
//! Plays rounds against the bundled player pool. Type a partial name
//! followed by `?` for suggestions, a full name to guess, `new` for a
//! fresh round, `quit` to exit.
//!
//! Run with: cargo run --example play

use std::io::{self, BufRead, Write};

use anyhow::Context;

use stumped::feedback::{Attribute, Feedback};
use stumped::player::PlayerStore;
use stumped::round::{GuessResult, RoundOutcome};
use stumped::{Error, Game, GameConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let store = PlayerStore::load_json("data/players.json")
        .context("loading bundled player data")?;
    println!("=== Stumped: guess the cricketer ===");
    println!("{} players loaded. 6 guesses. Good luck!\n", store.len());

    let mut game = Game::new(store, GameConfig::new())?;

    let stdin = io::stdin();
    loop {
        print!("guess ({} left) > ", game.round().attempts_remaining());
        io::stdout().flush()?;

        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let input = line?;
        let input = input.trim();

        match input {
            "quit" | "exit" => break,
            "new" => {
                game.new_round()?;
                println!("\nNew round started.\n");
                continue;
            }
            partial if partial.ends_with('?') => {
                let suggestions = game.suggest(partial.trim_end_matches('?'));
                if suggestions.is_empty() {
                    println!("  no matches");
                } else {
                    for name in suggestions {
                        println!("  {name}");
                    }
                }
                continue;
            }
            _ => {}
        }

        match game.guess(input) {
            Ok(result) => print_result(&result),
            Err(err @ (Error::EmptyInput | Error::UnknownPlayer(_) | Error::RoundOver(_))) => {
                println!("  {err}");
                continue;
            }
            Err(err) => return Err(err.into()),
        }

        if let Some(outcome) = game.round().outcome() {
            match outcome {
                RoundOutcome::Won {
                    player,
                    attempts_used,
                } => println!("\nGot it! {player} in {attempts_used} guesses."),
                RoundOutcome::Lost { player } => {
                    println!("\nOut of guesses. It was {player}.");
                }
            }
            println!("Type `new` for another round, `quit` to exit.\n");
        }
    }

    Ok(())
}

fn print_result(result: &GuessResult) {
    let player = &result.player;
    println!("  {}", player.name());
    for item in &result.feedback {
        let value = match item.attribute {
            Attribute::Country => player.country().to_string(),
            Attribute::Role => player.role().to_string(),
            Attribute::Matches => player.matches().to_string(),
            Attribute::Runs => player.runs().to_string(),
            Attribute::Wickets => player.wickets().to_string(),
            Attribute::Average => format!("{:.2}", player.average()),
            Attribute::Era => player.era().to_string(),
        };
        println!(
            "    {:<8} {:>8}  {}",
            format!("{:?}", item.attribute),
            value,
            symbol(item.feedback)
        );
    }
}

const fn symbol(feedback: Feedback) -> &'static str {
    match feedback {
        Feedback::Exact => "= exact",
        Feedback::Higher => "^ target is higher",
        Feedback::Lower => "v target is lower",
        Feedback::Mismatch => "x miss",
    }
}
