//! Interactive blackjack against the deck-of-cards service.

use std::io::{self, Write};
use std::process::ExitCode;

use deckjack::{Advance, DeckApi, Game, GameOptions};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = GameOptions::default();

    let source = match DeckApi::shuffle(options.decks) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Could not connect to server:\n{err}");
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "playing {} seats from deck {}",
        options.players,
        source.deck_id()
    );

    let mut game = match Game::start(source, options) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Deal error: {err}");
            return ExitCode::FAILURE;
        }
    };

    while !game.finished() {
        let prompt = format!(
            "{} Type 'hit' to hit or leave empty to stay: ",
            game.turn_status()
        );
        let input = prompt_line(&prompt);

        let advance = if input.eq_ignore_ascii_case("hit") {
            match game.hit() {
                Ok(result) => {
                    println!("You got: {result}");
                    if !result.is_bust() {
                        continue;
                    }
                    game.advance()
                }
                Err(err) => {
                    eprintln!("Hit error: {err}");
                    return ExitCode::FAILURE;
                }
            }
        } else {
            match game.stand() {
                Ok(advance) => advance,
                Err(err) => {
                    log::debug!("stand rejected: {err}");
                    break;
                }
            }
        };

        if let Advance::Finished(_) = advance {
            break;
        }
    }

    println!("\nGame over!");
    println!("{}", game.showdown());
    ExitCode::SUCCESS
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}
