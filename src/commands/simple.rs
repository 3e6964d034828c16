//! Simple interactive CLI mode
//!
//! Text-based game without TUI: the player guesses a generated secret.

use crate::core::Code;
use crate::game::{Board, GameConfig, Outcome};
use crate::output::formatters::{colorize_code, colorize_feedback};
use crate::solver::GuessStrategist;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};

/// Games played during one session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub played: usize,
    pub won: usize,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// to the terminal.
pub fn run_simple(config: &GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let summary = play_session(config, &mut stdin.lock(), &mut io::stdout())?;

    if summary.played > 0 {
        println!("You won {} of {} games.", summary.won, summary.played);
    }
    Ok(())
}

/// Play games until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play_session<R: BufRead, W: Write>(
    config: &GameConfig,
    input: &mut R,
    out: &mut W,
) -> Result<SessionSummary> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                   Mastermind - Simple Mode                   ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the secret: 4 different colors out of")?;
    writeln!(out, "  G (GREEN), B (BLUE), R (RED), Y (YELLOW), P (PURPLE), C (CYAN)")?;
    writeln!(out, "Type them like 'R B Y G', 'r,b,y,g' or 'red blue yellow green'.\n")?;
    writeln!(out, "  ✓ right color, right place")?;
    writeln!(out, "  ? right color, wrong place")?;
    writeln!(out, "  ✗ color not in the secret\n")?;
    writeln!(out, "Commands: 'hint' for a suggestion, 'quit' to exit\n")?;

    let mut rng = config.rng();
    let mut summary = SessionSummary::default();

    loop {
        let secret = Code::generate_random_unique(&mut rng);
        let mut board = Board::new(secret, config.turn_limit);
        let mut strategist = GuessStrategist::new(config.strategy, StdRng::from_rng(&mut rng));
        summary.played += 1;

        writeln!(
            out,
            "🔐 A new secret has been chosen. You have {} turns.\n",
            board.turn_limit()
        )?;

        while board.outcome() == Outcome::InProgress {
            let prompt = format!(
                "Turn {}/{} - your guess",
                board.turns_elapsed() + 1,
                board.turn_limit()
            );
            let Some(line) = get_user_input(input, out, &prompt)? else {
                return Ok(summary);
            };

            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(summary);
                }
                "hint" | "h" => {
                    match strategist.next_guess() {
                        Ok(hint) => writeln!(out, "💡 Try {}\n", colorize_code(&hint))?,
                        Err(e) => writeln!(out, "No hint available: {e}\n")?,
                    }
                    continue;
                }
                _ => {}
            }

            let guess = match Code::parse(&line) {
                Ok(guess) => guess,
                Err(e) => {
                    writeln!(out, "❌ {e}\n")?;
                    continue;
                }
            };

            let feedback = board.add_guess(guess)?;
            strategist
                .observe_guess(guess, feedback)
                .context("Hint tracker reached an inconsistent state")?;

            writeln!(out)?;
            for (i, (guess, feedback)) in board.history().iter().enumerate() {
                writeln!(
                    out,
                    "  {:2}. {}   {}",
                    i + 1,
                    colorize_code(guess),
                    colorize_feedback(feedback)
                )?;
            }
            writeln!(out)?;
        }

        match board.outcome() {
            Outcome::Won { turns } => {
                summary.won += 1;
                writeln!(
                    out,
                    "{}",
                    format!(
                        "🎉 You cracked the code in {turns} {}!",
                        if turns == 1 { "turn" } else { "turns" }
                    )
                    .bright_green()
                    .bold()
                )?;
            }
            _ => {
                writeln!(out, "{}", "💥 Out of turns!".red().bold())?;
                writeln!(out, "The secret was {}", secret.names().bright_yellow())?;
            }
        }

        match get_user_input(input, out, "\nPlay again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            _ => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(summary);
            }
        }
    }
}

/// Get user input with a prompt; `None` once input is exhausted
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn first_secret(config: &GameConfig) -> Code {
        Code::generate_random_unique(&mut config.rng())
    }

    fn run(config: &GameConfig, script: &str) -> (SessionSummary, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let summary = play_session(config, &mut input, &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn invalid_input_reprompts_then_wins() {
        let config = GameConfig::default().with_seed(42);
        let secret = first_secret(&config);
        let script = format!("R R B Y\nRBYX\n{secret}\nno\n");

        let (summary, output) = run(&config, &script);

        assert_eq!(summary, SessionSummary { played: 1, won: 1 });
        assert!(output.contains("each color has to be unique"));
        assert!(output.contains("is not valid"));
        assert!(output.contains("cracked the code in 1 turn"));
    }

    #[test]
    fn running_out_of_turns_reveals_secret() {
        let config = GameConfig::default().with_seed(7).with_turn_limit(1);
        let secret = first_secret(&config);
        let wrong = Code::all()
            .into_iter()
            .find(|c| *c != secret)
            .unwrap();

        let (summary, output) = run(&config, &format!("{wrong}\nn\n"));

        assert_eq!(summary, SessionSummary { played: 1, won: 0 });
        assert!(output.contains("Out of turns"));
        assert!(output.contains(&secret.names()));
    }

    #[test]
    fn quit_ends_session() {
        let config = GameConfig::default().with_seed(1);
        let (summary, output) = run(&config, "quit\n");

        assert_eq!(summary.won, 0);
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn hint_and_end_of_input() {
        let config = GameConfig::default().with_seed(3);
        let (summary, output) = run(&config, "hint\n");

        assert_eq!(summary.played, 1);
        assert!(output.contains("Try"));
    }

    #[test]
    fn play_again_starts_new_game() {
        let config = GameConfig::default().with_seed(5);
        let (summary, _) = run(&config, "quit\n");
        assert_eq!(summary.played, 1);

        let secret = first_secret(&config);
        let (summary, output) = run(&config, &format!("{secret}\nyes\nquit\n"));
        assert_eq!(summary, SessionSummary { played: 2, won: 1 });
        assert!(output.contains("New game started"));
    }
}
