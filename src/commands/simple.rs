//! Simple interactive CLI mode
//!
//! Text-based turn-by-turn assistant for a game played elsewhere.

use super::normalize_feedback;
use crate::core::{GuessId, Hint, WordSet};
use crate::output::formatters::hint_to_emoji;
use crate::solver::{Session, Solver};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// What the player typed at the feedback prompt
enum Input {
    Feedback(Hint),
    /// Played a different word than suggested
    Played(GuessId),
    Undo,
    New,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input fails or the search hits an index
/// invariant violation.
pub fn run_simple(solver: &Solver<'_>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Wordle Strategy - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest the guess with the fewest expected turns.");
    println!("After each guess, enter the feedback:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use B/-/_/./⬜ for gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'play WORD' if you guessed something else, 'undo', 'new', 'quit'\n");

    let vocab = solver.vocabulary();
    let mut session = Session::new(solver);
    let mut played: Option<GuessId> = None;

    loop {
        if session.remaining() == 0 {
            println!("\n❌ No candidates remain! Your feedback may be incorrect.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");
        }

        let guess = match played.take() {
            Some(guess) => guess,
            None if session.remaining() == 0 => GuessId::new(0),
            None => {
                let Some(suggestion) = session.suggest()? else {
                    session.reset();
                    continue;
                };
                print_turn(solver, &session, suggestion.guess, suggestion.expected_turns);
                suggestion.guess
            }
        };

        match read_input(solver)? {
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::New => {
                session.reset();
                println!("\n🔄 New game started!\n");
            }
            Input::Undo => {
                if session.undo().is_some() {
                    println!("✓ Undone! Back to turn {}\n", session.turns_used() + 1);
                } else {
                    println!("Nothing to undo!\n");
                }
            }
            Input::Played(other) => {
                println!(
                    "Enter the feedback for {}",
                    vocab.guess_text(other).to_uppercase().bright_white().bold()
                );
                played = Some(other);
            }
            Input::Feedback(_) if session.remaining() == 0 => {
                println!("Type 'undo' or 'new' first.\n");
            }
            Input::Feedback(hint) => {
                session.apply(guess, hint);
                if session.is_solved() {
                    celebrate(solver, &session);
                    if !ask_yes("Play again? (yes/no)")? {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    session.reset();
                    println!("\n🔄 New game started!\n");
                }
            }
        }
    }
}

fn print_turn(solver: &Solver<'_>, session: &Session<'_, '_>, guess: GuessId, expected: Option<f64>) {
    let vocab = solver.vocabulary();
    let candidates = session.candidates();

    println!("────────────────────────────────────────────────────────────");
    println!(
        "Turn {}: {} candidates remaining",
        session.turns_used() + 1,
        candidates.len()
    );
    println!("────────────────────────────────────────────────────────────");

    let metrics = solver.metrics(guess, candidates);
    println!(
        "\n📊 Suggested guess: {}",
        vocab.guess_text(guess).to_uppercase().bright_yellow().bold()
    );
    match expected {
        Some(turns) => println!("   Expected turns:   {turns:.3}"),
        None => println!("   Expected turns:   {}", "no plan fits the turns left".yellow()),
    }
    println!("   Information:      {:.3} bits", metrics.information_gain);
    println!(
        "   Expected remain:  {:.1} candidates",
        metrics.expected_remaining
    );
    println!("   Worst case:       {} candidates\n", metrics.max_partition);

    if candidates.len() <= 10 {
        println!("Remaining candidates:");
        for word in candidates.iter() {
            println!("  • {}", vocab.word_text(word).to_uppercase());
        }
        println!();
    }
}

fn read_input(solver: &Solver<'_>) -> Result<Input> {
    loop {
        let input = get_user_input("Enter feedback (G/Y/B, 'win', or command)")?;
        let lower = input.to_lowercase();

        match lower.as_str() {
            "quit" | "q" | "exit" => return Ok(Input::Quit),
            "new" | "n" => return Ok(Input::New),
            "undo" | "u" => return Ok(Input::Undo),
            "win" | "correct" | "solved" => {
                return Ok(Input::Feedback(solver.codec().all_correct()));
            }
            _ => {}
        }

        if let Some(word) = lower.strip_prefix("play ") {
            match solver.vocabulary().guess_id(word) {
                Ok(guess) => return Ok(Input::Played(guess)),
                Err(e) => {
                    println!("❌ {e}\n");
                    continue;
                }
            }
        }

        match solver.display_string_to_hint(&normalize_feedback(&input)) {
            Ok(hint) => return Ok(Input::Feedback(hint)),
            Err(e) => println!("❌ {e}\n"),
        }
    }
}

fn celebrate(solver: &Solver<'_>, session: &Session<'_, '_>) {
    let turns = session.turns_used();
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, &(guess, hint)) in session.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            solver
                .vocabulary()
                .guess_text(guess)
                .to_uppercase()
                .bright_white()
                .bold(),
            hint_to_emoji(solver.codec(), hint)
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

fn ask_yes(prompt: &str) -> Result<bool> {
    Ok(matches!(
        get_user_input(prompt)?.to_lowercase().as_str(),
        "yes" | "y"
    ))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
