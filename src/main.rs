use std::io::BufRead;

use clap::Parser;
use noughts::core::{GameMode, Player, PlayerMark, RoundOutcome, Scoreboard};
use noughts::game::{run_round, Board};
use noughts::player::{ConsolePlayer, PerfectAi};

/// Tic-tac-toe for the terminal: play a friend, or challenge a computer
/// opponent that never loses.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Play against the computer or against another human
    #[arg(long, default_value = "single")]
    mode: GameMode,

    /// Log the move-by-move details
    #[arg(short, long)]
    verbose: bool,
}

enum NextAction {
    PlayAgain,
    ResetScores,
    Quit,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    simple_logger::SimpleLogger::new()
        .with_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init()?;

    // crosses always open a round; in single-player mode the human takes
    // them and the computer answers as the naughts
    let (mut crosses, mut naughts): (Box<dyn Player>, Box<dyn Player>) = match args.mode {
        GameMode::Single => (
            Box::new(ConsolePlayer::new(PlayerMark::Cross)),
            Box::new(PerfectAi::new(PlayerMark::Naught)),
        ),
        GameMode::Two => (
            Box::new(ConsolePlayer::new(PlayerMark::Cross)),
            Box::new(ConsolePlayer::new(PlayerMark::Naught)),
        ),
    };

    let mut board = Board::new();
    let mut score = Scoreboard::default();
    loop {
        let outcome = run_round(&mut board, crosses.as_mut(), naughts.as_mut());
        print!("{board}");
        match outcome {
            RoundOutcome::Won(mark) => println!("Player {mark} wins!"),
            RoundOutcome::Draw => println!("It's a tie!"),
        }
        score.record(outcome);
        println!("{score}");
        board.reset();
        match next_action()? {
            NextAction::PlayAgain => {}
            NextAction::ResetScores => {
                score.reset();
                println!("{score}");
            }
            NextAction::Quit => break,
        }
    }
    Ok(())
}

fn next_action() -> anyhow::Result<NextAction> {
    println!("Play again? [y]es / [r]eset scores and play again / [q]uit");
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(match line.trim().chars().next() {
        Some('y') | Some('Y') => NextAction::PlayAgain,
        Some('r') | Some('R') => NextAction::ResetScores,
        _ => NextAction::Quit,
    })
}
