use chalkspell::config::{ConfigStore, FileConfigStore};
use chalkspell::grid::LetterTile;
use chalkspell::highscore::{HighScoreStore, MemoryHighScoreStore, SqliteHighScoreStore};
use chalkspell::roster::{Character, DEFAULT_CHARACTERS};
use chalkspell::round::Outcome;
use chalkspell::session::{
    GameEvent, GameSession, SessionObserver, SessionSettings, SessionState,
};
use chalkspell::word::CaseMode;
use clap::Parser;
use std::error::Error;
use std::io::{self, BufRead, Write};

/// chalkboard spelling game played with letter tiles
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A chalkboard spelling game: a character is named and its name is spelled by picking letters from a distractor-filled grid. Speed and accuracy feed the score."
)]
pub struct Cli {
    /// number of rounds to play (defaults to the configured value)
    #[clap(short = 'r', long)]
    rounds: Option<usize>,

    /// letter case used for target words and tiles
    #[clap(short = 'c', long, value_enum)]
    case_mode: Option<CaseMode>,

    /// character names to exclude from selection (repeatable)
    #[clap(long = "exclude")]
    exclude: Vec<String>,

    /// play with a custom roster instead of the built-in characters (repeatable)
    #[clap(long = "roster")]
    roster: Vec<String>,

    /// list the built-in characters and exit
    #[clap(long)]
    list_characters: bool,
}

/// Prints session events to stdout; the whole rendering layer of this
/// front-end.
struct ConsoleObserver;

impl SessionObserver for ConsoleObserver {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::CharacterPresented { name, .. } => {
                println!();
                println!("How do you spell... {}?", name);
            }
            GameEvent::LetterGridReady { tiles } => print_grid(tiles),
            GameEvent::LetterResult {
                submission,
                typed_so_far,
            } => match submission.outcome {
                Outcome::Correct => println!("  {}", typed_so_far),
                Outcome::Wrong => println!("  wrong letter, try again"),
                Outcome::WordAlreadyComplete => {}
            },
            GameEvent::HintRequested { letter } => {
                println!("  hint: the next letter is '{}'", letter);
            }
            GameEvent::RoundComplete { score, .. } => {
                println!("CORRECT! Round score: {}", score);
            }
            GameEvent::SessionComplete {
                final_score,
                is_new_high_score,
            } => {
                println!();
                println!("GAME COMPLETE! Final score: {}", final_score);
                if *is_new_high_score {
                    println!("NEW HIGH SCORE!");
                }
            }
        }
    }
}

fn print_grid(tiles: &[LetterTile]) {
    // Two rows of eight, like the chalkboard layout.
    for row in tiles.chunks(8) {
        let line: Vec<String> = row.iter().map(|t| t.glyph.to_string()).collect();
        println!("  {}", line.join(" "));
    }
}

fn build_settings(cli: &Cli) -> SessionSettings {
    let config = FileConfigStore::new().load();
    let mut settings = SessionSettings::from(&config);

    if let Some(rounds) = cli.rounds {
        settings.total_rounds = rounds;
    }
    if let Some(case_mode) = cli.case_mode {
        settings.case_mode = case_mode;
    }
    settings
        .excluded_names
        .extend(cli.exclude.iter().map(|n| n.to_lowercase()));
    if !cli.roster.is_empty() {
        settings.roster = cli.roster.iter().map(Character::new).collect();
    }

    settings
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.list_characters {
        for name in DEFAULT_CHARACTERS {
            println!("{}", name);
        }
        return Ok(());
    }

    let settings = build_settings(&cli);

    let store: Box<dyn HighScoreStore> = match SqliteHighScoreStore::new() {
        Ok(store) => Box::new(store),
        Err(_) => Box::new(MemoryHighScoreStore::new()),
    };

    let mut session = GameSession::new(settings, store)?;
    session.set_observer(Box::new(ConsoleObserver));

    let best = session.high_score();
    if best > 0 {
        println!("Best score so far: {}", best);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    'game: while session.state() == SessionState::InProgress {
        session.start_round()?;
        let (current, total) = session.progress();
        println!("Character {}/{}", current, total);

        while session.current_round().map_or(false, |r| !r.is_complete()) {
            print!("> ");
            io::stdout().flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    // Input closed: abandon the round and leave.
                    session.abandon_round();
                    break 'game;
                }
            };

            for glyph in line.chars() {
                session.submit_letter_click(glyph);
                if session.current_round().map_or(true, |r| r.is_complete()) {
                    break;
                }
            }
        }

        if session.current_round().map_or(false, |r| r.is_complete()) {
            session.complete_round()?;
        }
    }

    if session.state() == SessionState::Finished {
        let _ = session.save_results();
    }

    Ok(())
}
