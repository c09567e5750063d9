//! # Wordmaze Main Entry Point
//!
//! Parses the command line, initializes logging, and runs the interactive
//! prompt loop for whichever game was selected. The loops here are thin
//! controllers: they read input, call model mutators, and redraw.

use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use wordmaze::maze::{
    parse_command, save, Command, Model, TextInterface, UserInterface, INPUT_MESSAGE,
    ITEM_NAMES, ITEM_UNAVAILABLE_MESSAGE, LOSS_MESSAGE, MOVE_MESSAGE, WIN_MESSAGE,
    WRONG_ITEM_MESSAGE,
};
use wordmaze::wordle::{
    has_lost, has_won, validate_guess, GuessError, GuessHistory, SessionStats, WordList,
};
use wordmaze::{WordmazeError, WordmazeResult};

/// Command line arguments for the wordmaze games.
#[derive(Parser, Debug)]
#[command(name = "wordmaze")]
#[command(about = "Two small terminal games: Wordle and MazeRunner")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    game: Game,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Game {
    /// Guess a six-letter word in six tries
    Wordle {
        /// Vocabulary file of accepted guesses, one word per line
        #[arg(long, default_value = "vocab.txt")]
        vocab: PathBuf,

        /// Answer pool file, one word per line
        #[arg(long, default_value = "answers.txt")]
        answers: PathBuf,
    },
    /// Survive the maze: collect items, mind your stats, find the way out
    Maze {
        /// Path to a game definition file (prompted for when omitted)
        game_file: Option<PathBuf>,

        /// Resume from a save file instead of starting fresh
        #[arg(long)]
        load: Option<PathBuf>,
    },
}

fn main() -> WordmazeResult<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level.as_str()),
    )
    .init();
    log::info!("wordmaze v{}", wordmaze::VERSION);

    match args.game {
        Game::Wordle { vocab, answers } => run_wordle(&vocab, &answers),
        Game::Maze { game_file, load } => run_maze(game_file, load),
    }
}

/// Prints a prompt and reads one trimmed line of input.
fn prompt(message: &str) -> WordmazeResult<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(WordmazeError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        )));
    }
    Ok(line.trim().to_string())
}

/// Runs Wordle rounds until the player quits or declines another game.
fn run_wordle(vocab_path: &Path, answers_path: &Path) -> WordmazeResult<()> {
    let vocab = WordList::load(vocab_path)?;
    let mut answers = WordList::load(answers_path)?;
    let mut stats = SessionStats::new();
    let mut rng = rand::thread_rng();

    loop {
        let answer = match answers.choose(&mut rng) {
            Some(word) => word.to_string(),
            None => {
                println!("No answers left to play!");
                return Ok(());
            }
        };
        log::debug!("answer chosen ({} left in pool)", answers.len());

        let mut history = GuessHistory::new();
        let mut guess_number = 1;
        let won = loop {
            // Special inputs don't consume a guess; keep prompting until a
            // valid word comes in
            let guess = loop {
                let input = prompt(&format!("Enter guess {}: ", guess_number))?.to_lowercase();
                match input.as_str() {
                    "q" => return Ok(()),
                    "k" => println!("{}", history.render_keyboard()),
                    "h" => println!("Ah, you need help? Unfortunate."),
                    _ => match validate_guess(&input, &vocab) {
                        Ok(()) => break input,
                        Err(GuessError::WrongLength) => {
                            println!("Invalid! Guess must be of length 6")
                        }
                        Err(GuessError::UnknownWord) => println!("Invalid! Unknown word"),
                    },
                }
            };

            history.push(&guess, &answer);
            print!("{}", history.render());

            if has_won(&guess, &answer) {
                println!("Correct! You won in {} guesses!", guess_number);
                break true;
            }
            if has_lost(guess_number) {
                println!("You lose! The answer was: {}", answer);
                break false;
            }
            guess_number += 1;
        };

        stats.record(guess_number, won);
        println!("{}", stats.render());

        if !prompt("Would you like to play again (y/n)? ")?.eq_ignore_ascii_case("y") {
            return Ok(());
        }
        answers.remove(&answer);
    }
}

/// Runs the MazeRunner text game until a win, a loss, or a quit.
fn run_maze(game_file: Option<PathBuf>, load: Option<PathBuf>) -> WordmazeResult<()> {
    let (mut model, saved_time) = if let Some(path) = load {
        save::read_save(&path)?
    } else if let Some(path) = game_file {
        (Model::from_file(&path)?, (0, 0))
    } else {
        (prompt_for_game_file()?, (0, 0))
    };

    let time_offset = Duration::from_secs(u64::from(saved_time.0) * 60 + u64::from(saved_time.1));
    let started = Instant::now();
    let view = TextInterface;

    loop {
        if let (Some(maze), Some(items)) = (model.current_maze(), model.current_items()) {
            view.draw(
                maze,
                items,
                model.player_position(),
                model.player_inventory(),
                model.player_stats(),
            );
        }

        let command = loop {
            let input = prompt(MOVE_MESSAGE)?;
            if let Some(command) = parse_command(&input) {
                break command;
            }
        };

        match command {
            Command::Move(delta) => model.move_player(delta),
            Command::UseItem(name) => try_item(&mut model, &name),
            Command::Save(path) => {
                let elapsed = time_offset + started.elapsed();
                let time = (
                    (elapsed.as_secs() / 60) as u32,
                    (elapsed.as_secs() % 60) as u32,
                );
                match save::write_save(&model, time, &path) {
                    Ok(()) => println!("Game saved to {}", path.display()),
                    Err(err) => println!("Could not save the game: {}", err),
                }
            }
            Command::Quit => return Ok(()),
        }

        // Won is checked before lost, so finishing the last level on a fatal
        // tile still counts as a win
        if model.has_won() {
            println!("{}", WIN_MESSAGE);
            return Ok(());
        }
        if model.has_lost() {
            println!("{}", LOSS_MESSAGE);
            return Ok(());
        }
    }
}

/// Prompts for a game file path until one loads, rejecting unreadable or
/// malformed files with a message.
fn prompt_for_game_file() -> WordmazeResult<Model> {
    loop {
        let path = prompt(INPUT_MESSAGE)?;
        match Model::from_file(&path) {
            Ok(model) => return Ok(model),
            Err(err) => println!("That game file is not valid ({})", err),
        }
    }
}

/// Handles an `i <item name>` command: unknown names and empty inventories
/// each get their message; otherwise the item is consumed and applied.
fn try_item(model: &mut Model, item_name: &str) {
    if !ITEM_NAMES.contains(&item_name) {
        println!("{}", WRONG_ITEM_MESSAGE);
    } else if model.player_inventory().check_item(item_name) {
        model.player_mut().use_item(item_name);
    } else {
        println!("{}", ITEM_UNAVAILABLE_MESSAGE);
    }
}
