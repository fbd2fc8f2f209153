use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use rand::{rngs::StdRng, SeedableRng};

use word_hunt::{words, CheckOutcome, Error, Game, GameConfig, SelectionChange};

/// Find the hidden words in a grid of letters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Words to hide. Defaults to the preset list
    words: Vec<String>,

    /// Prompt for the words instead of using the preset list
    #[arg(long)]
    custom: bool,

    /// Starting grid size
    #[arg(short, long, default_value_t = GameConfig::default().initial_size)]
    size: usize,

    /// Failed placements in a row before the grid grows
    #[arg(long, default_value_t = GameConfig::default().retry_budget)]
    retry_budget: usize,

    /// Largest size the grid may grow to
    #[arg(long, default_value_t = GameConfig::default().max_size)]
    max_size: usize,

    /// Points per word found
    #[arg(long, default_value_t = GameConfig::default().points_per_word)]
    points: u32,

    /// Seed for a reproducible grid
    #[arg(long)]
    seed: Option<u64>,

    /// Log generator details
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig::default()
            .with_initial_size(self.size)
            .with_retry_budget(self.retry_budget)
            .with_max_size(self.max_size)
            .with_points_per_word(self.points)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug_enabled = cli.debug || std::env::var("WORD_HUNT_DEBUG").is_ok();
    word_hunt::log::init_logger(debug_enabled);

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> word_hunt::Result<()> {
    let config = cli.config();
    config.validate()?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let word_list = choose_words(cli, &mut input)?;
    let mut game = Game::with_rng(word_list, config, &mut rng)?;

    loop {
        render(&game)?;

        let Some(line) = prompt(&mut input, "row col | check | quit > ")? else {
            return Ok(());
        };

        match line.as_str() {
            "" => continue,
            "q" | "quit" => return Ok(()),
            "c" | "check" => match game.check_selection() {
                CheckOutcome::WordFound { word, points } => {
                    println!("Found {word}! +{points}");
                }
                CheckOutcome::NoMatch(word) => {
                    println!("{word} is not a valid word.");
                }
                CheckOutcome::GameWon { word, score } => {
                    render(&game)?;
                    println!("Found {word}! You found all the words with a score of {score}.");

                    let again = prompt(&mut input, "Play again? [y/N] ")?;
                    if !matches!(again.as_deref(), Some("y" | "yes")) {
                        return Ok(());
                    }

                    let word_list = choose_words(cli, &mut input)?;
                    game.restart(word_list, &mut rng)?;
                }
            },
            other => match parse_cell(other) {
                Some((row, col)) => match game.click(row, col) {
                    Ok(SelectionChange::Reset) => println!("Not next to the last cell, selection cleared."),
                    Ok(_) => {}
                    Err(e @ Error::OutOfBounds { .. }) => println!("{e}"),
                    Err(e) => return Err(e),
                },
                None => println!("Enter a row and column, `check`, or `quit`."),
            },
        }
    }
}

fn choose_words(cli: &Cli, input: &mut impl BufRead) -> word_hunt::Result<Vec<String>> {
    if !cli.custom {
        return if cli.words.is_empty() {
            Ok(words::preset())
        } else {
            words::normalize_words(&cli.words)
        };
    }

    let count = loop {
        let Some(line) = prompt(input, "How many words would you like to input? ")? else {
            return Err(end_of_input());
        };

        match line.parse::<usize>() {
            Ok(count) if count > 0 => break count,
            _ => println!("Enter a positive number."),
        }
    };

    let mut list = Vec::with_capacity(count);
    while list.len() < count {
        let Some(line) = prompt(input, "Enter a word: ")? else {
            return Err(end_of_input());
        };

        match words::normalize_word(&line) {
            Ok(word) => list.push(word),
            Err(e) => println!("{e}"),
        }
    }

    Ok(list)
}

fn end_of_input() -> Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "input ended before the word list was complete").into()
}

/// Prints `message` and reads one trimmed line. `None` at end of input.
fn prompt(input: &mut impl BufRead, message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_lowercase()))
}

fn parse_cell(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split(|ch: char| ch == ',' || ch.is_whitespace()).filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;

    parts.next().is_none().then_some((row, col))
}

fn render(game: &Game) -> io::Result<()> {
    let mut stdout = io::stdout();
    let size = game.size();

    queue!(stdout, Print("\n   "))?;
    for col in 0..size {
        queue!(stdout, Print(format!("{:2} ", col)))?;
    }
    queue!(stdout, Print("\n"))?;

    for (row, letters) in game.grid().rows().enumerate() {
        queue!(stdout, Print(format!("{:2} ", row)))?;

        for (col, ch) in letters.into_iter().enumerate() {
            let highlight = if game.selection().contains(row, col) {
                Some(Color::Yellow)
            } else if game.is_found(row, col) {
                Some(Color::Green)
            } else {
                None
            };

            match highlight {
                Some(color) => {
                    queue!(stdout, SetBackgroundColor(color))?;
                    queue!(stdout, SetForegroundColor(Color::Black))?;
                    queue!(stdout, Print(format!(" {ch}")))?;
                    queue!(stdout, ResetColor)?;
                    queue!(stdout, Print(" "))?;
                }
                None => queue!(stdout, Print(format!(" {ch} ")))?,
            }
        }
        queue!(stdout, Print("\n"))?;
    }

    queue!(stdout, Print("\n"))?;
    queue!(stdout, SetForegroundColor(Color::Cyan))?;
    queue!(stdout, Print("Words:\n"))?;
    queue!(stdout, ResetColor)?;
    for (i, word) in game.remaining_words().iter().enumerate() {
        queue!(stdout, Print(format!("{}. {}\n", i + 1, word)))?;
    }
    queue!(stdout, Print(format!("Score: {}\n", game.score())))?;

    stdout.flush()
}
