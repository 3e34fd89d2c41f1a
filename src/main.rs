//! Word Finder CLI
//!
//! Command-line front end for the word finder engine: a one-shot query
//! mode and an interactive prompt.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use word_finder::{FindResult, FinderConfig, WordFinder, DEFAULT_MAX_INPUT_LETTERS, DEFAULT_MIN_WORD_LENGTH};

const BANNER_TEXT: &str = include_str!("text/banner.txt");
const HELP_TEXT: &str = include_str!("text/help.txt");

/// Find every word that can be spelled from a set of letters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Letters to search with; starts an interactive prompt when omitted
    letters: Option<String>,

    /// Path to a newline-separated word list (defaults to the bundled list)
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Maximum number of letters accepted in a query
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_LETTERS)]
    max_letters: usize,

    /// Minimum length of dictionary words
    #[arg(long, default_value_t = DEFAULT_MIN_WORD_LENGTH)]
    min_length: usize,

    /// Number of worker threads (defaults to the processor count)
    #[arg(short, long)]
    workers: Option<usize>,
}

impl Cli {
    fn config(&self) -> FinderConfig {
        FinderConfig {
            max_input_letters: self.max_letters,
            min_word_length: self.min_length,
            workers: self.workers,
        }
    }
}

fn print_result(result: &FindResult) {
    if result.is_empty() {
        println!("No words found.");
        return;
    }

    println!();
    for (length, words) in &result.groups {
        println!("{length} letters ({}):", words.len());
        for (n, word) in (0..8).cycle().zip(words) {
            if n == 0 {
                print!("  ");
            }
            print!("{word:<12}");
            if n == 7 {
                println!();
            }
        }
        if words.len() % 8 != 0 {
            println!();
        }
    }
    println!();
    println!("Total: {} words", result.total_count);
    println!();
}

/// Build the engine, falling back to an empty dictionary if loading fails.
///
/// A failed load has already been logged as a warning by the engine.
fn build_finder(cli: &Cli) -> WordFinder {
    let config = cli.config();
    match &cli.dictionary {
        Some(path) => {
            let mut finder = WordFinder::new(config);
            let _ = finder.load_dictionary(path);
            finder
        }
        None => WordFinder::embedded(config),
    }
}

/// One line typed at the interactive prompt.
#[derive(Debug, PartialEq, Eq)]
enum PromptLine<'a> {
    Blank,
    /// `:name rest of line`
    Command { name: String, arg: &'a str },
    Query(&'a str),
}

impl<'a> PromptLine<'a> {
    fn parse(line: &'a str) -> Self {
        let input = line.trim();
        if input.is_empty() {
            return PromptLine::Blank;
        }
        match input.strip_prefix(':') {
            Some(command) => {
                let (name, arg) = command.split_once(char::is_whitespace).unwrap_or((command, ""));
                PromptLine::Command {
                    name: name.to_lowercase(),
                    arg: arg.trim(),
                }
            }
            None => PromptLine::Query(input),
        }
    }
}

fn run_command(finder: &mut WordFinder, command: &str, arg: &str) -> bool {
    match command {
        "help" | "h" | "?" => {
            println!("{}", HELP_TEXT);
        }
        "quit" | "exit" | "q" => {
            println!("Goodbye!");
            return false;
        }
        "stats" => {
            let stats = finder.cache_stats();
            println!(
                "Dictionary: {} words | cache: {} entries, {} hits, {} misses",
                finder.dictionary().len(),
                stats.entries,
                stats.hits,
                stats.misses
            );
        }
        "load" => {
            if arg.is_empty() {
                println!("Usage: :load <path>");
            } else if finder.load_dictionary(arg).is_ok() {
                println!("Loaded {} words.", finder.dictionary().len());
            } else {
                println!("Dictionary is now empty.");
            }
        }
        _ => {
            println!("Unknown command: :{command}");
            println!("Type ':help' for available commands.");
        }
    }
    true
}

fn run_interactive(mut finder: WordFinder) -> io::Result<()> {
    println!("{}", BANNER_TEXT);
    println!("Loaded {} words.", finder.dictionary().len());
    println!("Type letters to search, or ':help' for commands.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match PromptLine::parse(&line) {
            PromptLine::Blank => continue,
            PromptLine::Command { name, arg } => {
                if !run_command(&mut finder, &name, arg) {
                    break;
                }
            }
            PromptLine::Query(input) => {
                let start = Instant::now();
                match finder.find_words(input) {
                    Ok(result) => {
                        print_result(&result);
                        log::debug!("query took {:.2?}", start.elapsed());
                    }
                    Err(e) => println!("{}", e.display_detailed()),
                }
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    word_finder::log::init_logger(std::env::var("WORD_FINDER_DEBUG").is_ok());

    let cli = Cli::parse();
    let finder = build_finder(&cli);

    match &cli.letters {
        Some(letters) => match finder.find_words(letters) {
            Ok(result) => {
                print_result(&result);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e.display_detailed());
                ExitCode::FAILURE
            }
        },
        None => match run_interactive(finder) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}
