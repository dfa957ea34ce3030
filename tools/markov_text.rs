/// Markov Text — interactive generation shell.
///
/// Usage: markov_text [--texts <dir>] [--config <file.ron>] [--seed <n>]
///                    [--length <n>] [--trigrams]
///
/// Generates one passage at startup, then another each time a line is
/// entered. Enter `q` (or end input) to quit.

use markov_text::core::pipeline::TextGenerator;
use std::io::{self, BufRead, Write};
use std::process;

const DEFAULT_TEXTS_DIR: &str = "./texts";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut texts_dir = DEFAULT_TEXTS_DIR.to_string();
    let mut config_path = None;
    let mut seed = None;
    let mut length = None;
    let mut trigrams = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--texts" if i + 1 < args.len() => {
                i += 1;
                texts_dir = args[i].clone();
            }
            "--config" if i + 1 < args.len() => {
                i += 1;
                config_path = Some(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = Some(args[i].parse::<u64>().unwrap_or_else(|_| {
                    eprintln!("Error: --seed must be a non-negative integer");
                    process::exit(1);
                }));
            }
            "--length" if i + 1 < args.len() => {
                i += 1;
                length = Some(args[i].parse::<usize>().unwrap_or_else(|_| {
                    eprintln!("Error: --length must be a positive integer");
                    process::exit(1);
                }));
            }
            "--trigrams" => {
                trigrams = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    println!("Markov chain text generator");
    println!("Reading files to train on...");
    println!("Training on text...");
    println!("Learning...");

    let mut builder = TextGenerator::builder().texts_dir(&texts_dir);
    if let Some(ref path) = config_path {
        builder = builder.config_path(path);
    }
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    if let Some(length) = length {
        builder = builder.output_length(length);
    }
    if trigrams {
        builder = builder.trigrams_enabled(true);
    }

    let mut generator = builder.build().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        println!();
        println!("Generating text...");
        println!();
        println!("{}", generator.generate());
        println!();
        print!("Press enter to generate another text or q to quit ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        if line.trim() == "q" {
            break;
        }
    }
}

fn print_usage() {
    println!("Usage: markov_text [--texts <dir>] [--config <file.ron>] [--seed <n>] [--length <n>] [--trigrams]");
    println!();
    println!("  --texts <dir>       Directory of training files (default: {})", DEFAULT_TEXTS_DIR);
    println!("                      Files starting with '_' are skipped.");
    println!("  --config <file>     RON file with output_length and trigrams_enabled");
    println!("  --seed <n>          Seed the random source for reproducible output");
    println!("  --length <n>        Words to generate after the first one");
    println!("  --trigrams          Learn and prefer three-word contexts");
}
