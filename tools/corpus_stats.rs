/// Corpus Stats — trains a model from a directory of texts and reports its size.
///
/// Usage: corpus_stats --texts <dir> [--trigrams]
use std::env;
use std::path::Path;
use std::process;

use markov_text::core::corpus::{list_training_files, read_training_files, CorpusError};
use markov_text::core::ngram::NGramModel;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();

    let mut texts = None;
    let mut trigrams = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--texts" => {
                i += 1;
                texts = args.get(i).cloned();
            }
            "--trigrams" => {
                trigrams = true;
            }
            "--help" | "-h" => {
                println!("Usage: corpus_stats --texts <dir> [--trigrams]");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let texts_dir = texts.unwrap_or_else(|| {
        eprintln!("Error: --texts is required");
        eprintln!("Usage: corpus_stats --texts <dir> [--trigrams]");
        process::exit(1);
    });
    let dir = Path::new(&texts_dir);

    let files = list_training_files(dir).unwrap_or_else(|e| {
        eprintln!("Error listing '{}': {}", texts_dir, e);
        process::exit(1);
    });
    if files.is_empty() {
        eprintln!("Error: {}", CorpusError::NoTrainingFiles(dir.to_path_buf()));
        process::exit(1);
    }
    for file in &files {
        println!("  {}", file.display());
    }

    let text = read_training_files(&files).unwrap_or_else(|e| {
        eprintln!("Error reading '{}': {}", texts_dir, e);
        process::exit(1);
    });

    let model = NGramModel::train(&text, trigrams).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let stats = model.stats();
    println!(
        "Trained on {} files, {} tokens",
        files.len(),
        stats.corpus_tokens
    );
    for table in &stats.tables {
        println!(
            "  order {}: {} contexts, {} successors ({:.2} per context)",
            table.order,
            table.contexts,
            table.successors,
            if table.contexts == 0 {
                0.0
            } else {
                table.successors as f64 / table.contexts as f64
            }
        );
    }
}
