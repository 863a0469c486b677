use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use littlesearch::core::config::Config;
use littlesearch::core::engine::SearchEngine;
use tracing_subscriber::EnvFilter;

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, message: &str) -> io::Result<String> {
    println!("{}", message);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => Ok(String::new()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Optional JSON config as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_json_file(&PathBuf::from(path))?,
        None => Config::default(),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let manifest = prompt(&mut lines, "Enter the master list of files in which you would like to search.")?;
    let mut engine = SearchEngine::new(config)?;
    let noise_words = engine.config().noise_words_path.clone();
    engine.make_index(&PathBuf::from(manifest), &noise_words)?;

    let kw1 = prompt(&mut lines, "Enter the first keyword you would like to search for.")?;
    let kw2 = prompt(&mut lines, "Enter the second keyword you would like to search for.")?;

    // Fold query words the same way document words were folded
    let kw1 = engine.normalize(&kw1).unwrap_or_else(|| kw1.to_lowercase());
    let kw2 = engine.normalize(&kw2).unwrap_or_else(|| kw2.to_lowercase());

    for (i, document) in engine.top_search(&kw1, &kw2).iter().enumerate() {
        println!("{}. {}", i + 1, document);
    }

    Ok(())
}
