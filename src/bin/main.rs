use crossterm::style::Stylize;
use hinglish_core::{NormalizerConfig, NormalizerEngine};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const ROMANIZE_PREFIX: &str = ":roman ";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout only carries normalized text.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = NormalizerConfig::load_or_default(config_path.as_deref())?;
    let engine = NormalizerEngine::from_config(&config)?;
    info!(
        small = engine.lexicons().small().len(),
        large = engine.lexicons().large().len(),
        "Normalizer ready. Type a line to normalize, ':roman <text>' to romanize, 'exit' to quit."
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let input = line?;
        let cmd = input.trim();

        let result = match cmd {
            "exit" => break,
            "" => continue,
            s if s.starts_with(ROMANIZE_PREFIX) => engine.romanize(&s[ROMANIZE_PREFIX.len()..]),
            s => engine.normalize_text(s),
        };

        match result {
            Ok(text) => writeln!(stdout, "{}", text)?,
            Err(e) => eprintln!("{} {}", "error:".red().bold(), e),
        }
        stdout.flush()?;
    }

    let stats = engine.cache().stats();
    info!(entries = stats.entries, hits = stats.hits, misses = stats.misses, "Shutting down");
    Ok(())
}
