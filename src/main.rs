use std::cell::Cell;
use std::fs;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::sync::Arc;

use vocab_drill::bank::WordBank;
use vocab_drill::config::Config;
use vocab_drill::constants::PROMPT;
use vocab_drill::engine::Severity;
use vocab_drill::logging::init_tracing;
use vocab_drill::progress::ProgressStore;
use vocab_drill::session::DrillSession;
use vocab_drill::store::Store;

fn main() {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    init_tracing(&config);
    tracing::info!("Starting vocab-drill");

    let store = Arc::new(Store::open(&config.sled_path).expect("Failed to open sled database"));

    let mut progress = ProgressStore::with_persistence(store.clone());
    match store.load_progress() {
        Ok(persisted) => progress.merge(persisted),
        Err(e) => tracing::warn!(error = %e, "Failed to load persisted progress"),
    }

    let tree_stale = Rc::new(Cell::new(false));
    let stale_flag = tree_stale.clone();
    progress.subscribe(move || stale_flag.set(true));

    let bank = match load_bank(&config.word_file) {
        Ok(bank) => {
            tracing::info!(file = %config.word_file, words = bank.len(), "Word samples loaded");
            bank
        }
        Err(message) => {
            eprintln!("{message}");
            WordBank::default()
        }
    };

    let mut session = DrillSession::new(bank, progress);

    if session.engine().bank().is_empty() {
        println!("No drillable words loaded; set WORD_FILE or use :load <path>");
    } else {
        println!("{}", session.status_text());
    }
    print_prompt();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read stdin");
                break;
            }
        };

        match line.trim() {
            ":quit" | ":q" => break,
            ":progress" => {
                print_tree(&session);
                tree_stale.set(false);
            }
            command if command.starts_with(":load") => {
                let path = command.strip_prefix(":load").unwrap_or_default().trim();
                let path = if path.is_empty() {
                    config.word_file.as_str()
                } else {
                    path
                };
                match load_bank(path) {
                    Ok(bank) => {
                        tracing::info!(file = %path, words = bank.len(), "Word samples reloaded");
                        session.reload(bank);
                    }
                    // 加载失败时保留旧词库，不做半成品替换
                    Err(message) => eprintln!("{message}"),
                }
                println!("{}", session.status_text());
            }
            _ => {
                if let Some(feedback) = session.type_line(&line) {
                    match feedback.severity {
                        Severity::Info => println!("{}", feedback.message),
                        Severity::Error => eprintln!("{}", feedback.message),
                    }
                    println!("{}", feedback.status);
                }
                if tree_stale.get() {
                    tracing::debug!("Progress changed; tree view is stale until re-pulled");
                }
            }
        }
        print_prompt();
    }

    tracing::info!("Flushing store before exit");
    if let Err(e) = store.flush() {
        tracing::error!(error = %e, "Failed to flush store before exit");
    }
    tracing::info!("Shutdown complete");
}

fn load_bank(path: &str) -> Result<WordBank, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("Error reading file: {e}"))?;
    WordBank::from_json(&raw).map_err(|e| format!("Error parsing word samples: {e}"))
}

fn print_tree(session: &DrillSession) {
    let tree = session.tree();
    let dates = tree.dates();
    if dates.is_empty() {
        println!("No progress recorded yet.");
        return;
    }
    for date in dates {
        if let Some(summary) = tree.day_summary(date) {
            println!(
                "{date}  {}/{} correct ({:.0}%)",
                summary.correct,
                summary.attempts,
                summary.accuracy * 100.0
            );
        }
        for row in tree.words_for_date(date) {
            println!("  {:<20} {}", row.word, row.description());
        }
    }
}

fn print_prompt() {
    print!("{PROMPT}");
    let _ = io::stdout().flush();
}
