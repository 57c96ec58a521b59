//! Faceoff CLI
//!
//! Run an interactive pairwise preference tournament in the terminal and
//! render the final ranking report.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use faceoff_core::{RankingReport, ScoringConfig, Tournament};

fn print_usage() {
    println!("Faceoff Tournament Runner");
    println!();
    println!("Usage:");
    println!("  faceoff run <items-file> [--seed N] [--config FILE] [--max-votes N] [--out FILE]");
    println!("  faceoff report <report.json>");
    println!();
    println!("The items file lists one identifier (e.g. an image URL) per line;");
    println!("blank lines and lines starting with '#' are skipped.");
    println!();
    println!("During a run, type 1 or 2 to vote for a side, f to finish early.");
    println!();
    println!("Examples:");
    println!("  faceoff run shortlist.txt --seed 7 --out ranking.json");
    println!("  faceoff report ranking.json");
}

/// Parse an items file: one identifier per line, `#` comments and blank
/// lines skipped.
fn parse_items(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

fn load_config(path: &str) -> Result<ScoringConfig, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path, e))?;
    toml::from_str(&contents).map_err(|e| format!("failed to parse config {}: {}", path, e))
}

fn run_tournament(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: run requires an items file");
        print_usage();
        process::exit(1);
    }

    let items_path = &args[0];

    let mut seed: Option<u64> = None;
    let mut config = ScoringConfig::default();
    let mut max_votes: Option<usize> = None;
    let mut out_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    match load_config(&args[i + 1]) {
                        Ok(loaded) => config = loaded,
                        Err(e) => {
                            eprintln!("Error: {}", e);
                            process::exit(1);
                        }
                    }
                    i += 1;
                }
            }
            "--max-votes" | "-m" => {
                if i + 1 < args.len() {
                    max_votes = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            other => {
                eprintln!("Warning: ignoring unknown argument {}", other);
            }
        }
        i += 1;
    }

    let contents = match std::fs::read_to_string(items_path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Error: failed to read {}: {}", items_path, e);
            process::exit(1);
        }
    };
    let ids = parse_items(&contents);

    let tournament = match seed {
        Some(seed) => Tournament::with_seed(ids, config, seed),
        None => Tournament::with_config(ids, config),
    };
    let mut tournament = match tournament {
        Ok(tournament) => tournament,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    println!("=== Faceoff: {} items ===", tournament.items().len());
    println!("Pick the better one. 1 or 2 votes, f finishes early.");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if let Some(cap) = max_votes {
            if tournament.votes_cast() >= cap {
                println!("Vote cap reached, finishing.");
                break;
            }
        }

        let (first, second) = match tournament.select_pair() {
            Ok(Some(pair)) => pair,
            Ok(None) => {
                println!("All remaining items decided.");
                break;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        };

        println!(
            "Vote {} (progress {:.1}%):",
            tournament.votes_cast() + 1,
            tournament.progress()
        );
        println!("  [1] {}", first);
        println!("  [2] {}", second);

        let winner = loop {
            print!("> ");
            let _ = io::stdout().flush();
            let line = match lines.next() {
                Some(Ok(line)) => line,
                _ => {
                    // stdin closed: treat like an early finish
                    break None;
                }
            };
            match line.trim() {
                "1" => break Some(first.clone()),
                "2" => break Some(second.clone()),
                "f" | "q" => break None,
                _ => println!("Please type 1, 2, or f."),
            }
        };

        let Some(winner) = winner else {
            break;
        };

        match tournament.record_vote(&winner) {
            Ok(outcome) => {
                let note = if outcome.loser_eliminated {
                    " (eliminated)"
                } else {
                    ""
                };
                println!(
                    "  {} beats {} (+{} health, {} ms){}",
                    outcome.winner, outcome.loser, outcome.delta, outcome.decision_time_ms, note
                );
                println!();
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }

    let report = RankingReport::generate(&tournament.finish());
    println!();
    report.print();

    if let Some(out_path) = out_path {
        match report.save(Path::new(&out_path)) {
            Ok(()) => println!("Report saved to {}", out_path),
            Err(e) => {
                eprintln!("Error: failed to save report: {}", e);
                process::exit(1);
            }
        }
    }
}

fn show_report(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: report requires a saved report file");
        print_usage();
        process::exit(1);
    }

    match RankingReport::load(Path::new(&args[0])) {
        Ok(report) => report.print(),
        Err(e) => {
            eprintln!("Error: failed to load {}: {}", args[0], e);
            process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "run" => run_tournament(&args[2..]),
        "report" => show_report(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            process::exit(1);
        }
    }
}
