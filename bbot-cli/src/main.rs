//! bbot CLI: chat with the BurnAware response engine in the terminal.
//! The CLI is the caller layer: it owns the conversation store, feeds the
//! window back as history, and appends each exchange after the engine replies.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use bbot_core::{init_tracing, ConversationTurn, Mood, UserContext};
use bbot_engine::ChatEngine;
use bbot_memory::{ConversationStore, DEFAULT_CAPACITY_TURNS};

#[derive(Parser)]
#[command(name = "bbot")]
#[command(about = "Chat with the BurnAware companion bot", long_about = None)]
#[command(version)]
struct Cli {
    /// User id for the conversation window.
    #[arg(short, long, default_value = "local")]
    user: String,

    /// Display name used for personalization.
    #[arg(short, long)]
    name: Option<String>,

    /// Current mood label (unknown labels fall back to neutral).
    #[arg(short, long, default_value = "neutral")]
    mood: String,

    /// Current stress figure, 1-10 (clamped).
    #[arg(short, long, default_value = "5")]
    stress: i32,

    /// Active goal titles; repeat the flag for several.
    #[arg(short, long)]
    goal: Vec<String>,

    /// RNG seed for reproducible phrase selection.
    #[arg(long)]
    seed: Option<u64>,

    /// Conversation window capacity in turns.
    #[arg(long, default_value_t = DEFAULT_CAPACITY_TURNS)]
    capacity: usize,

    /// Append logs to this file in addition to stdout.
    #[arg(long)]
    log_file: Option<String>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let context = UserContext {
        name: cli.name,
        mood: Mood::parse(&cli.mood),
        stress_level: cli.stress,
        active_goals: cli.goal,
    };
    debug!(
        mood = %context.mood.as_str(),
        stress = context.clamped_stress(),
        goals = context.active_goals.len(),
        "context loaded"
    );

    let engine = match cli.seed {
        Some(seed) => ChatEngine::with_seed(seed),
        None => ChatEngine::new(),
    };
    let store = ConversationStore::with_capacity(cli.capacity);

    println!("BurnAware companion. Type a message; 'exit' or 'quit' to leave.");
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("you> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        let history = store.window(&cli.user);
        let reply = engine.generate_reply(&cli.user, &context, message, &history);
        let sentiment = engine.analyze_sentiment(message);
        debug!(sentiment = %sentiment.as_str(), "message analyzed");

        store.append(&cli.user, ConversationTurn::user(message));
        store.append(&cli.user, ConversationTurn::bot(reply.clone()));

        println!("bot> {}", reply);
    }

    println!("Take care. 🌿");
    Ok(())
}
