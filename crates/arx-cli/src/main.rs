//! ARX demo driver.
//!
//! Walks one shared in-memory store through three users at different
//! access levels, then demonstrates linear undo. Everything here is
//! illustrative sequencing; the behavior under demonstration lives in
//! `arx-auth` and `arx-command`.
//!
//! # Environment Variables
//!
//! - `ARX_LOG`: tracing filter for diagnostic output (default `info`;
//!   audit decisions appear at `debug`/`warn`)

use anyhow::{anyhow, Context, Result};
use arx_auth::{AccessLevel, FileGate};
use arx_command::{
    Command, CommandHistory, CommandOutput, DeleteFile, ListFiles, ReadFile, WriteFile,
};
use arx_store::{FileStore, MemoryStore};
use clap::Parser;
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// ARX - audited, reversible file vault demo
#[derive(Parser, Debug)]
#[command(name = "arx")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable debug logging (overrides ARX_LOG)
    #[arg(short, long)]
    debug: bool,

    /// Access level for the undo walkthrough user
    #[arg(long, default_value = "admin")]
    level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("ARX_LOG").unwrap_or_else(|_| EnvFilter::new("info"))
    };
    // Diagnostics go to stderr; stdout carries only the demo narrative.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let walkthrough_level = AccessLevel::parse(&args.level)
        .ok_or_else(|| anyhow!("unknown access level: {:?} (try none/read/write/admin)", args.level))?;

    run_demo(walkthrough_level)
}

/// Executes a command, narrating the outcome instead of aborting on
/// denials — a denied operation is part of the story being told.
fn run(history: &mut CommandHistory, command: impl Command + 'static) {
    let label = command.describe();
    match history.execute(command) {
        Ok(CommandOutput::Content(content)) => println!("  {label} -> {content}"),
        Ok(CommandOutput::Listing(paths)) => println!("  {label} -> [{}]", paths.join(", ")),
        Ok(CommandOutput::None) => println!("  {label} -> ok"),
        Err(e) => println!("  {label} -> {e}"),
    }
}

fn summarize(name: &str, gate: &FileGate) {
    let log = gate.access_log();
    let allowed = log.iter().filter(|e| e.is_allowed()).count();
    let denied = log.len() - allowed;
    println!("  {name}: {} checks (allowed: {allowed}, denied: {denied})", log.len());
}

fn run_demo(walkthrough_level: AccessLevel) -> Result<()> {
    tracing::info!(walkthrough = %walkthrough_level, "starting demo");

    let store: Arc<MemoryStore> = Arc::new(MemoryStore::new());
    store
        .write("config.txt", "DATABASE_URL=localhost:5432")
        .context("seed config.txt")?;
    store
        .write("secret.key", "sk-1234567890")
        .context("seed secret.key")?;

    let stdout = io::stdout();
    println!("ARX file vault demo");

    // ── Scenario 1: read-only user ─────────────────────────────────
    println!("\nScenario 1: read-only user (READ)");
    let reader = Arc::new(FileGate::new(store.clone() as Arc<dyn FileStore>, AccessLevel::Read));
    let mut reader_history = CommandHistory::new();

    run(&mut reader_history, ListFiles::new(reader.clone()));
    run(&mut reader_history, ReadFile::new(reader.clone(), "config.txt"));
    run(
        &mut reader_history,
        WriteFile::new(reader.clone(), "config.txt", "new data"),
    );
    reader.write_access_log(&mut stdout.lock())?;

    // ── Scenario 2: write user ─────────────────────────────────────
    println!("\nScenario 2: write user (WRITE)");
    let writer = Arc::new(FileGate::new(store.clone() as Arc<dyn FileStore>, AccessLevel::Write));
    let mut writer_history = CommandHistory::new();

    run(&mut writer_history, ListFiles::new(writer.clone()));
    run(&mut writer_history, ReadFile::new(writer.clone(), "config.txt"));
    run(
        &mut writer_history,
        WriteFile::new(writer.clone(), "settings.json", "{\"theme\": \"dark\"}"),
    );
    run(&mut writer_history, DeleteFile::new(writer.clone(), "config.txt"));
    writer.write_access_log(&mut stdout.lock())?;
    writer_history.write_history(&mut stdout.lock())?;

    // ── Scenario 3: admin user ─────────────────────────────────────
    println!("\nScenario 3: admin user (ADMIN)");
    let admin = Arc::new(FileGate::new(store.clone() as Arc<dyn FileStore>, AccessLevel::Admin));
    let mut admin_history = CommandHistory::new();

    run(&mut admin_history, ListFiles::new(admin.clone()));
    run(&mut admin_history, ReadFile::new(admin.clone(), "secret.key"));
    run(
        &mut admin_history,
        WriteFile::new(admin.clone(), "users.db", "[{\"id\": 1, \"name\": \"Alice\"}]"),
    );
    run(&mut admin_history, DeleteFile::new(admin.clone(), "settings.json"));
    run(&mut admin_history, ListFiles::new(admin.clone()));

    // ── Undo walkthrough ───────────────────────────────────────────
    println!("\nUndo walkthrough ({walkthrough_level})");
    let user = Arc::new(FileGate::new(
        store.clone() as Arc<dyn FileStore>,
        walkthrough_level,
    ));
    let mut history = CommandHistory::new();

    run(&mut history, WriteFile::new(user.clone(), "test.txt", "Original content"));
    run(&mut history, WriteFile::new(user.clone(), "test.txt", "Modified content"));
    run(&mut history, ReadFile::new(user.clone(), "test.txt"));
    run(&mut history, DeleteFile::new(user.clone(), "test.txt"));

    println!("  undoing {} operations", history.len());
    while let Some(label) = history.undo()? {
        println!("  undid: {label}");
    }
    match store.read("test.txt") {
        Ok(content) => println!("  test.txt after undo: {content}"),
        Err(e) => println!("  test.txt after undo: {e}"),
    }
    history.write_history(&mut stdout.lock())?;

    // ── Wrap-up ────────────────────────────────────────────────────
    println!("\nStatistics");
    summarize("read-only user", &reader);
    summarize("write user", &writer);
    summarize("admin user", &admin);
    summarize("walkthrough user", &user);

    let mut out = stdout.lock();
    writeln!(out, "\nFinal files: [{}]", store.list()?.join(", "))?;
    writeln!(out, "Demo completed")?;
    Ok(())
}
