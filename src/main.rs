use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;

use recite::cli::{CliArgs, Command};
use recite::commands::Cmd;
use recite::replay::{ReplayStart, ReplayView, Segment};
use recite::store::{JsonFileStore, PassageStore, StoreError};
use recite::text::{tokenize, UnitKind};
use recite::update::update;
use recite::{EditSession, ReciteConfig};

/// Placeholder characters per unit of display width
const PLACEHOLDER_SCALE: f32 = 2.0;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    recite::tracing::init();

    let config = ReciteConfig::load();
    tracing::debug!(?config, "Starting recite");

    match args.command {
        Command::Tokenize { path, json } => run_tokenize(path.as_deref(), json),
        command @ Command::Save { .. } => run_save(&config, &command),
        Command::List => run_list(&config),
        Command::Show { id, reveal } => {
            let store = open_store(&config)?;
            let saved = store.get(id).map_err(store_error)?;
            let session = EditSession::from_saved(&saved, config.history_policy);
            println!("{}\n", saved.title);
            print_replay(&session.replay(replay_start(&config, reveal)));
            Ok(())
        }
        Command::Delete { id } => {
            let mut store = open_store(&config)?;
            store.delete(id).map_err(store_error)?;
            println!("Deleted {}", id);
            Ok(())
        }
        Command::Publish { id } => {
            let mut store = open_store(&config)?;
            let public_id = store.publish(id).map_err(store_error)?;
            println!("{}", public_id);
            Ok(())
        }
        Command::Public { public_id, reveal } => {
            let store = open_store(&config)?;
            let shared = store.fetch_public(public_id).map_err(store_error)?;
            let session = EditSession::from_shared(&shared, config.history_policy);
            let view = session.public_replay(replay_start(&config, reveal));
            print_replay(&view);
            println!("\n(read-only shared passage)");
            Ok(())
        }
    }
}

fn read_passage(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read passage from {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read passage from stdin")?;
            Ok(text)
        }
    }
}

fn open_store(config: &ReciteConfig) -> Result<JsonFileStore> {
    JsonFileStore::open_default(config.max_saved_passages).map_err(store_error)
}

fn store_error(err: StoreError) -> anyhow::Error {
    anyhow!(err.user_message())
}

fn replay_start(config: &ReciteConfig, reveal: bool) -> ReplayStart {
    ReplayStart::from_cover_flag(config.cover_on_start && !reveal)
}

fn run_tokenize(path: Option<&Path>, json: bool) -> Result<()> {
    let text = read_passage(path)?;
    let units = tokenize(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&units)?);
        return Ok(());
    }

    for unit in &units {
        let kind = match unit.kind() {
            UnitKind::Word => "word",
            UnitKind::Punctuation => "punct",
            UnitKind::Whitespace => "space",
            UnitKind::LineBreak => "line",
            UnitKind::ParagraphBreak => "para",
        };
        println!("{:>5}  {:<6} {:?}", unit.index, kind, unit.text);
    }
    Ok(())
}

fn run_save(config: &ReciteConfig, command: &Command) -> Result<()> {
    let Command::Save { path, .. } = command else {
        bail!("not a save command");
    };

    let text = read_passage(path.as_deref())?;
    let mut session = EditSession::new(text, config.history_policy);

    for msg in command.selection_script() {
        if let Some(Cmd::Notify(notice)) = update(session.engine_mut(), msg) {
            eprintln!("warning: {}", notice);
        }
    }

    let Some(request) = session.save_request(config.title_chars) else {
        bail!("Nothing selected; use --select, --drag or --select-all");
    };

    let mut store = open_store(config)?;
    let saved = store.save(request).map_err(store_error)?;
    println!("{}", saved.id);
    println!(
        "Saved \"{}\" ({} memorized, {} group{})",
        saved.title,
        saved.selected_word_indices.len(),
        saved.highlight_groups.len(),
        if saved.highlight_groups.len() == 1 { "" } else { "s" }
    );
    Ok(())
}

fn run_list(config: &ReciteConfig) -> Result<()> {
    let store = open_store(config)?;
    let entries = store.list().map_err(store_error)?;
    if entries.is_empty() {
        println!("No saved passages");
        return Ok(());
    }

    for entry in entries {
        let shared = entry
            .public_id
            .map(|id| format!("  [public {}]", id))
            .unwrap_or_default();
        println!(
            "{}  {}  ({}){}",
            entry.id,
            entry.title,
            entry.time_ago(),
            shared
        );
    }
    Ok(())
}

fn print_replay(view: &ReplayView) {
    let mut out = String::new();
    for segment in view.segments() {
        match segment {
            Segment::ParagraphBreak => out.push_str("\n\n"),
            Segment::LineBreak => out.push('\n'),
            Segment::Text(text) | Segment::Revealed { text, .. } => out.push_str(text),
            Segment::Hidden { width, .. } => {
                let len = (width * PLACEHOLDER_SCALE).round().max(1.0) as usize;
                out.push_str(&"_".repeat(len));
            }
        }
    }
    println!("{}", out);
    println!(
        "\n{} of {} memorized words hidden",
        view.hidden_count(),
        view.memorized_count()
    );
}
