mod app;
mod config;
mod input;
mod lyrics;
mod search;
mod tui;
mod youtube;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Read;

#[derive(Debug, Parser)]
#[command(name = "lyric-clip", version, about = "Find a song by a lyric and preview it as a YouTube clip")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Search lyrics, then videos for the top hit, and print both (headless).
    Search {
        query: String,
    },
    /// Search and print the clip preview for one result (headless).
    Preview {
        query: String,
        /// Lyrics result to use (1-based).
        #[arg(long, default_value_t = 1)]
        lyric: usize,
        /// Video result to pair with it (1-based).
        #[arg(long, default_value_t = 1)]
        video: usize,
    },
    /// Print the snippet of a local lyrics file ("-" for stdin) matching a query.
    Locate {
        path: std::path::PathBuf,
        query: String,
        /// Context lines around the match (defaults to the config value).
        #[arg(long)]
        radius: Option<usize>,
    },
    /// Dump raw YouTube search JSON to stdout (headless).
    SearchJson {
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Tui);

    // Keep the alternate screen clean while the TUI runs.
    let level = match command {
        Command::Tui => tracing::Level::WARN,
        _ => tracing::Level::INFO,
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let cfg_path = match cli.config.clone() {
        Some(p) => p,
        None => config::default_config_path().context("default config path")?,
    };

    match command {
        Command::Tui => {
            let mut terminal = tui::TerminalGuard::enter(cfg.input.mouse).context("init terminal")?;
            let mut app = app::App::new(cfg, cfg_path)?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Search { query } => {
            let outcome = run_search(&cfg, &query).await?;
            print_outcome(&outcome);
        }
        Command::Preview { query, lyric, video } => {
            let outcome = run_search(&cfg, &query).await?;
            let record = lyric
                .checked_sub(1)
                .and_then(|i| outcome.lyrics.get(i))
                .cloned()
                .with_context(|| format!("no lyrics result #{lyric} ({} found)", outcome.lyrics.len()))?;
            let video = video
                .checked_sub(1)
                .and_then(|i| outcome.videos.get(i))
                .cloned()
                .with_context(|| format!("no video result #{video} ({} found)", outcome.videos.len()))?;
            let selection =
                app::state::Selection::new(record, video, &outcome.query, cfg.snippet.context_radius);
            print_selection(&selection);
        }
        Command::Locate { path, query, radius } => {
            let raw = if path.as_os_str() == "-" {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("read lyrics from stdin")?;
                buf
            } else {
                std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?
            };
            let synced = raw.trim_start().starts_with('[');
            let doc = lyrics::LyricsDocument::parse(&raw, synced);
            if doc.is_empty() {
                tracing::warn!("no lyric lines in {}", path.display());
            }
            let radius = radius.unwrap_or(cfg.snippet.context_radius);
            let (snippet, start_secs) = lyrics::preview(&doc, &query, radius);
            print_snippet(&snippet);
            if let Some(s) = start_secs {
                println!("(starts at {}:{:02})", s / 60, s % 60);
            }
        }
        Command::SearchJson { query } => {
            let yt = youtube::YoutubeClient::new(&cfg.youtube)?;
            let v = yt.search_raw(&query).await?;
            println!("{}", serde_json::to_string_pretty(&v)?);
        }
    }

    Ok(())
}

async fn run_search(cfg: &config::Config, query: &str) -> anyhow::Result<search::SearchOutcome> {
    let lrclib = lyrics::LrclibClient::new(&cfg.lyrics)?;
    let yt = youtube::YoutubeClient::new(&cfg.youtube)?;
    search::run(&lrclib, &yt, query).await
}

fn print_outcome(outcome: &search::SearchOutcome) {
    println!("Lyrics results for {:?}:", outcome.query);
    if outcome.lyrics.is_empty() {
        println!("  (none)");
    }
    for (i, r) in outcome.lyrics.iter().enumerate() {
        let doc = r.document();
        let texts = doc.texts();
        let line = lyrics::snippet::find_match(&texts, &outcome.query)
            .map(|m| format!("  line {}: {}", m + 1, texts[m]))
            .unwrap_or_default();
        println!("{:02}. {} (id={}){}", i + 1, r.label(), r.id, line);
    }

    println!();
    println!("YouTube results:");
    if outcome.videos.is_empty() {
        println!("  (none)");
    }
    for (i, v) in outcome.videos.iter().enumerate() {
        let duration = v
            .duration_seconds
            .map(|d| format!(" [{}]", youtube::models::format_duration(d)))
            .unwrap_or_default();
        println!("{:02}. {}{}  (video_id={})", i + 1, v.label(), duration, v.video_id);
    }
    if let Some(err) = &outcome.video_error {
        eprintln!("warning: video search failed: {err}");
    }
}

fn print_selection(sel: &app::state::Selection) {
    println!("{} - {}", sel.record.track_name, sel.record.artist_name);
    println!("{}", sel.clip_url());
    println!();
    print_snippet(&sel.snippet);
}

fn print_snippet(snippet: &lyrics::Snippet) {
    if snippet.is_empty() {
        println!("(no lyrics)");
        return;
    }
    for (offset, text) in snippet.lines.iter().enumerate() {
        let idx = snippet.start + offset;
        let marker = if snippet.matched == Some(idx) { '>' } else { ' ' };
        println!("{marker} {:>4}  {text}", idx + 1);
    }
}
