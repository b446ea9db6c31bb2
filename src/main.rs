//! ast-select: pick an enclosing expression and widen the selection to it.
#![allow(clippy::multiple_crate_versions)]

use ast_select::candidate::{fetch_candidates, Candidate};
use ast_select::picker::{Outcome, Picker};
use ast_select::position::{Position, Range};
use ast_select::{config, ui, Dialect, Error, SourceTree};
use clap::Parser;
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "ast-select")]
#[command(about = "Pick the enclosing expression around a cursor", long_about = None)]
struct Args {
    /// Document to analyse
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Zero-based line of the cursor (or selection start)
    #[arg(long, short = 'l')]
    line: u32,

    /// Zero-based UTF-16 column of the cursor (or selection start)
    #[arg(long, short = 'c')]
    column: u32,

    /// Zero-based line where the current selection ends
    #[arg(long)]
    end_line: Option<u32>,

    /// Zero-based UTF-16 column where the current selection ends
    #[arg(long)]
    end_column: Option<u32>,

    /// Editor language id, overriding detection from the file extension
    #[arg(long)]
    language_id: Option<String>,

    /// Print candidates as JSON
    #[arg(long, conflicts_with = "pick")]
    json: bool,

    /// Choose a candidate interactively
    #[arg(long)]
    pick: bool,
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let cfg = config::Config::load();

    let dialect = match &args.language_id {
        Some(id) => Dialect::from_language_id(id),
        None => Dialect::from_path(&args.path),
    };
    let Some(dialect) = dialect else {
        log::info!("{}: not a supported dialect, nothing to do", args.path.display());
        return Ok(());
    };

    let text = std::fs::read_to_string(&args.path)?;
    let document = args.path.to_string_lossy();
    let tree = Arc::new(SourceTree::parse_with(&document, dialect, text)?);

    let start = Position::new(args.line, args.column);
    let end = Position::new(
        args.end_line.unwrap_or(args.line),
        args.end_column.unwrap_or(args.column),
    );
    let query = Range::new(start, end);
    let candidates = fetch_candidates(&tree, query);

    if args.pick {
        if candidates.is_empty() {
            return Ok(());
        }
        let picker = Picker::new(tree, candidates, query, cfg.max_label_width);
        let outcome = run_tui(picker, &cfg)?;
        println!("{}", serde_json::to_string(&outcome)?);
    } else if args.json {
        let reports: Vec<_> = candidates.iter().map(Candidate::report).collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for candidate in &candidates {
            println!(
                "{}\t{}",
                candidate.selection,
                candidate.label(cfg.max_label_width)
            );
        }
    }

    Ok(())
}

fn run_tui(mut picker: Picker, cfg: &config::Config) -> io::Result<Outcome> {
    enable_raw_mode()?;
    // The outcome goes to stdout, so the picker draws on stderr.
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut picker, cfg);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    picker: &mut Picker,
    cfg: &config::Config,
) -> io::Result<Outcome> {
    loop {
        terminal.draw(|f| ui::draw(f, picker, cfg))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Down | KeyCode::Char('j') => picker.focus_next(),
                KeyCode::Up | KeyCode::Char('k') => picker.focus_previous(),
                KeyCode::Enter => return Ok(picker.accept()),
                KeyCode::Esc | KeyCode::Char('q') => return Ok(picker.cancel()),
                _ => {}
            }
        }
    }
}
