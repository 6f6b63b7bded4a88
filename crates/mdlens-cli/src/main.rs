use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mdlens_config::{Config, History, HistoryEntry};
use mdlens_engine::{Document, io};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::{env, io::stdout, path::PathBuf, process};

mod view;

struct App {
    title: String,
    lines: Vec<Line<'static>>,
    scroll: u16,
}

impl App {
    fn new(document: &Document) -> Self {
        Self {
            title: document.display_name().to_string(),
            lines: view::items_to_lines(&document.render()),
            scroll: 0,
        }
    }

    fn scroll_down(&mut self, by: u16) {
        let max = self.lines.len().saturating_sub(1) as u16;
        self.scroll = self.scroll.saturating_add(by).min(max);
    }

    fn scroll_up(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_sub(by);
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let mut history = History::load().unwrap_or_default();

    let path = match args.len() {
        2 => PathBuf::from(&args[1]),
        1 => match history.most_recent() {
            Some(entry) => entry.path.clone(),
            None => {
                eprintln!("Usage: {} <markdown-file>", args[0]);
                eprintln!("(no recently opened document to fall back to)");
                process::exit(1);
            }
        },
        _ => {
            eprintln!("Usage: {} [markdown-file]", args[0]);
            process::exit(1);
        }
    };

    let document = match io::load_document(&path) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error: Failed to open '{}': {e}", path.display());
            process::exit(1);
        }
    };

    history.add(
        HistoryEntry::opened_now(document.path.clone()),
        config.history_limit,
    );
    if let Err(e) = history.save() {
        eprintln!("Warning: Failed to record history: {e}");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&document);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
                KeyCode::PageDown => app.scroll_down(10),
                KeyCode::PageUp => app.scroll_up(10),
                KeyCode::Home => app.scroll = 0,
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let content = Paragraph::new(app.lines.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.title.clone()),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(content, chunks[0]);

    let help = Paragraph::new(Line::from(
        "q: Quit | ↑/k: Up | ↓/j: Down | PgUp/PgDn: Page | Home: Top",
    ));
    f.render_widget(help, chunks[1]);
}
