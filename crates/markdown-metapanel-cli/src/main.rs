use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use markdown_metapanel_config::Config;
use markdown_metapanel_engine::{
    EntryValue, Limits, MarkdownFile, ParseReport, ParsedMetadata, io, render_cycle,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Browse(Option<PathBuf>),
    Html(PathBuf),
    Report(PathBuf),
}

fn parse_args(args: &[String]) -> Option<Command> {
    match args {
        [_] => Some(Command::Browse(None)),
        [_, flag, file] if flag == "--html" => Some(Command::Html(PathBuf::from(file))),
        [_, flag, file] if flag == "--report" => Some(Command::Report(PathBuf::from(file))),
        [_, path] if !path.starts_with("--") => Some(Command::Browse(Some(PathBuf::from(path)))),
        _ => None,
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [notes-folder-path]");
    eprintln!("       {program} --html <file>");
    eprintln!("       {program} --report <file>");
}

/// Removes control characters other than tab so document text can't drive the terminal.
fn strip_control(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\t')
        .collect()
}

fn limits_from_config(config: Option<&Config>) -> Limits {
    match config {
        Some(config) => {
            let fm = &config.front_matter;
            Limits::with_overrides(
                fm.max_keys,
                fm.max_array_items,
                fm.max_value_length,
                fm.max_key_length,
            )
        }
        None => Limits::default(),
    }
}

/// Plain-text panel lines for terminal display.
fn metadata_lines(metadata: &ParsedMetadata) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in metadata {
        let key = strip_control(&entry.key);
        match &entry.value {
            EntryValue::Scalar(value) => {
                lines.push(format!("{key}: {}", strip_control(value)));
            }
            EntryValue::List(items) => {
                lines.push(format!("{key}:"));
                lines.extend(items.iter().map(|item| format!("  - {}", strip_control(item))));
            }
        }
    }
    lines
}

fn report_lines(metadata: Option<&ParsedMetadata>, report: &ParseReport) -> Vec<String> {
    let mut lines = Vec::new();
    match metadata {
        Some(metadata) => {
            lines.push(format!("entries: {}", metadata.len()));
            lines.extend(metadata_lines(metadata).into_iter().map(|l| format!("  {l}")));
        }
        None => lines.push("entries: none".to_string()),
    }
    lines.push(format!("dropped: {}", report.total_dropped()));
    lines.extend(
        report
            .iter()
            .map(|(reason, count)| format!("  {reason}: {count}")),
    );
    lines.push(format!("truncated values: {}", report.truncated_values()));
    lines
}

fn run_html(path: &Path, limits: &Limits) -> Result<()> {
    let document = io::read_document(path)?;
    let rendered = render_cycle(&document, limits);
    println!("{}", rendered.to_html());
    Ok(())
}

fn run_report(path: &Path, limits: &Limits) -> Result<()> {
    let document = io::read_document(path)?;
    let rendered = render_cycle(&document, limits);
    for line in report_lines(rendered.metadata.as_ref(), &rendered.report) {
        println!("{line}");
    }
    Ok(())
}

struct App {
    notes_path: PathBuf,
    limits: Limits,
    files: Vec<MarkdownFile>,
    file_list_state: ListState,
    metadata: Vec<String>,
    body: Vec<String>,
}

impl App {
    fn new(notes_path: PathBuf, limits: Limits) -> Result<Self> {
        let files = io::list_markdown_files(&notes_path)?;

        let mut app = Self {
            notes_path,
            limits,
            files,
            file_list_state: ListState::default(),
            metadata: Vec::new(),
            body: Vec::new(),
        };

        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        let Some(file) = self
            .file_list_state
            .selected()
            .and_then(|index| self.files.get(index))
        else {
            return;
        };

        match io::read_file(file.relative_path(), &self.notes_path) {
            Ok(content) => {
                let rendered = render_cycle(&content, &self.limits);
                if rendered.report.total_dropped() > 0 {
                    log::info!(
                        "{}: {} front matter lines dropped",
                        file.display_name(),
                        rendered.report.total_dropped()
                    );
                }
                self.metadata = rendered
                    .metadata
                    .as_ref()
                    .map(metadata_lines)
                    .unwrap_or_default();
                self.body = rendered.body.lines().map(strip_control).collect();
            }
            Err(e) => {
                self.metadata = Vec::new();
                self.body = vec![format!("Error reading file: {e}")];
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(command) = parse_args(&args) else {
        print_usage(&args[0]);
        process::exit(1);
    };

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let limits = limits_from_config(config.as_ref());

    let (notes_path, from_config) = match command {
        Command::Html(path) => return run_html(&path, &limits),
        Command::Report(path) => return run_report(&path, &limits),
        Command::Browse(Some(path)) => (path, false),
        Command::Browse(None) => match config.and_then(|c| c.notes_path) {
            Some(path) => (path, true),
            None => {
                eprintln!("Error: No notes path provided and none configured");
                print_usage(&args[0]);
                eprintln!("Or set notes_path in {}", config_path.display());
                process::exit(1);
            }
        },
    };

    if let Err(e) = io::validate_notes_dir(&notes_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Notes path '{}'{} is invalid: {e}",
            notes_path.display(),
            source
        );
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = App::new(notes_path, limits).and_then(|mut app| run_app(&mut terminal, &mut app));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| ListItem::new(Line::from(strip_control(file.display_name()))))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Files"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, columns[0], &mut app.file_list_state);

    // Panel height tracks its content, capped so the body keeps some room
    let panel_height = if app.metadata.is_empty() {
        0
    } else {
        (app.metadata.len() as u16 + 2).min(columns[1].height / 2)
    };
    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(panel_height), Constraint::Min(0)])
        .split(columns[1]);

    if panel_height > 0 {
        let panel_text: Vec<Line> = app
            .metadata
            .iter()
            .map(|line| {
                Line::from(Span::styled(
                    line.as_str(),
                    Style::default().fg(Color::Cyan),
                ))
            })
            .collect();
        let panel = Paragraph::new(panel_text)
            .block(Block::default().borders(Borders::ALL).title("Front matter"))
            .wrap(Wrap { trim: false });
        f.render_widget(panel, content[0]);
    }

    let body_text: Vec<Line> = if app.files.is_empty() {
        vec![Line::from("No markdown files found")]
    } else {
        app.body.iter().map(|line| Line::from(line.as_str())).collect()
    };
    let body = Paragraph::new(body_text)
        .block(Block::default().borders(Borders::ALL).title("Body"))
        .wrap(Wrap { trim: false });
    f.render_widget(body, content[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": Quit | ↑/k: Previous | ↓/j: Next"),
    ]));
    f.render_widget(help, rows[1]);
}
