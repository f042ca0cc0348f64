use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use stotra_reader_config::{FONT_SCALE_MAX, FONT_SCALE_MIN, Preferences};
use stotra_reader_engine::{
    PlaybackRate, REFERENCE_LANGUAGE, RenderPlan, RenderRole, RenderStrategy, StringCatalog,
    StringTable, Transport, UiLabel, io, render_document,
};
use std::{
    env,
    io::stdout,
    path::PathBuf,
    process,
    time::{Duration, Instant},
};

/// Nominal length of the bundled recitation; the real audio backend would
/// report this from the decoded stream.
const RECITATION_LENGTH: Duration = Duration::from_secs(28 * 60);

const TICK_INTERVAL: Duration = Duration::from_millis(250);
const SEEK_STEP_SECS: i64 = 10;
const FONT_SCALE_STEP: f32 = 0.1;

struct App {
    library_root: PathBuf,
    entries: Vec<io::LibraryEntry>,
    language_state: ListState,
    content: Vec<Line<'static>>,
    scroll: u16,
    preferences: Preferences,
    transport: Transport,
    strings: StringCatalog,
}

impl App {
    fn new(library_root: PathBuf, preferences: Preferences) -> Result<Self> {
        let entries = io::scan_library(&library_root)?;
        if entries.is_empty() {
            anyhow::bail!(
                "no editions found in '{}' (expected <language-id>.txt files)",
                library_root.display()
            );
        }

        let selected = entries
            .iter()
            .position(|e| e.language.id == preferences.language)
            .unwrap_or(0);

        let mut transport = Transport::new(RECITATION_LENGTH);
        transport.set_rate(
            PlaybackRate::from_factor(preferences.playback_rate).unwrap_or_default(),
        );

        let mut app = Self {
            library_root,
            entries,
            language_state: ListState::default(),
            content: Vec::new(),
            scroll: 0,
            preferences,
            transport,
            strings: ui_strings(),
        };
        app.language_state.select(Some(selected));
        app.reload_content();
        Ok(app)
    }

    fn selected_entry(&self) -> Option<&io::LibraryEntry> {
        self.language_state
            .selected()
            .and_then(|i| self.entries.get(i))
    }

    fn selected_language_id(&self) -> &str {
        self.selected_entry()
            .map(|e| e.language.id.as_str())
            .unwrap_or(REFERENCE_LANGUAGE)
    }

    fn next_language(&mut self) {
        let i = match self.language_state.selected() {
            Some(i) => (i + 1) % self.entries.len(),
            None => 0,
        };
        self.language_state.select(Some(i));
        self.on_language_changed();
    }

    fn previous_language(&mut self) {
        let i = match self.language_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.entries.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.language_state.select(Some(i));
        self.on_language_changed();
    }

    fn on_language_changed(&mut self) {
        self.scroll = 0;
        self.reload_content();
        self.preferences.language = self.selected_language_id().to_string();
        self.persist_preferences();
    }

    fn reload_content(&mut self) {
        let Some((relative_path, language_id)) = self
            .selected_entry()
            .map(|e| (e.relative_path.clone(), e.language.id.clone()))
        else {
            self.content = Vec::new();
            return;
        };

        match io::read_document(&relative_path, &self.library_root) {
            Ok(document) => {
                let strategy = RenderStrategy::for_language(&language_id);
                let plan = render_document(&document, &strategy);
                self.content = plan_to_lines(&plan);
            }
            Err(e) => {
                self.content = vec![Line::from(format!("Error reading edition: {e}"))];
            }
        }
    }

    fn scroll_down(&mut self, amount: u16) {
        let max = self.content.len().saturating_sub(1) as u16;
        self.scroll = (self.scroll + amount).min(max);
    }

    fn scroll_up(&mut self, amount: u16) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    fn adjust_font_scale(&mut self, delta: f32) {
        let scale = (self.preferences.font_scale + delta).clamp(FONT_SCALE_MIN, FONT_SCALE_MAX);
        // One decimal of precision is plenty and keeps the stored value tidy.
        self.preferences.font_scale = (scale * 10.0).round() / 10.0;
        self.persist_preferences();
    }

    fn cycle_rate(&mut self) {
        self.transport.cycle_rate();
        self.preferences.playback_rate = self.transport.rate().factor();
        self.persist_preferences();
    }

    fn persist_preferences(&self) {
        if let Err(e) = self.preferences.save() {
            log::warn!("failed to save preferences: {e}");
        }
    }
}

/// Map a render plan onto styled terminal lines. Margins become blank lines,
/// with adjacent gaps collapsed; spacers always keep their own line.
fn plan_to_lines(plan: &RenderPlan) -> Vec<Line<'static>> {
    fn push_gap(lines: &mut Vec<Line<'static>>) {
        if lines.last().is_some_and(|l| !l.spans.is_empty()) {
            lines.push(Line::default());
        }
    }

    let mut lines: Vec<Line<'static>> = Vec::with_capacity(plan.len());

    for render_line in &plan.lines {
        match &render_line.role {
            RenderRole::Spacer => lines.push(Line::default()),
            RenderRole::Heading => {
                push_gap(&mut lines);
                let style = if render_line.emphasis {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                lines.push(Line::from(Span::styled(render_line.text.clone(), style)));
                push_gap(&mut lines);
            }
            RenderRole::Content { .. } => {
                if render_line.spacing.margin_top {
                    push_gap(&mut lines);
                }
                lines.push(Line::from(render_line.text.clone()));
                if render_line.spacing.margin_bottom {
                    lines.push(Line::default());
                }
            }
        }
    }

    lines
}

/// UI label tables. Only the reference table is populated; every other
/// language resolves through the fallback chain.
fn ui_strings() -> StringCatalog {
    let mut catalog = StringCatalog::new(REFERENCE_LANGUAGE);
    catalog.insert(
        REFERENCE_LANGUAGE,
        StringTable::from_pairs([
            (UiLabel::Title, "Vishnu Sahasranamam".to_string()),
            (UiLabel::Subtitle, "The Thousand Names of Vishnu".to_string()),
            (UiLabel::Languages, "Languages".to_string()),
            (UiLabel::Play, "Play".to_string()),
            (UiLabel::Pause, "Pause".to_string()),
            (UiLabel::PlaybackRate, "Speed".to_string()),
            (UiLabel::FontSize, "Text size".to_string()),
            (UiLabel::NowPlaying, "Recitation".to_string()),
        ]),
    );
    catalog
}

fn format_time(d: Duration) -> String {
    let total = d.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <library-folder-path>", args[0]);
        eprintln!("The library folder holds one <language-id>.txt file per edition.");
        process::exit(1);
    }
    let library_root = PathBuf::from(&args[1]);

    let preferences = Preferences::load_or_default();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let app = App::new(library_root, preferences);

    let res = match app {
        Ok(mut app) => run_app(&mut terminal, &mut app),
        Err(e) => Err(e),
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
        process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(TICK_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_language(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_language(),
                KeyCode::PageDown => app.scroll_down(10),
                KeyCode::PageUp => app.scroll_up(10),
                KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_font_scale(FONT_SCALE_STEP),
                KeyCode::Char('-') => app.adjust_font_scale(-FONT_SCALE_STEP),
                KeyCode::Char(' ') => app.transport.toggle(),
                KeyCode::Char('[') => app.transport.seek_by(-SEEK_STEP_SECS),
                KeyCode::Char(']') => app.transport.seek_by(SEEK_STEP_SECS),
                KeyCode::Char('r') => app.cycle_rate(),
                _ => {}
            }
        }

        app.transport.advance(last_tick.elapsed());
        last_tick = Instant::now();
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    let language_id = app.selected_language_id().to_string();

    // Language panel
    let language_items: Vec<ListItem> = app
        .entries
        .iter()
        .map(|entry| ListItem::new(vec![Line::from(entry.language.display_name.clone())]))
        .collect();

    let languages = List::new(language_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.strings.label(&language_id, UiLabel::Languages).to_string()),
        )
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(languages, panels[0], &mut app.language_state);

    // Content panel
    let content_text = if app.content.is_empty() {
        vec![Line::from("Select a language to view the text")]
    } else {
        app.content.clone()
    };

    let title = app.strings.label(&language_id, UiLabel::Title).to_string();
    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((app.scroll, 0))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(content, panels[1]);

    // Transport bar
    let play_label = if app.transport.is_playing() {
        app.strings.label(&language_id, UiLabel::Pause)
    } else {
        app.strings.label(&language_id, UiLabel::Play)
    };
    let transport_line = Line::from(vec![
        Span::styled(
            if app.transport.is_playing() { "▶ " } else { "⏸ " },
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(format!(
            "{} / {}",
            format_time(app.transport.position()),
            format_time(app.transport.duration()),
        )),
        Span::raw(format!(
            "  ·  {} {}",
            app.strings.label(&language_id, UiLabel::PlaybackRate),
            app.transport.rate().label(),
        )),
        Span::raw(format!(
            "  ·  {} ×{:.1}",
            app.strings.label(&language_id, UiLabel::FontSize),
            app.preferences.font_scale,
        )),
        Span::raw(format!("  ·  space: {play_label}")),
    ]);

    let transport = Paragraph::new(vec![transport_line]).block(
        Block::default().borders(Borders::ALL).title(
            app.strings
                .label(&language_id, UiLabel::NowPlaying)
                .to_string(),
        ),
    );
    f.render_widget(transport, rows[1]);

    // Instructions
    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Language | "),
        Span::raw("PgUp/PgDn: Scroll | "),
        Span::raw("+/-: Text size | "),
        Span::raw("space: Play/Pause | "),
        Span::raw("[/]: Seek | "),
        Span::raw("r: Speed"),
    ]);
    f.render_widget(Paragraph::new(vec![help]), rows[2]);
}
