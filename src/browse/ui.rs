//! Ratatui rendering for the browser
//!
//! Terminal handling follows the usual raw-mode plus alternate-screen
//! arrangement; the session itself knows nothing about the terminal, so this
//! module is the only place that touches crossterm or ratatui types.

use super::session::{BrowserSession, Mode, Row};
use byte_unit::{Byte, UnitType};
use chrono::{DateTime, Local};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, List, ListItem, Paragraph},
};
use std::io::{self, Stdout};
use std::time::SystemTime;

/// Rows of chrome around the entry list: title (3), list borders (2),
/// status (3), help (1)
const CHROME_ROWS: u16 = 9;

/// Terminal wrapper that restores the screen when dropped
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    /// Enter raw mode and the alternate screen
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    /// Leave the alternate screen and disable raw mode
    ///
    /// # Errors
    ///
    /// Returns an error if terminal state cannot be restored.
    pub fn restore() -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Draw one frame
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    pub fn draw(&mut self, session: &mut BrowserSession, rows: &[Row]) -> io::Result<()> {
        let size = self.terminal.size()?;
        session.set_visible_height(size.height.saturating_sub(CHROME_ROWS) as usize);
        self.terminal.draw(|frame| render(frame, session, rows))?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = Self::restore();
    }
}

fn render(frame: &mut Frame, session: &BrowserSession, rows: &[Row]) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title(frame, session, layout[0]);
    render_list(frame, session, rows, layout[1]);
    render_status(frame, session, rows, layout[2]);
    render_help(frame, layout[3]);

    if session.mode() == Mode::PreviewOpen {
        render_preview(frame, session, frame.area());
    }
}

fn render_title(frame: &mut Frame, session: &BrowserSession, area: Rect) {
    let line = if session.mode() == Mode::Searching {
        Line::from(vec![
            Span::styled("filter: ", Style::new().fg(Color::Yellow)),
            Span::raw(session.search_draft().to_string()),
            Span::styled("▏", Style::new().add_modifier(Modifier::SLOW_BLINK)),
        ])
    } else {
        let mut spans = vec![Span::styled(
            session.current_dir().display().to_string(),
            Style::new().add_modifier(Modifier::BOLD),
        )];
        if !session.filter_text().is_empty() {
            spans.push(Span::styled(
                format!("  [filter: {}]", session.filter_text()),
                Style::new().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    };

    let title = Paragraph::new(line).block(Block::bordered().title("loadr"));
    frame.render_widget(title, area);
}

fn render_list(frame: &mut Frame, session: &BrowserSession, rows: &[Row], area: Rect) {
    let height = area.height.saturating_sub(2) as usize;
    let start = session.scroll_offset().min(rows.len());
    let end = (start + height).min(rows.len());

    let items: Vec<ListItem> = rows[start..end]
        .iter()
        .enumerate()
        .map(|(offset, row)| {
            let index = start + offset;
            let mut item = ListItem::new(format_row(session, row));
            if index == session.cursor() {
                item = item.style(Style::new().add_modifier(Modifier::REVERSED));
            }
            item
        })
        .collect();

    let block = Block::bordered().title(format!(
        "entries ({}) sorted by {}",
        rows.len(),
        session.sort_key().label()
    ));
    frame.render_widget(List::new(items).block(block), area);
}

fn format_row<'a>(session: &BrowserSession, row: &'a Row) -> Line<'a> {
    match row {
        Row::Parent => Line::from(Span::styled("  ../", Style::new().fg(Color::Blue))),
        Row::Entry(entry) => {
            let marker = if session.is_selected(&entry.path) {
                "* "
            } else {
                "  "
            };

            let mut spans = vec![Span::raw(marker)];
            if entry.is_dir() {
                spans.push(Span::styled(
                    format!("{}/", entry.name),
                    Style::new().fg(Color::Blue),
                ));
            } else {
                spans.push(Span::raw(entry.name.as_str()));
                spans.push(Span::styled(
                    format!("  {}", humanize(entry.size)),
                    Style::new().fg(Color::DarkGray),
                ));
                spans.push(Span::styled(
                    format!("  {}", format_mtime(entry.modified)),
                    Style::new().fg(Color::DarkGray),
                ));
            }
            if let Some(target) = &entry.link_target {
                spans.push(Span::styled(
                    format!(" -> {}", target.display()),
                    Style::new().fg(Color::Magenta),
                ));
            }
            Line::from(spans)
        }
    }
}

fn render_status(frame: &mut Frame, session: &BrowserSession, rows: &[Row], area: Rect) {
    let line = if let Some(status) = session.status() {
        Line::from(Span::styled(
            status.to_string(),
            Style::new().fg(Color::Red),
        ))
    } else if let Some(Row::Entry(entry)) = rows.get(session.cursor()) {
        let matches = session.matches_for(entry);
        if matches.is_empty() {
            Line::from(Span::styled(
                selection_summary(session, "no matching table definition"),
                Style::new().fg(Color::DarkGray),
            ))
        } else {
            let tables: Vec<String> = matches
                .iter()
                .map(|d| match &d.date_column {
                    Some(col) => format!("{} ({col})", d.table),
                    None => d.table.clone(),
                })
                .collect();
            Line::from(Span::styled(
                selection_summary(session, &format!("tables: {}", tables.join(", "))),
                Style::new().fg(Color::Green),
            ))
        }
    } else {
        Line::from(Span::raw(selection_summary(session, "")))
    };

    frame.render_widget(Paragraph::new(line).block(Block::bordered()), area);
}

fn selection_summary(session: &BrowserSession, detail: &str) -> String {
    if session.selection_len() == 0 {
        detail.to_string()
    } else if detail.is_empty() {
        format!("{} selected", session.selection_len())
    } else {
        format!("{} selected | {detail}", session.selection_len())
    }
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(Span::styled(
        "↑/↓ move  Enter open/confirm  Tab select  p preview  / filter  s sort  r refresh  h hidden  q quit",
        Style::new().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}

fn render_preview(frame: &mut Frame, session: &BrowserSession, area: Rect) {
    let Some(preview) = session.preview() else {
        return;
    };

    let popup = centered(area, 80, 70);
    let mut lines: Vec<Line> = preview
        .header
        .iter()
        .map(|l| Line::from(Span::styled(l.clone(), Style::new().add_modifier(Modifier::BOLD))))
        .collect();
    lines.push(Line::raw(""));
    lines.extend(preview.lines.iter().map(|l| Line::raw(l.clone())));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title("preview (any key to close)")),
        popup,
    );
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

fn humanize(size: u64) -> String {
    Byte::from_u64(size)
        .get_appropriate_unit(UnitType::Binary)
        .to_string()
}

fn format_mtime(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%Y-%m-%d %H:%M").to_string()
}
