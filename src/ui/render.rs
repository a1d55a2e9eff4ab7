use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame, Terminal,
};
use std::{io, time::Duration};

use crate::app::{AppState, InputMode};

pub fn run_app(mut app_state: AppState) -> Result<()> {
    let mut terminal = setup_terminal()?;

    while !app_state.should_quit {
        terminal.draw(|f| ui(f, &mut app_state))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    crate::ui::handle_key_event(&mut app_state, key);
                }
            }
        }
    }

    restore_terminal(&mut terminal)?;

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn char_width(c: char) -> usize {
    if c.is_ascii() { 1 } else { 2 }
}

/// Centers `content` in `width` columns, truncating with an ellipsis when it
/// does not fit. Non-ASCII characters count as two columns.
pub fn fit_to_width(content: &str, width: usize) -> String {
    let display_width: usize = content.chars().map(char_width).sum();

    if display_width > width {
        let mut result = String::with_capacity(width);
        let mut used = 0;
        for c in content.chars() {
            if used + char_width(c) >= width {
                break;
            }
            result.push(c);
            used += char_width(c);
        }
        result.push('…');
        return result;
    }

    let padding = width - display_width;
    let left = padding / 2;
    format!("{}{}{}", " ".repeat(left), content, " ".repeat(padding - left))
}

/// Fits as many columns from `start_col` as the width allows, at least one.
fn update_visible_area(app_state: &mut AppState, area: Rect) {
    app_state.visible_rows = (area.height as usize).saturating_sub(2).max(1);

    let available_width = (area.width as usize).saturating_sub(2);
    let mut visible_cols = 0;
    let mut width_used = 0;

    for col in app_state.start_col..app_state.styled.cols() {
        let col_width = app_state.get_column_width(col) + 1;
        if visible_cols > 0 && width_used + col_width > available_width {
            break;
        }
        width_used += col_width;
        visible_cols += 1;
    }

    app_state.visible_cols = visible_cols.max(1);
}

fn ui(f: &mut Frame, app_state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(app_state.info_panel_height as u16),
            Constraint::Length(1),
        ])
        .split(f.size());

    draw_title(f, app_state, chunks[0]);

    update_visible_area(app_state, chunks[1]);
    draw_table(f, app_state, chunks[1]);

    draw_info_panel(f, app_state, chunks[2]);
    draw_status_bar(f, app_state, chunks[3]);

    if let InputMode::Help = app_state.input_mode {
        draw_help_popup(f, f.size());
    }
}

fn draw_title(f: &mut Frame, app_state: &AppState, area: Rect) {
    let extent = app_state.table.header_extent();
    let title = format!(
        " {}  |  header rows {}  header columns {}{}",
        app_state.file_path.display(),
        extent.top_rows,
        extent.left_cols,
        if app_state.table.is_pure() { "  |  PureTable" } else { "" }
    );
    let paragraph = Paragraph::new(title).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(paragraph, area);
}

fn draw_table(f: &mut Frame, app_state: &AppState, area: Rect) {
    let end_row = (app_state.start_row + app_state.visible_rows).min(app_state.styled.rows());
    let end_col = (app_state.start_col + app_state.visible_cols).min(app_state.styled.cols());

    let constraints: Vec<Constraint> = (app_state.start_col..end_col)
        .map(|col| Constraint::Length(app_state.get_column_width(col) as u16))
        .collect();

    let header_style = Style::default().add_modifier(Modifier::BOLD).fg(Color::LightCyan);

    let rows = (app_state.start_row..end_row).map(|row| {
        let cells = (app_state.start_col..end_col).map(|col| {
            let styled = &app_state.styled.cells[row][col];
            let content = fit_to_width(&styled.text, app_state.get_column_width(col));

            let style = if app_state.highlighted == Some((row, col)) {
                Style::default().bg(Color::Yellow).fg(Color::Black)
            } else if styled.bold {
                header_style
            } else {
                Style::default()
            };

            Cell::from(content).style(style)
        });

        Row::new(cells)
    });

    let table = Table::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::LightCyan)),
        )
        .widths(&constraints)
        .column_spacing(1);

    f.render_widget(table, area);
}

fn draw_info_panel(f: &mut Frame, app_state: &AppState, area: Rect) {
    let lines: Vec<Line> = app_state
        .notification_messages
        .iter()
        .rev()
        .take(area.height.saturating_sub(2) as usize)
        .map(|message| Line::from(message.as_str()))
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Messages "))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn draw_status_bar(f: &mut Frame, app_state: &AppState, area: Rect) {
    let line = match app_state.input_mode {
        InputMode::Command => Line::from(vec![
            Span::styled(":", Style::default().fg(Color::Yellow)),
            Span::raw(app_state.input_buffer.as_str()),
        ]),
        _ => Line::from(Span::styled(
            " :lookup  hjkl scroll  g/G top/bottom  ? help  q quit",
            Style::default().fg(Color::Gray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let width = area.width.min(64);
    let height = area.height.min(14);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let text = vec![
        Line::from("h j k l / arrows   scroll"),
        Line::from("PageUp / PageDown  scroll a screen"),
        Line::from("g / G              top / bottom"),
        Line::from(":                  look up a cell"),
        Line::from(""),
        Line::from("  :R1 ; Q2         row header R1, column header Q2"),
        Line::from("  :North,Retail ; 2024,H1   every value must match"),
        Line::from("  :1 ; A           positional labels (PureTable)"),
        Line::from(""),
        Line::from("Esc clears the highlight, q quits"),
    ];

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(" Help ")),
        popup,
    );
}
