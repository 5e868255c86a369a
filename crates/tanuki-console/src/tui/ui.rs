/*
[INPUT]:  AppState snapshot for the current frame
[OUTPUT]: Tab bar, console panels, logs panel, and footer rendering
[POS]:    TUI UI rendering
[UPDATE]: When changing panel layout or styling
*/

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};

use super::LogBufferHandle;
use super::app::{AppState, InputMode, Tab};

fn border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn header_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub(super) fn draw(frame: &mut ratatui::Frame, app: &AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    draw_tabs(frame, layout[0], app.tab);
    match app.tab {
        Tab::Console => draw_console(frame, layout[1], app),
        Tab::Logs => draw_logs(frame, layout[1], &app.log_buffer),
    }
    draw_footer(frame, layout[2], app);
}

fn draw_tabs(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, current_tab: Tab) {
    let titles = vec![Line::from("Console"), Line::from("Logs")];
    let selected = match current_tab {
        Tab::Console => 0,
        Tab::Logs => 1,
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Tanuki Console"),
        )
        .highlight_style(header_style())
        .select(selected);

    frame.render_widget(tabs, area);
}

fn draw_console(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &AppState) {
    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let editing = app.mode == InputMode::Insert;
    let input_border = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        border_style()
    };
    let mut input_line = vec![Span::raw(app.input.as_str())];
    if editing {
        input_line.push(Span::styled("▌", Style::default().fg(Color::Yellow)));
    }
    let input = Paragraph::new(Line::from(input_line)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(input_border)
            .title("Task"),
    );
    frame.render_widget(input, panels[0]);

    let output_title = if app.is_busy() { "Output (running)" } else { "Output" };
    let output = Paragraph::new(app.output.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(output_title),
        );
    frame.render_widget(output, panels[1]);
}

fn draw_logs(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, buffer: &LogBufferHandle) {
    let lines = {
        let guard = buffer.lock().expect("log buffer lock");
        guard.snapshot()
    };
    let available = area.height.saturating_sub(2) as usize;
    let start = lines.len().saturating_sub(available);
    let view = &lines[start..];

    let text = view
        .iter()
        .map(|line| Line::from(Span::raw(line.clone())))
        .collect::<Vec<_>>();
    let log_widget = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Logs"),
    );
    frame.render_widget(log_widget, area);
}

fn draw_footer(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &AppState) {
    let hotkeys = match app.mode {
        InputMode::Insert => "[Esc] Stop Editing  [Enter] Run",
        InputMode::Normal => "[i] Edit  [Enter] Run  [Tab] Switch Tab  [c] Clear  [q] Quit",
    };
    let status = match app.pending_secs() {
        Some(secs) => format!("running ({secs}s)"),
        None => app.status_message.clone(),
    };

    let footer = Paragraph::new(format!("{hotkeys}  |  Status: {status}")).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Hotkeys"),
    );
    frame.render_widget(footer, area);
}
