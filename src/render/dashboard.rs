//! Dashboard rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::core::{DashboardForm, DispatchAction, Field, SearchMode};

/// Width of the label column
const LABEL_WIDTH: usize = 16;

/// Render the configuration form
pub fn render_dashboard(frame: &mut Frame, form: &DashboardForm) {
    let fields = form.visible_fields();
    // rows + blank + hint + borders
    let height = fields.len() as u16 + 4;
    let area = centered_rect(80, height, frame.area());

    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = fields.iter().map(|f| field_line(form, *f)).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " \u{2191}\u{2193} move  \u{2190}\u{2192}/Space change  Enter start  Esc quit",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(" yoink ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Paragraph::new(lines).block(block), area);

    if form.focus == Field::Query {
        let row = fields.iter().position(|f| *f == Field::Query).unwrap_or(0) as u16;
        let col = (2 + LABEL_WIDTH + form.config.query.chars().count()) as u16;
        frame.set_cursor_position((area.x + 1 + col, area.y + 1 + row));
    }
}

fn field_line(form: &DashboardForm, field: Field) -> Line<'static> {
    let focused = form.focus == field;
    let marker = if focused { "> " } else { "  " };
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    if field == Field::Start {
        return Line::from(Span::styled(
            format!("{}[ {} ]", marker, field.label()),
            label_style.add_modifier(Modifier::REVERSED),
        ));
    }

    let mut spans = vec![Span::styled(
        format!("{}{:<width$}", marker, field.label(), width = LABEL_WIDTH),
        label_style,
    )];
    spans.extend(value_spans(form, field));
    Line::from(spans)
}

fn value_spans(form: &DashboardForm, field: Field) -> Vec<Span<'static>> {
    let config = &form.config;
    match field {
        Field::Mode => vec![
            choice("files", config.mode == SearchMode::FilenameSearch),
            Span::raw(" "),
            choice("content", config.mode == SearchMode::ContentSearch),
        ],
        Field::Query => vec![Span::styled(
            config.query.clone(),
            Style::default().fg(Color::Green),
        )],
        Field::Case => vec![switch(config.case_sensitive)],
        Field::Hidden => vec![switch(config.include_hidden)],
        Field::Action => DispatchAction::ALL
            .iter()
            .flat_map(|a| [choice(a.name(), *a == config.default_action), Span::raw(" ")])
            .collect(),
        Field::Start => Vec::new(),
    }
}

fn choice(name: &str, selected: bool) -> Span<'static> {
    if selected {
        Span::styled(
            format!("({})", name),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!(" {} ", name), Style::default().fg(Color::DarkGray))
    }
}

fn switch(on: bool) -> Span<'static> {
    if on {
        Span::styled("[ON] ", Style::default().fg(Color::Green))
    } else {
        Span::styled("[OFF]", Style::default().fg(Color::DarkGray))
    }
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
