use ratatui::{prelude::*, widgets::*};

use crate::app::state::Mode;
use crate::constants::{APP_TITLE, APP_VERSION, NO_MATCHES, SEARCH_LABEL};
use crate::messages::RenderState;

/// Draw a full frame from render state
pub fn draw(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Hint bar
        ])
        .split(area);

    draw_title_bar(f, chunks[0]);

    match (state.mode, &state.detail) {
        (Mode::Detail, Some(_)) => draw_detail(f, state, chunks[1]),
        _ => draw_listing(f, state, chunks[1]),
    }

    draw_hint_bar(f, state, chunks[2]);
}

fn draw_title_bar(f: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {APP_TITLE} "),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::styled(format!(" v{APP_VERSION}"), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_listing(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let search = Paragraph::new(Line::from(vec![
        Span::styled(SEARCH_LABEL, Style::default().fg(Color::DarkGray)),
        Span::styled(state.filter_text.as_str(), Style::default().fg(Color::Yellow)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Filter "),
    );
    f.render_widget(search, chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Endpoints ({}) ", state.rows.len()));

    if state.rows.is_empty() {
        let empty = Paragraph::new(NO_MATCHES)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = state
        .rows
        .iter()
        .enumerate()
        .map(|(i, ep)| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", state.marker(i))),
                Span::styled(
                    format!("{:<6}", ep.method),
                    Style::default().fg(method_color(&ep.method)).bold(),
                ),
                Span::raw(" "),
                Span::raw(ep.path.as_str()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));

    // ListState keeps the cursor row scrolled into view
    let mut list_state = ListState::default().with_selected(Some(state.cursor));
    f.render_stateful_widget(list, chunks[1], &mut list_state);
}

fn draw_detail(f: &mut Frame, state: &RenderState, area: Rect) {
    let Some(ep) = &state.detail else {
        return;
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Method: ", Style::default().fg(Color::DarkGray)),
            Span::styled(ep.method.as_str(), Style::default().fg(method_color(&ep.method)).bold()),
        ]),
        Line::from(vec![
            Span::styled("Path: ", Style::default().fg(Color::DarkGray)),
            Span::raw(ep.path.as_str()),
        ]),
    ];

    let detail = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Endpoint "),
    );
    f.render_widget(detail, area);
}

fn draw_hint_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hint = Paragraph::new(state.hint()).style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, area);
}

/// Method color
pub fn method_color(method: &str) -> Color {
    match method {
        "GET" => Color::Green,
        "POST" => Color::Yellow,
        "PUT" => Color::Blue,
        "PATCH" => Color::Cyan,
        "DELETE" => Color::Red,
        _ => Color::White,
    }
}
