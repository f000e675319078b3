use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use textwrap;

use super::app::App;
use crate::internal::models::{FetchState, Story};
use crate::internal::notification::Notification;
use crate::internal::timeline::{self, DisplayEntry};
use crate::utils::datetime::format_date_label;
use crate::utils::theme::{ThemeMode, TuiTheme};

pub const NO_SELECTION_TEXT: &str = "Select a story to see its timeline";
pub const NO_EVENTS_TEXT: &str = "No events in this story yet";
pub const LOADING_TEXT: &str = "Loading stories…";

/// Viewport classification driving where the detail pane goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Narrow,
    Wide,
}

/// Pure function of the terminal width: wide terminals show the detail pane
/// beside the list, narrow ones append it below.
pub fn layout_mode(width: u16, breakpoint_cols: u16) -> LayoutMode {
    match width >= breakpoint_cols {
        true => LayoutMode::Wide,
        false => LayoutMode::Narrow,
    }
}

pub fn draw(app: &mut App, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_top_bar(app, f, chunks[0]);
    render_body(app, f, chunks[1]);
    render_status_bar(app, f, chunks[2]);

    if let Some(notification) = app.notification.clone() {
        render_notification(&notification, &app.theme, f);
    }
}

fn render_top_bar(app: &App, f: &mut Frame, area: Rect) {
    let bar_style = Style::default()
        .bg(app.theme.selection_bg)
        .fg(app.theme.selection_fg);

    let left = Paragraph::new(Line::from(vec![
        Span::styled(
            " inbrief ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("v{}", app.app_version)),
    ]))
    .style(bar_style);
    f.render_widget(left, area);

    let mode = ThemeMode::from_dark(app.preference.is_dark());
    let count_text = match &app.fetch {
        FetchState::Loading => "loading".to_string(),
        FetchState::Error(_) => "error".to_string(),
        FetchState::Ready(stories) => format!("{} stories", stories.len()),
    };
    let right = Paragraph::new(Line::from(Span::raw(format!("{mode} · {count_text} "))))
        .alignment(Alignment::Right);
    f.render_widget(right, area);
}

fn render_body(app: &mut App, f: &mut Frame, area: Rect) {
    let theme = app.theme.clone();

    // The fetch state and derived selection are re-computed on every draw;
    // nothing rendered here outlives the frame.
    let fetch = app.fetch.clone();
    let selected = app.selection.current(&fetch).cloned();
    let open_id = app.selection.selected_id();

    match fetch {
        FetchState::Loading => render_loading(f, area, &theme),
        FetchState::Error(message) => render_error(f, area, &message, &theme),
        FetchState::Ready(stories) => {
            match layout_mode(area.width, app.config.breakpoint_cols) {
                LayoutMode::Wide => {
                    let panes = Layout::default()
                        .direction(Direction::Horizontal)
                        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                        .split(area);

                    render_list(
                        f,
                        panes[0],
                        &stories,
                        open_id,
                        &theme,
                        &mut app.story_list_state,
                    );
                    match &selected {
                        Some(story) => render_detail(f, panes[1], story, &theme),
                        None => render_placeholder(f, panes[1], &theme),
                    }
                }
                // Narrow terminals only get the detail pane once a story is
                // open; there is no placeholder in this layout.
                LayoutMode::Narrow => match &selected {
                    Some(story) => {
                        let panes = Layout::default()
                            .direction(Direction::Vertical)
                            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                            .split(area);

                        render_list(
                            f,
                            panes[0],
                            &stories,
                            open_id,
                            &theme,
                            &mut app.story_list_state,
                        );
                        render_detail(f, panes[1], story, &theme);
                    }
                    None => render_list(
                        f,
                        area,
                        &stories,
                        open_id,
                        &theme,
                        &mut app.story_list_state,
                    ),
                },
            }
        }
    }
}

fn render_list(
    f: &mut Frame,
    area: Rect,
    stories: &[Story],
    open_id: Option<u32>,
    theme: &TuiTheme,
    state: &mut ListState,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Stories")
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.background).fg(theme.foreground))
        .padding(Padding::horizontal(1));

    if stories.is_empty() {
        let empty = Paragraph::new("No stories to show")
            .style(Style::default().fg(theme.muted))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = stories
        .iter()
        .map(|story| {
            let marker = match open_id == Some(story.id) {
                true => "▸ ",
                false => "  ",
            };

            let mut lines = vec![Line::from(vec![
                Span::raw(marker.to_string()),
                Span::styled(
                    story.title.clone(),
                    Style::default()
                        .fg(theme.foreground)
                        .add_modifier(Modifier::BOLD),
                ),
            ])];

            let mut meta = Vec::new();
            if let Some(date) = story.date {
                meta.push(format_date_label(date));
            }
            if let Some(tags) = &story.tags
                && !tags.is_empty()
            {
                meta.push(tags.join(", "));
            }
            if !meta.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", meta.join(" · ")),
                    Style::default().fg(theme.muted),
                )));
            }

            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(theme.selection_bg)
            .fg(theme.selection_fg),
    );

    f.render_stateful_widget(list, area, state);
}

fn render_detail(f: &mut Frame, area: Rect, story: &Story, theme: &TuiTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Timeline")
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.background))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let wrap_width = inner.width.max(16) as usize;

    let mut lines = vec![Line::from(Span::styled(
        story.title.clone(),
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD),
    ))];
    lines.push(Line::default());

    for chunk in textwrap::wrap(&story.summary, wrap_width) {
        lines.push(Line::from(Span::styled(
            chunk.into_owned(),
            Style::default().fg(theme.muted),
        )));
    }
    lines.push(Line::default());

    // Grouped fresh for this story on every draw.
    let entries = timeline::group(&story.timeline);
    match entries.is_empty() {
        true => lines.push(Line::from(Span::styled(
            NO_EVENTS_TEXT,
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        ))),
        false => lines.extend(timeline_lines(&entries, theme)),
    }

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(theme.foreground))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, inner);
}

/// Turn grouped display entries into styled terminal lines. The trailing
/// connector is omitted after the row marked last, mirroring how the
/// timeline visually ends.
pub fn timeline_lines(entries: &[DisplayEntry], theme: &TuiTheme) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(entries.len() * 2);

    for entry in entries {
        match entry {
            DisplayEntry::DateHeader { label } => {
                lines.push(Line::from(Span::styled(
                    label.clone(),
                    Style::default()
                        .fg(theme.date_header)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            DisplayEntry::EventRow {
                time,
                text,
                is_last_in_story,
            } => {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("● {time}  "),
                        Style::default().fg(theme.event_time),
                    ),
                    Span::styled(text.clone(), Style::default().fg(theme.foreground)),
                ]));
                if !*is_last_in_story {
                    lines.push(Line::from(Span::styled(
                        "│",
                        Style::default().fg(theme.border),
                    )));
                }
            }
        }
    }

    lines
}

fn render_placeholder(f: &mut Frame, area: Rect, theme: &TuiTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.background));

    let placeholder = Paragraph::new(NO_SELECTION_TEXT)
        .style(Style::default().fg(theme.muted))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(placeholder, area);
}

fn render_loading(f: &mut Frame, area: Rect, theme: &TuiTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.background));

    let loading = Paragraph::new(LOADING_TEXT)
        .style(Style::default().fg(theme.muted))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(loading, area);
}

fn render_error(f: &mut Frame, area: Rect, message: &str, theme: &TuiTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Error")
        .border_style(Style::default().fg(theme.error))
        .style(Style::default().bg(theme.background))
        .padding(Padding::horizontal(1));

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(theme.error),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Press r to reload",
            Style::default().fg(theme.muted),
        )),
    ];

    let error = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(error, area);
}

fn render_status_bar(app: &App, f: &mut Frame, area: Rect) {
    let hints = " q quit · j/k move · enter open · esc close · r refresh · t theme";
    let bar = Paragraph::new(hints).style(
        Style::default()
            .bg(app.theme.background)
            .fg(app.theme.muted),
    );
    f.render_widget(bar, area);
}

fn render_notification(notification: &Notification, theme: &TuiTheme, f: &mut Frame) {
    let area = f.area();
    if area.height < 6 || area.width < 12 {
        return;
    }

    let width = (notification.message.chars().count() as u16 + 4).min(area.width - 2);
    let popup = Rect::new(1, area.height - 5, width, 3);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let paragraph = Paragraph::new(notification.message.clone())
        .style(
            Style::default()
                .bg(theme.selection_bg)
                .fg(theme.selection_fg),
        )
        .alignment(Alignment::Center)
        .block(block);

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_switches_at_the_breakpoint() {
        assert_eq!(layout_mode(99, 100), LayoutMode::Narrow);
        assert_eq!(layout_mode(100, 100), LayoutMode::Wide);
        assert_eq!(layout_mode(200, 100), LayoutMode::Wide);
        assert_eq!(layout_mode(0, 100), LayoutMode::Narrow);
    }

    #[test]
    fn timeline_lines_omit_the_trailing_connector() {
        let theme = TuiTheme::default();
        let entries = vec![
            DisplayEntry::DateHeader {
                label: "5 January 2024".to_string(),
            },
            DisplayEntry::EventRow {
                time: "09:00".to_string(),
                text: "a".to_string(),
                is_last_in_story: false,
            },
            DisplayEntry::EventRow {
                time: "18:30".to_string(),
                text: "b".to_string(),
                is_last_in_story: true,
            },
        ];

        let lines = timeline_lines(&entries, &theme);
        let rendered: Vec<String> = lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect();

        // Header, row, connector, row. No connector after the last row.
        assert_eq!(
            rendered,
            vec![
                "5 January 2024".to_string(),
                "● 09:00  a".to_string(),
                "│".to_string(),
                "● 18:30  b".to_string(),
            ]
        );
    }

    #[test]
    fn timeline_lines_for_empty_entries_are_empty() {
        let theme = TuiTheme::default();
        assert!(timeline_lines(&[], &theme).is_empty());
    }
}
