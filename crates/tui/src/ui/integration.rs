//! Integration view: stage timeline, progress gauge, the current-stage
//! action card, the mock response panel, and the activity log.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap};

use crate::app::{App, THROBBER};
use crate::theme;
use flowdeck_engine::StepStatus;
use flowdeck_types::{stage_count, stages};

pub(super) fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(8),
    ])
    .split(area);

    draw_timeline(frame, rows[0], app);
    draw_gauge(frame, rows[1], app);

    let body = Layout::horizontal([Constraint::Percentage(67), Constraint::Percentage(33)]).split(rows[2]);
    let left = Layout::vertical([Constraint::Length(7), Constraint::Min(4)]).split(body[0]);
    draw_stage_card(frame, left[0], app);
    draw_response_panel(frame, left[1], app);
    draw_activity_log(frame, body[1], app);
}

fn draw_timeline(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.stepper.current_stage();
    let mut spans: Vec<Span> = Vec::new();
    for (i, stage) in stages().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" → ", theme::text_muted()));
        }
        if i < current {
            spans.push(Span::styled(format!("✓ {}", stage.name), theme::ok_style()));
        } else if i == current {
            spans.push(Span::styled(stage.name, theme::accent_style()));
        } else {
            spans.push(Span::styled(stage.name, theme::text_muted()));
        }
    }
    let timeline = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(Span::styled("Integration Flow", theme::title_style()))
                .borders(Borders::ALL)
                .border_style(theme::border_style(app.stepper.is_loading())),
        );
    frame.render_widget(timeline, area);
}

fn draw_gauge(frame: &mut Frame, area: Rect, app: &App) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_style(false)),
        )
        .gauge_style(theme::ok_style())
        .ratio(app.stepper.progress_ratio())
        .label(format!(
            "{}/{} stages",
            app.stepper.current_stage(),
            stage_count()
        ));
    frame.render_widget(gauge, area);
}

fn draw_stage_card(frame: &mut Frame, area: Rect, app: &App) {
    // The card shows the most recently run stage, like the demo it mimics.
    let (name, description) = match app.stepper.current_stage() {
        0 => ("Initializing...", "Starting integration workflow..."),
        n => {
            let stage = &stages()[n - 1];
            (stage.name, stage.description)
        }
    };

    let action: Line = match app.stepper.status() {
        StepStatus::Error => Line::from(vec![
            Span::styled("✗ API failed! Retry?  ", theme::warn_style()),
            Span::styled("[r] Retry", theme::text_style()),
        ]),
        StepStatus::Success => Line::from(Span::styled(
            "✓ Step completed successfully!",
            theme::ok_style(),
        )),
        StepStatus::Idle if app.stepper.is_loading() => Line::from(Span::styled(
            format!("{} Executing API call...", THROBBER[app.throbber_idx]),
            Style::default().fg(theme::ACCENT),
        )),
        StepStatus::Idle if app.stepper.is_complete() => Line::from(Span::styled(
            "Demo Complete",
            theme::title_style(),
        )),
        StepStatus::Idle => Line::from(vec![
            Span::styled("[Enter] ", theme::accent_style()),
            Span::styled("Run Next Step", theme::text_style()),
        ]),
    };

    let lines = vec![
        Line::from(Span::styled(name, theme::text_style().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(description, theme::text_muted())),
        Line::default(),
        action,
    ];
    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(false)),
    );
    frame.render_widget(card, area);
}

fn draw_response_panel(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            "Mock Cloud Function Response",
            theme::title_style(),
        ))
        .borders(Borders::ALL)
        .border_style(theme::border_style(false));
    let body = match app.stepper.last_outcome() {
        Some(outcome) => Paragraph::new(
            serde_json::to_string_pretty(outcome).unwrap_or_default(),
        )
        .style(theme::text_style()),
        None => Paragraph::new("No calls yet...")
            .style(theme::text_muted().add_modifier(Modifier::ITALIC)),
    };
    frame.render_widget(body.wrap(Wrap { trim: false }).block(block), area);
}

fn draw_activity_log(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled("Activity Log", theme::title_style()))
        .borders(Borders::ALL)
        .border_style(theme::border_style(false));

    let entries = app.stepper.activity();
    if entries.is_empty() {
        let placeholder = Paragraph::new("No activity yet...")
            .style(theme::text_muted().add_modifier(Modifier::ITALIC))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    // Keep the newest entries in view; oldest-first within the window.
    let visible = area.height.saturating_sub(2) as usize;
    let offset = entries.len().saturating_sub(visible);
    let items: Vec<ListItem> = entries[offset..]
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(entry.timestamp.clone(), theme::text_muted()),
                Span::raw("  "),
                Span::styled(entry.message.clone(), theme::text_style()),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}
