//! Top-level frame layout: header tabs, the active view, and a hint line.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use crate::app::App;
use crate::theme;
use crate::ui::{integration, inventory};
use flowdeck_types::View;

pub(super) struct MainLayout;

impl MainLayout {
    /// Header / body / hints, top to bottom.
    pub fn areas(size: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(size)
        .to_vec()
    }
}

/// Renders one full frame.
pub(crate) fn draw(frame: &mut Frame, app: &App) {
    let areas = MainLayout::areas(frame.area());
    draw_header(frame, areas[0], app);
    match app.view {
        View::Integration => integration::draw(frame, areas[1], app),
        View::Inventory => inventory::draw(frame, areas[1], app),
    }
    draw_hints(frame, areas[2], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let titles = [View::Integration, View::Inventory].map(|v| Line::from(v.title()));
    let selected = match app.view {
        View::Integration => 0,
        View::Inventory => 1,
    };
    let tabs = Tabs::new(titles.to_vec())
        .select(selected)
        .style(theme::text_muted())
        .highlight_style(theme::accent_style())
        .block(
            Block::default()
                .title(Span::styled(
                    " Flowdeck – Integration & Inventory ",
                    theme::title_style(),
                ))
                .borders(Borders::ALL)
                .border_style(theme::border_style(false)),
        );
    frame.render_widget(tabs, area);
}

fn draw_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.view {
        View::Integration => "Enter run step · r retry · Tab switch view · q quit",
        View::Inventory => {
            "type to search · ↑/↓ vendor · ←/→ status · Esc clear · Tab switch view · Ctrl+C quit"
        }
    };
    frame.render_widget(Paragraph::new(hints).style(theme::text_muted()), area);
}
