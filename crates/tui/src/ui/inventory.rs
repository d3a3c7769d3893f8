//! Inventory view: summary tiles, filter bar, results table, and the
//! vendor distribution chart. Everything shown here is derived from the
//! static dataset and the current filter on each frame.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::app::App;
use crate::theme;
use flowdeck_engine::inventory::{self, Summary};
use flowdeck_types::{InventoryItem, ItemStatus, base_inventory};

pub(super) fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let filter_state = app.filter_state();
    let filtered = inventory::filter(base_inventory(), &filter_state);
    let summary = inventory::summarize(&filtered);
    let counts = inventory::vendor_counts(&app.vendor_choices, &filtered);

    let rows = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(8),
    ])
    .split(area);

    draw_summary_tiles(frame, rows[0], &summary);
    draw_filter_bar(frame, rows[1], app);
    draw_table(frame, rows[2], &filtered);
    draw_vendor_chart(frame, rows[3], &counts, summary.total);
}

fn draw_summary_tiles(frame: &mut Frame, area: Rect, summary: &Summary) {
    let tiles = Layout::horizontal([
        Constraint::Percentage(34),
        Constraint::Percentage(33),
        Constraint::Percentage(33),
    ])
    .split(area);
    draw_tile(frame, tiles[0], "Total Products", summary.total, theme::FG);
    draw_tile(frame, tiles[1], "Available", summary.available, theme::OK);
    draw_tile(frame, tiles[2], "Not Purchased", summary.not_purchased, theme::WARN);
}

fn draw_tile(frame: &mut Frame, area: Rect, label: &str, value: usize, color: Color) {
    let tile = Paragraph::new(Line::from(Span::styled(
        value.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(Span::styled(label, theme::title_style()))
            .borders(Borders::ALL)
            .border_style(theme::border_style(false)),
    );
    frame.render_widget(tile, area);
}

fn draw_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled("Search: ", theme::text_muted()),
        Span::styled(app.search.clone(), theme::text_style()),
        Span::styled("▌", theme::accent_style()),
        Span::styled("   Vendor ", theme::text_muted()),
        Span::styled(format!("‹{}›", app.vendor_label()), theme::text_style()),
        Span::styled("   Status ", theme::text_muted()),
        Span::styled(format!("‹{}›", app.status_label()), theme::text_style()),
    ]);
    let bar = Paragraph::new(line).block(
        Block::default()
            .title(Span::styled("Filters", theme::title_style()))
            .borders(Borders::ALL)
            .border_style(theme::border_style(true)),
    );
    frame.render_widget(bar, area);
}

fn draw_table(frame: &mut Frame, area: Rect, filtered: &[&InventoryItem]) {
    let block = Block::default()
        .title(Span::styled("Inventory Overview", theme::title_style()))
        .borders(Borders::ALL)
        .border_style(theme::border_style(false));

    if filtered.is_empty() {
        let placeholder = Paragraph::new("No matching products found.")
            .style(theme::text_muted().add_modifier(Modifier::ITALIC))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let header = Row::new(
        ["SKU", "Product Name", "Vendor", "Stock", "Status"]
            .into_iter()
            .map(|h| Cell::from(h).style(theme::title_style())),
    );
    let rows: Vec<Row> = filtered
        .iter()
        .map(|item| {
            let status_cell = match item.status {
                ItemStatus::Available => Cell::from("In Stock").style(theme::ok_style()),
                ItemStatus::NotPurchased => Cell::from("Not Purchased").style(theme::warn_style()),
            };
            Row::new(vec![
                Cell::from(item.sku.clone()).style(theme::text_style()),
                Cell::from(item.name.clone()).style(theme::text_style()),
                Cell::from(item.vendor.clone()).style(theme::text_style()),
                Cell::from(item.stock.to_string()).style(theme::text_style()),
                status_cell,
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Length(7),
        Constraint::Length(14),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(block);
    frame.render_widget(table, area);
}

fn draw_vendor_chart(frame: &mut Frame, area: Rect, counts: &[(String, usize)], total: usize) {
    let block = Block::default()
        .title(Span::styled("Vendor Summary", theme::title_style()))
        .borders(Borders::ALL)
        .border_style(theme::border_style(false));

    if total == 0 {
        let placeholder = Paragraph::new("No data for current filter")
            .style(theme::text_muted().add_modifier(Modifier::ITALIC))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2);
    let raw_counts: Vec<usize> = counts.iter().map(|(_, n)| *n).collect();
    let widths = segment_widths(&raw_counts, inner_width);

    let mut segments: Vec<Span> = Vec::new();
    let mut legend: Vec<Line> = Vec::new();
    for (i, ((vendor, count), width)) in counts.iter().zip(&widths).enumerate() {
        let color = theme::CHART[i % theme::CHART.len()];
        if *width > 0 {
            segments.push(Span::styled(
                "█".repeat(*width as usize),
                Style::default().fg(color),
            ));
        }
        legend.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(color)),
            Span::styled(vendor.clone(), theme::text_style()),
            Span::styled(format!("  {count}"), theme::text_muted()),
        ]));
    }

    let mut lines = vec![Line::from(segments), Line::default()];
    lines.extend(legend);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Split `width` cells proportionally between the counts; leftover cells go
/// to the largest segments so the bar always fills exactly when any count is
/// non-zero.
fn segment_widths(counts: &[usize], width: u16) -> Vec<u16> {
    let total: usize = counts.iter().sum();
    if total == 0 || width == 0 {
        return vec![0; counts.len()];
    }
    let mut widths: Vec<u16> = counts
        .iter()
        .map(|&count| ((count * width as usize) / total) as u16)
        .collect();
    let assigned: u16 = widths.iter().sum();
    let mut remainder = width.saturating_sub(assigned);

    let mut order: Vec<usize> = (0..counts.len()).collect();
    order.sort_by(|&a, &b| counts[b].cmp(&counts[a]));
    while remainder > 0 {
        let mut gave = false;
        for &idx in &order {
            if remainder == 0 {
                break;
            }
            if counts[idx] > 0 {
                widths[idx] += 1;
                remainder -= 1;
                gave = true;
            }
        }
        if !gave {
            break;
        }
    }
    widths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_widths_fill_the_bar_exactly() {
        let widths = segment_widths(&[1, 2, 1, 1], 80);
        assert_eq!(widths.iter().sum::<u16>(), 80);
        // the biggest count owns the widest segment
        assert!(widths[1] >= widths[0]);
    }

    #[test]
    fn zero_counts_get_no_cells() {
        let widths = segment_widths(&[0, 3, 0, 1], 40);
        assert_eq!(widths[0], 0);
        assert_eq!(widths[2], 0);
        assert_eq!(widths.iter().sum::<u16>(), 40);
    }

    #[test]
    fn empty_distribution_renders_nothing() {
        assert_eq!(segment_widths(&[0, 0, 0, 0], 40), vec![0, 0, 0, 0]);
    }
}
