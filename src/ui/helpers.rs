use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Clear};
use ratatui::Frame;

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Clear a centered area, draw a titled border around it, and return the
/// space inside the border.
pub(crate) fn open_popup(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    percent_x: u16,
    percent_y: u16,
) -> Rect {
    let popup_area = centered_rect(percent_x, percent_y, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);
    inner
}

/// Column of the cursor after `prefix` and `value_len` typed characters.
pub(crate) fn cursor_column(inner: Rect, prefix: &str, value_len: usize) -> u16 {
    let offset = (prefix.chars().count() + value_len) as u16;
    inner
        .x
        .saturating_add(offset)
        .min(inner.right().saturating_sub(1))
}
