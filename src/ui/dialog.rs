//! Centered popup frame shared by the overlays.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use super::helpers::centered_rect;
use super::layout::LayoutContext;
use super::theme::{COLOR_BORDER, COLOR_DIALOG_BG, COLOR_GOLD};

/// Clear a centered area, draw its border and return the inner area.
pub fn render_dialog_frame(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let (width, height) = LayoutContext::from_rect(area).popup_size();
    let dialog_area = centered_rect(area, width, height);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(" Esc fecha ", Style::default().fg(COLOR_BORDER)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_GOLD))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}
