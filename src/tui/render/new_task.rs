use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Focus};
use crate::util::unicode;

pub const PLACEHOLDER: &str = "Add a new task...";

/// Render the new-task field. When it has focus the terminal cursor is
/// placed inside it.
pub fn render_new_task(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::NewTask && app.editing_row().is_none();
    let bg = app.theme.input_bg;
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(app.theme.background))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    let inner_w = inner.width.saturating_sub(1) as usize; // room for the cursor

    let value = app.new_task.value();
    let line = if value.is_empty() {
        Line::from(Span::styled(
            unicode::truncate_to_width(PLACEHOLDER, inner_w),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        // Keep the text up to the cursor visible
        let before_cursor = &value[..app.new_task.cursor()];
        let start = unicode::visible_tail_start(before_cursor, inner_w);
        Line::from(Span::styled(
            value[start..].to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
    };
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused && app.dialog.is_none() && inner.width > 0 && inner.height > 0 {
        let before_cursor = &value[..app.new_task.cursor()];
        let start = unicode::visible_tail_start(before_cursor, inner_w);
        let col = unicode::display_width(&before_cursor[start..]) as u16;
        frame.set_cursor_position(Position::new(inner.x + col, inner.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;

    #[test]
    fn placeholder_field() {
        let app = app_with_tasks(&[]);
        let output = render_to_string(30, 3, |frame, area| {
            render_new_task(frame, &app, area);
        });
        assert_snapshot!(output);
    }

    #[test]
    fn shows_typed_text() {
        let mut app = app_with_tasks(&[]);
        app.new_task.insert_str("Buy milk");
        let output = render_to_string(40, 3, |frame, area| {
            render_new_task(frame, &app, area);
        });
        assert!(output.contains("Buy milk"));
        assert!(!output.contains(PLACEHOLDER));
    }

    #[test]
    fn long_text_scrolls_to_cursor() {
        let mut app = app_with_tasks(&[]);
        app.new_task.insert_str("0123456789abcdefghij");
        let output = render_to_string(12, 3, |frame, area| {
            render_new_task(frame, &app, area);
        });
        // 10 inner cells, one kept for the cursor
        assert!(output.contains("bcdefghij"));
        assert!(!output.contains("0123"));
    }
}
