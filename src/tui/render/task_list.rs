use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::tui::list::{RowView, row_views};
use crate::util::unicode;

use super::spans_width;

/// Render one line per task. The row under the cursor gets the selection
/// background and shows its controls on the right.
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let height = area.height as usize;
    let width = area.width as usize;

    if app.tasks.is_empty() {
        let line = Line::from(Span::styled(
            "  Nothing to do yet",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    app.scroll_to_cursor(height);
    let list_focused = app.focus == Focus::List || app.editing_row().is_some();
    let views = row_views(&app.tasks, &app.rows);

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_pos: Option<Position> = None;
    for (i, view) in views.iter().enumerate().skip(app.scroll_offset).take(height) {
        let selected = list_focused && i == app.cursor;
        let (line, edit_col) = render_row(app, view, selected, width);
        if let Some(col) = edit_col {
            let y = area.y + (i - app.scroll_offset) as u16;
            cursor_pos = Some(Position::new(area.x + col as u16, y));
        }
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);

    if let Some(pos) = cursor_pos
        && app.dialog.is_none()
    {
        frame.set_cursor_position(pos);
    }
}

/// Build one row line. Returns the line and, for an editing row, the
/// display column where the terminal cursor belongs.
fn render_row(app: &App, view: &RowView, selected: bool, width: usize) -> (Line<'static>, Option<usize>) {
    let theme = &app.theme;
    let bg = if selected || view.editing {
        theme.selection_bg
    } else {
        theme.background
    };
    let base = Style::default().bg(bg);

    let mut spans: Vec<Span<'static>> = Vec::new();

    // Selection bar
    let bar = if selected { "\u{258C}" } else { " " };
    spans.push(Span::styled(bar, base.fg(theme.highlight)));

    let marker_color = if view.done { theme.done } else { theme.marker };
    spans.push(Span::styled(format!("{} ", view.marker), base.fg(marker_color)));

    // Key controls of the selected row, right-aligned
    let controls = if view.editing {
        " esc cancel "
    } else if selected && view.can_edit && view.can_remove {
        " e edit \u{2502} d remove "
    } else {
        ""
    };
    let prefix_w = spans_width(&spans);
    let title_w = width.saturating_sub(prefix_w + unicode::display_width(controls));

    let mut edit_col = None;
    if view.editing {
        // Keep the cursor visible inside the title area
        let cursor = view.edit_cursor.unwrap_or(view.title.len());
        let before = &view.title[..cursor];
        let start = unicode::visible_tail_start(before, title_w.saturating_sub(1));
        let shown = unicode::truncate_to_width(&view.title[start..], title_w);
        edit_col = Some(prefix_w + unicode::display_width(&before[start..]));
        let pad = title_w.saturating_sub(unicode::display_width(&shown));
        spans.push(Span::styled(
            shown,
            base.fg(theme.text_bright).add_modifier(Modifier::UNDERLINED),
        ));
        spans.push(Span::styled(" ".repeat(pad), base));
    } else {
        let shown = unicode::truncate_to_width(&view.title, title_w);
        let pad = title_w.saturating_sub(unicode::display_width(&shown));
        let mut style = base.fg(theme.title_color(view.done));
        if view.done {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        spans.push(Span::styled(shown, style));
        spans.push(Span::styled(" ".repeat(pad), base));
    }

    if !controls.is_empty() {
        spans.push(Span::styled(controls, base.fg(theme.dim)));
    }

    (Line::from(spans), edit_col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;

    #[test]
    fn empty_list_message() {
        let mut app = app_with_tasks(&[]);
        let output = render_to_string(TERM_W, 5, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert!(output.contains("Nothing to do yet"));
    }

    #[test]
    fn selected_row_and_done_row() {
        let mut app = app_with_tasks(&["Buy milk", "Walk dog"]);
        let id = app.tasks.get_index(1).unwrap().id;
        app.tasks.toggle_done(id);
        app.focus = Focus::List;
        let output = render_to_string(40, 3, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_snapshot!(output);
    }

    #[test]
    fn selected_row_shows_controls() {
        let mut app = app_with_tasks(&["Buy milk", "Walk dog"]);
        app.focus = Focus::List;
        app.cursor = 1;
        let output = render_to_string(TERM_W, 5, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        let lines: Vec<&str> = output.lines().collect();
        assert!(!lines[0].contains("d remove"));
        assert!(lines[1].contains("e edit"));
        assert!(lines[1].contains("d remove"));
    }

    #[test]
    fn editing_row_shows_buffer_and_cancel_only() {
        let mut app = app_with_tasks(&["Buy milk"]);
        app.focus = Focus::List;
        let id = app.selected_task_id().unwrap();
        let task = app.tasks.get(id).unwrap().clone();
        let row = app.row_state_mut(id);
        row.start_edit(&task);
        row.buffer_mut().unwrap().insert_str(" now");
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert!(output.contains("Buy milk now"));
        assert!(output.contains("esc cancel"));
        assert!(!output.contains("d remove"));
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let titles: Vec<String> = (0..10).map(|i| format!("task {}", i)).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let mut app = app_with_tasks(&refs);
        app.focus = Focus::List;
        app.cursor = 9;
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert!(output.contains("task 9"));
        assert!(!output.contains("task 0"));
        assert_eq!(app.scroll_offset, 7);
    }
}
