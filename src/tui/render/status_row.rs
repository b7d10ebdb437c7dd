use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::util::unicode;

use super::spans_width;

/// Key hints for whatever currently receives input
pub fn key_hints(app: &App) -> &'static str {
    if app.dialog.is_some() {
        "\u{2190}/\u{2192} choose  Enter press  Esc cancel"
    } else if app.editing_row().is_some() {
        "Enter save  Esc cancel"
    } else {
        match app.focus {
            Focus::NewTask => "Enter add  Tab list  Ctrl-C quit",
            Focus::List => "Space done  e edit  d remove  Tab new task  q quit",
        }
    }
}

/// Render the status row (bottom of screen): the last status message on
/// the left, key hints on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = Vec::new();
    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(
            format!(" {}", msg),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }

    if app.settings.show_key_hints {
        let hint = key_hints(app);
        let content_width = spans_width(&spans);
        let hint_width = unicode::display_width(hint) + 1;
        if content_width + hint_width <= width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;

    #[test]
    fn hints_follow_focus() {
        let mut app = app_with_tasks(&["a"]);
        assert!(key_hints(&app).starts_with("Enter add"));
        app.focus = Focus::List;
        assert!(key_hints(&app).starts_with("Space done"));
        let id = app.selected_task_id().unwrap();
        let task = app.tasks.get(id).unwrap().clone();
        app.row_state_mut(id).start_edit(&task);
        assert_eq!(key_hints(&app), "Enter save  Esc cancel");
    }

    #[test]
    fn status_message_and_hints() {
        let mut app = app_with_tasks(&["a"]);
        app.status_message = Some("removed \"a\"".into());
        let output = render_to_string(60, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_snapshot!(output);
    }

    #[test]
    fn wide_status_message_keeps_hint_on_row() {
        let mut app = app_with_tasks(&["a"]);
        // 15 cells of message plus 33 of hint leave 2 cells of padding
        app.status_message = Some("removed \"日本\"".into());
        let output = render_to_string(50, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.ends_with("Enter add  Tab list  Ctrl-C quit"));
    }

    #[test]
    fn hints_can_be_hidden() {
        let mut app = app_with_tasks(&["a"]);
        app.settings.show_key_hints = false;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output, "");
    }
}
