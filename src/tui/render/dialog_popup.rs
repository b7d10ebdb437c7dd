use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::dialog::ButtonStyle;
use crate::util::unicode;

use super::centered_rect_fixed;

/// Greedy word wrap on display width. Words wider than `width` get a line
/// of their own and are left to the widget to clip.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if unicode::display_width(&current) + 1 + unicode::display_width(word) <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Render the open dialog as a centered popup
pub fn render_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let Some(dialog) = &app.dialog else {
        return;
    };

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);

    let popup_w: u16 = 52.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(4) as usize; // borders + one cell of margin

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(format!(" {}", dialog.title), header_style)));
    lines.push(Line::from(Span::styled("", text_style)));
    for body_line in wrap_words(dialog.body, inner_w) {
        lines.push(Line::from(Span::styled(format!(" {}", body_line), text_style)));
    }
    lines.push(Line::from(Span::styled("", text_style)));

    // Buttons, right-aligned
    let mut buttons: Vec<Span> = Vec::new();
    for (i, button) in dialog.buttons.iter().enumerate() {
        let fg = match button.style {
            ButtonStyle::Default => app.theme.highlight,
            ButtonStyle::Cancel => app.theme.text,
        };
        let mut style = Style::default().fg(fg).bg(bg);
        if i == dialog.selected {
            style = style
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD);
        }
        buttons.push(Span::styled(" ", text_style));
        buttons.push(Span::styled(format!("[ {} ]", button.label), style));
    }
    let buttons_w = super::spans_width(&buttons);
    let pad = (inner_w + 1).saturating_sub(buttons_w);
    let mut button_line = vec![Span::styled(" ".repeat(pad), text_style)];
    button_line.extend(buttons);
    lines.push(Line::from(button_line));

    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}
