//! Key hint bar rendering.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{ACCENT_PRIMARY, TEXT_FAINT, TEXT_MUTED};

#[derive(Debug, Clone, Copy)]
pub struct KeyHintBarStyle {
    pub key_style: Style,
    pub action_style: Style,
    pub separator: Option<(&'static str, Style)>,
    pub alignment: Alignment,
    pub background: Option<Color>,
}

impl KeyHintBarStyle {
    pub fn footer_bar() -> Self {
        Self {
            key_style: Style::default().fg(ACCENT_PRIMARY),
            action_style: Style::default().fg(TEXT_MUTED),
            separator: Some((" · ", Style::default().fg(TEXT_FAINT))),
            alignment: Alignment::Left,
            background: None,
        }
    }
}

pub fn render_key_hints(
    area: Rect,
    buf: &mut Buffer,
    hints: &[(&str, &str)],
    style: KeyHintBarStyle,
) {
    let mut spans = vec![Span::raw(" ")];

    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            if let Some((sep, sep_style)) = style.separator {
                spans.push(Span::styled(sep, sep_style));
            }
        }
        spans.push(Span::styled(*key, style.key_style));
        spans.push(Span::styled(format!(" {}", action), style.action_style));
    }

    let mut paragraph = Paragraph::new(Line::from(spans)).alignment(style.alignment);
    if let Some(bg) = style.background {
        paragraph = paragraph.style(Style::default().bg(bg));
    }

    paragraph.render(area, buf);
}
