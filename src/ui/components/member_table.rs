//! Member table widget: search line, rows, selection summary and page strip.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

use super::{
    render_key_hints, KeyHintBarStyle, ACCENT_ERROR, ACCENT_PRIMARY, ACCENT_WARNING, CURSOR_BG,
    SELECTED_BG, TEXT_FAINT, TEXT_MUTED, TEXT_PRIMARY,
};
use crate::core::{RowView, TableView};
use crate::data::MemberField;
use crate::ui::events::InputMode;
use crate::ui::keys::hints_for_mode;

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Renders one [`TableView`] snapshot. Holds no state of its own.
pub struct MemberTable<'a> {
    view: &'a TableView,
    mode: InputMode,
    cursor: usize,
    edit_field: MemberField,
    status: Option<&'a str>,
    loading: bool,
}

impl<'a> MemberTable<'a> {
    pub fn new(view: &'a TableView) -> Self {
        Self {
            view,
            mode: InputMode::Normal,
            cursor: 0,
            edit_field: MemberField::Name,
            status: None,
            loading: false,
        }
    }

    pub fn mode(mut self, mode: InputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn edit_field(mut self, field: MemberField) -> Self {
        self.edit_field = field;
        self
    }

    pub fn status(mut self, status: Option<&'a str>) -> Self {
        self.status = status;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    fn render_search(&self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.mode == InputMode::Search {
            Style::default().fg(ACCENT_PRIMARY)
        } else {
            Style::default().fg(TEXT_MUTED)
        };

        let mut spans = vec![
            Span::styled(" Search: ", label_style),
            Span::styled(self.view.query.as_str(), Style::default().fg(TEXT_PRIMARY)),
        ];
        if self.mode == InputMode::Search {
            spans.push(Span::styled("▏", Style::default().fg(ACCENT_PRIMARY)));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);

        if self.loading {
            Paragraph::new("Loading members… ")
                .style(Style::default().fg(TEXT_FAINT))
                .alignment(Alignment::Right)
                .render(area, buf);
        }
    }

    fn render_row(&self, index: usize, row: &RowView) -> Row<'static> {
        let editing_style = Style::default().fg(ACCENT_WARNING);

        let mut cells = vec![Cell::from(checkbox(row.selected))];
        for field in MemberField::ALL {
            let cell = match &row.draft {
                Some(draft) if self.mode == InputMode::Edit && field == self.edit_field => {
                    Cell::from(format!("{}▏", draft.get(field)))
                        .style(editing_style.add_modifier(Modifier::UNDERLINED))
                }
                Some(draft) => Cell::from(draft.get(field).to_string()).style(editing_style),
                None => Cell::from(row.member.field(field).to_string()),
            };
            cells.push(cell);
        }

        let mut style = Style::default().fg(TEXT_PRIMARY);
        if row.selected {
            style = style.bg(SELECTED_BG);
        }
        if index == self.cursor && self.mode != InputMode::Search {
            style = style.bg(CURSOR_BG).add_modifier(Modifier::BOLD);
        }
        Row::new(cells).style(style)
    }

    fn render_rows(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(TEXT_FAINT));

        let header = Row::new(vec![
            Cell::from(checkbox(self.view.header_checked)),
            Cell::from(MemberField::Name.label()),
            Cell::from(MemberField::Email.label()),
            Cell::from(MemberField::Role.label()),
        ])
        .style(Style::default().fg(TEXT_MUTED).add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .view
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| self.render_row(i, row))
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Percentage(30),
                Constraint::Percentage(40),
                Constraint::Percentage(30),
            ],
        )
        .header(header)
        .column_spacing(1)
        .block(block);
        Widget::render(table, area, buf);

        if self.view.is_empty() && !self.loading {
            let message = if self.view.total_count == 0 {
                "No members"
            } else {
                "No members match the search"
            };
            let inner = Rect {
                y: area.y.saturating_add(2),
                height: 1,
                ..area
            };
            if inner.y < area.bottom() {
                Paragraph::new(message)
                    .style(Style::default().fg(TEXT_FAINT))
                    .alignment(Alignment::Center)
                    .render(inner, buf);
            }
        }
    }

    fn page_strip(&self) -> Line<'static> {
        let enabled = Style::default().fg(ACCENT_PRIMARY);
        let disabled = Style::default().fg(TEXT_FAINT);
        let back = if self.view.can_prev { enabled } else { disabled };
        let forward = if self.view.can_next { enabled } else { disabled };

        let mut spans = vec![Span::styled("« ", back), Span::styled("‹ ", back)];
        for page in &self.view.page_numbers {
            if *page == self.view.current_page {
                spans.push(Span::styled(
                    format!("[{}]", page),
                    Style::default()
                        .fg(TEXT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(
                    format!(" {} ", page),
                    Style::default().fg(TEXT_MUTED),
                ));
            }
        }
        spans.push(Span::styled(" ›", forward));
        spans.push(Span::styled(" » ", forward));
        Line::from(spans)
    }

    fn render_summary(&self, area: Rect, buf: &mut Buffer) {
        let strip = self.page_strip();
        let strip_width = u16::try_from(strip.width()).unwrap_or(u16::MAX);
        let [summary_area, strip_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(strip_width)]).areas(area);

        Paragraph::new(format!(" {}", self.view.selection_summary()))
            .style(Style::default().fg(TEXT_MUTED))
            .render(summary_area, buf);
        Paragraph::new(strip)
            .alignment(Alignment::Right)
            .render(strip_area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        match self.status {
            Some(status) => {
                let color = if self.view.total_count == 0 && !self.loading {
                    ACCENT_ERROR
                } else {
                    ACCENT_WARNING
                };
                Paragraph::new(format!(" {}", status))
                    .style(Style::default().fg(color))
                    .render(area, buf);
            }
            None => render_key_hints(
                area,
                buf,
                hints_for_mode(self.mode),
                KeyHintBarStyle::footer_bar(),
            ),
        }
    }
}

impl Widget for MemberTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [search_area, table_area, summary_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_search(search_area, buf);
        self.render_rows(table_area, buf);
        self.render_summary(summary_area, buf);
        self.render_footer(footer_area, buf);
    }
}
