use crate::ui::alert::AlertKind;
use crate::ui::app::App;
use crate::ui::form::{FieldId, FormFocus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, FIELD_LABEL, FOCUS_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 14;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::widget(), header);
    frame.render_widget(Clear, body);
    frame.render_widget(Footer::widget(footer), footer);

    let card = centered_rect_by_size(body, CARD_WIDTH, CARD_HEIGHT);
    let rows = Layout::vertical([
        Constraint::Length(3), // name field
        Constraint::Length(3), // email field
        Constraint::Length(1),
        Constraint::Length(3), // submit control
        Constraint::Length(1),
        Constraint::Length(3), // alert surface
    ])
    .split(card);

    draw_field(frame, app, FieldId::Name, "Name", rows[0]);
    draw_field(frame, app, FieldId::Email, "Email", rows[1]);
    draw_submit(frame, app, rows[3]);
    draw_alert(frame, app, rows[5]);
}

fn draw_field(frame: &mut Frame<'_>, app: &App, id: FieldId, label: &'static str, area: Rect) {
    let form = app.form();
    let focused = form.focus.field() == Some(id);
    let invalid = form.field_invalid(id);

    let border = if invalid {
        STATUS_ERROR
    } else if focused {
        ACCENT
    } else {
        GLOBAL_BORDER
    };

    let value = form.field(id).to_string();
    let widget = Paragraph::new(value)
        .style(Style::default().fg(HEADER_TEXT))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", label),
                    Style::default().fg(FIELD_LABEL),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(widget, area);

    if focused && area.width > 2 && area.height > 1 {
        let cursor_x = area.x + 1 + form.field(id).chars().count().min(usize::from(area.width) - 2) as u16;
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

fn draw_submit(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let form = app.form();
    let focused = form.focus == FormFocus::Submit;

    let mut style = Style::default().fg(HEADER_TEXT);
    if form.is_submitting() {
        style = style.add_modifier(Modifier::DIM);
    } else if focused {
        style = style.bg(FOCUS_HIGHLIGHT).add_modifier(Modifier::BOLD);
    }

    let border = if focused && !form.is_submitting() {
        ACCENT
    } else {
        GLOBAL_BORDER
    };

    let widget = Paragraph::new(form.submit_label())
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(widget, area);
}

fn draw_alert(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(text) = app.alert().text() else {
        return;
    };

    let color = match app.alert().kind() {
        Some(AlertKind::Success) => STATUS_OK,
        _ => STATUS_ERROR,
    };

    let widget = Paragraph::new(text.to_string())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(widget, area);
}
