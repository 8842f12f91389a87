//! Rendering for the browser
//!
//! Reads pane state from the session and draws it. The only thing flowing back
//! into the core is the viewport height of the pane area.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::{
    backend::BackendKind,
    containers::ContainerPicker,
    dialog::{centered_rect, render_dialog_frame},
    pane::Pane,
    session::{CONTAINER_PANE, HOST_PANE},
    theme::THEME,
    App, Screen, StatusKind,
};

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let main_layout = Layout::vertical([
            Constraint::Min(0),    // Panes
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

        let pane_layout = Layout::horizontal([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(main_layout[0]);

        // Borders take two rows
        let rows = pane_layout[0].height.saturating_sub(2) as usize;
        self.session.set_viewport_height(rows);

        for (index, area) in pane_layout.iter().enumerate() {
            let is_active = self.session.active_index() == index;
            render_pane(frame, *area, self.session.pane(index), is_active);
        }

        self.render_status_bar(frame, main_layout[1]);
        self.render_help_bar(frame, main_layout[2]);

        if let Screen::ContainerPicker(picker) = &self.screen {
            let open = self.session.pane(CONTAINER_PANE).remote_target();
            render_picker(frame, picker, open);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let (content, style) = match &self.status {
            Some(status) if status.kind == StatusKind::Error => (
                format!("[Error] {}", status.text),
                Style::default().fg(THEME.status_error_fg).bg(THEME.status_error_bg),
            ),
            Some(status) => (
                status.text.clone(),
                Style::default().fg(THEME.status_info_fg).bg(THEME.status_info_bg),
            ),
            None => (
                String::new(),
                Style::default().bg(THEME.status_info_bg),
            ),
        };

        frame.render_widget(Paragraph::new(content).style(style), area);
    }

    fn render_help_bar(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(THEME.help_key_fg).bg(THEME.help_key_bg);
        let desc_style = Style::default().fg(THEME.help_desc_fg).bg(THEME.help_desc_bg);
        let sep_style = Style::default().bg(THEME.help_desc_bg);

        let copy_label = if self.session.active_index() == HOST_PANE {
            "Copy to container"
        } else {
            "Copy to host"
        };
        let hidden_label = if self.session.active_pane().show_hidden() {
            "Hide dot-files"
        } else {
            "Show dot-files"
        };

        let shortcuts = [
            ("space", "Select"),
            ("c", copy_label),
            ("o", "Open container"),
            ("r", "Refresh"),
            ("H", hidden_label),
            ("q", "Quit"),
        ];

        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, desc)) in shortcuts.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ", sep_style));
            }
            spans.push(Span::styled(format!(" {} ", key), key_style));
            spans.push(Span::styled(format!("{} ", desc), desc_style));
        }

        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(THEME.help_desc_bg));
        frame.render_widget(paragraph, area);
    }
}

fn render_pane(frame: &mut Frame, area: Rect, pane: &Pane, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(THEME.pane_active_border)
    } else {
        Style::default().fg(THEME.pane_inactive_border)
    };

    let block = Block::default()
        .title(format!(" {}:{} ", pane.label(), pane.cwd()))
        .title_style(Style::default().fg(THEME.pane_title))
        .borders(Borders::ALL)
        .border_style(border_style);

    if pane.backend_kind() == BackendKind::Remote && !pane.is_bound() {
        let hint = Paragraph::new(Line::from(vec![
            Span::raw(" No container open. Press "),
            Span::styled("o", Style::default().fg(THEME.pane_hint).add_modifier(Modifier::BOLD)),
            Span::raw(" to choose one."),
        ]))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let cursor_style = if is_active {
        Style::default()
            .bg(THEME.cursor_active_bg)
            .fg(THEME.cursor_active_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(THEME.cursor_inactive_bg).fg(THEME.cursor_inactive_fg)
    };

    let first = pane.viewport_offset();
    let items: Vec<ListItem> = pane
        .visible_entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let base_style = if entry.is_dir() {
                Style::default().fg(THEME.directory_fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(THEME.file_fg)
            };
            let style = if first + i == pane.cursor_index() {
                cursor_style
            } else if entry.is_selected() {
                base_style.bg(THEME.selected_bg).fg(THEME.selected_fg)
            } else {
                base_style
            };

            let marker = if entry.is_selected() { "* " } else { "  " };
            let suffix = if entry.is_dir() { "/" } else { "" };
            ListItem::new(format!("{}{}{}", marker, entry.name, suffix)).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// `open` is the container the right pane is currently browsing, if any.
fn render_picker(frame: &mut Frame, picker: &ContainerPicker, open: Option<&str>) {
    let area = centered_rect(80, 60, frame.area());
    let inner = render_dialog_frame(frame, area, "Choose a container", THEME.dialog_border);

    let layout = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(inner);

    let hint = Paragraph::new(" Enter: open  j/k: move  q: back")
        .style(Style::default().fg(THEME.dialog_hint));
    frame.render_widget(hint, layout[1]);

    if picker.containers().is_empty() {
        let empty = Paragraph::new(" No running containers").style(Style::default().fg(THEME.dialog_hint));
        frame.render_widget(empty, layout[0]);
        return;
    }

    // Keep the cursor row on screen
    let height = (layout[0].height as usize).max(1);
    let first = picker.cursor().saturating_sub(height - 1);

    let lines: Vec<Line> = picker
        .containers()
        .iter()
        .enumerate()
        .skip(first)
        .take(height)
        .map(|(i, c)| {
            let pointer = if i == picker.cursor() { " ► " } else { "   " };
            let short_id: String = c.id.chars().take(12).collect();
            let mut spans = vec![
                Span::raw(pointer),
                Span::styled(short_id, Style::default().fg(THEME.container_id)),
                Span::raw("  "),
                Span::styled(
                    c.name.clone(),
                    Style::default().fg(THEME.container_name).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}  {}", c.image, c.status),
                    Style::default().fg(THEME.container_detail),
                ),
            ];
            if open == Some(c.name.as_str()) {
                spans.push(Span::styled(" (open)", Style::default().fg(THEME.pane_hint)));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), layout[0]);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::containers::Container;

    fn container(id: &str, name: &str) -> Container {
        Container {
            id: id.to_owned(),
            name: name.to_owned(),
            image: "nginx".to_owned(),
            status: "Up 2 hours".to_owned(),
        }
    }

    fn picker_rows(open: Option<&str>) -> Vec<String> {
        let picker = ContainerPicker::new(vec![container("abc123", "web"), container("def456", "db")]);
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| render_picker(frame, &picker, open)).unwrap();

        let buffer = terminal.backend().buffer();
        (0..20u16)
            .map(|y| (0..100u16).map(|x| buffer.cell((x, y)).unwrap().symbol()).collect())
            .collect()
    }

    #[test]
    fn test_picker_marks_open_container() {
        let rows = picker_rows(Some("web"));

        let web = rows.iter().find(|r| r.contains("web")).unwrap();
        let db = rows.iter().find(|r| r.contains("def456")).unwrap();
        assert!(web.contains("(open)"));
        assert!(!db.contains("(open)"));
    }

    #[test]
    fn test_picker_without_open_container() {
        let rows = picker_rows(None);
        assert!(rows.iter().all(|r| !r.contains("(open)")));
    }
}
