//! Keyboard handling for the browser and the container picker.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::warn;

use crate::{
    containers::{self, ContainerPicker},
    session::Direction,
    App, Screen,
};

impl App {
    pub fn handle_events(&mut self) -> std::io::Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                self.handle_key_event(key);
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // Clear status on any key press
        self.status = None;

        match self.screen {
            Screen::Browser => self.handle_browser_key(key.code),
            Screen::ContainerPicker(_) => self.handle_picker_key(key.code),
        }
    }

    fn handle_browser_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.session.route_navigation(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => self.session.route_navigation(Direction::Down),
            KeyCode::PageUp => self.session.route_navigation(Direction::PageUp),
            KeyCode::PageDown => self.session.route_navigation(Direction::PageDown),
            KeyCode::Home => self.session.route_navigation(Direction::Home),
            KeyCode::End => self.session.route_navigation(Direction::End),
            KeyCode::Left | KeyCode::Char('h') => self.session.route_navigation(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') => self.session.route_navigation(Direction::Right),
            KeyCode::Tab => self.session.toggle_active_pane(),
            KeyCode::Char(' ') => self.session.toggle_selection(),
            KeyCode::Enter => {
                if let Err(e) = self.session.activate_entry() {
                    self.set_error(e.to_string());
                }
            }
            KeyCode::Char('c') => self.copy_to_other_pane(),
            KeyCode::Char('o') => self.open_picker(),
            KeyCode::Char('r') => {
                if let Err(e) = self.session.refresh_active() {
                    self.set_error(e.to_string());
                }
            }
            KeyCode::Char('H') => {
                if let Err(e) = self.session.toggle_hidden() {
                    self.set_error(e.to_string());
                }
            }
            _ => {}
        }
    }

    fn handle_picker_key(&mut self, key: KeyCode) {
        let Screen::ContainerPicker(picker) = &mut self.screen else {
            return;
        };

        match key {
            KeyCode::Up | KeyCode::Char('k') => picker.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => picker.move_cursor(1),
            KeyCode::Enter => {
                let target = picker.selected().map(|c| c.name.clone());
                self.screen = Screen::Browser;
                if let Some(target) = target {
                    self.bind_container(target);
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => self.screen = Screen::Browser,
            _ => {}
        }
    }

    fn open_picker(&mut self) {
        let backend = self.session.backend();
        match containers::discover(backend.docker(), backend.runner()) {
            Ok(list) => self.screen = Screen::ContainerPicker(ContainerPicker::new(list)),
            Err(e) => {
                warn!(error = %e, "cannot list containers");
                self.set_error(e.to_string());
            }
        }
    }

    fn copy_to_other_pane(&mut self) {
        if !self.session.other_pane().is_bound() {
            self.set_error("Open a container first (o)");
            return;
        }
        if self.session.active_pane().selected_count() == 0 {
            self.set_info("Nothing selected (space to select)");
            return;
        }

        let outcome = self.session.copy_selected_to_other_pane();
        let report = outcome.report;

        let mut text = format!(
            "Copied {} file(s)/folder(s) from {} to {}",
            report.copied,
            self.session.active_pane().label(),
            self.session.other_pane().label(),
        );
        if report.failed() > 0 {
            text.push_str(&format!(" ({} failed)", report.failed()));
        }

        match outcome.refresh_error {
            Some(e) => self.set_error(format!("{}; {}", text, e)),
            None if report.failed() > 0 => self.set_error(text),
            None => self.set_info(text),
        }
    }
}
