//! The two-pane browser session
//!
//! Owns the host pane (left) and the container pane (right), routes input to
//! the active one and runs the cross-pane operations.

use tracing::{debug, info, warn};

use crate::{
    backend::DirectoryBackend,
    copy::{copy_selected, CopyReport},
    error::{BrowseError, ListError},
    pane::Pane,
    util::ROOT,
};

pub const HOST_PANE: usize = 0;
pub const CONTAINER_PANE: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Left,
    Right,
}

#[derive(Debug, Default)]
pub struct CopyOutcome {
    pub report: CopyReport,
    /// Set when the destination could not be re-listed after the copy
    pub refresh_error: Option<ListError>,
}

pub struct BrowserSession<B> {
    backend: B,
    panes: [Pane; 2],
    active: usize,
}

impl<B: DirectoryBackend> BrowserSession<B> {
    pub fn new(backend: B, host: Pane, container: Pane) -> Self {
        Self {
            backend,
            panes: [host, container],
            active: HOST_PANE,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn pane(&self, index: usize) -> &Pane {
        &self.panes[index]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_pane(&self) -> &Pane {
        &self.panes[self.active]
    }

    pub fn other_pane(&self) -> &Pane {
        &self.panes[1 - self.active]
    }

    fn active_pane_mut(&mut self) -> &mut Pane {
        &mut self.panes[self.active]
    }

    pub fn route_navigation(&mut self, direction: Direction) {
        let page = self.active_pane().viewport_height() as isize;
        let len = self.active_pane().entries().len() as isize;

        match direction {
            Direction::Up => self.active_pane_mut().move_cursor(-1),
            Direction::Down => self.active_pane_mut().move_cursor(1),
            Direction::PageUp => self.active_pane_mut().move_cursor(-page),
            Direction::PageDown => self.active_pane_mut().move_cursor(page),
            Direction::Home => self.active_pane_mut().move_cursor(-len),
            Direction::End => self.active_pane_mut().move_cursor(len),
            Direction::Left => self.active = HOST_PANE,
            Direction::Right => self.active = CONTAINER_PANE,
        }
    }

    pub fn toggle_active_pane(&mut self) {
        self.active = 1 - self.active;
    }

    /// Enter the directory under the cursor. Files are ignored.
    pub fn activate_entry(&mut self) -> Result<(), ListError> {
        match self.panes[self.active].enter(&self.backend) {
            Ok(pane) => {
                info!(pane = pane.label(), cwd = pane.cwd(), "entered directory");
                self.panes[self.active] = pane;
                Ok(())
            }
            Err(BrowseError::Navigation(e)) => {
                debug!(error = %e, "activation ignored");
                Ok(())
            }
            Err(BrowseError::List(e)) => {
                warn!(error = %e, "cannot enter directory");
                Err(e)
            }
        }
    }

    pub fn toggle_selection(&mut self) {
        self.active_pane_mut().toggle_selection();
    }

    /// Copy the active pane's selection into the other pane's directory.
    ///
    /// Does nothing while the container pane has never been bound, whichever
    /// side it is on. The destination is only re-listed after an attempt.
    pub fn copy_selected_to_other_pane(&mut self) -> CopyOutcome {
        let dest = 1 - self.active;
        if !self.panes[self.active].is_bound() || !self.panes[dest].is_bound() {
            debug!("copy skipped: container pane is not bound");
            return CopyOutcome::default();
        }

        let report = copy_selected(&self.backend, &self.panes[self.active], &self.panes[dest]);
        if report.attempted == 0 {
            debug!("copy skipped: nothing selected");
            return CopyOutcome::default();
        }
        info!(
            from = self.panes[self.active].label(),
            to = self.panes[dest].label(),
            copied = report.copied,
            failed = report.failed(),
            "copy finished"
        );

        let refresh_error = self.panes[dest].refresh(&self.backend).err();
        if let Some(e) = &refresh_error {
            warn!(error = %e, "cannot refresh destination after copy");
        }

        CopyOutcome {
            report,
            refresh_error,
        }
    }

    /// Point the container pane at `target`, starting at `/`.
    ///
    /// The previous container pane stays in place if the new one cannot be listed.
    pub fn bind_remote(&mut self, target: String) -> Result<(), ListError> {
        let mut pane = self.panes[CONTAINER_PANE].rebind(target, ROOT);
        if let Err(e) = pane.refresh(&self.backend) {
            warn!(target = pane.label(), error = %e, "cannot open container");
            return Err(e);
        }

        info!(target = pane.label(), "bound container pane");
        self.panes[CONTAINER_PANE] = pane;
        self.active = CONTAINER_PANE;
        Ok(())
    }

    pub fn refresh_active(&mut self) -> Result<(), ListError> {
        let active = self.active;
        self.panes[active].refresh(&self.backend)
    }

    pub fn toggle_hidden(&mut self) -> Result<(), ListError> {
        let active = self.active;
        self.panes[active].toggle_hidden(&self.backend)
    }

    /// Display hook: both panes share the same height.
    pub fn set_viewport_height(&mut self, height: usize) {
        for pane in &mut self.panes {
            pane.set_viewport_height(height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Endpoint, testing::FakeBackend};

    fn session(backend: FakeBackend) -> BrowserSession<FakeBackend> {
        let mut host = Pane::local("/src");
        host.refresh(&backend).unwrap();
        let mut session = BrowserSession::new(backend, host, Pane::remote(None, ROOT));
        session.set_viewport_height(5);
        session
    }

    fn backend() -> FakeBackend {
        FakeBackend::new()
            .with_listing("/src", &["a/", "b.txt", "c/"])
            .with_listing("/src/a", &["inner.txt"])
            .with_listing("/", &["dst/", "etc/"])
            .with_listing("/dst", &[])
    }

    /// Session with the container bound and cd'ed into /dst, host pane active
    /// with `a/` and `c/` selected.
    fn ready_to_copy(backend: FakeBackend) -> BrowserSession<FakeBackend> {
        let mut session = session(backend);
        session.bind_remote("web".to_owned()).unwrap();
        session.route_navigation(Direction::Down);
        session.activate_entry().unwrap();
        assert_eq!(session.pane(CONTAINER_PANE).cwd(), "/dst");

        session.route_navigation(Direction::Left);
        session.route_navigation(Direction::Down);
        session.toggle_selection();
        session.route_navigation(Direction::Down);
        session.route_navigation(Direction::Down);
        session.toggle_selection();
        session
    }

    #[test]
    fn test_pane_switching_is_clamped() {
        let mut session = session(backend());
        session.route_navigation(Direction::Left);
        assert_eq!(session.active_index(), HOST_PANE);
        session.route_navigation(Direction::Right);
        session.route_navigation(Direction::Right);
        assert_eq!(session.active_index(), CONTAINER_PANE);
        session.toggle_active_pane();
        assert_eq!(session.active_index(), HOST_PANE);
    }

    #[test]
    fn test_vertical_moves_only_touch_active_pane() {
        let mut session = session(backend());
        session.bind_remote("web".to_owned()).unwrap();
        session.route_navigation(Direction::Left);
        session.route_navigation(Direction::End);

        assert_eq!(session.pane(HOST_PANE).cursor_index(), 3);
        assert_eq!(session.pane(CONTAINER_PANE).cursor_index(), 0);

        session.route_navigation(Direction::Home);
        assert_eq!(session.pane(HOST_PANE).cursor_index(), 0);
    }

    #[test]
    fn test_activate_directory_replaces_pane() {
        let mut session = session(backend());
        session.route_navigation(Direction::Down);
        session.toggle_selection();

        session.activate_entry().unwrap();
        let pane = session.active_pane();
        assert_eq!(pane.cwd(), "/src/a");
        assert_eq!(pane.selected_count(), 0);
        assert_eq!(pane.viewport_height(), 5);
    }

    #[test]
    fn test_activate_file_is_noop() {
        let mut session = session(backend());
        session.route_navigation(Direction::Down);
        session.route_navigation(Direction::Down);

        session.activate_entry().unwrap();
        assert_eq!(session.active_pane().cwd(), "/src");
        assert_eq!(session.active_pane().cursor_index(), 2);
    }

    #[test]
    fn test_activate_unlistable_directory_keeps_pane() {
        let mut backend = backend();
        backend.remove_listing("/src/a");
        let mut session = session(backend);
        session.route_navigation(Direction::Down);

        assert!(session.activate_entry().is_err());
        assert_eq!(session.active_pane().cwd(), "/src");
        assert_eq!(session.active_pane().cursor_index(), 1);
    }

    #[test]
    fn test_bind_remote_activates_container_pane() {
        let mut session = session(backend());
        session.bind_remote("web".to_owned()).unwrap();

        assert_eq!(session.active_index(), CONTAINER_PANE);
        let pane = session.active_pane();
        assert_eq!(pane.remote_target(), Some("web"));
        assert_eq!(pane.cwd(), "/");
        assert_eq!(pane.entries().len(), 3);
    }

    #[test]
    fn test_failed_bind_keeps_previous_pane() {
        let mut backend = backend();
        backend.remove_listing("/");
        let mut session = session(backend);

        assert!(session.bind_remote("gone".to_owned()).is_err());
        assert!(!session.pane(CONTAINER_PANE).is_bound());
        assert_eq!(session.active_index(), HOST_PANE);
    }

    #[test]
    fn test_copy_to_container() {
        let mut session = ready_to_copy(backend());
        let lists_before = session.backend().list_count();

        let outcome = session.copy_selected_to_other_pane();

        assert_eq!(outcome.report.copied, 2);
        assert!(outcome.refresh_error.is_none());
        let calls = session.backend().copies();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|c| c.dest_path == "/dst"));
        assert!(calls.iter().all(|c| c.dest == Endpoint::Remote("web".to_owned())));
        // destination re-listed, source selection untouched
        assert_eq!(session.backend().list_count(), lists_before + 1);
        assert_eq!(session.pane(HOST_PANE).selected_count(), 2);
    }

    #[test]
    fn test_copy_counts_only_successes() {
        let mut session = ready_to_copy(backend().failing_copy("/src/c"));

        let outcome = session.copy_selected_to_other_pane();

        assert_eq!(outcome.report.attempted, 2);
        assert_eq!(outcome.report.copied, 1);
    }

    #[test]
    fn test_copy_without_container_makes_no_backend_calls() {
        let mut session = session(backend());
        session.route_navigation(Direction::Down);
        session.toggle_selection();
        let lists_before = session.backend().list_count();

        let outcome = session.copy_selected_to_other_pane();

        assert_eq!(outcome.report.copied, 0);
        assert!(session.backend().copies().is_empty());
        assert_eq!(session.backend().list_count(), lists_before);
    }

    #[test]
    fn test_copy_from_unbound_container_leaves_host_untouched() {
        let mut session = session(backend());
        session.route_navigation(Direction::Down);
        session.toggle_selection();
        session.route_navigation(Direction::Right);
        let lists_before = session.backend().list_count();

        let outcome = session.copy_selected_to_other_pane();

        assert_eq!(outcome.report.attempted, 0);
        assert!(outcome.refresh_error.is_none());
        assert!(session.backend().copies().is_empty());
        assert_eq!(session.backend().list_count(), lists_before);
        let host = session.pane(HOST_PANE);
        assert_eq!(host.cursor_index(), 1);
        assert_eq!(host.selected_count(), 1);
    }

    #[test]
    fn test_copy_with_nothing_selected_keeps_destination() {
        let mut session = session(backend());
        session.bind_remote("web".to_owned()).unwrap();
        session.route_navigation(Direction::End);
        session.route_navigation(Direction::Left);
        let lists_before = session.backend().list_count();

        let outcome = session.copy_selected_to_other_pane();

        assert_eq!(outcome.report.attempted, 0);
        assert_eq!(session.backend().list_count(), lists_before);
        assert_eq!(session.pane(CONTAINER_PANE).cursor_index(), 2);
    }

    #[test]
    fn test_copy_from_container_to_host() {
        let backend = backend().with_listing("/", &["etc/", "motd"]);
        let mut session = session(backend);
        session.bind_remote("web".to_owned()).unwrap();
        session.route_navigation(Direction::End);
        session.toggle_selection();

        let outcome = session.copy_selected_to_other_pane();

        assert_eq!(outcome.report.copied, 1);
        let calls = session.backend().copies();
        assert_eq!(calls[0].source, Endpoint::Remote("web".to_owned()));
        assert_eq!(calls[0].source_path, "/motd");
        assert_eq!(calls[0].dest, Endpoint::Local);
        assert_eq!(calls[0].dest_path, "/src");
    }

    #[test]
    fn test_failed_refresh_after_copy_is_reported() {
        let mut session = ready_to_copy(backend());
        // the container directory vanished while copying
        let mut backend = std::mem::take(&mut session.backend);
        backend.remove_listing("/dst");
        session.backend = backend;

        let outcome = session.copy_selected_to_other_pane();
        assert_eq!(outcome.report.copied, 2);
        assert!(outcome.refresh_error.is_some());
    }
}
