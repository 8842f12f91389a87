use crate::{
    backend::{BackendKind, DirectoryBackend, Endpoint},
    error::{BrowseError, ListError, NavigationError},
    util::{join_path, PARENT_ENTRY},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Bare name as listed, without the trailing `/` of directories
    pub name: String,
    pub kind: EntryKind,
    selected: bool,
}

impl Entry {
    /// The synthetic `..` entry heading every listing
    pub fn parent() -> Self {
        Self {
            name: PARENT_ENTRY.to_owned(),
            kind: EntryKind::Directory,
            selected: false,
        }
    }

    /// Classify a raw listing name: a trailing `/` marks a directory.
    pub fn from_raw(raw: &str) -> Self {
        match raw.strip_suffix('/') {
            Some(name) => Self {
                name: name.to_owned(),
                kind: EntryKind::Directory,
                selected: false,
            },
            None => Self {
                name: raw.to_owned(),
                kind: EntryKind::File,
                selected: false,
            },
        }
    }

    pub fn is_parent(&self) -> bool {
        self.name == PARENT_ENTRY
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// One side of the browser: a directory on the host or inside a container.
///
/// Navigating never mutates a pane's location. [`Pane::enter`] builds a fresh
/// pane for the new directory, so cursor and selection cannot leak between
/// unrelated listings.
pub struct Pane {
    kind: BackendKind,
    remote_target: Option<String>,
    cwd: String,
    entries: Vec<Entry>,
    cursor: usize,
    offset: usize,
    height: usize,
    show_hidden: bool,
}

impl Pane {
    pub fn local(cwd: impl Into<String>) -> Self {
        Self::new(BackendKind::Local, None, cwd.into())
    }

    /// Container pane. `target` is `None` until the user picks a container.
    pub fn remote(target: Option<String>, cwd: impl Into<String>) -> Self {
        Self::new(BackendKind::Remote, target, cwd.into())
    }

    fn new(kind: BackendKind, remote_target: Option<String>, cwd: String) -> Self {
        Self {
            kind,
            remote_target,
            cwd,
            entries: Vec::new(),
            cursor: 0,
            offset: 0,
            height: 1,
            show_hidden: false,
        }
    }

    pub fn with_show_hidden(mut self, show_hidden: bool) -> Self {
        self.show_hidden = show_hidden;
        self
    }

    /// Empty pane at `cwd` on the same backend, keeping only display settings.
    fn successor(&self, cwd: String) -> Self {
        Self {
            height: self.height,
            show_hidden: self.show_hidden,
            ..Self::new(self.kind, self.remote_target.clone(), cwd)
        }
    }

    /// Same pane settings bound to another container, at `cwd`.
    pub fn rebind(&self, target: String, cwd: impl Into<String>) -> Self {
        Self {
            height: self.height,
            show_hidden: self.show_hidden,
            ..Self::new(BackendKind::Remote, Some(target), cwd.into())
        }
    }

    // ------------------------------------------------------------------------
    // Read access for the display layer
    // ------------------------------------------------------------------------

    pub fn backend_kind(&self) -> BackendKind {
        self.kind
    }

    pub fn remote_target(&self) -> Option<&str> {
        self.remote_target.as_deref()
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn cursor_index(&self) -> usize {
        self.cursor
    }

    pub fn viewport_offset(&self) -> usize {
        self.offset
    }

    pub fn viewport_height(&self) -> usize {
        self.height
    }

    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    /// `None` for a container pane that was never bound.
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self.kind {
            BackendKind::Local => Some(Endpoint::Local),
            BackendKind::Remote => self.remote_target.clone().map(Endpoint::Remote),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.endpoint().is_some()
    }

    /// Short name shown in titles and status messages
    pub fn label(&self) -> &str {
        match (self.kind, &self.remote_target) {
            (BackendKind::Local, _) => "host",
            (BackendKind::Remote, Some(target)) => target,
            (BackendKind::Remote, None) => "container",
        }
    }

    pub fn current_entry(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    /// Entries inside the viewport window.
    pub fn visible_entries(&self) -> &[Entry] {
        let start = self.offset.min(self.entries.len());
        let end = (self.offset + self.height).min(self.entries.len());
        &self.entries[start..end]
    }

    pub fn selected_entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.selected)
    }

    pub fn selected_count(&self) -> usize {
        self.selected_entries().count()
    }

    // ------------------------------------------------------------------------
    // Cursor and viewport
    // ------------------------------------------------------------------------

    pub fn move_cursor(&mut self, delta: isize) {
        if self.entries.is_empty() {
            self.cursor = 0;
            self.offset = 0;
            return;
        }

        let last = self.entries.len() - 1;
        let target = (self.cursor as isize).saturating_add(delta);
        self.cursor = target.clamp(0, last as isize) as usize;

        if self.cursor < self.offset {
            self.offset = self.cursor;
        }
        if self.cursor >= self.offset + self.height {
            self.offset = self.cursor + 1 - self.height;
        }

        // Either the height or the entries may have shrunk since the last move.
        self.offset = self.offset.min(self.entries.len().saturating_sub(self.height));
        self.cursor = self.cursor.min(last);
    }

    /// Called by the display layer whenever the pane area changes size.
    pub fn set_viewport_height(&mut self, height: usize) {
        self.height = height.max(1);
        self.move_cursor(0);
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    pub fn toggle_selection(&mut self) {
        if let Some(entry) = self.entries.get_mut(self.cursor) {
            if !entry.is_parent() {
                entry.selected = !entry.selected;
            }
        }
    }

    // ------------------------------------------------------------------------
    // Listing
    // ------------------------------------------------------------------------

    /// Re-list `cwd`. On failure the pane keeps showing its previous listing.
    pub fn refresh<B: DirectoryBackend + ?Sized>(&mut self, backend: &B) -> Result<(), ListError> {
        let endpoint = self.endpoint().ok_or(ListError::Unbound)?;
        let raw = backend.list(&endpoint, &self.cwd)?;

        let mut entries = Vec::with_capacity(raw.len() + 1);
        entries.push(Entry::parent());
        entries.extend(
            raw.iter()
                .filter(|name| self.show_hidden || !name.starts_with('.'))
                .map(|name| Entry::from_raw(name)),
        );

        self.entries = entries;
        self.cursor = 0;
        self.offset = 0;
        Ok(())
    }

    /// Flip dot-file visibility and re-list. The flag is restored on failure.
    pub fn toggle_hidden<B: DirectoryBackend + ?Sized>(&mut self, backend: &B) -> Result<(), ListError> {
        self.show_hidden = !self.show_hidden;
        let result = self.refresh(backend);
        if result.is_err() {
            self.show_hidden = !self.show_hidden;
        }
        result
    }

    /// Build the pane for the directory under the cursor.
    pub fn enter<B: DirectoryBackend + ?Sized>(&self, backend: &B) -> Result<Pane, BrowseError> {
        let entry = self.current_entry().ok_or(NavigationError::NoEntry)?;
        if !entry.is_dir() {
            return Err(NavigationError::NotADirectory(entry.name.clone()).into());
        }

        let mut next = self.successor(join_path(&self.cwd, &entry.name));
        next.refresh(backend)?;
        Ok(next)
    }
}
