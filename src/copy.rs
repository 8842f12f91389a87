//! Selection-based copy between the two panes.

use tracing::warn;

use crate::{backend::DirectoryBackend, pane::Pane, util::join_path};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Backend copy calls made
    pub attempted: usize,
    /// Calls that reported success
    pub copied: usize,
}

impl CopyReport {
    pub fn failed(&self) -> usize {
        self.attempted - self.copied
    }
}

/// Copy every selected entry of `source` into `dest`'s directory.
///
/// Each entry is one backend call, directories included. A failing entry is
/// logged and skipped. The source selection is left as it was.
pub fn copy_selected<B: DirectoryBackend + ?Sized>(backend: &B, source: &Pane, dest: &Pane) -> CopyReport {
    let mut report = CopyReport::default();

    let (Some(from), Some(to)) = (source.endpoint(), dest.endpoint()) else {
        return report;
    };

    for entry in source.selected_entries() {
        let source_path = join_path(source.cwd(), &entry.name);
        report.attempted += 1;

        match backend.copy(&from, &source_path, &to, dest.cwd()) {
            Ok(()) => report.copied += 1,
            Err(e) => warn!(path = %from.qualify(&source_path), error = %e, "copy failed"),
        }
    }

    report
}
