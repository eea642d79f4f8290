use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind};

/// `.git`, `.idea`, ... but never `.` or `..`.
pub fn is_hidden_dir_name(name: &OsStr) -> bool {
    let Some(name) = name.to_str() else {
        return false;
    };
    name.starts_with('.') && name != "." && name != ".."
}

/// True if any directory component of `path` is hidden. The file name
/// itself is not considered.
pub fn is_under_hidden_dir(path: &Path) -> bool {
    let Some(parent) = path.parent() else {
        return false;
    };
    parent.components().any(|c| match c {
        Component::Normal(name) => is_hidden_dir_name(name),
        _ => false,
    })
}

/// Decides which filesystem notifications arm the debounce timer.
#[derive(Debug, Clone)]
pub struct ChangeFilter {
    extension: String,
    /// The watch root as configured and canonicalized. Hidden directories
    /// are only looked for below it.
    roots: Vec<PathBuf>,
}

impl ChangeFilter {
    pub fn new(extension: impl Into<String>) -> Self {
        let extension = extension.into();
        Self {
            extension: extension.trim_start_matches('.').to_string(),
            roots: Vec::new(),
        }
    }

    pub fn with_root(mut self, root: &Path) -> Self {
        self.roots.push(root.to_path_buf());
        if let Ok(canonical) = root.canonicalize() {
            if canonical != root {
                self.roots.push(canonical);
            }
        }
        self
    }

    /// Creates, content writes and the destination side of a rename (atomic
    /// saves). Removals, metadata changes and rename sources never qualify.
    pub fn accepts(&self, event: &Event) -> bool {
        match event.kind {
            EventKind::Create(_)
            | EventKind::Modify(ModifyKind::Data(_))
            | EventKind::Modify(ModifyKind::Any)
            | EventKind::Modify(ModifyKind::Name(RenameMode::To)) => {
                event.paths.iter().any(|p| self.accepts_path(p))
            }
            EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => {
                event.paths.get(1).is_some_and(|p| self.accepts_path(p))
            }
            _ => false,
        }
    }

    pub fn accepts_path(&self, path: &Path) -> bool {
        path.extension() == Some(OsStr::new(&self.extension))
            && !is_under_hidden_dir(self.below_root(path))
    }

    /// `path` relative to the watch root, or `path` itself when it is not
    /// below it.
    fn below_root<'p>(&self, path: &'p Path) -> &'p Path {
        self.roots
            .iter()
            .find_map(|root| path.strip_prefix(root).ok())
            .unwrap_or(path)
    }
}
