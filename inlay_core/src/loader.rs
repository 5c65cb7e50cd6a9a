use std::io;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::InlayError;
use crate::InlayResult;
use crate::TemplateDocument;

/// Loads template files from a fixed root directory.
///
/// Paths handed to [`load`](Self::load) are untrusted: absolute paths and
/// paths containing parent components are rejected before touching the
/// filesystem, and the resolved file must canonicalize to a location inside
/// the root, so symlinks cannot smuggle a read outside it.
#[derive(Debug, Clone)]
pub struct TemplateLoader {
	root: PathBuf,
}

impl TemplateLoader {
	/// Create a loader anchored at `root`.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	/// The template root directory.
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Read the template at `path`, resolved against the root.
	pub fn load(&self, path: impl AsRef<Path>) -> InlayResult<String> {
		let path = path.as_ref();

		if escapes_root(path) {
			return Err(InlayError::PathTraversal {
				path: path.display().to_string(),
			});
		}

		let candidate = self.root.join(path);
		let root = canonicalize(&self.root)?;
		let resolved = canonicalize(&candidate)?;

		// Lexical screening above catches `..`; this catches symlinks that
		// point outside the root.
		if !resolved.starts_with(&root) {
			return Err(InlayError::PathTraversal {
				path: path.display().to_string(),
			});
		}

		tracing::debug!(path = %resolved.display(), "loading template");
		std::fs::read_to_string(&resolved).map_err(|source| {
			InlayError::ReadFailure {
				path: resolved.display().to_string(),
				source,
			}
		})
	}

	/// Read the template at `path` and return it as a loaded document.
	pub fn load_document(&self, path: impl AsRef<Path>) -> InlayResult<TemplateDocument> {
		let content = self.load(path)?;
		let mut document = TemplateDocument::new();
		document.load(content);
		Ok(document)
	}
}

/// A path escapes the root when it is absolute or steps through a parent
/// component anywhere along the way.
fn escapes_root(path: &Path) -> bool {
	path.is_absolute()
		|| path
			.components()
			.any(|component| matches!(component, Component::ParentDir | Component::Prefix(_)))
}

fn canonicalize(path: &Path) -> InlayResult<PathBuf> {
	path.canonicalize().map_err(|source| {
		if source.kind() == io::ErrorKind::NotFound {
			InlayError::TemplateNotFound {
				path: path.display().to_string(),
			}
		} else {
			InlayError::ReadFailure {
				path: path.display().to_string(),
				source,
			}
		}
	})
}
