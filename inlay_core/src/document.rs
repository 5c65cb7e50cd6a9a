use serde_json::Value;

use crate::InlayError;
use crate::InlayResult;
use crate::directives;
use crate::directives::LOOP_FALLBACK_MESSAGE;

/// A single template document: a mutable text buffer plus the directive
/// operations that rewrite it.
///
/// Lifecycle: a document starts unloaded, [`load`](Self::load) populates the
/// buffer, directive operations rewrite it in place any number of times and
/// in any order, and [`render`](Self::render) reads the result. An instance
/// is private to one render session; a concurrent host constructs one
/// document per request instead of sharing an instance.
///
/// A loaded-but-empty document is distinct from a never-loaded one:
/// `load("")` renders as `""`, while rendering a never-loaded document fails
/// with [`InlayError::NotLoaded`].
#[derive(Debug, Default)]
pub struct TemplateDocument {
	buffer: Option<String>,
}

impl TemplateDocument {
	/// Create an unloaded document.
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the buffer to `content`. Loading again replaces the previous
	/// buffer.
	pub fn load(&mut self, content: impl Into<String>) {
		self.buffer = Some(content.into());
	}

	/// Whether the document has been loaded.
	pub fn is_loaded(&self) -> bool {
		self.buffer.is_some()
	}

	/// Replace every occurrence of the placeholder `[@tag]` with `value`.
	///
	/// Substitution is literal and replace-all; directives inside `value`
	/// are not resolved. A document without the placeholder, or an unloaded
	/// document, is left unchanged without error.
	pub fn set_text(&mut self, tag: &str, value: &str) -> InlayResult<()> {
		ensure_tag(tag)?;

		let Some(buffer) = self.buffer.as_mut() else {
			return Ok(());
		};

		tracing::trace!(tag, "substituting text placeholder");
		*buffer = directives::substitute_text(buffer, tag, value);
		Ok(())
	}

	/// Expand the loop block `{tag}…{/tag}` once per item in `items`,
	/// replacing every `[!field]` inside each copy with the item's value for
	/// that field. See [`set_loop_or`](Self::set_loop_or) for the fallback
	/// behavior when `items` is not an array.
	pub fn set_loop(&mut self, tag: &str, items: &Value) -> InlayResult<()> {
		self.set_loop_or(tag, items, LOOP_FALLBACK_MESSAGE)
	}

	/// Like [`set_loop`](Self::set_loop), with an explicit fallback message.
	///
	/// Each item is rendered against a fresh copy of the block's inner text,
	/// in input order; zero items collapse the block to nothing. Fields an
	/// item does not define stay behind as literal `[!field]` text. When
	/// `items` is not an array the whole block is replaced by a fixed error
	/// fragment embedding `fallback`, so a malformed invocation still renders
	/// something inspectable instead of aborting the document. A document
	/// without the block, or an unloaded document, is left unchanged.
	pub fn set_loop_or(&mut self, tag: &str, items: &Value, fallback: &str) -> InlayResult<()> {
		ensure_tag(tag)?;

		let Some(buffer) = self.buffer.as_mut() else {
			return Ok(());
		};

		if let Some(rewritten) = directives::expand_loop(buffer, tag, items, fallback) {
			tracing::trace!(tag, "expanded loop block");
			*buffer = rewritten;
		}

		Ok(())
	}

	/// Resolve the conditional blocks `{if-tag}…{/if-tag}` and optional
	/// `{else-tag}…{/else-tag}` down to one surviving branch.
	///
	/// A true condition keeps the if-block's content (markers stripped) and
	/// deletes the else-block; a false condition is the exact mirror, with a
	/// missing else-block yielding no content at all. Templates legitimately
	/// omit optional tags, so an absent pair is never an error.
	pub fn set_if(&mut self, tag: &str, condition: bool) -> InlayResult<()> {
		ensure_tag(tag)?;

		let Some(buffer) = self.buffer.as_mut() else {
			return Ok(());
		};

		if let Some(rewritten) = directives::resolve_conditional(buffer, tag, condition) {
			tracing::trace!(tag, condition, "resolved conditional block");
			*buffer = rewritten;
		}

		Ok(())
	}

	/// The current buffer, verbatim.
	///
	/// Render is a repeatable read, not a state transition: it may be called
	/// any number of times and always reflects the directives applied so
	/// far. Fails with [`InlayError::NotLoaded`] when the buffer was never
	/// set, since rendering nothing is a usage bug rather than a valid empty
	/// document.
	pub fn render(&self) -> InlayResult<&str> {
		self.buffer.as_deref().ok_or(InlayError::NotLoaded)
	}
}

/// Tag names come from the caller and an empty one is always a usage bug,
/// regardless of load state.
fn ensure_tag(tag: &str) -> InlayResult<()> {
	if tag.is_empty() {
		return Err(InlayError::EmptyTag);
	}
	Ok(())
}
