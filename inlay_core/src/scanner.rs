use std::ops::Range;

use regex::Regex;

/// A located block: the full span of the match (markers included) and the
/// text captured between the markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BlockMatch {
	/// Byte range of the whole block in the buffer, opening marker through
	/// closing marker.
	pub(crate) span: Range<usize>,
	/// The text between the markers.
	pub(crate) inner: String,
}

/// Locate the first block delimited by `open_marker` and `close_marker`.
///
/// Matching is lazy and spans lines: the captured inner text is the shortest
/// span between the first opening marker and the nearest following closing
/// marker. When the same marker pair appears more than once, only the first
/// block is reported. Both markers are treated as literal text — they are
/// escaped before the pattern is compiled, so tag names containing pattern
/// metacharacters match only their literal spelling.
///
/// Returns `None` when no complete block exists, including the unmatched case
/// where an opening marker has no closing counterpart.
pub(crate) fn find_block(buffer: &str, open_marker: &str, close_marker: &str) -> Option<BlockMatch> {
	let pattern = format!(
		"(?s){}(.*?){}",
		regex::escape(open_marker),
		regex::escape(close_marker)
	);
	// Escaped literals always compile; treat failure as no-match rather than
	// propagating an error the caller cannot act on.
	let matcher = Regex::new(&pattern).ok()?;
	let captures = matcher.captures(buffer)?;
	let full = captures.get(0)?;
	let inner = captures.get(1)?;

	Some(BlockMatch {
		span: full.range(),
		inner: inner.as_str().to_string(),
	})
}

/// Replace `span` in `buffer` with `replacement`, returning the new buffer.
pub(crate) fn splice(buffer: &str, span: Range<usize>, replacement: &str) -> String {
	let mut result =
		String::with_capacity(buffer.len() - (span.end - span.start) + replacement.len());
	result.push_str(&buffer[..span.start]);
	result.push_str(replacement);
	result.push_str(&buffer[span.end..]);
	result
}
