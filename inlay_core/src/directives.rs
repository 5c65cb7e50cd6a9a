use serde_json::Value;

use crate::scanner::find_block;
use crate::scanner::splice;

/// Default message embedded in the fallback fragment when a loop receives a
/// non-array value.
pub const LOOP_FALLBACK_MESSAGE: &str = "Unable to set loop";

/// Replace every occurrence of the literal placeholder `[@tag]` with `value`.
///
/// Substitution is replace-all: a template may reference the same value more
/// than once and every reference resolves identically. The replacement is
/// literal text — directives inside `value` are not rescanned or resolved.
pub(crate) fn substitute_text(buffer: &str, tag: &str, value: &str) -> String {
	let placeholder = format!("[@{tag}]");
	buffer.replace(&placeholder, value)
}

/// Expand the loop block `{tag}…{/tag}` against `items`.
///
/// Returns the rewritten buffer, or `None` when no loop block for `tag`
/// exists (structural absence is benign). A non-array `items` value replaces
/// the block with a fixed error fragment embedding `fallback` so a malformed
/// invocation still renders something inspectable.
pub(crate) fn expand_loop(buffer: &str, tag: &str, items: &Value, fallback: &str) -> Option<String> {
	let open = format!("{{{tag}}}");
	let close = format!("{{/{tag}}}");
	let block = find_block(buffer, &open, &close)?;

	let replacement = match items.as_array() {
		None => {
			tracing::debug!(tag, "loop value is not an array, emitting fallback fragment");
			format!("<p class=\"text-white\">{fallback}</p>")
		}
		Some(entries) => {
			let mut rendered = String::new();
			for item in entries {
				rendered.push_str(&render_item(&block.inner, item));
			}
			rendered
		}
	};

	Some(splice(buffer, block.span, &replacement))
}

/// Render one loop item against the captured block template. Every
/// `[!field]` occurrence is replaced with the item's value for that field;
/// fields the item does not define stay in place as literal placeholder
/// text. Items that are not JSON objects define no fields and contribute the
/// template verbatim.
fn render_item(template: &str, item: &Value) -> String {
	let Some(fields) = item.as_object() else {
		return template.to_string();
	};

	let mut rendered = template.to_string();
	for (field, value) in fields {
		let placeholder = format!("[!{field}]");
		rendered = rendered.replace(&placeholder, &field_text(value));
	}
	rendered
}

/// The substituted text for a loop field value. Strings substitute their
/// content unquoted, null the empty string, and everything else its JSON
/// display form.
fn field_text(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

/// Resolve the conditional pair for `tag` down to exactly one surviving
/// branch.
///
/// The branch matching `condition` has its markers stripped and its content
/// kept in place; the opposite branch is deleted wholesale, markers and
/// content. The else-block is optional: a false condition with no else-block
/// simply yields no content where the if-block was. Returns `None` when
/// neither block exists.
pub(crate) fn resolve_conditional(buffer: &str, tag: &str, condition: bool) -> Option<String> {
	let if_open = format!("{{if-{tag}}}");
	let if_close = format!("{{/if-{tag}}}");
	let else_open = format!("{{else-{tag}}}");
	let else_close = format!("{{/else-{tag}}}");

	let ((keep_open, keep_close), (drop_open, drop_close)) = if condition {
		((if_open, if_close), (else_open, else_close))
	} else {
		((else_open, else_close), (if_open, if_close))
	};

	let mut result = buffer.to_string();
	let mut touched = false;

	// Delete the losing branch first so its removal cannot shift the span of
	// the surviving one.
	if let Some(block) = find_block(&result, &drop_open, &drop_close) {
		result = splice(&result, block.span, "");
		touched = true;
	}

	if let Some(block) = find_block(&result, &keep_open, &keep_close) {
		result = splice(&result, block.span, &block.inner);
		touched = true;
	}

	touched.then_some(result)
}
