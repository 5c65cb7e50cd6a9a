//! `inlay_core` is a minimal inline templating engine. Given a loaded text
//! document it locates delimited tags and performs three kinds of text
//! transformation — value substitution, array-driven loop expansion, and
//! boolean conditional branching — producing a final rendered string. It is
//! meant for hosts that render server-generated text fragments without a
//! full templating framework.
//!
//! ## Directive Grammar
//!
//! The grammar is flat and non-recursive: block content is opaque text and
//! is never rescanned for further directives, and substituted values are
//! inserted literally.
//!
//! | Construct | Syntax |
//! | --- | --- |
//! | Substitution placeholder | `[@name]` |
//! | Loop block | `{name} … {/name}`, per-item field placeholder `[!field]` inside |
//! | Conditional block | `{if-name} … {/if-name}`, optional `{else-name} … {/else-name}` |
//!
//! Block matching is lazy and spans lines: the first opening marker pairs
//! with the nearest following closing marker. Placeholder substitution
//! replaces every occurrence. Tag names are escaped before any pattern is
//! compiled, so names containing pattern metacharacters match only their
//! literal spelling.
//!
//! ## Key Types
//!
//! - [`TemplateDocument`] — owns the mutable buffer and exposes the
//!   load/render lifecycle plus the directive operations `set_text`,
//!   `set_loop`, and `set_if`.
//! - [`TemplateLoader`] — resolves relative paths against a fixed template
//!   root (rejecting traversal) and reads template files.
//! - [`InlayError`] — the error taxonomy; structural absence of a tag is
//!   always a benign no-op, only usage and configuration errors are
//!   reported.
//!
//! ## Quick Start
//!
//! ```
//! use inlay_core::TemplateDocument;
//! use serde_json::json;
//!
//! let mut doc = TemplateDocument::new();
//! doc.load("Hello [@name]! {users}[!id] {/users}");
//! doc.set_text("name", "World")?;
//! doc.set_loop("users", &json!([{ "id": "a" }, { "id": "b" }]))?;
//! assert_eq!(doc.render()?, "Hello World! a b ");
//! # Ok::<(), inlay_core::InlayError>(())
//! ```

pub use directives::LOOP_FALLBACK_MESSAGE;
pub use document::*;
pub use error::*;
pub use loader::*;

pub(crate) mod directives;
mod document;
mod error;
mod loader;
pub(crate) mod scanner;
