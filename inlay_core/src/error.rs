use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum InlayError {
	#[error("tag name cannot be empty")]
	#[diagnostic(
		code(inlay::empty_tag),
		help("pass the identifier used in the template, e.g. `name` for `[@name]`")
	)]
	EmptyTag,

	#[error("template path escapes the template root: `{path}`")]
	#[diagnostic(
		code(inlay::path_traversal),
		help("template paths must be relative and resolve inside the configured root")
	)]
	PathTraversal { path: String },

	#[error("template not found: `{path}`")]
	#[diagnostic(code(inlay::template_not_found))]
	TemplateNotFound { path: String },

	#[error("unable to read template `{path}`: {source}")]
	#[diagnostic(code(inlay::read_failure))]
	ReadFailure {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("no template content loaded")]
	#[diagnostic(
		code(inlay::not_loaded),
		help("call `load` (or `TemplateLoader::load_document`) before `render`")
	)]
	NotLoaded,
}

pub type InlayResult<T> = Result<T, InlayError>;
