//! Source-level diagnostics for Cinder
//!
//! Wraps a [`ParseError`] together with the file it came from so `miette` can render it with the offending line
//! highlighted. Parse errors only carry a line number, so the label spans the whole (trimmed) line.

use cinder_syntax::diagnostics::{ParseError, ParseErrorKind};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A parse error located in a named source.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(cinder::parse))]
pub struct SourceDiagnostic {
    pub message: String,
    pub kind: ParseErrorKind,
    pub line: usize,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("{kind} on line {line}")]
    pub span: SourceSpan,
    #[help]
    pub help: Option<String>,
}

impl SourceDiagnostic {
    /// Attach `err` to the source text it was produced from.
    pub fn from_parse_error(file_name: &str, source: &str, err: &ParseError) -> Self {
        Self {
            message: err.message.clone(),
            kind: err.kind,
            line: err.line,
            source_code: NamedSource::new(file_name, source.to_string()),
            span: line_span(source, err.line),
            help: help_for(err.kind),
        }
    }
}

/// Byte span of the non-whitespace part of 1-based `line` in `source`.
///
/// Lines past the end map to an empty span at the end of the text.
pub fn line_span(source: &str, line: usize) -> SourceSpan {
    let mut offset = 0;
    for (idx, text) in source.split_inclusive('\n').enumerate() {
        if idx + 1 == line {
            let content = text.trim_end_matches(['\n', '\r']);
            let lead = content.len() - content.trim_start().len();
            let len = content.trim().len();
            return SourceSpan::new((offset + lead).into(), len);
        }
        offset += text.len();
    }
    SourceSpan::new(source.len().into(), 0)
}

fn help_for(kind: ParseErrorKind) -> Option<String> {
    match kind {
        ParseErrorKind::UnknownType => {
            Some("types must be a primitive or a class declared earlier in the file".to_string())
        }
        ParseErrorKind::UnexpectedEof => Some("the file ended before this construct was closed".to_string()),
        ParseErrorKind::InvalidLiteral => Some("integer literals are digits only and must fit in 64 bits".to_string()),
        ParseErrorKind::Syntax | ParseErrorKind::Redeclaration => None,
    }
}

/// Render `err` as a plain, uncoloured report: header, location, and the source line.
pub fn format_error(file_name: &str, source: &str, err: &ParseError) -> String {
    let line_text = source.lines().nth(err.line.saturating_sub(1)).unwrap_or("");
    let width = err.line.to_string().len();

    let mut out = format!("{}: {}\n", err.kind, err.message);
    out.push_str(&format!("  --> {}:{}\n", file_name, err.line));
    out.push_str(&format!("  {:>width$} |\n", ""));
    out.push_str(&format!("  {:>width$} | {}\n", err.line, line_text));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_span_covers_trimmed_line() {
        let source = "float main() {\n  return 1 +;\n}\n";
        let span = line_span(source, 2);
        assert_eq!(&source[span.offset()..span.offset() + span.len()], "return 1 +;");
    }

    #[test]
    fn test_line_span_handles_crlf_and_out_of_range() {
        let source = "a\r\n  b\r\n";
        let span = line_span(source, 2);
        assert_eq!(&source[span.offset()..span.offset() + span.len()], "b");

        let span = line_span(source, 9);
        assert_eq!(span.offset(), source.len());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_from_parse_error() {
        let source = "void f() {\n  Foo x = 1;\n}";
        let err = ParseError::syntax("Expected ';' after expression, found 'x'", 2);
        let diag = SourceDiagnostic::from_parse_error("main.cnd", source, &err);
        assert_eq!(diag.to_string(), "Expected ';' after expression, found 'x'");
        assert_eq!(diag.line, 2);
        assert!(diag.help.is_none());
        assert_eq!(&source[diag.span.offset()..diag.span.offset() + diag.span.len()], "Foo x = 1;");
    }

    #[test]
    fn test_format_error_plain() {
        let source = "float main() {\n  return 1.5;\n}";
        let err = ParseError::invalid_literal("1.5", 2);
        let out = format_error("main.cnd", source, &err);
        assert_eq!(
            out,
            "invalid literal: Invalid integer literal '1.5'\n  --> main.cnd:2\n    |\n  2 |   return 1.5;\n"
        );
    }
}
