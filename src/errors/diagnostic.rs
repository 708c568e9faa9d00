//! Pretty error reporting using ariadne
//!
//! Provides colorful, user-friendly error messages with source context.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use std::ops::Range;

use crate::errors::TeenyError;

fn build_report(
    source: &str,
    filename: &str,
    error: &TeenyError,
    colored: bool,
) -> Option<Report<'static, Range<usize>>> {
    let (kind, span) = match error {
        TeenyError::Lexer { span, .. } => ("Lexing error", *span),
        TeenyError::Syntax { span, .. } => ("Syntax error", *span),
        TeenyError::Io(_) => return None,
    };

    // Spans may point at the implicit trailing newline, one past the end.
    let range: Range<usize> = span.into();
    let end = range.end.min(source.len());
    let start = range.start.min(end);
    let (line, col) = offset_to_line_col(source, start);

    let report = Report::build(ReportKind::Error, start..end)
        .with_config(Config::default().with_color(colored))
        .with_message(kind)
        .with_label(
            Label::new(start..end)
                .with_message(error.message())
                .with_color(Color::Red),
        )
        .with_note(format!("at {}:{}:{}", filename, line, col))
        .finish();

    Some(report)
}

/// Print an error with source context to stderr
pub fn print_error(source: &str, filename: &str, error: &TeenyError) {
    let Some(report) = build_report(source, filename, error, true) else {
        eprintln!("{}", error);
        return;
    };

    if let Err(e) = report.eprint(Source::from(source)) {
        eprintln!("{} (failed to render report: {})", error, e);
    }
}

/// Format an error as a string (for testing)
pub fn format_error(source: &str, filename: &str, error: &TeenyError) -> String {
    let Some(report) = build_report(source, filename, error, false) else {
        return error.to_string();
    };

    let mut output = Vec::new();
    if report.write(Source::from(source), &mut output).is_err() {
        return error.to_string();
    }

    String::from_utf8_lossy(&output).into_owned()
}

/// Get the line and column for a byte offset
pub fn offset_to_line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }

    (line, col)
}
