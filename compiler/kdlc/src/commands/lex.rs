//! The `lex` command: print a document's token stream.

use std::fmt::Write as _;

use ariadne::{Color, Label, Report, ReportKind, Source};
use kdl_lexer::{LexError, Scanner, SourceBuffer, Token};

use super::read_file;

/// Options for `kdlc lex`.
#[derive(Clone, Debug)]
pub struct LexOptions {
    /// Print WS and NEWLINE tokens.
    pub show_trivia: bool,
}

impl Default for LexOptions {
    fn default() -> Self {
        Self { show_trivia: true }
    }
}

/// Lex a file and display the token stream.
///
/// Returns `false` if the file failed to tokenize; the error has already
/// been reported on stderr.
pub fn lex_file(path: &str, options: &LexOptions) -> bool {
    let content = read_file(path);
    let buffer = SourceBuffer::new(&content);

    match scan_all(&buffer) {
        Ok(tokens) => {
            print!("{}", render_tokens(path, &tokens, options));
            true
        }
        Err(err) => {
            tracing::debug!(%err, path, "lex failed");
            report_error(path, &content, &buffer, &err);
            false
        }
    }
}

/// Drain a scanner over `buffer`, stopping at the first error.
fn scan_all(buffer: &SourceBuffer) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(buffer);
    let mut tokens = Vec::new();
    while !scanner.is_finished() {
        if let Some(token) = scanner.next_token()? {
            tokens.push(token);
        }
    }
    Ok(tokens)
}

fn render_tokens(path: &str, tokens: &[Token], options: &LexOptions) -> String {
    let shown: Vec<&Token> = tokens
        .iter()
        .filter(|tok| options.show_trivia || !tok.kind.is_trivia())
        .collect();

    let mut out = format!("Tokens for '{}' ({} tokens):\n", path, shown.len());
    for tok in shown {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "  {tok}");
    }
    out
}

/// Label range for an error. Offsets are chars, which is what `ariadne`
/// counts by default. An error at end of input gets an empty label there.
fn error_range(err: &LexError, buffer: &SourceBuffer) -> std::ops::Range<usize> {
    let start = err.pos.min(buffer.len());
    match buffer.get(start) {
        Some(_) => start..start + 1,
        None => start..start,
    }
}

fn report_error(path: &str, content: &str, buffer: &SourceBuffer, err: &LexError) {
    let range = error_range(err, buffer);
    let report = Report::build(ReportKind::Error, path, range.start)
        .with_message(err.message())
        .with_label(
            Label::new((path, range))
                .with_message(format!("while scanning {:?}", err.context))
                .with_color(Color::Red),
        )
        .finish();

    if let Err(io_err) = report.eprint((path, Source::from(content))) {
        eprintln!("{path}: {err} (failed to render report: {io_err})");
    }
}

#[cfg(test)]
mod tests;
