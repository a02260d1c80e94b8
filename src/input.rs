//! Input adaptation
//!
//! Turns raw scenario text into typed detector input. Edge lists are plain
//! text, one `from to` pair per line; Banker scenarios are JSON or TOML
//! documents with exactly three fields.

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::core::{Edge, NodeId};
use crate::detector::{BankerSimulation, BankersDeadlockDetector};
use crate::error::{InputFormatError, InputKind, InputShapeError};

const EDGE_LIST_HELP: &str =
    "Each line needs two integer process ids separated by whitespace, e.g. `1 2`";
const BANKER_HELP: &str = "Expected a document with exactly the fields `available`, \
                           `allocation` and `request`, holding non-negative integers";

/// Banker scenario as read from a JSON or TOML document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BankerInput {
    pub available: Vec<u64>,
    pub allocation: Vec<Vec<u64>>,
    pub request: Vec<Vec<u64>>,
}

impl BankerInput {
    pub fn simulate(&self) -> Result<BankerSimulation, InputShapeError> {
        BankersDeadlockDetector::new().simulate(&self.available, &self.allocation, &self.request)
    }
}

/// Document syntax of a Banker scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankerSyntax {
    Json,
    Toml,
}

impl BankerSyntax {
    /// `.toml` files are TOML, everything else (stdin included) is JSON
    pub fn from_path(path: Option<&Path>) -> Self {
        match path.and_then(|p| p.extension()).and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => BankerSyntax::Toml,
            _ => BankerSyntax::Json,
        }
    }
}

fn format_error(
    kind: InputKind,
    source_name: &str,
    text: &str,
    reason: String,
    span: Option<SourceSpan>,
) -> InputFormatError {
    InputFormatError {
        source_name: source_name.to_string(),
        kind,
        reason,
        source_code: NamedSource::new(source_name, text.to_string()),
        span,
        help: Some(
            match kind {
                InputKind::EdgeList => EDGE_LIST_HELP,
                InputKind::Banker => BANKER_HELP,
            }
            .to_string(),
        ),
    }
}

/// Whitespace-separated tokens of `line` with their byte offsets
fn tokens(line: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (i, c) in line.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push((s, &line[s..i]));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push((s, &line[s..]));
    }
    tokens
}

/// Parse an edge list. Blank lines and lines starting with `#` are skipped.
pub fn parse_edge_list(source_name: &str, text: &str) -> Result<Vec<Edge>, InputFormatError> {
    let mut edges = Vec::new();
    let mut line_start = 0;

    for (line_idx, raw_line) in text.split('\n').enumerate() {
        let line_no = line_idx + 1;
        let offset = line_start;
        line_start += raw_line.len() + 1;

        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fail = |reason: String, at: usize, len: usize| {
            format_error(
                InputKind::EdgeList,
                source_name,
                text,
                format!("line {line_no}: {reason}"),
                Some((offset + at, len).into()),
            )
        };

        let tokens = tokens(line);
        let ids = match tokens.as_slice() {
            [from, to] => [*from, *to],
            [(at, token)] => {
                return Err(fail(
                    format!("expected two process ids, found only '{token}'"),
                    *at,
                    token.len(),
                ));
            }
            [_, _, (at, token), ..] => {
                return Err(fail(
                    format!("unexpected extra token '{token}'"),
                    *at,
                    token.len(),
                ));
            }
            [] => continue,
        };

        let mut parsed = [0 as NodeId; 2];
        for (slot, (at, token)) in parsed.iter_mut().zip(ids) {
            *slot = token.parse::<NodeId>().map_err(|_| {
                fail(
                    format!("'{token}' is not an integer process id"),
                    at,
                    token.len(),
                )
            })?;
        }

        edges.push(Edge::new(parsed[0], parsed[1]));
    }

    Ok(edges)
}

/// Byte offset of a 1-based line/column position, clamped to the text
fn line_column_offset(text: &str, line: usize, column: usize) -> usize {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(text.len())
}

fn point_span(text: &str, offset: usize) -> SourceSpan {
    let len = usize::from(offset < text.len());
    (offset, len).into()
}

pub fn parse_banker_json(source_name: &str, text: &str) -> Result<BankerInput, InputFormatError> {
    serde_json::from_str(text).map_err(|e| {
        let offset = line_column_offset(text, e.line(), e.column());
        format_error(
            InputKind::Banker,
            source_name,
            text,
            e.to_string(),
            Some(point_span(text, offset)),
        )
    })
}

pub fn parse_banker_toml(source_name: &str, text: &str) -> Result<BankerInput, InputFormatError> {
    toml::from_str(text).map_err(|e| {
        let span = e
            .span()
            .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));
        format_error(
            InputKind::Banker,
            source_name,
            text,
            e.message().trim().to_string(),
            span,
        )
    })
}

pub fn parse_banker(
    source_name: &str,
    text: &str,
    syntax: BankerSyntax,
) -> Result<BankerInput, InputFormatError> {
    match syntax {
        BankerSyntax::Json => parse_banker_json(source_name, text),
        BankerSyntax::Toml => parse_banker_toml(source_name, text),
    }
}
