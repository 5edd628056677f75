//! Placeholder substitution on a working document.
//!
//! Tokens are processed one at a time, in map order. For each token the
//! engine first collects every text frame whose visible text contains it,
//! then rewrites a single run per frame. The run keeps its font, so the
//! replacement inherits the template's formatting.
//!
//! A token whose characters are spread over several runs cannot be located
//! in any one run. Such frames are left as they are and reported. So are
//! occurrences of a token outside the rewritten run.

use factsheet_idf::{Document, ElementKind, Paragraph, TextFrame};
use factsheet_types::FormatWarning;

/// An ordered list of `(token, replacement)` pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceholderMap {
    entries: Vec<(String, String)>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair. Setting a token that is already present replaces its
    /// value but keeps its original position.
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        let token = token.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(t, _)| *t == token) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((token, value)),
        }
    }

    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(token, value);
        self
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What a substitution pass did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubstitutionReport {
    /// Number of (token, frame) replacements made.
    pub replaced: usize,
    pub warnings: Vec<FormatWarning>,
}

/// Replaces every token of `map` in `doc`, in map order.
pub fn substitute(doc: &mut Document, map: &PlaceholderMap) -> SubstitutionReport {
    let mut report = SubstitutionReport::default();

    for (token, value) in map.iter() {
        if token.is_empty() {
            continue;
        }

        // Phase 1: locate candidate frames by their visible text.
        let candidates: Vec<(usize, usize)> = doc
            .pages
            .iter()
            .enumerate()
            .flat_map(|(pi, page)| {
                page.elements
                    .iter()
                    .enumerate()
                    .filter_map(move |(ei, element)| match &element.kind {
                        ElementKind::TextFrame(frame) if frame.text().contains(token) => Some((pi, ei)),
                        _ => None,
                    })
            })
            .collect();

        // Phase 2: rewrite one run per candidate.
        for (pi, ei) in candidates {
            let element = &mut doc.pages[pi].elements[ei];
            let label = element.label();
            let ElementKind::TextFrame(frame) = &mut element.kind else {
                continue;
            };
            if !substitute_in_frame(frame, token, value) {
                report.warnings.push(FormatWarning::new(
                    label,
                    format!("{token} spans several runs and was left unchanged"),
                ));
                continue;
            }
            report.replaced += 1;
            log::debug!("Replaced {token} in '{label}'");
            if frame.text().contains(token) && !value.contains(token) {
                report.warnings.push(FormatWarning::new(
                    label,
                    format!("{token} occurs in more than one run; only the first was replaced"),
                ));
            }
        }
    }

    report
}

/// Returns `false` when no single run holds the whole token.
fn substitute_in_frame(frame: &mut TextFrame, token: &str, value: &str) -> bool {
    let Some((pi, ri)) = locate_run(frame, token) else {
        return false;
    };

    let mut lines = value.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l));
    let first = lines.next().unwrap_or_default();

    let run = &mut frame.paragraphs[pi].runs[ri];
    run.text = run.text.replace(token, first);
    let font = run.font.clone();

    for line in lines {
        frame.paragraphs.push(Paragraph::single(line, font.clone()));
    }
    true
}

/// The first run of the first paragraph if it holds the token, otherwise the
/// first run anywhere that does.
fn locate_run(frame: &TextFrame, token: &str) -> Option<(usize, usize)> {
    let leading = frame
        .paragraphs
        .first()
        .and_then(|p| p.runs.first())
        .is_some_and(|r| r.text.contains(token));
    if leading {
        return Some((0, 0));
    }
    frame.paragraphs.iter().enumerate().find_map(|(pi, p)| {
        p.runs
            .iter()
            .position(|r| r.text.contains(token))
            .map(|ri| (pi, ri))
    })
}
