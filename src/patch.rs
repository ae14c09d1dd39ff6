//! Declaration-level patching of Symbols source documents.
//!
//! The host documents are treated as opaque text: we locate a named
//! `export const` declaration by scanning for its introducing tokens and then
//! balancing braces from the one that opens its body, skipping braces that
//! only appear inside string literals or comments. A naive non-greedy regex
//! breaks down as soon as the declaration nests further blocks (the generated
//! grid nests them extensively), so every patch mode goes through the single
//! [`find_extent`] primitive instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token sequence introducing a top-level declaration in the host document.
const EXPORT_TOKEN: &str = "export const";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Half-open byte span `[start, end)` of a declaration or sub-block,
/// inclusive of its delimiters.
pub struct Extent {
    /// Byte offset where the span begins.
    pub start: usize,
    /// Byte offset one past the closing delimiter.
    pub end: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// What a patch operation did to the document.
pub enum PatchOutcome {
    /// An existing declaration was found and replaced in full.
    Replaced,
    /// No declaration was found; the fragment was inserted at the anchor.
    Inserted,
    /// At least one numeric field was rewritten in place.
    FieldsPatched,
    /// The declaration and sub-block were found but no field needed changing.
    Unchanged,
}

#[derive(Debug, Error, PartialEq, Eq)]
/// Failures surfaced by the field-level patch mode.
pub enum PatchError {
    /// The named declaration is absent. Only the field-level mode reports
    /// this; whole-block patching falls back to insertion instead.
    #[error("declaration `{0}` not found in document")]
    DeclarationNotFound(String),
    /// The declaration was found but the expected sub-block inside it was
    /// not, meaning the document's shape no longer matches what the patch
    /// depends on.
    #[error("sub-block `{selector}` not found inside declaration `{declaration}`")]
    SubBlockNotFound {
        /// Declaration that was located successfully.
        declaration: String,
        /// Selector token that failed to match inside it.
        selector: String,
    },
}

#[derive(Debug)]
/// Result of a successful patch: the full new document plus what happened.
///
/// The text is always a complete document; callers either persist it whole or
/// discard it, never a prefix.
pub struct PatchResult {
    /// The complete patched document text.
    pub text: String,
    /// Which path the patch took.
    pub outcome: PatchOutcome,
}

#[must_use]
/// Find the extent of the brace-delimited block that begins at or after
/// `from`: scan forward to the first `{`, then balance nested braces until
/// the matching `}`. The returned span starts at `from`, so a caller that
/// anchors `from` at a declaration's first token gets the whole declaration,
/// name through closing brace.
///
/// Braces inside `'`, `"` and backtick string literals are skipped, as are
/// `//` and `/* */` comments; a backslash escapes the following character.
/// Template-literal interpolations are not parsed, but a `${ }` pair outside
/// a nested string balances itself so the scan stays aligned.
///
/// Returns `None` when no opening brace follows `from` or the braces never
/// balance before the document ends.
pub fn find_extent(text: &str, from: usize) -> Option<Extent> {
    let bytes = text.as_bytes();
    let mut i = text[from..].find('{')? + from;
    let mut depth = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(Extent {
                        start: from,
                        end: i + 1,
                    });
                }
            }
            quote @ (b'\'' | b'"' | b'`') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                while i + 1 < bytes.len() && !(bytes[i] == b'*' && bytes[i + 1] == b'/') {
                    i += 1;
                }
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }
    None
}

#[must_use]
/// Replace the named declaration with `fragment`, or insert `fragment` when
/// the declaration is absent. Everything outside the declaration's extent is
/// preserved byte for byte.
///
/// The insertion anchor is the last top-level `export const` in the
/// document: the fragment is spliced immediately before it with a blank-line
/// separator, or appended at the end (after a blank line) when no anchor
/// exists anywhere. An absent declaration is a recoverable condition, never
/// an error.
pub fn patch_declaration(document: &str, name: &str, fragment: &str) -> PatchResult {
    if let Some(start) = declaration_start(document, name) {
        if let Some(extent) = find_extent(document, start) {
            let mut text = String::with_capacity(document.len() + fragment.len());
            text.push_str(&document[..extent.start]);
            text.push_str(fragment);
            text.push_str(&document[extent.end..]);
            return PatchResult {
                text,
                outcome: PatchOutcome::Replaced,
            };
        }
    }
    let text = match document.rfind(EXPORT_TOKEN) {
        Some(anchor) => format!(
            "{}{fragment}\n\n{}",
            &document[..anchor],
            &document[anchor..]
        ),
        None => format!("{document}\n\n{fragment}"),
    };
    PatchResult {
        text,
        outcome: PatchOutcome::Inserted,
    }
}

/// Rewrite the numeric literals for the named `fields` inside the first
/// `selector` sub-block of the named declaration, leaving every other byte of
/// the document untouched. Fields absent from the sub-block are skipped
/// silently; the outcome records whether anything actually changed.
///
/// Each replacement rescans the document from scratch, so spans stay valid
/// as literal widths change.
///
/// # Errors
///
/// [`PatchError::DeclarationNotFound`] when the declaration is absent (field
/// mode has no insertion fallback) and [`PatchError::SubBlockNotFound`] when
/// the located declaration no longer contains the expected sub-block.
pub fn patch_numeric_fields(
    document: &str,
    name: &str,
    selector: &str,
    fields: &[(&str, i64)],
) -> Result<PatchResult, PatchError> {
    let mut text = document.to_string();
    let mut touched = false;
    for (field, value) in fields {
        let sub = sub_block_extent(&text, name, selector)?;
        if let Some(span) = numeric_literal_span(&text, sub, field) {
            let literal = value.to_string();
            if text[span.start..span.end] != literal {
                text.replace_range(span.start..span.end, &literal);
                touched = true;
            }
        }
    }
    let outcome = if touched {
        PatchOutcome::FieldsPatched
    } else {
        PatchOutcome::Unchanged
    };
    Ok(PatchResult { text, outcome })
}

/// Locate the byte offset of `export const <name>`, requiring the match to
/// end at an identifier boundary so `GridSelection` cannot match a longer
/// name like `GridSelectionLegacy`.
fn declaration_start(document: &str, name: &str) -> Option<usize> {
    let needle = format!("{EXPORT_TOKEN} {name}");
    let mut search = 0;
    while let Some(pos) = document[search..].find(&needle) {
        let at = search + pos;
        let after = at + needle.len();
        let at_boundary = document[after..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric() && c != '_');
        if at_boundary {
            return Some(at);
        }
        search = after;
    }
    None
}

/// Extent of the first `selector` sub-block inside the named declaration.
fn sub_block_extent(document: &str, name: &str, selector: &str) -> Result<Extent, PatchError> {
    let start = declaration_start(document, name)
        .ok_or_else(|| PatchError::DeclarationNotFound(name.to_string()))?;
    let decl = find_extent(document, start)
        .ok_or_else(|| PatchError::DeclarationNotFound(name.to_string()))?;
    let missing = || PatchError::SubBlockNotFound {
        declaration: name.to_string(),
        selector: selector.to_string(),
    };
    let key = format!("{selector}:");
    let rel = document[decl.start..decl.end]
        .find(&key)
        .ok_or_else(missing)?;
    find_extent(document, decl.start + rel)
        .filter(|sub| sub.end <= decl.end)
        .ok_or_else(missing)
}

/// Span of the first numeric literal following `<field>:` inside `sub`, or
/// `None` when the field is not present there.
fn numeric_literal_span(document: &str, sub: Extent, field: &str) -> Option<Extent> {
    let key = format!("{field}:");
    let rel = document[sub.start..sub.end].find(&key)? + key.len();
    let bytes = document.as_bytes();
    let mut start = sub.start + rel;
    while start < sub.end && bytes[start].is_ascii_whitespace() {
        start += 1;
    }
    let mut end = start;
    if end < sub.end && bytes[end] == b'-' {
        end += 1;
    }
    let digits_from = end;
    while end < sub.end && bytes[end].is_ascii_digit() {
        end += 1;
    }
    (end > digits_from).then_some(Extent { start, end })
}

#[cfg(test)]
#[path = "tests/patch.rs"]
mod tests;
