//! Alignment resolution
//!
//! This module is the single source of truth for alignment validation: both
//! renderers route user-supplied alignment input through
//! [`normalize_alignments`] rather than validating ad hoc. The tag set is
//! closed; anything outside `left|center|right` is a fatal input error with
//! the offending value in the message (no silent fallback to a default).

use crate::utils::error::{RenderError, RenderResult};

/// Column alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Parse a trimmed, lower-cased tag
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "left" => Some(Alignment::Left),
            "center" => Some(Alignment::Center),
            "right" => Some(Alignment::Right),
            _ => None,
        }
    }

    /// Markdown delimiter-row marker for this alignment
    pub fn marker(&self) -> &'static str {
        match self {
            Alignment::Left => ":---",
            Alignment::Center => ":---:",
            Alignment::Right => "---:",
        }
    }
}

/// Alignment specification as supplied by the caller
///
/// Either a single comma-separated string (the CLI flag form) or an
/// already-split sequence of tags. Both normalize to the same ordered list
/// of [`Alignment`] values.
#[derive(Debug, Clone)]
pub enum AlignSpec {
    /// Comma-separated tag list, e.g. `"left,center,right"`
    Delimited(String),
    /// One tag per element
    Sequence(Vec<String>),
}

impl From<&str> for AlignSpec {
    fn from(spec: &str) -> Self {
        AlignSpec::Delimited(spec.to_string())
    }
}

impl From<String> for AlignSpec {
    fn from(spec: String) -> Self {
        AlignSpec::Delimited(spec)
    }
}

impl From<Vec<String>> for AlignSpec {
    fn from(tags: Vec<String>) -> Self {
        AlignSpec::Sequence(tags)
    }
}

impl From<&[&str]> for AlignSpec {
    fn from(tags: &[&str]) -> Self {
        AlignSpec::Sequence(tags.iter().map(|t| t.to_string()).collect())
    }
}

/// Normalize an alignment spec into an ordered list of [`Alignment`] tags.
///
/// Delimited input is split on commas; every element is trimmed and
/// lower-cased before parsing. Order and length are preserved and are not
/// reconciled against any column count here. An empty spec (empty sequence,
/// or delimited text that is blank after trimming) yields an empty list,
/// which renderers treat the same as "no spec given": every column defaults
/// to left.
pub fn normalize_alignments(spec: &AlignSpec) -> RenderResult<Vec<Alignment>> {
    let raw: Vec<&str> = match spec {
        AlignSpec::Delimited(text) => {
            if text.trim().is_empty() {
                return Ok(Vec::new());
            }
            text.split(',').collect()
        }
        AlignSpec::Sequence(tags) => tags.iter().map(String::as_str).collect(),
    };

    raw.into_iter()
        .map(|tag| {
            let normalized = tag.trim().to_lowercase();
            Alignment::from_tag(&normalized)
                .ok_or_else(|| RenderError::invalid_alignment(tag.trim()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_mapping() {
        assert_eq!(Alignment::Left.marker(), ":---");
        assert_eq!(Alignment::Center.marker(), ":---:");
        assert_eq!(Alignment::Right.marker(), "---:");
    }

    #[test]
    fn test_normalize_delimited() {
        let spec = AlignSpec::from("center,right");
        let tags = normalize_alignments(&spec).unwrap();
        assert_eq!(tags, vec![Alignment::Center, Alignment::Right]);
    }

    #[test]
    fn test_normalize_case_and_whitespace() {
        let cases = [
            " left , center , right ",
            "LEFT,CENTER,RIGHT",
            "Left,Center,Right",
        ];
        for case in cases {
            let tags = normalize_alignments(&AlignSpec::from(case)).unwrap();
            assert_eq!(
                tags,
                vec![Alignment::Left, Alignment::Center, Alignment::Right],
                "failed for input '{}'",
                case
            );
        }
    }

    #[test]
    fn test_normalize_sequence() {
        let spec = AlignSpec::from(vec!["CENTER".to_string(), "RIGHT".to_string()]);
        let tags = normalize_alignments(&spec).unwrap();
        assert_eq!(tags, vec![Alignment::Center, Alignment::Right]);
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let spec = AlignSpec::from("left,up");
        let err = normalize_alignments(&spec).unwrap_err();
        assert!(err.to_string().contains("'up'"));

        let spec = AlignSpec::from(vec!["left".to_string(), "down".to_string()]);
        let err = normalize_alignments(&spec).unwrap_err();
        assert!(err.to_string().contains("'down'"));
    }

    #[test]
    fn test_empty_spec_resolves_to_empty_list() {
        assert!(normalize_alignments(&AlignSpec::from("")).unwrap().is_empty());
        assert!(normalize_alignments(&AlignSpec::from("   ")).unwrap().is_empty());
        assert!(normalize_alignments(&AlignSpec::Sequence(Vec::new()))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_blank_element_in_list_is_rejected() {
        // The empty-spec rule applies to the whole spec, not to elements
        let err = normalize_alignments(&AlignSpec::from("left,,right")).unwrap_err();
        assert!(matches!(err, RenderError::InvalidAlignment { .. }));
    }
}
