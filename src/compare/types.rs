use crate::constant::{HISTORY_PANE_SEPARATOR, NO_DIFFERENCES};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Added,
    Removed,
    Unchanged,
}

/// One contiguous run of lines sharing a classification.
/// `text` keeps the line breaks exactly as the diff engine produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSegment {
    pub kind: SegmentKind,
    pub text: String,
}

impl DiffSegment {
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// How the two panes are built from a segment sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentPolicy {
    /// Mirrored panes kept in step with blank padding rows, plus annotations.
    #[default]
    Padded,
    /// Left drops additions, right drops removals, each pane numbered on its own.
    Filtered,
}

impl AlignmentPolicy {
    pub fn label(self) -> &'static str {
        match self {
            AlignmentPolicy::Padded => "Padded (copyable)",
            AlignmentPolicy::Filtered => "Two columns",
        }
    }
}

/// When a comparison is refused before diffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyInputGuard {
    /// Reject if either input is blank.
    #[default]
    EitherEmpty,
    /// Reject only if both inputs are blank.
    BothEmpty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    pub policy: AlignmentPolicy,
    pub empty_guard: EmptyInputGuard,
    pub record_history: bool,
}

impl CompareOptions {
    /// Annotated mirrored panes, strict guard, results recorded.
    pub fn padded() -> Self {
        Self {
            policy: AlignmentPolicy::Padded,
            empty_guard: EmptyInputGuard::EitherEmpty,
            record_history: true,
        }
    }

    /// Walkable two-column view, lenient guard, nothing recorded.
    pub fn filtered() -> Self {
        Self {
            policy: AlignmentPolicy::Filtered,
            empty_guard: EmptyInputGuard::BothEmpty,
            record_history: false,
        }
    }
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self::padded()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Added,
    Removed,
    Unchanged,
    Padding,
    Notice,
}

impl LineClass {
    pub fn css_name(self) -> &'static str {
        match self {
            LineClass::Added => "added-line",
            LineClass::Removed => "removed-line",
            LineClass::Unchanged => "unchanged-line",
            LineClass::Padding => "padding-line",
            LineClass::Notice => "notice-line",
        }
    }
}

/// One visual row of a pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// 1-based display number
    pub number: usize,
    pub text: String,
    pub class: LineClass,
}

impl RenderedLine {
    pub fn marker(&self) -> &'static str {
        match self.class {
            LineClass::Added => "+ ",
            LineClass::Removed => "- ",
            LineClass::Unchanged => "  ",
            LineClass::Padding | LineClass::Notice => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationType {
    Info,
    Error,
}

/// Gutter note keyed by the shared running line counter (0-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub row: usize,
    pub column: usize,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: AnnotationType,
}

impl Annotation {
    pub fn added(row: usize) -> Self {
        Self {
            row,
            column: 0,
            text: "Added".to_string(),
            kind: AnnotationType::Info,
        }
    }

    pub fn removed(row: usize) -> Self {
        Self {
            row,
            column: 0,
            text: "Removed".to_string(),
            kind: AnnotationType::Error,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pane {
    pub lines: Vec<RenderedLine>,
    pub annotations: Vec<Annotation>,
}

impl Pane {
    pub(crate) fn push(&mut self, text: &str, class: LineClass) {
        let number = self.lines.len() + 1;
        self.lines.push(RenderedLine {
            number,
            text: text.to_string(),
            class,
        });
    }

    pub(crate) fn notice(text: &str) -> Self {
        let mut pane = Self::default();
        pane.push(text, LineClass::Notice);
        pane
    }

    /// Marker-prefixed text suitable for copy and paste.
    pub fn text(&self) -> String {
        let joined = self
            .lines
            .iter()
            .map(|line| format!("{}{}", line.marker(), line.text))
            .collect::<Vec<_>>()
            .join("\n");
        joined.trim_end_matches(['\n', '\r']).to_string()
    }

    pub fn annotation_at(&self, row: usize) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.row == row)
    }
}

/// Raw texts handed to a comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareRequest {
    pub left: String,
    pub right: String,
}

impl CompareRequest {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOutcome {
    pub policy: AlignmentPolicy,
    pub left: Pane,
    pub right: Pane,
    /// The whole diff was a single unchanged run
    pub identical: bool,
}

impl CompareOutcome {
    /// The string stored in the compare history for this result.
    pub fn history_record(&self) -> String {
        if self.identical && self.policy == AlignmentPolicy::Padded {
            return NO_DIFFERENCES.to_string();
        }
        format!(
            "{}{}{}",
            self.left.text(),
            HISTORY_PANE_SEPARATOR,
            self.right.text()
        )
    }
}

/// Splits a stored compare result back into left and right pane text.
pub fn split_history_record(record: &str) -> (String, String) {
    match record.split_once(HISTORY_PANE_SEPARATOR) {
        Some((left, right)) => (left.to_string(), right.to_string()),
        None => (record.to_string(), String::new()),
    }
}
