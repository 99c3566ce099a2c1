use super::types::{DiffSegment, SegmentKind};
use similar::{Algorithm, ChangeTag, TextDiff};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("{side} text is {size} bytes, the limit is {limit} bytes")]
    InputTooLarge {
        side: &'static str,
        size: usize,
        limit: usize,
    },

    #[error("Diff does not reconstruct the {0} text")]
    Inconsistent(&'static str),
}

/// Limits applied around the line diff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineLimits {
    pub max_input_bytes: usize,
    pub timeout: Option<Duration>,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            max_input_bytes: crate::constant::DEFAULT_MAX_INPUT_BYTES,
            timeout: None,
        }
    }
}

/// Compute the line diff between `old` and `new` as contiguous runs.
///
/// Each run joins consecutive lines with the same tag. A replaced block
/// yields its removed run before its added run.
pub fn diff_lines(
    old: &str,
    new: &str,
    limits: &EngineLimits,
) -> Result<Vec<DiffSegment>, EngineError> {
    check_size("Left", old, limits.max_input_bytes)?;
    check_size("Right", new, limits.max_input_bytes)?;

    let mut config = TextDiff::configure();
    config.algorithm(Algorithm::Myers);
    if let Some(timeout) = limits.timeout {
        config.timeout(timeout);
    }
    let diff = config.diff_lines(old, new);

    let mut segments: Vec<DiffSegment> = Vec::new();
    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Delete => SegmentKind::Removed,
            ChangeTag::Insert => SegmentKind::Added,
            ChangeTag::Equal => SegmentKind::Unchanged,
        };

        match segments.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => segments.push(DiffSegment::new(kind, change.value())),
        }
    }

    verify(&segments, old, new)?;
    debug!("Line diff produced {} segments", segments.len());
    Ok(segments)
}

fn check_size(side: &'static str, text: &str, limit: usize) -> Result<(), EngineError> {
    if text.len() > limit {
        return Err(EngineError::InputTooLarge {
            side,
            size: text.len(),
            limit,
        });
    }
    Ok(())
}

/// Rebuild one side of the diff from its segments.
pub fn reconstruct(segments: &[DiffSegment], skip: SegmentKind) -> String {
    segments
        .iter()
        .filter(|s| s.kind != skip)
        .map(|s| s.text.as_str())
        .collect()
}

fn verify(segments: &[DiffSegment], old: &str, new: &str) -> Result<(), EngineError> {
    if reconstruct(segments, SegmentKind::Added) != old {
        return Err(EngineError::Inconsistent("left"));
    }
    if reconstruct(segments, SegmentKind::Removed) != new {
        return Err(EngineError::Inconsistent("right"));
    }
    Ok(())
}
