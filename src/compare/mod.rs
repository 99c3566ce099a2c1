//! Line-level text comparison
//!
//! Raw text pairs go through the line diff engine, then one of two
//! alignment policies turns the segment runs into a left and a right pane.

mod align;
mod engine;
mod types;

use thiserror::Error;
use tracing::{info, warn};

pub use align::{AlignedPanes, align};
pub use engine::{EngineError, EngineLimits, diff_lines, reconstruct};
pub use types::{
    AlignmentPolicy, Annotation, AnnotationType, CompareOptions, CompareOutcome, CompareRequest,
    DiffSegment, EmptyInputGuard, LineClass, Pane, RenderedLine, SegmentKind,
    split_history_record,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Both inputs must be filled to compare.")]
    EitherEmpty,

    #[error("Enter text in at least one input to compare.")]
    BothEmpty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Diff failed: {0}")]
    Engine(#[from] EngineError),
}

/// Refuse blank inputs according to `guard`. Whitespace-only counts as blank.
pub fn check_inputs(request: &CompareRequest, guard: EmptyInputGuard) -> Result<(), ValidationError> {
    let left_blank = request.left.trim().is_empty();
    let right_blank = request.right.trim().is_empty();

    match guard {
        EmptyInputGuard::EitherEmpty if left_blank || right_blank => {
            Err(ValidationError::EitherEmpty)
        }
        EmptyInputGuard::BothEmpty if left_blank && right_blank => Err(ValidationError::BothEmpty),
        _ => Ok(()),
    }
}

/// Run one comparison: guard, diff, align.
pub fn compare(
    request: &CompareRequest,
    options: &CompareOptions,
    limits: &EngineLimits,
) -> Result<CompareOutcome, CompareError> {
    if let Err(e) = check_inputs(request, options.empty_guard) {
        warn!("Comparison rejected: {}", e);
        return Err(e.into());
    }

    let segments = diff_lines(&request.left, &request.right, limits)?;
    let AlignedPanes {
        left,
        right,
        identical,
    } = align(&segments, options.policy);

    info!(
        "Compared {} segments with {:?} policy, identical: {}",
        segments.len(),
        options.policy,
        identical
    );

    Ok(CompareOutcome {
        policy: options.policy,
        left,
        right,
        identical,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::NO_DIFFERENCES;

    fn run(left: &str, right: &str, options: CompareOptions) -> Result<CompareOutcome, CompareError> {
        compare(
            &CompareRequest::new(left, right),
            &options,
            &EngineLimits::default(),
        )
    }

    /// Non-blank source lines recovered from a padded pane.
    fn strip_padded(pane: &Pane) -> Vec<String> {
        pane.text()
            .split('\n')
            .filter(|l| !l.is_empty())
            .map(|l| l[2..].to_string())
            .collect()
    }

    fn non_blank(text: &str) -> Vec<String> {
        text.split('\n')
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn padded_rejects_either_blank_input() {
        let options = CompareOptions::padded();
        assert_eq!(
            run("", "text", options),
            Err(CompareError::Validation(ValidationError::EitherEmpty))
        );
        assert_eq!(
            run("text", "  \n\t", options),
            Err(CompareError::Validation(ValidationError::EitherEmpty))
        );
    }

    #[test]
    fn filtered_rejects_only_when_both_blank() {
        let options = CompareOptions::filtered();
        assert_eq!(
            run("", "", options),
            Err(CompareError::Validation(ValidationError::BothEmpty))
        );

        let outcome = run("x", "", options).unwrap();
        assert_eq!(outcome.left.lines.len(), 1);
        assert_eq!(outcome.left.lines[0].text, "x");
        assert_eq!(outcome.left.lines[0].class, LineClass::Removed);
        assert!(outcome.right.lines.is_empty());
    }

    #[test]
    fn guard_and_policy_are_independent() {
        let options = CompareOptions {
            policy: AlignmentPolicy::Filtered,
            empty_guard: EmptyInputGuard::EitherEmpty,
            record_history: false,
        };
        assert!(run("x", "", options).is_err());
    }

    #[test]
    fn padded_scenario() {
        let outcome = run("line1\nline2", "line1\nline3", CompareOptions::padded()).unwrap();
        assert_eq!(outcome.left.text(), "  line1\n- line2");
        assert_eq!(outcome.right.text(), "  line1\n\n+ line3");
        assert_eq!(outcome.left.annotations, vec![Annotation::removed(1)]);
        assert_eq!(outcome.right.annotations, vec![Annotation::added(2)]);
        assert_eq!(
            outcome.history_record(),
            "  line1\n- line2\n---\n  line1\n\n+ line3"
        );
    }

    #[test]
    fn inserted_blank_line_is_not_reported_identical() {
        let outcome = run("a\nb", "a\n\nb", CompareOptions::padded()).unwrap();
        assert!(!outcome.identical);
        assert_eq!(outcome.left.text(), "  a\n  b");
        assert_eq!(outcome.right.text(), "  a\n\n  b");
        assert!(outcome.left.annotations.is_empty());
        assert!(outcome.right.annotations.is_empty());
    }

    #[test]
    fn padded_panes_recover_both_inputs() {
        let pairs = [
            ("a\nb\nc\n", "a\nc\nd\n"),
            ("one\ntwo\nthree", "zero\none\nthree\nfour"),
            ("x\n\ny\n", "y\n\nx\n"),
            ("keep\nthis\n", "drop\nthat\n"),
        ];
        for (a, b) in pairs {
            let outcome = run(a, b, CompareOptions::padded()).unwrap();
            assert_eq!(strip_padded(&outcome.left), non_blank(a), "left of {a:?}");
            assert_eq!(strip_padded(&outcome.right), non_blank(b), "right of {b:?}");
        }
    }

    #[test]
    fn identical_inputs_produce_sentinel() {
        let text = "same\nlines\nhere\n";
        let outcome = run(text, text, CompareOptions::padded()).unwrap();
        assert!(outcome.identical);
        assert_eq!(outcome.left.text(), NO_DIFFERENCES);
        assert_eq!(outcome.right.text(), NO_DIFFERENCES);
        assert!(outcome.left.annotations.is_empty());
        assert!(outcome.right.annotations.is_empty());
        assert_eq!(outcome.history_record(), NO_DIFFERENCES);
    }

    #[test]
    fn engine_failure_is_reported() {
        let limits = EngineLimits {
            max_input_bytes: 2,
            timeout: None,
        };
        let result = compare(
            &CompareRequest::new("abc", "ab"),
            &CompareOptions::padded(),
            &limits,
        );
        assert!(matches!(result, Err(CompareError::Engine(_))));
    }
}
