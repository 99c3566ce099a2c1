use super::types::{AlignmentPolicy, Annotation, DiffSegment, LineClass, Pane, SegmentKind};
use crate::constant::NO_DIFFERENCES;

/// Two panes built from one segment sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPanes {
    pub left: Pane,
    pub right: Pane,
    pub identical: bool,
}

/// Build the left and right panes for `segments` under `policy`.
pub fn align(segments: &[DiffSegment], policy: AlignmentPolicy) -> AlignedPanes {
    let identical = segments.len() == 1 && segments[0].kind == SegmentKind::Unchanged;

    match policy {
        AlignmentPolicy::Padded if identical => AlignedPanes {
            left: Pane::notice(NO_DIFFERENCES),
            right: Pane::notice(NO_DIFFERENCES),
            identical,
        },
        AlignmentPolicy::Padded => {
            let (left, right) = padded(segments);
            AlignedPanes {
                left,
                right,
                identical,
            }
        }
        AlignmentPolicy::Filtered => {
            let (left, right) = filtered(segments);
            AlignedPanes {
                left,
                right,
                identical,
            }
        }
    }
}

fn padded(segments: &[DiffSegment]) -> (Pane, Pane) {
    let mut left = Pane::default();
    let mut right = Pane::default();
    // Shared across both panes and all segment kinds
    let mut line_num = 0usize;

    for segment in segments {
        let lines: Vec<&str> = segment
            .text
            .split('\n')
            .filter(|line| !line.is_empty())
            .collect();

        // A run of blank lines still leaves one empty row where its text would go
        if lines.is_empty() {
            match segment.kind {
                SegmentKind::Added => right.push("", LineClass::Padding),
                SegmentKind::Removed => left.push("", LineClass::Padding),
                SegmentKind::Unchanged => {
                    left.push("", LineClass::Padding);
                    right.push("", LineClass::Padding);
                }
            }
            continue;
        }

        for (idx, line) in lines.iter().enumerate() {
            match segment.kind {
                SegmentKind::Added => {
                    right.push(line, LineClass::Added);
                    right.annotations.push(Annotation::added(line_num + idx));
                    left.push("", LineClass::Padding);
                }
                SegmentKind::Removed => {
                    left.push(line, LineClass::Removed);
                    left.annotations.push(Annotation::removed(line_num + idx));
                    right.push("", LineClass::Padding);
                }
                SegmentKind::Unchanged => {
                    left.push(line, LineClass::Unchanged);
                    right.push(line, LineClass::Unchanged);
                }
            }
        }

        line_num += lines.len();
    }

    (left, right)
}

fn filtered(segments: &[DiffSegment]) -> (Pane, Pane) {
    let mut left = Pane::default();
    let mut right = Pane::default();

    for segment in segments {
        let class = match segment.kind {
            SegmentKind::Added => LineClass::Added,
            SegmentKind::Removed => LineClass::Removed,
            SegmentKind::Unchanged => LineClass::Unchanged,
        };

        for line in split_lines(&segment.text) {
            if segment.kind != SegmentKind::Added {
                left.push(line, class);
            }
            if segment.kind != SegmentKind::Removed {
                right.push(line, class);
            }
        }
    }

    (left, right)
}

/// Split on line breaks, dropping the empty tail left by a final newline.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::types::AnnotationType;

    fn seg(kind: SegmentKind, text: &str) -> DiffSegment {
        DiffSegment::new(kind, text)
    }

    fn texts(pane: &Pane) -> Vec<(&str, LineClass)> {
        pane.lines
            .iter()
            .map(|l| (l.text.as_str(), l.class))
            .collect()
    }

    #[test]
    fn padded_keeps_panes_in_step() {
        let segments = vec![
            seg(SegmentKind::Unchanged, "line1\n"),
            seg(SegmentKind::Removed, "line2\n"),
            seg(SegmentKind::Added, "line3\n"),
        ];
        let panes = align(&segments, AlignmentPolicy::Padded);

        assert!(!panes.identical);
        assert_eq!(panes.left.lines.len(), panes.right.lines.len());
        assert_eq!(panes.left.text(), "  line1\n- line2");
        assert_eq!(panes.right.text(), "  line1\n\n+ line3");

        assert_eq!(panes.left.annotations, vec![Annotation::removed(1)]);
        assert_eq!(panes.right.annotations, vec![Annotation::added(2)]);
        assert_eq!(panes.right.annotations[0].kind, AnnotationType::Info);
    }

    #[test]
    fn padded_counter_spans_every_segment() {
        let segments = vec![
            seg(SegmentKind::Unchanged, "a\nb\nc\n"),
            seg(SegmentKind::Added, "x\ny\n"),
            seg(SegmentKind::Unchanged, "d\n"),
            seg(SegmentKind::Removed, "e\n"),
        ];
        let panes = align(&segments, AlignmentPolicy::Padded);

        let added_rows: Vec<usize> = panes.right.annotations.iter().map(|a| a.row).collect();
        let removed_rows: Vec<usize> = panes.left.annotations.iter().map(|a| a.row).collect();
        assert_eq!(added_rows, vec![3, 4]);
        assert_eq!(removed_rows, vec![6]);

        // Each annotation sits on the pane row carrying the change
        for annotation in &panes.right.annotations {
            assert_eq!(panes.right.lines[annotation.row].class, LineClass::Added);
        }
        assert_eq!(panes.left.lines[6].class, LineClass::Removed);
    }

    #[test]
    fn padded_blank_only_runs_leave_one_empty_row() {
        let segments = vec![
            seg(SegmentKind::Unchanged, "a\n\nb\n"),
            seg(SegmentKind::Added, "\n"),
            seg(SegmentKind::Unchanged, "c\n"),
        ];
        let panes = align(&segments, AlignmentPolicy::Padded);

        // Blank lines inside a run are dropped
        assert_eq!(
            texts(&panes.left),
            vec![
                ("a", LineClass::Unchanged),
                ("b", LineClass::Unchanged),
                ("c", LineClass::Unchanged)
            ]
        );
        assert_eq!(panes.right.text(), "  a\n  b\n\n  c");
        assert!(panes.right.annotations.is_empty());
    }

    #[test]
    fn inserted_blank_line_shows_on_the_right() {
        let segments = vec![
            seg(SegmentKind::Unchanged, "a\n"),
            seg(SegmentKind::Added, "\n"),
            seg(SegmentKind::Unchanged, "b"),
        ];
        let panes = align(&segments, AlignmentPolicy::Padded);
        assert!(!panes.identical);
        assert_eq!(panes.left.text(), "  a\n  b");
        assert_eq!(panes.right.text(), "  a\n\n  b");

        let segments = vec![
            seg(SegmentKind::Unchanged, "a\n"),
            seg(SegmentKind::Removed, "\n"),
            seg(SegmentKind::Unchanged, "\n"),
            seg(SegmentKind::Added, "x\n"),
        ];
        let panes = align(&segments, AlignmentPolicy::Padded);
        assert_eq!(panes.left.lines.len(), 4);
        assert_eq!(panes.left.lines[1].class, LineClass::Padding);
        assert_eq!(panes.left.text(), "  a");
        assert_eq!(panes.right.text(), "  a\n\n+ x");
        // Blank runs do not advance the shared counter
        assert_eq!(panes.right.annotations, vec![Annotation::added(1)]);
    }

    #[test]
    fn padded_identical_shows_sentinel() {
        let segments = vec![seg(SegmentKind::Unchanged, "same\n")];
        let panes = align(&segments, AlignmentPolicy::Padded);

        assert!(panes.identical);
        assert_eq!(panes.left.text(), NO_DIFFERENCES);
        assert_eq!(panes.right.text(), NO_DIFFERENCES);
        assert!(panes.left.annotations.is_empty());
        assert!(panes.right.annotations.is_empty());
    }

    #[test]
    fn filtered_numbers_each_pane_independently() {
        let segments = vec![
            seg(SegmentKind::Unchanged, "a\n"),
            seg(SegmentKind::Added, "x\ny\n"),
            seg(SegmentKind::Unchanged, "b\n"),
        ];
        let panes = align(&segments, AlignmentPolicy::Filtered);

        let left: Vec<(usize, &str)> = panes
            .left
            .lines
            .iter()
            .map(|l| (l.number, l.text.as_str()))
            .collect();
        let right: Vec<(usize, &str)> = panes
            .right
            .lines
            .iter()
            .map(|l| (l.number, l.text.as_str()))
            .collect();

        assert_eq!(left, vec![(1, "a"), (2, "b")]);
        assert_eq!(right, vec![(1, "a"), (2, "x"), (3, "y"), (4, "b")]);
        assert_eq!(panes.right.lines[1].class.css_name(), "added-line");
        assert!(panes.left.annotations.is_empty());
        assert!(panes.right.annotations.is_empty());
    }

    #[test]
    fn filtered_keeps_interior_blank_lines_but_not_the_tail() {
        let segments = vec![seg(SegmentKind::Removed, "a\n\nb\n")];
        let panes = align(&segments, AlignmentPolicy::Filtered);
        assert_eq!(
            texts(&panes.left),
            vec![
                ("a", LineClass::Removed),
                ("", LineClass::Removed),
                ("b", LineClass::Removed)
            ]
        );
        assert!(panes.right.lines.is_empty());
    }

    #[test]
    fn filtered_identical_lists_lines_without_sentinel() {
        let segments = vec![seg(SegmentKind::Unchanged, "same\n")];
        let panes = align(&segments, AlignmentPolicy::Filtered);
        assert!(panes.identical);
        assert_eq!(texts(&panes.left), vec![("same", LineClass::Unchanged)]);
        assert_eq!(panes.left, panes.right);
    }
}
