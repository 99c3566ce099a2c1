use crate::compare::{AlignmentPolicy, CompareOutcome, CompareRequest, LineClass, Pane};
use crate::constant::{HISTORY_PANE_SEPARATOR, NO_DIFFERENCES};
use crate::style::line_colors;
use egui::{Color32, RichText, ScrollArea, Ui};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

pub enum CompareAction {
    Compare,
    OpenFile(Side),
    PolicyChanged(AlignmentPolicy),
    Copy(String),
}

/// What the output panes currently show
enum Display {
    Empty,
    Outcome(CompareOutcome),
    /// Pane text brought back from history
    Restored(Pane, Pane),
}

pub struct CompareView {
    input_left: String,
    input_right: String,
    policy: AlignmentPolicy,
    display: Display,
}

impl CompareView {
    pub fn new(policy: AlignmentPolicy) -> Self {
        Self {
            input_left: String::new(),
            input_right: String::new(),
            policy,
            display: Display::Empty,
        }
    }

    pub fn policy(&self) -> AlignmentPolicy {
        self.policy
    }

    pub fn request(&self) -> CompareRequest {
        CompareRequest::new(self.input_left.clone(), self.input_right.clone())
    }

    pub fn set_input(&mut self, side: Side, text: String) {
        match side {
            Side::Left => self.input_left = text,
            Side::Right => self.input_right = text,
        }
    }

    /// Replace whatever the panes show with a fresh result
    pub fn show_outcome(&mut self, outcome: CompareOutcome) {
        self.display = Display::Outcome(outcome);
    }

    pub fn restore(&mut self, left: &str, right: &str) {
        self.display = Display::Restored(parse_pane_text(left), parse_pane_text(right));
    }

    fn panes(&self) -> Option<(&Pane, &Pane)> {
        match &self.display {
            Display::Empty => None,
            Display::Outcome(outcome) => Some((&outcome.left, &outcome.right)),
            Display::Restored(left, right) => Some((left, right)),
        }
    }

    pub fn show(&mut self, ui: &mut Ui) -> Option<CompareAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            if ui.button("Compare").clicked() {
                action = Some(CompareAction::Compare);
            }

            let mut selected = self.policy;
            egui::ComboBox::from_id_salt("policy_select")
                .selected_text(selected.label())
                .show_ui(ui, |ui| {
                    for policy in [AlignmentPolicy::Padded, AlignmentPolicy::Filtered] {
                        ui.selectable_value(&mut selected, policy, policy.label());
                    }
                });
            if selected != self.policy {
                self.policy = selected;
                action = Some(CompareAction::PolicyChanged(selected));
            }

            if let Some((left, right)) = self.panes()
                && ui.button("📋 Copy Diff").clicked()
            {
                action = Some(CompareAction::Copy(format!(
                    "{}{}{}",
                    left.text(),
                    HISTORY_PANE_SEPARATOR,
                    right.text()
                )));
            }
        });

        ui.separator();

        let output_height = (ui.available_height() * 0.55).max(120.0);
        ScrollArea::vertical()
            .id_salt("compare_output")
            .max_height(output_height)
            .auto_shrink([false, false])
            .show(ui, |ui| match self.panes() {
                Some((left, right)) => {
                    ui.columns(2, |columns| {
                        render_pane(&mut columns[0], left);
                        render_pane(&mut columns[1], right);
                    });
                }
                None => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.label(RichText::new("Enter text below and press Compare").weak());
                    });
                }
            });

        ui.separator();

        ui.columns(2, |columns| {
            if let Some(a) = input_editor(&mut columns[0], "left_input", &mut self.input_left, Side::Left) {
                action = Some(a);
            }
            if let Some(a) = input_editor(&mut columns[1], "right_input", &mut self.input_right, Side::Right) {
                action = Some(a);
            }
        });

        action
    }
}

fn input_editor(ui: &mut Ui, id: &str, text: &mut String, side: Side) -> Option<CompareAction> {
    let mut action = None;
    ui.push_id(id, |ui| {
        if ui.small_button("📂 Open file").clicked() {
            action = Some(CompareAction::OpenFile(side));
        }
        ScrollArea::vertical()
            .id_salt(id)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(text)
                        .code_editor()
                        .hint_text("Enter Text...")
                        .desired_width(f32::INFINITY)
                        .desired_rows(12),
                );
            });
    });
    action
}

/// Draw one pane, one row per rendered line
fn render_pane(ui: &mut Ui, pane: &Pane) {
    ui.style_mut().spacing.item_spacing.y = 1.0;
    let base_text = ui.visuals().text_color();

    for (row, line) in pane.lines.iter().enumerate() {
        let (bg, fg) = line_colors(line.class, base_text);

        if line.class == LineClass::Notice {
            ui.label(RichText::new(&line.text).monospace().color(fg));
            continue;
        }

        ui.horizontal(|ui| {
            let annotation = pane.annotation_at(row);
            let gutter = RichText::new(format!("{:>4}", line.number))
                .monospace()
                .color(base_text.gamma_multiply(0.5));
            let gutter = ui.label(gutter);
            if let Some(annotation) = annotation {
                gutter.on_hover_text(annotation.text.as_str());
            }

            egui::Frame::default().fill(bg).show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                let content = format!("{}{}", line.marker(), line.text);
                ui.add(egui::Label::new(RichText::new(content).monospace().color(fg)).wrap());
            });
        });
    }

    if pane.lines.is_empty() {
        ui.label(RichText::new("(empty)").weak().color(Color32::GRAY));
    }
}

/// Rebuild rows from marker-prefixed pane text
fn parse_pane_text(text: &str) -> Pane {
    if text == NO_DIFFERENCES {
        return Pane::notice(NO_DIFFERENCES);
    }

    let mut pane = Pane::default();
    if text.is_empty() {
        return pane;
    }
    for line in text.split('\n') {
        if let Some(rest) = line.strip_prefix("+ ") {
            pane.push(rest, LineClass::Added);
        } else if let Some(rest) = line.strip_prefix("- ") {
            pane.push(rest, LineClass::Removed);
        } else if let Some(rest) = line.strip_prefix("  ") {
            pane.push(rest, LineClass::Unchanged);
        } else if line.is_empty() {
            pane.push("", LineClass::Padding);
        } else {
            pane.push(line, LineClass::Unchanged);
        }
    }
    pane
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restored_text_round_trips_through_pane() {
        let text = "  line1\n\n+ line3";
        let pane = parse_pane_text(text);
        let classes: Vec<LineClass> = pane.lines.iter().map(|l| l.class).collect();
        assert_eq!(
            classes,
            vec![LineClass::Unchanged, LineClass::Padding, LineClass::Added]
        );
        assert_eq!(pane.text(), text);
    }

    #[test]
    fn restored_sentinel_is_a_notice() {
        let pane = parse_pane_text(NO_DIFFERENCES);
        assert_eq!(pane.lines.len(), 1);
        assert_eq!(pane.lines[0].class, LineClass::Notice);
    }

    #[test]
    fn new_outcome_replaces_restored_panes() {
        let mut view = CompareView::new(AlignmentPolicy::Padded);
        assert!(view.panes().is_none());
        view.restore("- a", "+ b");
        assert_eq!(view.panes().unwrap().0.lines[0].class, LineClass::Removed);

        view.show_outcome(CompareOutcome {
            policy: AlignmentPolicy::Padded,
            left: Pane::notice(NO_DIFFERENCES),
            right: Pane::notice(NO_DIFFERENCES),
            identical: true,
        });
        assert_eq!(view.panes().unwrap().1.text(), NO_DIFFERENCES);
    }
}
