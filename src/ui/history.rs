use crate::backend::HistoryEntry;
use chrono::Local;
use egui::{Context, RichText, ScrollArea};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    Select(usize),
    Delete(usize),
    ClearAll,
}

/// Preview length of an entry in the list
const PREVIEW_CHARS: usize = 120;

#[derive(Default)]
pub struct HistoryPanel {
    pub is_visible: bool,
}

impl HistoryPanel {
    pub fn toggle(&mut self) {
        self.is_visible = !self.is_visible;
    }

    pub fn show(&mut self, ctx: &Context, title: &str, entries: &[HistoryEntry]) -> Option<HistoryAction> {
        if !self.is_visible {
            return None;
        }

        let mut action = None;

        egui::SidePanel::right("history_panel")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(title);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("❌").on_hover_text("Close").clicked() {
                            self.is_visible = false;
                        }
                    });
                });
                ui.separator();

                if entries.is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.label("Nothing recorded yet.");
                    });
                    return;
                }

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .max_height(ui.available_height() - 40.0)
                    .show(ui, |ui| {
                        for (i, entry) in entries.iter().enumerate() {
                            ui.push_id(i, |ui| {
                                let preview = preview(&entry.content);
                                let response = ui
                                    .add(
                                        egui::Label::new(RichText::new(preview).monospace())
                                            .wrap()
                                            .sense(egui::Sense::click()),
                                    )
                                    .on_hover_cursor(egui::CursorIcon::PointingHand);
                                if response.clicked() {
                                    action = Some(HistoryAction::Select(i));
                                }

                                ui.horizontal(|ui| {
                                    let timestamp = entry
                                        .timestamp
                                        .with_timezone(&Local)
                                        .format("%Y-%m-%d %H:%M:%S")
                                        .to_string();
                                    ui.label(RichText::new(timestamp).small().weak());
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                                                action = Some(HistoryAction::Delete(i));
                                            }
                                        },
                                    );
                                });
                                ui.separator();
                            });
                        }
                    });

                ui.vertical_centered(|ui| {
                    if ui.button("Clear All").clicked() {
                        action = Some(HistoryAction::ClearAll);
                    }
                });
            });

        action
    }
}

fn preview(content: &str) -> String {
    let mut preview: String = content.chars().take(PREVIEW_CHARS).collect();
    if content.chars().count() > PREVIEW_CHARS {
        preview.push('…');
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_long_entries() {
        let long = "x".repeat(PREVIEW_CHARS + 5);
        let p = preview(&long);
        assert_eq!(p.chars().count(), PREVIEW_CHARS + 1);
        assert!(p.ends_with('…'));
        assert_eq!(preview("short"), "short");
    }
}
