use egui::{ScrollArea, Ui};

pub enum JsonAction {
    Edited,
    Format,
    Compress,
    Clear,
    Copy,
}

#[derive(Default)]
pub struct JsonView {
    text: String,
}

impl JsonView {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub fn show(&mut self, ui: &mut Ui) -> Option<JsonAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            if ui.button("Format").on_hover_text("Validate and pretty-print").clicked() {
                action = Some(JsonAction::Format);
            }
            if ui.button("Compress").clicked() {
                action = Some(JsonAction::Compress);
            }
            if ui.button("Clear").clicked() {
                action = Some(JsonAction::Clear);
            }
            if ui.button("📋 Copy").clicked() {
                action = Some(JsonAction::Copy);
            }
        });

        ui.separator();

        ScrollArea::vertical()
            .id_salt("json_editor")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let response = ui.add(
                    egui::TextEdit::multiline(&mut self.text)
                        .code_editor()
                        .hint_text("Paste JSON here...")
                        .desired_width(f32::INFINITY)
                        .desired_rows(30),
                );
                if response.changed() && action.is_none() {
                    action = Some(JsonAction::Edited);
                }
            });

        action
    }
}
