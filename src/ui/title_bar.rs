use egui::{Align, Layout, Ui};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Compare,
    Json,
}

pub enum TitleBarAction {
    SwitchTab(Tab),
    ToggleHistory,
}

pub struct TitleBar;

impl TitleBar {
    pub fn show(ui: &mut Ui, active: Tab, history_visible: bool) -> Option<TitleBarAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                if ui.selectable_label(active == Tab::Compare, "Compare").clicked() {
                    action = Some(TitleBarAction::SwitchTab(Tab::Compare));
                }
                if ui.selectable_label(active == Tab::Json, "JSON").clicked() {
                    action = Some(TitleBarAction::SwitchTab(Tab::Json));
                }
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if !history_visible
                    && ui.button("📜 History").on_hover_text("Show History").clicked()
                {
                    action = Some(TitleBarAction::ToggleHistory);
                }
            });
        });

        action
    }
}
