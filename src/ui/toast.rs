use crate::constant::TOAST_DURATION_SECS;
use crate::style::{TOAST_ERROR_BG, TOAST_SUCCESS_BG};
use egui::{Align2, Color32, Context, RichText};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

struct Toast {
    message: String,
    kind: ToastKind,
    created: Instant,
}

/// Short-lived notices shown at the top center of the window
#[derive(Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message.into(), ToastKind::Error);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message.into(), ToastKind::Success);
    }

    fn push(&mut self, message: String, kind: ToastKind) {
        self.items.push(Toast {
            message,
            kind,
            created: Instant::now(),
        });
    }

    pub fn show(&mut self, ctx: &Context) {
        let lifetime = Duration::from_secs(TOAST_DURATION_SECS);
        self.items.retain(|t| t.created.elapsed() < lifetime);
        if self.items.is_empty() {
            return;
        }

        let mut dismissed = None;
        egui::Area::new(egui::Id::new("toast_area"))
            .anchor(Align2::CENTER_TOP, egui::vec2(0.0, 48.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for (i, toast) in self.items.iter().enumerate() {
                    let fill = match toast.kind {
                        ToastKind::Error => TOAST_ERROR_BG,
                        ToastKind::Success => TOAST_SUCCESS_BG,
                    };
                    egui::Frame::popup(ui.style())
                        .fill(fill)
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&toast.message).color(Color32::BLACK));
                                if ui.small_button("✖").clicked() {
                                    dismissed = Some(i);
                                }
                            });
                        });
                }
            });

        if let Some(i) = dismissed {
            self.items.remove(i);
        }

        // Keep repainting so expired notices disappear without input
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
