use crate::backend::HistoryStore;
use crate::backend::draft_backend::DraftStore;
use crate::compare::{self, split_history_record};
use crate::config::Config;
use crate::constant::{DIFF_HISTORY_KEY, JSON_HISTORY_KEY};
use crate::json;
use crate::messages::ResponseMessage;
use crate::style::configure_style;
use crate::ui::compare_view::{CompareAction, CompareView};
use crate::ui::history::{HistoryAction, HistoryPanel};
use crate::ui::json_view::{JsonAction, JsonView};
use crate::ui::title_bar::{Tab, TitleBar, TitleBarAction};
use crate::ui::toast::Toasts;
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::{error, info};

pub struct DiffDeskApp {
    config: Config,
    tab: Tab,
    compare_view: CompareView,
    json_view: JsonView,
    diff_history: Option<HistoryStore>,
    json_history: Option<HistoryStore>,
    drafts: Option<DraftStore>,
    history_panel: HistoryPanel,
    toasts: Toasts,
    response_sender: Sender<ResponseMessage>,
    response_receiver: Receiver<ResponseMessage>,
}

impl DiffDeskApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = Config::default();
        configure_style(&cc.egui_ctx, &config.settings);

        let mut toasts = Toasts::default();
        let data_dir = config.data_dir();
        info!("Using data directory {:?}", data_dir);

        let diff_history = open_or_report(HistoryStore::open(&data_dir, DIFF_HISTORY_KEY), &mut toasts);
        let json_history = open_or_report(HistoryStore::open(&data_dir, JSON_HISTORY_KEY), &mut toasts);
        let drafts = open_or_report(DraftStore::open(&data_dir), &mut toasts);

        let draft = match drafts.as_ref().map(DraftStore::load) {
            Some(Ok(text)) => text,
            Some(Err(e)) => {
                error!("Failed to load JSON draft: {}", e);
                String::new()
            }
            None => String::new(),
        };

        let (response_sender, response_receiver) = mpsc::channel();

        Self {
            compare_view: CompareView::new(config.settings.compare.policy),
            json_view: JsonView::new(draft),
            config,
            tab: Tab::Compare,
            diff_history,
            json_history,
            drafts,
            history_panel: HistoryPanel::default(),
            toasts,
            response_sender,
            response_receiver,
        }
    }

    fn active_history(&mut self) -> Option<&mut HistoryStore> {
        match self.tab {
            Tab::Compare => self.diff_history.as_mut(),
            Tab::Json => self.json_history.as_mut(),
        }
    }

    fn run_compare(&mut self) {
        let settings = &self.config.settings.compare;
        let options = settings.options_for(self.compare_view.policy());
        let limits = settings.limits();
        let request = self.compare_view.request();

        // On failure the previous result stays on screen
        match compare::compare(&request, &options, &limits) {
            Ok(outcome) => {
                if options.record_history {
                    let record = outcome.history_record();
                    record_into(self.diff_history.as_mut(), &record, &mut self.toasts);
                }
                self.compare_view.show_outcome(outcome);
            }
            Err(e) => self.toasts.error(e.to_string()),
        }
    }

    fn handle_compare_action(&mut self, ctx: &egui::Context, action: CompareAction) {
        match action {
            CompareAction::Compare => self.run_compare(),
            CompareAction::PolicyChanged(policy) => {
                self.config.settings.compare.policy = policy;
                if let Err(e) = self.config.save() {
                    error!("Failed to save settings: {}", e);
                }
            }
            CompareAction::Copy(text) => {
                ctx.copy_text(text);
                self.toasts.success("Diff copied");
            }
            CompareAction::OpenFile(side) => {
                let sender = self.response_sender.clone();
                let ctx = ctx.clone();
                std::thread::spawn(move || {
                    if let Some(path) = rfd::FileDialog::new().pick_file() {
                        let result = std::fs::read_to_string(&path)
                            .map_err(|e| format!("Failed to read {}: {}", path.display(), e));
                        if let Err(e) = sender.send(ResponseMessage::InputLoaded(side, result)) {
                            error!("Failed to send loaded input: {}", e);
                        }
                        ctx.request_repaint();
                    }
                });
            }
        }
    }

    fn handle_json_action(&mut self, ctx: &egui::Context, action: JsonAction) {
        let indent = self.config.settings.json.indent;
        match action {
            JsonAction::Edited => {
                // Valid input is reformatted as it is typed or pasted
                if let Ok(formatted) = json::format(self.json_view.text(), indent) {
                    record_into(self.json_history.as_mut(), &formatted, &mut self.toasts);
                    if formatted != self.json_view.text() {
                        self.json_view.set_text(formatted);
                    }
                }
            }
            JsonAction::Format => match json::format(self.json_view.text(), indent) {
                Ok(formatted) => {
                    record_into(self.json_history.as_mut(), &formatted, &mut self.toasts);
                    self.json_view.set_text(formatted);
                }
                Err(e) => self.toasts.error(e.to_string()),
            },
            JsonAction::Compress => match json::compress(self.json_view.text()) {
                Ok(compressed) => {
                    record_into(self.json_history.as_mut(), &compressed, &mut self.toasts);
                    self.json_view.set_text(compressed);
                }
                Err(e) => self.toasts.error(e.to_string()),
            },
            JsonAction::Clear => self.json_view.set_text(String::new()),
            JsonAction::Copy => {
                ctx.copy_text(self.json_view.text().to_string());
                self.toasts.success("JSON copied");
            }
        }
        self.save_draft();
    }

    fn save_draft(&self) {
        if let Some(drafts) = &self.drafts
            && let Err(e) = drafts.save(self.json_view.text())
        {
            error!("Failed to save JSON draft: {}", e);
        }
    }

    fn handle_history_action(&mut self, action: HistoryAction) {
        match action {
            HistoryAction::Select(index) => {
                let Some(content) = self
                    .active_history()
                    .and_then(|h| h.get(index))
                    .map(|e| e.content.clone())
                else {
                    return;
                };
                match self.tab {
                    Tab::Compare => {
                        let (left, right) = split_history_record(&content);
                        self.compare_view.restore(&left, &right);
                    }
                    Tab::Json => {
                        self.json_view.set_text(content);
                        self.save_draft();
                    }
                }
            }
            HistoryAction::Delete(index) => {
                if let Some(history) = self.active_history()
                    && let Err(e) = history.delete(index)
                {
                    error!("Failed to delete history entry: {}", e);
                    self.toasts.error(e.to_string());
                }
            }
            HistoryAction::ClearAll => {
                if let Some(history) = self.active_history()
                    && let Err(e) = history.clear()
                {
                    error!("Failed to clear history: {}", e);
                    self.toasts.error(e.to_string());
                }
            }
        }
    }

    fn poll_responses(&mut self) {
        while let Ok(response) = self.response_receiver.try_recv() {
            match response {
                ResponseMessage::InputLoaded(side, Ok(text)) => {
                    info!("Loaded {} bytes into {:?} input", text.len(), side);
                    self.compare_view.set_input(side, text);
                }
                ResponseMessage::InputLoaded(_, Err(e)) => {
                    error!("{}", e);
                    self.toasts.error(e);
                }
            }
        }
    }
}

impl eframe::App for DiffDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_responses();

        // Title Bar
        egui::TopBottomPanel::top("title_bar_panel").show(ctx, |ui| {
            if let Some(action) = TitleBar::show(ui, self.tab, self.history_panel.is_visible) {
                match action {
                    TitleBarAction::SwitchTab(tab) => self.tab = tab,
                    TitleBarAction::ToggleHistory => self.history_panel.toggle(),
                }
            }
        });

        // History
        let title = match self.tab {
            Tab::Compare => "Compare History",
            Tab::Json => "JSON History",
        };
        let entries = match self.tab {
            Tab::Compare => self.diff_history.as_ref(),
            Tab::Json => self.json_history.as_ref(),
        }
        .map(|h| h.entries().to_vec())
        .unwrap_or_default();
        if let Some(action) = self.history_panel.show(ctx, title, &entries) {
            self.handle_history_action(action);
        }

        // Main Content
        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Compare => {
                if let Some(action) = self.compare_view.show(ui) {
                    self.handle_compare_action(ctx, action);
                }
            }
            Tab::Json => {
                if let Some(action) = self.json_view.show(ui) {
                    self.handle_json_action(ctx, action);
                }
            }
        });

        self.toasts.show(ctx);
    }
}

fn open_or_report<T, E: std::fmt::Display>(result: Result<T, E>, toasts: &mut Toasts) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!("Failed to open store: {}", e);
            toasts.error(format!("Storage unavailable: {}", e));
            None
        }
    }
}

fn record_into(history: Option<&mut HistoryStore>, content: &str, toasts: &mut Toasts) {
    if let Some(history) = history
        && let Err(e) = history.record(content)
    {
        error!("Failed to record history: {}", e);
        toasts.error(e.to_string());
    }
}
