use diff_desk::app::DiffDeskApp;
use diff_desk::constant;
use diff_desk::ui;

fn main() -> eframe::Result {
    tracing_subscriber::fmt::init();

    let options = ui::viewport::build_viewport();

    eframe::run_native(
        constant::DEFAULT_WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(DiffDeskApp::new(cc)))),
    )
}
