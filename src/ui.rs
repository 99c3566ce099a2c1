pub mod compare_view;
pub mod history;
pub mod json_view;
pub mod title_bar;
pub mod toast;
pub mod viewport;
