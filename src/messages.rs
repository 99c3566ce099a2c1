use crate::ui::compare_view::Side;

/// Response messages from background operations
pub enum ResponseMessage {
    /// Contents of a file picked for one of the compare inputs, or the read error
    InputLoaded(Side, Result<String, String>),
}
