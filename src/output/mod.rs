use crate::error::Error;
use crate::widget::ViewModel;

mod json;
mod text;
pub use crate::output::json::JsonOutput;
pub use crate::output::text::TextOutput;

pub trait Output {
    fn write_view(&mut self, view: &ViewModel) -> Result<(), Error>;

    /// Free text for the user, outside of the view (help, command errors).
    fn write_message(&mut self, message: &str) -> Result<(), Error>;
}
