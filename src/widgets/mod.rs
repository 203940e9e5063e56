// Reusable UI widgets

pub mod text_input;
pub mod toast;

pub use text_input::{TextInputWidget, TextInputWidgetExt, MASK_CHAR};
pub use toast::{Toast, ToastManager, ToastWidget};
