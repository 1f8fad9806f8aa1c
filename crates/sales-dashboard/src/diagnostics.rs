use std::error::Error;

/// Where failed refreshes and ignored input get reported
pub trait Diagnostics {
    fn error(&self, message: &str, error: &dyn Error);
    fn warn(&self, message: &str);
}

/// Browser devtools console
#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl Diagnostics for Console {
    fn error(&self, message: &str, error: &dyn Error) {
        web_sys::console::error_2(&message.into(), &error.to_string().into());
    }

    fn warn(&self, message: &str) {
        web_sys::console::warn_1(&message.into());
    }
}
