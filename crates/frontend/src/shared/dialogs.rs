/// Blocking user prompts
pub trait Dialogs: Send + Sync {
    /// Ask a yes/no question; `false` when declined or unavailable
    fn confirm(&self, message: &str) -> bool;
}

/// `window.confirm` backed dialogs
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
