use leptos::prelude::*;

/// Available navigation views
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Chat,
    Upload,
}

impl View {
    pub const ALL: [View; 2] = [View::Chat, View::Upload];

    pub fn label(&self) -> &'static str {
        match self {
            View::Chat => "Chat",
            View::Upload => "Upload",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            View::Chat => "chat",
            View::Upload => "upload",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub current_view: RwSignal<View>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            current_view: RwSignal::new(View::default()),
        }
    }

    /// Unconditional: switching to the active view is allowed and harmless.
    pub fn switch_to(&self, view: View) {
        self.current_view.set(view);
    }

    pub fn is_active(&self, view: View) -> bool {
        self.current_view.get() == view
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
