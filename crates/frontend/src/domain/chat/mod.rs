//! Chat Panel Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: ChatResponder trait and the simulated responder
//! - state.rs: ChatSession (input, transcript, loading flag)
//! - view_model.rs: ChatVm with RwSignals
//! - view.rs: Main component ChatView

pub mod model;
pub mod state;
mod view;
pub mod view_model;

pub use model::{ChatResponder, SimulatedResponder};
pub use view::ChatView;
pub use view_model::ChatVm;
