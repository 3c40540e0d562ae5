pub mod global_context;
pub mod header;

use global_context::{AppGlobalContext, View};
use header::Header;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (title, view switch)             |
/// +------------------------------------------+
/// |  Active view                             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C, U>(chat: C, upload: U) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
    U: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {move || match ctx.current_view.get() {
                    View::Chat => chat(),
                    View::Upload => upload(),
                }}
            </main>
        </div>
    }
}
