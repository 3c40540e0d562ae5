use crate::layout::global_context::{AppGlobalContext, View};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Document Assistant"</span>
            </div>
            <nav class="header__actions">
                {View::ALL
                    .into_iter()
                    .map(|view| {
                        view! {
                            <button
                                class=move || {
                                    if ctx.is_active(view) {
                                        "button button--primary"
                                    } else {
                                        "button button--ghost"
                                    }
                                }
                                aria-label=format!("Switch to {} view", view.key())
                                aria-pressed=move || ctx.is_active(view).to_string()
                                on:click=move |_| ctx.switch_to(view)
                            >
                                {icon(view.key())}
                                " "
                                {view.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
