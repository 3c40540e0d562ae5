//! Chat - View Component

use super::model::SimulatedResponder;
use super::view_model::ChatVm;
use crate::shared::icons::icon;
use contracts::domain::chat::ChatMessage;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatView() -> impl IntoView {
    let vm = use_context::<ChatVm>().expect("ChatVm context not found");
    let responder =
        use_context::<SimulatedResponder>().expect("SimulatedResponder context not found");
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll to bottom whenever the transcript grows
    Effect::new(move |_| {
        let _ = vm.session.with(|s| s.transcript.len());
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let handle_send = Callback::new(move |_| {
        let responder = responder.clone();
        wasm_bindgen_futures::spawn_local(async move {
            vm.submit(&responder).await;
        });
    });

    let is_loading = Signal::derive(move || vm.session.with(|s| s.loading));
    let cannot_send = Signal::derive(move || !vm.session.with(|s| s.can_submit()));

    view! {
        <div class="chat-view">
            <h1 class="chat-view__title">"What can I help you find?"</h1>

            <div node_ref=messages_container_ref class="chat-view__messages">
                <For
                    each=move || vm.session.with(|s| s.transcript.clone())
                    key=|msg| msg.id
                    let:msg
                >
                    <MessageBubble msg=msg />
                </For>
                <Show when=move || is_loading.get()>
                    <div class="chat-bubble chat-bubble--assistant chat-bubble--pending">
                        {icon("spinner")}
                    </div>
                </Show>
            </div>

            <div class="chat-view__input">
                <textarea
                    class="chat-view__textarea"
                    rows="1"
                    placeholder="What do you want to know?"
                    aria-label="Chat message"
                    prop:value=move || vm.session.with(|s| s.input.clone())
                    disabled=move || is_loading.get()
                    on:input=move |ev| vm.set_input(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        // Enter sends, Shift+Enter is a newline
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            handle_send.run(());
                        }
                    }
                ></textarea>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=cannot_send
                    on_click=move |_| handle_send.run(())
                    attr:aria-label="Send message"
                >
                    {move || if is_loading.get() { icon("spinner") } else { icon("send") }}
                </Button>
            </div>
        </div>
    }
}

#[component]
fn MessageBubble(msg: ChatMessage) -> impl IntoView {
    let class = if msg.is_user() {
        "chat-bubble chat-bubble--user"
    } else {
        "chat-bubble chat-bubble--assistant"
    };
    let time = msg
        .created_at
        .with_timezone(&chrono::Local)
        .format("%H:%M")
        .to_string();

    view! {
        <div class=class>
            <div class="chat-bubble__content">{msg.content}</div>
            <div class="chat-bubble__meta">{time}</div>
        </div>
    }
}
