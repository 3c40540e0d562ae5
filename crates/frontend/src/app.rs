use crate::domain::chat::{ChatView, ChatVm, SimulatedResponder};
use crate::domain::documents::{DocumentsApi, UploadView, UploadVm};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::api::ApiController;
use crate::shared::config::Config;
use leptos::prelude::*;

#[component]
pub fn App(config: Config, api: ApiController) -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // View models outlive view switches: the transcript and the pending
    // files survive a trip to the other panel.
    provide_context(ChatVm::new(&config.chat.greeting));
    provide_context(UploadVm::new());

    provide_context(SimulatedResponder::new(config.chat.reply_delay_ms));
    provide_context(StoredValue::new_local(DocumentsApi::new(
        api,
        config.api.upload_endpoint.clone(),
    )));

    view! {
        <Shell
            chat=|| view! { <ChatView /> }.into_any()
            upload=|| view! { <UploadView /> }.into_any()
        />
    }
}
