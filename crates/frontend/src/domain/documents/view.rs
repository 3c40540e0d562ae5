//! Documents - View Components

use super::model::DocumentsApi;
use super::view_model::UploadVm;
use crate::shared::files::FileHandle;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn UploadView() -> impl IntoView {
    let vm = use_context::<UploadVm>().expect("UploadVm context not found");
    let api = use_context::<StoredValue<DocumentsApi, LocalStorage>>()
        .expect("DocumentsApi context not found");
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let on_remove = Callback::new(move |index: usize| vm.remove_file(index));

    let on_drag_over = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if !vm.session.with_untracked(|s| s.drag_active) {
            vm.session.update(|s| s.drag_enter());
        }
    };

    let on_drag_leave = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        vm.session.update(|s| s.drag_leave());
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let files = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(|list| FileHandle::from_file_list(&list))
            .unwrap_or_default();
        log::debug!("Dropped {} file(s)", files.len());
        vm.session.update(|s| {
            s.drop_files(files);
        });
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(list) = input.files() {
            vm.add_files(FileHandle::from_file_list(&list));
        }
        // Same file can be picked again after removal
        input.set_value("");
    };

    let open_picker = move |_| {
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    let handle_submit = move |_| {
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            vm.submit(&api).await;
        });
    };

    let is_uploading = Signal::derive(move || vm.session.with(|s| s.uploading));
    let cannot_submit = Signal::derive(move || !vm.session.with(|s| s.can_submit()));

    view! {
        <div class="upload-view">
            <h1 class="upload-view__title">"Upload Documents"</h1>

            {move || {
                vm.session
                    .with(|s| s.status.clone())
                    .map(|status| {
                        let intent = if status.success {
                            MessageBarIntent::Success
                        } else {
                            MessageBarIntent::Error
                        };
                        view! {
                            <MessageBar intent=intent attr:role="alert">
                                {status.message}
                            </MessageBar>
                        }
                    })
            }}

            <div
                class=move || {
                    if vm.session.with(|s| s.drag_active) {
                        "drop-zone drop-zone--active"
                    } else {
                        "drop-zone"
                    }
                }
                on:dragenter=on_drag_over
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
                on:click=open_picker
            >
                {icon("upload")}
                <p class="drop-zone__hint">"Drag and drop files here, or click to browse"</p>
                <input
                    node_ref=file_input_ref
                    type="file"
                    multiple=true
                    style="display: none;"
                    on:change=on_file_change
                    on:click=|ev| ev.stop_propagation()
                />
            </div>

            {move || {
                let (preview, hidden) = vm.session.with(|s| (s.preview(), s.hidden_count()));
                if preview.is_empty() {
                    return ().into_any();
                }
                view! {
                    <div class="file-preview-list">
                        {preview
                            .into_iter()
                            .map(|(index, file)| {
                                view! { <FilePreview index=index file=file on_remove=on_remove /> }
                            })
                            .collect_view()}
                        {(hidden > 0)
                            .then(|| {
                                view! {
                                    <button
                                        class="button button--ghost file-preview-list__more"
                                        on:click=move |_| vm.session.update(|s| s.open_file_list())
                                    >
                                        {format!("+{} more", hidden)}
                                    </button>
                                }
                            })}
                    </div>
                }
                    .into_any()
            }}

            <label class="upload-view__label" for="upload-description">"Description"</label>
            <textarea
                id="upload-description"
                class="upload-view__textarea"
                placeholder="Describe these files"
                prop:value=move || vm.session.with(|s| s.description.clone())
                disabled=move || is_uploading.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.session.update(|s| s.set_description(value));
                }
            ></textarea>

            <Button
                appearance=ButtonAppearance::Primary
                disabled=cannot_submit
                on_click=handle_submit
            >
                {move || if is_uploading.get() { "Uploading..." } else { "Upload" }}
            </Button>

            <Show when=move || vm.session.with(|s| s.file_list_open)>
                <FileListModal
                    on_remove=on_remove
                    on_close=Callback::new(move |_| vm.session.update(|s| s.close_file_list()))
                />
            </Show>
        </div>
    }
}

#[component]
fn FilePreview(index: usize, file: FileHandle, on_remove: Callback<usize>) -> impl IntoView {
    let size = file.display_size();

    view! {
        <div class="file-preview">
            {icon("document")}
            <span class="file-preview__name" title=file.name.clone()>{file.name.clone()}</span>
            <span class="file-preview__size">{size}</span>
            <button
                class="button button--icon file-preview__remove"
                aria-label=format!("Remove {}", file.name)
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_remove.run(index);
                }
            >
                {icon("x")}
            </button>
        </div>
    }
}

/// Every pending file, each removable; closes itself once the list is empty.
#[component]
fn FileListModal(on_remove: Callback<usize>, on_close: Callback<()>) -> impl IntoView {
    let vm = use_context::<UploadVm>().expect("UploadVm context not found");

    view! {
        <Modal title="Selected Files".to_string() on_close=on_close>
            <div class="file-list">
                {move || {
                    vm.session
                        .with(|s| s.files.clone())
                        .into_iter()
                        .enumerate()
                        .map(|(index, file)| {
                            view! { <FilePreview index=index file=file on_remove=on_remove /> }
                        })
                        .collect_view()
                }}
            </div>
        </Modal>
    }
}
