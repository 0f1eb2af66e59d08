//! Dismissible banner for the latest failed operation.

use leptos::prelude::*;

use crate::state::status::PageStatus;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let status = expect_context::<RwSignal<PageStatus>>();

    view! {
        {move || {
            status
                .get()
                .notice
                .map(|notice| {
                    view! {
                        <div class="notice-bar" role="alert">
                            <span class="notice-bar__text">{notice.to_string()}</span>
                            <button
                                class="notice-bar__close"
                                title="Dismiss"
                                on:click=move |_| status.update(PageStatus::dismiss)
                            >
                                "\u{2715}"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
