//! Top bar with the app title and the "new dish" action.

use leptos::prelude::*;

#[component]
pub fn Header(on_open_add: Callback<()>) -> impl IntoView {
    view! {
        <header class="menu-header">
            <h1 class="menu-header__title">"Food Menu"</h1>
            <button
                class="btn btn--primary"
                data-testid="open-add-food"
                on:click=move |_| on_open_add.run(())
            >
                <span class="btn__text">"New dish"</span>
                <span class="btn__icon">"+"</span>
            </button>
        </header>
    }
}
