//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use menu::{MenuStore, Modal};

use crate::net::api::HttpFoodApi;
use crate::pages::dashboard::DashboardPage;
use crate::state::status::PageStatus;

/// Root application component.
///
/// The store, the dialog state and the page status are separate signals so
/// each can change without re-rendering what depends only on the others.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(MenuStore::default()));
    provide_context(RwSignal::new(Modal::default()));
    provide_context(RwSignal::new(PageStatus::default()));
    provide_context(HttpFoodApi::from_build_env());

    view! {
        <Title text="Food Menu"/>
        <DashboardPage/>
    }
}
