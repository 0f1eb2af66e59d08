//! Dashboard page: the dish list plus the add/edit dialogs.
//!
//! Every remote call runs in a spawned task. When it settles, the matching
//! reducer from `menu::controller` is applied to fresh copies of the store
//! and dialog state, and only the slots that changed are written back. A
//! failed submit therefore leaves the open dialog (and its typed input)
//! alone. A submit that settles after its dialog was cancelled or replaced
//! still updates the list but never closes the newer dialog.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use menu::controller::{apply_added, apply_deleted, apply_loaded, apply_toggled, apply_updated};
use menu::{Food, FoodApi, FoodForm, FoodId, MenuStore, Modal, Notice, Phase};

use crate::components::food_card::FoodCard;
use crate::components::food_modal::FoodModal;
use crate::components::header::Header;
use crate::components::notice_bar::NoticeBar;
use crate::net::api::HttpFoodApi;
use crate::state::status::PageStatus;

/// Run `f` on copies of the store and dialog state and write back whichever
/// changed.
fn commit<R>(
    store: RwSignal<MenuStore>,
    modal: RwSignal<Modal>,
    f: impl FnOnce(&mut MenuStore, &mut Modal) -> R,
) -> R {
    let mut next_store = store.get_untracked();
    let mut next_modal = modal.get_untracked();
    let out = f(&mut next_store, &mut next_modal);
    if store.with_untracked(|current| *current != next_store) {
        store.set(next_store);
    }
    if modal.with_untracked(|current| *current != next_modal) {
        modal.set(next_modal);
    }
    out
}

/// Run a submit reducer on the live dialog when it is still the submitted
/// one, otherwise on a scratch copy so the current dialog stays as it is.
pub(crate) fn guard_dialog<R>(
    still_open: bool,
    modal: &mut Modal,
    f: impl FnOnce(&mut Modal) -> R,
) -> R {
    if still_open { f(modal) } else { f(&mut modal.clone()) }
}

fn report(status: RwSignal<PageStatus>, notice: Option<Notice>) {
    if let Some(notice) = notice {
        leptos::logging::warn!("{notice}");
        status.update(|s| s.report(notice));
    }
}

/// Menu dashboard. Fetches the list on mount.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<RwSignal<MenuStore>>();
    let modal = expect_context::<RwSignal<Modal>>();
    let status = expect_context::<RwSignal<PageStatus>>();
    let api = StoredValue::new(expect_context::<HttpFoodApi>());

    let idle = move || status.with_untracked(|s| modal.with_untracked(|m| s.phase(m))) == Phase::Idle;

    // Initial list fetch.
    spawn_local(async move {
        let result = api.get_value().list().await;
        let notice = commit(store, modal, |s, _| apply_loaded(s, result));
        status.update(|s| s.loaded = true);
        report(status, notice);
    });

    let open_add = Callback::new(move |()| {
        if !idle() {
            return;
        }
        modal.update(|m| {
            if m.open_add().is_ok() {
                status.update(PageStatus::open_dialog);
            }
        });
    });

    let open_edit = Callback::new(move |food: Food| {
        if !idle() {
            return;
        }
        modal.update(|m| {
            if m.open_edit(food).is_ok() {
                status.update(PageStatus::open_dialog);
            }
        });
    });

    let cancel = Callback::new(move |()| {
        status.update(PageStatus::clear_form_error);
        modal.update(Modal::close);
    });

    let submit_add = Callback::new(move |form: FoodForm| {
        let body = match form.to_new_food() {
            Ok(body) => body,
            Err(error) => {
                status.update(|s| s.reject_form(&error));
                return;
            }
        };
        status.update(PageStatus::clear_form_error);
        let seq = status.with_untracked(|s| s.dialog_seq);
        spawn_local(async move {
            let result = api.get_value().create(&body).await;
            let still_open = status.with_untracked(|s| s.owns_dialog(seq));
            let notice = commit(store, modal, |s, m| {
                guard_dialog(still_open, m, |m| apply_added(s, m, result))
            });
            report(status, notice);
        });
    });

    let submit_edit = Callback::new(move |form: FoodForm| {
        let Some(target) = modal.with_untracked(|m| m.editing_target().cloned()) else {
            return;
        };
        let patch = match form.to_patch() {
            Ok(patch) => patch,
            Err(error) => {
                status.update(|s| s.reject_form(&error));
                return;
            }
        };
        status.update(PageStatus::clear_form_error);
        let body = target.merged(&patch);
        let seq = status.with_untracked(|s| s.dialog_seq);
        spawn_local(async move {
            let result = api.get_value().update(target.id, &body).await;
            let still_open = status.with_untracked(|s| s.owns_dialog(seq));
            let notice = commit(store, modal, |s, m| {
                guard_dialog(still_open, m, |m| apply_updated(s, m, result))
            });
            report(status, notice);
        });
    });

    let toggle = Callback::new(move |id: FoodId| {
        let Some(body) = store.with_untracked(|s| s.get(id).map(Food::toggled)) else {
            return;
        };
        spawn_local(async move {
            let result = api.get_value().update(id, &body).await;
            let notice = commit(store, modal, |s, _| apply_toggled(s, result));
            report(status, notice);
        });
    });

    let delete = Callback::new(move |id: FoodId| {
        spawn_local(async move {
            let result = api.get_value().delete(id).await;
            let notice = commit(store, modal, |s, _| apply_deleted(s, id, result));
            report(status, notice);
        });
    });

    let form_error = Signal::derive(move || status.with(|s| s.form_error.clone()));

    view! {
        <div class="dashboard-page">
            <Header on_open_add=open_add/>
            <NoticeBar/>

            {move || match modal.get() {
                Modal::Closed => None,
                Modal::Adding => Some(
                    view! {
                        <FoodModal
                            title="New dish"
                            submit_label="Add dish"
                            test_id="add-food-button"
                            error=form_error
                            on_submit=submit_add
                            on_cancel=cancel
                        />
                    }
                        .into_any(),
                ),
                Modal::Editing(food) => Some(
                    view! {
                        <FoodModal
                            title="Edit dish"
                            submit_label="Save changes"
                            test_id="edit-food-button"
                            initial=FoodForm::from_food(&food)
                            error=form_error
                            on_submit=submit_edit
                            on_cancel=cancel
                        />
                    }
                        .into_any(),
                ),
            }}

            <main class="foods-list" data-testid="foods-list">
                {move || {
                    if !status.with(|s| s.loaded) {
                        view! { <p class="foods-list__empty">"Loading menu..."</p> }.into_any()
                    } else if store.with(MenuStore::is_empty) {
                        view! { <p class="foods-list__empty">"No dishes yet."</p> }.into_any()
                    } else {
                        store
                            .with(|s| {
                                s.iter()
                                    .map(|food| {
                                        view! {
                                            <FoodCard
                                                food=food.clone()
                                                on_edit=open_edit
                                                on_delete=delete
                                                on_toggle=toggle
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                            .into_any()
                    }
                }}
            </main>
        </div>
    }
}
