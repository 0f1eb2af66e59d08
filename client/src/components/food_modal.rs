//! Add/edit dialog over the four dish fields.
//!
//! The dialog only collects input. It hands the raw [`FoodForm`] to
//! `on_submit`; parsing, network calls and closing are up to the page.

use leptos::prelude::*;
use menu::FoodForm;

/// Labelled text input bound to a signal.
#[component]
fn FormField(
    label: &'static str,
    name: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <input
                class="dialog__input"
                type="text"
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Modal form shared by the add and edit flows.
#[component]
pub fn FoodModal(
    title: &'static str,
    submit_label: &'static str,
    test_id: &'static str,
    #[prop(optional)] initial: FoodForm,
    #[prop(into)] error: Signal<Option<String>>,
    on_submit: Callback<FoodForm>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let image = RwSignal::new(initial.image);
    let name = RwSignal::new(initial.name);
    let price = RwSignal::new(initial.price);
    let description = RwSignal::new(initial.description);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(FoodForm {
            image: image.get_untracked(),
            name: name.get_untracked(),
            price: price.get_untracked(),
            description: description.get_untracked(),
        });
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form
                class="dialog food-form"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                on:submit=on_form_submit
            >
                <h1>{title}</h1>
                <FormField label="Image" name="image" placeholder="Paste the link here" value=image/>
                <FormField label="Name" name="name" placeholder="e.g. Italian style" value=name/>
                <FormField label="Price" name="price" placeholder="e.g. 19.90" value=price/>
                <FormField label="Description" name="description" placeholder="Description" value=description/>
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! { <p class="food-form__error" role="alert">{message}</p> }
                        })
                }}
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" data-testid=test_id>
                        <span class="btn__text">{submit_label}</span>
                        <span class="btn__icon">"\u{2713}"</span>
                    </button>
                </div>
            </form>
        </div>
    }
}
