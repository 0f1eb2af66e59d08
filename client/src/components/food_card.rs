//! Card for one dish: image, details, price, edit/delete actions and the
//! availability switch.

#[cfg(test)]
#[path = "food_card_test.rs"]
mod food_card_test;

use leptos::prelude::*;
use menu::{Food, FoodId};

pub(crate) fn availability_label(available: bool) -> &'static str {
    if available { "Available" } else { "Unavailable" }
}

pub(crate) fn card_class(available: bool) -> &'static str {
    if available {
        "food-card"
    } else {
        "food-card food-card--unavailable"
    }
}

/// A dish in the list.
///
/// The switch reflects `food.available` only; it changes once the page has
/// applied the server's answer to `on_toggle`.
#[component]
pub fn FoodCard(
    food: Food,
    on_edit: Callback<Food>,
    on_delete: Callback<FoodId>,
    on_toggle: Callback<FoodId>,
) -> impl IntoView {
    let id = food.id;
    let available = food.available;
    let edit_target = food.clone();
    let Food { name, image, price, description, .. } = food;
    let switch_class = if available { "switch switch--on" } else { "switch" };
    let checked = if available { "true" } else { "false" };

    view! {
        <article class=card_class(available) data-testid=format!("food-{id}")>
            <header class="food-card__image">
                <img src=image alt=name.clone()/>
            </header>
            <section class="food-card__body">
                <h2>{name}</h2>
                <p>{description}</p>
                <p class="food-card__price">
                    <b>{price.label()}</b>
                </p>
            </section>
            <section class="food-card__footer">
                <div class="food-card__actions">
                    <button
                        class="icon-btn"
                        title="Edit dish"
                        data-testid=format!("edit-food-{id}")
                        on:click=move |_| on_edit.run(edit_target.clone())
                    >
                        "\u{270E}"
                    </button>
                    <button
                        class="icon-btn"
                        title="Delete dish"
                        data-testid=format!("remove-food-{id}")
                        on:click=move |_| on_delete.run(id)
                    >
                        "\u{2715}"
                    </button>
                </div>
                <div class="food-card__availability">
                    <p>{availability_label(available)}</p>
                    <button
                        class=switch_class
                        role="switch"
                        aria-checked=checked
                        data-testid=format!("change-status-food-{id}")
                        on:click=move |_| on_toggle.run(id)
                    >
                        <span class="switch__slider"></span>
                    </button>
                </div>
            </section>
        </article>
    }
}
