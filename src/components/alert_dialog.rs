//! Alert Dialog Component
//!
//! Blocking modal for messages raised by navigation (e.g. access denied).

use leptos::prelude::*;
use crate::context::use_nav_context;

/// Modal alert bound to the context's alert signal
///
/// Covers the page until the user confirms; clicks on the backdrop are swallowed.
#[component]
pub fn AlertDialog() -> impl IntoView {
    let ctx = use_nav_context();

    view! {
        <Show when=move || ctx.alert.get().is_some()>
            <div class="alert-backdrop" on:click=move |ev| ev.stop_propagation()>
                <div class="alert-dialog" role="alertdialog">
                    <p class="alert-message">{move || ctx.alert.get().unwrap_or_default()}</p>
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            ctx.dismiss_alert();
                        }
                    >
                        "OK"
                    </button>
                </div>
            </div>
        </Show>
    }
}
