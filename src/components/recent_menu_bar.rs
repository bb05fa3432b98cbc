//! Recent Menu Bar Component
//!
//! Shortcuts to the most recently visited second-level menus.

use leptos::prelude::*;
use portal_nav::MenuItem;
use crate::menu_handler::use_menu_handler;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RecentMenuBar() -> impl IntoView {
    let store = use_app_store();
    let handler = use_menu_handler();
    let recent = Memo::new(move |_| store.menu().with(|m| m.recent().to_vec()));

    view! {
        <Show when=move || !recent.get().is_empty()>
            <div class="recent-menu-bar">
                <span class="recent-menu-title">"Recent"</span>
                <For
                    each=move || recent.get()
                    key=|item| item.id.clone()
                    children=move |item: MenuItem| {
                        let label = item.label.clone();
                        view! {
                            <button
                                class="recent-menu-chip"
                                on:click=move |_| { handler.click_recent(&item); }
                            >
                                {label}
                            </button>
                        }
                    }
                />
            </div>
        </Show>
    }
}
