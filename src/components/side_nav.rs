//! Side Navigation Component
//!
//! Top-level menu list with the active item's second-level entries beneath it.

use leptos::prelude::*;
use portal_nav::MenuItem;
use crate::context::use_nav_context;
use crate::menu_handler::use_menu_handler;
use crate::store::{store_visible_menu, use_app_store, AppStateStoreFields};

#[component]
pub fn SideNav() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_nav_context();
    let handler = use_menu_handler();
    let config = ctx.config();

    let visible_menu = Memo::new(move |_| store_visible_menu(&store, &config));
    let active_menu_id = Memo::new(move |_| store.menu().with(|m| m.active().menu.id.clone()));
    let active_sub_id = Memo::new(move |_| {
        store.menu().with(|m| m.active().sub_menu.as_ref().map(|s| s.id.clone()))
    });

    // Children of the active top-level item, as filtered for this user
    let sub_menus = Memo::new(move |_| {
        let active = active_menu_id.get();
        visible_menu
            .get()
            .into_iter()
            .find(|item| item.id == active)
    });

    view! {
        <nav class="side-nav">
            <ul class="side-nav-menu">
                <For
                    each=move || visible_menu.get()
                    key=|item| item.id.clone()
                    children=move |item: MenuItem| {
                        let id = item.id.clone();
                        let label = item.label.clone();
                        let icon = item.icon.clone();
                        let item_class = move || {
                            if active_menu_id.get() == id { "side-nav-item active" } else { "side-nav-item" }
                        };
                        view! {
                            <li class=item_class on:click=move |_| { handler.click_menu(&item); }>
                                <span class="side-nav-icon">{icon}</span>
                                <span class="side-nav-label">{label}</span>
                            </li>
                        }
                    }
                />
            </ul>

            {move || sub_menus.get().map(|parent| {
                let children = parent.children.clone();
                view! {
                    <ul class="side-nav-sub">
                        {children.into_iter().map(|child| {
                            let id = child.id.clone();
                            let label = child.label.clone();
                            let parent = parent.clone();
                            let sub_class = move || {
                                if active_sub_id.get().as_deref() == Some(id.as_str()) {
                                    "side-nav-sub-item active"
                                } else {
                                    "side-nav-sub-item"
                                }
                            };
                            view! {
                                <li class=sub_class on:click=move |_| { handler.click_sub_menu(&child, &parent); }>
                                    {label}
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }
            })}
        </nav>
    }
}
