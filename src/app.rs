//! Portal Shell App
//!
//! Side navigation, recent-menu bar and the routed content area.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use portal_nav::{ExternalResetChannel, MenuApi};

use crate::browser::{self, BrowserResetChannel};
use crate::commands::{self, HttpMenuApi};
use crate::config::load_config;
use crate::context::NavContext;
use crate::components::{AlertDialog, RecentMenuBar, SideNav};
use crate::store::{store_apply_menu, store_reset_session, store_sync_path, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    // State
    let store = Store::new(AppState::new(&config));
    let (path, set_path) = signal(browser::current_location_path());
    let (alert, set_alert) = signal::<Option<String>>(None);
    let ctx = NavContext::new(config.clone(), (path, set_path), (alert, set_alert));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    browser::listen_popstate(ctx);
    BrowserResetChannel::new(&config).on_external_reset(Box::new(move |signal| {
        store_reset_session(&store, signal);
    }));

    // Fetch the menu tree once per session
    Effect::new(move |_| {
        let session = store.session().get();
        if !store.menu().write().begin_fetch() {
            return;
        }
        let api = HttpMenuApi::new(ctx.config());
        spawn_local(async move {
            match api.fetch_menu().await {
                // Drop a tree that arrives after a logout
                Ok(_) if store.session().get_untracked() != session => {
                    log::info!("[APP] discarding menu fetched before reset");
                }
                Ok(tree) => store_apply_menu(&store, tree),
                Err(e) => store.menu().read_untracked().fail_fetch(&e),
            }
        });
    });

    // Load the user's permission keys
    Effect::new(move |_| {
        let session = store.session().get();
        let config = ctx.config();
        spawn_local(async move {
            match commands::fetch_permissions(&config).await {
                Ok(_) if store.session().get_untracked() != session => {}
                Ok(permissions) => {
                    log::info!("[APP] loaded {} permission keys", permissions.len());
                    store.permissions().set(permissions);
                }
                Err(e) => log::error!("[APP] permission fetch failed: {}", e),
            }
        });
    });

    // Re-resolve the active menu on path change and on tree reload
    Effect::new(move |_| {
        let _ = store.tree_version().get();
        let current = path.get();
        store_sync_path(&store, &current);
    });

    view! {
        <div class="portal-layout">
            <SideNav />

            <main class="portal-content">
                <RecentMenuBar />

                <Show
                    when=move || store.menu().with(|m| m.is_loaded())
                    fallback=|| view! { <p class="menu-loading">"Loading menu..."</p> }
                >
                    <h1 class="page-title">
                        {move || store.menu().with(|m| {
                            let active = m.active();
                            match &active.sub_menu {
                                Some(sub) => format!("{} / {}", active.menu.label, sub.label),
                                None => active.menu.label.clone(),
                            }
                        })}
                    </h1>
                    <p class="route">{move || path.get()}</p>
                </Show>
            </main>

            <AlertDialog />
        </div>
    }
}
