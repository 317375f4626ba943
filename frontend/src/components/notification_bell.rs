//! 导航栏中的通知铃铛

use crate::auth::use_auth;
use crate::notifications::{NotificationFeed, load_feed, mark_all_read, sync_read};
use crate::web::router::use_router;
use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocms_shared::Notification;
use ocms_shared::date::format_date_time;

#[component]
pub fn NotificationBell() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let feed = RwSignal::new(NotificationFeed::default());
    let (open, set_open) = signal(false);

    let api = auth.api();
    spawn_local(async move {
        feed.set(load_feed(&api).await);
    });

    let on_item = move |n: Notification| {
        let changed = feed.try_update(|f| f.mark_read_local(&n.id)).unwrap_or(false);
        if changed {
            let api = auth.api();
            let id = n.id.clone();
            spawn_local(async move { sync_read(&api, &id).await });
        }
        if let Some(url) = n.action_url.as_deref().filter(|u| u.starts_with('/')) {
            set_open.set(false);
            router.navigate(url);
        }
    };

    let on_mark_all = move |_| {
        let api = auth.api();
        spawn_local(async move {
            let mut next = feed.get_untracked();
            match mark_all_read(&api, &mut next).await {
                Ok(()) => feed.update(|f| f.mark_all_read_local()),
                Err(e) => error!("[Notifications] Mark all as read failed: {}", e),
            }
        });
    };

    view! {
        <div class="dropdown dropdown-end">
            <button class="btn btn-ghost btn-circle" on:click=move |_| set_open.update(|o| *o = !*o)>
                <div class="indicator">
                    <span class="text-xl">"🔔"</span>
                    {move || feed.with(|f| f.badge()).map(|b| view! {
                        <span class="badge badge-error badge-xs indicator-item">{b}</span>
                    })}
                </div>
            </button>
            <Show when=move || open.get()>
                <div class="dropdown-content z-50 card card-compact w-80 bg-base-100 shadow-xl mt-2">
                    <div class="card-body">
                        <div class="flex items-center justify-between">
                            <h3 class="font-bold">"Notifications"</h3>
                            <Show when=move || { feed.with(|f| f.unread > 0) }>
                                <button class="btn btn-link btn-xs" on:click=on_mark_all>"Mark all as read"</button>
                            </Show>
                        </div>
                        <Show
                            when=move || feed.with(|f| !f.items.is_empty())
                            fallback=|| view! { <p class="text-center text-base-content/50 py-4">"No notifications"</p> }
                        >
                            <ul class="max-h-96 overflow-y-auto divide-y divide-base-200">
                                <For
                                    each=move || feed.get().items
                                    key=|n| (n.id.clone(), n.is_read)
                                    children=move |n: Notification| {
                                        let item = n.clone();
                                        let class = if n.is_read { "py-2 cursor-pointer" } else { "py-2 cursor-pointer bg-primary/5" };
                                        view! {
                                            <li class=class on:click=move |_| on_item(item.clone())>
                                                <div class="flex gap-2">
                                                    <span>{n.kind.icon()}</span>
                                                    <div class="flex-1">
                                                        <p class="font-medium text-sm">{n.title.clone()}</p>
                                                        <p class="text-xs text-base-content/70">{n.message.clone()}</p>
                                                        <p class="text-xs text-base-content/40">
                                                            {n.created_at.map(format_date_time).unwrap_or_default()}
                                                        </p>
                                                    </div>
                                                    {(!n.is_read).then(|| view! { <span class="badge badge-primary badge-xs"></span> })}
                                                </div>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}
