use crate::auth::use_auth;
use crate::components::common::{EmptyState, ErrorBanner, Loading, PageHeader, SuccessBanner};
use crate::forms::direct_message_draft;
use crate::state::replace_by_id;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocms_shared::date::format_opt;
use ocms_shared::{Message, MessageType};

fn type_badge(kind: MessageType) -> (&'static str, &'static str) {
    match kind {
        MessageType::Direct => ("badge badge-primary badge-sm", "Direct"),
        MessageType::CourseAnnouncement => ("badge badge-secondary badge-sm", "Announcement"),
        MessageType::Group => ("badge badge-accent badge-sm", "Group"),
        MessageType::System => ("badge badge-ghost badge-sm", "System"),
    }
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    let auth = use_auth();
    let (messages, set_messages) = signal(Vec::<Message>::new());
    let (open_id, set_open_id) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let (receiver, set_receiver) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (sending, set_sending) = signal(false);
    let (notice, set_notice) = signal(Option::<String>::None);

    let api = auth.api();
    spawn_local(async move {
        match api.communication().my_messages().await {
            Ok(list) => set_messages.set(list),
            Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to load messages"))),
        }
        set_loading.set(false);
    });

    // 展开未读消息时同步已读状态；失败只记录，不打断阅读
    let on_open = move |msg_id: String, is_read: bool| {
        let opening = open_id.with_untracked(|o| o.as_deref() != Some(msg_id.as_str()));
        set_open_id.set(opening.then(|| msg_id.clone()));
        if !opening || is_read {
            return;
        }
        let api = auth.api();
        spawn_local(async move {
            match api.communication().mark_message_read(&msg_id).await {
                Ok(updated) => set_messages.update(|list| {
                    replace_by_id(list, updated);
                }),
                Err(e) => warn!("[Messages] Failed to mark {} as read: {}", msg_id, e),
            }
        });
    };

    let on_send = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let draft = match direct_message_draft(&receiver.get_untracked(), &content.get_untracked()) {
            Ok(d) => d,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_sending.set(true);
        set_error.set(None);
        set_notice.set(None);
        let api = auth.api();
        spawn_local(async move {
            match api.communication().send_direct(draft).await {
                Ok(_) => {
                    set_content.set(String::new());
                    set_notice.set(Some("Message sent".to_string()));
                }
                Err(e) => set_error.set(Some(auth.error_message(&e, "Failed to send message"))),
            }
            set_sending.set(false);
        });
    };

    let unread = Memo::new(move |_| messages.with(|m| m.iter().filter(|m| !m.is_read).count()));

    view! {
        <div class="max-w-6xl mx-auto p-4 md:p-8 space-y-6">
            <PageHeader title="Messages" subtitle=Signal::derive(move || format!("{} unread", unread.get())) />
            <ErrorBanner message=error />
            <SuccessBanner message=notice />

            <div class="grid lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2">
                    <Show when=move || !loading.get() fallback=|| view! { <Loading label="Loading messages..." /> }>
                        <Show
                            when=move || messages.with(|m| !m.is_empty())
                            fallback=|| view! { <EmptyState icon="💬" message="No messages yet" /> }
                        >
                            <ul class="space-y-2">
                                <For
                                    each=move || messages.get()
                                    key=|m| (m.id.clone(), m.is_read)
                                    children=move |m: Message| {
                                        let id = StoredValue::new(m.id.clone());
                                        let is_read = m.is_read;
                                        let expanded = Memo::new(move |_| open_id.with(|o| o.as_deref() == Some(id.get_value().as_str())));
                                        let (badge, label) = type_badge(m.message_type);
                                        let preview: String = m.content.chars().take(80).collect();
                                        let body = m.content.clone();
                                        let sender = m.sender_name().to_string();
                                        let course = m.course.as_ref().and_then(|c| c.populated()).map(|c| c.title.clone());
                                        view! {
                                            <li
                                                class=if is_read { "card bg-base-100 shadow cursor-pointer" } else { "card bg-base-100 shadow cursor-pointer border-l-4 border-primary" }
                                                on:click=move |_| on_open(id.get_value(), is_read)
                                            >
                                                <div class="card-body p-4">
                                                    <div class="flex items-center gap-2">
                                                        <span class="font-semibold">{sender}</span>
                                                        <span class=badge>{label}</span>
                                                        {course.map(|t| view! { <span class="text-xs text-base-content/60">{t}</span> })}
                                                        <span class="ml-auto text-xs text-base-content/50">{format_opt(m.created_at)}</span>
                                                    </div>
                                                    <Show
                                                        when=move || expanded.get()
                                                        fallback={
                                                            let preview = preview.clone();
                                                            move || view! { <p class="text-sm text-base-content/70 truncate">{preview.clone()}</p> }
                                                        }
                                                    >
                                                        <p class="text-sm whitespace-pre-wrap">{body.clone()}</p>
                                                    </Show>
                                                </div>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        </Show>
                    </Show>
                </div>

                <div class="card bg-base-100 shadow h-fit">
                    <form class="card-body space-y-3" on:submit=on_send>
                        <h2 class="card-title">"Send Message"</h2>
                        <div class="form-control">
                            <label class="label" for="receiver"><span class="label-text">"Recipient ID"</span></label>
                            <input id="receiver" type="text" required class="input input-bordered"
                                prop:value=receiver
                                on:input=move |ev| set_receiver.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="message"><span class="label-text">"Message"</span></label>
                            <textarea id="message" rows="4" required class="textarea textarea-bordered"
                                prop:value=content
                                on:input=move |ev| set_content.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                            {move || if sending.get() { "Sending..." } else { "Send" }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
