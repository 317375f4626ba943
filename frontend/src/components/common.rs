//! 页面通用的小组件

use leptos::prelude::*;

/// 全屏居中的加载指示
#[component]
pub fn Loading(#[prop(optional)] label: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] gap-3">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            {(!label.is_empty()).then(|| view! { <p class="text-base-content/60">{label}</p> })}
        </div>
    }
}

/// 错误横幅；没有消息时不渲染
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(|m| m.is_some())>
            <div role="alert" class="alert alert-error text-sm py-2">
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// 成功提示
#[component]
pub fn SuccessBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(|m| m.is_some())>
            <div role="status" class="alert alert-success text-sm py-2">
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] icon: &'static str,
    #[prop(optional)] desc: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat">
            {(!icon.is_empty()).then(|| view! { <div class="stat-figure text-3xl">{icon}</div> })}
            <div class="stat-title">{title}</div>
            <div class="stat-value text-primary">{move || value.get()}</div>
            {(!desc.is_empty()).then(|| view! { <div class="stat-desc">{desc}</div> })}
        </div>
    }
}

/// 页面标题栏，右侧放操作按钮
#[component]
pub fn PageHeader(
    #[prop(into)] title: Signal<String>,
    #[prop(optional, into)] subtitle: Signal<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
            <div>
                <h1 class="text-3xl font-bold">{move || title.get()}</h1>
                <p class="text-base-content/70">{move || subtitle.get()}</p>
            </div>
            <div class="flex gap-2">{children.map(|c| c())}</div>
        </div>
    }
}

#[component]
pub fn EmptyState(
    icon: &'static str,
    #[prop(into)] message: Signal<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body items-center text-center py-12">
                <div class="text-5xl">{icon}</div>
                <p class="text-base-content/60">{move || message.get()}</p>
                {children.map(|c| c())}
            </div>
        </div>
    }
}

#[component]
pub fn NotFoundPage(#[prop(optional)] what: &'static str) -> impl IntoView {
    let what = if what.is_empty() { "Page" } else { what };
    view! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">{what} " not found"</p>
            </div>
        </div>
    }
}

/// 浏览器确认框；非浏览器环境视为取消
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
