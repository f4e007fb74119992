use crate::api::{ApiError, ShopApi};
use crate::auth;
use crate::components::icons::ShoppingBag;
use crate::models::Credentials;
use crate::route::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

/// 认证失败时展示给用户的消息：优先服务端 detail，否则通用回退
pub(super) fn auth_error_message(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Server { detail, .. } => detail.clone(),
        _ => fallback.to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();

            set_is_submitting.set(true);
            set_error_msg.set(None);

            let credentials = Credentials {
                username: username.get(),
                password: password.get(),
            };
            let navigate = navigate.clone();
            spawn_local(async move {
                match ShopApi::default().login(&credentials).await {
                    Ok(token) => {
                        auth::save_token(&token.access_token);
                        navigate(&AppRoute::Products.to_path(), Default::default());
                    }
                    Err(e) => {
                        set_error_msg.set(Some(auth_error_message(&e, "用户名或密码错误")));
                    }
                }
                set_is_submitting.set(false);
            });
        }
    };

    let goto_register = {
        let navigate = navigate.clone();
        move |_| navigate(&AppRoute::Register.to_path(), Default::default())
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShoppingBag attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Shopfront"</h1>
                        <p class="text-base-content/70">"登录以管理商品目录"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"用户名"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                placeholder="username"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"密码"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "登录中..." }.into_any()
                                } else {
                                    "登录".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center mt-3 text-sm">
                            "还没有账号？"
                            <a class="link link-primary ml-1" on:click=goto_register>"注册"</a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
