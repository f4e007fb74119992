use crate::api::ShopApi;
use crate::auth;
use crate::components::icons::ShoppingBag;
use crate::components::login::auth_error_message;
use crate::models::Credentials;
use crate::route::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

#[component]
pub fn RegisterPage() -> impl IntoView {
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
                match ShopApi::default().register(&credentials).await {
                    Ok(token) => {
                        // 注册即登录：后端直接返回会话令牌
                        auth::save_token(&token.access_token);
                        navigate(&AppRoute::Products.to_path(), Default::default());
                    }
                    Err(e) => {
                        set_error_msg.set(Some(auth_error_message(&e, "注册失败")));
                    }
                }
                set_is_submitting.set(false);
            });
        }
    };

    let goto_login = {
        let navigate = navigate.clone();
        move |_| navigate(&AppRoute::Login.to_path(), Default::default())
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShoppingBag attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"创建账号"</h1>
                        <p class="text-base-content/70">"注册后即可管理商品目录"</p>
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
                            <button class="btn btn-success" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "注册中..." }.into_any()
                                } else {
                                    "注册".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center mt-3 text-sm">
                            "已有账号？"
                            <a class="link link-primary ml-1" on:click=goto_login>"登录"</a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
