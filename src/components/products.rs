use crate::api::{ApiError, ShopApi};
use crate::auth;
use crate::components::icons::*;
use crate::components::product_form_dialog::ProductFormDialog;
use crate::models::{Product, ProductDraft};
use crate::route::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// 商品列表/管理页面
///
/// 挂载时拉取完整商品集合；所有变更（创建/更新/删除）成功后
/// 无条件重新拉取整个集合，不做本地局部修补。
#[component]
pub fn ProductsPage() -> impl IntoView {
    let navigate = use_navigate();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (session_expired, set_session_expired) = signal(false);

    let modal_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<Product>::None);

    // 401 意味着会话失效：清除令牌并标记过期，由下方 Effect 重定向。
    // 其余错误只在本页面展示，不打断用户。
    let handle_error = move |prefix: &str, e: ApiError| {
        if e.is_unauthorized() {
            auth::clear_token();
            set_error_msg.set(Some("会话已过期，请重新登录".to_string()));
            set_session_expired.set(true);
        } else {
            set_error_msg.set(Some(format!("{}: {}", prefix, e)));
        }
    };

    // 会话过期时重定向到登录页
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            if session_expired.get() {
                navigate(&AppRoute::Login.to_path(), Default::default());
            }
        }
    });

    let load_products = move || {
        set_loading.set(true);
        spawn_local(async move {
            match ShopApi::default().get_products().await {
                Ok(list) => set_products.set(list),
                Err(e) => handle_error("加载商品失败", e),
            }
            set_loading.set(false);
        });
    };

    // 初始加载
    Effect::new(move |_| load_products());

    let open_create_modal = move |_| {
        editing.set(None);
        modal_open.set(true);
    };

    let handle_save = move |(id, draft): (Option<i64>, ProductDraft)| {
        set_error_msg.set(None);
        spawn_local(async move {
            let api = ShopApi::default();
            let result = match id {
                Some(id) => api.update_product(id, &draft).await.map(|_| ()),
                None => api.create_product(&draft).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    modal_open.set(false);
                    editing.set(None);
                    load_products();
                }
                Err(e) => handle_error("保存商品失败", e),
            }
        });
    };

    let handle_delete = move |product: Product| {
        // 删除前必须经过用户确认，取消则不发出任何请求
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("确定要删除商品「{}」吗？", product.name))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        set_error_msg.set(None);
        spawn_local(async move {
            match ShopApi::default().delete_product(product.id).await {
                Ok(()) => load_products(),
                Err(e) => handle_error("删除商品失败", e),
            }
        });
    };

    let on_logout = {
        let navigate = navigate.clone();
        move |_| {
            auth::clear_token();
            navigate(&AppRoute::Login.to_path(), Default::default());
        }
    };

    let total = move || products.with(|p| p.len());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-6">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <ShoppingBag attr:class="text-primary h-6 w-6" />
                        <a class="btn btn-ghost text-xl">"商品目录"</a>
                        <span class="badge badge-neutral hidden md:inline-flex">
                            "共 " {total} " 件商品"
                        </span>
                    </div>
                    <div class="flex-none gap-2">
                        <button
                            on:click=move |_| load_products()
                            disabled=move || loading.get()
                            class="btn btn-ghost btn-circle"
                        >
                            <RefreshCw attr:class=move || if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                        </button>
                        <button on:click=open_create_modal class="btn btn-primary gap-2">
                            <Plus attr:class="h-4 w-4" /> "新增商品"
                        </button>
                        <button on:click=on_logout class="btn btn-outline btn-error gap-2">
                            <LogOut attr:class="h-4 w-4" /> "退出登录"
                        </button>
                    </div>
                </div>

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error shadow-lg">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                        <button class="btn btn-sm btn-ghost" on:click=move |_| set_error_msg.set(None)>
                            "关闭"
                        </button>
                    </div>
                </Show>

                <Show when=move || loading.get() && total() == 0>
                    <div class="text-center py-16 text-base-content/50">
                        <span class="loading loading-spinner loading-lg"></span>
                        <p class="mt-2">"加载中..."</p>
                    </div>
                </Show>

                <Show when=move || !loading.get() && total() == 0>
                    <div class="text-center py-16 text-base-content/50">
                        "暂无商品。点击「新增商品」开始。"
                    </div>
                </Show>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    <For
                        each=move || products.get()
                        key=|p| p.id
                        children=move |product: Product| {
                            let detail_path = AppRoute::ProductDetail(product.id).to_path();
                            let edit_product = product.clone();
                            let delete_product = product.clone();
                            view! {
                                <div class="card bg-base-100 shadow-xl hover:shadow-2xl transition-shadow">
                                    {product.image_url.clone().map(|url| view! {
                                        <figure class="h-40 overflow-hidden">
                                            <img src=url alt=product.name.clone() class="object-cover w-full h-full" />
                                        </figure>
                                    })}
                                    <A href=detail_path attr:class="card-body cursor-pointer text-inherit no-underline">
                                        <h2 class="card-title">{product.name.clone()}</h2>
                                        <p class="text-base-content/70 line-clamp-2">{product.description.clone()}</p>
                                        <div class="flex items-center justify-between mt-2">
                                            <span class="badge badge-ghost">"库存: " {product.quantity}</span>
                                            <span class="text-primary font-bold text-lg">"₹" {product.price}</span>
                                        </div>
                                    </A>
                                    <div class="card-actions justify-end p-4 pt-0">
                                        <button
                                            class="btn btn-ghost btn-sm btn-square"
                                            title="编辑商品"
                                            on:click=move |_| {
                                                editing.set(Some(edit_product.clone()));
                                                modal_open.set(true);
                                            }
                                        >
                                            <Pencil attr:class="h-4 w-4" />
                                        </button>
                                        <button
                                            class="btn btn-ghost btn-sm btn-square text-error"
                                            title="删除商品"
                                            on:click=move |_| handle_delete(delete_product.clone())
                                        >
                                            <Trash2 attr:class="h-4 w-4" />
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>

                <ProductFormDialog open=modal_open editing=editing on_save=handle_save />
            </div>
        </div>
    }
}
