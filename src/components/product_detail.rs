use crate::api::ShopApi;
use crate::components::icons::ArrowLeft;
use crate::models::Product;
use crate::route::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

/// 商品详情页面
///
/// 挂载时按路径参数拉取单个商品。请求失败（包括 404）只记录
/// 到控制台，页面停留在加载占位上。
#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let navigate = use_navigate();
    let params = use_params_map();

    let (product, set_product) = signal(Option::<Product>::None);

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id").and_then(|s| s.parse::<i64>().ok()));
        if let Some(id) = id {
            spawn_local(async move {
                match ShopApi::default().get_product(id).await {
                    Ok(p) => set_product.set(Some(p)),
                    Err(e) => leptos::logging::error!("获取商品 {} 失败: {}", id, e),
                }
            });
        }
    });

    let goto_products = {
        let navigate = navigate.clone();
        move |_| navigate(&AppRoute::Products.to_path(), Default::default())
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-3xl mx-auto">
                <button class="btn btn-ghost gap-2 mb-4" on:click=goto_products>
                    <ArrowLeft attr:class="h-4 w-4" /> "返回列表"
                </button>

                <Show
                    when=move || product.get().is_some()
                    fallback=|| view! {
                        <div class="text-center py-16 text-base-content/50">
                            <span class="loading loading-spinner loading-lg"></span>
                            <p class="mt-2">"加载中..."</p>
                        </div>
                    }
                >
                    {move || product.get().map(|p| view! {
                        <div class="card bg-base-100 shadow-xl">
                            {p.image_url.clone().map(|url| view! {
                                <figure class="h-64 overflow-hidden">
                                    <img src=url alt=p.name.clone() class="object-cover w-full h-full" />
                                </figure>
                            })}
                            <div class="card-body">
                                <h1 class="card-title text-3xl">{p.name.clone()}</h1>
                                <p class="text-base-content/70">{p.description.clone()}</p>
                                <div class="flex items-center gap-4 mt-4">
                                    <span class="text-2xl font-bold text-primary">"₹" {p.price}</span>
                                    <span class="badge badge-ghost">"库存: " {p.quantity}</span>
                                </div>
                            </div>
                        </div>
                    })}
                </Show>
            </div>
        </div>
    }
}
