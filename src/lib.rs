//! Shopfront 前端应用
//!
//! 基于 Leptos CSR 的商品管理单页应用：
//! - `api`: HTTP 客户端封装（自动附加 Bearer Token）
//! - `auth`: 会话令牌的本地持久化
//! - `models`: 与后端约定的数据模型
//! - `route`: 路由定义（领域模型）
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    mod icons;
    pub mod login;
    pub mod product_detail;
    mod product_form_dialog;
    pub mod products;
    pub mod register;
}
mod models;
mod route;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::login::LoginPage;
use crate::components::product_detail::ProductDetailPage;
use crate::components::products::ProductsPage;
use crate::components::register::RegisterPage;

#[component]
pub fn App() -> impl IntoView {
    // 静态路由表，无守卫：未认证访问受保护页面时，
    // 由页面自身对 401 响应做出反应（见 products 组件）。
    view! {
        <Router>
            <Routes fallback=|| view! {
                <div class="flex items-center justify-center min-h-screen bg-base-200">
                    <div class="text-center">
                        <h1 class="text-6xl font-bold text-error">"404"</h1>
                        <p class="text-xl mt-4">"页面未找到"</p>
                    </div>
                </div>
            }>
                <Route path=path!("/") view=LoginPage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <Route path=path!("/products") view=ProductsPage />
                <Route path=path!("/products/:id") view=ProductDetailPage />
            </Routes>
        </Router>
    }
}
