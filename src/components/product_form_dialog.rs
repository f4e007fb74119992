//! 商品创建/编辑模态框
//!
//! 同一个表单承担两种模式：`editing` 为 `None` 时创建新商品，
//! 为 `Some(product)` 时回填字段进行编辑。保存动作只负责把
//! 表单内容交给父组件的回调，请求与刷新由父组件完成。

pub mod form_state;

use leptos::prelude::*;

use crate::models::{Product, ProductDraft};
use form_state::FormState;

#[component]
pub fn ProductFormDialog(
    /// 模态框开关，由父组件控制
    open: RwSignal<bool>,
    /// 正在编辑的商品；None 表示创建模式
    editing: RwSignal<Option<Product>>,
    /// 保存回调：(商品 id（编辑模式）, 表单内容)
    #[prop(into)] on_save: Callback<(Option<i64>, ProductDraft)>,
) -> impl IntoView {
    let state = FormState::new();
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    // 打开时按模式初始化表单，关闭时同步 <dialog> 元素状态
    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                match editing.get_untracked() {
                    Some(product) => state.fill(&product),
                    None => state.reset(),
                }
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let is_edit = move || editing.get().is_some();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let id = editing.get_untracked().map(|p| p.id);
        on_save.run((id, state.to_draft()));
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">
                    {move || if is_edit() { "编辑商品" } else { "新增商品" }}
                </h3>

                <form on:submit=on_submit class="space-y-4 mt-4">
                    <div class="form-control">
                        <label for="name" class="label">
                            <span class="label-text">"名称"</span>
                        </label>
                        <input id="name" required
                            type="text"
                            placeholder="商品名称"
                            on:input=move |ev| state.name.set(event_target_value(&ev))
                            prop:value=move || state.name.get()
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="form-control">
                        <label for="description" class="label">
                            <span class="label-text">"描述"</span>
                        </label>
                        <textarea id="description" required
                            placeholder="商品描述"
                            on:input=move |ev| state.description.set(event_target_value(&ev))
                            prop:value=move || state.description.get()
                            class="textarea textarea-bordered w-full"
                        ></textarea>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="price" class="label">
                                <span class="label-text">"价格 (₹)"</span>
                            </label>
                            <input id="price" required
                                type="number" min="0" step="0.01"
                                prop:value=move || state.price.get()
                                on:input=move |ev| {
                                    if let Ok(val) = event_target_value(&ev).parse::<f64>() {
                                        state.price.set(val);
                                    }
                                }
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label for="quantity" class="label">
                                <span class="label-text">"库存数量"</span>
                            </label>
                            <input id="quantity" required
                                type="number" min="0"
                                prop:value=move || state.quantity.get()
                                on:input=move |ev| {
                                    if let Ok(val) = event_target_value(&ev).parse::<u32>() {
                                        state.quantity.set(val);
                                    }
                                }
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label for="image_url" class="label">
                            <span class="label-text">"图片 URL (可选)"</span>
                        </label>
                        <input id="image_url"
                            type="url"
                            placeholder="https://example.com/image.jpg"
                            on:input=move |ev| state.image_url.set(event_target_value(&ev))
                            prop:value=move || state.image_url.get()
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                            "取消"
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {move || if is_edit() { "更新" } else { "创建" }}
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
