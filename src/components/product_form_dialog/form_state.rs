//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置与回填（编辑模式）
//! - 数据到请求对象的转换

use leptos::prelude::*;

use crate::models::{Product, ProductDraft};

/// 商品表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub price: RwSignal<f64>,
    pub quantity: RwSignal<u32>,
    /// 图片 URL，空字符串表示未设置
    pub image_url: RwSignal<String>,
}

impl FormState {
    /// 创建新的表单状态，所有字段使用默认值
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            price: RwSignal::new(0.0),
            quantity: RwSignal::new(0),
            image_url: RwSignal::new(String::new()),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.name.set(String::new());
        self.description.set(String::new());
        self.price.set(0.0);
        self.quantity.set(0);
        self.image_url.set(String::new());
    }

    /// 用现有商品回填表单（编辑模式）
    pub fn fill(&self, product: &Product) {
        self.name.set(product.name.clone());
        self.description.set(product.description.clone());
        self.price.set(product.price);
        self.quantity.set(product.quantity);
        self.image_url
            .set(product.image_url.clone().unwrap_or_default());
    }

    /// 将表单状态转换为 API 请求对象
    pub fn to_draft(&self) -> ProductDraft {
        let image_url = self.image_url.get_untracked();
        let image_url = if image_url.trim().is_empty() {
            None
        } else {
            Some(image_url)
        };

        ProductDraft {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            price: self.price.get_untracked(),
            quantity: self.quantity.get_untracked(),
            image_url,
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: 7,
            name: "保温杯".to_string(),
            description: "500ml".to_string(),
            price: 59.0,
            quantity: 12,
            image_url: Some("https://e.com/cup.jpg".to_string()),
        }
    }

    #[test]
    fn fill_then_to_draft_carries_all_fields() {
        let state = FormState::new();
        state.fill(&sample_product());

        let draft = state.to_draft();
        assert_eq!(draft.name, "保温杯");
        assert_eq!(draft.description, "500ml");
        assert_eq!(draft.price, 59.0);
        assert_eq!(draft.quantity, 12);
        assert_eq!(draft.image_url.as_deref(), Some("https://e.com/cup.jpg"));
    }

    #[test]
    fn empty_image_url_maps_to_none() {
        let state = FormState::new();
        state.name.set("x".to_string());
        state.image_url.set("   ".to_string());

        assert_eq!(state.to_draft().image_url, None);
    }

    #[test]
    fn reset_restores_defaults() {
        let state = FormState::new();
        state.fill(&sample_product());
        state.reset();

        let draft = state.to_draft();
        assert_eq!(draft, ProductDraft::default());
    }
}
