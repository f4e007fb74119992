//! 数据模型模块
//!
//! 与后端 API 约定的请求/响应结构体。字段命名与后端的
//! snake_case 一致，序列化无需额外 rename。

use serde::{Deserialize, Serialize};

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 商品实体，由后端拥有；前端只持有只读副本或编辑缓冲。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: u32,
    // 后端可能返回 null 或省略该字段
    #[serde(default)]
    pub image_url: Option<String>,
}

/// 创建/更新商品的请求体（不含 id，id 由路径携带）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: u32,
    pub image_url: Option<String>,
}

// =========================================================
// 认证 (Auth)
// =========================================================

/// 登录/注册凭据，仅在表单提交瞬间存在。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// 认证端点的响应：不透明的 Bearer Token。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_deserializes_without_image_url() {
        let json = r#"{"id":1,"name":"茶杯","description":"陶瓷","price":9.5,"quantity":3}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 1);
        assert_eq!(p.image_url, None);
    }

    #[test]
    fn product_deserializes_with_null_image_url() {
        let json =
            r#"{"id":2,"name":"a","description":"b","price":0.0,"quantity":0,"image_url":null}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.image_url, None);
    }

    #[test]
    fn product_deserializes_with_image_url() {
        let json = r#"{"id":3,"name":"a","description":"b","price":1.0,"quantity":1,"image_url":"https://e.com/x.jpg"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.image_url.as_deref(), Some("https://e.com/x.jpg"));
    }

    #[test]
    fn draft_serializes_all_fields() {
        let draft = ProductDraft {
            name: "台灯".to_string(),
            description: "床头".to_string(),
            price: 49.9,
            quantity: 10,
            image_url: None,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["name"], "台灯");
        assert_eq!(value["quantity"], 10);
        assert!(value["image_url"].is_null());
    }

    #[test]
    fn token_response_decodes() {
        let json = r#"{"access_token":"T","token_type":"bearer"}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "T");
    }
}
