//! API 客户端模块
//!
//! 对后端 REST 接口的薄封装。每次请求发出前读取本地存储中的
//! 会话令牌并附加 `Authorization: Bearer <token>` 头；令牌不存在
//! 时不改动请求头。不做重试、超时或退避，失败原样向调用方传播。

use gloo_net::http::{Request, RequestBuilder, Response};

use crate::auth;
use crate::models::{Credentials, Product, ProductDraft, TokenResponse};

/// 后端默认地址（开发环境）
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// API 错误类型
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 网络请求失败（未收到响应）
    Network(String),
    /// 响应体解析失败
    Decode(String),
    /// 服务端返回非 2xx 状态码
    Server { status: u16, detail: String },
}

impl ApiError {
    /// 该错误是否为认证失败（会话过期/未登录）
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Server { status: 401, .. })
    }
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "网络错误: {}", msg),
            ApiError::Decode(msg) => write!(f, "响应解析失败: {}", msg),
            ApiError::Server { detail, .. } => write!(f, "{}", detail),
        }
    }
}

/// 从服务端错误响应体中提取人类可读的 detail 字段
///
/// 后端以 `{"detail": "..."}` 的形式返回错误说明；
/// 解析失败时回退为带状态码的通用消息。
fn extract_detail(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            let detail = value.get("detail")?;
            match detail {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Null => None,
                other => Some(other.to_string()),
            }
        })
        .unwrap_or_else(|| format!("请求失败 (HTTP {})", status))
}

/// 构造 Authorization 头的值
fn bearer_value(token: &str) -> String {
    format!("Bearer {}", token)
}

/// 将凭据编码为 `POST /token` 要求的 form-urlencoded 请求体
fn encode_credentials(credentials: &Credentials) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("username", &credentials.username)
        .append_pair("password", &credentials.password)
        .finish()
}

/// 后端 API 客户端
///
/// 自身无状态：令牌不缓存在客户端实例里，而是每次请求时
/// 从 LocalStorage 读取，保证强制登出后旧实例不会继续带旧令牌。
#[derive(Debug, Clone, PartialEq)]
pub struct ShopApi {
    base_url: String,
}

impl Default for ShopApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_string())
    }
}

impl ShopApi {
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    // 请求拦截：令牌存在时附加认证头，否则原样返回
    fn authorize(builder: RequestBuilder) -> RequestBuilder {
        match auth::load_token() {
            Some(token) => builder.header("Authorization", &bearer_value(&token)),
            None => builder,
        }
    }

    // 非 2xx 响应统一转换为 ApiError::Server
    async fn ensure_success(res: Response) -> Result<Response, ApiError> {
        if res.ok() {
            Ok(res)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::Server {
                status,
                detail: extract_detail(status, &body),
            })
        }
    }

    /// 注册新用户，成功时返回会话令牌
    pub async fn register(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        let res = Self::authorize(Request::post(&self.url("/register")))
            .header("Content-Type", "application/json")
            .json(credentials)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let res = Self::ensure_success(res).await?;
        res.json::<TokenResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 登录，成功时返回会话令牌
    ///
    /// 后端的 token 端点接收 form-urlencoded 而非 JSON。
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        let res = Self::authorize(Request::post(&self.url("/token")))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(encode_credentials(credentials))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let res = Self::ensure_success(res).await?;
        res.json::<TokenResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 获取商品列表
    pub async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        let res = Self::authorize(Request::get(&self.url("/products")))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let res = Self::ensure_success(res).await?;
        res.json::<Vec<Product>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 获取单个商品
    pub async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        let res = Self::authorize(Request::get(&self.url(&format!("/products/{}", id))))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let res = Self::ensure_success(res).await?;
        res.json::<Product>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 创建商品
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        let res = Self::authorize(Request::post(&self.url("/products")))
            .header("Content-Type", "application/json")
            .json(draft)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let res = Self::ensure_success(res).await?;
        res.json::<Product>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 更新商品
    pub async fn update_product(&self, id: i64, draft: &ProductDraft) -> Result<Product, ApiError> {
        let res = Self::authorize(Request::put(&self.url(&format!("/products/{}", id))))
            .header("Content-Type", "application/json")
            .json(draft)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let res = Self::ensure_success(res).await?;
        res.json::<Product>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 删除商品
    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        let res = Self::authorize(Request::delete(&self.url(&format!("/products/{}", id))))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::ensure_success(res).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_with_leading_slash() {
        let api = ShopApi::new("http://127.0.0.1:8000".to_string());
        assert_eq!(api.url("/products"), "http://127.0.0.1:8000/products");
    }

    #[test]
    fn url_joins_without_leading_slash() {
        let api = ShopApi::new("http://127.0.0.1:8000".to_string());
        assert_eq!(api.url("products"), "http://127.0.0.1:8000/products");
    }

    #[test]
    fn new_trims_trailing_slash() {
        let api = ShopApi::new("http://example.com/".to_string());
        assert_eq!(api.url("/token"), "http://example.com/token");
    }

    #[test]
    fn bearer_value_formats_header() {
        assert_eq!(bearer_value("T"), "Bearer T");
    }

    #[test]
    fn encode_credentials_escapes_reserved_chars() {
        let body = encode_credentials(&Credentials {
            username: "a b".to_string(),
            password: "p&w=1".to_string(),
        });
        assert_eq!(body, "username=a+b&password=p%26w%3D1");
    }

    #[test]
    fn extract_detail_reads_string_field() {
        let detail = extract_detail(400, r#"{"detail":"Username already registered"}"#);
        assert_eq!(detail, "Username already registered");
    }

    #[test]
    fn extract_detail_stringifies_non_string_field() {
        // FastAPI 的校验错误会把 detail 设为数组
        let detail = extract_detail(422, r#"{"detail":[{"msg":"field required"}]}"#);
        assert_eq!(detail, r#"[{"msg":"field required"}]"#);
    }

    #[test]
    fn extract_detail_falls_back_on_invalid_body() {
        assert_eq!(extract_detail(500, "<html>boom</html>"), "请求失败 (HTTP 500)");
        assert_eq!(extract_detail(401, ""), "请求失败 (HTTP 401)");
    }

    #[test]
    fn unauthorized_detection() {
        let err = ApiError::Server {
            status: 401,
            detail: "Could not validate token".to_string(),
        };
        assert!(err.is_unauthorized());

        let err = ApiError::Server {
            status: 404,
            detail: "Product not found".to_string(),
        };
        assert!(!err.is_unauthorized());
        assert!(!ApiError::Network("offline".to_string()).is_unauthorized());
    }

    #[test]
    fn display_uses_server_detail_verbatim() {
        let err = ApiError::Server {
            status: 400,
            detail: "Username already registered".to_string(),
        };
        assert_eq!(err.to_string(), "Username already registered");
    }
}
