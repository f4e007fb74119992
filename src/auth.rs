//! 认证模块
//!
//! 管理会话令牌在 LocalStorage 中的持久化。
//! 令牌在登录/注册成功时写入，由 API 客户端在每次请求前读取，
//! 在检测到 401（会话失效）时删除。

use gloo_storage::{LocalStorage, Storage};

const STORAGE_TOKEN_KEY: &str = "shopfront_token";

/// 持久化会话令牌
pub fn save_token(token: &str) {
    let _ = LocalStorage::set(STORAGE_TOKEN_KEY, token);
}

/// 读取已持久化的令牌
///
/// # 返回
/// - `Some(String)` 如果存在有效令牌
/// - `None` 如果从未登录或令牌已被清除
pub fn load_token() -> Option<String> {
    LocalStorage::get(STORAGE_TOKEN_KEY).ok()
}

/// 清除令牌（显式登出或 401 强制登出）
pub fn clear_token() {
    LocalStorage::delete(STORAGE_TOKEN_KEY);
}
