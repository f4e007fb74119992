//! 路由定义模块 - 领域模型
//!
//! 纯粹的路径模型，不依赖 DOM 或 web_sys。实际的路径匹配与
//! History 操作交给 leptos_router；本模块只负责把导航目标
//! 收敛为枚举，避免组件里散落手写路径字符串。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 注册页面
    Register,
    /// 商品列表/管理页面
    Products,
    /// 单个商品详情页面
    ProductDetail(i64),
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/login" => Self::Login,
            "/register" => Self::Register,
            "/products" => Self::Products,
            _ => path
                .strip_prefix("/products/")
                .and_then(|rest| rest.parse::<i64>().ok())
                .map_or(Self::NotFound, Self::ProductDetail),
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Products => "/products".to_string(),
            Self::ProductDetail(id) => format!("/products/{}", id),
            Self::NotFound => "/404".to_string(),
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_login_both_resolve_to_login() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
    }

    #[test]
    fn static_paths_round_trip() {
        for route in [AppRoute::Register, AppRoute::Products] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn detail_path_carries_id() {
        assert_eq!(AppRoute::from_path("/products/42"), AppRoute::ProductDetail(42));
        assert_eq!(AppRoute::ProductDetail(42).to_path(), "/products/42");
    }

    #[test]
    fn unknown_paths_resolve_to_not_found() {
        assert_eq!(AppRoute::from_path("/orders"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/products/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/products/"), AppRoute::NotFound);
    }
}
