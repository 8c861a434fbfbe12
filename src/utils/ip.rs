//! 客户端地址提取

use std::net::{IpAddr, SocketAddr};

use actix_web::HttpRequest;

/// Longest textual IPv6 address; matches the `link_usage.client_address` column
const MAX_ADDRESS_LEN: usize = 45;

/// 提取客户端地址
///
/// 优先使用 `Forwarded` / `X-Forwarded-For` 的第一跳，否则使用对端地址。
/// The value is informational only and is never validated against a
/// trusted-proxy list.
pub fn extract_client_address(req: &HttpRequest) -> Option<String> {
    let info = req.connection_info();
    let raw = info.realip_remote_addr()?;
    Some(strip_port(raw))
}

/// `1.2.3.4:5678` → `1.2.3.4`, `[::1]:80` → `::1`; anything unparsable is
/// kept as-is (truncated to the column width).
fn strip_port(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(socket_addr) = raw.parse::<SocketAddr>() {
        return socket_addr.ip().to_string();
    }
    if let Ok(ip) = raw.parse::<IpAddr>() {
        return ip.to_string();
    }
    raw.chars().take(MAX_ADDRESS_LEN).collect()
}
