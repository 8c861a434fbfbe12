pub mod ip;

/// Key that always renders the landing page (`/go` and `/go/go`)
pub const LANDING_KEY: &str = "go";

/// Keys shadowed by fixed routes; they can never resolve, so they are
/// refused as shortlinks.
pub const RESERVED_SHORTLINKS: &[&str] = &[LANDING_KEY, "api", "health"];

/// 校验短链接格式：非空，只允许字母、数字、`-`、`_`
pub fn is_valid_shortlink(shortlink: &str) -> bool {
    !shortlink.is_empty()
        && shortlink
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Reserved keys are compared case-sensitively, like every other shortlink.
pub fn is_reserved_shortlink(shortlink: &str) -> bool {
    RESERVED_SHORTLINKS.contains(&shortlink)
}

/// 补全协议：没有 http:// 或 https:// 前缀时补 https://
pub fn normalize_destination(destination: &str) -> String {
    if destination.starts_with("http://") || destination.starts_with("https://") {
        destination.to_string()
    } else {
        format!("https://{}", destination)
    }
}
