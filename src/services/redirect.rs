//! Shortlink resolution
//!
//! Looks up a shortlink, records the usage event and computes the redirect
//! target. HTTP concerns stay in `api::services::redirect`.

use std::sync::Arc;

use tracing::{debug, error, warn};
use url::{Url, form_urlencoded};

use crate::errors::Result;
use crate::storage::{NewUsageEvent, SeaOrmStorage, UsageSink};

/// Placeholder replaced by the encoded `q` argument
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Request metadata stored alongside a usage event
#[derive(Debug, Clone, Default)]
pub struct RequestMeta {
    /// Raw `q` query parameter
    pub query: Option<String>,
    pub user_agent: Option<String>,
    pub client_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Redirect(String),
    NotFound,
}

/// 计算跳转目标
///
/// - destination contains `{query}` and `q` is non-empty: every placeholder is
///   replaced with the form-encoded `q` (space becomes `+`)
/// - otherwise a non-empty `q` is appended as `q=<encoded>`, joined with `&`
///   when the destination already has a query string
/// - otherwise the destination is returned unchanged
pub fn build_destination(destination: &str, query: Option<&str>) -> String {
    let Some(q) = query.filter(|q| !q.is_empty()) else {
        return destination.to_string();
    };

    let encoded: String = form_urlencoded::byte_serialize(q.as_bytes()).collect();

    if destination.contains(QUERY_PLACEHOLDER) {
        destination.replace(QUERY_PLACEHOLDER, &encoded)
    } else {
        let separator = if destination.contains('?') { '&' } else { '?' };
        format!("{}{}q={}", destination, separator, encoded)
    }
}

fn is_header_safe(target: &str) -> bool {
    target.bytes().all(|b| (0x20..0x7f).contains(&b))
}

/// Redirect target as a `Location` header can carry it
///
/// Targets that are already visible ASCII pass through untouched. Anything
/// else is re-serialized through `Url`, which percent-encodes the path and
/// punycodes the host. `None` if even that does not yield a usable value.
pub fn location_value(target: &str) -> Option<String> {
    if is_header_safe(target) {
        return Some(target.to_string());
    }
    let url = Url::parse(target).ok()?;
    is_header_safe(url.as_str()).then(|| url.to_string())
}

pub struct RedirectResolver {
    storage: Arc<SeaOrmStorage>,
    usage: Arc<dyn UsageSink>,
}

impl RedirectResolver {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        let usage: Arc<dyn UsageSink> = storage.clone();
        Self { storage, usage }
    }

    /// Use a different sink for usage events (the link lookup still goes to
    /// `storage`)
    pub fn with_usage_sink(storage: Arc<SeaOrmStorage>, usage: Arc<dyn UsageSink>) -> Self {
        Self { storage, usage }
    }

    /// Resolve a shortlink to its redirect target
    ///
    /// Only the lookup can fail. A failed usage write is logged and the
    /// redirect is still returned. A stored destination that cannot be sent
    /// as a `Location` header resolves to `NotFound` and records nothing.
    pub async fn resolve(&self, shortlink: &str, meta: RequestMeta) -> Result<Resolution> {
        let Some(link) = self.storage.get(shortlink).await? else {
            debug!("Shortlink not found: {}", shortlink);
            return Ok(Resolution::NotFound);
        };

        let built = build_destination(&link.destination, meta.query.as_deref());
        let Some(target) = location_value(&built) else {
            error!(
                "Destination of '{}' cannot be used as a redirect target: {:?}",
                link.shortlink, built
            );
            return Ok(Resolution::NotFound);
        };

        let event = NewUsageEvent {
            shortlink: link.shortlink.clone(),
            query_args: meta.query,
            user_agent: meta.user_agent,
            client_address: meta.client_address,
        };
        if let Err(e) = self.usage.record_usage(event).await {
            warn!("Failed to record usage for '{}': {}", link.shortlink, e);
        }

        debug!("Redirecting {} -> {}", link.shortlink, target);
        Ok(Resolution::Redirect(target))
    }
}
