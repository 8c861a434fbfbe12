use actix_web::http::header::{HeaderValue, LOCATION};
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{error, trace};
use url::form_urlencoded;

use super::landing::{landing_page, not_found_page};
use crate::errors::Result;
use crate::services::{RedirectResolver, RequestMeta, Resolution};
use crate::utils::LANDING_KEY;
use crate::utils::ip::extract_client_address;
use crate::utils::is_valid_shortlink;

/// GET /{shortlink}
pub async fn redirect(
    req: HttpRequest,
    path: web::Path<String>,
    resolver: web::Data<RedirectResolver>,
) -> Result<HttpResponse> {
    let shortlink = path.into_inner();

    if !is_valid_shortlink(&shortlink) {
        // 非法 key 不查库
        trace!("Invalid shortlink rejected: {}", shortlink);
        return Ok(not_found_page(None));
    }

    match resolver.resolve(&shortlink, request_meta(&req)).await? {
        Resolution::Redirect(target) => match HeaderValue::from_str(&target) {
            Ok(location) => Ok(HttpResponse::Found()
                .insert_header((LOCATION, location))
                .finish()),
            Err(e) => {
                error!("Invalid Location for '{}' ({:?}): {}", shortlink, target, e);
                Ok(not_found_page(Some(&shortlink)))
            }
        },
        Resolution::NotFound => Ok(not_found_page(Some(&shortlink))),
    }
}

/// GET /go/{shortlink}, kept for links created under the old prefix
pub async fn legacy_redirect(
    req: HttpRequest,
    path: web::Path<String>,
    resolver: web::Data<RedirectResolver>,
) -> Result<HttpResponse> {
    if path.as_str() == LANDING_KEY {
        return Ok(landing_page().await);
    }
    redirect(req, path, resolver).await
}

/// 提取 `q`、User-Agent 和客户端地址
fn request_meta(req: &HttpRequest) -> RequestMeta {
    let query = form_urlencoded::parse(req.query_string().as_bytes())
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.into_owned());

    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(String::from);

    RequestMeta {
        query,
        user_agent,
        client_address: extract_client_address(req),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_request_meta_decodes_q() {
        let req = TestRequest::with_uri("/search?x=1&q=a+b%26c")
            .insert_header(("User-Agent", "curl/8.5.0"))
            .peer_addr("192.0.2.10:40000".parse().unwrap())
            .to_http_request();

        let meta = request_meta(&req);
        assert_eq!(meta.query.as_deref(), Some("a b&c"));
        assert_eq!(meta.user_agent.as_deref(), Some("curl/8.5.0"));
        assert_eq!(meta.client_address.as_deref(), Some("192.0.2.10"));
    }

    #[test]
    fn test_request_meta_without_q() {
        let req = TestRequest::with_uri("/wiki").to_http_request();
        let meta = request_meta(&req);
        assert!(meta.query.is_none());
        assert!(meta.user_agent.is_none());
    }
}
