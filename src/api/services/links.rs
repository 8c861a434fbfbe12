//! 链接 CRUD 接口 `/api/links`

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::{info, trace};

use crate::errors::Result;
use crate::services::{LinkRequest, LinkService};

#[derive(Debug, Deserialize)]
pub struct ListLinksQuery {
    /// Case-insensitive search term
    pub q: Option<String>,
}

/// Body of create and update requests
#[derive(Debug, Deserialize)]
pub struct LinkPayload {
    pub shortlink: String,
    pub destination: String,
}

impl From<LinkPayload> for LinkRequest {
    fn from(payload: LinkPayload) -> Self {
        LinkRequest::new(payload.shortlink, payload.destination)
    }
}

pub async fn list_links(
    query: web::Query<ListLinksQuery>,
    service: web::Data<LinkService>,
) -> Result<HttpResponse> {
    trace!("API: list links, filter {:?}", query.q);

    let links = service.list_links(query.into_inner().q).await?;
    Ok(HttpResponse::Ok().json(links))
}

pub async fn create_link(
    payload: web::Json<LinkPayload>,
    service: web::Data<LinkService>,
) -> Result<HttpResponse> {
    let link = service.create_link(payload.into_inner().into()).await?;

    info!("API: link created: {}", link.shortlink);
    Ok(HttpResponse::Created().json(link))
}

pub async fn update_link(
    path: web::Path<i64>,
    payload: web::Json<LinkPayload>,
    service: web::Data<LinkService>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let link = service.update_link(id, payload.into_inner().into()).await?;

    info!("API: link #{} updated", id);
    Ok(HttpResponse::Ok().json(link))
}

pub async fn delete_link(
    path: web::Path<i64>,
    service: web::Data<LinkService>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    service.delete_link(id).await?;

    info!("API: link #{} deleted", id);
    Ok(HttpResponse::NoContent().finish())
}
