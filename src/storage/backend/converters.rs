use crate::storage::{GoLink, UsageEvent};
use migration::entities::{golink, link_usage};

/// 将 Sea-ORM Model 转换为 GoLink
pub fn model_to_golink(model: golink::Model) -> GoLink {
    GoLink {
        id: model.id,
        shortlink: model.shortlink,
        destination: model.destination,
        created_at: model.created_at,
    }
}

pub fn model_to_usage_event(model: link_usage::Model) -> UsageEvent {
    UsageEvent {
        id: model.id,
        shortlink: model.shortlink,
        accessed_at: model.accessed_at,
        query_args: model.query_args,
        user_agent: model.user_agent,
        client_address: model.client_address,
    }
}
