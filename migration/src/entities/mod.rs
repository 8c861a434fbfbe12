pub mod golink;
pub mod link_usage;
