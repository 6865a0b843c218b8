pub mod client;
pub mod daily_stats;
pub mod email_case;
pub mod enums;
pub mod knowledge_item;
pub mod user;
pub mod vehicle;
pub mod waitlist_request;
