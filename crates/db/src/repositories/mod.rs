mod client_repo;
mod daily_stats_repo;
mod email_case_repo;
mod knowledge_repo;
mod user_repo;
mod vehicle_repo;
mod waitlist_repo;

pub use client_repo::ClientRepo;
pub use daily_stats_repo::DailyStatsRepo;
pub use email_case_repo::EmailCaseRepo;
pub use knowledge_repo::KnowledgeRepo;
pub use user_repo::UserRepo;
pub use vehicle_repo::VehicleRepo;
pub use waitlist_repo::WaitlistRepo;
