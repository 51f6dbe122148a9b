pub mod delete;
pub mod editor;
pub mod export;
pub mod filter;
pub mod log;
pub mod review;
pub mod routes;
pub mod session;
pub mod task_cache;
pub mod timesheet;
pub mod workflow;
