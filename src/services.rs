pub mod fetch_service;
pub mod github_user_service;
