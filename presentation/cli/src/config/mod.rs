pub mod app_config;
pub mod openai_config;
