pub mod analysis_client;
pub mod dto;
pub mod use_case;
