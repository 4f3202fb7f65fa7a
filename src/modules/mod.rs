// Module declarations
pub mod analytics;
pub mod capture;
pub mod config;
pub mod entry;
pub mod mood;
pub mod store;
pub mod theme;
pub mod view_state;
