// Command handlers module
pub mod clean_temp;
pub mod dashboard;
pub mod flush_dns;
pub mod info;

// Re-exports for cleaner imports
pub use clean_temp::execute as clean_temp;
pub use dashboard::execute as dashboard;
pub use flush_dns::execute as flush_dns;
pub use info::execute as info;
