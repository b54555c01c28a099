mod menu_cache;
mod multithreaded;

pub use menu_cache::MenuCache;
pub use multithreaded::Multithreaded;
