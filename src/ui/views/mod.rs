pub mod projection;
pub mod version;
