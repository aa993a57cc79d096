pub mod paths;

pub use paths::SipPaths;
