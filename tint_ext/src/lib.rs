pub mod host;
pub mod sanitise;

pub use host::{ColorExt, HostColor};
pub use sanitise::{ToColor, trim_non_alphanumeric};
