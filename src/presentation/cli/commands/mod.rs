pub mod open;
pub mod remotes;
pub mod url;

pub use open::*;
pub use remotes::*;
pub use url::UrlCommand;
