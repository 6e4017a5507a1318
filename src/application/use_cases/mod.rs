pub mod list_remotes;
pub mod resolve_web_url;

pub use list_remotes::{ListRemotesConfig, ListRemotesUseCase};
pub use resolve_web_url::{ResolveWebUrlConfig, ResolveWebUrlUseCase, ResolvedWebUrl};
