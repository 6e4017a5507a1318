pub mod remote;

pub use remote::{Remote, RemoteDirection};
