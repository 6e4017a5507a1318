//! Domain model: remotes, remote URLs and branch names

pub mod entities;
pub mod value_objects;
