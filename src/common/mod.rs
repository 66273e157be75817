#![allow(unused_imports)]

pub mod chat;
pub mod config;
pub mod deck;
pub mod interests;
pub mod mock;
pub mod photos;
pub mod profile;
pub mod validate;
pub mod wizard;

pub use chat::*;
pub use config::*;
pub use deck::*;
pub use interests::*;
pub use mock::*;
pub use photos::*;
pub use profile::*;
pub use validate::*;
pub use wizard::*;
