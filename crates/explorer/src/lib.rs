//! Block explorer client and the address activity resolver built on it.

pub mod client;
pub mod decode;
pub mod resolver;

pub use client::ExplorerClient;
pub use resolver::AddressActivityResolver;
