mod client;
mod endpoint;
mod errors;
pub mod models;
mod region;

pub use client::*;
pub use endpoint::*;
pub use errors::*;
pub use region::*;

#[cfg(test)]
mod tests;
