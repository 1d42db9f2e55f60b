pub mod common;
pub mod v1alpha1;
pub mod v1beta1;

pub use common::*;
