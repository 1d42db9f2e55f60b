pub mod conditions;
pub mod constants;
pub mod conversion;
pub mod errors;
pub mod logging;
pub mod refs;
pub mod resources;
pub mod time;
pub mod validation;

pub mod prelude {
    pub use cx_api::v1alpha1;
    pub use cx_api::v1beta1;
    pub use cx_api::{
        RemoteStatus,
        RemoteSynced,
        ResourceRef,
    };
    pub use cx_client::CoralogixApi;
    pub use k8s_openapi::api::core::v1 as corev1;
    pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
    pub use kube::{
        CustomResourceExt,
        ResourceExt,
    };

    pub use crate::constants::*;
    pub use crate::errors::EmptyResult;
    pub use crate::refs::RefResolver;
    pub use crate::resources::CoralogixResource;
    pub use crate::validation::{
        Validate,
        ValidationError,
    };
}

#[cfg(test)]
mod tests;
