use async_trait::async_trait;
use cx_api::v1alpha1::*;
use cx_client::Endpoint;
use cx_client::models::ip_access as models;

use super::CoralogixResource;
use crate::refs::RefResolver;
use crate::validation::{
    Validate,
    ValidationError,
    Validator,
};

#[async_trait]
impl CoralogixResource for IPAccess {
    type Request = models::IpAccessSettingsRequest;

    fn endpoint() -> Endpoint {
        models::IP_ACCESS
    }

    async fn extract_request(&self, _: &RefResolver) -> anyhow::Result<models::IpAccessSettingsRequest> {
        let spec = &self.spec;
        Ok(models::IpAccessSettingsRequest {
            enable_coralogix_customer_support_access: match spec.enable_coralogix_customer_support_access {
                CustomerSupportAccess::Unspecified => models::CoralogixCustomerSupportAccess::Unspecified,
                CustomerSupportAccess::Disabled => models::CoralogixCustomerSupportAccess::Disabled,
                CustomerSupportAccess::Enabled => models::CoralogixCustomerSupportAccess::Enabled,
            },
            ip_access: spec
                .ip_access
                .iter()
                .map(|r| models::IpAccessModel { name: r.name.clone(), ip_range: r.ip_range.clone(), enabled: r.enabled })
                .collect(),
        })
    }
}

impl Validate for IPAccess {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        for (i, rule) in self.spec.ip_access.iter().enumerate() {
            v.check(&format!("spec.ipAccess[{i}].ipRange"), !rule.ip_range.is_empty(), "must not be empty");
        }
        v.finish()
    }
}
