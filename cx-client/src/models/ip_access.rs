use serde::Serialize;

use crate::endpoint::Endpoint;

pub const IP_ACCESS: Endpoint = Endpoint::singleton("mgmt/openapi/latest/ip-access/v1/company-settings");

wire_enum!(CoralogixCustomerSupportAccess {
    Unspecified => "CORALOGIX_CUSTOMER_SUPPORT_ACCESS_UNSPECIFIED",
    Disabled => "CORALOGIX_CUSTOMER_SUPPORT_ACCESS_DISABLED",
    Enabled => "CORALOGIX_CUSTOMER_SUPPORT_ACCESS_ENABLED",
});

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IpAccessSettingsRequest {
    pub enable_coralogix_customer_support_access: CoralogixCustomerSupportAccess,
    pub ip_access: Vec<IpAccessModel>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IpAccessModel {
    pub name: Option<String>,
    pub ip_range: String,
    pub enabled: bool,
}
