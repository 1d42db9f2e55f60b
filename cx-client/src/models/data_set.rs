use serde::Serialize;

use crate::endpoint::Endpoint;

pub const DATA_SETS: Endpoint = Endpoint::crud("mgmt/openapi/latest/dataprime/data-sets/v1", "/dataSet/id");

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSetRequest {
    pub name: String,
    pub description: Option<String>,
    pub query: String,
    pub retention_days: Option<u32>,
}
