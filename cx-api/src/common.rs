use clockabilly::{
    DateTime,
    Utc,
};
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

// Reference to another custom resource managed by the operator; the namespace defaults to the
// namespace of the referencing object.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRef {
    pub name: String,
    pub namespace: Option<String>,
}

impl ResourceRef {
    pub fn new(name: &str) -> ResourceRef {
        ResourceRef { name: name.into(), namespace: None }
    }
}

// Reference to an object that only exists on the Coralogix side
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendRef {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMapKeyRef {
    pub name: String,
    pub key: String,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum ConditionStatus {
    True,
    False,
    #[default]
    Unknown,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: String,
    pub status: ConditionStatus,
    pub reason: String,
    #[serde(default)]
    pub message: String,
    pub last_transition_time: Option<DateTime<Utc>>,
    pub observed_generation: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteStatus {
    pub id: Option<String>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    pub observed_generation: Option<i64>,
}

impl RemoteStatus {
    pub fn condition(&self, type_: &str) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.type_ == type_)
    }
}

pub trait RemoteSynced {
    fn remote_status(&self) -> Option<&RemoteStatus>;

    fn remote_id(&self) -> Option<&str> {
        self.remote_status().and_then(|s| s.id.as_deref())
    }
}

#[macro_export]
macro_rules! impl_remote_synced {
    ($($type:ty),+ $(,)?) => {
        $(
            impl $crate::RemoteSynced for $type {
                fn remote_status(&self) -> Option<&$crate::RemoteStatus> {
                    self.status.as_ref()
                }
            }
        )+
    };
}

pub(crate) fn default_true() -> bool {
    true
}
