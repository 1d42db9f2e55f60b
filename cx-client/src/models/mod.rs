// Request bodies accepted by the management API.  Field names are camelCase and enum values use
// the backend's protobuf names, so every CR enum goes through an explicit lookup table before it
// ends up here.

// Declares an enum whose variants serialize to the given wire names; the first one is the
// default, which matches the backend's `*_UNSPECIFIED` convention.
macro_rules! wire_enum {
    ($name:ident { $default:ident => $dwire:literal $(, $variant:ident => $wire:literal)* $(,)? }) => {
        #[derive(Clone, Copy, Debug, Default, ::serde::Deserialize, Eq, PartialEq, ::serde::Serialize)]
        pub enum $name {
            #[default]
            #[serde(rename = $dwire)]
            $default,
            $(
                #[serde(rename = $wire)]
                $variant,
            )*
        }
    };
}

pub mod alert_def;
pub mod alert_scheduler;
pub mod api_key;
pub mod archive;
pub mod dashboard;
pub mod data_set;
pub mod enrichment;
pub mod events2metric;
pub mod extension;
pub mod iam;
pub mod integration;
pub mod ip_access;
pub mod notifications;
pub mod outbound_webhook;
pub mod recording_rules;
pub mod rule_group;
pub mod slo;
pub mod tco;
pub mod view;
