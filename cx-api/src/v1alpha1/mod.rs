mod alert;
mod alert_scheduler;
mod api_key;
mod archive_logs_target;
mod archive_metrics_target;
mod connector;
mod custom_enrichment;
mod custom_role;
mod dashboard;
mod dashboards_folder;
mod data_set;
mod enrichment;
mod events2metric;
mod extension;
mod global_router;
mod group;
mod integration;
mod ip_access;
mod outbound_webhook;
mod preset;
mod recording_rule_group_set;
mod rule_group;
mod scope;
mod slo;
mod tco_logs_policies;
mod tco_traces_policies;
mod team;
mod view;
mod view_folder;

pub use alert::*;
pub use alert_scheduler::*;
pub use api_key::*;
pub use archive_logs_target::*;
pub use archive_metrics_target::*;
pub use connector::*;
pub use custom_enrichment::*;
pub use custom_role::*;
pub use dashboard::*;
pub use dashboards_folder::*;
pub use data_set::*;
pub use enrichment::*;
pub use events2metric::*;
pub use extension::*;
pub use global_router::*;
pub use group::*;
pub use integration::*;
pub use ip_access::*;
pub use outbound_webhook::*;
pub use preset::*;
pub use recording_rule_group_set::*;
pub use rule_group::*;
pub use scope::*;
pub use slo::*;
pub use tco_logs_policies::*;
pub use tco_traces_policies::*;
pub use team::*;
pub use view::*;
pub use view_folder::*;

crate::impl_remote_synced!(
    Alert,
    AlertScheduler,
    ApiKey,
    ArchiveLogsTarget,
    ArchiveMetricsTarget,
    Connector,
    CustomEnrichment,
    CustomRole,
    Dashboard,
    DashboardsFolder,
    DataSet,
    Enrichment,
    Events2Metric,
    Extension,
    GlobalRouter,
    Group,
    Integration,
    IPAccess,
    OutboundWebhook,
    Preset,
    RecordingRuleGroupSet,
    RuleGroup,
    Scope,
    SLO,
    TCOLogsPolicies,
    TCOTracesPolicies,
    Team,
    View,
    ViewFolder,
);
