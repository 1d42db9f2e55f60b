use cx_api::{
    v1alpha1,
    v1beta1,
};
use rstest::fixture;
use serde_json::json;

use crate::constants::*;

fn synced_status(id: Option<&str>) -> serde_json::Value {
    json!({
        "id": id,
        "conditions": [],
        "observedGeneration": TEST_GENERATION,
    })
}

#[fixture]
pub fn test_alert(#[default(TEST_ALERT_NAME)] name: &str) -> v1beta1::Alert {
    serde_json::from_value(json!({
        "apiVersion": "coralogix.com/v1beta1",
        "kind": "Alert",
        "metadata": {
            "name": name,
            "namespace": TEST_NAMESPACE,
            "generation": TEST_GENERATION,
        },
        "spec": {
            "name": "too many errors",
            "description": "fires when the checkout service logs errors",
            "priority": "P2",
            "groupByKeys": ["coralogix.metadata.sdkId"],
            "entityLabels": {"team": "payments"},
            "incidentsSettings": {
                "notifyOn": "TriggeredAndResolved",
                "retriggeringPeriod": {"minutes": 10},
            },
            "notificationGroup": {
                "webhooks": [{
                    "notifyOn": "TriggeredOnly",
                    "retriggeringPeriod": {"minutes": 5},
                    "integration": {"integrationRef": {"backendRef": {"name": TEST_WEBHOOK_NAME}}},
                }],
            },
            "schedule": {
                "activeOn": {
                    "dayOfWeek": ["Monday", "Friday"],
                    "startTime": "08:30",
                    "endTime": "17:00",
                    "utcOffset": "+02:00",
                },
            },
            "typeDefinition": {
                "logsThreshold": {
                    "logsFilter": {
                        "simpleFilter": {
                            "luceneQuery": "level:error",
                            "labelFilters": {
                                "applicationName": [{"value": "checkout", "operation": "Is"}],
                                "subsystemName": [{"value": "api", "operation": "StartsWith"}],
                                "severity": ["Error", "Critical"],
                            },
                        },
                    },
                    "rules": [{
                        "condition": {
                            "threshold": 10.0,
                            "timeWindow": "10m",
                            "conditionType": "MoreThan",
                        },
                    }],
                },
            },
        },
    }))
    .unwrap()
}

#[fixture]
pub fn test_legacy_alert(#[default(TEST_ALERT_NAME)] name: &str) -> v1alpha1::Alert {
    serde_json::from_value(json!({
        "apiVersion": "coralogix.com/v1alpha1",
        "kind": "Alert",
        "metadata": {
            "name": name,
            "namespace": TEST_NAMESPACE,
            "generation": TEST_GENERATION,
        },
        "spec": {
            "name": "too many errors",
            "severity": "Error",
            "labels": {"team": "payments"},
            "notificationGroups": [{
                "notifications": [{
                    "retriggeringPeriodMinutes": 5,
                    "notifyOn": "TriggeredOnly",
                    "integrationName": TEST_WEBHOOK_NAME,
                }],
            }, {
                "groupByFields": ["host"],
                "notifications": [{
                    "retriggeringPeriodMinutes": 60,
                    "emailRecipients": ["oncall@example.com"],
                }],
            }],
            "showInInsight": {"retriggeringPeriodMinutes": 10, "notifyOn": "TriggeredAndResolved"},
            "scheduling": {
                "timeZone": "UTC+02",
                "daysEnabled": ["Monday", "Friday"],
                "startTime": "08:30",
                "endTime": "17:00",
            },
            "alertType": {
                "standard": {
                    "filters": {
                        "searchQuery": "level:error",
                        "severities": ["Error", "Critical"],
                        "applications": ["checkout"],
                        "subsystems": ["filter:startsWith:api"],
                    },
                    "conditions": {
                        "alertWhen": "More",
                        "threshold": 10,
                        "timeWindow": "TenMinutes",
                        "groupBy": ["coralogix.metadata.sdkId"],
                    },
                },
            },
        },
    }))
    .unwrap()
}

#[fixture]
pub fn test_outbound_webhook(#[default(Some(TEST_WEBHOOK_ID))] id: Option<&str>) -> v1alpha1::OutboundWebhook {
    serde_json::from_value(json!({
        "apiVersion": "coralogix.com/v1alpha1",
        "kind": "OutboundWebhook",
        "metadata": {
            "name": TEST_WEBHOOK_NAME,
            "namespace": TEST_NAMESPACE,
            "generation": TEST_GENERATION,
        },
        "spec": {
            "name": TEST_WEBHOOK_NAME,
            "outboundWebhookType": {
                "slack": {"url": "https://hooks.slack.com/services/T000/B000/XXXX"},
            },
        },
        "status": synced_status(id),
    }))
    .unwrap()
}

#[fixture]
pub fn test_view_folder(#[default(Some(TEST_VIEW_FOLDER_ID))] id: Option<&str>) -> v1alpha1::ViewFolder {
    serde_json::from_value(json!({
        "apiVersion": "coralogix.com/v1alpha1",
        "kind": "ViewFolder",
        "metadata": {
            "name": TEST_VIEW_FOLDER_NAME,
            "namespace": TEST_NAMESPACE,
            "generation": TEST_GENERATION,
        },
        "spec": {"name": TEST_VIEW_FOLDER_NAME},
        "status": synced_status(id),
    }))
    .unwrap()
}
