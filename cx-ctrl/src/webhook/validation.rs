use cx_core::conversion::alert_to_v1beta1;
use cx_core::errors::*;
use cx_core::prelude::*;
use kube::core::DynamicObject;
use kube::core::admission::{
    AdmissionRequest,
    AdmissionResponse,
    AdmissionReview,
    Operation,
};
use rocket::serde::json::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::*;

#[rocket::post("/validate", data = "<body>")]
#[instrument(parent=None, skip_all)]
pub async fn handler(body: Json<AdmissionReview<DynamicObject>>) -> Json<AdmissionReview<DynamicObject>> {
    let req: AdmissionRequest<DynamicObject> = match body.into_inner().try_into() {
        Ok(r) => r,
        Err(err) => {
            error!("could not parse admission request: {err:?}");
            return Json(AdmissionResponse::invalid(err).into_review());
        },
    };

    Json(admit(&req).into_review())
}

#[instrument(skip_all, fields(kind=%req.kind.kind, object=%format!("{}/{}", req.namespace.as_deref().unwrap_or_default(), req.name)))]
pub(crate) fn admit(req: &AdmissionRequest<DynamicObject>) -> AdmissionResponse {
    let resp = AdmissionResponse::from(req);
    if req.operation == Operation::Delete {
        return resp;
    }
    let Some(obj) = &req.object else {
        return resp;
    };

    let res = serde_json::to_value(obj)
        .map_err(anyhow::Error::from)
        .and_then(|obj| validate_object(&req.kind.version, &req.kind.kind, obj));
    match res {
        Ok(()) => resp,
        Err(err) => {
            info!("denying request: {err}");
            resp.deny(err)
        },
    }
}

fn check<K: DeserializeOwned + Validate>(obj: Value) -> anyhow::Result<()> {
    let obj: K = serde_json::from_value(obj)?;
    Ok(obj.validate()?)
}

pub(crate) fn validate_object(version: &str, kind: &str, obj: Value) -> anyhow::Result<()> {
    match (version, kind) {
        ("v1alpha1", "Alert") => {
            // v1beta1 is the storage version, so an alert that can't be converted can't be stored
            let alert: v1alpha1::Alert = serde_json::from_value(obj)?;
            alert.validate()?;
            alert_to_v1beta1(&alert).map(|_| ())
        },
        ("v1beta1", "Alert") => check::<v1beta1::Alert>(obj),
        ("v1alpha1", "AlertScheduler") => check::<v1alpha1::AlertScheduler>(obj),
        ("v1alpha1", "ApiKey") => check::<v1alpha1::ApiKey>(obj),
        ("v1alpha1", "ArchiveLogsTarget") => check::<v1alpha1::ArchiveLogsTarget>(obj),
        ("v1alpha1", "ArchiveMetricsTarget") => check::<v1alpha1::ArchiveMetricsTarget>(obj),
        ("v1alpha1", "Connector") => check::<v1alpha1::Connector>(obj),
        ("v1alpha1", "CustomEnrichment") => check::<v1alpha1::CustomEnrichment>(obj),
        ("v1alpha1", "CustomRole") => check::<v1alpha1::CustomRole>(obj),
        ("v1alpha1", "Dashboard") => check::<v1alpha1::Dashboard>(obj),
        ("v1alpha1", "DashboardsFolder") => check::<v1alpha1::DashboardsFolder>(obj),
        ("v1alpha1", "DataSet") => check::<v1alpha1::DataSet>(obj),
        ("v1alpha1", "Enrichment") => check::<v1alpha1::Enrichment>(obj),
        ("v1alpha1", "Events2Metric") => check::<v1alpha1::Events2Metric>(obj),
        ("v1alpha1", "Extension") => check::<v1alpha1::Extension>(obj),
        ("v1alpha1", "GlobalRouter") => check::<v1alpha1::GlobalRouter>(obj),
        ("v1alpha1", "Group") => check::<v1alpha1::Group>(obj),
        ("v1alpha1", "IPAccess") => check::<v1alpha1::IPAccess>(obj),
        ("v1alpha1", "Integration") => check::<v1alpha1::Integration>(obj),
        ("v1alpha1", "OutboundWebhook") => check::<v1alpha1::OutboundWebhook>(obj),
        ("v1alpha1", "Preset") => check::<v1alpha1::Preset>(obj),
        ("v1alpha1", "RecordingRuleGroupSet") => check::<v1alpha1::RecordingRuleGroupSet>(obj),
        ("v1alpha1", "RuleGroup") => check::<v1alpha1::RuleGroup>(obj),
        ("v1alpha1", "SLO") => check::<v1alpha1::SLO>(obj),
        ("v1alpha1", "Scope") => check::<v1alpha1::Scope>(obj),
        ("v1alpha1", "TCOLogsPolicies") => check::<v1alpha1::TCOLogsPolicies>(obj),
        ("v1alpha1", "TCOTracesPolicies") => check::<v1alpha1::TCOTracesPolicies>(obj),
        ("v1alpha1", "Team") => check::<v1alpha1::Team>(obj),
        ("v1alpha1", "View") => check::<v1alpha1::View>(obj),
        ("v1alpha1", "ViewFolder") => check::<v1alpha1::ViewFolder>(obj),
        (version, kind) => Err(anyhow!("unsupported kind {kind} in version {version}")),
    }
}
