use async_trait::async_trait;
use cx_api::v1alpha1::*;
use cx_client::Endpoint;
use cx_client::models::view as models;

use super::CoralogixResource;
use crate::errors::*;
use crate::refs::RefResolver;
use crate::validation::{
    Validate,
    ValidationError,
    Validator,
};

#[async_trait]
impl CoralogixResource for View {
    type Request = models::ViewRequest;

    fn endpoint() -> Endpoint {
        models::VIEWS
    }

    async fn extract_request(&self, refs: &RefResolver) -> anyhow::Result<models::ViewRequest> {
        let spec = &self.spec;
        let ts = &spec.time_selection;
        let time_selection = match (&ts.quick_selection, &ts.custom_selection) {
            (Some(q), None) => models::TimeSelectionModel::QuickSelection(models::QuickTimeSelection {
                caption: quick_selection_caption(q.seconds),
                seconds: q.seconds,
            }),
            (None, Some(c)) => models::TimeSelectionModel::CustomSelection(models::CustomTimeSelection {
                from_time: c.from_time.clone(),
                to_time: c.to_time.clone(),
            }),
            _ => {
                return Err(ExtractError::invalid_value(
                    "timeSelection must set exactly one of quickSelection or customSelection",
                ));
            },
        };

        let folder_id = match &spec.folder {
            None => None,
            Some(ViewFolderRef { backend_ref: Some(br), resource_ref: None }) => Some(br.id.clone()),
            Some(ViewFolderRef { backend_ref: None, resource_ref: Some(rr) }) => Some(refs.resolve::<ViewFolder>(rr).await?),
            Some(_) => return Err(ExtractError::invalid_value("folder must set exactly one of backendRef or resourceRef")),
        };

        Ok(models::ViewRequest {
            name: spec.name.clone(),
            search_query: spec.search_query.as_ref().map(|q| models::SearchQuery { query: q.clone() }),
            time_selection,
            filters: models::SelectedFilters {
                filters: spec
                    .filters
                    .iter()
                    .map(|f| models::ViewFilterModel {
                        name: f.name.clone(),
                        selected_values: f.selected_values.iter().map(|v| (v.clone(), true)).collect(),
                    })
                    .collect(),
            },
            folder_id,
        })
    }
}

impl Validate for View {
    fn validate(&self) -> Result<(), ValidationError> {
        let spec = &self.spec;
        let ts = &spec.time_selection;
        let mut v = Validator::new();
        v.exactly_one(
            "spec.timeSelection",
            &[("quickSelection", ts.quick_selection.is_some()), ("customSelection", ts.custom_selection.is_some())],
        );
        if let Some(q) = &ts.quick_selection {
            v.check("spec.timeSelection.quickSelection.seconds", q.seconds > 0, "must be greater than zero");
        }
        if let Some(folder) = &spec.folder {
            v.exactly_one(
                "spec.folder",
                &[("backendRef", folder.backend_ref.is_some()), ("resourceRef", folder.resource_ref.is_some())],
            );
        }
        v.finish()
    }
}

#[async_trait]
impl CoralogixResource for ViewFolder {
    type Request = models::ViewFolderRequest;

    fn endpoint() -> Endpoint {
        models::VIEW_FOLDERS
    }

    async fn extract_request(&self, _: &RefResolver) -> anyhow::Result<models::ViewFolderRequest> {
        Ok(models::ViewFolderRequest { name: self.spec.name.clone() })
    }
}

impl Validate for ViewFolder {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new().check("spec.name", !self.spec.name.is_empty(), "must not be empty").finish()
    }
}

fn quick_selection_caption(seconds: u32) -> String {
    let (n, unit) = match seconds {
        s if s % 86400 == 0 => (s / 86400, "day"),
        s if s % 3600 == 0 => (s / 3600, "hour"),
        s if s % 60 == 0 => (s / 60, "minute"),
        s => (s, "second"),
    };
    if n == 1 { format!("Last {unit}") } else { format!("Last {n} {unit}s") }
}
