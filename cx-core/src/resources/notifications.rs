use async_trait::async_trait;
use cx_api::BackendRef;
use cx_api::v1alpha1::*;
use cx_client::Endpoint;
use cx_client::models::notifications as models;

use super::CoralogixResource;
use crate::errors::*;
use crate::refs::RefResolver;
use crate::validation::{
    Validate,
    ValidationError,
    Validator,
};

#[async_trait]
impl CoralogixResource for Connector {
    type Request = models::ConnectorRequest;

    fn endpoint() -> Endpoint {
        models::CONNECTORS
    }

    async fn extract_request(&self, _: &RefResolver) -> anyhow::Result<models::ConnectorRequest> {
        let spec = &self.spec;
        Ok(models::ConnectorRequest {
            connector: models::ConnectorModel {
                name: spec.name.clone(),
                description: spec.description.clone(),
                type_: connector_type(spec.type_),
                connector_config: models::ConnectorConfigModel {
                    fields: spec
                        .connector_config
                        .fields
                        .iter()
                        .map(|f| models::ConnectorConfigFieldModel { field_name: f.field_name.clone(), value: f.value.clone() })
                        .collect(),
                },
                config_overrides: spec
                    .config_overrides
                    .iter()
                    .flatten()
                    .map(|o| models::EntityTypeConfigOverridesModel {
                        entity_type: entity_type(o.entity_type),
                        fields: extract_templated_fields(&o.fields),
                    })
                    .collect(),
            },
        })
    }
}

impl Validate for Connector {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .check("spec.name", !self.spec.name.is_empty(), "must not be empty")
            .finish()
    }
}

#[async_trait]
impl CoralogixResource for Preset {
    type Request = models::PresetRequest;

    fn endpoint() -> Endpoint {
        models::PRESETS
    }

    async fn extract_request(&self, _: &RefResolver) -> anyhow::Result<models::PresetRequest> {
        let spec = &self.spec;
        let mut config_overrides = vec![];
        for o in spec.config_overrides.iter().flatten() {
            let ct = &o.condition_type;
            let condition_type = match (&ct.match_entity_type, &ct.match_entity_type_and_sub_type) {
                (Some(_), None) => models::ConditionTypeModel::MatchEntityType(models::MatchEntityTypeModel {}),
                (None, Some(m)) => {
                    models::ConditionTypeModel::MatchEntityTypeAndSubType(models::MatchEntityTypeAndSubTypeModel {
                        entity_sub_type: m.entity_sub_type.clone(),
                    })
                },
                _ => {
                    return Err(ExtractError::invalid_value(
                        "conditionType must set exactly one of matchEntityType or matchEntityTypeAndSubType",
                    ));
                },
            };
            config_overrides.push(models::PresetConfigOverridesModel {
                condition_type,
                payload_type: o.payload_type.clone(),
                message_config: models::MessageConfigModel { fields: extract_templated_fields(&o.message_config.fields) },
            });
        }

        Ok(models::PresetRequest {
            preset: models::PresetModel {
                name: spec.name.clone(),
                description: spec.description.clone(),
                entity_type: entity_type(spec.entity_type),
                connector_type: connector_type(spec.connector_type),
                parent_id: spec.parent_id.clone(),
                config_overrides,
            },
        })
    }
}

impl Validate for Preset {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        for (i, o) in self.spec.config_overrides.iter().flatten().enumerate() {
            let ct = &o.condition_type;
            v.exactly_one(
                &format!("spec.configOverrides[{i}].conditionType"),
                &[
                    ("matchEntityType", ct.match_entity_type.is_some()),
                    ("matchEntityTypeAndSubType", ct.match_entity_type_and_sub_type.is_some()),
                ],
            );
        }
        v.finish()
    }
}

#[async_trait]
impl CoralogixResource for GlobalRouter {
    type Request = models::GlobalRouterRequest;

    fn endpoint() -> Endpoint {
        models::GLOBAL_ROUTERS
    }

    async fn extract_request(&self, refs: &RefResolver) -> anyhow::Result<models::GlobalRouterRequest> {
        let spec = &self.spec;
        let mut rules = vec![];
        for rule in spec.rules.iter().flatten() {
            rules.push(models::RoutingRuleModel {
                name: rule.name.clone(),
                condition: rule.condition.clone(),
                targets: extract_targets(&rule.targets, refs).await?,
            });
        }
        let fallback = match &spec.fallback {
            Some(targets) => extract_targets(targets, refs).await?,
            None => vec![],
        };

        Ok(models::GlobalRouterRequest {
            router: models::GlobalRouterModel {
                name: spec.name.clone(),
                description: spec.description.clone(),
                entity_type: entity_type(spec.entity_type),
                entity_labels: spec.entity_labels.clone().unwrap_or_default(),
                rules,
                fallback,
            },
        })
    }
}

impl Validate for GlobalRouter {
    fn validate(&self) -> Result<(), ValidationError> {
        let spec = &self.spec;
        let mut v = Validator::new();
        for (i, rule) in spec.rules.iter().flatten().enumerate() {
            for (j, target) in rule.targets.iter().enumerate() {
                validate_target(&mut v, &format!("spec.rules[{i}].targets[{j}]"), target);
            }
        }
        for (i, target) in spec.fallback.iter().flatten().enumerate() {
            validate_target(&mut v, &format!("spec.fallback[{i}]"), target);
        }
        v.finish()
    }
}

fn validate_target(v: &mut Validator, path: &str, target: &RoutingTarget) {
    validate_notification_ref(v, &format!("{path}.connector"), &target.connector);
    if let Some(preset) = &target.preset {
        validate_notification_ref(v, &format!("{path}.preset"), preset);
    }
}

fn validate_notification_ref(v: &mut Validator, path: &str, r: &NotificationRef) {
    v.exactly_one(path, &[("backendRef", r.backend_ref.is_some()), ("resourceRef", r.resource_ref.is_some())]);
    if let Some(br) = &r.backend_ref {
        v.exactly_one(&format!("{path}.backendRef"), &[("id", br.id.is_some()), ("name", br.name.is_some())]);
    }
}

async fn extract_targets(targets: &[RoutingTarget], refs: &RefResolver) -> anyhow::Result<Vec<models::RoutingTargetModel>> {
    let mut out = vec![];
    for target in targets {
        let connector_id = resolve_connector(&target.connector, refs).await?;
        let preset_id = match &target.preset {
            Some(preset) => Some(resolve_preset(preset, refs).await?),
            None => None,
        };
        out.push(models::RoutingTargetModel {
            connector_id,
            preset_id,
            custom_details: target.custom_details.clone().unwrap_or_default(),
        });
    }
    Ok(out)
}

async fn resolve_connector(r: &NotificationRef, refs: &RefResolver) -> anyhow::Result<String> {
    match (&r.backend_ref, &r.resource_ref) {
        (Some(BackendRef { id: Some(id), name: None }), None) => Ok(id.clone()),
        (Some(BackendRef { id: None, name: Some(name) }), None) => {
            refs.lookup_backend_id(models::CONNECTORS.path, models::CONNECTORS_LIST_POINTER, "/name", "/id", name)
                .await
        },
        (None, Some(rr)) => refs.resolve::<Connector>(rr).await,
        _ => Err(ExtractError::invalid_value("connector must set exactly one of backendRef.id, backendRef.name or resourceRef")),
    }
}

async fn resolve_preset(r: &NotificationRef, refs: &RefResolver) -> anyhow::Result<String> {
    match (&r.backend_ref, &r.resource_ref) {
        (Some(BackendRef { id: Some(id), name: None }), None) => Ok(id.clone()),
        (Some(BackendRef { id: None, name: Some(name) }), None) => {
            refs.lookup_backend_id(models::PRESETS.path, models::PRESETS_LIST_POINTER, "/name", "/id", name)
                .await
        },
        (None, Some(rr)) => refs.resolve::<Preset>(rr).await,
        _ => Err(ExtractError::invalid_value("preset must set exactly one of backendRef.id, backendRef.name or resourceRef")),
    }
}

fn extract_templated_fields(fields: &[TemplatedConnectorConfigField]) -> Vec<models::TemplatedFieldModel> {
    fields
        .iter()
        .map(|f| models::TemplatedFieldModel { field_name: f.field_name.clone(), template: f.template.clone() })
        .collect()
}

fn connector_type(t: ConnectorType) -> models::ConnectorType {
    match t {
        ConnectorType::Slack => models::ConnectorType::Slack,
        ConnectorType::GenericHttps => models::ConnectorType::GenericHttps,
        ConnectorType::PagerDuty => models::ConnectorType::PagerDuty,
    }
}

fn entity_type(t: NotificationEntityType) -> models::EntityType {
    match t {
        NotificationEntityType::Alerts => models::EntityType::Alerts,
    }
}
