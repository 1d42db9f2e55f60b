use async_trait::async_trait;
use cx_api::v1alpha1::*;
use cx_api::v1beta1;
use cx_client::Endpoint;
use cx_client::models::alert_scheduler as models;

use super::CoralogixResource;
use crate::errors::*;
use crate::refs::RefResolver;
use crate::validation::{
    Validate,
    ValidationError,
    Validator,
};

#[async_trait]
impl CoralogixResource for AlertScheduler {
    type Request = models::AlertSchedulerRuleRequest;

    fn endpoint() -> Endpoint {
        models::ALERT_SCHEDULER_RULES
    }

    async fn extract_request(&self, refs: &RefResolver) -> anyhow::Result<models::AlertSchedulerRuleRequest> {
        let spec = &self.spec;
        let which_alerts = match (&spec.meta_labels, &spec.alerts) {
            (Some(labels), None) => models::WhichAlerts::AlertMetaLabels(models::AlertMetaLabels {
                value: labels
                    .iter()
                    .map(|l| models::MetaLabelValue { key: l.key.clone(), value: l.value.clone() })
                    .collect(),
            }),
            (None, Some(alerts)) => {
                let mut ids = vec![];
                for alert in alerts {
                    ids.push(refs.resolve::<v1beta1::Alert>(alert).await?);
                }
                models::WhichAlerts::AlertUniqueIds(models::AlertUniqueIds { value: ids })
            },
            _ => return Err(ExtractError::invalid_value("exactly one of metaLabels or alerts must be set")),
        };

        Ok(models::AlertSchedulerRuleRequest {
            alert_scheduler_rule: models::AlertSchedulerRule {
                name: spec.name.clone(),
                description: spec.description.clone(),
                enabled: spec.enabled,
                filter: models::AlertSchedulerFilter { what_expression: String::new(), which_alerts },
                schedule: models::AlertSchedulerSchedule {
                    schedule_operation: schedule_operation(spec.schedule.operation),
                    schedule_type: extract_schedule_type(&spec.schedule)?,
                },
            },
        })
    }
}

impl Validate for AlertScheduler {
    fn validate(&self) -> Result<(), ValidationError> {
        let spec = &self.spec;
        let schedule = &spec.schedule;
        let mut v = Validator::new();

        v.exactly_one("spec", &[("metaLabels", spec.meta_labels.is_some()), ("alerts", spec.alerts.is_some())]);
        v.exactly_one(
            "spec.schedule",
            &[("oneTime", schedule.one_time.is_some()), ("recurring", schedule.recurring.is_some())],
        );

        if let Some(one_time) = &schedule.one_time {
            validate_time_frame(&mut v, "spec.schedule.oneTime.timeFrame", &one_time.time_frame);
        }
        if let Some(recurring) = &schedule.recurring {
            v.exactly_one(
                "spec.schedule.recurring",
                &[("always", recurring.always.is_some()), ("dynamic", recurring.dynamic.is_some())],
            );
            if let Some(dynamic) = &recurring.dynamic {
                let f = &dynamic.frequency;
                v.exactly_one(
                    "spec.schedule.recurring.dynamic.frequency",
                    &[("daily", f.daily.is_some()), ("weekly", f.weekly.is_some()), ("monthly", f.monthly.is_some())],
                );
                if let Some(monthly) = &f.monthly {
                    v.check(
                        "spec.schedule.recurring.dynamic.frequency.monthly.days",
                        monthly.days.iter().all(|d| (1..=31).contains(d)),
                        "days must be between 1 and 31",
                    );
                }
                validate_time_frame(&mut v, "spec.schedule.recurring.dynamic.timeFrame", &dynamic.time_frame);
            }
        }

        v.finish()
    }
}

fn validate_time_frame(v: &mut Validator, path: &str, tf: &TimeFrame) {
    v.exactly_one(path, &[("endTime", tf.end_time.is_some()), ("duration", tf.duration.is_some())]);
}

fn extract_schedule_type(schedule: &Schedule) -> anyhow::Result<models::ScheduleType> {
    match (&schedule.one_time, &schedule.recurring) {
        (Some(one_time), None) => Ok(models::ScheduleType::OneTime(models::OneTimeSchedule {
            timeframe: extract_time_frame(&one_time.time_frame)?,
        })),
        (None, Some(recurring)) => {
            let recurring = match (&recurring.always, &recurring.dynamic) {
                (Some(_), None) => models::RecurringSchedule::Always(models::Empty {}),
                (None, Some(dynamic)) => models::RecurringSchedule::Dynamic(models::DynamicSchedule {
                    repeat_every: dynamic.repeat_every,
                    frequency: extract_frequency(&dynamic.frequency)?,
                    timeframe: extract_time_frame(&dynamic.time_frame)?,
                    termination_date: dynamic.termination_date.clone(),
                }),
                _ => return Err(ExtractError::invalid_value("recurring must set exactly one of always or dynamic")),
            };
            Ok(models::ScheduleType::Recurring(recurring))
        },
        _ => Err(ExtractError::invalid_value("schedule must set exactly one of oneTime or recurring")),
    }
}

fn extract_frequency(f: &Frequency) -> anyhow::Result<models::SchedulerFrequency> {
    match (&f.daily, &f.weekly, &f.monthly) {
        (Some(_), None, None) => Ok(models::SchedulerFrequency::Daily(models::Empty {})),
        (None, Some(weekly), None) => Ok(models::SchedulerFrequency::Weekly(models::WeeklyFrequency {
            days: weekly.days.iter().map(|d| day_number(*d)).collect(),
        })),
        (None, None, Some(monthly)) => {
            Ok(models::SchedulerFrequency::Monthly(models::MonthlyFrequency { days: monthly.days.clone() }))
        },
        _ => Err(ExtractError::invalid_value("frequency must set exactly one of daily, weekly or monthly")),
    }
}

fn extract_time_frame(tf: &TimeFrame) -> anyhow::Result<models::SchedulerTimeframe> {
    let until = match (&tf.end_time, &tf.duration) {
        (Some(end), None) => models::TimeframeUntil::EndTime(end.clone()),
        (None, Some(d)) => models::TimeframeUntil::Duration(models::SchedulerDuration {
            for_over: d.for_over,
            frequency: duration_frequency(d.frequency),
        }),
        _ => return Err(ExtractError::invalid_value("timeFrame must set exactly one of endTime or duration")),
    };

    Ok(models::SchedulerTimeframe { start_time: tf.start_time.clone(), timezone: tf.timezone.clone(), until })
}

fn schedule_operation(o: ScheduleOperation) -> models::ScheduleOperation {
    match o {
        ScheduleOperation::Mute => models::ScheduleOperation::Mute,
        ScheduleOperation::ActiveOnly => models::ScheduleOperation::Activate,
    }
}

fn duration_frequency(f: DurationFrequency) -> models::DurationFrequency {
    match f {
        DurationFrequency::Minutes => models::DurationFrequency::Minute,
        DurationFrequency::Hours => models::DurationFrequency::Hour,
        DurationFrequency::Days => models::DurationFrequency::Day,
    }
}

fn day_number(d: SchedulerDay) -> u32 {
    match d {
        SchedulerDay::Sunday => 0,
        SchedulerDay::Monday => 1,
        SchedulerDay::Tuesday => 2,
        SchedulerDay::Wednesday => 3,
        SchedulerDay::Thursday => 4,
        SchedulerDay::Friday => 5,
        SchedulerDay::Saturday => 6,
    }
}
