use serde::{Deserialize, Serialize};

/// Unit-only enums whose wire form is a fixed string.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(format!(
                        "unknown {} '{}', expected one of: {}",
                        stringify!($name),
                        other,
                        [$($wire),+].join(", ")
                    )),
                }
            }
        }
    };
}

string_enum! {
    /// DAG run 狀態
    DagState {
        Queued => "queued",
        Running => "running",
        Success => "success",
        Failed => "failed",
    }
}

string_enum! {
    /// Task instance state. `NoStatus` is the scheduler's `none` state.
    TaskState {
        Success => "success",
        Running => "running",
        Failed => "failed",
        UpstreamFailed => "upstream_failed",
        Skipped => "skipped",
        UpForRetry => "up_for_retry",
        UpForReschedule => "up_for_reschedule",
        Queued => "queued",
        NoStatus => "none",
        Scheduled => "scheduled",
        Deferred => "deferred",
        Removed => "removed",
        Restarting => "restarting",
        Sensing => "sensing",
        Shutdown => "shutdown",
    }
}

string_enum! {
    TriggerRule {
        AllSuccess => "all_success",
        AllFailed => "all_failed",
        AllDone => "all_done",
        OneSuccess => "one_success",
        OneFailed => "one_failed",
        NoneFailed => "none_failed",
        NoneSkipped => "none_skipped",
        NoneFailedOrSkipped => "none_failed_or_skipped",
        Dummy => "dummy",
    }
}

string_enum! {
    WeightRule {
        Downstream => "downstream",
        Upstream => "upstream",
        Absolute => "absolute",
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeDeltaType {
    #[default]
    TimeDelta,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelativeDeltaType {
    #[default]
    RelativeDelta,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CronExpressionType {
    #[default]
    CronExpression,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeDelta {
    #[serde(rename = "__type")]
    pub kind: TimeDeltaType,
    pub days: i32,
    pub seconds: i32,
    pub microseconds: i32,
}

impl TimeDelta {
    pub fn new(days: i32, seconds: i32, microseconds: i32) -> Self {
        Self {
            kind: TimeDeltaType::TimeDelta,
            days,
            seconds,
            microseconds,
        }
    }
}

/// `dateutil.relativedelta`: plural fields are offsets, singular fields are
/// absolute replacements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelativeDelta {
    #[serde(rename = "__type")]
    pub kind: RelativeDeltaType,
    #[serde(default)]
    pub years: i32,
    #[serde(default)]
    pub months: i32,
    #[serde(default)]
    pub days: i32,
    #[serde(default)]
    pub leapdays: i32,
    #[serde(default)]
    pub weeks: i32,
    #[serde(default)]
    pub hours: i32,
    #[serde(default)]
    pub minutes: i32,
    #[serde(default)]
    pub seconds: i32,
    #[serde(default)]
    pub microseconds: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microsecond: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CronExpression {
    #[serde(rename = "__type")]
    pub kind: CronExpressionType,
    pub value: String,
}

impl CronExpression {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            kind: CronExpressionType::CronExpression,
            value: value.into(),
        }
    }
}

/// Schedule of a DAG. The variant is picked by the `__type` field each
/// payload carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScheduleInterval {
    TimeDelta(TimeDelta),
    RelativeDelta(RelativeDelta),
    CronExpression(CronExpression),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Problem details returned with every non-2xx response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl_display_json!(
    TimeDelta,
    RelativeDelta,
    CronExpression,
    ScheduleInterval,
    ClassReference,
    Tag,
    ErrorResponse
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schedule_interval_picks_variant_by_type() {
        let cron: ScheduleInterval =
            serde_json::from_value(json!({"__type": "CronExpression", "value": "0 0 * * *"}))
                .unwrap();
        assert_eq!(cron, ScheduleInterval::CronExpression(CronExpression::new("0 0 * * *")));

        let delta: ScheduleInterval = serde_json::from_value(
            json!({"__type": "TimeDelta", "days": 1, "seconds": 0, "microseconds": 0}),
        )
        .unwrap();
        assert_eq!(delta, ScheduleInterval::TimeDelta(TimeDelta::new(1, 0, 0)));

        let relative: ScheduleInterval =
            serde_json::from_value(json!({"__type": "RelativeDelta", "months": 1, "day": 1}))
                .unwrap();
        match relative {
            ScheduleInterval::RelativeDelta(rd) => {
                assert_eq!(rd.months, 1);
                assert_eq!(rd.day, Some(1));
                assert_eq!(rd.years, 0);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_time_delta_serializes_type_tag() {
        let value = serde_json::to_value(TimeDelta::new(0, 300, 0)).unwrap();
        assert_eq!(
            value,
            json!({"__type": "TimeDelta", "days": 0, "seconds": 300, "microseconds": 0})
        );
    }

    #[test]
    fn test_task_state_wire_names() {
        assert_eq!(serde_json::to_value(TaskState::UpForRetry).unwrap(), json!("up_for_retry"));
        assert_eq!("none".parse::<TaskState>().unwrap(), TaskState::NoStatus);
        assert!("bogus".parse::<DagState>().is_err());
        assert_eq!(TriggerRule::NoneFailedOrSkipped.to_string(), "none_failed_or_skipped");
    }
}
