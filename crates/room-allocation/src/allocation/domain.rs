use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Preferences beyond this rank are dropped during normalization.
pub const MAX_PREFERENCES: usize = 8;

pub const SINGLE_NOTE: &str = "Assigned from preference list";
pub const PAIR_NOTE: &str = "Assigned from preference list (pair)";
pub const UNASSIGNED_NOTE: &str = "No available resource among preferences";

/// Applicant record as it arrives over the wire. Every field may be absent or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawApplicant {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "currentResource")]
    pub current_room: Option<String>,
    #[serde(default, alias = "currentResourceClass")]
    pub current_room_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_seniority")]
    pub seniority: Option<i64>,
    #[serde(default)]
    pub preferences: Option<Vec<Option<String>>>,
}

/// Request payload accepted by the HTTP endpoint and the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRequest {
    #[serde(default)]
    pub applicants: Option<Vec<RawApplicant>>,
    #[serde(default, alias = "availableResources", deserialize_with = "lenient_rooms")]
    pub available_rooms: Option<Vec<Option<String>>>,
}

/// Numbers saturate into `i64`, floats truncate, numeric strings parse. Anything else
/// counts as missing.
fn lenient_seniority<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let seniority = match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|_| i64::MAX))
            .or_else(|| number.as_f64().map(|float| float as i64)),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    Ok(seniority)
}

/// Room ids given as strings or numbers. Other entries become `None`.
pub(crate) fn room_id_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(room) => Some(room),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn lenient_rooms<'de, D>(deserializer: D) -> Result<Option<Vec<Option<String>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let rooms = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(rooms.map(|rooms| rooms.into_iter().map(room_id_from_value).collect()))
}

/// Room classes with a fixed priority used as the secondary tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomClass {
    Fleksirom,
    Parrom,
    Enkeltrom,
    Porten,
}

impl RoomClass {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "fleksirom" => Some(Self::Fleksirom),
            "parrom" => Some(Self::Parrom),
            "enkeltrom" => Some(Self::Enkeltrom),
            "porten" => Some(Self::Porten),
            _ => None,
        }
    }

    pub fn priority(self) -> u8 {
        match self {
            Self::Fleksirom => 4,
            Self::Parrom => 3,
            Self::Enkeltrom => 2,
            Self::Porten => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fleksirom => "fleksirom",
            Self::Parrom => "parrom",
            Self::Enkeltrom => "enkeltrom",
            Self::Porten => "porten",
        }
    }

    fn from_priority(priority: u8) -> Option<Self> {
        match priority {
            4 => Some(Self::Fleksirom),
            3 => Some(Self::Parrom),
            2 => Some(Self::Enkeltrom),
            1 => Some(Self::Porten),
            _ => None,
        }
    }
}

/// One ranked entry of an applicant's wish list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Preference {
    pub room_id: String,
    /// Empty for a solo claim.
    pub group_tag: String,
}

impl Preference {
    pub fn is_joint(&self) -> bool {
        !self.group_tag.is_empty()
    }
}

/// Canonical applicant produced by the normalizer. Never mutated during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applicant {
    pub name: String,
    pub seniority: u32,
    pub current_room_priority: u8,
    /// Empty when the applicant holds no room.
    pub current_room: String,
    pub preferences: Vec<Preference>,
}

impl Applicant {
    pub fn preference_at(&self, rank: usize) -> Option<&Preference> {
        self.preferences.get(rank)
    }

    /// Room this applicant gives up when winning `won_room`, if any.
    pub fn vacated_room(&self, won_room: &str) -> Option<&str> {
        if self.current_room.is_empty() || self.current_room == won_room {
            None
        } else {
            Some(self.current_room.as_str())
        }
    }

    /// Rebuilds a wire record that normalizes back to this applicant.
    pub fn to_raw(&self) -> RawApplicant {
        let preferences = self
            .preferences
            .iter()
            .map(|preference| {
                if preference.is_joint() {
                    Some(format!("{} {}", preference.room_id, preference.group_tag))
                } else {
                    Some(preference.room_id.clone())
                }
            })
            .collect();

        RawApplicant {
            name: Some(self.name.clone()),
            current_room: Some(self.current_room.clone()),
            current_room_type: RoomClass::from_priority(self.current_room_priority)
                .map(|class| class.label().to_string()),
            seniority: Some(i64::from(self.seniority)),
            preferences: Some(preferences),
        }
    }
}

/// Outcome for a single applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub name: String,
    pub room: Option<String>,
    pub note: String,
}

/// Full outcome of one allocation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub assigned: Vec<Assignment>,
    pub unassigned: Vec<Assignment>,
}

/// Counts used for log lines and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AllocationSummary {
    pub applicants: usize,
    pub assigned: usize,
    pub unassigned: usize,
    pub paired_applicants: usize,
}

impl AllocationResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> AllocationSummary {
        AllocationSummary {
            applicants: self.assigned.len() + self.unassigned.len(),
            assigned: self.assigned.len(),
            unassigned: self.unassigned.len(),
            paired_applicants: self
                .assigned
                .iter()
                .filter(|assignment| assignment.note == PAIR_NOTE)
                .count(),
        }
    }

    pub fn room_for(&self, name: &str) -> Option<&str> {
        self.assigned
            .iter()
            .find(|assignment| assignment.name == name)
            .and_then(|assignment| assignment.room.as_deref())
    }
}
