//! Nearby amenity fixtures and the per-submission list builder.
use crate::submission::AddressSubmission;
use serde::{Deserialize, Serialize};

const DEFAULT_AMENITY_DATA: &str =
    include_str!("../../livecost-web/static/assets/data/amenities.json");

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AmenityRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub distance: String,
}

impl AmenityRecord {
    #[must_use]
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        distance: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            address: address.into(),
            distance: distance.into(),
        }
    }

    /// `Hospital: Valley View Hospital`
    #[must_use]
    pub fn title(&self) -> String {
        format!("{}: {}", self.kind, self.name)
    }

    /// Address and distance joined by a bullet when both exist.
    #[must_use]
    pub fn meta_line(&self) -> String {
        let address = self.address.trim();
        let distance = self.distance.trim();
        match (address.is_empty(), distance.is_empty()) {
            (false, false) => format!("{address} • {distance}"),
            (false, true) => address.to_string(),
            (true, false) => distance.to_string(),
            (true, true) => String::new(),
        }
    }
}

/// Shown in place of an empty workplace list.
#[must_use]
pub fn no_work_placeholder() -> AmenityRecord {
    AmenityRecord::new("Work", "No additional work address", "", "")
}

/// Shown when the echo policy has no second work address to echo.
#[must_use]
pub fn no_secondary_work_placeholder() -> AmenityRecord {
    AmenityRecord::new(
        "Secondary Workplace",
        "No secondary work address provided",
        "",
        "",
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmenityCategory {
    Schools,
    Healthcare,
    Groceries,
    Work,
}

impl AmenityCategory {
    pub const ALL: [Self; 4] = [Self::Schools, Self::Healthcare, Self::Work, Self::Groceries];

    /// Id of the section that hosts this category's list.
    #[must_use]
    pub const fn container_id(self) -> &'static str {
        match self {
            Self::Schools => "amenities-schools",
            Self::Healthcare => "amenities-healthcare",
            Self::Groceries => "amenities-groceries",
            Self::Work => "amenities-work",
        }
    }

    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Schools => "amenities.schools",
            Self::Healthcare => "amenities.healthcare",
            Self::Groceries => "amenities.groceries",
            Self::Work => "amenities.work",
        }
    }
}

/// How the workplace list relates to the submitted addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkListPolicy {
    /// Static workplace fixtures.
    #[default]
    Fixture,
    /// Echo the submitted work addresses back as workplace entries.
    EchoSubmitted,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AmenityFixtures {
    #[serde(default)]
    pub schools: Vec<AmenityRecord>,
    #[serde(default)]
    pub healthcare: Vec<AmenityRecord>,
    #[serde(default)]
    pub groceries: Vec<AmenityRecord>,
    #[serde(default)]
    pub work: Vec<AmenityRecord>,
    #[serde(default)]
    pub work_policy: WorkListPolicy,
}

impl AmenityFixtures {
    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_AMENITY_DATA).unwrap_or_default()
    }

    /// Parse the embedded fixtures without falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON is malformed.
    pub fn try_load_from_static() -> Result<Self, serde_json::Error> {
        Self::from_json(DEFAULT_AMENITY_DATA)
    }

    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub const fn with_work_policy(mut self, policy: WorkListPolicy) -> Self {
        self.work_policy = policy;
        self
    }

    /// Lists for one submission. Only the workplace list can depend on the
    /// submitted text, and only under `WorkListPolicy::EchoSubmitted`.
    #[must_use]
    pub fn build(&self, submission: &AddressSubmission) -> AmenityLists {
        let work = match self.work_policy {
            WorkListPolicy::Fixture => self.work.clone(),
            WorkListPolicy::EchoSubmitted => echo_work(submission),
        };
        AmenityLists {
            schools: self.schools.clone(),
            healthcare: self.healthcare.clone(),
            groceries: self.groceries.clone(),
            work,
        }
    }
}

fn echo_work(submission: &AddressSubmission) -> Vec<AmenityRecord> {
    let mut work = Vec::with_capacity(2);
    if !submission.work_address.is_empty() {
        work.push(AmenityRecord::new(
            "Primary Workplace",
            submission.work_address.as_str(),
            submission.work_address.as_str(),
            "",
        ));
    }
    if submission.has_second_work() {
        work.push(AmenityRecord::new(
            "Secondary Workplace",
            submission.second_work_address.as_str(),
            submission.second_work_address.as_str(),
            "",
        ));
    } else {
        work.push(no_secondary_work_placeholder());
    }
    work
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AmenityLists {
    pub schools: Vec<AmenityRecord>,
    pub healthcare: Vec<AmenityRecord>,
    pub groceries: Vec<AmenityRecord>,
    pub work: Vec<AmenityRecord>,
}

impl AmenityLists {
    #[must_use]
    pub fn get(&self, category: AmenityCategory) -> &[AmenityRecord] {
        match category {
            AmenityCategory::Schools => &self.schools,
            AmenityCategory::Healthcare => &self.healthcare,
            AmenityCategory::Groceries => &self.groceries,
            AmenityCategory::Work => &self.work,
        }
    }

    /// Records to render for `category`; an empty workplace list becomes a
    /// single placeholder.
    #[must_use]
    pub fn rendered(&self, category: AmenityCategory) -> Vec<AmenityRecord> {
        let records = self.get(category);
        if category == AmenityCategory::Work && records.is_empty() {
            return vec![no_work_placeholder()];
        }
        records.to_vec()
    }
}
