use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use hireboard_core::guard::{
    GuardChain, GuardFailure, against_empty, against_too_long, against_too_short, in_range,
};
use hireboard_core::{Entity, OfferId, ValidationError, ValueObject};

pub const TITLE_MIN: usize = 2;
pub const TITLE_MAX: usize = 120;
pub const DESCRIPTION_MAX: usize = 5000;
pub const SALARY_CEILING: i64 = 1_000_000;

// ─────────────────────────────────────────────────────────────────────────────
// Offer guard failures
// ─────────────────────────────────────────────────────────────────────────────

/// Rejected vocabulary value.
///
/// Unlike [`GuardFailure`], the code leads with the offending value:
/// `cobol.invalidTechnologyType`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OfferError {
    #[error("{0}.invalidTechnologyType")]
    InvalidTechnology(String),

    #[error("{0}.invalidEmploymentType")]
    InvalidEmploymentType(String),

    #[error("{0}.invalidLevelType")]
    InvalidLevel(String),
}

impl OfferError {
    pub fn code(&self) -> String {
        self.to_string()
    }

    pub fn message(&self) -> String {
        match self {
            Self::InvalidTechnology(v) => format!("'{v}' is not a supported technology"),
            Self::InvalidEmploymentType(v) => format!("'{v}' is not a supported employment type"),
            Self::InvalidLevel(v) => format!("'{v}' is not a supported seniority level"),
        }
    }
}

impl From<OfferError> for ValidationError {
    fn from(err: OfferError) -> Self {
        ValidationError::new(err.code(), err.message())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Closed vocabularies
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! closed_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $error:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALLOWED: &'static [&'static str] = &[$($text),+];

            pub fn parse(raw: &str) -> Result<Self, OfferError> {
                match raw.trim() {
                    $($text => Ok(Self::$variant),)+
                    other => Err(OfferError::$error(other.to_string())),
                }
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl ValueObject for $name {}

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

closed_vocabulary! {
    /// Primary technology of the position.
    Technology, InvalidTechnology {
        JavaScript => "javascript",
        TypeScript => "typescript",
        Rust => "rust",
        Python => "python",
        Java => "java",
        Go => "go",
        Php => "php",
        CSharp => "csharp",
    }
}

closed_vocabulary! {
    EmploymentType, InvalidEmploymentType {
        B2b => "b2b",
        Permanent => "permanent",
        Contract => "contract",
        Internship => "internship",
    }
}

closed_vocabulary! {
    SeniorityLevel, InvalidLevel {
        Intern => "intern",
        Junior => "junior",
        Mid => "mid",
        Senior => "senior",
        Lead => "lead",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Offer entity
// ─────────────────────────────────────────────────────────────────────────────

/// Raw input for [`Offer::create`].
#[derive(Debug, Clone)]
pub struct OfferProps {
    pub title: String,
    pub description: String,
    pub technology: String,
    pub employment_type: String,
    pub level: String,
    pub salary_min: i64,
    pub salary_max: i64,
    pub created_at: DateTime<Utc>,
}

/// Job offer published by a brand.
///
/// # Invariants
/// - `0 <= salary_min <= salary_max <= SALARY_CEILING`.
/// - Title and description are trimmed and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    id: OfferId,
    title: String,
    description: String,
    technology: Technology,
    employment_type: EmploymentType,
    level: SeniorityLevel,
    salary_min: i64,
    salary_max: i64,
    created_at: DateTime<Utc>,
}

impl Offer {
    pub fn create(id: OfferId, props: OfferProps) -> Result<Self, ValidationError> {
        let title = props.title.trim();
        let description = props.description.trim();

        GuardChain::new()
            .check(|| against_empty(title, "title"))
            .check(|| against_too_short(title, TITLE_MIN, "title"))
            .check(|| against_too_long(title, TITLE_MAX, "title"))
            .check(|| against_empty(description, "description"))
            .check(|| against_too_long(description, DESCRIPTION_MAX, "description"))
            .finish()?;

        let technology = Technology::parse(&props.technology)?;
        let employment_type = EmploymentType::parse(&props.employment_type)?;
        let level = SeniorityLevel::parse(&props.level)?;

        salary_bounds(props.salary_min, props.salary_max)?;

        Ok(Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            technology,
            employment_type,
            level,
            salary_min: props.salary_min,
            salary_max: props.salary_max,
            created_at: props.created_at,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn technology(&self) -> Technology {
        self.technology
    }

    pub fn employment_type(&self) -> EmploymentType {
        self.employment_type
    }

    pub fn level(&self) -> SeniorityLevel {
        self.level
    }

    pub fn salary_min(&self) -> i64 {
        self.salary_min
    }

    pub fn salary_max(&self) -> i64 {
        self.salary_max
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Offer {
    type Id = OfferId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn salary_bounds(min: i64, max: i64) -> Result<(), GuardFailure> {
    GuardChain::new()
        .check(|| in_range(min, 0, SALARY_CEILING, "salaryMin"))
        .check(|| in_range(max, 0, SALARY_CEILING, "salaryMax"))
        // min must not exceed max
        .check(|| in_range(min, 0, max, "salaryMin"))
        .finish()
}
