use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;
use crate::validate::{ContractError, Validate};

/// Account activation progress: `OTP → UPDATE_INFO → ACTIVE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepActive {
    Otp,
    UpdateInfo,
    Active,
}

impl StepActive {
    pub const ALL: [StepActive; 3] = [StepActive::Otp, StepActive::UpdateInfo, StepActive::Active];

    pub fn as_str(&self) -> &'static str {
        match self {
            StepActive::Otp => "OTP",
            StepActive::UpdateInfo => "UPDATE_INFO",
            StepActive::Active => "ACTIVE",
        }
    }

    /// The following step; `None` once active
    pub fn next(&self) -> Option<StepActive> {
        match self {
            StepActive::Otp => Some(StepActive::UpdateInfo),
            StepActive::UpdateInfo => Some(StepActive::Active),
            StepActive::Active => None,
        }
    }
}

impl fmt::Display for StepActive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepActive {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StepActive::ALL
            .into_iter()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| ContractError::new("user", "stepActive", format!("unknown step {s:?}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
    None,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Inactive => "INACTIVE",
            UserStatus::None => "NONE",
        }
    }
}

impl FromStr for UserStatus {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(UserStatus::Active),
            "INACTIVE" => Ok(UserStatus::Inactive),
            "NONE" => Ok(UserStatus::None),
            other => Err(ContractError::new("user", "status", format!("unknown status {other:?}"))),
        }
    }
}

/// Customer or employee account
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub step_active: StepActive,
    pub status: UserStatus,
    /// Authorization role name, e.g. `ADMIN` or `CUSTOMER`
    pub role: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub modified_at: DateTime<Utc>,
}

impl Validate for UserResponse {}

/// Create or update an employee account
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    pub email: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

impl EmployeeRequest {
    pub fn new(email: impl Into<String>, full_name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            full_name: full_name.into(),
            role: role.into(),
            ..Default::default()
        }
    }
}
