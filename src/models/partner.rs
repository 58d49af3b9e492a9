//! Investors and advisors: disjoint tables with overlapping name columns

use serde::{Deserialize, Serialize};

use super::ids::{AdvisorId, InvestorId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investor {
    pub investor_id: InvestorId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub company_name: Option<String>,
}

/// Advisors carry no company column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisor {
    pub advisor_id: AdvisorId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, deserialize_with = "deserialize_optional_flag")]
    pub is_chairman: Option<bool>,
}

fn deserialize_optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "crate::models::customer::deserialize_flag")] bool);

    Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(flag)| flag))
}
