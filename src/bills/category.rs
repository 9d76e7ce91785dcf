use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::BillError;

/// Fixed set of bill categories.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
pub enum BillCategory {
    Subscriptions,
    Electricity,
    Water,
    Internet,
    Rent,
    Loan,
    Insurance,
    Medical,
    Transportation,
    Entertainment,
    #[default]
    Other,
}

impl BillCategory {
    pub const ALL: [BillCategory; 11] = [
        BillCategory::Subscriptions,
        BillCategory::Electricity,
        BillCategory::Water,
        BillCategory::Internet,
        BillCategory::Rent,
        BillCategory::Loan,
        BillCategory::Insurance,
        BillCategory::Medical,
        BillCategory::Transportation,
        BillCategory::Entertainment,
        BillCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BillCategory::Subscriptions => "Subscriptions",
            BillCategory::Electricity => "Electricity",
            BillCategory::Water => "Water",
            BillCategory::Internet => "Internet",
            BillCategory::Rent => "Rent",
            BillCategory::Loan => "Loan",
            BillCategory::Insurance => "Insurance",
            BillCategory::Medical => "Medical",
            BillCategory::Transportation => "Transportation",
            BillCategory::Entertainment => "Entertainment",
            BillCategory::Other => "Other",
        }
    }
}

impl fmt::Display for BillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BillCategory {
    type Err = BillError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        BillCategory::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| BillError::UnknownCategory(value.to_string()))
    }
}
