//! Income/expense breakdown for an event.

use serde::{Deserialize, Serialize};

use stageprep_core::{DomainError, DomainResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default)]
    pub income: BudgetIncome,
    #[serde(default)]
    pub expenses: BudgetExpenses,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetIncome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickets: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchandise: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsorships: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetExpenses {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artists: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<f64>,
}

fn sum(parts: &[Option<f64>]) -> f64 {
    parts.iter().flatten().sum()
}

fn check_non_negative(label: &str, parts: &[Option<f64>]) -> DomainResult<()> {
    for value in parts.iter().flatten() {
        if *value < 0.0 {
            return Err(DomainError::validation(format!(
                "{label} amounts cannot be negative"
            )));
        }
    }
    Ok(())
}

impl Budget {
    pub fn validate(&self) -> DomainResult<()> {
        check_non_negative("income", &self.income.parts())?;
        check_non_negative("expense", &self.expenses.parts())?;
        Ok(())
    }

    pub fn total_income(&self) -> f64 {
        sum(&self.income.parts())
    }

    pub fn total_expenses(&self) -> f64 {
        sum(&self.expenses.parts())
    }

    /// Income minus expenses; negative when the event runs at a loss.
    pub fn net(&self) -> f64 {
        self.total_income() - self.total_expenses()
    }
}

impl BudgetIncome {
    fn parts(&self) -> [Option<f64>; 4] {
        [self.tickets, self.merchandise, self.sponsorships, self.other]
    }
}

impl BudgetExpenses {
    fn parts(&self) -> [Option<f64>; 6] {
        [
            self.venue,
            self.equipment,
            self.marketing,
            self.staff,
            self.artists,
            self.other,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_treat_missing_parts_as_zero() {
        let budget = Budget {
            income: BudgetIncome {
                tickets: Some(3000.0),
                sponsorships: Some(500.0),
                ..Default::default()
            },
            expenses: BudgetExpenses {
                venue: Some(1200.0),
                artists: Some(1800.0),
                ..Default::default()
            },
        };
        assert_eq!(budget.total_income(), 3500.0);
        assert_eq!(budget.total_expenses(), 3000.0);
        assert_eq!(budget.net(), 500.0);
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let budget = Budget {
            expenses: BudgetExpenses {
                marketing: Some(-50.0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(budget.validate().is_err());
    }
}
