//! Chart of accounts.

use serde::Deserialize;

use super::error::AccountingError;
use super::types::{Account, AccountType};
use crate::business::BusinessData;
use crate::validation::{required, required_text};

/// Input for adding an account to the chart.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    /// Account code (required, unique).
    #[serde(default)]
    pub code: String,
    /// Account name (required).
    #[serde(default)]
    pub name: String,
    /// Classification (required).
    #[serde(default, rename = "type")]
    pub account_type: Option<AccountType>,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Service for chart of accounts queries.
pub struct ChartService;

impl ChartService {
    /// Returns the chart ordered by account code.
    #[must_use]
    pub fn sorted_by_code(accounts: &[Account]) -> Vec<Account> {
        let mut sorted = accounts.to_vec();
        sorted.sort_by(|a, b| a.code.cmp(&b.code));
        sorted
    }

    /// Returns the accounts of one type, ordered by code.
    ///
    /// Bill categories are offered from the expense accounts.
    #[must_use]
    pub fn of_type(accounts: &[Account], account_type: AccountType) -> Vec<Account> {
        let mut matching: Vec<Account> = accounts
            .iter()
            .filter(|a| a.account_type == account_type)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.code.cmp(&b.code));
        matching
    }

    /// Finds an account by code.
    #[must_use]
    pub fn find_by_code<'a>(accounts: &'a [Account], code: &str) -> Option<&'a Account> {
        accounts.iter().find(|a| a.code == code)
    }

    /// Finds an account by name, the key ledger categories use.
    #[must_use]
    pub fn find_by_name<'a>(accounts: &'a [Account], name: &str) -> Option<&'a Account> {
        accounts.iter().find(|a| a.name == name)
    }

    /// Adds an account to the chart.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::MissingField` for a blank code, name or
    /// missing type, and `AccountingError::DuplicateAccountCode` if the code
    /// is already used.
    pub fn add_account(
        data: &mut BusinessData,
        input: NewAccount,
    ) -> Result<Account, AccountingError> {
        let code = required_text("code", &input.code)?.to_string();
        let name = required_text("name", &input.name)?.to_string();
        let account_type = required("type", input.account_type)?;

        if Self::find_by_code(&data.chart_of_accounts, &code).is_some() {
            return Err(AccountingError::DuplicateAccountCode(code));
        }

        let account = Account {
            code,
            name,
            account_type,
            description: input.description.filter(|d| !d.trim().is_empty()),
        };
        data.chart_of_accounts.push(account.clone());
        Ok(account)
    }
}
