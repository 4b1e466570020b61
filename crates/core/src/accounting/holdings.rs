//! Asset and liability registers.

use chrono::{DateTime, Utc};
use nexus_shared::types::{AssetId, LiabilityId};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::amount::checked_sum;
use super::error::AccountingError;
use super::types::{Asset, AssetType, Liability, LiabilityType};
use crate::business::BusinessData;
use crate::validation::{required, required_text};

/// Input for registering an asset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    /// Asset name (required).
    #[serde(default)]
    pub name: String,
    /// Carrying value (required).
    #[serde(default)]
    pub value: Option<Decimal>,
    /// Classification; defaults to current asset.
    #[serde(default, rename = "type")]
    pub asset_type: AssetType,
}

/// Input for registering a liability.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLiability {
    /// Liability name (required).
    #[serde(default)]
    pub name: String,
    /// Amount owed (required).
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Classification; defaults to current liability.
    #[serde(default, rename = "type")]
    pub liability_type: LiabilityType,
}

/// Service for the asset and liability registers.
pub struct HoldingsService;

impl HoldingsService {
    /// Appends an asset acquired today.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::MissingField` if name or value is missing.
    pub fn add_asset(
        data: &mut BusinessData,
        input: NewAsset,
        now: DateTime<Utc>,
    ) -> Result<Asset, AccountingError> {
        let name = required_text("name", &input.name)?.to_string();
        let value = required("value", input.value)?;

        let asset = Asset {
            id: AssetId::generate(),
            name,
            value,
            asset_type: input.asset_type,
            date_acquired: now.date_naive(),
            depreciation_rate: None,
        };
        data.assets.push(asset.clone());
        Ok(asset)
    }

    /// Appends a liability. Its due date is set to today.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::MissingField` if name or amount is missing.
    pub fn add_liability(
        data: &mut BusinessData,
        input: NewLiability,
        now: DateTime<Utc>,
    ) -> Result<Liability, AccountingError> {
        let name = required_text("name", &input.name)?.to_string();
        let amount = required("amount", input.amount)?;

        let liability = Liability {
            id: LiabilityId::generate(),
            name,
            amount,
            liability_type: input.liability_type,
            due_date: now.date_naive(),
            interest_rate: None,
        };
        data.liabilities.push(liability.clone());
        Ok(liability)
    }

    /// Sums asset values.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::AmountOverflow` if the total is out of range.
    pub fn total_assets(assets: &[Asset]) -> Result<Decimal, AccountingError> {
        checked_sum(assets.iter().map(|a| a.value))
    }

    /// Sums liability amounts.
    ///
    /// # Errors
    ///
    /// Returns `AccountingError::AmountOverflow` if the total is out of range.
    pub fn total_liabilities(liabilities: &[Liability]) -> Result<Decimal, AccountingError> {
        checked_sum(liabilities.iter().map(|l| l.amount))
    }
}
