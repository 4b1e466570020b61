//! Inputs for the generative insight collaborator.
//!
//! Everything here is pure: the financial summary is computed from
//! `BusinessData` and the prompts are plain strings. Sending them to a model
//! is the job of the `nexus-insight` crate.

pub mod prompt;
pub mod summary;

pub use prompt::{
    SYSTEM_INSTRUCTION, financial_prompt, job_description_prompt, job_description_schema,
};
pub use summary::{
    CountedTotal, FinancialSummary, OutstandingReceivables, RECENT_TRANSACTION_COUNT,
    StatementTotals,
};
