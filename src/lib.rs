//! Scripts for deploying the CryptoDevs DAO smart contracts.

#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod commands;
pub mod constants;
pub mod errors;

/// Compiled artifact loading
pub mod artifacts;

/// Contract deployment helpers
pub mod deploy;

/// Deployed addresses bookkeeping
pub mod output_writer;

pub mod tx;
