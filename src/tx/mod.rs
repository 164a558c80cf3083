//! Transaction plumbing: RPC client, contract ABIs and read-only calls

/// Contract ABIs
pub mod abi;

/// RPC client construction
pub mod client;

/// Read-only contract calls
pub mod reader;
