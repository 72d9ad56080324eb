/// Customer account record shared by every container.
/// Balance changes go through events, which are created by handling commands
pub mod account;

/// Operations accepted by the ledger, and their parsing from raw fields.
pub mod command;

/// The linked, tree and ring containers accounts are kept in.
pub mod storage;

/// Ledger orchestrating the primary registry, the name index and the
/// transaction log.
///
/// NOTE: the circular registry and the waiting queue are not wired in here,
/// they are used on their own.
pub mod ledger;

/// Bootstraps a ledger from a CSV operation script. Lives in the library
/// so the integration test can drive it.
pub mod bin_utils;
