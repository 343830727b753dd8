pub mod config;
pub mod humanize;
pub mod invoice;
pub mod ledger;
pub mod mover;
pub mod observability;
pub mod report;
pub mod scan;
pub mod sweep;
