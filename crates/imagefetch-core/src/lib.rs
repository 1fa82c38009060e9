pub mod config;
pub mod logging;

pub mod allow_list;
pub mod extract;
pub mod fetch;
pub mod http;
pub mod keyword;
pub mod ledger;
pub mod orchestrator;
pub mod runner;

#[cfg(test)]
pub(crate) mod test_support;
