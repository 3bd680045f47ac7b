//! CLI parse tests.

use super::Cli;
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}


#[allow(dead_code)]
#[path = "../../../../favicon-core/tests/common/site_server.rs"]
mod site_server;
