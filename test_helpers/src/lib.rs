extern crate atty;
extern crate colored;
#[macro_use] extern crate clap;
extern crate env_logger;
#[macro_use] extern crate log;

#[macro_use] pub mod assertion;
pub mod cli;
pub mod dispatcher;
pub mod test_case;

pub use dispatcher::dispatch;
pub use test_case::{TestCase, TestCaseCollection};

/// Installs the `RUST_LOG` driven logger. Safe to call more than once.
pub fn init_logger() {
    let _ = env_logger::try_init();
}

/// Entry point shared by the test binaries: picks the case named by the first
/// argument, or every case when there is none, and runs it.
pub fn run(bin_name: &str, cases: TestCaseCollection) {
    init_logger();
    let selected = cli::selected_case(bin_name);
    let executed = dispatch(&cases, selected.as_ref().map(|name| name.as_os_str()));
    debug!("{}: {} of {} cases executed", bin_name, executed, cases.len());
}
