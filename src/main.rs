mod cli;

use cli::commands::Command;
use cli::NumberDuel;
use structopt::StructOpt;

fn main() {
    env_logger::init();

    #[cfg(feature = "instrumentation")]
    number_duel::instrumentation::init_tracing();

    NumberDuel::from_args().execute();

    #[cfg(feature = "instrumentation")]
    number_duel::instrumentation::print_timing_statistics();
}
