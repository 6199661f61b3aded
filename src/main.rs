mod config;
mod dispatcher;
mod environment;
mod errors;
mod provider;

use std::process;

use log::info;

use crate::config::CliArgs;
use crate::dispatcher::Invocation;
use crate::environment::EnvSnapshot;

fn main() {
    let args = CliArgs::parse_args();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.get_log_level()),
    )
    .init();

    // Snapshot the environment once; validation and assembly only ever see
    // this copy.
    let env = EnvSnapshot::capture();

    let invocation =
        match Invocation::assemble(args.provider, &env, &args.runner, &args.test_path) {
            Ok(invocation) => invocation,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        };

    println!("{}", invocation.command_line());
    if args.dry_run {
        info!("dry run, runner not launched");
        process::exit(0);
    }

    match invocation.execute() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}
