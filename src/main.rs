use std::io;
use std::process;

use log::{debug, error};
use structopt::StructOpt;

use nginx_check::check::{report, Check, CheckState};
use nginx_check::cliopt::CliOpt;
use nginx_check::input::HttpFetcher;
use nginx_check::model::SystemClock;
use nginx_check::output::LineWriter;
use nginx_check::parse::StatusParser;
use nginx_check::target::{timeout_from_secs, Target};

fn main() {
    let opt = CliOpt::from_args();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        if opt.verbose { "debug" } else { "warn" },
    ))
    .init();

    process::exit(run(&opt).code());
}

fn run(opt: &CliOpt) -> CheckState {
    let mut writer = LineWriter::new(io::stdout());

    let target = match Target::resolve(&opt.url, &opt.hostname, opt.port, &opt.status_path) {
        Ok(target) => target,
        Err(e) => {
            error!("bad target: {}", e);
            return report(&mut writer, &e.to_string());
        }
    };
    debug!("fetching {} (host={}, port={})", target.url, target.hostname, target.port);

    let fetcher = match HttpFetcher::new(&target.url, timeout_from_secs(opt.timeout)) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!("couldn't set up fetcher: {}", e);
            return report(&mut writer, &e.to_string());
        }
    };

    let check = Check::new(
        Box::new(fetcher),
        StatusParser::new(&target.hostname, &target.port),
        opt.format.encoder(),
        Box::new(SystemClock),
    );
    check.execute(&mut writer)
}
