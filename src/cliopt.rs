use structopt::StructOpt;

use crate::output::Format;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "nginx-check",
    about = "Performs on-demand metrics monitoring of NGINX instances"
)]
pub struct CliOpt {
    /// The NGINX hostname
    #[structopt(long, env = "NGINX_CHECK_HOSTNAME", default_value = "localhost")]
    pub hostname: String,

    /// The NGINX port number
    #[structopt(long, short = "p", env = "NGINX_CHECK_PORT", default_value = "81")]
    pub port: u32,

    /// The NGINX status path
    #[structopt(long, env = "NGINX_CHECK_STATUS_PATH", default_value = "nginx_status")]
    pub status_path: String,

    /// The NGINX status path URL (overrides hostname, port and status path)
    #[structopt(long, short = "u", env = "NGINX_CHECK_URL", default_value = "")]
    pub url: String,

    /// The request timeout in seconds (0 for no timeout)
    #[structopt(long, short = "t", env = "NGINX_CHECK_TIMEOUT", default_value = "10")]
    pub timeout: u32,

    /// Output format: prometheus or json
    #[structopt(long, short = "f", env = "NGINX_CHECK_FORMAT", default_value = "prometheus")]
    pub format: Format,

    /// Log debug details to stderr
    #[structopt(long, short = "v")]
    pub verbose: bool,
}
