//! `mtc-version` - prints the MTConnect Agent version.

use clap::Parser;
use log::LevelFilter;
use mtc_version::VersionInfo;

#[derive(Parser, Debug)]
#[command(name = "mtc-version", about = "Print the MTConnect Agent version")]
struct Cli {
    /// Append the build number (`2.5.0+9`)
    #[arg(long, conflicts_with_all = ["banner", "schema"])]
    full: bool,

    /// Print the startup banner
    #[arg(long, conflicts_with = "schema")]
    banner: bool,

    /// Print the default MTConnect schema version
    #[arg(long)]
    schema: bool,

    /// Log to stderr at debug level
    #[arg(short, long)]
    verbose: bool,
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: Logger = Logger;

fn init_logger(verbose: bool) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        });
    }
}

fn run(cli: &Cli) {
    let info = VersionInfo::current();
    info.log_version();

    if cli.full {
        println!("{}", info.format_full());
    } else if cli.banner {
        println!("{}", info.banner());
    } else if cli.schema {
        println!("{}", info.schema_version());
    } else {
        info.print_version();
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    run(&cli);
}
