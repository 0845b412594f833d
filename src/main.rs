mod options;

use std::{env, path::Path};

use conv_ops::logger;
use options::Options;
use structopt::StructOpt;

fn program_name() -> String {
    env::args_os()
        .next()
        .as_deref()
        .and_then(|arg| Path::new(arg).file_stem())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "conv_ops".to_string())
}

fn main() -> anyhow::Result<()> {
    let options = Options::from_args();
    logger::init(options.log_level)?;
    options.run(&program_name())
}
