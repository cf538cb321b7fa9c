//! Command implementation for the wordrank CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;
use log::debug;

use crate::cli::args::{Input, WordRankArgs};
use crate::error::{Result, WordRankError};
use crate::pipeline;

/// Exit status for errors reading the input.
pub const EXIT_IO: i32 = 1;

/// Exit status for every other failure.
pub const EXIT_FAILURE: i32 = 2;

/// Execute a CLI invocation against the process streams.
pub fn execute_command(args: WordRankArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut diag = io::stderr().lock();

    execute_with(args, &mut out, &mut diag)?;
    out.flush()?;
    Ok(())
}

/// Execute a CLI invocation, writing ranked lines to `out` and warnings to
/// `diag`. Standard input is only read when `args` names no file.
pub fn execute_with<W, E>(args: WordRankArgs, out: &mut W, diag: &mut E) -> Result<()>
where
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    let config = args.build_config()?;
    let options = config
        .report_options()
        .with_format(args.output_format)
        .with_pretty(args.pretty);
    debug!("effective configuration: {config:?}");

    match args.input() {
        Input::Stdin => {
            debug!("reading standard input");
            pipeline::run(io::stdin().lock(), &config, &options, out, diag)?;
        }
        Input::File(path) => {
            debug!("reading {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("failed to open '{}'", path.display()))?;
            pipeline::run(file, &config, &options, out, diag)?;
        }
    }
    Ok(())
}

/// Map an error to the process exit status.
pub fn exit_code(err: &WordRankError) -> i32 {
    if err.is_io() { EXIT_IO } else { EXIT_FAILURE }
}
