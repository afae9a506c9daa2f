// Converts icon font metadata into Java enum constants.

use std::io::{self, Write};
use std::process;

use anyhow::Result;

use glyphgen::core::cli::CliArgs;
use glyphgen::core::errors::MissingInput;
use glyphgen::logger::init_custom_logger;

fn main() -> Result<()> {
    let args = CliArgs::parse_args();
    init_custom_logger();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match glyphgen::run(&args.icons_dir, &mut out) {
        Ok(count) => {
            out.flush()?;
            log::debug!("wrote {count} constant declarations");
            Ok(())
        }
        Err(err) => {
            // The missing-file case gets its own diagnostic and exit code;
            // everything else (malformed JSON included) rides the anyhow
            // error path out of main.
            if let Some(missing) = err.downcast_ref::<MissingInput>() {
                eprintln!("{missing}");
                process::exit(1);
            }
            Err(err)
        }
    }
}
