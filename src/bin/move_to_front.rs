//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use std::io;

use burrows::compression::compress::mtf_compress;
use burrows::compression::decompress::mtf_decompress;
use burrows::error::BurrowsError;
use burrows::tools::cli::{bwopts_init, Mode};

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> Result<(), BurrowsError> {
    // Log to stderr, stdout carries the data
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let options = bwopts_init();

    //----- Figure how what we need to do and go do it
    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = match options.op_mode {
        Mode::Encode => mtf_compress(stdin.lock(), stdout.lock()),
        Mode::Decode => mtf_decompress(stdin.lock(), stdout.lock()),
    };

    match &result {
        Ok(()) => info!("Done."),
        Err(e) => error!("Move To Front {} failed: {}", options.op_mode, e),
    }
    result
}
