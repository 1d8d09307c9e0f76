//! Reads standard input and writes every byte to standard output as eight
//! ASCII binary digits, most significant bit first.

use log::{debug, error};
use sprawl::{Transcoder, init_logging};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        eprintln!("sprawl: {}", err);
        return ExitCode::FAILURE;
    }

    let transcoder = Transcoder::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    match transcoder.transcode(stdin.lock(), stdout.lock()) {
        Ok(stats) => {
            debug!("{} bytes in, {} bytes out", stats.bytes_in, stats.bytes_out);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
