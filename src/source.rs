use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use log::info;

use crate::error::{LangError, Result};

/// Reads program text from `filename`, or from stdin when absent.
///
/// Open/read failures become `LangError::Read` (or `Io` for stdin) and
/// non‑UTF‑8 input becomes `LangError::Utf8`, so the driver can map each to
/// its exit status.
pub fn read_source(filename: Option<&Path>) -> Result<String> {
    let mut buf = Vec::new();

    match filename {
        Some(path) => {
            info!("Reading file: {:?}", path);
            let file = File::open(path).map_err(|e| LangError::read(path, e))?;
            let mut reader = BufReader::new(file);

            reader
                .read_to_end(&mut buf)
                .map_err(|e| LangError::read(path, e))?;
        }

        None => {
            info!("Reading source from stdin");
            io::stdin().lock().read_to_end(&mut buf)?;
        }
    }

    info!("Read {} bytes", buf.len());

    Ok(String::from_utf8(buf)?)
}
