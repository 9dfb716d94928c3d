use std::fs::File;
use std::io::{Read, Write};

use enough::Stop;
use log::debug;

use crate::bmp;
use crate::error::RunError;
use crate::options::Options;

/// Read the input file, apply the selected filter, write the output file.
///
/// Both files are opened before decoding, so an unreadable input or an
/// uncreatable output is reported ahead of format errors. Handles are
/// closed on every return path.
pub fn run(options: Options, stop: impl Stop) -> Result<(), RunError> {
    let Options {
        filter,
        input,
        output,
        permissiveness,
        limits,
    } = options;

    let mut reader = File::open(&input).map_err(|source| RunError::OpenInput {
        path: input.clone(),
        source,
    })?;
    let mut writer = File::create(&output).map_err(|source| RunError::CreateOutput {
        path: output.clone(),
        source,
    })?;

    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(RunError::Read)?;
    drop(reader);
    debug!("read {} bytes from {}", data.len(), input.display());

    let mut bitmap = bmp::decode_bmp(&data, Some(&limits), permissiveness, &stop)?;
    drop(data);
    filter.apply(&mut bitmap.pixels);
    let encoded = bmp::encode_bmp(&bitmap, &stop)?;

    writer.write_all(&encoded).map_err(RunError::Write)?;
    debug!(
        "wrote {} bytes to {} ({filter})",
        encoded.len(),
        output.display()
    );
    Ok(())
}
