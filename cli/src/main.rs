//! Command-line front end for the FAT12 image builder
//!
//! Packs the files named on the command line into a single FAT12 volume
//! image and streams it to stdout:
//!
//! ```text
//! fat12-cli [--label LABEL] FILE... > image.bin
//! ```

use std::env;
use std::fs::File;
use std::io;
use std::path::Path;
use std::process;

use fat12::io::{StdReader, StdWriter};
use fat12::{create_image, InputFile};
use log::{error, info, LevelFilter};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        eprintln!("{}: {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Info);

    let mut args = env::args().skip(1).peekable();
    let mut label = None;
    if args.peek().map(|a| a.as_str() == "--label").unwrap_or(false) {
        args.next();
        match args.next() {
            Some(value) => label = Some(value),
            None => usage(),
        }
    }
    let paths: Vec<String> = args.collect();
    if paths.is_empty() {
        usage();
    }

    // the opened files stay alive here while the image borrows them
    let mut readers = Vec::new();
    let mut sizes = Vec::new();
    for path in &paths {
        info!("adding {}", path);
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                error!("failed to open {}: {}", path, err);
                process::exit(1);
            }
        };
        let size = match file.metadata() {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                error!("failed to stat {}: {}", path, err);
                process::exit(1);
            }
        };
        sizes.push(size);
        readers.push(StdReader(file));
    }

    let mut files: Vec<InputFile<'_>> = readers
        .iter_mut()
        .zip(&paths)
        .zip(&sizes)
        .map(|((reader, path), &size)| InputFile {
            name: base_name(path),
            size,
            source: reader,
        })
        .collect();

    let stdout = io::stdout();
    let mut sink = StdWriter(stdout.lock());
    if let Err(err) = create_image(&mut files, label.as_deref(), &mut rand::thread_rng(), &mut sink)
    {
        error!("failed to create image: {}", err);
        process::exit(1);
    }
}

fn base_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

fn usage() -> ! {
    eprintln!("usage: fat12-cli [--label LABEL] FILE...");
    process::exit(2);
}
