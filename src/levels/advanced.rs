//! Level 6: file I/O and function pointers
//!
//! The demonstration file lives in the configured work directory. It is
//! written, read back line by line, then appended to, and each step reports
//! failures with the path that failed.

use super::functions::add_numbers;
use super::Context;
use crate::constants::DEMO_FILE_NAME;
use crate::errors::GuideError;
use log::debug;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Truncate-or-create the demonstration file and write two lines
pub fn write_demo_file(path: &Path) -> Result<(), GuideError> {
    let mut file = File::create(path).map_err(|e| GuideError::io("open for writing", path, e))?;
    writeln!(file, "Hello, this is line 1.").map_err(|e| GuideError::io("write", path, e))?;
    writeln!(file, "This is line 2, with number {}.", 100)
        .map_err(|e| GuideError::io("write", path, e))?;
    Ok(())
}

/// Read the file back as lines
pub fn read_demo_file(path: &Path) -> Result<Vec<String>, GuideError> {
    let file = File::open(path).map_err(|e| GuideError::io("open for reading", path, e))?;
    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| GuideError::io("read", path, e))
}

/// Append one line without touching existing content
pub fn append_demo_line(path: &Path, line: &str) -> Result<(), GuideError> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| GuideError::io("open for appending", path, e))?;
    writeln!(file, "{}", line).map_err(|e| GuideError::io("append to", path, e))
}

pub fn demo_file_path(workdir: &Path) -> PathBuf {
    workdir.join(DEMO_FILE_NAME)
}

pub fn run(ctx: &mut Context) -> Result<(), GuideError> {
    let workdir = ctx.config.workdir.clone();
    fs::create_dir_all(&workdir).map_err(|e| GuideError::io("create", &workdir, e))?;
    let path = demo_file_path(&workdir);
    debug!("demonstration file at {}", path.display());

    write_demo_file(&path)?;
    ctx.say(format!("Successfully wrote to '{}'.", DEMO_FILE_NAME));

    ctx.say(format!("Contents of '{}':", DEMO_FILE_NAME));
    for line in read_demo_file(&path)? {
        ctx.say(line);
    }

    append_demo_line(&path, "This is an appended line 3.")?;
    let total = read_demo_file(&path)?.len();
    ctx.say(format!("After appending, the file has {} lines.", total));

    // A function pointer names any function with a matching signature
    let calc: fn(i32, i32) -> i32 = add_numbers;
    ctx.say(format!("Function pointer result (50+30): {}", calc(50, 30)));

    // Non-capturing closures coerce to function pointers too
    let operations: [(&str, fn(i32, i32) -> i32); 2] =
        [("max", |a: i32, b: i32| a.max(b)), ("product", |a: i32, b: i32| a * b)];
    for (name, op) in operations {
        ctx.say(format!("{}(50, 30) through a table: {}", name, op(50, 30)));
    }

    Ok(())
}
