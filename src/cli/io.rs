//! Plain-text output for CLI commands
//!
//! One line per record, written to the caller's writer (stdout in `run`).

use std::io::Write;

use crate::database::ApproachView;
use crate::model::NearEarthObject;

use super::errors::CliResult;

/// Write one line per approach. Returns the number of lines written.
pub fn write_approaches<'a, W, I>(out: &mut W, results: I) -> CliResult<usize>
where
    W: Write,
    I: IntoIterator<Item = ApproachView<'a>>,
{
    let mut count = 0;
    for view in results {
        writeln!(out, "{}", view)?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

/// Write a NEO and, if given, its approaches indented below it
pub fn write_neo<'a, W, I>(out: &mut W, neo: &NearEarthObject, approaches: Option<I>) -> CliResult<()>
where
    W: Write,
    I: IntoIterator<Item = ApproachView<'a>>,
{
    writeln!(out, "{}", neo)?;
    if let Some(approaches) = approaches {
        for view in approaches {
            writeln!(out, "- {}", view)?;
        }
    }
    out.flush()?;
    Ok(())
}
