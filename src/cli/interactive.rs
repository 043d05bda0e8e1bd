//! Interactive session: repeated form submissions read from a line source.
//!
//! Each submission is independent. A rejected one prints its message and the
//! session goes on.

use std::io::{self, BufRead, Write};

use crate::adapters::text::REPORT_TITLE;
use crate::application::AssessmentService;
use crate::ports::ReportRenderer;
use crate::RadwarnError;

use super::{user_message, DEFAULT_RADIATION_TYPE, DEFAULT_UNIT};

const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

/// Counts for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub assessed: usize,
    pub rejected: usize,
}

/// Prompt for a line. `None` at end of input.
fn prompt<I, W>(input: &mut I, output: &mut W, label: &str) -> io::Result<Option<String>>
where
    I: BufRead,
    W: Write,
{
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run submissions until a quit word or end of input.
///
/// # Errors
/// Returns error only if reading input or writing output fails.
pub fn run_session<R, I, W>(
    service: &AssessmentService<R>,
    mut input: I,
    output: &mut W,
) -> io::Result<SessionStats>
where
    R: ReportRenderer,
    I: BufRead,
    W: Write,
{
    let mut stats = SessionStats::default();

    writeln!(output, "{REPORT_TITLE}")?;
    writeln!(output, "Type 'quit' to leave.")?;

    loop {
        let Some(value) = prompt(&mut input, output, "\nEnter the radiation exposure value: ")? else {
            break;
        };
        if QUIT_WORDS.contains(&value.to_lowercase().as_str()) {
            break;
        }

        let Some(unit) = prompt(
            &mut input,
            output,
            "Select unit [R/Ci/Gy/Sv] (default R): ",
        )?
        else {
            break;
        };
        let Some(radiation_type) = prompt(
            &mut input,
            output,
            "Select radiation type [Gamma/Alpha/Beta] (default Gamma): ",
        )?
        else {
            break;
        };

        let unit = if unit.is_empty() { DEFAULT_UNIT } else { unit.as_str() };
        let radiation_type = if radiation_type.is_empty() {
            DEFAULT_RADIATION_TYPE
        } else {
            radiation_type.as_str()
        };

        match service.submit(&value, unit, radiation_type) {
            Ok(report) => {
                writeln!(output, "\n{}", report.trim_end())?;
                stats.assessed += 1;
            }
            Err(RadwarnError::Dose(e)) => {
                writeln!(output, "{}", user_message(&e))?;
                stats.rejected += 1;
            }
            Err(e) => {
                writeln!(output, "Error: {e}")?;
                stats.rejected += 1;
            }
        }
    }

    Ok(stats)
}
