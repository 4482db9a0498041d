//! The interactive prompt/read/format cycle.

use std::io;
use std::io::BufRead;
use std::io::Write;

use eyre::Context;
use eyre::OptionExt;

use crate::extract::int_to_bytes;
use crate::hexslice::HexLine;

/// Prompt written before the blocking read.
pub const PROMPT: &str = "Enter an integer: ";

/// Line written when no integer could be read from the input stream.
pub const PARSE_ERROR: &str = "Not an integer. Exiting...";

/// Runs one request/response cycle against the given streams.
///
/// On parse failure the fixed error line is written to `output` and the
/// returned report carries the cause; the byte extraction never runs on
/// that path.
pub fn run<R, W>(mut input: R, mut output: W) -> eyre::Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let value = match parse_input(&mut input) {
        Ok(value) => value,
        Err(err) => {
            writeln!(output, "{PARSE_ERROR}")?;
            return Err(err);
        }
    };

    writeln!(output, "{}", HexLine(&int_to_bytes(value)))?;
    Ok(())
}

/// Reads one token and parses it as an unsigned 32-bit integer.
pub fn parse_input<R: BufRead>(input: &mut R) -> eyre::Result<u32> {
    let token = read_token(input)
        .wrap_err("reading the input stream")?
        .ok_or_eyre("input ended before a token was read")?;

    token
        .parse()
        .wrap_err_with(|| format!("not an unsigned 32-bit integer: {token:?}"))
}

/// Reads the next whitespace-delimited token from `input`.
///
/// Skips leading ASCII whitespace, then collects bytes up to the next
/// whitespace byte or the end of input; `None` if the input ends before
/// any token byte. Token bytes are converted to text lossily, so input
/// that is not UTF-8 fails the integer parse like any other non-digit.
pub fn read_token<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut token = Vec::new();

    loop {
        let mut used = 0;
        let mut delimited = false;

        let buf = input.fill_buf()?;
        if buf.is_empty() {
            // end of input
            break;
        }
        for &byte in buf {
            used += 1;
            if byte.is_ascii_whitespace() {
                if token.is_empty() {
                    continue;
                }
                delimited = true;
                break;
            }
            token.push(byte);
        }
        input.consume(used);

        if delimited {
            break;
        }
    }

    if token.is_empty() {
        Ok(None)
    } else {
        Ok(Some(String::from_utf8_lossy(&token).into_owned()))
    }
}
