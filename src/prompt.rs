use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Reads a password from the controlling terminal with echo disabled.
///
/// The prompt goes to the terminal rather than stdout so that stdout carries
/// nothing but the token. rpassword restores the terminal mode when its input
/// guard drops, so the echo setting comes back even if the read fails.
pub fn prompt_password(msg: &str) -> Result<String> {
    tracing::debug!("prompting for password");
    rpassword::prompt_password(msg).context("reading password")
}

/// Same as [`prompt_password`] over arbitrary streams.
pub fn prompt_password_from(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    msg: &str,
) -> Result<String> {
    rpassword::prompt_password_from_bufread(reader, writer, msg).context("reading password")
}
