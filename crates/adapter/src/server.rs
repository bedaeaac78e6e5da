//! Line loop over any reader/writer pair
//!
//! The binary runs this over stdin/stdout. Each request line gets exactly one
//! response line, flushed before the next request is read.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::handler::Handler;

/// Serve requests until the reader is exhausted. Returns the number of
/// requests handled. Only I/O failures end the loop early.
pub fn serve<R: BufRead, W: Write>(handler: &Handler, reader: R, mut writer: W) -> Result<usize> {
    let mut handled = 0usize;

    for line in reader.lines() {
        let line = line.context("failed to read request line")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = handler.handle_line(line);
        debug!(seq = response.seq, ok = response.ok, "response ready");

        serde_json::to_writer(&mut writer, &response).context("failed to encode response")?;
        writer
            .write_all(b"\n")
            .and_then(|_| writer.flush())
            .context("failed to write response")?;
        handled += 1;
    }

    info!(handled, "input closed");
    Ok(handled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdapterConfig;
    use serde_json::Value;

    #[test]
    fn one_response_per_request_line() {
        let handler = Handler::new(&AdapterConfig::default());
        let input = concat!(
            r#"{"type":"new_game","seq":1,"seed":5}"#,
            "\n\n",
            "garbage\n",
            r#"{"type":"replay","seq":3,"seed":5,"moves":[]}"#,
            "\n",
        );
        let mut out = Vec::new();

        let handled = serve(&handler, input.as_bytes(), &mut out).unwrap();
        assert_eq!(handled, 3);

        let lines: Vec<Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["type"], "state");
        assert_eq!(lines[1]["code"], "invalid_request");
        assert_eq!(lines[2]["type"], "replay");
        assert_eq!(lines[2]["score"], 0);
        assert_eq!(lines[0]["state"], lines[2]["state"]);
    }
}
