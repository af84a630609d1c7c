//! Serve search requests as JSON lines: one request per input line, one response per
//! output line. Failures are answered with `{"error": "..."}` and the server keeps going.

use crate::engine::Engine;
use crate::protocol::SearchRequest;
use async_std::io::prelude::{BufReadExt, WriteExt};
use async_std::io::{self, BufRead, Write};
use log::{debug, warn};
use serde_json::json;
use std::error::Error;

pub async fn serve<R, W>(engine: &Engine, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead + Unpin,
    W: Write + Unpin,
{
    let mut line = String::new();
    let mut served = 0usize;

    loop {
        line.clear();
        if input.read_line(&mut line).await? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let reply = match answer(engine, &line).await {
            Ok(reply) => reply,
            Err(message) => {
                warn!("request failed: {}", message);
                json!({ "error": message }).to_string()
            }
        };

        output.write_all(reply.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
        served += 1;
    }

    debug!("input closed after {} requests", served);
    Ok(())
}

async fn answer(engine: &Engine, line: &str) -> Result<String, String> {
    let request: SearchRequest =
        serde_json::from_str(line).map_err(|err| format!("malformed request: {}", err))?;
    let response = engine
        .request(&request)
        .await
        .map_err(|err| describe(&err))?;
    serde_json::to_string(&response).map_err(|err| err.to_string())
}

/// An error and its causes on one line, outermost first.
fn describe(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
