//! Newline-delimited JSON-RPC over stdin/stdout.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use super::protocol::{JsonRpcRequest, JsonRpcResponse, PARSE_ERROR};
use super::tools::handle_request;
use crate::service::HelperService;

/// Serve MCP on the process's stdin/stdout until stdin closes.
pub async fn run_stdio(service: HelperService) -> std::io::Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    let writer = tokio::io::stdout();
    serve(reader, writer, &service).await
}

/// Serve MCP over any line-oriented reader/writer pair.
///
/// Each non-empty input line is one request; each response is written as
/// one line and flushed. An unparsable line gets a parse-error response
/// with a null id.
pub async fn serve<R, W>(reader: R, mut writer: W, service: &HelperService) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(req) => handle_request(&req, service),
            Err(e) => {
                tracing::warn!("Unparsable MCP message: {}", e);
                Some(JsonRpcResponse::failure(
                    serde_json::Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {}", e),
                ))
            }
        };

        if let Some(response) = response {
            let mut out = serde_json::to_string(&response)?;
            out.push('\n');
            writer.write_all(out.as_bytes()).await?;
            writer.flush().await?;
        }
    }

    tracing::info!("stdin closed, MCP session finished");
    Ok(())
}
