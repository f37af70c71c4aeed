/// Line-oriented adapter: one JSON intent per input line, one JSON document
/// per output line. The initial view is written before any input is read.
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

use menu_core::session::OrderingSession;
use menu_core::view_api::{Intent, ViewModel};

use crate::error::AppError;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub async fn serve<R, W>(session: &mut OrderingSession, input: R, mut output: W) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_line(&mut output, &render(&session.view())).await?;

    let mut lines = input.lines();
    let mut handled = 0usize;
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_line(session, &line);
        write_line(&mut output, &response).await?;
        handled += 1;
    }

    info!(handled, "input closed, ending session");
    Ok(())
}

/// Parses and applies one intent. Failures become `{"error": ...}` and
/// leave the session as it was.
pub fn handle_line(session: &mut OrderingSession, line: &str) -> String {
    let intent: Intent = match serde_json::from_str(line) {
        Ok(intent) => intent,
        Err(e) => {
            warn!(error = %e, "malformed intent");
            return error_json(format!("malformed intent: {e}"));
        }
    };
    match session.apply(intent) {
        Ok(view) => render(&view),
        Err(e) => {
            warn!(error = %e, "intent rejected");
            error_json(e.to_string())
        }
    }
}

fn render(view: &ViewModel) -> String {
    serde_json::to_string(view).unwrap_or_else(|e| error_json(format!("render failed: {e}")))
}

fn error_json(error: String) -> String {
    serde_json::to_string(&ErrorResponse { error })
        .unwrap_or_else(|_| r#"{"error":"unrepresentable error"}"#.to_string())
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, line: &str) -> Result<(), AppError> {
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
