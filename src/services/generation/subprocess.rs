use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use super::interface::{GenerationBackend, GenerationError};
use crate::models::itinerary::{Itinerary, ItineraryRequest};

const DEFAULT_PROGRAM: &str = "python";
const DEFAULT_SCRIPT: &str = "ai_service/main.py";

/// Runs the AI service script: one process per invocation, the request JSON
/// as the sole script argument, one JSON document expected on stdout.
pub struct SubprocessBackend {
    program: String,
    script: PathBuf,
}

impl SubprocessBackend {
    pub fn new(program: impl Into<String>, script: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            script: script.into(),
        }
    }

    pub fn from_env() -> Self {
        let program =
            std::env::var("PYTHON_BIN").unwrap_or_else(|_| DEFAULT_PROGRAM.to_string());
        let script =
            std::env::var("AI_SERVICE_SCRIPT").unwrap_or_else(|_| DEFAULT_SCRIPT.to_string());
        Self::new(program, script)
    }
}

#[async_trait]
impl GenerationBackend for SubprocessBackend {
    async fn invoke(&self, request: &ItineraryRequest) -> Result<Itinerary, GenerationError> {
        let payload =
            serde_json::to_string(request).expect("itinerary request serializes to JSON");

        // stdout is gathered as raw bytes and decoded only after the process
        // exits: a chunk boundary inside a multi-byte character must not
        // corrupt the text. kill_on_drop covers the cancellation contract:
        // if the caller abandons the request, dropping this future
        // terminates the child instead of leaking it.
        let output = Command::new(&self.program)
            .arg(&self.script)
            .arg(&payload)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                eprintln!("Failed to start AI service process: {}", e);
                GenerationError::ProcessFailed { status: None }
            })?;

        // stderr is diagnostics only; it never decides the outcome.
        if !output.stderr.is_empty() {
            eprintln!(
                "AI Service Error: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }

        if !output.status.success() {
            return Err(GenerationError::ProcessFailed {
                status: output.status.code(),
            });
        }

        decode_output(&output.stdout)
    }
}

/// Exit status was zero: the stdout bytes must hold one JSON document. An
/// `error` field inside it is the generator flagging its own failure; any
/// other shape decodes into an `Itinerary`, with omitted fields defaulted.
fn decode_output(stdout: &[u8]) -> Result<Itinerary, GenerationError> {
    let text = String::from_utf8(stdout.to_vec()).map_err(|_| GenerationError::MalformedOutput {
        raw: String::from_utf8_lossy(stdout).into_owned(),
    })?;

    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|_| GenerationError::MalformedOutput { raw: text.clone() })?;

    if let Some(err) = value.get("error") {
        let message = err
            .as_str()
            .map(str::to_owned)
            .unwrap_or_else(|| err.to_string());
        return Err(GenerationError::BackendReportedError { message });
    }

    serde_json::from_value(value).map_err(|_| GenerationError::MalformedOutput { raw: text })
}
