//! Request input and response output for the plugin process.

use std::{
    fs,
    io::{Read, Write},
    path::Path,
};

use eyre::{Context, Result};
use serde::Deserialize;
use sqlts_ir::{GenerateRequest, Query, wire};

/// Read the whole request from `path`, or stdin when absent.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            fs::read(path).wrap_err_with(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .wrap_err("Failed to read request from stdin")?;
            Ok(bytes)
        }
    }
}

/// Write the response to `path`, or stdout when absent.
pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, bytes).wrap_err_with(|| format!("Failed to write {}", path.display()))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|_| stdout.flush())
                .wrap_err("Failed to write response to stdout")
        }
    }
}

/// Decode an sqlc protobuf request.
pub fn request_from_protobuf(bytes: &[u8]) -> sqlts_core::Result<GenerateRequest> {
    Ok(wire::decode_request(bytes)?)
}

/// JSON form of a request, with the plugin options embedded as a value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct JsonRequest {
    queries: Vec<Query>,
    plugin_options: Option<serde_json::Value>,
}

impl From<JsonRequest> for GenerateRequest {
    fn from(request: JsonRequest) -> Self {
        let options = match request.plugin_options {
            None | Some(serde_json::Value::Null) => Vec::new(),
            // Already-serialized options, as sqlc would pass them
            Some(serde_json::Value::String(raw)) => raw.into_bytes(),
            Some(value) => value.to_string().into_bytes(),
        };
        GenerateRequest::new(request.queries, options)
    }
}

/// Decode a JSON request.
pub fn request_from_json(bytes: &[u8]) -> Result<GenerateRequest> {
    let request: JsonRequest =
        serde_json::from_slice(bytes).wrap_err("Failed to parse JSON request")?;
    Ok(request.into())
}
