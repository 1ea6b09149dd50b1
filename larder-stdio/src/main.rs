//! Larder stdio front end
//!
//! Reads one JSON request per line on stdin and writes one JSON response per
//! line on stdout. Logs go to stderr.
//!
//! Request:  {"value": 1.5, "unit": "cups", "scale": 2}
//! Response: {"rendering": {...}} | {"absent": true} | {"error": {...}}
//!
//! Environment:
//! - LARDER_UNITS: path to a JSON array of extra unit definitions
//! - RUST_LOG: log filter (default "info")

use larder_core::{QuantityError, RawValue};
use larder_units::{parse_amount, scale, Quantifiable, Rendering, UnitDefinition, UnitRegistry};
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
const UNITS_ENV: &str = "LARDER_UNITS";
const BAD_REQUEST: &str = "BAD_REQUEST";

#[derive(Debug, Deserialize)]
struct QuantityRequest {
    #[serde(default)]
    value: Option<RawValue>,
    #[serde(default)]
    unit: Option<String>,
    /// Multiply the quantity before rendering (recipe scaling)
    #[serde(default)]
    scale: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum QuantityResponse {
    Rendering(Rendering),
    Absent(bool),
    Error(ErrorBody),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

impl From<&QuantityError> for ErrorBody {
    fn from(err: &QuantityError) -> Self {
        ErrorBody {
            code: err.code().to_string(),
            message: err.to_string(),
            suggestion: Some(err.suggestion().to_string()),
        }
    }
}

/// Built-in units plus the ones listed in `path`
fn load_registry(path: &Path) -> Result<UnitRegistry, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;
    let extra: Vec<UnitDefinition> = serde_json::from_str(&text)?;
    let registry = UnitRegistry::builder().with_builtin().units(extra).build()?;
    Ok(registry)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let custom = match env::var_os(UNITS_ENV) {
        Some(path) => Some(load_registry(Path::new(&path))?),
        None => None,
    };
    let quantifiable = match &custom {
        Some(registry) => Quantifiable::with_registry(registry),
        None => Quantifiable::new(),
    };

    info!(version = SERVER_VERSION, units = quantifiable.registry().len(), "larder started");

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("end of input");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                debug!(bytes = line.len(), "received request");
                let response = handle_line(&quantifiable, line);

                let mut stdout = io::stdout().lock();
                let written = serde_json::to_writer(&mut stdout, &response)
                    .map_err(io::Error::from)
                    .and_then(|_| writeln!(stdout))
                    .and_then(|_| stdout.flush());
                if let Err(e) = written {
                    error!(error = %e, "failed to write response");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "failed to read input");
                break;
            }
        }
    }

    info!("shutting down");
    Ok(())
}

fn handle_line(quantifiable: &Quantifiable<'_>, line: &str) -> QuantityResponse {
    let request: QuantityRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "malformed request");
            return QuantityResponse::Error(ErrorBody {
                code: BAD_REQUEST.to_string(),
                message: format!("Parse error: {}", e),
                suggestion: None,
            });
        }
    };

    match handle_request(quantifiable, &request) {
        Ok(Some(rendering)) => QuantityResponse::Rendering(rendering),
        Ok(None) => QuantityResponse::Absent(true),
        Err(e) => QuantityResponse::Error(ErrorBody::from(&e)),
    }
}

fn handle_request(
    quantifiable: &Quantifiable<'_>,
    request: &QuantityRequest,
) -> Result<Option<Rendering>, QuantityError> {
    let value = request.value.as_ref();
    let unit = request.unit.as_deref();

    let factor = match request.scale {
        None => return quantifiable.build(value, unit),
        Some(f) => parse_amount(&RawValue::Number(f))?,
    };

    quantifiable
        .parse(value, unit)?
        .map(|q| scale(&q, &factor).map(|scaled| Rendering::of(&scaled)))
        .transpose()
}
