use anyhow::{Context, Result};
use chrono::Local;
use colored::Colorize;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use scribe_models::GenerateRequest;
use crate::safe_truncate;

/// Log HTTP request details for debugging (console output)
pub fn log_request(url: &str, request: &GenerateRequest, verbose: bool) {
    if !verbose {
        return;
    }

    eprintln!("\n{}", "═".repeat(80).bright_cyan());
    eprintln!("{}", "🔍 GENERATE REQUEST".bright_cyan().bold());
    eprintln!("{}", "═".repeat(80).bright_cyan());

    // Parse URL to show host and port
    if let Ok(parsed_url) = reqwest::Url::parse(url) {
        eprintln!("{}: {}", "URL".bright_yellow(), url);
        eprintln!("{}: {}", "Host".bright_yellow(), parsed_url.host_str().unwrap_or("unknown"));
        eprintln!("{}: {}", "Port".bright_yellow(), parsed_url.port_or_known_default()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "unknown".to_string()));
    } else {
        eprintln!("{}: {}", "URL".bright_yellow(), url);
    }

    eprintln!("\n{}", "Headers:".bright_yellow());
    eprintln!("  Content-Type: application/json");

    eprintln!("\n{}", "Request Body:".bright_yellow());
    match serde_json::to_string_pretty(request) {
        Ok(json) => {
            // Prompts embed the whole note, keep the dump readable
            if json.chars().count() > 5000 {
                eprintln!("{}", safe_truncate(&json, 5000));
                eprintln!("\n{}", format!("... (truncated, total {} bytes)", json.len()).bright_black());
            } else {
                eprintln!("{}", json);
            }
        }
        Err(e) => eprintln!("{}", format!("Error serializing request: {}", e).red()),
    }

    eprintln!("{}", "═".repeat(80).bright_cyan());
}

/// Log HTTP request to file for persistent debugging
///
/// Returns the path of the written file.
pub fn log_request_to_file(logs_dir: &Path, url: &str, request: &GenerateRequest) -> Result<PathBuf> {
    let timestamp = Local::now();
    let filename = format!(
        "req-{}-{}.txt",
        timestamp.format("%Y%m%d-%H%M%S%.3f"),
        file_safe_model_name(&request.model)
    );
    let file_path = logs_dir.join(filename);

    let mut log_content = String::new();
    log_content.push_str("GENERATE REQUEST LOG\n");
    log_content.push_str("====================\n\n");
    log_content.push_str(&format!("Timestamp: {}\n", timestamp.to_rfc3339()));
    log_content.push_str(&format!("Model: {}\n", request.model));
    log_content.push_str(&format!("URL: {}\n\n", url));
    log_content.push_str("Headers:\n");
    log_content.push_str("  Content-Type: application/json\n\n");

    log_content.push_str("Request Body:\n");
    match serde_json::to_string_pretty(request) {
        Ok(json) => {
            log_content.push_str(&json);
            log_content.push('\n');
        }
        Err(e) => {
            log_content.push_str(&format!("Error serializing request: {}\n", e));
        }
    }

    fs::write(&file_path, log_content)
        .with_context(|| format!("Failed to write request log to {}", file_path.display()))?;

    Ok(file_path)
}

/// Log streaming chunk for debugging (console output)
pub fn log_stream_chunk(chunk_num: usize, data: &str, verbose: bool) {
    if !verbose {
        return;
    }

    eprintln!("{}", format!("📦 Stream Chunk #{}: {}", chunk_num,
        if data.chars().count() > 200 {
            format!("{}... ({} bytes)", safe_truncate(data, 200), data.len())
        } else {
            data.trim_end().to_string()
        }
    ).bright_black());
}

/// Log a chunk that did not parse as a single fragment
pub fn log_malformed_fragment(chunk_num: usize, data: &str, error: &dyn Display) {
    eprintln!("{}", format!(
        "⚠️  Skipping malformed fragment #{}: {} ({})",
        chunk_num,
        safe_truncate(data.trim_end(), 120),
        error
    ).yellow());
}

/// Log a request that produced no usable response stream
pub fn log_transport_error(url: &str, error: &dyn Display) {
    eprintln!("{}", format!("❌ Generation request to {} failed: {}", url, error).red());
}

/// Log a response body that broke off while streaming
pub fn log_stream_interrupted(reason: &str, applied: usize) {
    eprintln!("{}", format!(
        "❌ Response stream interrupted after {} fragment(s): {}",
        applied, reason
    ).red());
}

/// Log the end of a response stream
pub fn log_stream_finished(applied: usize, rejected: usize, verbose: bool) {
    if !verbose {
        return;
    }

    eprintln!("{}", format!(
        "✓ Stream completed: {} fragment(s) applied, {} rejected",
        applied, rejected
    ).bright_green());
}

pub(crate) fn file_safe_model_name(model: &str) -> String {
    model.replace(['/', ':', '\\'], "-")
}
