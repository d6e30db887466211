//! Offline custody CLI: hash shares, check a client hash, or replay a
//! scripted custody session against an in-process ledger.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use custody_ledger::crypto::{sha256_hex, verify_sha256_hex};
use custody_ledger::{CustodyError, CustodyService, PipelineConfig, TrustModel};
use serde::Deserialize;
use serde_json::json;

#[derive(Parser)]
#[command(name = "custody", version = "0.1", about = "Custody ledger CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the SHA-256 share hash of DATA
    Hash {
        data: String,
    },
    /// Check that HASH is the share hash of DATA
    Verify {
        #[arg(short, long)]
        data: String,

        #[arg(long)]
        hash: String,
    },
    /// Run a JSON-lines script of register / submit / list operations
    Replay {
        /// Script file, one operation per line
        file: PathBuf,

        #[arg(long, default_value = "server-hash", help = "Trust model: server-hash | client-hash")]
        trust_model: TrustModel,

        /// Do not stamp accepted shares with server time
        #[arg(long)]
        no_timestamps: bool,
    },
}

/// One scripted operation.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Operation {
    Register {
        custodian_id: String,
        password: String,
    },
    Submit {
        custodian_id: String,
        share_data: String,
        #[serde(default)]
        password: Option<String>,
        #[serde(default)]
        share_hash: Option<String>,
    },
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hash { data } => {
            println!("{}", sha256_hex(&data));
        }

        Commands::Verify { data, hash } => {
            let code = verify_exit_code(&data, &hash);
            if code != 0 {
                std::process::exit(code);
            }
        }

        Commands::Replay { file, trust_model, no_timestamps } => {
            let service = CustodyService::new(
                PipelineConfig {
                    trust_model,
                    record_timestamps: !no_timestamps,
                },
                500,
            );
            let reader = BufReader::new(
                File::open(&file).with_context(|| format!("opening {}", file.display()))?,
            );
            replay(&service, reader)?;
            println!("{}", serde_json::to_string_pretty(&json!({ "shares": service.list_shares() }))?);
        }
    }

    Ok(())
}

/// Process exit status for `verify`: 0 when HASH matches DATA, 1 otherwise.
fn verify_exit_code(data: &str, hash: &str) -> i32 {
    match verify_sha256_hex(data, hash) {
        Ok(_) => {
            println!("Hash verified");
            0
        }
        Err(e) => {
            eprintln!("{e}");
            1
        }
    }
}

/// Execute each line and print one JSON outcome per operation. Client errors
/// are reported and the replay continues; malformed lines abort it.
fn replay(service: &CustodyService, reader: impl BufRead) -> anyhow::Result<()> {
    for outcome in run_script(service, reader)? {
        println!("{outcome}");
    }
    Ok(())
}

fn run_script(
    service: &CustodyService,
    reader: impl BufRead,
) -> Result<Vec<serde_json::Value>, CustodyError> {
    let mut outcomes = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let op: Operation = serde_json::from_str(line)
            .map_err(|e| CustodyError::InvalidInput(format!("line {}: {e}", index + 1)))?;

        let outcome = match op {
            Operation::Register { custodian_id, password } => service
                .register_custodian(custodian_id, password)
                .map(|message| json!({ "message": message })),
            Operation::Submit { custodian_id, share_data, password, share_hash } => {
                submit(service, custodian_id, share_data, password, share_hash)
                    .and_then(|receipt| serde_json::to_value(receipt).map_err(CustodyError::from))
            }
            Operation::List => Ok(json!({ "shares": service.list_shares() })),
        };

        outcomes.push(match outcome {
            Ok(value) => json!({ "line": index + 1, "ok": value }),
            Err(e) => json!({ "line": index + 1, "error": e.kind(), "detail": e.to_string() }),
        });
    }
    Ok(outcomes)
}

fn submit(
    service: &CustodyService,
    custodian_id: String,
    share_data: String,
    password: Option<String>,
    share_hash: Option<String>,
) -> Result<custody_ledger::SubmissionReceipt, CustodyError> {
    match service.trust_model() {
        TrustModel::ServerHash => {
            let password = password.ok_or_else(|| {
                CustodyError::InvalidInput("server-hash submissions need a password".into())
            })?;
            service.submit_with_credential(custodian_id, &password, share_data)
        }
        TrustModel::ClientHash => {
            let share_hash = share_hash.ok_or_else(|| {
                CustodyError::InvalidInput("client-hash submissions need a share_hash".into())
            })?;
            service.submit_with_hash(custodian_id, share_data, &share_hash)
        }
    }
}


// cargo run -p custody-ledger-cli -- hash "secret1"
// cargo run -p custody-ledger-cli -- replay session.jsonl --trust-model client-hash
