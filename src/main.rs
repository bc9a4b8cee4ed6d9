use std::io::{self, Read as _};

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use sealtoken::keys::{KeySet, KeySetRegistry};
use sealtoken::open::open;
use sealtoken::seal::seal;
use sealtoken::serialize::{decode_header, decode_token};

#[derive(Parser)]
#[command(name = "sealtoken", about = "Encrypted tokens with identifiable key-sets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a new key-set and print it as JSON with hex-encoded keys.
    GenerateKeyset {
        /// Key-set identifier embedded in sealed tokens.
        #[arg(short, long)]
        id: String,
    },

    /// Seal a JSON payload into a token.
    Seal {
        /// Path to a key-set JSON file (as produced by generate-keyset).
        #[arg(short, long)]
        keyset: String,

        /// Payload as a JSON document. If omitted, reads from stdin.
        #[arg(short, long)]
        payload: Option<String>,
    },

    /// Open a token and print the key-set id and payload.
    Open {
        /// Path to a key-set JSON file.
        #[arg(short, long)]
        keyset: String,

        /// Token string. If omitted, reads from stdin.
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Show a token's public parts (key id, segment sizes) without any keys.
    Inspect {
        /// Token string. If omitted, reads from stdin.
        #[arg(short, long)]
        token: Option<String>,
    },
}

/// On-disk key-set representation. Used only by the CLI; the library never
/// touches files.
#[derive(Serialize, Deserialize)]
struct KeySetFile {
    id: String,
    signing_key_hex: String,
    encryption_key_hex: String,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::GenerateKeyset { id } => cmd_generate_keyset(&id),
        Command::Seal { keyset, payload } => cmd_seal(&keyset, payload),
        Command::Open { keyset, token } => cmd_open(&keyset, token),
        Command::Inspect { token } => cmd_inspect(token),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn cmd_generate_keyset(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let keyset = KeySet::generate(id);
    let file = KeySetFile {
        id: keyset.id.clone(),
        signing_key_hex: hex::encode(keyset.signing_key.as_slice()),
        encryption_key_hex: hex::encode(keyset.encryption_key.as_slice()),
    };
    println!("{}", serde_json::to_string_pretty(&file)?);
    Ok(())
}

fn cmd_seal(keyset_path: &str, payload_arg: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let keyset = read_keyset_file(keyset_path)?;
    let payload: serde_json::Value = serde_json::from_str(&read_arg_or_stdin(payload_arg)?)?;
    let token = seal(&payload, &keyset)?;
    println!("{token}");
    Ok(())
}

fn cmd_open(keyset_path: &str, token_arg: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let keyset = read_keyset_file(keyset_path)?;
    let token = read_arg_or_stdin(token_arg)?;
    let registry: KeySetRegistry = [keyset].into_iter().collect();
    let opened = open(&token, &registry)?;
    println!("{}", serde_json::to_string_pretty(&opened)?);
    Ok(())
}

fn cmd_inspect(token_arg: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let token = read_arg_or_stdin(token_arg)?;
    let segments = decode_token(&token)?;
    let header = decode_header(&segments.header)?;

    let output = serde_json::json!({
        "kid": header.kid,
        "header_bytes": segments.header.len(),
        "ciphertext_bytes": segments.ciphertext.len(),
        "iv_bytes": segments.iv.len(),
        "tag_bytes": segments.tag.len(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Read a value from a CLI argument or stdin.
fn read_arg_or_stdin(arg: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    match arg {
        Some(s) => Ok(s.trim().to_string()),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf.trim().to_string())
        }
    }
}

/// Read and hex-decode a key-set file.
fn read_keyset_file(path: &str) -> Result<KeySet, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let file: KeySetFile = serde_json::from_str(&raw)?;
    Ok(KeySet::new(
        file.id,
        hex::decode(file.signing_key_hex.trim())?,
        hex::decode(file.encryption_key_hex.trim())?,
    ))
}
