//! Visage CLI - Bridge interface for host environments
//!
//! Commands: shapes, render, encode, decode
//! Outputs JSON (or SVG markup) to stdout
//! Returns non-zero when input is rejected

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use visage_core::{
    decode, default_config, encode, fingerprint, render_all, render_document, shape_fields,
    try_decode, Config, ShapeKind,
};

#[derive(Parser)]
#[command(name = "visage-cli")]
#[command(about = "Visage CLI - Parametric Face Composer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List shape variants with defaults and field metadata
    Shapes,

    /// Render a face to SVG markup
    Render {
        /// Config token; the default face is used when omitted or invalid
        #[arg(short, long)]
        token: Option<String>,

        /// Emit only the group markup, without the document wrapper
        #[arg(long)]
        fragment: bool,
    },

    /// Encode a config into a shareable token
    Encode {
        /// JSON payload (Config)
        #[arg(short, long)]
        payload: String,
    },

    /// Decode a token back into config JSON
    Decode {
        /// Token, with or without the leading '#'
        #[arg(short, long)]
        token: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Shapes => {
            let shapes: Vec<_> = ShapeKind::ALL
                .iter()
                .map(|kind| {
                    let fields: serde_json::Map<_, _> = shape_fields(*kind)
                        .iter()
                        .map(|(name, def)| {
                            (name.to_string(), serde_json::to_value(def).unwrap())
                        })
                        .collect();
                    serde_json::json!({
                        "type": kind.as_str(),
                        "label": kind.label(),
                        "default": kind.default_shape(),
                        "fields": fields,
                    })
                })
                .collect();

            println!("{}", serde_json::to_string_pretty(&shapes).unwrap());
            ExitCode::SUCCESS
        }

        Commands::Render { token, fragment } => {
            // A missing or corrupt token silently falls back to the
            // default face.
            let config = token
                .as_deref()
                .and_then(decode)
                .unwrap_or_else(default_config);

            if fragment {
                println!("{}", render_all(&config));
            } else {
                println!("{}", render_document(&config));
            }
            ExitCode::SUCCESS
        }

        Commands::Encode { payload } => {
            let config: Config = match serde_json::from_str(&payload) {
                Ok(c) => c,
                Err(e) => {
                    println!(r#"{{"error": "Invalid payload: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            match (encode(&config), fingerprint(&config)) {
                (Ok(token), Ok(digest)) => {
                    let short = digest[..12].to_string();
                    let output = serde_json::json!({
                        "token": token,
                        "fingerprint": digest,
                        "short": short,
                    });
                    println!("{}", serde_json::to_string_pretty(&output).unwrap());
                    ExitCode::SUCCESS
                }
                (Err(e), _) | (_, Err(e)) => {
                    println!(r#"{{"error": "{}"}}"#, e);
                    ExitCode::FAILURE
                }
            }
        }

        Commands::Decode { token } => match try_decode(&token) {
            Ok(config) => {
                println!("{}", serde_json::to_string_pretty(&config).unwrap());
                ExitCode::SUCCESS
            }
            Err(e) => {
                let output = serde_json::json!({ "error": e.to_string() });
                println!("{}", serde_json::to_string(&output).unwrap());
                ExitCode::from(2) // Rejected token
            }
        },
    }
}
