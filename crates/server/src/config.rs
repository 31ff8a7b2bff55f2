// crates/server/src/config.rs
//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fokus_core::llm::config::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use fokus_core::llm::{LlmConfig, ProviderType};

use crate::auth::AuthKeys;

/// Default `RUST_LOG` filter when none is set.
pub const DEFAULT_LOG_FILTER: &str = "warn,fokus_server=info,fokus_db=info";

#[derive(Parser, Debug)]
#[command(name = "fokus", version)]
#[command(about = "FOKUS focus tracker server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Address to bind
    #[arg(long, env = "FOKUS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "FOKUS_PORT", default_value_t = 47900)]
    pub port: u16,

    /// SQLite database file (defaults to the user data directory)
    #[arg(long, env = "FOKUS_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Directory of frontend files to serve; API-only when absent
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// HS256 secret used to verify bearer tokens
    #[arg(long, env = "FOKUS_JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Expected `aud` claim; not checked when absent
    #[arg(long, env = "FOKUS_JWT_AUDIENCE")]
    pub jwt_audience: Option<String>,

    /// Hugging Face API key for the coach
    #[arg(long, env = "HF_API_KEY", hide_env_values = true)]
    pub hf_api_key: Option<String>,

    /// Coach model id
    #[arg(long, env = "FOKUS_LLM_MODEL", default_value = DEFAULT_MODEL)]
    pub llm_model: String,

    /// Inference endpoint; the model id is appended
    #[arg(long, env = "FOKUS_LLM_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub llm_endpoint: String,

    /// Inference request timeout in seconds
    #[arg(long, env = "FOKUS_LLM_TIMEOUT_SECS", default_value_t = 60)]
    pub llm_timeout_secs: u64,

    /// Maximum tokens the coach may generate
    #[arg(long, env = "FOKUS_LLM_MAX_NEW_TOKENS", default_value_t = 512)]
    pub llm_max_new_tokens: u32,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Print a development bearer token signed with the configured secret
    Token {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long, default_value_t = 24)]
        ttl_hours: i64,
    },
}

impl Cli {
    pub fn llm_config(&self) -> LlmConfig {
        LlmConfig {
            provider: ProviderType::HuggingFace,
            model: self.llm_model.clone(),
            api_key: self.hf_api_key.clone(),
            endpoint: self.llm_endpoint.clone(),
            timeout_secs: self.llm_timeout_secs,
            max_new_tokens: self.llm_max_new_tokens,
        }
    }

    pub fn auth_keys(&self) -> AuthKeys {
        AuthKeys::new(&self.jwt_secret, self.jwt_audience.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["fokus", "--jwt-secret", "s"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.port, 47900);
        assert_eq!(cli.llm_timeout_secs, 60);

        let llm = cli.llm_config();
        assert_eq!(llm.model, DEFAULT_MODEL);
        assert_eq!(llm.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(llm.max_new_tokens, 512);
    }

    #[test]
    fn test_token_subcommand() {
        let cli = Cli::try_parse_from([
            "fokus",
            "--jwt-secret",
            "s",
            "token",
            "--user-id",
            "u1",
            "--email",
            "sam@example.com",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Token {
                user_id: "u1".into(),
                email: Some("sam@example.com".into()),
                ttl_hours: 24,
            })
        );

        let keys = cli.auth_keys();
        let token = keys.mint("u1", None, chrono::Duration::hours(1)).unwrap();
        assert_eq!(keys.verify(&token).unwrap().sub, "u1");
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "fokus",
            "--jwt-secret",
            "s",
            "--port",
            "8080",
            "--llm-model",
            "HuggingFaceH4/zephyr-7b-beta",
            "--hf-api-key",
            "hf_x",
        ])
        .unwrap();
        assert_eq!(cli.port, 8080);
        let llm = cli.llm_config();
        assert_eq!(llm.model, "HuggingFaceH4/zephyr-7b-beta");
        assert_eq!(llm.api_key.as_deref(), Some("hf_x"));
    }
}
