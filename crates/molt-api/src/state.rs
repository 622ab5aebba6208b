//! Application state wiring the agent together.
//!
//! The coordinator is generic over its social and chat collaborators;
//! AppState pins it to the HTTP implementations from molt-infra.

use std::path::PathBuf;

use secrecy::SecretString;

use molt_core::agent::coordinator::Agent;
use molt_core::chat::client::ChatClient;
use molt_infra::chat::pollinations::PollinationsProvider;
use molt_infra::config::{
    chat_token_from_env, config_path, credential_from_env, load_config, resolve_data_dir,
};
use molt_infra::social::client::MoltbookClient;
use molt_types::config::AgentConfig;

/// The agent pinned to the concrete HTTP clients.
pub type MoltAgent = Agent<MoltbookClient, PollinationsProvider>;

/// Process-wide state shared by the REPL and one-shot commands.
pub struct AppState {
    pub agent: MoltAgent,
    pub config: AgentConfig,
    pub config_path: PathBuf,
}

impl AppState {
    /// Load configuration, read the API key from the environment once and
    /// build the agent.
    pub async fn init(config_override: Option<PathBuf>, no_stream: bool) -> anyhow::Result<Self> {
        let config_path = match config_override {
            Some(path) => path,
            None => config_path(&resolve_data_dir()),
        };

        let mut config = load_config(&config_path).await;
        if no_stream {
            config.chat.streaming = false;
        }

        let credential = credential_from_env();
        if !credential.is_set() {
            tracing::info!("no API key in environment, register or use setkey");
        }

        let social = MoltbookClient::new(&config.social)?;
        let mut provider = PollinationsProvider::new(&config.chat)?;
        if let Some(token) = chat_token_from_env() {
            provider = provider.with_token(SecretString::from(token));
        }
        let chat = ChatClient::new(provider, &config.chat);

        let agent = Agent::new(social, chat, credential, config.browse.clone());
        tracing::debug!(path = %config_path.display(), model = %config.chat.model, "agent initialized");

        Ok(Self {
            agent,
            config,
            config_path,
        })
    }
}
