use secrecy::Secret;
use serde::Deserialize;
use service_core::error::AppError;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub identity_service: IdentitySettings,
    pub openai: OpenAiSettings,
}

#[derive(Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone)]
pub struct IdentitySettings {
    /// Base URL of the external identity provider.
    pub url: String,
}

#[derive(Deserialize, Clone)]
pub struct OpenAiSettings {
    /// Completion API credential. Usually supplied via the OPENAI_API_KEY
    /// environment variable rather than the config file.
    pub api_key: Secret<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: i32,
}

fn default_model() -> String {
    "gpt-3.5-turbo-instruct".to_string()
}

fn default_max_tokens() -> i32 {
    1792
}

pub fn get_configuration() -> Result<Settings, AppError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    // Check if we're already in meal-service directory or need to navigate to it
    let configuration_directory = if base_path.ends_with("meal-service") {
        base_path.join("config")
    } else {
        base_path.join("meal-service").join("config")
    };

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option("openai.api_key", std::env::var("OPENAI_API_KEY").ok())?
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}
