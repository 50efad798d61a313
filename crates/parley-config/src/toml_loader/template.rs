//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Parley Configuration
# Only override what you want to change -- missing fields use defaults.

[chat]
# temperature = 1.0      # 0.0-2.0, halved for anthropic and mistral
default_model = "gpt-4o"
# system_role = "You are a helpful assistant."
# save_dir = ""          # empty = platform data dir

# Declaring any [models.*] table replaces the built-in list.
# api_key takes precedence over api_key_env.

[models.gpt-4o]
provider = "openai"
model_name = "gpt-4o"
api_key_env = "OPENAI_API_KEY"
max_tokens = 4096
input_price_per_1k = 0.005
output_price_per_1k = 0.015

[models.claude-sonnet]
provider = "anthropic"
model_name = "claude-sonnet-4-20250514"
api_key_env = "ANTHROPIC_API_KEY"
max_tokens = 4096
input_price_per_1k = 0.003
output_price_per_1k = 0.015

[models.mistral-large]
provider = "mistral"
model_name = "mistral-large-latest"
api_key_env = "MISTRAL_API_KEY"
max_tokens = 4096
input_price_per_1k = 0.002
output_price_per_1k = 0.006
# base_url = "https://api.mistral.ai/v1/chat/completions"
"##
    .to_string()
}
