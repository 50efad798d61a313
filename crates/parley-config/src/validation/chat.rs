//! Chat section validation (temperature, default model).

use crate::schema::ParleyConfig;

use super::helpers::validate_range_f64;

pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &ParleyConfig) {
    validate_range_f64(errors, "chat.temperature", config.chat.temperature, 0.0, 2.0);

    if !config.models.contains_key(&config.chat.default_model) {
        errors.push(format!(
            "chat.default_model = \"{}\" does not name a [models] entry",
            config.chat.default_model
        ));
    }
}
