//! Model catalogue validation.

use crate::schema::ParleyConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Validate every `[models.<key>]` entry.
pub(crate) fn validate_models(errors: &mut Vec<String>, config: &ParleyConfig) {
    if config.models.is_empty() {
        errors.push("no models configured".into());
    }

    for (key, model) in &config.models {
        if model.model_name.trim().is_empty() {
            errors.push(format!("models.{key}.model_name is empty"));
        }
        if model.api_key.is_none() && model.api_key_env.is_none() {
            errors.push(format!("models.{key} needs api_key or api_key_env"));
        }
        validate_range(
            errors,
            &format!("models.{key}.max_tokens"),
            model.max_tokens,
            1,
            1_000_000,
        );
        validate_range_f64(
            errors,
            &format!("models.{key}.input_price_per_1k"),
            model.input_price_per_1k,
            0.0,
            1000.0,
        );
        validate_range_f64(
            errors,
            &format!("models.{key}.output_price_per_1k"),
            model.output_price_per_1k,
            0.0,
            1000.0,
        );
        if let Some(url) = &model.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                errors.push(format!("models.{key}.base_url must be an http(s) URL"));
            }
        }
    }
}
