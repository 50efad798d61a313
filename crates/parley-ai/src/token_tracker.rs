//! Token usage and cost tracking for one session.

use crate::TokenUsage;

/// Tracks cumulative token usage across the calls of a session.
#[derive(Debug, Clone, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from a successful API call.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self.total.output_tokens.saturating_add(usage.output_tokens);
        self.call_count += 1;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    /// Estimated spend in USD given per-1k token prices.
    pub fn estimated_cost(&self, input_price_per_1k: f64, output_price_per_1k: f64) -> f64 {
        (self.total.input_tokens as f64 / 1000.0) * input_price_per_1k
            + (self.total.output_tokens as f64 / 1000.0) * output_price_per_1k
    }
}
