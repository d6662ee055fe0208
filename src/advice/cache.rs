use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Deserialize};

use crate::state::app::AppState;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CachedAdvice {
    pub text: String,
    pub timestamp: i64,
}

/// Generate a hash key from model name and prompt
fn cache_key(model: &str, prompt: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    model.hash(&mut hasher);
    prompt.hash(&mut hasher);
    hasher.finish()
}

/// First 50 characters of the prompt for log events. Prompts are
/// Portuguese text, so byte slicing could split a character.
fn prompt_preview(prompt: &str) -> String {
    prompt.chars().take(50).collect()
}

/// Check the advice cache; unchanged stats build an identical prompt,
/// so a hit means the model does not need to be called again.
pub fn get_cached(state: &AppState, model: &str, prompt: &str) -> Option<String> {
    let key = cache_key(model, prompt);
    let cache = state.advice_cache.read();

    if let Some(cached) = cache.peek(&key) {
        tracing::debug!(
            model = model,
            prompt_preview = %prompt_preview(prompt),
            "Advice cache hit"
        );
        state.metrics.record_cache_hit();
        return Some(cached.text.clone());
    }

    tracing::debug!(
        model = model,
        prompt_preview = %prompt_preview(prompt),
        "Advice cache miss"
    );
    state.metrics.record_cache_miss();
    None
}

/// Store an advice response in the cache
pub fn cache_advice(state: &AppState, model: &str, prompt: &str, text: &str) {
    let key = cache_key(model, prompt);
    let cached = CachedAdvice {
        text: text.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    };
    let mut cache = state.advice_cache.write();
    cache.put(key, cached);
}
