pub mod cache;
pub mod pipeline;

use tokio::time::Duration;

use crate::config::advice::get_advice_config;
use crate::planner::BLOCK_MINUTES;
use crate::state::app::AppState;
use crate::stats::Stats;
use crate::subjects::model::Subject;
use crate::tasks::model::{Task, TaskStatus};

/// Shown whenever the advice call fails; core state is never affected.
pub const FALLBACK_ADVICE: &str =
    "Mantenha o foco! Analisaremos seus dados detalhadamente em breve.";

/// Assemble the coaching prompt from the current stats, subjects and
/// week of tasks.
pub fn build_prompt(stats: &Stats, subjects: &[Subject], tasks: &[Task]) -> String {
    let subject_names = subjects
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let completed = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();

    format!(
        "Aja como um mentor especializado em concursos públicos.\n\
         Analise o desempenho atual do aluno:\n\
         - Percentual de Execução: {:.1}%\n\
         - Aproveitamento (Acerto de Questões): {:.1}%\n\
         - Metas Cumpridas: {:.1}%\n\
         - Tarefas da semana: {} concluídas de {}\n\n\
         Matérias sendo estudadas: {}.\n\n\
         Com base nestes dados e considerando que as tarefas são blocos de {} min, forneça:\n\
         1. Um diagnóstico rápido.\n\
         2. Uma dica prática para aumentar o aproveitamento na matéria com menor performance aparente.\n\
         3. Uma frase de motivação curta.\n\n\
         Responda em Markdown.",
        stats.execution_rate,
        stats.accuracy_rate,
        stats.goal_fulfillment,
        completed,
        tasks.len(),
        subject_names,
        BLOCK_MINUTES,
    )
}

/// Refresh the coaching text after a task-list change.
///
/// Snapshots state, asks the model (one retry, then the static
/// fallback) and applies the result through the request sequence so a
/// slower, older request can never overwrite a newer one. Returns the
/// text that ended up applied, or the current text for a stale request.
pub async fn refresh_advice(state: &AppState) -> String {
    let tasks = state.get_tasks();
    if tasks.is_empty() {
        return state.current_advice();
    }

    let seq = state.begin_advice_request();
    let stats = state.get_stats();
    let subjects = state.get_subjects();
    let prompt = build_prompt(&stats, &subjects, &tasks);
    let config = get_advice_config();

    if let Some(text) = cache::get_cached(state, &config.model, &prompt) {
        state.try_apply_advice(seq, text.clone());
        return text;
    }

    let timeout = Duration::from_secs(config.timeout_secs);
    let start = std::time::Instant::now();

    // One retry before degrading to the fallback text
    let result = match pipeline::call_advice_model(&config.endpoint, &config.model, &prompt, timeout).await {
        Ok(text) => Ok(text),
        Err(first) => {
            tracing::warn!(error = %first, "Advice call failed, retrying once");
            pipeline::call_advice_model(&config.endpoint, &config.model, &prompt, timeout).await
        }
    };

    state
        .metrics
        .record_advice_latency(start.elapsed().as_millis() as u64);

    let text = match result {
        Ok(text) => {
            cache::cache_advice(state, &config.model, &prompt, &text);
            text
        }
        Err(e) => {
            tracing::warn!(error = %e, "Advice unavailable, using fallback text");
            state.metrics.record_advice_fallback();
            FALLBACK_ADVICE.to_string()
        }
    };

    if state.try_apply_advice(seq, text.clone()) {
        text
    } else {
        state.current_advice()
    }
}
