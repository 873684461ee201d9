use crate::core::collector::collect_query;
use crate::core::renderer::{render_result, show_message, COMPUTE_FAILED, RANGE_WARNING};
use crate::domain::model::{GenerationOutcome, MuhuratQuery, Severity};
use crate::domain::ports::{FormSource, MuhuratApi, ResultView};
use crate::utils::error::{MuhuratError, Result};
use chrono::NaiveDate;
use std::sync::atomic::{AtomicU64, Ordering};

/// Drives one request/render cycle per `generate_muhurat` call.
///
/// Calls may overlap. Each request takes a generation number and only the most
/// recent one is allowed to touch the view once its response arrives; older
/// responses are dropped.
pub struct MuhuratController<A: MuhuratApi, V: ResultView> {
    api: A,
    view: V,
    generation: AtomicU64,
}

impl<A: MuhuratApi, V: ResultView> MuhuratController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            generation: AtomicU64::new(0),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub async fn generate_muhurat<F: FormSource + ?Sized>(&self, form: &F) -> GenerationOutcome {
        let query = collect_query(form);

        if let Err(e) = require_date_range(&query) {
            tracing::warn!("Not requesting muhurats: {}", e);
            self.view
                .replace_result(show_message(RANGE_WARNING, &Severity::Warning));
            return GenerationOutcome::Warned;
        }
        log_inverted_range(&query);

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.view.show_loading();
        self.view.replace_result(String::new());

        tracing::debug!(
            generation,
            start_date = %query.start_date,
            end_date = %query.end_date,
            request_type = %query.request_type,
            "Requesting muhurats"
        );
        let result = self.api.fetch(&query).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "Discarding superseded muhurat response");
            return GenerationOutcome::Superseded;
        }

        self.view.hide_loading();

        match result {
            Ok(response) => {
                let windows = response.recommended_muhurats.len();
                tracing::info!(
                    "Rendering {} muhurat windows for '{}'",
                    windows,
                    response.request_type
                );
                self.view.replace_result(render_result(&response));
                GenerationOutcome::Rendered { windows }
            }
            Err(e) => {
                let kind = e.kind();
                tracing::error!(kind = %kind, "Muhurat request failed: {}", e);
                self.view
                    .replace_result(show_message(COMPUTE_FAILED, &Severity::Error));
                GenerationOutcome::Failed(kind)
            }
        }
    }
}

fn require_date_range(query: &MuhuratQuery) -> Result<()> {
    for (field, value) in [
        ("start_date", &query.start_date),
        ("end_date", &query.end_date),
    ] {
        if value.is_empty() {
            return Err(MuhuratError::MissingInput {
                field: field.to_string(),
            });
        }
    }
    Ok(())
}

// Ordering is left to the service; an inverted range is only noted.
fn log_inverted_range(query: &MuhuratQuery) {
    let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
    if let (Some(start), Some(end)) = (parse(&query.start_date), parse(&query.end_date)) {
        if start > end {
            tracing::debug!("Start date {} is after end date {}", start, end);
        }
    }
}
