use crate::domain::model::MuhuratQuery;
use crate::domain::ports::FormSource;

/// Snapshot of the form. Empty fields come back as empty strings.
pub fn collect_query<F: FormSource + ?Sized>(form: &F) -> MuhuratQuery {
    MuhuratQuery {
        start_date: form.start_date(),
        end_date: form.end_date(),
        request_type: form.request_type(),
    }
}

/// Form backed by fixed values, filled from CLI flags or a config file.
#[derive(Debug, Clone, Default)]
pub struct StaticForm {
    pub start_date: String,
    pub end_date: String,
    pub request_type: String,
}

impl StaticForm {
    pub fn new(
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        request_type: impl Into<String>,
    ) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            request_type: request_type.into(),
        }
    }
}

impl FormSource for StaticForm {
    fn start_date(&self) -> String {
        self.start_date.clone()
    }

    fn end_date(&self) -> String {
        self.end_date.clone()
    }

    fn request_type(&self) -> String {
        self.request_type.clone()
    }
}
