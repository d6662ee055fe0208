use serde::{Serialize, Deserialize};
use std::fmt;

/// Error for the crate's two fallible boundaries: the advice call and
/// the snapshot store. The planner and stats engine never fail, so
/// everything here describes an I/O, serialization, timeout or model
/// failure. The `From` impls below are the normal construction path —
/// boundary code uses `?` and then attaches context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentoriaError {
    pub message: String,
    /// Boundary that produced the error: "io", "json", "advice", "timeout"
    pub stage: String,
    /// Advice model involved, set when the advice boundary fails
    pub model: Option<String>,
    /// Extra detail, typically the file path for store errors
    pub context: Option<String>,
    /// Underlying error library, set by the `From` impls
    pub source: Option<String>,
}

impl MentoriaError {
    pub fn new<S: Into<String>>(message: S, stage: &'static str) -> Self {
        MentoriaError {
            message: message.into(),
            stage: stage.to_string(),
            model: None,
            context: None,
            source: None,
        }
    }

    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_context<S: Into<String>>(mut self, context: S) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for MentoriaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.stage, self.message)?;
        if let Some(ref model) = self.model {
            write!(f, " [model={}]", model)?;
        }
        if let Some(ref context) = self.context {
            write!(f, " [{}]", context)?;
        }
        if let Some(ref source) = self.source {
            write!(f, " [via {}]", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for MentoriaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

/// The advice pipeline accumulates failures as anyhow; the terminal
/// failure crosses the boundary through here (see advice::pipeline).
impl From<anyhow::Error> for MentoriaError {
    fn from(err: anyhow::Error) -> Self {
        MentoriaError::new(err.to_string(), "advice").with_source("anyhow")
    }
}

impl From<std::io::Error> for MentoriaError {
    fn from(err: std::io::Error) -> Self {
        MentoriaError::new(err.to_string(), "io").with_source("std::io")
    }
}

impl From<serde_json::Error> for MentoriaError {
    fn from(err: serde_json::Error) -> Self {
        MentoriaError::new(err.to_string(), "json").with_source("serde_json")
    }
}

impl From<tokio::time::error::Elapsed> for MentoriaError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        MentoriaError::new("Advice call timed out", "timeout").with_source("tokio::time")
    }
}
