/// Error returned by [`crate::scheduler::SchedulerContext::create_edf_task`].
///
/// Mirrors the three creation failure kinds of the spec: a malformed
/// `(C, D, T)` triple, a full registry, or an admission-controller
/// rejection. All three are returned, never signaled asynchronously.
#[derive(Debug)]
pub enum AdmissionError {
    InvalidParameters(String),
    RegistryFull { capacity: usize },
    NotSchedulable { test: &'static str, detail: Option<String> },
}

impl std::fmt::Display for AdmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameters(reason) =>
                write!(f, "invalid parameters: {reason}"),
            Self::RegistryFull { capacity } =>
                write!(f, "registry full (capacity {capacity})"),
            Self::NotSchedulable { test, detail: None } =>
                write!(f, "not schedulable ({test})"),
            Self::NotSchedulable { test, detail: Some(detail) } =>
                write!(f, "not schedulable ({test}): {detail}"),
        }
    }
}

impl std::error::Error for AdmissionError {}

impl AdmissionError {
    pub fn invalid_parameters(reason: impl Into<String>) -> Self {
        Self::InvalidParameters(reason.into())
    }

    pub fn not_schedulable(test: &'static str) -> Self {
        Self::NotSchedulable { test, detail: None }
    }

    pub fn not_schedulable_reason(test: &'static str, detail: impl Into<String>) -> Self {
        Self::NotSchedulable { test, detail: Some(detail.into()) }
    }

    /// Checks whether the rejection came from a feasibility test, as
    /// opposed to malformed input or a full registry.
    pub fn is_not_schedulable(&self) -> bool {
        matches!(self, Self::NotSchedulable { .. })
    }
}
