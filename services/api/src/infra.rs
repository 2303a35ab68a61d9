use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use woning_ai::config::DashboardConfig;
use woning_ai::workflows::dashboard::{
    InMemorySnapshot, JsonFileSnapshot, Snapshot, SnapshotError, SnapshotSource, SortOption,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Snapshot source chosen from configuration: a JSON file when a path is
/// configured, otherwise an empty in-memory snapshot.
#[derive(Debug, Clone)]
pub(crate) enum ConfiguredSnapshot {
    File(JsonFileSnapshot),
    Memory(InMemorySnapshot),
}

impl ConfiguredSnapshot {
    pub(crate) fn from_config(config: &DashboardConfig) -> Self {
        match &config.snapshot_path {
            Some(path) => Self::File(JsonFileSnapshot::new(path.clone())),
            None => Self::Memory(InMemorySnapshot::new(Snapshot::default())),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Self::File(source) => source.path().display().to_string(),
            Self::Memory(_) => "in-memory (empty)".to_string(),
        }
    }
}

impl SnapshotSource for ConfiguredSnapshot {
    fn snapshot(&self) -> Result<Snapshot, SnapshotError> {
        match self {
            Self::File(source) => source.snapshot(),
            Self::Memory(source) => source.snapshot(),
        }
    }
}

pub(crate) fn parse_sort(raw: &str) -> Result<SortOption, String> {
    SortOption::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = SortOption::ordered().iter().map(|option| option.key()).collect();
        format!("unknown sort '{raw}' (expected one of: {})", known.join(", "))
    })
}
