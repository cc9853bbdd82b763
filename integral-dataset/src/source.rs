//! Where dataset texts come from.

use integral_core::{CompleteSelection, DatasetVariant, IntegralError, Quadrant, Result};
use integral_telemetry::{Instrument, dataset_load_span, debug};
use async_trait::async_trait;
use rust_embed::RustEmbed;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// File name of the dataset for a quadrant/variant pair, e.g. `ul_neg.csv`.
pub fn resource_name(quadrant: Quadrant, variant: DatasetVariant) -> String {
    format!("{}_{}.csv", quadrant.id(), variant.id())
}

/// Supplies the raw text of one dataset.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;

    async fn load(&self, quadrant: Quadrant, variant: DatasetVariant) -> Result<String>;
}

#[derive(RustEmbed)]
#[folder = "data"]
struct CannedData;

/// The twelve canned datasets compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDatasets;

impl EmbeddedDatasets {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DatasetSource for EmbeddedDatasets {
    fn describe(&self) -> String {
        "embedded".to_string()
    }

    async fn load(&self, quadrant: Quadrant, variant: DatasetVariant) -> Result<String> {
        let name = resource_name(quadrant, variant);
        let file = CannedData::get(&name).ok_or_else(|| IntegralError::DatasetLoad {
            path: name.clone(),
            reason: "no such embedded dataset".to_string(),
        })?;
        String::from_utf8(file.data.into_owned())
            .map_err(|e| IntegralError::DatasetLoad { path: name, reason: e.to_string() })
    }
}

/// Datasets read from a directory using the same file names as the embedded set.
#[derive(Debug, Clone)]
pub struct DirectoryDatasets {
    root: PathBuf,
}

impl DirectoryDatasets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, quadrant: Quadrant, variant: DatasetVariant) -> PathBuf {
        self.root.join(resource_name(quadrant, variant))
    }
}

#[async_trait]
impl DatasetSource for DirectoryDatasets {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    async fn load(&self, quadrant: Quadrant, variant: DatasetVariant) -> Result<String> {
        let path = self.path_for(quadrant, variant);
        tokio::fs::read_to_string(&path).await.map_err(|e| IntegralError::DatasetLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// In-memory datasets, keyed by quadrant and variant.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatasets {
    entries: HashMap<(Quadrant, DatasetVariant), String>,
}

impl MemoryDatasets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dataset(
        mut self,
        quadrant: Quadrant,
        variant: DatasetVariant,
        text: impl Into<String>,
    ) -> Self {
        self.entries.insert((quadrant, variant), text.into());
        self
    }
}

#[async_trait]
impl DatasetSource for MemoryDatasets {
    fn describe(&self) -> String {
        format!("memory ({} datasets)", self.entries.len())
    }

    async fn load(&self, quadrant: Quadrant, variant: DatasetVariant) -> Result<String> {
        self.entries.get(&(quadrant, variant)).cloned().ok_or_else(|| {
            IntegralError::DatasetLoad {
                path: resource_name(quadrant, variant),
                reason: "not present in memory source".to_string(),
            }
        })
    }
}

/// Loads the dataset of every quadrant in the selection. The first failure
/// wins and nothing partial is returned.
pub async fn load_selection(
    source: &dyn DatasetSource,
    selection: &CompleteSelection,
) -> Result<BTreeMap<Quadrant, String>> {
    let loads = selection.iter().map(|(quadrant, variant)| {
        let resource = resource_name(quadrant, variant);
        async move {
            let text = source.load(quadrant, variant).await?;
            debug!(bytes = text.len(), "Dataset loaded");
            Ok::<_, IntegralError>((quadrant, text))
        }
        .instrument(dataset_load_span(&resource))
    });

    let loaded = futures::future::try_join_all(loads).await?;
    Ok(loaded.into_iter().collect())
}
