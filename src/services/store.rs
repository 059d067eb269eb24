use crate::error::Result;
use crate::types::ScrapeOutput;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Paths written by [`OutputStore::save_output`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFiles {
    pub tables: PathBuf,
    pub info_box: PathBuf,
}

/// Writes pretty JSON files into one output directory.
pub struct OutputStore {
    root: PathBuf,
}

impl OutputStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<stem>.json`, with path separators in `stem` flattened.
    pub fn path_for(&self, stem: &str) -> PathBuf {
        let safe: String = stem
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        self.root.join(format!("{safe}.json"))
    }

    /// Serialize `value` as UTF-8 JSON with 2-space indentation.
    pub fn save<T: Serialize + ?Sized>(&self, stem: &str, value: &T) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)?;
        let path = self.path_for(stem);
        let mut json = serde_json::to_string_pretty(value)?;
        json.push('\n');
        fs::write(&path, json)?;
        Ok(path)
    }

    pub fn load<T: DeserializeOwned>(&self, stem: &str) -> Result<T> {
        let file = fs::File::open(self.path_for(stem))?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }

    /// Write `<page>.json` (tables) and `<page>_info_box.json` (infobox).
    pub fn save_output(&self, page_id: &str, output: &ScrapeOutput) -> Result<SavedFiles> {
        let tables = self.save(page_id, &output.tables)?;
        let info_box = self.save(&info_box_stem(page_id), &output.info_box)?;
        Ok(SavedFiles { tables, info_box })
    }

    pub fn load_output(&self, page_id: &str) -> Result<ScrapeOutput> {
        Ok(ScrapeOutput {
            tables: self.load(page_id)?,
            info_box: self.load(&info_box_stem(page_id))?,
        })
    }
}

fn info_box_stem(page_id: &str) -> String {
    format!("{page_id}_info_box")
}
