//! Resolves command-line paths into scenario sources
//!
//! A path may be a scenario file, a directory (walked recursively, keeping
//! files with a known extension), a glob pattern, or `-` for standard input.

use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use miette::Result;
use walkdir::WalkDir;

use crate::constants::scenario::{STDIN_NAME, STDIN_PATH};
use crate::error::DeadlockError;
use crate::progress::ProgressReporter;

/// Where one scenario's raw text comes from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScenarioSource {
    Stdin,
    File(PathBuf),
}

impl ScenarioSource {
    /// A single explicit path; `-` stands for standard input
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == STDIN_PATH {
            ScenarioSource::Stdin
        } else {
            ScenarioSource::File(path.to_path_buf())
        }
    }

    /// Name used in reports and diagnostics
    pub fn name(&self) -> String {
        match self {
            ScenarioSource::Stdin => STDIN_NAME.to_string(),
            ScenarioSource::File(path) => path.display().to_string(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            ScenarioSource::Stdin => None,
            ScenarioSource::File(path) => Some(path),
        }
    }

    pub fn read(&self) -> Result<String, DeadlockError> {
        match self {
            ScenarioSource::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
            ScenarioSource::File(path) => {
                std::fs::read_to_string(path).map_err(|e| DeadlockError::FileReadError {
                    path: path.clone(),
                    source: e,
                })
            }
        }
    }
}

fn is_glob_pattern(path: &str) -> bool {
    path.contains(['*', '?', '['])
}

pub struct ScenarioDiscovery {
    extensions: &'static [&'static str],
}

impl ScenarioDiscovery {
    pub fn new(extensions: &'static [&'static str]) -> Self {
        Self { extensions }
    }

    fn has_scenario_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|known| known.eq_ignore_ascii_case(ext)))
    }

    /// Resolve every path into scenario sources. Order follows the arguments;
    /// entries found under a directory or glob are sorted. A source reached
    /// twice is kept once.
    pub fn discover(
        &self,
        paths: &[PathBuf],
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<Vec<ScenarioSource>> {
        if let Some(p) = progress.as_mut() {
            p.start_discovery();
        }

        let mut seen = HashSet::new();
        let mut sources = Vec::new();

        for path in paths {
            if let Some(p) = progress.as_ref() {
                p.scanning_path(path);
            }

            for source in self.discover_in_path(path)? {
                if seen.insert(source.clone()) {
                    sources.push(source);
                }
            }
        }

        if let Some(p) = progress.as_mut() {
            p.finish_discovery(sources.len());
        }

        Ok(sources)
    }

    fn discover_in_path(&self, path: &Path) -> Result<Vec<ScenarioSource>, DeadlockError> {
        if path.as_os_str() == STDIN_PATH || path.is_file() {
            return Ok(vec![ScenarioSource::from_path(path)]);
        }
        if path.is_dir() {
            let mut files: Vec<PathBuf> = WalkDir::new(path)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .map(|e| e.into_path())
                .filter(|p| self.has_scenario_extension(p))
                .collect();
            files.sort();
            return Ok(files.into_iter().map(ScenarioSource::File).collect());
        }
        let raw = path.to_string_lossy();
        if is_glob_pattern(&raw) {
            let entries = glob::glob(&raw).map_err(|e| DeadlockError::InvalidPattern {
                pattern: raw.to_string(),
                source: e,
            })?;
            let mut files: Vec<PathBuf> = entries
                .filter_map(|e| e.ok())
                .filter(|p| p.is_file())
                .collect();
            files.sort();
            return Ok(files.into_iter().map(ScenarioSource::File).collect());
        }

        Err(DeadlockError::PathNotFound {
            path: path.to_path_buf(),
        })
    }
}
