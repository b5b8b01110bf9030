use crate::errors::AppResult;
use crate::models::project::{ProjectId, ProjectSummary, StatusFilter};
use crate::store::Store;
use crate::store::layout::LOG_EXT;
use std::fs;
use std::io;
use tracing::{debug, warn};

/// Every project of the data directory, plus the filtered view of it.
#[derive(Debug, Clone, Default)]
pub struct ProjectIndex {
    pub filter: StatusFilter,
    /// All projects, most recently changed first.
    pub all: Vec<ProjectSummary>,
    /// Subsequence of `all` matching `filter`, same order.
    pub filtered: Vec<ProjectSummary>,
}

pub struct IndexLogic;

impl IndexLogic {
    pub fn build(store: &Store, filter: StatusFilter) -> AppResult<ProjectIndex> {
        let entries = match fs::read_dir(&store.layout.data_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(ProjectIndex {
                    filter,
                    ..Default::default()
                });
            }
            Err(e) => return Err(e.into()),
        };

        let mut all = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(LOG_EXT) {
                continue;
            }

            // stray files with unusable names are not projects
            let Some(id) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| ProjectId::parse(s).ok())
            else {
                debug!(path = %path.display(), "ignoring file with invalid project id");
                continue;
            };

            let events = store.log.read_all(&id).unwrap_or_else(|e| {
                warn!(project = %id, error = %e, "unreadable log, listed as created");
                Vec::new()
            });
            all.push(ProjectSummary::from_events(id, &events));
        }

        all.sort_by(|a, b| {
            b.last_timestamp
                .cmp(&a.last_timestamp)
                .then_with(|| a.id.cmp(&b.id))
        });

        let filtered = all
            .iter()
            .filter(|p| filter.matches(p.status))
            .cloned()
            .collect();

        Ok(ProjectIndex {
            filter,
            all,
            filtered,
        })
    }
}
