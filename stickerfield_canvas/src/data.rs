// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sticker lists and cluster snapshots as the backend and the static export
//! produce them.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use stickerfield_sim::StickerSource;

use crate::error::LoadError;

/// One extracted sticker.
///
/// Only `path` matters to the canvas; the bounding box and the segmentation
/// score are carried along untouched for the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StickerRecord {
    /// Image locator.
    pub path: String,
    /// Bounding box in the source image, `[x, y, width, height]`.
    #[serde(rename = "box", default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<[f64; 4]>,
    /// Segmentation confidence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl StickerRecord {
    /// A record with a path and nothing else.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            bbox: None,
            score: None,
        }
    }
}

impl StickerSource for StickerRecord {
    fn sticker_path(&self) -> &str {
        &self.path
    }
}

/// A cluster of visually similar stickers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterGroup {
    /// Cluster label.
    pub id: i64,
    /// Members, in the order the clustering reported them.
    pub sticker_paths: Vec<String>,
    /// Number of members.
    #[serde(default)]
    pub count: usize,
}

/// Position of one sticker in the reduced embedding space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingPoint {
    /// Image locator.
    pub path: String,
    /// First coordinate.
    pub x: f64,
    /// Second coordinate.
    pub y: f64,
    /// Third coordinate, when the reduction was three-dimensional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Cluster label; noise points carry `-1`.
    pub cluster_id: i64,
}

/// Result of a clustering run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterSnapshot {
    /// Clusters, largest first.
    pub groups: Vec<ClusterGroup>,
    /// Stickers no cluster claimed.
    pub ungrouped: Vec<String>,
    /// Total members over all groups.
    pub total_grouped: usize,
    /// Length of `ungrouped`.
    pub total_ungrouped: usize,
    /// Embedding coordinates, when the run exported them.
    pub embedding_map: Vec<EmbeddingPoint>,
}

impl ClusterSnapshot {
    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let snapshot: Self = serde_json::from_str(json)?;
        let paths = snapshot
            .groups
            .iter()
            .flat_map(|g| g.sticker_paths.iter())
            .chain(snapshot.ungrouped.iter());
        for (index, path) in paths.enumerate() {
            if path.is_empty() {
                return Err(LoadError::InvalidSticker {
                    index,
                    reason: "empty path",
                });
            }
        }
        tracing::debug!(
            groups = snapshot.groups.len(),
            ungrouped = snapshot.ungrouped.len(),
            "loaded cluster snapshot"
        );
        Ok(snapshot)
    }

    /// Members of the group labelled `id`, or an empty list if there is none.
    #[must_use]
    pub fn group_stickers(&self, id: i64) -> Vec<StickerRecord> {
        self.groups
            .iter()
            .find(|g| g.id == id)
            .map(|g| records(&g.sticker_paths))
            .unwrap_or_default()
    }

    /// Stickers outside every group.
    #[must_use]
    pub fn ungrouped_stickers(&self) -> Vec<StickerRecord> {
        records(&self.ungrouped)
    }

    /// Every sticker once: groups in order, then the ungrouped ones.
    ///
    /// A path listed more than once keeps its first position.
    #[must_use]
    pub fn all_stickers(&self) -> Vec<StickerRecord> {
        let mut seen = HashSet::new();
        self.groups
            .iter()
            .flat_map(|g| g.sticker_paths.iter())
            .chain(self.ungrouped.iter())
            .filter(|path| seen.insert(path.as_str()))
            .map(StickerRecord::new)
            .collect()
    }
}

fn records(paths: &[String]) -> Vec<StickerRecord> {
    paths.iter().map(StickerRecord::new).collect()
}

/// Parses a JSON array of sticker records, rejecting empty paths.
pub fn parse_sticker_list(json: &str) -> Result<Vec<StickerRecord>, LoadError> {
    let stickers: Vec<StickerRecord> = serde_json::from_str(json)?;
    if let Some(index) = stickers.iter().position(|s| s.path.is_empty()) {
        return Err(LoadError::InvalidSticker {
            index,
            reason: "empty path",
        });
    }
    Ok(stickers)
}

#[cfg(test)]
mod tests {
    use super::{ClusterSnapshot, StickerRecord, parse_sticker_list};
    use crate::error::LoadError;

    const SNAPSHOT: &str = r#"{
        "groups": [
            { "id": 0, "sticker_paths": ["/s/a.png", "/s/b.png"], "count": 2 },
            { "id": 3, "sticker_paths": ["/s/c.png", "/s/a.png"], "count": 2 }
        ],
        "ungrouped": ["/s/d.png", "/s/b.png"],
        "total_grouped": 4,
        "total_ungrouped": 2,
        "embedding_map": [
            { "path": "/s/a.png", "x": 0.5, "y": -1.0, "z": 2.0, "cluster_id": 0 },
            { "path": "/s/d.png", "x": 1.5, "y": 0.0, "cluster_id": -1 }
        ]
    }"#;

    fn paths(records: &[StickerRecord]) -> Vec<&str> {
        records.iter().map(|r| r.path.as_str()).collect()
    }

    #[test]
    fn snapshot_groups_and_ungrouped() {
        let snapshot = ClusterSnapshot::from_json(SNAPSHOT).unwrap();
        assert_eq!(paths(&snapshot.group_stickers(3)), ["/s/c.png", "/s/a.png"]);
        assert!(snapshot.group_stickers(42).is_empty());
        assert_eq!(paths(&snapshot.ungrouped_stickers()), ["/s/d.png", "/s/b.png"]);
        assert_eq!(snapshot.embedding_map[1].z, None);
    }

    #[test]
    fn all_stickers_keeps_first_occurrence() {
        let snapshot = ClusterSnapshot::from_json(SNAPSHOT).unwrap();
        assert_eq!(
            paths(&snapshot.all_stickers()),
            ["/s/a.png", "/s/b.png", "/s/c.png", "/s/d.png"]
        );
    }

    #[test]
    fn empty_snapshot_is_valid() {
        let snapshot = ClusterSnapshot::from_json("{}").unwrap();
        assert!(snapshot.all_stickers().is_empty());
    }

    #[test]
    fn snapshot_with_empty_path_is_rejected() {
        let err = ClusterSnapshot::from_json(r#"{ "ungrouped": ["/s/a.png", ""] }"#).unwrap_err();
        assert!(matches!(err, LoadError::InvalidSticker { index: 1, .. }));
    }

    #[test]
    fn sticker_list_passes_box_and_score_through() {
        let list = parse_sticker_list(
            r#"[{ "path": "/s/a.png", "box": [120, 80, 30, 40], "score": 0.93 }, { "path": "/s/b.png" }]"#,
        )
        .unwrap();
        // Origin then extent: a 30x40 box at (120, 80).
        assert_eq!(list[0].bbox, Some([120.0, 80.0, 30.0, 40.0]));
        assert_eq!(list[0].score, Some(0.93));
        assert_eq!(list[1], StickerRecord::new("/s/b.png"));

        let json = serde_json::to_string(&list[1]).unwrap();
        assert_eq!(json, r#"{"path":"/s/b.png"}"#);
    }

    #[test]
    fn sticker_list_errors() {
        let err = parse_sticker_list(r#"[{ "path": "/s/a.png" }, { "path": "" }]"#).unwrap_err();
        assert!(matches!(err, LoadError::InvalidSticker { index: 1, .. }));
        assert_eq!(err.to_string(), "sticker 1 is invalid: empty path");

        let err = parse_sticker_list("[{").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }
}
