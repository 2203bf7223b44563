// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Feeding cluster snapshots into a canvas.

use kurbo::Size;
use stickerfield_canvas::{ClusterSnapshot, ManualFrameClock, PhysicsCanvas};

const SNAPSHOT: &str = r#"{
    "groups": [
        { "id": 1, "sticker_paths": ["/s/cat.png", "/s/dog.png", "/s/cow.png"], "count": 3 },
        { "id": 2, "sticker_paths": ["/s/cat.png", "/s/owl.png"], "count": 2 }
    ],
    "ungrouped": ["/s/rock.png"],
    "total_grouped": 5,
    "total_ungrouped": 1
}"#;

#[test]
fn switching_groups_keeps_nodes_with_same_path_and_index() {
    let snapshot = ClusterSnapshot::from_json(SNAPSHOT).unwrap();
    let mut canvas =
        PhysicsCanvas::with_seed(Size::new(800.0, 600.0), ManualFrameClock::new(), 21);

    let report = canvas
        .set_stickers(&snapshot.group_stickers(1), 100.0)
        .unwrap();
    assert_eq!(report.added, 3);
    let cat = canvas.store().nodes()[0].clone();

    // "/s/cat.png" is first in both groups, so its node survives untouched.
    let report = canvas
        .set_stickers(&snapshot.group_stickers(2), 100.0)
        .unwrap();
    assert_eq!((report.added, report.removed, report.retained), (1, 2, 1));
    assert_eq!(canvas.store().nodes()[0], cat);
    assert_eq!(canvas.store().nodes()[1].path(), "/s/owl.png");
}

#[test]
fn all_stickers_fill_the_canvas_once() {
    let snapshot = ClusterSnapshot::from_json(SNAPSHOT).unwrap();
    let mut canvas =
        PhysicsCanvas::with_seed(Size::new(800.0, 600.0), ManualFrameClock::new(), 21);
    canvas.set_stickers(&snapshot.all_stickers(), 80.0);
    let paths: Vec<&str> = canvas.store().nodes().iter().map(|n| n.path()).collect();
    assert_eq!(
        paths,
        ["/s/cat.png", "/s/dog.png", "/s/cow.png", "/s/owl.png", "/s/rock.png"]
    );
    assert!(canvas.store().nodes().iter().all(|n| n.size() == 80.0));
}
