use crate::model::CardSheet;
use serde_json::{Value, json};

/// Flatten frames keyed by card key.
/// Shape: `{ frames: { "AS": { frame, column, row, rank, suit }, ... }, meta }`.
/// Close to the TexturePacker-like JSON hash most engine pipelines read.
pub fn to_json_hash(sheet: &CardSheet) -> Value {
    let mut frames = serde_json::Map::new();
    for fr in &sheet.frames {
        let frame = json!({"x": fr.frame.x, "y": fr.frame.y, "w": fr.frame.w, "h": fr.frame.h});
        frames.insert(
            fr.key.clone(),
            json!({
                "frame": frame,
                "column": fr.column,
                "row": fr.row,
                "rank": fr.rank,
                "suit": fr.suit,
            }),
        );
    }
    json!({ "frames": frames, "meta": &sheet.meta })
}
