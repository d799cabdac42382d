//! Sprite-sheet frame tables.
//!
//! A sheet only stores source rectangles; the image itself stays with
//! whatever renderer blits it.

use std::path::Path;

use serde::Deserialize;

use crate::error::{read_to_string, Error, Result};

/// Source rectangle of one frame in sheet pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    #[serde(rename = "w")]
    pub width: u32,
    #[serde(rename = "h")]
    pub height: u32,
}

impl SourceRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Corner coordinates `(x0, y0, x1, y1)` for a sub-image blit.
    ///
    /// With `flip_x` the horizontal corners are swapped so the frame is drawn
    /// mirrored.
    pub fn corners(&self, flip_x: bool) -> (u32, u32, u32, u32) {
        let (left, right) = (self.x, self.x + self.width);
        let (top, bottom) = (self.y, self.y + self.height);
        if flip_x {
            (right, top, left, bottom)
        } else {
            (left, top, right, bottom)
        }
    }
}

/// Anything that can resolve a sheet frame index to its source rectangle.
pub trait FrameSource {
    fn frame_rect(&self, index: usize) -> Option<SourceRect>;
    fn frame_count(&self) -> usize;
}

impl FrameSource for [SourceRect] {
    fn frame_rect(&self, index: usize) -> Option<SourceRect> {
        self.get(index).copied()
    }

    fn frame_count(&self) -> usize {
        self.len()
    }
}

impl FrameSource for Vec<SourceRect> {
    fn frame_rect(&self, index: usize) -> Option<SourceRect> {
        self.as_slice().frame_rect(index)
    }

    fn frame_count(&self) -> usize {
        self.len()
    }
}

/// A single named frame of a sheet.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetFrame {
    #[serde(default)]
    pub filename: String,
    #[serde(rename = "frame")]
    pub rect: SourceRect,
    #[serde(default)]
    pub rotated: bool,
    #[serde(default)]
    pub trimmed: bool,
    #[serde(default)]
    pub sprite_source_size: Option<SourceRect>,
    #[serde(default)]
    pub source_size: Option<SheetSize>,
    #[serde(default)]
    pub pivot: Option<Pivot>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct SheetSize {
    pub w: u32,
    pub h: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Pivot {
    pub x: f64,
    pub y: f64,
}

/// Ordered table of frames, indexed by position.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SpriteSheet {
    pub frames: Vec<SheetFrame>,
}

impl SpriteSheet {
    /// Slice an image into equally sized frames, row by row.
    ///
    /// Frames start at `(padding_width, padding_height)` and step by frame
    /// size plus padding. A frame is emitted for every start coordinate that
    /// lies inside the image.
    pub fn from_grid(
        image_width: u32,
        image_height: u32,
        frame_width: u32,
        frame_height: u32,
        padding_width: u32,
        padding_height: u32,
    ) -> Result<Self> {
        let step_x = frame_width + padding_width;
        let step_y = frame_height + padding_height;
        if step_x == 0 || step_y == 0 {
            return Err(Error::InvalidGrid {
                frame_width,
                frame_height,
                padding_width,
                padding_height,
            });
        }

        let mut frames = Vec::new();
        for y in (padding_height..image_height).step_by(step_y as usize) {
            for x in (padding_width..image_width).step_by(step_x as usize) {
                frames.push(SheetFrame {
                    filename: format!("frame_{}", frames.len()),
                    rect: SourceRect::new(x, y, frame_width, frame_height),
                    rotated: false,
                    trimmed: false,
                    sprite_source_size: None,
                    source_size: None,
                    pivot: None,
                });
            }
        }
        Ok(Self { frames })
    }

    /// Parse a sheet in the TexturePacker "array" JSON layout.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a sheet description from disk.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let sheet = Self::from_json_str(&read_to_string(path)?)?;
        log::info!("Loaded sprite sheet {} ({} frames)", path.display(), sheet.frames.len());
        Ok(sheet)
    }

    /// Index of the frame with the given filename.
    pub fn frame_named(&self, name: &str) -> Option<usize> {
        self.frames.iter().position(|f| f.filename == name)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl FrameSource for SpriteSheet {
    fn frame_rect(&self, index: usize) -> Option<SourceRect> {
        self.frames.get(index).map(|f| f.rect)
    }

    fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET_JSON: &str = r#"{
        "frames": [
            {
                "filename": "walk_0.png",
                "frame": { "x": 0, "y": 0, "w": 32, "h": 48 },
                "rotated": false,
                "trimmed": true,
                "spriteSourceSize": { "x": 2, "y": 0, "w": 32, "h": 48 },
                "sourceSize": { "w": 36, "h": 48 },
                "pivot": { "x": 0.5, "y": 1.0 }
            },
            {
                "filename": "walk_1.png",
                "frame": { "x": 32, "y": 0, "w": 32, "h": 48 }
            }
        ],
        "meta": { "app": "texture packer" }
    }"#;

    #[test]
    fn grid_emits_row_major_frames() {
        let sheet = SpriteSheet::from_grid(64, 64, 32, 32, 0, 0).unwrap();
        let rects: Vec<_> = sheet.frames.iter().map(|f| f.rect).collect();
        assert_eq!(
            rects,
            vec![
                SourceRect::new(0, 0, 32, 32),
                SourceRect::new(32, 0, 32, 32),
                SourceRect::new(0, 32, 32, 32),
                SourceRect::new(32, 32, 32, 32),
            ]
        );
    }

    #[test]
    fn grid_honours_padding() {
        let sheet = SpriteSheet::from_grid(70, 36, 32, 32, 2, 2).unwrap();
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.frame_rect(0), Some(SourceRect::new(2, 2, 32, 32)));
        assert_eq!(sheet.frame_rect(1), Some(SourceRect::new(36, 2, 32, 32)));
    }

    #[test]
    fn zero_step_grid_is_rejected() {
        assert!(matches!(
            SpriteSheet::from_grid(64, 64, 0, 32, 0, 0),
            Err(Error::InvalidGrid { .. })
        ));
    }

    #[test]
    fn parses_texture_packer_layout() {
        let sheet = SpriteSheet::from_json_str(SHEET_JSON).unwrap();
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.frame_named("walk_1.png"), Some(1));
        assert_eq!(sheet.frame_rect(1), Some(SourceRect::new(32, 0, 32, 48)));
        let first = &sheet.frames[0];
        assert!(first.trimmed);
        assert_eq!(first.source_size, Some(SheetSize { w: 36, h: 48 }));
        assert_eq!(first.pivot, Some(Pivot { x: 0.5, y: 1.0 }));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walk.json");
        std::fs::write(&path, SHEET_JSON).unwrap();
        let sheet = SpriteSheet::from_json_path(&path).unwrap();
        assert_eq!(sheet.frame_count(), 2);
    }

    #[test]
    fn corners_swap_when_flipped() {
        let rect = SourceRect::new(10, 20, 30, 40);
        assert_eq!(rect.corners(false), (10, 20, 40, 60));
        assert_eq!(rect.corners(true), (40, 20, 10, 60));
    }
}
