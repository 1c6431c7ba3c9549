//! I/O helpers for occupancy masks and JSON.
//!
//! - `load_mask_image`: read a PNG/JPEG/etc. and threshold it into a `Mask`.
//! - `save_mask_image`: write a `Mask` as a black/white PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::grid::{GridView, Mask};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image, convert it to 8-bit grayscale and mark every pixel
/// brighter than `threshold` as set.
pub fn load_mask_image(path: &Path, threshold: u8) -> Result<Mask, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    Ok(mask_from_gray(&img, threshold))
}

/// Threshold an in-memory grayscale image into a mask.
pub fn mask_from_gray(img: &GrayImage, threshold: u8) -> Mask {
    Mask::from_fn(img.width() as usize, img.height() as usize, |x, y| {
        img.get_pixel(x as u32, y as u32)[0] > threshold
    })
}

/// Save a mask as a grayscale PNG: set cells white, unset cells black.
pub fn save_mask_image(mask: &Mask, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(mask.width() as u32, mask.height() as u32);
    for (y, row) in mask.rows().enumerate() {
        for (x, &set) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Luma([if set { 255 } else { 0 }]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
