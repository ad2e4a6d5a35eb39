//! Icon set generation.
//!
//! Produces every icon size the site serves from one master image. Runs as a
//! build step; in local builds a failure (missing artwork, unreadable file)
//! is reported but does not abort, while `--strict` turns any failure into a
//! non-zero exit for CI.

use anyhow::{Context, Result, ensure};
use image::DynamicImage;
use image::imageops::FilterType;
use std::path::Path;

/// Output set: file name and square edge length in pixels.
const ICON_SET: &[(&str, u32)] = &[
    ("favicon.ico", 32),
    ("icon-192.png", 192),
    ("icon-512.png", 512),
    ("apple-touch-icon.png", 180),
];

/// Generates all icons from `source` into `out_dir`.
///
/// # Errors
/// In strict mode returns any read, resize, or write failure. Otherwise the
/// failure is printed and the result is `Ok`.
pub fn generate_icons(source: &Path, out_dir: &Path, strict: bool) -> Result<()> {
    match generate(source, out_dir) {
        Ok(count) => {
            println!("🖼️  Generated {count} icons into {}", out_dir.display());
            Ok(())
        }
        Err(error) if strict => Err(error),
        Err(error) => {
            eprintln!("⚠️  Icon generation failed (non-strict, continuing): {error:#}");
            Ok(())
        }
    }
}

fn generate(source: &Path, out_dir: &Path) -> Result<usize> {
    let master = image::open(source)
        .with_context(|| format!("Failed to read source image at {}", source.display()))?;

    ensure!(
        master.width() == master.height(),
        "Source image must be square, got {}x{}",
        master.width(),
        master.height()
    );

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    for (name, size) in ICON_SET {
        let target = out_dir.join(name);
        resize(&master, *size)
            .save(&target)
            .with_context(|| format!("Failed to write {}", target.display()))?;
    }

    Ok(ICON_SET.len())
}

fn resize(master: &DynamicImage, size: u32) -> DynamicImage {
    master.resize_exact(size, size, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    fn write_master(dir: &Path, edge: u32) -> std::path::PathBuf {
        let path = dir.join("icon.png");
        let img = ImageBuffer::from_pixel(edge, edge, Rgba([30u8, 90, 140, 255]));
        img.save(&path).expect("write master image");
        path
    }

    #[test]
    fn generates_the_full_icon_set() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = write_master(dir.path(), 512);
        let out = dir.path().join("public");

        generate_icons(&source, &out, true).expect("generate icons");

        for (name, size) in ICON_SET {
            let icon = image::open(out.join(name)).expect("open generated icon");
            assert_eq!(icon.width(), *size, "{name} width");
            assert_eq!(icon.height(), *size, "{name} height");
        }
    }

    #[test]
    fn strict_mode_propagates_a_missing_source() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = generate_icons(&dir.path().join("missing.png"), dir.path(), true);
        assert!(result.is_err());
    }

    #[test]
    fn non_strict_mode_swallows_the_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = generate_icons(&dir.path().join("missing.png"), dir.path(), false);
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_non_square_artwork() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("wide.png");
        ImageBuffer::from_pixel(512, 256, Rgba([0u8, 0, 0, 255])).save(&path).expect("write");

        let result = generate_icons(&path, dir.path(), true);
        assert!(result.is_err());
    }
}
