use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::error::ArcmarkResult;
use crate::icns::build_icon_family;
use crate::logo::compose_logo;
use crate::png::encode_png;

pub const MARK_PNG_NAME: &str = "arcade-mark.png";
pub const MARK_ICNS_NAME: &str = "arcade-mark.icns";

/// Edge length of the standalone mark PNG written next to the icon family.
pub const STANDALONE_MARK_SIZE: u32 = 512;

/// Paths of the artifacts produced by [`write_assets`].
#[derive(Clone, Debug)]
pub struct AssetPaths {
    pub mark_png: PathBuf,
    pub mark_icns: PathBuf,
}

/// Build both icon artifacts and write them under `<project_root>/assets/`.
///
/// Both byte streams are produced fully in memory before anything touches
/// disk, so a failed build never leaves a partial artifact behind.
pub fn write_assets(project_root: &Path) -> ArcmarkResult<AssetPaths> {
    let mark_png = encode_png(&compose_logo(STANDALONE_MARK_SIZE)?)?;
    let family = build_icon_family()?;

    let assets_dir = project_root.join("assets");
    std::fs::create_dir_all(&assets_dir)
        .with_context(|| format!("create assets dir '{}'", assets_dir.display()))?;

    let png_path = assets_dir.join(MARK_PNG_NAME);
    std::fs::write(&png_path, &mark_png)
        .with_context(|| format!("write '{}'", png_path.display()))?;
    tracing::info!(path = %png_path.display(), bytes = mark_png.len(), "wrote standalone mark");

    let icns_path = assets_dir.join(MARK_ICNS_NAME);
    std::fs::write(&icns_path, &family)
        .with_context(|| format!("write '{}'", icns_path.display()))?;
    tracing::info!(path = %icns_path.display(), bytes = family.len(), "wrote icon family");

    Ok(AssetPaths {
        mark_png: png_path,
        mark_icns: icns_path,
    })
}
