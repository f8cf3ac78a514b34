use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::ConvertError;

/// Square resolutions embedded in every generated icon, largest first.
pub const ICO_SIZES: [u32; 6] = [256, 128, 64, 48, 32, 16];

/// Convert a raster image into a multi-resolution Windows ICO file.
///
/// The source image is resampled to each size in [`ICO_SIZES`] and the
/// results are bundled into a single icon container at `target`, overwriting
/// any existing file. A missing source is a typed outcome
/// ([`ConvertError::SourceNotFound`]); nothing is read or written in that
/// case.
pub fn convert_to_ico(source: &Path, target: &Path) -> Result<(), ConvertError> {
    if !source.exists() {
        return Err(ConvertError::SourceNotFound {
            path: source.display().to_string(),
        });
    }

    let img = image::open(source).map_err(|e| ConvertError::DecodeFailed {
        path: source.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);

    for size in ICO_SIZES {
        let resized = img.resize_exact(size, size, image::imageops::FilterType::Lanczos3);
        let rgba = resized.to_rgba8();
        let icon_image = ico::IconImage::from_rgba_data(size, size, rgba.into_raw());
        let entry = ico::IconDirEntry::encode(&icon_image).map_err(|e| {
            ConvertError::EncodeFailed {
                size,
                reason: e.to_string(),
            }
        })?;
        icon_dir.add_entry(entry);
    }

    let file = File::create(target).map_err(|e| ConvertError::WriteFailed {
        path: target.display().to_string(),
        reason: e.to_string(),
    })?;
    icon_dir
        .write(BufWriter::new(file))
        .map_err(|e| ConvertError::WriteFailed {
            path: target.display().to_string(),
            reason: e.to_string(),
        })?;

    Ok(())
}
