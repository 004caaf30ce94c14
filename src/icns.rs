use crate::error::{ArcmarkError, ArcmarkResult};
use crate::logo::compose_logo;
use crate::png::encode_png;

/// ICNS file magic, first 4 bytes of the container header.
pub const ICNS_MAGIC: [u8; 4] = *b"icns";

/// PNG-bearing ICNS element types, one per icon family resolution.
///
/// The OSType <-> pixel size pairing is fixed by the format; keeping it as an
/// enum (rather than a positional table) means an entry can never be framed
/// under the wrong tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconType {
    /// 16x16 (`icp4`)
    Icp4,
    /// 32x32 (`icp5`)
    Icp5,
    /// 64x64 (`icp6`)
    Icp6,
    /// 128x128 (`ic07`)
    Ic07,
    /// 256x256 (`ic08`)
    Ic08,
    /// 512x512 (`ic09`)
    Ic09,
    /// 1024x1024 (`ic10`)
    Ic10,
}

impl IconType {
    /// Family members in container order, smallest resolution first.
    pub const ALL: [IconType; 7] = [
        IconType::Icp4,
        IconType::Icp5,
        IconType::Icp6,
        IconType::Ic07,
        IconType::Ic08,
        IconType::Ic09,
        IconType::Ic10,
    ];

    pub const fn os_type(self) -> [u8; 4] {
        match self {
            IconType::Icp4 => *b"icp4",
            IconType::Icp5 => *b"icp5",
            IconType::Icp6 => *b"icp6",
            IconType::Ic07 => *b"ic07",
            IconType::Ic08 => *b"ic08",
            IconType::Ic09 => *b"ic09",
            IconType::Ic10 => *b"ic10",
        }
    }

    pub const fn pixel_size(self) -> u32 {
        match self {
            IconType::Icp4 => 16,
            IconType::Icp5 => 32,
            IconType::Icp6 => 64,
            IconType::Ic07 => 128,
            IconType::Ic08 => 256,
            IconType::Ic09 => 512,
            IconType::Ic10 => 1024,
        }
    }
}

/// One element of an icon family: a type tag plus its encoded PNG.
///
/// The PNG bytes are treated as opaque; the assembler never looks inside.
#[derive(Clone, Debug)]
pub struct IconEntry {
    pub kind: IconType,
    pub png: Vec<u8>,
}

impl IconEntry {
    pub fn new(kind: IconType, png: Vec<u8>) -> Self {
        Self { kind, png }
    }
}

/// Pack entries into a single ICNS byte stream.
///
/// Layout: `icns` + u32 BE total file length, then per entry the 4-byte
/// OSType + u32 BE element length (both lengths include their own 8-byte
/// header) + PNG bytes.
pub fn assemble(entries: &[IconEntry]) -> ArcmarkResult<Vec<u8>> {
    if entries.is_empty() {
        return Err(ArcmarkError::EmptyEntryList);
    }

    // The total fitting u32 guarantees every element length (a strict subset
    // of the total) fits as well.
    let total = container_len(entries.iter().map(|e| e.png.len()))?;
    let mut out = Vec::with_capacity(total as usize);
    out.extend_from_slice(&ICNS_MAGIC);
    out.extend_from_slice(&total.to_be_bytes());
    for entry in entries {
        out.extend_from_slice(&entry.kind.os_type());
        out.extend_from_slice(&((entry.png.len() as u32 + 8).to_be_bytes()));
        out.extend_from_slice(&entry.png);
    }
    Ok(out)
}

/// Header length plus one 8-byte-framed element per payload, checked against
/// the u32 length field.
fn container_len(payload_lens: impl IntoIterator<Item = usize>) -> ArcmarkResult<u32> {
    let mut total: u64 = 8;
    for len in payload_lens {
        total += len as u64 + 8;
    }
    u32::try_from(total).map_err(|_| ArcmarkError::OversizedContainer(total))
}

/// Compose and encode the mark at every family resolution, then assemble.
pub fn build_icon_family() -> ArcmarkResult<Vec<u8>> {
    let mut entries = Vec::with_capacity(IconType::ALL.len());
    for kind in IconType::ALL {
        let canvas = compose_logo(kind.pixel_size())?;
        let png = encode_png(&canvas)?;
        tracing::debug!(
            os_type = %String::from_utf8_lossy(&kind.os_type()),
            size = kind.pixel_size(),
            bytes = png.len(),
            "encoded icon family element"
        );
        entries.push(IconEntry::new(kind, png));
    }
    assemble(&entries)
}
