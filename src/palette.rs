use serde::Serialize;

/// One color family used for a batch: cell fill, border, and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub name: &'static str,
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

const fn swatch(
    name: &'static str,
    background: &'static str,
    border: &'static str,
    text: &'static str,
) -> Swatch {
    Swatch {
        name,
        background,
        border,
        text,
    }
}

pub const DEFAULT_PALETTE: [Swatch; 15] = [
    swatch("red", "#fecaca", "#fca5a5", "#991b1b"),
    swatch("orange", "#fed7aa", "#fdba74", "#9a3412"),
    swatch("amber", "#fde68a", "#fcd34d", "#92400e"),
    swatch("lime", "#d9f99d", "#bef264", "#3f6212"),
    swatch("green", "#bbf7d0", "#86efac", "#166534"),
    swatch("emerald", "#a7f3d0", "#6ee7b7", "#065f46"),
    swatch("teal", "#99f6e4", "#5eead4", "#115e59"),
    swatch("cyan", "#a5f3fc", "#67e8f9", "#155e75"),
    swatch("sky", "#bae6fd", "#7dd3fc", "#075985"),
    swatch("blue", "#bfdbfe", "#93c5fd", "#1e40af"),
    swatch("indigo", "#c7d2fe", "#a5b4fc", "#3730a3"),
    swatch("violet", "#ddd6fe", "#c4b5fd", "#5b21b6"),
    swatch("purple", "#e9d5ff", "#d8b4fe", "#6b21a8"),
    swatch("fuchsia", "#f5d0fe", "#f0abfc", "#86198f"),
    swatch("pink", "#fbcfe8", "#f9a8d4", "#9d174d"),
];

/// Palette slot for `batch`: its position in `batches`, wrapped around the
/// palette length. Batches are compared after trimming.
pub fn color_index(batches: &[String], palette_len: usize, batch: &str) -> Option<usize> {
    if palette_len == 0 {
        return None;
    }
    let batch = batch.trim();
    batches
        .iter()
        .position(|b| b.trim() == batch)
        .map(|i| i % palette_len)
}

pub fn color_for<'p, T>(batches: &[String], palette: &'p [T], batch: &str) -> Option<&'p T> {
    color_index(batches, palette.len(), batch).map(|i| &palette[i])
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendItem {
    pub batch: String,
    pub color: Swatch,
}

/// Legend rows in settings order, blanks skipped.
pub fn legend(batches: &[String], palette: &[Swatch]) -> Vec<LegendItem> {
    batches
        .iter()
        .filter(|b| !b.trim().is_empty())
        .filter_map(|b| {
            color_for(batches, palette, b).map(|color| LegendItem {
                batch: b.trim().to_string(),
                color: *color,
            })
        })
        .collect()
}
