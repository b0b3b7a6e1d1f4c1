use md_palette::ColorLut;
use serde::Serialize;

/// One row of a dumped lookup table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LutRow {
    pub input: u8,
    pub normal: u8,
    pub fine: u8,
    pub shadow: bool,
    pub highlight: bool,
    pub normal_aligned: bool,
}

/// Serializable view of a [`ColorLut`] for `mdcolors lut`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LutDump {
    pub source: &'static str,
    pub destination: &'static str,
    pub shadow_highlight: bool,
    pub entries: Vec<LutRow>,
}

impl LutDump {
    pub fn from_lut(lut: &ColorLut) -> Self {
        let entries = lut
            .entries()
            .iter()
            .enumerate()
            .map(|(input, e)| LutRow {
                input: input as u8,
                normal: e.normal_value,
                fine: e.fine_value,
                shadow: e.shadow_candidate,
                highlight: e.highlight_candidate,
                normal_aligned: e.normal_aligned,
            })
            .collect();

        Self {
            source: lut.source().key(),
            destination: lut.destination().key(),
            shadow_highlight: lut.shadow_highlight(),
            entries,
        }
    }

    /// Plain-text table, one row per input byte.
    pub fn to_text(&self) -> String {
        let header = format!(
            "# {} -> {} (shadow/highlight {})\nin   normal fine  S H A\n",
            self.source,
            self.destination,
            if self.shadow_highlight { "on" } else { "off" }
        );
        self.entries.iter().fold(header, |mut out, row| {
            out.push_str(&format!(
                "{:02X}   {:02X}     {:02X}    {} {} {}\n",
                row.input,
                row.normal,
                row.fine,
                flag(row.shadow),
                flag(row.highlight),
                flag(row.normal_aligned)
            ));
            out
        })
    }
}

fn flag(set: bool) -> char {
    if set {
        'x'
    } else {
        '.'
    }
}
