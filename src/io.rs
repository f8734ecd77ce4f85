use chrono::{DateTime, Local};
use serde::Serialize;

use crate::config::PickOptions;
use crate::pick::{Outcome, ScoredPalette};

#[derive(Debug, Serialize)]
pub struct PaletteReportEntry {
    pub colors_hex: Vec<String>,
    pub colors_rgb: Vec<(u8, u8, u8)>,
    pub colors_lab: Vec<(f64, f64, f64)>,
    pub mean_pairwise_delta_e: f64,
    pub min_pairwise_delta_e: f64,
    pub draw: usize,
}

impl From<&ScoredPalette> for PaletteReportEntry {
    fn from(p: &ScoredPalette) -> Self {
        Self {
            colors_hex: p.hex_codes(),
            colors_rgb: p
                .colours
                .iter()
                .map(|c| {
                    let rgb = c.rgb();
                    (rgb.red, rgb.green, rgb.blue)
                })
                .collect(),
            colors_lab: p
                .colours
                .iter()
                .map(|c| {
                    let lab = c.lab();
                    (lab.l, lab.a, lab.b)
                })
                .collect(),
            mean_pairwise_delta_e: p.mpd,
            min_pairwise_delta_e: p.min_delta_e,
            draw: p.draw,
        }
    }
}

/// JSON description of one run.
#[derive(Debug, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Local>,
    pub seed: u64,
    pub candidates: usize,
    pub subset_size: usize,
    pub options: PickOptions,
    pub warning: Option<String>,
    pub palettes: Vec<PaletteReportEntry>,
}

impl Report {
    pub fn new(outcome: &Outcome, options: &PickOptions) -> Self {
        Self {
            generated_at: Local::now(),
            seed: outcome.seed,
            candidates: outcome.candidates,
            subset_size: outcome.subset_size,
            options: options.clone(),
            warning: outcome.warning.as_ref().map(ToString::to_string),
            palettes: outcome.palettes.iter().map(PaletteReportEntry::from).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Split a colour list into codes: one or more per line, separated by
/// whitespace or commas. Blank lines and `//` comments are skipped.
pub fn read_colour_list(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split("//").next().unwrap_or_default())
        .flat_map(|line| line.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

/// Plain-text rendering: one palette per line, codes separated by spaces.
pub fn format_plain(outcome: &Outcome) -> String {
    outcome
        .picked
        .palettes()
        .iter()
        .map(|p| p.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pick::pick_palette;
    use pretty_assertions::assert_eq;

    #[test]
    fn colour_list_parsing() {
        let text = "// brand colours\n#FF0000, #00FF00\n\n  #0000FF   // primary blue\n#FFFFFF\n";
        assert_eq!(
            read_colour_list(text),
            vec!["#FF0000", "#00FF00", "#0000FF", "#FFFFFF"]
        );
        assert!(read_colour_list("\n  \n// nothing\n").is_empty());
    }

    #[test]
    fn report_carries_scores_and_warning() {
        let options = PickOptions::default()
            .with_subset_size(3)
            .with_n_return(2)
            .with_seed(4);
        let outcome = pick_palette(&["#FF0000", "#00FF00", "#0000FF"], &options).unwrap();
        let report = Report::new(&outcome, &options);
        assert_eq!(report.palettes.len(), 1);
        assert_eq!(report.seed, 4);
        assert!(report.warning.is_some());

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["candidates"], 3);
        assert_eq!(json["subset_size"], 3);
        assert_eq!(json["options"]["n_return"], 2);
        assert_eq!(
            json["palettes"][0]["colors_hex"],
            serde_json::json!(["#FF0000", "#00FF00", "#0000FF"])
        );
        assert_eq!(json["palettes"][0]["colors_rgb"][0], serde_json::json!([255, 0, 0]));
    }

    #[test]
    fn plain_output_has_one_line_per_palette() {
        let options = PickOptions::default()
            .with_subset_size(2)
            .with_n_return(2)
            .with_seed(10);
        let outcome = pick_palette(&["#FF0000", "#00FF00", "#0000FF"], &options).unwrap();
        let text = format_plain(&outcome);
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().all(|l| l.split(' ').count() == 2));
    }
}
