use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::{Error, Result};
use crate::models::{FrequencyEntry, Outcome, SkipReason};

const BAR_COLOR: RGBColor = RGBColor(0x4A, 0x90, 0xE2);
const FONT: &str = "sans-serif";

/// 12x6 inches at 300 DPI.
pub const DEFAULT_SIZE: (u32, u32) = (3600, 1800);

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub count: u32,
    /// Row on the category axis; row 0 is the bottom of the chart.
    pub row: u32,
}

/// Geometry of the chart, independent of any drawing backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub title: String,
    pub bars: Vec<Bar>,
    pub x_max: u32,
}

impl ChartLayout {
    /// Lays out the first `top_n` entries so the first one is drawn at the top.
    pub fn from_entries(entries: &[FrequencyEntry], top_n: usize) -> Option<Self> {
        let entries = &entries[..entries.len().min(top_n)];
        if entries.is_empty() {
            return None;
        }

        let rows = entries.len() as u32;
        let bars: Vec<Bar> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| Bar {
                label: entry.label.clone(),
                count: entry.count as u32,
                row: rows - 1 - i as u32,
            })
            .collect();

        let max_count = bars.iter().map(|b| b.count).max().unwrap_or(0);
        // Headroom for the count printed past the end of the longest bar.
        let x_max = max_count + (max_count / 8).max(1);

        Some(Self {
            title: format!("Top {} Most Demanded Skills in Tech Jobs", bars.len()),
            bars,
            x_max,
        })
    }

    pub fn rows(&self) -> u32 {
        self.bars.len() as u32
    }

    /// Category axis extent. Each row spans two units so its centre lands on
    /// an integer tick; the bars fill the range exactly.
    pub fn y_range(&self) -> Range<u32> {
        0..self.rows() * 2
    }

    pub fn label_for_row(&self, row: u32) -> &str {
        self.bars
            .iter()
            .find(|b| b.row == row)
            .map(|b| b.label.as_str())
            .unwrap_or_default()
    }

    /// Axis label for a tick on the category axis: row centres get the skill
    /// name, row boundaries stay blank.
    pub fn label_at(&self, tick: u32) -> &str {
        if tick % 2 == 1 {
            self.label_for_row(tick / 2)
        } else {
            ""
        }
    }
}

impl Bar {
    pub fn bottom(&self) -> u32 {
        self.row * 2
    }

    pub fn center(&self) -> u32 {
        self.row * 2 + 1
    }

    pub fn top(&self) -> u32 {
        self.row * 2 + 2
    }
}

/// Horizontal bar chart of skill demand, rendered to a PNG file.
pub struct SkillChart {
    size: (u32, u32),
    top_n: usize,
}

impl SkillChart {
    pub fn new(top_n: usize) -> Self {
        Self {
            size: DEFAULT_SIZE,
            top_n,
        }
    }

    pub fn render(&self, entries: &[FrequencyEntry], path: impl AsRef<Path>) -> Result<Outcome<PathBuf>> {
        let Some(layout) = ChartLayout::from_entries(entries, self.top_n) else {
            return Ok(Outcome::Skipped(SkipReason::NoSkillData));
        };

        let path = path.as_ref();
        self.draw(&layout, path)?;
        tracing::info!("Visualization saved as {}", path.display());
        Ok(Outcome::Completed(path.to_path_buf()))
    }

    fn draw(&self, layout: &ChartLayout, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let y_range = layout.y_range();
        let mut chart = ChartBuilder::on(&root)
            .caption(&layout.title, (FONT, 56).into_font().style(FontStyle::Bold))
            .margin(60)
            .x_label_area_size(120)
            .y_label_area_size(420)
            .build_cartesian_2d(0u32..layout.x_max, y_range.clone())
            .map_err(chart_error)?;

        let label_for = |tick: &u32| layout.label_at(*tick).to_string();

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(y_range.len() + 1)
            .y_label_formatter(&label_for)
            .x_desc("Number of Job Postings")
            .axis_desc_style((FONT, 40).into_font().style(FontStyle::Bold))
            .label_style((FONT, 34))
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(layout.bars.iter().map(|bar| {
                let mut rect = Rectangle::new(
                    [(0, bar.bottom()), (bar.count, bar.top())],
                    BAR_COLOR.filled(),
                );
                rect.set_margin(12, 12, 0, 0);
                rect
            }))
            .map_err(chart_error)?;

        let annotation = TextStyle::from((FONT, 32).into_font().style(FontStyle::Bold))
            .pos(Pos::new(HPos::Left, VPos::Center));
        chart
            .draw_series(layout.bars.iter().map(|bar| {
                Text::new(
                    format!(" {}", bar.count),
                    (bar.count, bar.center()),
                    annotation.clone(),
                )
            }))
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
        Ok(())
    }
}

fn chart_error<E: std::fmt::Display>(e: E) -> Error {
    Error::Chart(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, usize)]) -> Vec<FrequencyEntry> {
        pairs
            .iter()
            .map(|(label, count)| FrequencyEntry::new(*label, *count, 20))
            .collect()
    }

    #[test]
    fn test_layout_puts_first_entry_on_top() {
        let layout =
            ChartLayout::from_entries(&entries(&[("Python", 9), ("AWS", 4), ("Docker", 2)]), 10)
                .unwrap();

        assert_eq!(layout.rows(), 3);
        assert_eq!(layout.label_for_row(2), "Python");
        assert_eq!(layout.label_for_row(0), "Docker");
        assert_eq!(layout.bars[1].count, 4);
        assert!(layout.x_max > 9);
        assert_eq!(layout.title, "Top 3 Most Demanded Skills in Tech Jobs");
    }

    #[test]
    fn test_bars_fill_the_category_axis() {
        for n in 1..=4 {
            let pairs: Vec<(&str, usize)> =
                ["Python", "AWS", "Docker", "SQL"][..n].iter().map(|s| (*s, 3)).collect();
            let layout = ChartLayout::from_entries(&entries(&pairs), 10).unwrap();
            let y_range = layout.y_range();

            let lowest = layout.bars.iter().map(Bar::bottom).min().unwrap();
            let highest = layout.bars.iter().map(Bar::top).max().unwrap();
            assert_eq!(lowest, y_range.start);
            assert_eq!(highest, y_range.end);

            let occupied: u32 = layout.bars.iter().map(|b| b.top() - b.bottom()).sum();
            assert_eq!(occupied as usize, y_range.len());
        }
    }

    #[test]
    fn test_axis_labels_sit_on_row_centres() {
        let layout =
            ChartLayout::from_entries(&entries(&[("Python", 9), ("AWS", 4)]), 10).unwrap();

        assert_eq!(layout.y_range(), 0..4);
        assert_eq!(layout.label_at(3), "Python");
        assert_eq!(layout.label_at(1), "AWS");
        for tick in [0, 2, 4] {
            assert_eq!(layout.label_at(tick), "");
        }
        assert_eq!(layout.bars[0].center(), 3);
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skills.png");

        let outcome = SkillChart::new(10)
            .render(&entries(&[("Python", 9), ("AWS", 4)]), &path)
            .unwrap();

        assert_eq!(outcome, Outcome::Completed(path.clone()));
        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_layout_respects_top_n() {
        let layout = ChartLayout::from_entries(
            &entries(&[("A", 5), ("B", 4), ("C", 3), ("D", 2)]),
            2,
        )
        .unwrap();
        let labels: Vec<_> = layout.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B"]);
    }

    #[test]
    fn test_no_skill_data_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");

        let outcome = SkillChart::new(10).render(&[], &path).unwrap();
        assert_eq!(outcome, Outcome::Skipped(SkipReason::NoSkillData));
        assert!(!path.exists());
        assert!(ChartLayout::from_entries(&entries(&[("A", 1)]), 0).is_none());
    }
}
