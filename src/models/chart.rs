//! Chart projection
//!
//! Reshapes a [`SeriesResponse`] into the labels/datasets structure a line
//! charting library consumes, and into a Chart.js configuration document.

use serde::Serialize;
use std::fmt;

use super::series::SeriesResponse;

/// An RGBA colour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f32,
}

impl PaletteColor {
    const fn rgba(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// CSS `rgba(...)` notation
    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

/// Dataset colours, assigned by budget position modulo the palette length
pub const PALETTE: [PaletteColor; 9] = [
    PaletteColor::rgba(255, 99, 132, 0.2),
    PaletteColor::rgba(54, 162, 235, 0.2),
    PaletteColor::rgba(255, 206, 86, 0.2),
    PaletteColor::rgba(75, 192, 192, 0.2),
    PaletteColor::rgba(153, 102, 255, 0.2),
    PaletteColor::rgba(255, 159, 64, 0.2),
    PaletteColor::rgba(255, 102, 178, 0.2),
    PaletteColor::rgba(102, 255, 102, 0.2),
    PaletteColor::rgba(102, 102, 255, 0.2),
];

/// Colour of the dataset at `index`
pub fn palette_color(index: usize) -> PaletteColor {
    PALETTE[index % PALETTE.len()]
}

/// One plotted line
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Budget name
    pub label: String,
    /// Balances, aligned with [`ChartSpec::labels`]
    pub data: Vec<f64>,
    /// Fill colour
    pub color: PaletteColor,
}

/// Everything needed to draw the balance history chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// X axis labels (the response's days, unchanged)
    pub labels: Vec<String>,
    /// One dataset per budget, in response order
    pub datasets: Vec<Dataset>,
    /// The Y axis always starts at zero
    pub y_axis_begins_at_zero: bool,
}

/// Project a response onto a chart
pub fn project_to_chart(response: &SeriesResponse) -> ChartSpec {
    let datasets = response
        .budgets
        .iter()
        .enumerate()
        .map(|(i, budget)| Dataset {
            label: budget.name.clone(),
            data: budget.data.clone(),
            color: palette_color(i),
        })
        .collect();

    ChartSpec {
        labels: response.days.clone(),
        datasets,
        y_axis_begins_at_zero: true,
    }
}

impl ChartSpec {
    /// Smallest and largest Y values to plot
    ///
    /// Zero is always inside the range so the axis can start at it.
    pub fn y_bounds(&self) -> (f64, f64) {
        self.datasets
            .iter()
            .flat_map(|d| d.data.iter().copied())
            .filter(|v| v.is_finite())
            .fold((0.0, 0.0), |(lo, hi), v| (f64::min(lo, v), f64::max(hi, v)))
    }

    /// Chart.js configuration for a line chart
    pub fn to_chartjs(&self) -> ChartJsConfig {
        ChartJsConfig {
            chart_type: "line",
            data: ChartJsData {
                labels: self.labels.clone(),
                datasets: self
                    .datasets
                    .iter()
                    .map(|d| ChartJsDataset {
                        label: d.label.clone(),
                        data: d.data.clone(),
                        background_color: vec![d.color.css()],
                        border_width: 1,
                    })
                    .collect(),
            },
            options: ChartJsOptions {
                maintain_aspect_ratio: false,
                responsive: true,
                scales: ChartJsScales {
                    y_axes: vec![ChartJsAxis {
                        ticks: ChartJsTicks {
                            begin_at_zero: self.y_axis_begins_at_zero,
                        },
                    }],
                },
            },
        }
    }
}

/// Chart.js `new Chart(ctx, config)` argument
#[derive(Debug, Clone, Serialize)]
pub struct ChartJsConfig {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: ChartJsData,
    pub options: ChartJsOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartJsData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartJsDataset>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
    pub border_width: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsOptions {
    pub maintain_aspect_ratio: bool,
    pub responsive: bool,
    pub scales: ChartJsScales,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsScales {
    pub y_axes: Vec<ChartJsAxis>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartJsAxis {
    pub ticks: ChartJsTicks,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsTicks {
    pub begin_at_zero: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::series::BudgetSeries;

    fn response_with(count: usize) -> SeriesResponse {
        SeriesResponse::new(
            vec!["01/01".into(), "01/08".into()],
            (0..count)
                .map(|i| BudgetSeries::new(format!("Budget {}", i), vec![i as f64, 2.0 * i as f64]))
                .collect(),
        )
    }

    #[test]
    fn test_labels_are_days() {
        for count in [0, 1, 4] {
            let response = response_with(count);
            let chart = project_to_chart(&response);
            assert_eq!(chart.labels, response.days);
        }
    }

    #[test]
    fn test_palette_cycles_by_index() {
        let chart = project_to_chart(&response_with(20));

        assert_eq!(chart.datasets.len(), 20);
        for (i, dataset) in chart.datasets.iter().enumerate() {
            assert_eq!(dataset.color, PALETTE[i % PALETTE.len()]);
        }
        assert_eq!(chart.datasets[9].color, chart.datasets[0].color);
        assert_ne!(chart.datasets[1].color, chart.datasets[0].color);
    }

    #[test]
    fn test_palette_colors_are_distinct() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in PALETTE.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_dataset_order_and_data_preserved() {
        let response = SeriesResponse::new(
            vec!["d1".into()],
            vec![
                BudgetSeries::new("Zeta", vec![1.0]),
                BudgetSeries::new("Alpha", vec![2.0]),
                BudgetSeries::new("Zeta", vec![3.0]),
            ],
        );
        let chart = project_to_chart(&response);

        let labels: Vec<_> = chart.datasets.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["Zeta", "Alpha", "Zeta"]);
        assert_eq!(chart.datasets[2].data, vec![3.0]);
        assert!(chart.y_axis_begins_at_zero);
    }

    #[test]
    fn test_y_bounds_include_zero() {
        let response = SeriesResponse::new(
            vec!["d1".into(), "d2".into()],
            vec![BudgetSeries::new("Rent", vec![40.0, 90.0])],
        );
        assert_eq!(project_to_chart(&response).y_bounds(), (0.0, 90.0));

        let negative = SeriesResponse::new(
            vec!["d1".into()],
            vec![BudgetSeries::new("Card", vec![-15.0])],
        );
        assert_eq!(project_to_chart(&negative).y_bounds(), (-15.0, 0.0));
    }

    #[test]
    fn test_chartjs_config_shape() {
        let chart = project_to_chart(&response_with(2));
        let json = serde_json::to_value(chart.to_chartjs()).unwrap();

        assert_eq!(json["type"], "line");
        assert_eq!(json["data"]["labels"][1], "01/08");
        assert_eq!(json["data"]["datasets"][1]["label"], "Budget 1");
        assert_eq!(
            json["data"]["datasets"][0]["backgroundColor"][0],
            "rgba(255, 99, 132, 0.2)"
        );
        assert_eq!(json["data"]["datasets"][0]["borderWidth"], 1);
        assert_eq!(json["options"]["maintainAspectRatio"], false);
        assert_eq!(
            json["options"]["scales"]["yAxes"][0]["ticks"]["beginAtZero"],
            true
        );
    }
}
