//! PNG chart rendering via plotters.
//!
//! Every function here draws exactly the data it is handed; no aggregation
//! or filtering happens at render time. Output files are overwritten when
//! they already exist.

use std::path::Path;

use chrono::{Days, NaiveDate};
use coinpulse_analysis::{
    BucketVolatility, IntensityBand, PolarityIntensityTable, SentimentClass,
    SentimentDistribution,
};
use plotters::prelude::*;

use crate::config::RenderConfig;
use crate::error::{OutputError, Result};

// Palette of the reference charts: skyblue, lightgreen, gold, salmon.
const BAR_COLORS: [RGBColor; 4] = [
    RGBColor(135, 206, 235),
    RGBColor(144, 238, 144),
    RGBColor(255, 215, 0),
    RGBColor(250, 128, 114),
];

const NEGATIVE_COLOR: RGBColor = RGBColor(214, 39, 40);
const NEUTRAL_COLOR: RGBColor = RGBColor(127, 127, 127);
const POSITIVE_COLOR: RGBColor = RGBColor(44, 160, 44);

const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);

const fn class_color(class: SentimentClass) -> RGBColor {
    match class {
        SentimentClass::Negative => NEGATIVE_COLOR,
        SentimentClass::Neutral => NEUTRAL_COLOR,
        SentimentClass::Positive => POSITIVE_COLOR,
    }
}

fn draw_error<E: std::fmt::Display>(err: E) -> OutputError {
    OutputError::Chart(err.to_string())
}

/// Bar chart of mean volatility per intensity quartile, the core output of
/// the correlation pipeline. One bar per present bucket; collapsed buckets
/// simply do not appear.
pub fn volatility_bars(
    buckets: &[BucketVolatility],
    config: &RenderConfig,
    path: &Path,
) -> Result<()> {
    if buckets.is_empty() {
        return Err(OutputError::EmptyChart {
            chart: "volatility_bars".to_string(),
        });
    }

    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let max = buckets
        .iter()
        .map(|bucket| bucket.mean_volatility)
        .fold(0.0f64, f64::max);
    let y_max = if max > 0.0 { max * 1.1 } else { 1.0 };
    let labels: Vec<String> = buckets.iter().map(|b| b.bucket.to_string()).collect();
    let bars = buckets.len() as i32;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Bitcoin Volatility by Sentiment Intensity Quartile",
            (config.font_family.as_str(), config.title_font_size),
        )
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((0..bars).into_segmented(), 0f64..y_max)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Sentiment intensity quartile")
        .y_desc("Mean volatility (|log return|)")
        .x_label_formatter(&|position| match position {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                labels.get(*i as usize).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .label_style((config.font_family.as_str(), config.label_font_size))
        .draw()
        .map_err(draw_error)?;

    chart
        .draw_series(buckets.iter().enumerate().map(|(i, bucket)| {
            let left = SegmentValue::Exact(i as i32);
            let right = SegmentValue::Exact(i as i32 + 1);
            Rectangle::new(
                [(left, 0.0), (right, bucket.mean_volatility)],
                BAR_COLORS[i % BAR_COLORS.len()].filled(),
            )
        }))
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    Ok(())
}

/// Pie chart of the sign-based sentiment class distribution.
pub fn sentiment_pie(
    distribution: &SentimentDistribution,
    config: &RenderConfig,
    path: &Path,
) -> Result<()> {
    let mut sizes = Vec::new();
    let mut colors = Vec::new();
    let mut labels = Vec::new();
    for class in SentimentClass::ALL {
        let count = distribution.count(class);
        if count > 0 {
            sizes.push(count as f64);
            colors.push(class_color(class));
            labels.push(class.to_string());
        }
    }
    if sizes.is_empty() {
        return Err(OutputError::EmptyChart {
            chart: "sentiment_pie".to_string(),
        });
    }

    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;
    let title_style = TextStyle::from(
        (config.font_family.as_str(), config.title_font_size).into_font(),
    )
    .color(&BLACK);
    let root = root
        .titled("Sentiment Distribution of Bitcoin News", title_style)
        .map_err(draw_error)?;

    let (pixel_width, pixel_height) = root.dim_in_pixel();
    let center = (pixel_width as i32 / 2, pixel_height as i32 / 2);
    let radius = f64::from(pixel_width.min(pixel_height)) * 0.35;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(140.0);
    pie.label_style(
        (config.font_family.as_str(), config.label_font_size)
            .into_font()
            .color(&BLACK),
    );
    pie.percentages(
        (config.font_family.as_str(), config.label_font_size)
            .into_font()
            .color(&BLACK),
    );
    root.draw(&pie).map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    Ok(())
}

/// Line chart of a date-indexed value series (sentiment trend, price path).
pub fn time_series(
    points: &[(NaiveDate, f64)],
    title: &str,
    y_desc: &str,
    config: &RenderConfig,
    path: &Path,
) -> Result<()> {
    let Some((first, last)) = points.first().zip(points.last()) else {
        return Err(OutputError::EmptyChart {
            chart: title.to_string(),
        });
    };
    let x_end = if last.0 > first.0 {
        last.0
    } else {
        first.0 + Days::new(1)
    };

    let y_min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let y_max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    let padding = ((y_max - y_min).abs() * 0.05).max(1e-6);
    let y_range = (y_min - padding)..(y_max + padding);

    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (config.font_family.as_str(), config.title_font_size))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(first.0..x_end, y_range)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc(y_desc)
        .label_style((config.font_family.as_str(), config.label_font_size))
        .draw()
        .map_err(draw_error)?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), &LINE_COLOR))
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    Ok(())
}

/// Horizontal bar chart of word frequencies, highest count on top.
pub fn word_bars(
    words: &[(String, usize)],
    title: &str,
    config: &RenderConfig,
    path: &Path,
) -> Result<()> {
    if words.is_empty() {
        return Err(OutputError::EmptyChart {
            chart: title.to_string(),
        });
    }

    let rows = words.len() as i32;
    let max_count = words.iter().map(|w| w.1).max().unwrap_or(1) as f64;
    let x_max = max_count * 1.05;

    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (config.font_family.as_str(), config.title_font_size))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(140)
        .build_cartesian_2d(0f64..x_max, (0..rows).into_segmented())
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Frequency")
        .y_label_formatter(&|position| match position {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                let slot = (rows - 1 - *i) as usize;
                words.get(slot).map(|w| w.0.clone()).unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .y_labels(words.len())
        .label_style((config.font_family.as_str(), config.label_font_size))
        .draw()
        .map_err(draw_error)?;

    chart
        .draw_series(words.iter().enumerate().map(|(i, (_, count))| {
            // Row 0 (highest count) renders at the top.
            let slot = rows - 1 - i as i32;
            let bottom = SegmentValue::Exact(slot);
            let top = SegmentValue::Exact(slot + 1);
            Rectangle::new(
                [(0.0, bottom), (*count as f64, top)],
                BAR_COLORS[0].filled(),
            )
        }))
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    Ok(())
}

/// Stacked percentage bars of the polarity-by-intensity cross-tabulation.
pub fn polarity_stack(
    table: &PolarityIntensityTable,
    config: &RenderConfig,
    path: &Path,
) -> Result<()> {
    if table.total() == 0 {
        return Err(OutputError::EmptyChart {
            chart: "polarity_stack".to_string(),
        });
    }

    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let band_labels: Vec<String> = IntensityBand::ALL
        .iter()
        .map(|band| band.to_string())
        .collect();

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Headline Polarity by Intensity Band",
            (config.font_family.as_str(), config.title_font_size),
        )
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((0..3i32).into_segmented(), 0f64..100f64)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Sentiment intensity band")
        .y_desc("Share of headlines (%)")
        .x_label_formatter(&|position| match position {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                band_labels.get(*i as usize).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .label_style((config.font_family.as_str(), config.label_font_size))
        .draw()
        .map_err(draw_error)?;

    let mut base = [0.0f64; 3];
    for class in SentimentClass::ALL {
        let color = class_color(class);
        let mut segments = Vec::with_capacity(3);
        for (i, band) in IntensityBand::ALL.iter().enumerate() {
            let share = table.share_pct(*band, class);
            let left = SegmentValue::Exact(i as i32);
            let right = SegmentValue::Exact(i as i32 + 1);
            segments.push(Rectangle::new(
                [(left, base[i]), (right, base[i] + share)],
                color.filled(),
            ));
            base[i] += share;
        }
        chart
            .draw_series(segments)
            .map_err(draw_error)?
            .label(class.to_string())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .label_font((config.font_family.as_str(), config.label_font_size))
        .draw()
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    Ok(())
}
