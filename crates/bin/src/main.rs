//! Coinpulse binary.
//!
//! One-shot batch run: load the two fixed inputs, render the descriptive
//! chart set, run the sentiment/volatility correlation pipeline and print
//! the aggregate table. Input and output paths are compile-time constants;
//! point them elsewhere by editing the constants below.

use std::path::Path;
use std::process;

use chrono::NaiveDate;
use coinpulse_analysis::{
    DEAD_ZONE, PolarityIntensityTable, SentimentClass, SentimentDistribution, classify,
    monthly_mean, sentiment_volatility_pipeline, word_frequencies,
};
use coinpulse_data::{PriceRecord, SentimentRecord, load_headlines, load_prices, load_sentiment};
use coinpulse_output::{
    RenderConfig, polarity_stack, sentiment_pie, time_series, volatility_bars, volatility_table,
    word_bars, write_summary_csv, write_summary_json,
};

const SENTIMENT_CSV: &str = "data/bitcoin_sentiments_21_24.csv";
const PRICE_CSV: &str = "data/BTC_All_graph_coinmarketcap.csv";
const IMAGES_DIR: &str = "images";

/// Optional per-source headline exports; missing files are skipped.
const HEADLINE_SOURCES: [(&str, &str); 3] = [
    ("data/cnbc_headlines.csv", "CNBC"),
    ("data/guardian_headlines.csv", "Guardian"),
    ("data/reuters_headlines.csv", "Reuters"),
];

const TOP_WORDS: usize = 20;
const TOP_NEGATIVE_WORDS: usize = 50;
const TOP_HEADLINE_WORDS: usize = 50;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(IMAGES_DIR)?;
    let images = Path::new(IMAGES_DIR);
    let config = RenderConfig::default();

    let sentiments = load_sentiment(SENTIMENT_CSV)?;
    let prices = load_prices(PRICE_CSV)?;
    println!(
        "Loaded {} sentiment records and {} price rows",
        sentiments.len(),
        prices.len()
    );

    render_distribution(&sentiments, &config, images)?;
    render_trend(&sentiments, &config, images)?;
    render_word_charts(&sentiments, &config, images)?;
    render_price(&prices, &config, images)?;
    render_headline_charts(&config, images)?;

    let table = PolarityIntensityTable::from_records(&sentiments, DEAD_ZONE);
    polarity_stack(
        &table,
        &config,
        &images.join("polarity_intensity_distribution.png"),
    )?;

    // The core pipeline: weekly resample, date join, log returns, quartile
    // aggregation.
    let buckets = sentiment_volatility_pipeline(&prices, &sentiments)?;
    volatility_bars(
        &buckets,
        &config,
        &images.join("sentiment_volatility_analysis.png"),
    )?;
    write_summary_json(&buckets, &images.join("sentiment_volatility_summary.json"))?;
    write_summary_csv(&buckets, &images.join("sentiment_volatility_summary.csv"))?;

    println!("{}", volatility_table(&buckets));
    println!("Charts written to {IMAGES_DIR}/");
    Ok(())
}

fn render_distribution(
    sentiments: &[SentimentRecord],
    config: &RenderConfig,
    images: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let distribution = SentimentDistribution::from_records(sentiments);
    println!("\nSentiment distribution:");
    for class in SentimentClass::ALL {
        println!(
            "  {class:<10} {:>6} ({:.1}%)",
            distribution.count(class),
            distribution.percentage(class)
        );
    }
    sentiment_pie(
        &distribution,
        config,
        &images.join("sentiment_distribution.png"),
    )?;
    Ok(())
}

fn render_trend(
    sentiments: &[SentimentRecord],
    config: &RenderConfig,
    images: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let monthly = monthly_mean(sentiments);
    let trend: Vec<(NaiveDate, f64)> = monthly
        .iter()
        .map(|month| (month.month, month.mean_score))
        .collect();
    time_series(
        &trend,
        "Monthly Average Sentiment of Bitcoin News",
        "Average sentiment",
        config,
        &images.join("sentiment_over_time.png"),
    )?;
    Ok(())
}

fn render_word_charts(
    sentiments: &[SentimentRecord],
    config: &RenderConfig,
    images: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let descriptions: Vec<&str> = sentiments
        .iter()
        .filter_map(|record| record.description.as_deref())
        .collect();
    let common = word_frequencies(descriptions.iter().copied(), TOP_WORDS);
    if !common.is_empty() {
        println!("\nMost common words:");
        for (word, count) in &common {
            println!("  {word:<20} {count}");
        }
        word_bars(
            &common,
            "Top 20 Most Common Words in Bitcoin News",
            config,
            &images.join("most_common_words.png"),
        )?;
    }

    let negative: Vec<&str> = sentiments
        .iter()
        .filter(|record| classify(record.score) == SentimentClass::Negative)
        .filter_map(|record| record.description.as_deref())
        .collect();
    let common_negative = word_frequencies(negative.iter().copied(), TOP_NEGATIVE_WORDS);
    if !common_negative.is_empty() {
        word_bars(
            &common_negative,
            "Top 50 Most Common Words in Negative Bitcoin News",
            config,
            &images.join("most_common_negative_words.png"),
        )?;
    }
    Ok(())
}

fn render_price(
    prices: &[PriceRecord],
    config: &RenderConfig,
    images: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    // The analysis window of the reference run.
    let start = NaiveDate::from_ymd_opt(2021, 1, 1).ok_or("invalid window start")?;
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).ok_or("invalid window end")?;
    let path: Vec<(NaiveDate, f64)> = prices
        .iter()
        .filter(|row| row.date >= start && row.date <= end)
        .map(|row| (row.date, row.price))
        .collect();
    time_series(
        &path,
        "Bitcoin Price Over Time",
        "Price (USD)",
        config,
        &images.join("bitcoin_price_over_time.png"),
    )?;
    Ok(())
}

fn render_headline_charts(
    config: &RenderConfig,
    images: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    for (file, source) in HEADLINE_SOURCES {
        if !Path::new(file).exists() {
            continue;
        }
        let headlines = load_headlines(file)?;
        let common = word_frequencies(
            headlines.iter().map(String::as_str),
            TOP_HEADLINE_WORDS,
        );
        if common.is_empty() {
            continue;
        }
        println!("\nMost common words in {source} headlines:");
        for (word, count) in common.iter().take(10) {
            println!("  {word:<20} {count}");
        }
        word_bars(
            &common,
            &format!("Top 50 Most Common Words in {source} Bitcoin News"),
            config,
            &images.join(format!("most_common_{}_words.png", source.to_lowercase())),
        )?;
    }
    Ok(())
}
