//! Terminal report rendering.
//!
//! The report is a one-shot sequence of cards written to stdout: data source,
//! engine telemetry, data health, and the variable explorer. Styling goes
//! through crossterm so the output degrades gracefully when piped.

use std::path::Path;

use crossterm::style::Stylize;

use netra_core::{Frame, Value};
use netra_diagnostics::{Alert, AlertLevel};
use netra_profile::{ColumnProfile, HistogramBin, Profile, TopEntry};

const SPARK_GLYPHS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const TOP_VALUE_DISPLAY_WIDTH: usize = 12;

fn card_title(icon: &str, title: &str) {
    println!();
    println!("{} {}", icon.cyan().bold(), title.cyan().bold());
}

/// Card shown when a pipeline stage fails. The process exits non-zero after
/// this.
pub fn fatal_error(title: &str, message: &str, hint: &str) {
    println!();
    println!("{} {}", "✖".red().bold(), title.red().bold());
    println!("  {message}");
    if !hint.is_empty() {
        println!("  {} {}", "└─".dim(), hint.to_string().dim());
    }
    println!();
}

/// Connection summary: where the data came from and what it looks like.
pub fn data_source_card(path: &Path, format_label: &str, size: u64, frame: &Frame, latency: f64) {
    card_title("⛁", "Data Source");
    println!(
        "  {} Connected to data source: {}",
        "✔".green(),
        path.display().to_string().bold()
    );
    println!("  {} Latency: {:.2}s", "└─".dim(), latency);
    println!("  {} Format:  {}", "└─".dim(), format_label);
    println!("  {} Size:    {}", "└─".dim(), format_bytes(size));
    println!(
        "  {} Schema:  {} Columns ({})",
        "└─".dim(),
        frame.column_count(),
        frame.dtype_summary()
    );
}

/// Engine timings and resource usage for the run.
pub fn telemetry_card(engine_time: f64, throughput_gb_s: Option<f64>, resident_mb: Option<f64>) {
    card_title("⚙", "Engine Telemetry");
    println!("  Engine Time:     {}", format!("{engine_time:.2}s").bold());
    match throughput_gb_s {
        Some(rate) => println!("  Data Throughput: {}", format!("{rate:.2} GB/s").bold()),
        None => println!("  Data Throughput: {}", "-".dim()),
    }
    match resident_mb {
        Some(mb) => println!("  Resident Memory: {}", format!("{mb:.1} MB").bold()),
        None => println!("  Resident Memory: {}", "-".dim()),
    }
}

/// Alert summary, most severe first.
pub fn health_card(alerts: &[Alert], row_count: u64) {
    card_title("✚", "Data Health");

    let critical = alerts.iter().filter(|a| a.level == AlertLevel::Critical).count();
    let warning = alerts.iter().filter(|a| a.level == AlertLevel::Warning).count();
    let info = alerts.iter().filter(|a| a.level == AlertLevel::Info).count();

    println!(
        "  Rows Profiled: {} | Issues found: {} critical, {} warning, {} info",
        with_thousands(row_count).bold(),
        critical,
        warning,
        info
    );

    if alerts.is_empty() {
        println!("  {} No issues detected.", "✔".green());
        return;
    }

    let mut sorted: Vec<&Alert> = alerts.iter().collect();
    sorted.sort_by_key(|alert| alert.level);

    for alert in sorted {
        let badge = match alert.level {
            AlertLevel::Critical => "[ CRITICAL ]".red().bold(),
            AlertLevel::Warning => "[ WARNING  ]".yellow(),
            AlertLevel::Info => "[   INFO   ]".dark_grey(),
        };
        println!("  {badge} {}", alert.column.as_str().bold());
        println!("  {} {}", "└─".dim(), alert.message);
    }
}

/// Per-column tables, numeric variables first.
pub fn variable_explorer(profile: &Profile) {
    card_title("⊞", "Variable Explorer");

    let mut numeric: Vec<&ColumnProfile> = profile.columns.iter().filter(|c| c.is_numeric()).collect();
    let mut other: Vec<&ColumnProfile> = profile.columns.iter().filter(|c| !c.is_numeric()).collect();
    numeric.sort_by(|a, b| a.name.cmp(&b.name));
    other.sort_by(|a, b| a.name.cmp(&b.name));

    if !numeric.is_empty() {
        println!("  {}", "#/± Numeric Variables".bold());
        let rows: Vec<Vec<String>> = numeric
            .iter()
            .map(|column| {
                let stats = column.numeric().cloned().unwrap_or_default();
                vec![
                    column.name.clone(),
                    missing_pct(column.null_count, profile.row_count),
                    with_thousands(column.n_unique),
                    format_value(stats.min.as_ref()),
                    format_float(stats.mean),
                    format_value(stats.max.as_ref()),
                    stats.histogram.as_deref().map(sparkline).unwrap_or_default(),
                ]
            })
            .collect();
        print_table(
            &["Column", "Missing", "Distinct", "Min", "Mean", "Max", "Distribution"],
            &rows,
        );
    }

    if !other.is_empty() {
        println!("  {}", "A/B Categorical Variables".bold());
        let rows: Vec<Vec<String>> = other
            .iter()
            .map(|column| {
                vec![
                    column.name.clone(),
                    missing_pct(column.null_count, profile.row_count),
                    with_thousands(column.n_unique),
                    length_summary(column),
                    top_values_summary(&column.top_k, profile.row_count),
                ]
            })
            .collect();
        print_table(
            &["Column", "Missing", "Distinct", "Lengths (Min/Avg/Max)", "Top Values"],
            &rows,
        );
    }
}

fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i]))
        .collect();
    println!("  {}", header_line.join("  ").dim());

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| pad(cell, widths[i]))
            .collect();
        // First cell is the column name.
        let (name, rest) = cells.split_first().expect("non-empty row");
        println!("  {}  {}", name.clone().cyan(), rest.join("  "));
    }
    println!();
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut out = text.to_string();
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    out
}

/// Unicode bar chart of histogram counts, one glyph per bin.
pub fn sparkline(bins: &[HistogramBin]) -> String {
    let max = bins.iter().map(|bin| bin.count).max().unwrap_or(0);
    if max == 0 {
        return String::new();
    }
    bins.iter()
        .map(|bin| {
            let idx = ((bin.count as f64 / max as f64) * 8.0).round() as usize;
            SPARK_GLYPHS[idx.min(8)]
        })
        .collect()
}

fn missing_pct(null_count: u64, row_count: u64) -> String {
    if row_count == 0 {
        return "-".to_string();
    }
    let pct = null_count as f64 / row_count as f64 * 100.0;
    if pct == 0.0 {
        "0%".to_string()
    } else {
        format!("{pct:.1}%")
    }
}

fn format_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::Float(v)) => format!("{v:.2}"),
        Some(other) => other.to_string(),
    }
}

fn format_float(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}

fn length_summary(column: &ColumnProfile) -> String {
    match column.text() {
        Some(stats) => match (stats.min_length, stats.mean_length, stats.max_length) {
            (Some(min), Some(mean), Some(max)) => format!("{min} / {mean:.1} / {max}"),
            _ => "-".to_string(),
        },
        None => "-".to_string(),
    }
}

/// Compact summary of the most frequent values, e.g. `NL (55%), DE (20%)`.
pub fn top_values_summary(top_k: &[TopEntry], row_count: u64) -> String {
    if row_count == 0 {
        return "-".to_string();
    }
    let parts: Vec<String> = top_k
        .iter()
        .filter(|entry| !entry.value.is_null())
        .take(3)
        .map(|entry| {
            let pct = entry.count as f64 / row_count as f64 * 100.0;
            let shown = if pct < 1.0 {
                "<1%".to_string()
            } else {
                format!("{pct:.0}%")
            };
            format!("{} ({shown})", truncate_value(&entry.value.to_string()))
        })
        .collect();
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(", ")
    }
}

fn truncate_value(text: &str) -> String {
    if text.chars().count() > TOP_VALUE_DISPLAY_WIDTH {
        let head: String = text.chars().take(TOP_VALUE_DISPLAY_WIDTH - 3).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// Human-readable byte size, e.g. `1.21 MB`.
pub fn format_bytes(size: u64) -> String {
    const UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];
    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}

fn with_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_scale_through_units() {
        assert_eq!(format_bytes(512), "512.00 B");
        assert_eq!(format_bytes(2048), "2.00 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.00 GB");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(with_thousands(0), "0");
        assert_eq!(with_thousands(999), "999");
        assert_eq!(with_thousands(1_000), "1,000");
        assert_eq!(with_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn sparkline_scales_to_the_largest_bin() {
        let bins: Vec<HistogramBin> = [0u64, 4, 8]
            .iter()
            .map(|&count| HistogramBin {
                breakpoint: count as f64,
                category: String::new(),
                count,
            })
            .collect();
        assert_eq!(sparkline(&bins), " ▄█");
    }

    #[test]
    fn sparkline_of_empty_bins_is_blank() {
        let bins = vec![HistogramBin {
            breakpoint: 1.0,
            category: String::new(),
            count: 0,
        }];
        assert_eq!(sparkline(&bins), "");
    }

    #[test]
    fn top_values_render_share_and_truncate() {
        let entries = vec![
            TopEntry {
                value: Value::Str("a-very-long-category-name".to_string()),
                count: 55,
            },
            TopEntry {
                value: Value::Str("DE".to_string()),
                count: 20,
            },
            TopEntry { value: Value::Null, count: 25 },
        ];
        let summary = top_values_summary(&entries, 100);
        assert_eq!(summary, "a-very-lo... (55%), DE (20%)");
    }

    #[test]
    fn rare_top_values_show_a_floor() {
        let entries = vec![TopEntry {
            value: Value::Str("rare".to_string()),
            count: 1,
        }];
        assert_eq!(top_values_summary(&entries, 1000), "rare (<1%)");
    }

    #[test]
    fn missing_pct_formats() {
        assert_eq!(missing_pct(0, 100), "0%");
        assert_eq!(missing_pct(25, 200), "12.5%");
        assert_eq!(missing_pct(0, 0), "-");
    }
}
