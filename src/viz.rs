use crate::emotion::EmotionResult;
use crate::metrics;

const LABEL_WIDTH: usize = 10;
const VALUE_WIDTH: usize = 28;
const BAR_WIDTH: usize = 20;

pub fn bar(value_0_1: f64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let clamped = metrics::clamp01(value_0_1);
    if clamped <= 0.0 {
        return String::new();
    }
    let filled = (clamped * width as f64).round() as usize;
    "#".repeat(filled.min(width))
}

pub fn result_table(result: &EmotionResult) -> Vec<String> {
    let border = format!(
        "+{}+{}+",
        "-".repeat(LABEL_WIDTH + 2),
        "-".repeat(VALUE_WIDTH + 2)
    );

    let intensity = metrics::round2(result.intensity);
    let bar = bar(intensity, BAR_WIDTH);
    let intensity_cell = if bar.is_empty() {
        format!("{:.2}", intensity)
    } else {
        format!("{:.2}  {}", intensity, bar)
    };

    vec![
        border.clone(),
        format_row("Emotion", result.emotion.as_str()),
        format_row("Intensity", &intensity_cell),
        format_row("Energy", result.energy),
        border,
    ]
}

fn format_row(label: &str, value: &str) -> String {
    format!(
        "| {:<label$} | {:<value$} |",
        label,
        value,
        label = LABEL_WIDTH,
        value = VALUE_WIDTH
    )
}
