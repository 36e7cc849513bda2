// ASCII line chart and x-axis label sampling

pub const DEFAULT_HEIGHT: usize = 10;
pub const DEFAULT_CAPTION: &str = "Company Value Over Time";
pub const DEFAULT_MAX_LABELS: usize = 5;

const DEFAULT_PRECISION: usize = 2;
const AXIS_OFFSET: usize = 3;

/// Renders a numeric series as a fixed-height text plot.
///
/// Every scaled unit between the minimum and maximum gets one row, labeled on
/// the left with the value it stands for. Consecutive points are joined with
/// box-drawing characters, one column per pair.
#[derive(Debug, Clone)]
pub struct AsciiChart {
    height: usize,
    caption: String,
    precision: usize,
}

impl Default for AsciiChart {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            caption: DEFAULT_CAPTION.to_string(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl AsciiChart {
    pub fn new(height: usize, caption: impl Into<String>) -> Self {
        Self {
            height,
            caption: caption.into(),
            ..Self::default()
        }
    }

    pub fn plot(&self, values: &[f64]) -> String {
        if values.is_empty() {
            return String::new();
        }

        let (minimum, maximum) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let interval = maximum - minimum;
        let ratio = if interval > 0.0 {
            self.height as f64 / interval
        } else {
            1.0
        };

        let min_scaled = (minimum * ratio).round() as i64;
        let max_scaled = (maximum * ratio).round() as i64;
        let rows = (max_scaled - min_scaled) as usize;
        let scale = |v: f64| ((v * ratio).round() as i64 - min_scaled) as usize;

        let precision = self.label_precision(minimum, maximum);
        let label_width = format!("{maximum:.precision$}")
            .len()
            .max(format!("{minimum:.precision$}").len());

        let width = values.len() + AXIS_OFFSET;
        let mut grid = vec![vec![" ".to_string(); width]; rows + 1];

        for (row, cells) in grid.iter_mut().enumerate() {
            let magnitude = if rows > 0 {
                maximum - row as f64 * interval / rows as f64
            } else {
                minimum
            };
            let label = format!(
                "{:>width$.precision$}",
                magnitude,
                width = label_width + 1,
                precision = precision
            );
            let column = AXIS_OFFSET.saturating_sub(label.len());
            cells[column] = label;
            cells[AXIS_OFFSET - 1] = "┤".to_string();
        }

        grid[rows - scale(values[0])][AXIS_OFFSET - 1] = "┼".to_string();

        for (x, pair) in values.windows(2).enumerate() {
            let column = x + AXIS_OFFSET;
            let (y0, y1) = (scale(pair[0]), scale(pair[1]));

            if y0 == y1 {
                grid[rows - y0][column] = "─".to_string();
                continue;
            }

            let (arrive, leave) = if y0 > y1 { ("╰", "╮") } else { ("╭", "╯") };
            grid[rows - y1][column] = arrive.to_string();
            grid[rows - y0][column] = leave.to_string();

            for y in y0.min(y1) + 1..y0.max(y1) {
                grid[rows - y][column] = "│".to_string();
            }
        }

        let mut plot = grid
            .iter()
            .map(|cells| cells.concat().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n");

        if !self.caption.is_empty() {
            plot.push('\n');
            plot.push_str(&" ".repeat(AXIS_OFFSET + label_width));
            let caption_len = self.caption.chars().count();
            if caption_len < values.len() {
                plot.push_str(&" ".repeat((values.len() - caption_len) / 2));
            }
            plot.push_str(&self.caption);
        }

        plot
    }

    /// Large magnitudes drop decimals; fractional ones gain enough to show a digit.
    fn label_precision(&self, minimum: f64, maximum: f64) -> usize {
        let log_maximum = if minimum == 0.0 && maximum == 0.0 {
            -1.0
        } else {
            maximum.abs().max(minimum.abs()).log10()
        };

        if log_maximum < 0.0 {
            if log_maximum % 1.0 != 0.0 {
                self.precision + log_maximum.abs() as usize
            } else {
                self.precision + (log_maximum.abs() - 1.0) as usize
            }
        } else if log_maximum > 2.0 {
            0
        } else {
            self.precision
        }
    }
}

/// One x-axis label picked for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSample<'a> {
    pub index: usize,
    pub label: &'a str,
}

/// Indices at a stride of `len / max_labels` (at least 1), plus the last index.
pub fn label_indices(len: usize, max_labels: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }

    let stride = (len / max_labels.max(1)).max(1);
    let last = len - 1;
    let mut indices: Vec<usize> = (0..len).step_by(stride).collect();
    if indices.last() != Some(&last) {
        indices.push(last);
    }
    indices
}

pub fn sample_labels(dates: &[String], max_labels: usize) -> Vec<LabelSample<'_>> {
    label_indices(dates.len(), max_labels)
        .into_iter()
        .map(|index| LabelSample {
            index,
            label: &dates[index],
        })
        .collect()
}
