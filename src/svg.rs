//! SVG result cards.
//!
//! Both calculators export their result as a monospace stat card, rendered
//! once per theme. Rows align on dot leaders; the geometry is derived from
//! the character count of the widest line.

use chrono::NaiveDate;

use crate::age::AgeResult;
use crate::love::CompatibilityResult;
use crate::titles::CardTitle;

const START_Y: i32 = 30;
const LINE_HEIGHT: i32 = 20;
const LEFT_PADDING: f32 = 15.0;
const RIGHT_PADDING: f32 = 30.0;
const CHAR_WIDTH: f32 = 9.6;
const MIN_CARD_CHARS: usize = 46;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub cc: &'static str,
    pub accent: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg: "#161b22",
                text: "#c9d1d9",
                key: "#ffa657",
                value: "#a5d6ff",
                cc: "#616e7f",
                accent: "#ff7b72",
            },
            Theme::Light => ThemeColors {
                bg: "#ffffff",
                text: "#24292f",
                key: "#d73a49",
                value: "#0366d6",
                cc: "#6a737d",
                accent: "#ff1744",
            },
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Progress-arc color for a love score, brightest at the top end.
fn heart_color(score: u8) -> &'static str {
    if score >= 80 {
        "#ff1744"
    } else if score >= 60 {
        "#ff5722"
    } else if score >= 40 {
        "#ff9800"
    } else {
        "#9c27b0"
    }
}

// Utilities for building SVG content

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.len() + value.len();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => ".".repeat(n),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.len()) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}

/// Thousands separators for the big counters ("9,132").
pub fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 { format!("-{out}") } else { out }
}

/// Greedy word wrap for card body text.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

enum Line {
    /// Headline, key color.
    Title(String),
    /// Muted line (taglines, watermark).
    Sub(String),
    /// Dashed section header.
    Header(String),
    /// Dot-leader aligned key/value row.
    Stat { key: String, value: String },
    /// Like `Stat` but the value takes the accent color.
    Score { key: String, value: String },
    /// Plain body text.
    Text(String),
    Blank,
}

impl Line {
    fn stat_base_len(&self) -> Option<usize> {
        match self {
            Line::Stat { key, value } | Line::Score { key, value } => {
                Some(key.len() + 2 + value.len())
            }
            _ => None,
        }
    }

    fn display_len(&self, align_width: usize) -> usize {
        match self {
            Line::Stat { .. } | Line::Score { .. } => align_width + 2,
            Line::Title(s) | Line::Sub(s) | Line::Header(s) | Line::Text(s) => s.chars().count(),
            Line::Blank => 0,
        }
    }
}

/// Renders a column of lines into a finished SVG document.
fn render(lines: &[Line], theme: Theme, accent: &str) -> String {
    let colors = theme.colors();

    let align_width = lines
        .iter()
        .filter_map(Line::stat_base_len)
        .max()
        .unwrap_or(0)
        .max(MIN_CARD_CHARS);

    let mut tspans = String::new();
    for (i, line) in lines.iter().enumerate() {
        let y = START_Y + (i as i32) * LINE_HEIGHT;

        match line {
            Line::Blank => {}
            Line::Title(text) => {
                tspans.push_str(&format!(
                    "<tspan x=\"{LEFT_PADDING}\" y=\"{y}\" class=\"key\">{}</tspan>\n",
                    escape_xml(text)
                ));
            }
            Line::Sub(text) => {
                tspans.push_str(&format!(
                    "<tspan x=\"{LEFT_PADDING}\" y=\"{y}\" class=\"cc\">{}</tspan>\n",
                    escape_xml(text)
                ));
            }
            Line::Header(text) => {
                tspans.push_str(&format!(
                    "<tspan x=\"{LEFT_PADDING}\" y=\"{y}\">{}</tspan>\n",
                    escape_xml(&build_header_line(text, align_width))
                ));
            }
            Line::Text(text) => {
                tspans.push_str(&format!(
                    "<tspan x=\"{LEFT_PADDING}\" y=\"{y}\">{}</tspan>\n",
                    escape_xml(text)
                ));
            }
            Line::Stat { key, value } | Line::Score { key, value } => {
                let (k, d, v) = build_stat_row(key, value, align_width);
                let value_class = match line {
                    Line::Score { .. } => "accent",
                    _ => "value",
                };
                tspans.push_str(&format!(
                    "<tspan x=\"{LEFT_PADDING}\" y=\"{y}\" class=\"cc\">. </tspan><tspan class=\"key\">{}</tspan><tspan class=\"cc\">{}</tspan><tspan class=\"{value_class}\">{}</tspan>\n",
                    escape_xml(&k),
                    escape_xml(&d),
                    escape_xml(&v)
                ));
            }
        }
    }

    let max_chars = lines
        .iter()
        .map(|line| line.display_len(align_width))
        .max()
        .unwrap_or(0);

    let w = LEFT_PADDING + max_chars as f32 * CHAR_WIDTH + RIGHT_PADDING;
    let h = lines.len() as f32 * LINE_HEIGHT as f32 + START_Y as f32 + 30.0;

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="ConsolasFallback,Consolas,monospace"
     font-size="16px">

<style>
.key    {{ fill: {key}; }}
.value  {{ fill: {value}; }}
.cc     {{ fill: {cc}; }}
.accent {{ fill: {accent}; }}
</style>

<rect width="{w}px" height="{h}px" fill="{bg}" rx="15"/>

<text fill="{text}" xml:space="preserve">
{tspans}
</text>

</svg>
"#,
        w = w,
        h = h,
        bg = colors.bg,
        text = colors.text,
        key = colors.key,
        value = colors.value,
        cc = colors.cc,
        accent = accent,
        tspans = tspans
    )
}

/// Renders the age card for one theme.
pub fn generate_age_card(
    result: &AgeResult,
    title: &CardTitle,
    app_name: &str,
    theme: Theme,
) -> String {
    let stat = |key: &str, value: String| Line::Stat {
        key: key.to_string(),
        value,
    };

    let lines = vec![
        Line::Title(title.title.clone()),
        Line::Sub(title.subtitle.to_string()),
        Line::Sub(format!(
            "Calculated on: {}",
            result.reference.format("%Y-%m-%d %H:%M")
        )),
        Line::Blank,
        Line::Header("- Exact Age".to_string()),
        stat("Years", result.years.to_string()),
        stat("Months", result.months.to_string()),
        stat("Days", result.days.to_string()),
        Line::Blank,
        Line::Header("- Lifetime Totals".to_string()),
        stat("Days Lived", group_thousands(result.total_days)),
        stat("Hours Experienced", group_thousands(result.total_hours)),
        stat("Minutes Elapsed", group_thousands(result.total_minutes)),
        Line::Blank,
        Line::Header("- Next Birthday".to_string()),
        stat("Date", result.next_birthday.format("%A, %B %-d, %Y").to_string()),
        stat("Turns", result.next_birthday_age.to_string()),
        Line::Score {
            key: "Days To Go".to_string(),
            value: result.days_to_next_birthday.to_string(),
        },
        Line::Blank,
        Line::Sub(format!("🌟 {app_name}")),
    ];

    render(&lines, theme, theme.colors().accent)
}

/// Renders the love card for one theme. The score row takes the heart color
/// for its bracket.
pub fn generate_love_card(result: &CompatibilityResult, app_name: &str, theme: Theme) -> String {
    let filled = result.filled_hearts();
    let hearts = format!("{}{}", "💖".repeat(filled), "🤍".repeat(5 - filled));

    let mut lines = vec![
        Line::Title(format!("💖 {} ♥ {}", result.name_a, result.name_b)),
        Line::Sub("Compatibility Score".to_string()),
        Line::Blank,
        Line::Score {
            key: "Love Match".to_string(),
            value: format!("{}%", result.score),
        },
        Line::Stat {
            key: "Verdict".to_string(),
            value: format!("{} {}", result.tier.emoji(), result.tier.label()),
        },
        Line::Text(hearts),
        Line::Blank,
    ];

    lines.extend(wrap(result.tier.message(), MIN_CARD_CHARS).into_iter().map(Line::Text));
    lines.push(Line::Blank);
    lines.extend(
        wrap(
            "🎭 Remember: This is for entertainment only! Real love is about \
             connection, understanding, and shared values.",
            MIN_CARD_CHARS,
        )
        .into_iter()
        .map(Line::Sub),
    );
    lines.push(Line::Blank);
    lines.push(Line::Sub(format!("🌟 {app_name}")));

    render(&lines, theme, heart_color(result.score))
}

/// `{name}-age-card-{date}-{theme}.svg`, mirroring the exported file names.
pub fn age_card_file_name(name: &str, date: NaiveDate, theme: Theme) -> String {
    format!("{name}-age-card-{date}-{}.svg", theme.suffix())
}

/// `{a}-loves-{b}-{date}-{theme}.svg`.
pub fn love_card_file_name(name_a: &str, name_b: &str, date: NaiveDate, theme: Theme) -> String {
    format!("{name_a}-loves-{name_b}-{date}-{}.svg", theme.suffix())
}
