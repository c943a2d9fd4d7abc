//! Console output formatter for quotes

use crate::output::formatter::OutputFormatter;
use crate::output::view::QuoteView;
use colored::Colorize;
use quote_domain::format_yen;

const WIDTH: usize = 46;

/// Formats quotes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the quote: header, price breakdown, then the summary as it
    /// will be sent.
    pub fn format(view: &QuoteView) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(view.service.title()));
        output.push('\n');

        output.push_str(&Self::section_header("料金"));
        for line in &view.breakdown {
            output.push_str(&format!(
                "  {:<30} {:>12}\n",
                line.label,
                format_yen(line.amount)
            ));
        }
        output.push_str(&format!(
            "  {:<30} {:>12}\n",
            "合計".bold(),
            format_yen(view.total).green().bold()
        ));

        if view.url_warning {
            output.push_str(&format!(
                "\n{} {}\n",
                "!".yellow().bold(),
                "URLの形式が正しくない可能性があります".yellow()
            ));
        }

        output.push_str(&Self::section_header("注文内容"));
        if view.ready {
            output.push_str(&view.summary);
            output.push('\n');
        } else {
            output.push_str(&format!(
                "{} {}\n",
                "Not ready:".red().bold(),
                format!("missing {}", view.missing_fields.join(", ")).red()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(view: &QuoteView) -> String {
        serde_json::to_string_pretty(view).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(WIDTH);
        format!("{}\n{}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", title.cyan().bold())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(WIDTH).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, view: &QuoteView) -> String {
        Self::format(view)
    }

    fn format_json(&self, view: &QuoteView) -> String {
        Self::format_json(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::view::PriceLine;
    use quote_domain::Service;

    fn view(ready: bool) -> QuoteView {
        QuoteView {
            service: Service::VocalMix,
            total: 7500,
            breakdown: vec![
                PriceLine {
                    label: "基本料金".to_string(),
                    amount: 3000,
                },
                PriceLine {
                    label: "ボーカル追加 ×2".to_string(),
                    amount: 4000,
                },
                PriceLine {
                    label: "エンコード".to_string(),
                    amount: 500,
                },
            ],
            summary: if ready {
                "名前 : 山田太郎\n合計金額 : ¥7,500".to_string()
            } else {
                String::new()
            },
            ready,
            missing_fields: if ready { vec![] } else { vec!["video_url"] },
            url_warning: false,
        }
    }

    #[test]
    fn test_format_contains_summary_and_total() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format(&view(true));
        assert!(text.contains("ボーカルミックス"));
        assert!(text.contains("¥4,000"));
        assert!(text.contains("合計金額 : ¥7,500"));
        assert!(!text.contains("Not ready"));
    }

    #[test]
    fn test_format_not_ready() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format(&view(false));
        assert!(text.contains("Not ready: missing video_url"));
    }

    #[test]
    fn test_format_json() {
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&view(true))).unwrap();
        assert_eq!(json["total"], 7500);
        assert_eq!(json["ready"], true);
        assert_eq!(json["breakdown"][1]["amount"], 4000);
    }
}
