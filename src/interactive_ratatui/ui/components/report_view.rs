use crate::interactive_ratatui::domain::models::AnalysisReport;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const SECTION_RULE: &str = "────────────────────────────────────────";

/// Lay out an analysis report as dialog content, one block per section
pub fn report_lines(report: &AnalysisReport) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, section) in report.sections.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(Span::styled(
                SECTION_RULE,
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(Span::styled(
            section.heading.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for entry in &section.entries {
            lines.push(Line::from(entry.clone()));
        }
        lines.push(Line::from(""));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive_ratatui::domain::content::{
        RECOMMENDED_DEVELOPER, RECOMMENDED_TOOLS, SIMILAR_PROJECTS, canned_report,
    };

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_headings_in_order_with_rules_between() {
        let lines = report_lines(&canned_report());
        let texts: Vec<String> = lines.iter().map(line_text).collect();

        let similar = texts.iter().position(|t| t == SIMILAR_PROJECTS).unwrap();
        let developer = texts.iter().position(|t| t == RECOMMENDED_DEVELOPER).unwrap();
        let tools = texts.iter().position(|t| t == RECOMMENDED_TOOLS).unwrap();

        assert_eq!(similar, 0);
        assert!(similar < developer && developer < tools);
        assert_eq!(texts[developer - 1], SECTION_RULE);
        assert_eq!(texts[tools - 1], SECTION_RULE);
        assert_eq!(texts.iter().filter(|t| *t == SECTION_RULE).count(), 2);
    }

    #[test]
    fn test_every_entry_is_rendered() {
        let report = canned_report();
        let texts: Vec<String> = report_lines(&report).iter().map(line_text).collect();

        for entry in report.sections.iter().flat_map(|s| &s.entries) {
            assert!(texts.contains(entry), "missing entry: {entry}");
        }
    }
}
