use regex::Regex;

/// One inline span of a formatted reply line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Unformatted text.
    Text(String),
    /// Text between paired `**` markers, delimiters stripped.
    Bold(String),
    /// An honorific-prefixed name such as `Pr. Dupont`.
    Honorific(String),
    /// An email address, rendered as a mailto link.
    Email(String),
}

/// One line of a formatted reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedLine {
    /// List marker (`1.` or `•`) when the line is a list item.
    pub marker: Option<String>,
    pub segments: Vec<Segment>,
}

/// Splits a freeform assistant reply into per-line inline segments.
///
/// Each line is handled independently: list-item detection first, then
/// either email links (for lines containing `@`) or bold/honorific spans.
/// There is no escaping; a literal `**` always opens or closes a bold span.
pub struct MessageFormatter {
    list_prefix: Regex,
    inline: Regex,
    email: Regex,
}

impl MessageFormatter {
    pub fn new() -> Self {
        Self {
            list_prefix: Regex::new(r"^\d+\.").expect("valid regex"),
            inline: Regex::new(r"\*\*(?P<bold>.*?)\*\*|Pr\.\s+[A-Za-z\s]+").expect("valid regex"),
            email: Regex::new(r"\S+@\S+\.\S+").expect("valid regex"),
        }
    }

    pub fn format(&self, content: &str) -> Vec<FormattedLine> {
        content.split('\n').map(|line| self.format_line(line)).collect()
    }

    fn format_line(&self, line: &str) -> FormattedLine {
        // List items: digit+period prefix, or a leading dash rendered as `•`.
        if let Some(prefix) = self.list_prefix.find(line) {
            return FormattedLine {
                marker: Some(prefix.as_str().to_string()),
                segments: self.inline_segments(line[prefix.end()..].trim_start()),
            };
        }
        if let Some(rest) = line.trim_start().strip_prefix('-') {
            return FormattedLine {
                marker: Some("•".to_string()),
                segments: self.inline_segments(rest.trim_start()),
            };
        }

        // Lines carrying an address get mailto links and no other formatting.
        if line.contains('@') {
            return FormattedLine {
                marker: None,
                segments: self.email_segments(line),
            };
        }

        FormattedLine {
            marker: None,
            segments: self.inline_segments(line),
        }
    }

    fn inline_segments(&self, text: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut cursor = 0;

        for caps in self.inline.captures_iter(text) {
            let whole = caps.get(0).expect("group 0 always matches");
            if whole.start() > cursor {
                segments.push(Segment::Text(text[cursor..whole.start()].to_string()));
            }
            match caps.name("bold") {
                Some(inner) => segments.push(Segment::Bold(inner.as_str().to_string())),
                None => segments.push(Segment::Honorific(whole.as_str().to_string())),
            }
            cursor = whole.end();
        }

        if cursor < text.len() || segments.is_empty() {
            segments.push(Segment::Text(text[cursor..].to_string()));
        }
        segments
    }

    fn email_segments(&self, text: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut cursor = 0;

        for address in self.email.find_iter(text) {
            if address.start() > cursor {
                segments.push(Segment::Text(text[cursor..address.start()].to_string()));
            }
            segments.push(Segment::Email(address.as_str().to_string()));
            cursor = address.end();
        }

        if cursor < text.len() || segments.is_empty() {
            segments.push(Segment::Text(text[cursor..].to_string()));
        }
        segments
    }
}

impl Default for MessageFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter() -> MessageFormatter {
        MessageFormatter::new()
    }

    #[test]
    fn plain_text_passes_through() {
        let lines = formatter().format("Les horaires sont affichés au secrétariat.");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].marker, None);
        assert_eq!(
            lines[0].segments,
            vec![Segment::Text(
                "Les horaires sont affichés au secrétariat.".to_string()
            )]
        );
    }

    #[test]
    fn bold_span_strips_delimiters() {
        let lines = formatter().format("**bold**");
        assert_eq!(lines[0].segments, vec![Segment::Bold("bold".to_string())]);
    }

    #[test]
    fn bold_span_inside_sentence() {
        let lines = formatter().format("Voir **le guide** pour plus de détails.");
        assert_eq!(
            lines[0].segments,
            vec![
                Segment::Text("Voir ".to_string()),
                Segment::Bold("le guide".to_string()),
                Segment::Text(" pour plus de détails.".to_string()),
            ]
        );
    }

    #[test]
    fn honorific_name_is_emphasized() {
        let lines = formatter().format("Le cours est assuré par Pr. Martin");
        assert_eq!(
            lines[0].segments,
            vec![
                Segment::Text("Le cours est assuré par ".to_string()),
                Segment::Honorific("Pr. Martin".to_string()),
            ]
        );
    }

    #[test]
    fn email_becomes_mailto_target() {
        let lines = formatter().format("Contactez secretariat@univ.fr pour un rendez-vous.");
        assert_eq!(
            lines[0].segments,
            vec![
                Segment::Text("Contactez ".to_string()),
                Segment::Email("secretariat@univ.fr".to_string()),
                Segment::Text(" pour un rendez-vous.".to_string()),
            ]
        );
    }

    #[test]
    fn email_line_skips_other_formatting() {
        let lines = formatter().format("Écrivez à **urgent** doyen@univ.fr");
        assert_eq!(
            lines[0].segments,
            vec![
                Segment::Text("Écrivez à **urgent** ".to_string()),
                Segment::Email("doyen@univ.fr".to_string()),
            ]
        );
    }

    #[test]
    fn numbered_line_yields_marker() {
        let lines = formatter().format("1. Introduction au cours");
        assert_eq!(lines[0].marker.as_deref(), Some("1."));
        assert_eq!(
            lines[0].segments,
            vec![Segment::Text("Introduction au cours".to_string())]
        );
    }

    #[test]
    fn dash_line_yields_bullet_marker() {
        let lines = formatter().format("- consulter le planning");
        assert_eq!(lines[0].marker.as_deref(), Some("•"));
        assert_eq!(
            lines[0].segments,
            vec![Segment::Text("consulter le planning".to_string())]
        );
    }

    #[test]
    fn bold_and_honorific_combine_in_list_item() {
        let lines = formatter().format("1. **Algorithmique** avec Pr. Dupont");
        assert_eq!(lines[0].marker.as_deref(), Some("1."));
        assert_eq!(
            lines[0].segments,
            vec![
                Segment::Bold("Algorithmique".to_string()),
                Segment::Text(" avec ".to_string()),
                Segment::Honorific("Pr. Dupont".to_string()),
            ]
        );
    }

    #[test]
    fn lines_are_formatted_independently() {
        let lines = formatter().format("Voici les cours :\n1. Analyse\n2. Algèbre");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].marker, None);
        assert_eq!(lines[1].marker.as_deref(), Some("1."));
        assert_eq!(lines[2].marker.as_deref(), Some("2."));
    }

    #[test]
    fn empty_reply_keeps_one_empty_line() {
        let lines = formatter().format("");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].segments, vec![Segment::Text(String::new())]);
    }
}
