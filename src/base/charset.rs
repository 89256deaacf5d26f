/// Glyphs and styling used by the text renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub dash: char,
    pub tree_sideways_t: &'static str,
    pub tree_corner: &'static str,
    pub tree_pipe_gap: &'static str,
    pub tree_space: &'static str,
    pub chart_axis: char,
    pub chart_bar_billable: char,
    pub chart_bar_other: char,
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            dash: '-',
            tree_sideways_t: "|-- ",
            tree_corner: "`-- ",
            tree_pipe_gap: "|   ",
            tree_space: "    ",
            chart_axis: '|',
            chart_bar_billable: '#',
            chart_bar_other: '=',
            color: false,
        }
    }
}

impl Charset {
    pub fn with_unicode(self) -> Self {
        Self {
            dash: '\u{2500}',
            tree_sideways_t: "\u{251c}\u{2500}\u{2500} ",
            tree_corner: "\u{2514}\u{2500}\u{2500} ",
            tree_pipe_gap: "\u{2502}   ",
            chart_axis: '\u{2502}',
            chart_bar_billable: '\u{2588}',
            chart_bar_other: '\u{2591}',
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }

    /// Applies `f` to `s` only when color is enabled.
    pub fn paint<'s>(
        &self,
        s: &'s str,
        f: impl FnOnce(&'s str) -> colored::ColoredString,
    ) -> std::borrow::Cow<'s, str> {
        if self.color {
            f(s).to_string().into()
        } else {
            s.into()
        }
    }
}
