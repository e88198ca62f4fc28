use compact_str::CompactString;

use termcolor::{Color, ColorSpec};

/// Output layout of one log level: a sequence of message and text segments.
#[derive(Default, Clone)]
pub struct LogFmt {
    segments: Vec<SegmentSpec>,
}

impl LogFmt {

    /// `[label] message`, with the label in bold `color`.
    pub fn labeled(label: &str, color: Color) -> Self {
        let mut fmt = Self::default();
        LogFmtBuilder::new(&mut fmt)
            .text("[", |spec| spec)
            .text(label, |spec| spec.with_color_spec(|c| {
                c.set_fg(Some(color)).set_bold(true);
            }))
            .text("] ", |spec| spec)
            .message(|spec| spec);
        fmt
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn clear(&mut self) {
        self.segments.clear();
    }
}

impl<'a> IntoIterator for &'a LogFmt {

    type Item = &'a SegmentSpec;
    type IntoIter = core::slice::Iter<'a, SegmentSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[derive(Default, Clone)]
pub struct LogSpec {
    pub color_spec: Option<ColorSpec>,
}

impl LogSpec {

    #[inline(always)]
    pub fn with_color_spec(mut self, mut f: impl FnMut(&mut ColorSpec)) -> Self {
        let color_spec = self.color_spec.insert(ColorSpec::new());
        f(color_spec);
        self
    }
}

#[derive(Clone)]
pub enum SegmentSpec {
    Message(LogSpec),
    Text(CompactString, LogSpec),
}

/// Rebuilds a [`LogFmt`] from scratch.
pub struct LogFmtBuilder<'a> {
    fmt: &'a mut LogFmt,
}

impl<'a> LogFmtBuilder<'a> {

    #[inline(always)]
    pub fn new(fmt: &'a mut LogFmt) -> Self {
        fmt.clear();
        Self {
            fmt,
        }
    }

    #[inline(always)]
    pub fn message(&mut self, mut f: impl FnMut(LogSpec) -> LogSpec) -> &mut Self {
        self.fmt.segments.push(SegmentSpec::Message(f(Default::default())));
        self
    }

    #[inline(always)]
    pub fn text(&mut self, text: &str, mut f: impl FnMut(LogSpec) -> LogSpec) -> &mut Self {
        self.fmt.segments.push(SegmentSpec::Text(CompactString::new(text), f(Default::default())));
        self
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn builder_replaces_previous_segments() {
        let mut fmt = LogFmt::labeled("INFO", Color::Green);
        assert_eq!(fmt.len(), 4);
        LogFmtBuilder::new(&mut fmt)
            .message(|spec| spec);
        assert_eq!(fmt.len(), 1);
        assert!(matches!((&fmt).into_iter().next(), Some(SegmentSpec::Message(_))));
    }

    #[test]
    fn color_spec_is_attached_to_segment() {
        let mut fmt = LogFmt::default();
        LogFmtBuilder::new(&mut fmt)
            .text("x", |spec| spec.with_color_spec(|c| { c.set_fg(Some(Color::Red)); }));
        match (&fmt).into_iter().next() {
            Some(SegmentSpec::Text(text, spec)) => {
                assert_eq!(text.as_str(), "x");
                assert_eq!(spec.color_spec.as_ref().and_then(|c| c.fg()), Some(&Color::Red));
            },
            _ => panic!("expected a text segment"),
        }
    }
}
