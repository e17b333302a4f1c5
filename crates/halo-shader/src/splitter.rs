use crate::source::ShaderSource;
use crate::stage::{Stage, MARKER};

/// Splits a tagged shader file into its vertex and fragment sections.
///
/// Line endings are normalized by [`str::lines`] (`\n` or `\r\n`).
pub fn split_str(text: &str) -> ShaderSource {
    split_lines(text.lines())
}

/// Splits a sequence of lines into vertex and fragment sections.
///
/// - A line containing `#shader` is a marker: it switches the current
///   section when it also names a stage and is never emitted itself.
/// - Lines before the first recognised marker are dropped.
/// - Every other line is appended to the current section, followed by `\n`.
///
/// Malformed input never fails; it produces empty sections instead.
pub fn split_lines<I, S>(lines: I) -> ShaderSource
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = ShaderSource::default();
    let mut current: Option<Stage> = None;

    for line in lines {
        let line = line.as_ref();

        if line.contains(MARKER) {
            if let Some(stage) = Stage::from_marker_line(line) {
                current = Some(stage);
            }
            continue;
        }

        let Some(stage) = current else { continue };
        let buf = out.buffer_mut(stage);
        buf.push_str(line);
        buf.push('\n');
    }

    out
}
