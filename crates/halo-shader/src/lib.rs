//! Splitter for tagged shader files.
//!
//! A tagged file holds both stages of a shader program, each introduced by a
//! marker line:
//!
//! ```text
//! #shader vertex
//! ...vertex stage source...
//! #shader fragment
//! ...fragment stage source...
//! ```
//!
//! This crate has no dependencies so it can be used by tooling and tests
//! without pulling in any engine or GPU code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`stage`] | `Stage`, the `#shader` marker token |
//! | [`source`] | `ShaderSource` |
//! | [`splitter`] | `split_str`, `split_lines` entry points |
//!
//! # Quick start
//!
//! ```rust
//! use halo_shader::{split_str, Stage};
//!
//! let src = split_str("#shader vertex\nvs\n#shader fragment\nfs\n");
//! assert_eq!(src.vertex(), "vs\n");
//! assert_eq!(src.get(Stage::Fragment), "fs\n");
//! ```

pub mod source;
pub mod splitter;
pub mod stage;

pub use source::ShaderSource;
pub use splitter::{split_lines, split_str};
pub use stage::{Stage, MARKER};

#[cfg(test)]
mod split_tests {
    use super::*;

    const BASIC: &str = "\
#shader vertex
#version 330 core

layout(location = 0) in vec4 position;
void main() { gl_Position = position; }
#shader fragment
#version 330 core
// keep comments
uniform vec4 u_color;
void main() { color = u_color; }
";

    #[test]
    fn two_sections() {
        let src = split_str(BASIC);
        assert_eq!(
            src.vertex(),
            "#version 330 core\n\nlayout(location = 0) in vec4 position;\nvoid main() { gl_Position = position; }\n"
        );
        assert_eq!(
            src.fragment(),
            "#version 330 core\n// keep comments\nuniform vec4 u_color;\nvoid main() { color = u_color; }\n"
        );
    }

    #[test]
    fn lines_before_first_marker_are_dropped() {
        let src = split_str("preamble\nmore\n#shader vertex\nv\n#shader fragment\nf\n");
        assert_eq!(src.vertex(), "v\n");
        assert_eq!(src.fragment(), "f\n");
        assert!(!src.vertex().contains("preamble"));
        assert!(!src.fragment().contains("preamble"));
    }

    #[test]
    fn marker_lines_are_not_emitted() {
        let src = split_str(BASIC);
        assert!(!src.vertex().contains(MARKER));
        assert!(!src.fragment().contains(MARKER));
    }

    #[test]
    fn vertex_wins_when_marker_names_both() {
        let src = split_str("#shader fragment vertex\na\n");
        assert_eq!(src.vertex(), "a\n");
        assert_eq!(src.fragment(), "");
    }

    #[test]
    fn unknown_marker_keeps_current_section() {
        let src = split_str("#shader vertex\na\n#shader geometry\nb\n#shader fragment\nc\n");
        assert_eq!(src.vertex(), "a\nb\n");
        assert_eq!(src.fragment(), "c\n");
    }

    #[test]
    fn unknown_marker_before_any_section_drops_lines() {
        let src = split_str("#shader compute\nx\n#shader vertex\ny\n");
        assert_eq!(src.vertex(), "y\n");
        assert_eq!(src.fragment(), "");
    }

    #[test]
    fn marker_anywhere_in_line() {
        let src = split_str("  // #shader vertex\nv\n");
        assert_eq!(src.vertex(), "v\n");
    }

    #[test]
    fn repeated_sections_append() {
        let src = split_str("#shader vertex\na\n#shader fragment\nb\n#shader vertex\nc\n");
        assert_eq!(src.vertex(), "a\nc\n");
        assert_eq!(src.fragment(), "b\n");
    }

    #[test]
    fn empty_input_gives_empty_sources() {
        let src = split_str("");
        assert!(src.is_empty());
        assert_eq!(src.missing_stages(), vec![Stage::Vertex, Stage::Fragment]);
    }

    #[test]
    fn missing_fragment_section() {
        let src = split_str("#shader vertex\nv\n");
        assert!(!src.is_empty());
        assert_eq!(src.missing_stages(), vec![Stage::Fragment]);
    }

    #[test]
    fn crlf_line_endings() {
        let src = split_str("#shader vertex\r\nv\r\n#shader fragment\r\nf\r\n");
        assert_eq!(src.vertex(), "v\n");
        assert_eq!(src.fragment(), "f\n");
    }

    #[test]
    fn missing_trailing_newline() {
        let src = split_str("#shader vertex\nv\n#shader fragment\nf");
        assert_eq!(src.fragment(), "f\n");
    }

    #[test]
    fn blank_lines_pass_through() {
        let src = split_str("#shader vertex\n\n\nv\n");
        assert_eq!(src.vertex(), "\n\nv\n");
    }

    #[test]
    fn split_lines_accepts_owned_strings() {
        let lines = vec![
            "#shader fragment".to_string(),
            "f".to_string(),
            "#shader vertex".to_string(),
            "v".to_string(),
        ];
        let src = split_lines(lines);
        assert_eq!(src.vertex(), "v\n");
        assert_eq!(src.fragment(), "f\n");
    }

    #[test]
    fn tagged_string_splits_back() {
        let src = split_str(BASIC);
        assert_eq!(split_str(&src.to_tagged_string()), src);
    }

    #[test]
    fn tagged_string_drops_preamble_only() {
        let input = "junk\n#shader vertex\nv\n#shader fragment\nf\n";
        let src = split_str(input);
        assert_eq!(src.to_tagged_string(), "#shader vertex\nv\n#shader fragment\nf\n");
    }

    #[test]
    fn tagged_string_with_empty_stage() {
        let src = ShaderSource::new("v\n", "");
        assert_eq!(src.to_tagged_string(), "#shader vertex\nv\n#shader fragment\n");
        assert_eq!(split_str(&src.to_tagged_string()), src);
    }

    #[test]
    fn stage_markers() {
        assert_eq!(Stage::Vertex.marker(), "#shader vertex");
        assert_eq!(Stage::Fragment.marker(), "#shader fragment");
        assert_eq!(Stage::Fragment.to_string(), "fragment");
    }
}
