//! SVG output for decoded IconVG graphics.
//!
//! This module provides a [`Destination`] implementation that collects the
//! decoded directives into an SVG document, one `<path>` element per IconVG
//! path.

use crate::destination::Destination;
use crate::types::*;
use tracing::{debug, trace, warn};

/// The color selector register's value when decoding starts.
const INITIAL_CSEL: usize = 56;

/// Configuration options for SVG output.
#[derive(Debug, Clone, Default)]
pub struct SvgConfig {
    /// Whether to put each element on its own indented line.
    pub pretty_print: bool,
}

impl SvgConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to pretty-print the output.
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}

/// Destination that produces an SVG document.
///
/// Each path is filled with the palette color its start-path opcode
/// selects. Path commands map one-to-one onto SVG path data commands.
///
/// # Example
///
/// ```ignore
/// use iconvg::{Decoder, SvgDestination};
///
/// let data = std::fs::read("icon.ivg")?;
/// let mut svg = SvgDestination::new();
/// Decoder::new(&data).destination(&mut svg).decode()?;
/// std::fs::write("icon.svg", svg.finish())?;
/// ```
#[derive(Debug, Default)]
pub struct SvgDestination {
    /// Configuration options.
    config: SvgConfig,
    /// Metadata from the last reset.
    metadata: Metadata,
    /// Finished `<path>` elements.
    paths: Vec<String>,
    /// Path data of the path being built, with its fill color.
    current: Option<(Color, String)>,
}

impl SvgDestination {
    /// Creates a new SVG destination with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new SVG destination with the given configuration.
    pub fn with_config(config: SvgConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the complete SVG document.
    ///
    /// A path that was never ended is emitted as it stands.
    pub fn finish(mut self) -> String {
        self.end_path();

        let vb = self.metadata.view_box;
        let mut output = String::with_capacity(4096);
        output.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">",
            vb.min[0],
            vb.min[1],
            vb.width(),
            vb.height()
        ));
        for path in &self.paths {
            if self.config.pretty_print {
                output.push_str("\n  ");
            }
            output.push_str(path);
        }
        if self.config.pretty_print {
            output.push('\n');
        }
        output.push_str("</svg>");
        output
    }

    /// Appends a command and its arguments to the current path data.
    fn command(&mut self, letter: char, args: &[f32]) {
        let Some((_, data)) = self.current.as_mut() else {
            warn!("Path command '{}' outside of a path", letter);
            return;
        };

        if !data.is_empty() {
            data.push(' ');
        }
        data.push(letter);
        for arg in args {
            data.push_str(&format!(" {}", arg));
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn arc(&mut self, letter: char, rx: f32, ry: f32, rotation: f32, large_arc: bool, sweep: bool, x: f32, y: f32) {
        let flags = [f32::from(u8::from(large_arc)), f32::from(u8::from(sweep))];
        self.command(letter, &[rx, ry, rotation, flags[0], flags[1], x, y]);
    }

    /// Moves the current path, if any, to the finished list.
    fn end_path(&mut self) {
        let Some((fill, data)) = self.current.take() else {
            return;
        };

        let mut element = format!("<path fill=\"{}\"", color_to_hex(&fill));
        if fill.a != 0xff {
            element.push_str(&format!(
                " fill-opacity=\"{:.3}\"",
                f32::from(fill.a) / 255.0
            ));
        }
        element.push_str(&format!(" d=\"{}\"/>", data));

        debug!("Writing path {}", self.paths.len());
        self.paths.push(element);
    }
}

impl Destination for SvgDestination {
    fn reset(&mut self, metadata: &Metadata) {
        self.metadata = *metadata;
        self.paths.clear();
        self.current = None;
    }

    fn start_path(&mut self, adj: usize, x: f32, y: f32) {
        self.end_path();

        let index = INITIAL_CSEL.wrapping_sub(adj) % PALETTE_LEN;
        let fill = self.metadata.palette.get(index);
        trace!("Start path with palette[{}]", index);

        self.current = Some((fill, String::new()));
        self.command('M', &[x, y]);
    }

    fn close_path_end_path(&mut self) {
        self.command('Z', &[]);
        self.end_path();
    }

    fn close_path_abs_move_to(&mut self, x: f32, y: f32) {
        self.command('Z', &[]);
        self.command('M', &[x, y]);
    }

    fn close_path_rel_move_to(&mut self, x: f32, y: f32) {
        self.command('Z', &[]);
        self.command('m', &[x, y]);
    }

    fn abs_h_line_to(&mut self, x: f32) {
        self.command('H', &[x]);
    }

    fn rel_h_line_to(&mut self, x: f32) {
        self.command('h', &[x]);
    }

    fn abs_v_line_to(&mut self, y: f32) {
        self.command('V', &[y]);
    }

    fn rel_v_line_to(&mut self, y: f32) {
        self.command('v', &[y]);
    }

    fn abs_line_to(&mut self, x: f32, y: f32) {
        self.command('L', &[x, y]);
    }

    fn rel_line_to(&mut self, x: f32, y: f32) {
        self.command('l', &[x, y]);
    }

    fn abs_smooth_quad_to(&mut self, x: f32, y: f32) {
        self.command('T', &[x, y]);
    }

    fn rel_smooth_quad_to(&mut self, x: f32, y: f32) {
        self.command('t', &[x, y]);
    }

    fn abs_quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.command('Q', &[x1, y1, x, y]);
    }

    fn rel_quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.command('q', &[x1, y1, x, y]);
    }

    fn abs_smooth_cube_to(&mut self, x2: f32, y2: f32, x: f32, y: f32) {
        self.command('S', &[x2, y2, x, y]);
    }

    fn rel_smooth_cube_to(&mut self, x2: f32, y2: f32, x: f32, y: f32) {
        self.command('s', &[x2, y2, x, y]);
    }

    fn abs_cube_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.command('C', &[x1, y1, x2, y2, x, y]);
    }

    fn rel_cube_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.command('c', &[x1, y1, x2, y2, x, y]);
    }

    fn abs_arc_to(&mut self, rx: f32, ry: f32, x_axis_rotation: f32, large_arc: bool, sweep: bool, x: f32, y: f32) {
        self.arc('A', rx, ry, x_axis_rotation, large_arc, sweep, x, y);
    }

    fn rel_arc_to(&mut self, rx: f32, ry: f32, x_axis_rotation: f32, large_arc: bool, sweep: bool, x: f32, y: f32) {
        self.arc('a', rx, ry, x_axis_rotation, large_arc, sweep, x, y);
    }
}

/// Converts a `Color` to a hex string.
fn color_to_hex(color: &Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_view_box() {
        let mut svg = SvgDestination::new();
        svg.reset(&Metadata {
            view_box: ViewBox::new(0.0, 0.0, 48.0, 24.0),
            ..Metadata::default()
        });

        assert_eq!(
            svg.finish(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 48 24\"></svg>"
        );
    }

    #[test]
    fn test_path_commands() {
        let mut svg = SvgDestination::new();
        svg.reset(&Metadata::default());
        svg.start_path(0, 1.0, 2.0);
        svg.rel_line_to(3.0, 0.5);
        svg.abs_arc_to(4.0, 4.0, 0.0, true, false, 8.0, 8.0);
        svg.close_path_end_path();

        assert_eq!(
            svg.finish(),
            concat!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"-32 -32 64 64\">",
                "<path fill=\"#000000\" d=\"M 1 2 l 3 0.5 A 4 4 0 1 0 8 8 Z\"/>",
                "</svg>"
            )
        );
    }

    #[test]
    fn test_fill_selects_palette_below_selector() {
        let mut palette = DEFAULT_PALETTE;
        palette.0[INITIAL_CSEL - 2] = Color::rgba(0xff, 0x00, 0x00, 0x80);

        let mut svg = SvgDestination::new();
        svg.reset(&Metadata {
            palette,
            ..Metadata::default()
        });
        svg.start_path(2, 0.0, 0.0);
        svg.close_path_end_path();

        let out = svg.finish();
        assert!(out.contains("<path fill=\"#ff0000\" fill-opacity=\"0.502\" d=\"M 0 0 Z\"/>"));
    }

    #[test]
    fn test_unfinished_path_is_flushed() {
        let mut svg = SvgDestination::with_config(SvgConfig::new().with_pretty_print(true));
        svg.reset(&Metadata::default());
        svg.start_path(0, 0.0, 0.0);
        svg.abs_h_line_to(5.0);

        assert_eq!(
            svg.finish(),
            concat!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"-32 -32 64 64\">\n",
                "  <path fill=\"#000000\" d=\"M 0 0 H 5\"/>\n",
                "</svg>"
            )
        );
    }
}
