//! Renders a plate's temperature field as a colour-banded scatter plot.

use std::io::Write;
use std::path::Path;

use crate::Error;

/// Colours of the temperature bands, coolest first.
pub const BAND_COLORS: [&str; 8] = [
    "darkblue", "blue", "aqua", "lawngreen", "yellow", "orange", "red", "darkred",
];

const NBANDS: usize = BAND_COLORS.len();

/// Splits `[0, T]` into equal-width colour bands.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorBands {
    temperature: f64,
    thresholds: [f64; NBANDS + 1],
}

impl ColorBands {
    pub fn new(temperature: f64) -> Self {
        let step = temperature / NBANDS as f64;
        let mut thresholds = [0.0; NBANDS + 1];
        for (k, threshold) in thresholds.iter_mut().enumerate() {
            *threshold = k as f64 * step;
        }
        thresholds[NBANDS] = temperature;

        Self { temperature, thresholds }
    }

    #[inline]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Index of the band `value` falls in.
    ///
    /// Bands are half-open `[t_k, t_k+1)`, except that a value equal to the
    /// edge temperature always lands in the last band. Values outside
    /// `[0, T]` are clamped to the nearest band.
    pub fn band(&self, value: f64) -> usize {
        if value == self.temperature {
            return NBANDS - 1;
        }
        self.thresholds
            .windows(2)
            .position(|edges| value >= edges[0] && value < edges[1])
            .unwrap_or(if value > self.temperature { NBANDS - 1 } else { 0 })
    }

    #[inline]
    pub fn color(&self, value: f64) -> &'static str {
        BAND_COLORS[self.band(value)]
    }
}

/// A single plotted interior cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Marker {
    /// Column index of the cell.
    pub x: usize,
    /// Row index of the cell.
    pub y: usize,
    /// Colour band of the cell's temperature.
    pub band: usize,
}

/// A finished plot, ready to be drawn.
#[derive(Clone, Debug)]
pub struct Scatter {
    pub title: String,
    /// Upper limit of both axes; the lower limit is zero.
    pub upper: f64,
    pub markers: Vec<Marker>,
}

/// Turns a temperature grid into a `Scatter`.
#[derive(Clone, Debug)]
pub struct Renderer {
    temperature: f64,
    bands: ColorBands,
}

impl Renderer {
    pub fn new(temperature: f64) -> Self {
        Self {
            temperature,
            bands: ColorBands::new(temperature),
        }
    }

    #[inline]
    pub fn bands(&self) -> &ColorBands {
        &self.bands
    }

    /// Places one marker per interior cell, halo excluded.
    pub fn scatter(&self, grid: ndarray::ArrayView2<f64>) -> Scatter {
        let (rows, cols) = grid.dim();
        let markers = grid
            .indexed_iter()
            .filter(|&((row, col), _)| row > 0 && row + 1 < rows && col > 0 && col + 1 < cols)
            .map(|((row, col), &value)| Marker {
                x: col,
                y: row,
                band: self.bands.band(value),
            })
            .collect();

        Scatter {
            title: format!("Starting Temperature: {}", self.temperature),
            upper: self.temperature + 1.0,
            markers,
        }
    }
}

const CANVAS: f64 = 480.0;
const MARGIN: f64 = 48.0;
const TICK_LENGTH: f64 = 4.0;
const MARKER_RADIUS: f64 = 2.0;

impl Scatter {
    #[inline]
    fn canvas_point(&self, x: f64, y: f64) -> (f64, f64) {
        let span = CANVAS - 2.0 * MARGIN;
        (
            MARGIN + x / self.upper * span,
            CANVAS - MARGIN - y / self.upper * span,
        )
    }

    /// Axis tick positions, at most about ten per axis.
    pub fn ticks(&self) -> Vec<f64> {
        let step = (self.upper / 10.0).ceil().max(1.0);
        (0..)
            .map(|k| k as f64 * step)
            .take_while(|&tick| tick <= self.upper)
            .collect()
    }

    /// Writes the plot as an SVG document.
    pub fn write_svg<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let (left, bottom) = self.canvas_point(0.0, 0.0);
        let (right, top) = self.canvas_point(self.upper, self.upper);

        writeln!(
            writer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{0}" viewBox="0 0 {0} {0}">"#,
            CANVAS,
        )?;
        writeln!(writer, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
        writeln!(
            writer,
            r#"<text x="{}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="14">{}</text>"#,
            CANVAS / 2.0,
            MARGIN / 2.0,
            self.title,
        )?;
        writeln!(
            writer,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="black"/>"#,
            left,
            top,
            right - left,
            bottom - top,
        )?;

        // ticks point inwards on all four sides
        for tick in self.ticks() {
            let (x, y) = self.canvas_point(tick, tick);
            writeln!(
                writer,
                r#"<path d="M{x} {bottom}v-{l}M{x} {top}v{l}M{left} {y}h{l}M{right} {y}h-{l}" stroke="black" stroke-width="0.5"/>"#,
                x = x,
                y = y,
                left = left,
                right = right,
                top = top,
                bottom = bottom,
                l = TICK_LENGTH,
            )?;
            writeln!(
                writer,
                r#"<text x="{}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="10">{}</text>"#,
                x,
                bottom + 14.0,
                tick,
            )?;
            writeln!(
                writer,
                r#"<text x="{}" y="{}" text-anchor="end" font-family="sans-serif" font-size="10">{}</text>"#,
                left - 6.0,
                y + 3.0,
                tick,
            )?;
        }

        for marker in &self.markers {
            let (cx, cy) = self.canvas_point(marker.x as f64, marker.y as f64);
            writeln!(
                writer,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" stroke="black" stroke-width="0.25"/>"#,
                cx,
                cy,
                MARKER_RADIUS,
                BAND_COLORS[marker.band],
            )?;
        }

        writeln!(writer, "</svg>")?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the plot to an SVG file, creating parent directories as needed.
    pub fn save_svg<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::File::create(path)?;
        self.write_svg(std::io::BufWriter::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_span_zero_to_temperature() {
        let bands = ColorBands::new(100.0);

        assert_eq!(bands.thresholds().len(), 9);
        assert_eq!(bands.thresholds()[0], 0.0);
        assert_eq!(bands.thresholds()[1], 12.5);
        assert_eq!(bands.thresholds()[8], 100.0);
    }

    #[test]
    fn edge_temperature_lands_in_last_band() {
        let bands = ColorBands::new(100.0);

        assert_eq!(bands.band(100.0), 7);
        assert_eq!(bands.color(100.0), "darkred");
        assert_eq!(bands.band(0.0), 0);
        assert_eq!(bands.color(0.0), "darkblue");
        assert_eq!(bands.band(12.49), 0);
        assert_eq!(bands.band(12.5), 1);
        assert_eq!(bands.band(99.99), 7);
        assert_eq!(bands.band(50.0), 4);
    }

    #[test]
    fn zero_temperature_puts_everything_in_last_band() {
        let bands = ColorBands::new(0.0);
        assert_eq!(bands.band(0.0), 7);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let bands = ColorBands::new(8.0);
        assert_eq!(bands.band(-0.5), 0);
        assert_eq!(bands.band(9.0), 7);
    }

    #[test]
    fn scatter_skips_halo_cells() {
        let mut grid = ndarray::Array2::<f64>::zeros((4, 4));
        grid.column_mut(0).fill(2.0);
        grid[[1, 1]] = 2.0;
        grid[[2, 2]] = 1.0;

        let scatter = Renderer::new(2.0).scatter(grid.view());

        assert_eq!(scatter.title, "Starting Temperature: 2");
        assert_eq!(scatter.upper, 3.0);
        assert_eq!(
            scatter.markers,
            vec![
                Marker { x: 1, y: 1, band: 7 },
                Marker { x: 2, y: 1, band: 0 },
                Marker { x: 1, y: 2, band: 0 },
                Marker { x: 2, y: 2, band: 4 },
            ]
        );
    }

    struct UnflushableWriter;

    impl Write for UnflushableWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }
    }

    #[test]
    fn flush_errors_are_reported() {
        let grid = ndarray::Array2::<f64>::zeros((3, 3));
        let scatter = Renderer::new(1.0).scatter(grid.view());

        assert!(matches!(scatter.write_svg(UnflushableWriter), Err(Error::Io(_))));
    }

    #[test]
    fn saved_svg_is_complete() {
        let grid = ndarray::Array2::<f64>::zeros((12, 12));
        let scatter = Renderer::new(10.0).scatter(grid.view());
        let path = std::env::temp_dir()
            .join(format!("heatplate-{}", std::process::id()))
            .join("plate.svg");

        scatter.save_svg(&path).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();

        assert_eq!(svg.matches("<circle").count(), 100);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn svg_has_one_circle_per_marker() {
        let grid = ndarray::Array2::<f64>::zeros((5, 5));
        let scatter = Renderer::new(3.0).scatter(grid.view());

        let mut buffer = Vec::new();
        scatter.write_svg(&mut buffer).unwrap();
        let svg = String::from_utf8(buffer).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), 9);
        assert!(svg.contains("Starting Temperature: 3"));
    }
}
