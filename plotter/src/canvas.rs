use crate::markers::Marker;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

const OCEAN: Rgb<u8> = Rgb([151, 182, 225]);
const GRATICULE: Rgb<u8> = Rgb([110, 130, 160]);

/// Lon/lat window drawn onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl Extent {
    pub const BRITISH_ISLES: Extent = Extent {
        lon_min: -7.0,
        lon_max: 5.0,
        lat_min: 49.0,
        lat_max: 59.0,
    };

    pub fn contains(&self, longitude: f64, latitude: f64) -> bool {
        (self.lon_min..=self.lon_max).contains(&longitude)
            && (self.lat_min..=self.lat_max).contains(&latitude)
    }
}

/// Equirectangular canvas for a scatter plot.
pub struct PlotFrame {
    pub extent: Extent,
    pub width: u32,
    pub height: u32,
    pub dpi: f64,
    pub lon_ticks: Vec<f64>,
    pub lat_ticks: Vec<f64>,
}

impl Default for PlotFrame {
    fn default() -> Self {
        Self {
            extent: Extent::BRITISH_ISLES,
            width: 1500,
            height: 1000,
            dpi: 300.0,
            lon_ticks: vec![-6.0, -1.0, 4.0],
            lat_ticks: vec![52.0, 57.0],
        }
    }
}

impl PlotFrame {
    /// Pixel position of a lon/lat pair, or `None` when it is clipped.
    pub fn project(&self, longitude: f64, latitude: f64) -> Option<(f64, f64)> {
        if !self.extent.contains(longitude, latitude) {
            return None;
        }
        let e = &self.extent;
        let x = (longitude - e.lon_min) / (e.lon_max - e.lon_min) * f64::from(self.width);
        let y = (e.lat_max - latitude) / (e.lat_max - e.lat_min) * f64::from(self.height);
        Some((x, y))
    }

    /// Marker radius in pixels for an area given in pt².
    pub fn marker_radius(&self, size: f64) -> f64 {
        size.max(0.0).sqrt() / 2.0 * self.dpi / 72.0
    }

    /// Draws the background, graticule and markers. Returns the image and
    /// the number of markers that fell inside the extent.
    pub fn render(&self, markers: &[Marker]) -> (RgbImage, usize) {
        let mut image = RgbImage::from_pixel(self.width, self.height, OCEAN);
        self.draw_graticule(&mut image);

        let mut drawn = 0;
        for marker in markers {
            if let Some((x, y)) = self.project(marker.longitude, marker.latitude) {
                let center = (x.round() as i32, y.round() as i32);
                let radius = self.marker_radius(marker.size).round() as i32;
                draw_filled_circle_mut(&mut image, center, radius, marker.color);
                drawn += 1;
            }
        }
        (image, drawn)
    }

    fn draw_graticule(&self, image: &mut RgbImage) {
        let mid_lat = (self.extent.lat_min + self.extent.lat_max) / 2.0;
        let mid_lon = (self.extent.lon_min + self.extent.lon_max) / 2.0;
        let right = self.width.saturating_sub(1) as f32;
        let bottom = self.height.saturating_sub(1) as f32;
        for &lon in &self.lon_ticks {
            if let Some((x, _)) = self.project(lon, mid_lat) {
                let x = (x.round() as f32).min(right);
                draw_line_segment_mut(image, (x, 0.0), (x, bottom), GRATICULE);
            }
        }
        for &lat in &self.lat_ticks {
            if let Some((_, y)) = self.project(mid_lon, lat) {
                let y = (y.round() as f32).min(bottom);
                draw_line_segment_mut(image, (0.0, y), (right, y), GRATICULE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_canvas_corners() {
        let frame = PlotFrame::default();
        assert_eq!(frame.project(-7.0, 59.0), Some((0.0, 0.0)));
        assert_eq!(frame.project(5.0, 49.0), Some((1500.0, 1000.0)));
        assert_eq!(frame.project(-1.0, 54.0), Some((750.0, 500.0)));
    }

    #[test]
    fn outside_points_are_clipped() {
        let frame = PlotFrame::default();
        assert_eq!(frame.project(-8.0, 53.0), None);
        assert_eq!(frame.project(0.0, 60.0), None);
    }

    #[test]
    fn radius_scales_with_dpi() {
        let frame = PlotFrame::default();
        let r = frame.marker_radius(36.0);
        assert!((r - 3.0 * 300.0 / 72.0).abs() < 1e-9);
    }

    #[test]
    fn render_paints_markers_and_skips_clipped() {
        let frame = PlotFrame::default();
        let red = Rgb([200, 0, 0]);
        let markers = vec![
            Marker {
                longitude: -2.2727,
                latitude: 53.3588,
                size: 45.0,
                color: red,
            },
            Marker {
                longitude: 20.0,
                latitude: 53.0,
                size: 45.0,
                color: red,
            },
        ];
        let (image, drawn) = frame.render(&markers);
        assert_eq!(drawn, 1);
        assert_eq!(image.dimensions(), (1500, 1000));

        let (x, y) = frame.project(-2.2727, 53.3588).unwrap();
        assert_eq!(*image.get_pixel(x as u32, y as u32), red);
        assert_eq!(*image.get_pixel(1490, 10), OCEAN);
    }

    #[test]
    fn graticule_lines_cross_the_canvas() {
        let frame = PlotFrame::default();
        let (image, drawn) = frame.render(&[]);
        assert_eq!(drawn, 0);

        let column = frame.project(-1.0, 54.0).unwrap().0.round() as u32;
        assert_eq!(*image.get_pixel(column, 0), GRATICULE);
        assert_eq!(*image.get_pixel(column, 999), GRATICULE);
        let row = frame.project(0.0, 57.0).unwrap().1.round() as u32;
        assert_eq!(*image.get_pixel(0, row), GRATICULE);
        assert_eq!(*image.get_pixel(1499, row), GRATICULE);
        assert_eq!(*image.get_pixel(10, 10), OCEAN);
    }

    #[test]
    fn marker_on_edge_stays_in_bounds() {
        let frame = PlotFrame::default();
        let marker = Marker {
            longitude: 5.0,
            latitude: 49.0,
            size: 45.0,
            color: Rgb([1, 2, 3]),
        };
        let (image, drawn) = frame.render(&[marker]);
        assert_eq!(drawn, 1);
        assert_eq!(*image.get_pixel(1499, 999), Rgb([1, 2, 3]));
    }
}
