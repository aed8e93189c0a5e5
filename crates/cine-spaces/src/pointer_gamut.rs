//! Pointer's Gamut data.
//!
//! Pointer's Gamut approximates the set of chromaticities attainable by
//! real diffuse surface colours. The dataset carries the original survey
//! samples in CIE LCHab and the xy boundary polygon commonly drawn on
//! chromaticity diagrams.
//!
//! Reference: Pointer, M. R. (1980), "The Gamut of Real Surface Colours",
//! Color Research & Application 5(3).
//!
//! The data is defined relative to light source "SC"; resolve its
//! chromaticity with [`pointer_gamut_illuminant`]. The tables themselves
//! are plain consts, consumed by gamut-comparison logic downstream.

use cine_colorimetry::{light_source, Observer};
use cine_core::Result;

/// Name of the light source Pointer's Gamut is defined against.
pub const POINTER_GAMUT_ILLUMINANT_NAME: &str = "SC";

/// Chromaticity of the Pointer's Gamut illuminant (light source SC,
/// CIE 1931 2 degree observer).
///
/// # Errors
///
/// Propagates the registry miss if the light source table does not carry
/// "SC" (which would indicate a broken build of the registry).
pub fn pointer_gamut_illuminant() -> Result<(f64, f64)> {
    light_source(Observer::Cie1931TwoDegree, POINTER_GAMUT_ILLUMINANT_NAME)
}

/// Pointer's Gamut survey samples as CIE LCHab triplets `[L*, C*, h]`.
///
/// 16 lightness planes (L* = 15 to 90 in steps of 5), each sampled at 36
/// hue angles (h = 0 to 350 in steps of 10); C* is the maximum chroma of
/// a real surface colour at that (L*, h).
pub const POINTER_GAMUT_DATA: [[f64; 3]; 576] = [
    [15.0, 10.0, 0.0],
    [15.0, 15.0, 10.0],
    [15.0, 14.0, 20.0],
    [15.0, 35.0, 30.0],
    [15.0, 27.0, 40.0],
    [15.0, 10.0, 50.0],
    [15.0, 4.0, 60.0],
    [15.0, 5.0, 70.0],
    [15.0, 6.0, 80.0],
    [15.0, 4.0, 90.0],
    [15.0, 9.0, 100.0],
    [15.0, 9.0, 110.0],
    [15.0, 4.0, 120.0],
    [15.0, 5.0, 130.0],
    [15.0, 7.0, 140.0],
    [15.0, 7.0, 150.0],
    [15.0, 8.0, 160.0],
    [15.0, 13.0, 170.0],
    [15.0, 10.0, 180.0],
    [15.0, 7.0, 190.0],
    [15.0, 5.0, 200.0],
    [15.0, 0.0, 210.0],
    [15.0, 2.0, 220.0],
    [15.0, 10.0, 230.0],
    [15.0, 8.0, 240.0],
    [15.0, 9.0, 250.0],
    [15.0, 12.0, 260.0],
    [15.0, 14.0, 270.0],
    [15.0, 10.0, 280.0],
    [15.0, 20.0, 290.0],
    [15.0, 30.0, 300.0],
    [15.0, 62.0, 310.0],
    [15.0, 60.0, 320.0],
    [15.0, 20.0, 330.0],
    [15.0, 26.0, 340.0],
    [15.0, 15.0, 350.0],
    [20.0, 30.0, 0.0],
    [20.0, 30.0, 10.0],
    [20.0, 34.0, 20.0],
    [20.0, 48.0, 30.0],
    [20.0, 40.0, 40.0],
    [20.0, 21.0, 50.0],
    [20.0, 15.0, 60.0],
    [20.0, 15.0, 70.0],
    [20.0, 15.0, 80.0],
    [20.0, 12.0, 90.0],
    [20.0, 16.0, 100.0],
    [20.0, 18.0, 110.0],
    [20.0, 14.0, 120.0],
    [20.0, 18.0, 130.0],
    [20.0, 20.0, 140.0],
    [20.0, 21.0, 150.0],
    [20.0, 24.0, 160.0],
    [20.0, 25.0, 170.0],
    [20.0, 25.0, 180.0],
    [20.0, 19.0, 190.0],
    [20.0, 19.0, 200.0],
    [20.0, 12.0, 210.0],
    [20.0, 12.0, 220.0],
    [20.0, 20.0, 230.0],
    [20.0, 16.0, 240.0],
    [20.0, 21.0, 250.0],
    [20.0, 24.0, 260.0],
    [20.0, 31.0, 270.0],
    [20.0, 29.0, 280.0],
    [20.0, 40.0, 290.0],
    [20.0, 55.0, 300.0],
    [20.0, 76.0, 310.0],
    [20.0, 71.0, 320.0],
    [20.0, 50.0, 330.0],
    [20.0, 49.0, 340.0],
    [20.0, 37.0, 350.0],
    [25.0, 43.0, 0.0],
    [25.0, 45.0, 10.0],
    [25.0, 49.0, 20.0],
    [25.0, 59.0, 30.0],
    [25.0, 53.0, 40.0],
    [25.0, 34.0, 50.0],
    [25.0, 26.0, 60.0],
    [25.0, 25.0, 70.0],
    [25.0, 24.0, 80.0],
    [25.0, 20.0, 90.0],
    [25.0, 23.0, 100.0],
    [25.0, 27.0, 110.0],
    [25.0, 23.0, 120.0],
    [25.0, 30.0, 130.0],
    [25.0, 32.0, 140.0],
    [25.0, 34.0, 150.0],
    [25.0, 36.0, 160.0],
    [25.0, 36.0, 170.0],
    [25.0, 38.0, 180.0],
    [25.0, 30.0, 190.0],
    [25.0, 29.0, 200.0],
    [25.0, 17.0, 210.0],
    [25.0, 20.0, 220.0],
    [25.0, 29.0, 230.0],
    [25.0, 26.0, 240.0],
    [25.0, 32.0, 250.0],
    [25.0, 34.0, 260.0],
    [25.0, 42.0, 270.0],
    [25.0, 45.0, 280.0],
    [25.0, 60.0, 290.0],
    [25.0, 72.0, 300.0],
    [25.0, 85.0, 310.0],
    [25.0, 79.0, 320.0],
    [25.0, 72.0, 330.0],
    [25.0, 63.0, 340.0],
    [25.0, 52.0, 350.0],
    [30.0, 56.0, 0.0],
    [30.0, 56.0, 10.0],
    [30.0, 61.0, 20.0],
    [30.0, 68.0, 30.0],
    [30.0, 66.0, 40.0],
    [30.0, 45.0, 50.0],
    [30.0, 37.0, 60.0],
    [30.0, 36.0, 70.0],
    [30.0, 32.0, 80.0],
    [30.0, 28.0, 90.0],
    [30.0, 30.0, 100.0],
    [30.0, 35.0, 110.0],
    [30.0, 32.0, 120.0],
    [30.0, 40.0, 130.0],
    [30.0, 42.0, 140.0],
    [30.0, 45.0, 150.0],
    [30.0, 48.0, 160.0],
    [30.0, 47.0, 170.0],
    [30.0, 48.0, 180.0],
    [30.0, 40.0, 190.0],
    [30.0, 37.0, 200.0],
    [30.0, 26.0, 210.0],
    [30.0, 28.0, 220.0],
    [30.0, 36.0, 230.0],
    [30.0, 34.0, 240.0],
    [30.0, 40.0, 250.0],
    [30.0, 41.0, 260.0],
    [30.0, 50.0, 270.0],
    [30.0, 55.0, 280.0],
    [30.0, 69.0, 290.0],
    [30.0, 81.0, 300.0],
    [30.0, 88.0, 310.0],
    [30.0, 84.0, 320.0],
    [30.0, 86.0, 330.0],
    [30.0, 73.0, 340.0],
    [30.0, 65.0, 350.0],
    [35.0, 68.0, 0.0],
    [35.0, 64.0, 10.0],
    [35.0, 69.0, 20.0],
    [35.0, 75.0, 30.0],
    [35.0, 79.0, 40.0],
    [35.0, 60.0, 50.0],
    [35.0, 48.0, 60.0],
    [35.0, 46.0, 70.0],
    [35.0, 40.0, 80.0],
    [35.0, 36.0, 90.0],
    [35.0, 37.0, 100.0],
    [35.0, 44.0, 110.0],
    [35.0, 41.0, 120.0],
    [35.0, 48.0, 130.0],
    [35.0, 52.0, 140.0],
    [35.0, 57.0, 150.0],
    [35.0, 58.0, 160.0],
    [35.0, 57.0, 170.0],
    [35.0, 57.0, 180.0],
    [35.0, 48.0, 190.0],
    [35.0, 42.0, 200.0],
    [35.0, 34.0, 210.0],
    [35.0, 35.0, 220.0],
    [35.0, 42.0, 230.0],
    [35.0, 41.0, 240.0],
    [35.0, 49.0, 250.0],
    [35.0, 46.0, 260.0],
    [35.0, 55.0, 270.0],
    [35.0, 60.0, 280.0],
    [35.0, 71.0, 290.0],
    [35.0, 79.0, 300.0],
    [35.0, 85.0, 310.0],
    [35.0, 85.0, 320.0],
    [35.0, 89.0, 330.0],
    [35.0, 82.0, 340.0],
    [35.0, 73.0, 350.0],
    [40.0, 77.0, 0.0],
    [40.0, 70.0, 10.0],
    [40.0, 74.0, 20.0],
    [40.0, 82.0, 30.0],
    [40.0, 90.0, 40.0],
    [40.0, 75.0, 50.0],
    [40.0, 59.0, 60.0],
    [40.0, 56.0, 70.0],
    [40.0, 48.0, 80.0],
    [40.0, 44.0, 90.0],
    [40.0, 45.0, 100.0],
    [40.0, 52.0, 110.0],
    [40.0, 49.0, 120.0],
    [40.0, 56.0, 130.0],
    [40.0, 60.0, 140.0],
    [40.0, 68.0, 150.0],
    [40.0, 68.0, 160.0],
    [40.0, 65.0, 170.0],
    [40.0, 64.0, 180.0],
    [40.0, 55.0, 190.0],
    [40.0, 45.0, 200.0],
    [40.0, 43.0, 210.0],
    [40.0, 40.0, 220.0],
    [40.0, 46.0, 230.0],
    [40.0, 47.0, 240.0],
    [40.0, 54.0, 250.0],
    [40.0, 51.0, 260.0],
    [40.0, 60.0, 270.0],
    [40.0, 61.0, 280.0],
    [40.0, 69.0, 290.0],
    [40.0, 72.0, 300.0],
    [40.0, 80.0, 310.0],
    [40.0, 86.0, 320.0],
    [40.0, 89.0, 330.0],
    [40.0, 87.0, 340.0],
    [40.0, 79.0, 350.0],
    [45.0, 79.0, 0.0],
    [45.0, 73.0, 10.0],
    [45.0, 76.0, 20.0],
    [45.0, 84.0, 30.0],
    [45.0, 94.0, 40.0],
    [45.0, 90.0, 50.0],
    [45.0, 70.0, 60.0],
    [45.0, 67.0, 70.0],
    [45.0, 55.0, 80.0],
    [45.0, 53.0, 90.0],
    [45.0, 51.0, 100.0],
    [45.0, 59.0, 110.0],
    [45.0, 57.0, 120.0],
    [45.0, 64.0, 130.0],
    [45.0, 69.0, 140.0],
    [45.0, 75.0, 150.0],
    [45.0, 76.0, 160.0],
    [45.0, 70.0, 170.0],
    [45.0, 69.0, 180.0],
    [45.0, 59.0, 190.0],
    [45.0, 46.0, 200.0],
    [45.0, 49.0, 210.0],
    [45.0, 45.0, 220.0],
    [45.0, 49.0, 230.0],
    [45.0, 49.0, 240.0],
    [45.0, 55.0, 250.0],
    [45.0, 55.0, 260.0],
    [45.0, 60.0, 270.0],
    [45.0, 60.0, 280.0],
    [45.0, 65.0, 290.0],
    [45.0, 64.0, 300.0],
    [45.0, 71.0, 310.0],
    [45.0, 82.0, 320.0],
    [45.0, 86.0, 330.0],
    [45.0, 87.0, 340.0],
    [45.0, 82.0, 350.0],
    [50.0, 77.0, 0.0],
    [50.0, 73.0, 10.0],
    [50.0, 76.0, 20.0],
    [50.0, 83.0, 30.0],
    [50.0, 93.0, 40.0],
    [50.0, 100.0, 50.0],
    [50.0, 82.0, 60.0],
    [50.0, 76.0, 70.0],
    [50.0, 64.0, 80.0],
    [50.0, 60.0, 90.0],
    [50.0, 58.0, 100.0],
    [50.0, 66.0, 110.0],
    [50.0, 64.0, 120.0],
    [50.0, 70.0, 130.0],
    [50.0, 76.0, 140.0],
    [50.0, 81.0, 150.0],
    [50.0, 82.0, 160.0],
    [50.0, 75.0, 170.0],
    [50.0, 71.0, 180.0],
    [50.0, 62.0, 190.0],
    [50.0, 46.0, 200.0],
    [50.0, 51.0, 210.0],
    [50.0, 48.0, 220.0],
    [50.0, 51.0, 230.0],
    [50.0, 50.0, 240.0],
    [50.0, 55.0, 250.0],
    [50.0, 56.0, 260.0],
    [50.0, 57.0, 270.0],
    [50.0, 57.0, 280.0],
    [50.0, 58.0, 290.0],
    [50.0, 57.0, 300.0],
    [50.0, 62.0, 310.0],
    [50.0, 74.0, 320.0],
    [50.0, 80.0, 330.0],
    [50.0, 83.0, 340.0],
    [50.0, 84.0, 350.0],
    [55.0, 72.0, 0.0],
    [55.0, 71.0, 10.0],
    [55.0, 74.0, 20.0],
    [55.0, 80.0, 30.0],
    [55.0, 88.0, 40.0],
    [55.0, 102.0, 50.0],
    [55.0, 93.0, 60.0],
    [55.0, 85.0, 70.0],
    [55.0, 72.0, 80.0],
    [55.0, 68.0, 90.0],
    [55.0, 65.0, 100.0],
    [55.0, 74.0, 110.0],
    [55.0, 71.0, 120.0],
    [55.0, 77.0, 130.0],
    [55.0, 82.0, 140.0],
    [55.0, 84.0, 150.0],
    [55.0, 85.0, 160.0],
    [55.0, 76.0, 170.0],
    [55.0, 72.0, 180.0],
    [55.0, 62.0, 190.0],
    [55.0, 45.0, 200.0],
    [55.0, 54.0, 210.0],
    [55.0, 51.0, 220.0],
    [55.0, 52.0, 230.0],
    [55.0, 50.0, 240.0],
    [55.0, 52.0, 250.0],
    [55.0, 51.0, 260.0],
    [55.0, 50.0, 270.0],
    [55.0, 53.0, 280.0],
    [55.0, 50.0, 290.0],
    [55.0, 50.0, 300.0],
    [55.0, 55.0, 310.0],
    [55.0, 66.0, 320.0],
    [55.0, 72.0, 330.0],
    [55.0, 78.0, 340.0],
    [55.0, 79.0, 350.0],
    [60.0, 65.0, 0.0],
    [60.0, 65.0, 10.0],
    [60.0, 68.0, 20.0],
    [60.0, 75.0, 30.0],
    [60.0, 82.0, 40.0],
    [60.0, 99.0, 50.0],
    [60.0, 103.0, 60.0],
    [60.0, 94.0, 70.0],
    [60.0, 82.0, 80.0],
    [60.0, 75.0, 90.0],
    [60.0, 72.0, 100.0],
    [60.0, 82.0, 110.0],
    [60.0, 78.0, 120.0],
    [60.0, 82.0, 130.0],
    [60.0, 87.0, 140.0],
    [60.0, 84.0, 150.0],
    [60.0, 83.0, 160.0],
    [60.0, 75.0, 170.0],
    [60.0, 69.0, 180.0],
    [60.0, 60.0, 190.0],
    [60.0, 43.0, 200.0],
    [60.0, 50.0, 210.0],
    [60.0, 49.0, 220.0],
    [60.0, 50.0, 230.0],
    [60.0, 47.0, 240.0],
    [60.0, 48.0, 250.0],
    [60.0, 46.0, 260.0],
    [60.0, 45.0, 270.0],
    [60.0, 46.0, 280.0],
    [60.0, 43.0, 290.0],
    [60.0, 42.0, 300.0],
    [60.0, 47.0, 310.0],
    [60.0, 57.0, 320.0],
    [60.0, 63.0, 330.0],
    [60.0, 71.0, 340.0],
    [60.0, 73.0, 350.0],
    [65.0, 57.0, 0.0],
    [65.0, 57.0, 10.0],
    [65.0, 61.0, 20.0],
    [65.0, 67.0, 30.0],
    [65.0, 72.0, 40.0],
    [65.0, 88.0, 50.0],
    [65.0, 106.0, 60.0],
    [65.0, 102.0, 70.0],
    [65.0, 94.0, 80.0],
    [65.0, 83.0, 90.0],
    [65.0, 80.0, 100.0],
    [65.0, 87.0, 110.0],
    [65.0, 84.0, 120.0],
    [65.0, 85.0, 130.0],
    [65.0, 89.0, 140.0],
    [65.0, 83.0, 150.0],
    [65.0, 78.0, 160.0],
    [65.0, 71.0, 170.0],
    [65.0, 64.0, 180.0],
    [65.0, 55.0, 190.0],
    [65.0, 39.0, 200.0],
    [65.0, 46.0, 210.0],
    [65.0, 45.0, 220.0],
    [65.0, 45.0, 230.0],
    [65.0, 42.0, 240.0],
    [65.0, 43.0, 250.0],
    [65.0, 40.0, 260.0],
    [65.0, 39.0, 270.0],
    [65.0, 40.0, 280.0],
    [65.0, 36.0, 290.0],
    [65.0, 35.0, 300.0],
    [65.0, 41.0, 310.0],
    [65.0, 48.0, 320.0],
    [65.0, 54.0, 330.0],
    [65.0, 62.0, 340.0],
    [65.0, 63.0, 350.0],
    [70.0, 50.0, 0.0],
    [70.0, 48.0, 10.0],
    [70.0, 51.0, 20.0],
    [70.0, 56.0, 30.0],
    [70.0, 60.0, 40.0],
    [70.0, 75.0, 50.0],
    [70.0, 98.0, 60.0],
    [70.0, 108.0, 70.0],
    [70.0, 105.0, 80.0],
    [70.0, 90.0, 90.0],
    [70.0, 86.0, 100.0],
    [70.0, 92.0, 110.0],
    [70.0, 90.0, 120.0],
    [70.0, 88.0, 130.0],
    [70.0, 90.0, 140.0],
    [70.0, 80.0, 150.0],
    [70.0, 69.0, 160.0],
    [70.0, 65.0, 170.0],
    [70.0, 60.0, 180.0],
    [70.0, 49.0, 190.0],
    [70.0, 35.0, 200.0],
    [70.0, 40.0, 210.0],
    [70.0, 38.0, 220.0],
    [70.0, 39.0, 230.0],
    [70.0, 36.0, 240.0],
    [70.0, 36.0, 250.0],
    [70.0, 33.0, 260.0],
    [70.0, 33.0, 270.0],
    [70.0, 34.0, 280.0],
    [70.0, 29.0, 290.0],
    [70.0, 30.0, 300.0],
    [70.0, 34.0, 310.0],
    [70.0, 40.0, 320.0],
    [70.0, 45.0, 330.0],
    [70.0, 51.0, 340.0],
    [70.0, 53.0, 350.0],
    [75.0, 40.0, 0.0],
    [75.0, 39.0, 10.0],
    [75.0, 40.0, 20.0],
    [75.0, 45.0, 30.0],
    [75.0, 47.0, 40.0],
    [75.0, 59.0, 50.0],
    [75.0, 85.0, 60.0],
    [75.0, 103.0, 70.0],
    [75.0, 115.0, 80.0],
    [75.0, 98.0, 90.0],
    [75.0, 94.0, 100.0],
    [75.0, 95.0, 110.0],
    [75.0, 94.0, 120.0],
    [75.0, 89.0, 130.0],
    [75.0, 83.0, 140.0],
    [75.0, 72.0, 150.0],
    [75.0, 59.0, 160.0],
    [75.0, 57.0, 170.0],
    [75.0, 51.0, 180.0],
    [75.0, 41.0, 190.0],
    [75.0, 30.0, 200.0],
    [75.0, 32.0, 210.0],
    [75.0, 32.0, 220.0],
    [75.0, 32.0, 230.0],
    [75.0, 29.0, 240.0],
    [75.0, 29.0, 250.0],
    [75.0, 27.0, 260.0],
    [75.0, 26.0, 270.0],
    [75.0, 25.0, 280.0],
    [75.0, 24.0, 290.0],
    [75.0, 24.0, 300.0],
    [75.0, 27.0, 310.0],
    [75.0, 31.0, 320.0],
    [75.0, 36.0, 330.0],
    [75.0, 40.0, 340.0],
    [75.0, 40.0, 350.0],
    [80.0, 30.0, 0.0],
    [80.0, 30.0, 10.0],
    [80.0, 30.0, 20.0],
    [80.0, 33.0, 30.0],
    [80.0, 35.0, 40.0],
    [80.0, 45.0, 50.0],
    [80.0, 66.0, 60.0],
    [80.0, 82.0, 70.0],
    [80.0, 115.0, 80.0],
    [80.0, 106.0, 90.0],
    [80.0, 100.0, 100.0],
    [80.0, 100.0, 110.0],
    [80.0, 95.0, 120.0],
    [80.0, 84.0, 130.0],
    [80.0, 71.0, 140.0],
    [80.0, 58.0, 150.0],
    [80.0, 49.0, 160.0],
    [80.0, 45.0, 170.0],
    [80.0, 41.0, 180.0],
    [80.0, 32.0, 190.0],
    [80.0, 22.0, 200.0],
    [80.0, 24.0, 210.0],
    [80.0, 23.0, 220.0],
    [80.0, 24.0, 230.0],
    [80.0, 21.0, 240.0],
    [80.0, 21.0, 250.0],
    [80.0, 20.0, 260.0],
    [80.0, 20.0, 270.0],
    [80.0, 18.0, 280.0],
    [80.0, 18.0, 290.0],
    [80.0, 17.0, 300.0],
    [80.0, 20.0, 310.0],
    [80.0, 24.0, 320.0],
    [80.0, 27.0, 330.0],
    [80.0, 28.0, 340.0],
    [80.0, 30.0, 350.0],
    [85.0, 19.0, 0.0],
    [85.0, 18.0, 10.0],
    [85.0, 19.0, 20.0],
    [85.0, 21.0, 30.0],
    [85.0, 22.0, 40.0],
    [85.0, 30.0, 50.0],
    [85.0, 45.0, 60.0],
    [85.0, 58.0, 70.0],
    [85.0, 83.0, 80.0],
    [85.0, 111.0, 90.0],
    [85.0, 106.0, 100.0],
    [85.0, 96.0, 110.0],
    [85.0, 83.0, 120.0],
    [85.0, 64.0, 130.0],
    [85.0, 54.0, 140.0],
    [85.0, 44.0, 150.0],
    [85.0, 34.0, 160.0],
    [85.0, 30.0, 170.0],
    [85.0, 29.0, 180.0],
    [85.0, 23.0, 190.0],
    [85.0, 14.0, 200.0],
    [85.0, 14.0, 210.0],
    [85.0, 15.0, 220.0],
    [85.0, 15.0, 230.0],
    [85.0, 12.0, 240.0],
    [85.0, 13.0, 250.0],
    [85.0, 13.0, 260.0],
    [85.0, 13.0, 270.0],
    [85.0, 11.0, 280.0],
    [85.0, 12.0, 290.0],
    [85.0, 12.0, 300.0],
    [85.0, 14.0, 310.0],
    [85.0, 16.0, 320.0],
    [85.0, 18.0, 330.0],
    [85.0, 18.0, 340.0],
    [85.0, 17.0, 350.0],
    [90.0, 8.0, 0.0],
    [90.0, 7.0, 10.0],
    [90.0, 9.0, 20.0],
    [90.0, 10.0, 30.0],
    [90.0, 10.0, 40.0],
    [90.0, 15.0, 50.0],
    [90.0, 23.0, 60.0],
    [90.0, 34.0, 70.0],
    [90.0, 48.0, 80.0],
    [90.0, 90.0, 90.0],
    [90.0, 108.0, 100.0],
    [90.0, 84.0, 110.0],
    [90.0, 50.0, 120.0],
    [90.0, 35.0, 130.0],
    [90.0, 30.0, 140.0],
    [90.0, 20.0, 150.0],
    [90.0, 15.0, 160.0],
    [90.0, 15.0, 170.0],
    [90.0, 16.0, 180.0],
    [90.0, 13.0, 190.0],
    [90.0, 7.0, 200.0],
    [90.0, 4.0, 210.0],
    [90.0, 6.0, 220.0],
    [90.0, 7.0, 230.0],
    [90.0, 4.0, 240.0],
    [90.0, 4.0, 250.0],
    [90.0, 6.0, 260.0],
    [90.0, 6.0, 270.0],
    [90.0, 4.0, 280.0],
    [90.0, 5.0, 290.0],
    [90.0, 5.0, 300.0],
    [90.0, 6.0, 310.0],
    [90.0, 8.0, 320.0],
    [90.0, 9.0, 330.0],
    [90.0, 4.0, 340.0],
    [90.0, 6.0, 350.0],
];

/// Pointer's Gamut boundary as CIE xy chromaticity coordinates.
///
/// An ordered 32-vertex polygon; the last vertex connects back to the
/// first to close the boundary.
pub const POINTER_GAMUT_BOUNDARIES: [[f64; 2]; 32] = [
    [0.659, 0.316],
    [0.634, 0.351],
    [0.594, 0.391],
    [0.557, 0.427],
    [0.523, 0.462],
    [0.482, 0.491],
    [0.444, 0.515],
    [0.409, 0.546],
    [0.371, 0.558],
    [0.332, 0.573],
    [0.288, 0.584],
    [0.242, 0.576],
    [0.202, 0.530],
    [0.177, 0.454],
    [0.151, 0.389],
    [0.151, 0.330],
    [0.162, 0.295],
    [0.157, 0.266],
    [0.159, 0.245],
    [0.142, 0.214],
    [0.141, 0.195],
    [0.129, 0.168],
    [0.138, 0.141],
    [0.145, 0.129],
    [0.145, 0.106],
    [0.161, 0.094],
    [0.188, 0.084],
    [0.252, 0.104],
    [0.324, 0.127],
    [0.393, 0.165],
    [0.451, 0.199],
    [0.508, 0.226],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illuminant_resolves_to_sc() {
        let xy = pointer_gamut_illuminant().unwrap();
        assert_eq!(xy, (0.31006, 0.31616));
    }

    #[test]
    fn test_data_covers_lightness_hue_grid() {
        // 16 L* planes x 36 hue angles
        assert_eq!(POINTER_GAMUT_DATA.len(), 576);
        assert_eq!(POINTER_GAMUT_DATA[0], [15.0, 10.0, 0.0]);
        assert_eq!(POINTER_GAMUT_DATA[575], [90.0, 6.0, 350.0]);

        for (i, [l, c, h]) in POINTER_GAMUT_DATA.iter().enumerate() {
            assert_eq!(*l, 15.0 + 5.0 * (i / 36) as f64);
            assert_eq!(*h, 10.0 * (i % 36) as f64);
            assert!(*c >= 0.0);
        }
    }

    #[test]
    fn test_boundary_is_plausible_chromaticity() {
        assert_eq!(POINTER_GAMUT_BOUNDARIES.len(), 32);
        for [x, y] in POINTER_GAMUT_BOUNDARIES {
            assert!(x > 0.0 && x < 0.75, "x out of range: {x}");
            assert!(y > 0.0 && y < 0.65, "y out of range: {y}");
        }
    }
}
