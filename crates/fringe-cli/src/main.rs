//! Grayscale hologram synthesis from the command line.
//!
//! Loads a PNG, synthesizes a hologram with the selected method, and
//! writes the result as an 8-bit grayscale PNG:
//!
//! ```text
//! fringe --method fourier --image object.png --out hologram.png
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use fringe::core::Grid;
use fringe::prelude::*;
use image::imageops::FilterType;
use image::{GrayImage, Luma};

const USAGE: &str = "\
Usage: fringe --image IN.png [OPTIONS]

Options:
  --method METHOD     fourier | fresnel | kinoform   (default: fourier)
  --image PATH        input grayscale image (required)
  --out PATH          output hologram PNG            (default: hologram.png)
  --z METERS          propagation distance           (default: 0.05)
  --wavelength METERS illumination wavelength        (default: 632.8e-9)
  --pixel-size METERS hologram pixel pitch           (default: 10e-6)
  --size N            hologram side length in pixels (default: 512)
  --angle A           off-axis reference tilt        (default: 0.15 fourier,
                                                      0.1 fresnel)";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Method {
    Fourier,
    Fresnel,
    Kinoform,
}

struct Options {
    method: Method,
    image: PathBuf,
    out: PathBuf,
    z_distance: f64,
    wavelength: f64,
    pixel_pitch: f64,
    size: usize,
    angle: Option<f64>,
}

fn main() -> ExitCode {
    env_logger::init();

    let opts = match parse_args(std::env::args().skip(1)) {
        Ok(Some(opts)) => opts,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(opts: &Options) -> Result<(), Box<dyn std::error::Error>> {
    let object = load_object(&opts.image, opts.size)?;
    log::info!(
        "loaded {} as {n}x{n} object",
        opts.image.display(),
        n = opts.size
    );

    let hologram = match opts.method {
        Method::Fourier => {
            let angle = opts.angle.unwrap_or(FourierHolography::DEFAULT_REFERENCE_ANGLE);
            let (hologram, _) = synthesize_fourier_hologram(&object, angle)?;
            hologram.normalized()
        }
        Method::Fresnel => {
            let points = threshold_points(&object, opts.pixel_pitch);
            log::info!("thresholded object into {} points", points.len());
            FresnelSynthesis::builder()
                .wavelength(opts.wavelength)
                .z_distance(opts.z_distance)
                .pixel_pitch(opts.pixel_pitch)
                .size(opts.size)
                .reference_angle(
                    opts.angle.unwrap_or(FresnelSynthesis::DEFAULT_REFERENCE_ANGLE),
                )
                .build()?
                .synthesize(&points)
        }
        Method::Kinoform => kinoform(&object),
    };

    save_hologram(&hologram, &opts.out)?;
    log::info!("wrote {}", opts.out.display());
    Ok(())
}

/// Parse the argument list. `Ok(None)` means `--help` was requested.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<Options>, String> {
    let mut method = Method::Fourier;
    let mut image = None;
    let mut out = PathBuf::from("hologram.png");
    let mut z_distance = 0.05;
    let mut wavelength = 632.8e-9;
    let mut pixel_pitch = 10e-6;
    let mut size = 512usize;
    let mut angle = None;

    while let Some(flag) = args.next() {
        if flag == "--help" || flag == "-h" {
            return Ok(None);
        }
        let mut take = || {
            args.next()
                .ok_or_else(|| format!("{flag} requires a value"))
        };
        match flag.as_str() {
            "--method" => {
                method = match take()?.as_str() {
                    "fourier" => Method::Fourier,
                    "fresnel" => Method::Fresnel,
                    "kinoform" => Method::Kinoform,
                    other => return Err(format!("unknown method '{other}'")),
                }
            }
            "--image" => image = Some(PathBuf::from(take()?)),
            "--out" => out = PathBuf::from(take()?),
            "--z" => z_distance = parse_number(&flag, &take()?)?,
            "--wavelength" => wavelength = parse_number(&flag, &take()?)?,
            "--pixel-size" => pixel_pitch = parse_number(&flag, &take()?)?,
            "--size" => {
                let raw = take()?;
                size = raw
                    .parse()
                    .map_err(|_| format!("--size expects an integer, got '{raw}'"))?;
            }
            "--angle" => angle = Some(parse_number(&flag, &take()?)?),
            other => return Err(format!("unknown flag '{other}'")),
        }
    }

    let image = image.ok_or_else(|| "--image is required".to_string())?;
    Ok(Some(Options {
        method,
        image,
        out,
        z_distance,
        wavelength,
        pixel_pitch,
        size,
        angle,
    }))
}

fn parse_number(flag: &str, raw: &str) -> Result<f64, String> {
    raw.parse()
        .map_err(|_| format!("{flag} expects a number, got '{raw}'"))
}

/// Load a PNG, convert to grayscale, resize to `size` square, and map
/// 8-bit samples to `[0, 1]`.
fn load_object(path: &PathBuf, size: usize) -> Result<ObjectImage, Box<dyn std::error::Error>> {
    let luma = image::open(path)?.to_luma8();
    let n = size as u32;
    let resized = if luma.dimensions() == (n, n) {
        luma
    } else {
        image::imageops::resize(&luma, n, n, FilterType::Triangle)
    };
    Ok(ObjectImage::from_fn(size, |row, col| {
        f64::from(resized.get_pixel(col as u32, row as u32)[0]) / 255.0
    }))
}

/// Bright object samples (> 50% intensity) become an object-plane point
/// cloud at z = 0, on physical grid coordinates.
fn threshold_points(image: &ObjectImage, pixel_pitch: f64) -> PointCloud {
    let n = image.size();
    let coords = Grid::sample_axis(n);
    let mut cloud = PointCloud::new();
    for row in 0..n {
        for col in 0..n {
            if image.get(row, col) > 0.5 {
                cloud.push(Point3::new(
                    coords[col] * pixel_pitch,
                    coords[row] * pixel_pitch,
                    0.0,
                ));
            }
        }
    }
    cloud
}

/// Rescale `[0, 1]` intensities to 8-bit gray and write a PNG.
fn save_hologram(hologram: &Hologram, path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let n = hologram.size() as u32;
    let out = GrayImage::from_fn(n, n, |x, y| {
        let v = hologram.values()[(y as usize) * hologram.size() + x as usize];
        Luma([(v * 255.0).round().clamp(0.0, 255.0) as u8])
    });
    out.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Option<Options>, String> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_applied() {
        let opts = parse(&["--image", "in.png"]).unwrap().unwrap();
        assert!(opts.method == Method::Fourier);
        assert_eq!(opts.out, PathBuf::from("hologram.png"));
        assert_eq!(opts.size, 512);
        assert_eq!(opts.z_distance, 0.05);
        assert_eq!(opts.wavelength, 632.8e-9);
        assert_eq!(opts.pixel_pitch, 10e-6);
        assert_eq!(opts.angle, None);
    }

    #[test]
    fn missing_image_is_an_error() {
        assert!(parse(&["--method", "fourier"]).is_err());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(parse(&["--image", "in.png", "--frobnicate"]).is_err());
    }

    #[test]
    fn missing_value_is_an_error() {
        assert!(parse(&["--image", "in.png", "--size"]).is_err());
    }

    #[test]
    fn overrides_parsed() {
        let opts = parse(&[
            "--image",
            "obj.png",
            "--method",
            "fresnel",
            "--size",
            "128",
            "--angle",
            "0.2",
        ])
        .unwrap()
        .unwrap();
        assert!(opts.method == Method::Fresnel);
        assert_eq!(opts.size, 128);
        assert_eq!(opts.angle, Some(0.2));
    }

    #[test]
    fn help_short_circuits() {
        assert!(parse(&["--help"]).unwrap().is_none());
    }
}
