//! Color tool commands.

use clap::{Args, Subcommand};
use serde_json::json;
use std::path::PathBuf;

use crate::cli::common::{load_config, print_json, CliError, CliResult, OutputArgs};
use crate::models::RgbColor;
use crate::services::{image, ContentKind};
use crate::tools::color::{
    blindness::{self, Deficiency},
    contrast, extract,
    gradient::{Gradient, GradientKind},
    palette::{self, PaletteScheme},
    parse_color, ColorFormats,
};

/// Color conversion, palettes, gradients and accessibility
#[derive(Debug, Clone, Args)]
pub struct ColorArgs {
    /// Color subcommand
    #[command(subcommand)]
    pub command: ColorCommand,
}

/// Color subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ColorCommand {
    /// Show a color as HEX, RGB, HSL, HSV and CMYK
    Convert(ConvertColorArgs),
    /// Build a palette from a base color
    Palette(PaletteArgs),
    /// Build a CSS gradient
    Gradient(GradientArgs),
    /// Find the dominant colors of a PNG image
    Extract(ExtractArgs),
    /// Simulate color vision deficiencies
    Blindness(BlindnessArgs),
    /// Check the WCAG contrast ratio of two colors
    Contrast(ContrastArgs),
}

impl ColorArgs {
    /// Execute the color command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ColorCommand::Convert(args) => args.execute(),
            ColorCommand::Palette(args) => args.execute(),
            ColorCommand::Gradient(args) => args.execute(),
            ColorCommand::Extract(args) => args.execute(),
            ColorCommand::Blindness(args) => args.execute(),
            ColorCommand::Contrast(args) => args.execute(),
        }
    }
}

fn hex_list(colors: &[RgbColor]) -> Vec<String> {
    colors.iter().map(RgbColor::to_hex).collect()
}

/// Color conversion
#[derive(Debug, Clone, Args)]
pub struct ConvertColorArgs {
    /// Color: #RRGGBB, #RGB, rgb(), hsl(), hsv(), cmyk() or a CSS name
    #[arg(value_name = "COLOR")]
    color: String,

    #[command(flatten)]
    output: OutputArgs,
}

impl ConvertColorArgs {
    fn execute(&self) -> CliResult<()> {
        let formats = ColorFormats::from(parse_color(&self.color)?);
        let text = format!(
            "HEX:  {}\nRGB:  {}\nHSL:  {}\nHSV:  {}\nCMYK: {}",
            formats.hex, formats.rgb, formats.hsl, formats.hsv, formats.cmyk
        );
        self.output.emit(&text, &formats, ContentKind::PlainText)
    }
}

/// Palette generation
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Base color
    #[arg(value_name = "COLOR")]
    color: String,

    /// Scheme: complementary, analogous, triadic, tetradic,
    /// split-complementary, monochromatic, shades
    #[arg(long, default_value = "analogous")]
    scheme: PaletteScheme,

    /// Number of colors (defaults to the configured palette size)
    #[arg(long)]
    size: Option<usize>,

    /// Print CSS custom properties instead of a list
    #[arg(long)]
    css: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl PaletteArgs {
    fn execute(&self) -> CliResult<()> {
        let base = parse_color(&self.color)?;
        let size = match self.size {
            Some(size) => size,
            None => load_config()?.tools.palette_size,
        };
        let colors = palette::generate(base, self.scheme, size)?;
        let css = palette::to_css(&colors);
        let hexes = hex_list(&colors);

        if self.output.json {
            print_json(&json!({ "scheme": self.scheme, "colors": hexes, "css": css }))?;
        } else if self.css {
            print!("{css}");
        } else {
            for hex in &hexes {
                println!("{hex}");
            }
        }
        self.output.deliver(&css, ContentKind::Css)
    }
}

/// Gradient generation
#[derive(Debug, Clone, Args)]
pub struct GradientArgs {
    /// Two or more colors, spread evenly
    #[arg(value_name = "COLOR", num_args = 1.., required = true)]
    colors: Vec<String>,

    /// Radial instead of linear
    #[arg(long)]
    radial: bool,

    /// Direction of a linear gradient in degrees
    #[arg(long, default_value_t = 90.0, allow_negative_numbers = true)]
    angle: f64,

    /// Also list this many interpolated colors
    #[arg(long, value_name = "N")]
    samples: Option<usize>,

    #[command(flatten)]
    output: OutputArgs,
}

impl GradientArgs {
    fn execute(&self) -> CliResult<()> {
        let colors = self
            .colors
            .iter()
            .map(|c| parse_color(c))
            .collect::<Result<Vec<_>, _>>()?;
        let kind = if self.radial {
            GradientKind::Radial
        } else {
            GradientKind::Linear { angle: self.angle }
        };
        let gradient = Gradient::evenly_spaced(kind, &colors)?;
        let css = gradient.to_css();
        let samples = self.samples.map(|n| hex_list(&gradient.sample(n)));

        if self.output.json {
            print_json(&json!({ "css": css, "gradient": gradient, "samples": samples }))?;
        } else {
            println!("{css}");
            if let Some(samples) = &samples {
                println!();
                for hex in samples {
                    println!("{hex}");
                }
            }
        }
        self.output.deliver(&css, ContentKind::Css)
    }
}

/// Dominant colors
#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// PNG image
    #[arg(value_name = "IMAGE")]
    image: PathBuf,

    /// Number of colors
    #[arg(long, default_value_t = 5)]
    colors: usize,

    #[command(flatten)]
    output: OutputArgs,
}

impl ExtractArgs {
    fn execute(&self) -> CliResult<()> {
        let img = image::read_png(&self.image).map_err(|e| CliError::service(&e))?;
        let dominant = extract::extract(&img.pixels, self.colors)?;

        let text = dominant
            .iter()
            .map(|d| format!("{}  {:>5.1}%", d.color.to_hex(), d.percentage))
            .collect::<Vec<_>>()
            .join("\n");
        let body: Vec<_> = dominant
            .iter()
            .map(|d| json!({ "color": d.color.to_hex(), "percentage": d.percentage }))
            .collect();
        self.output.emit(&text, &body, ContentKind::PlainText)
    }
}

/// Color vision deficiency simulation
#[derive(Debug, Clone, Args)]
pub struct BlindnessArgs {
    /// Color to simulate (omit when using --image)
    #[arg(value_name = "COLOR", required_unless_present = "image")]
    color: Option<String>,

    /// Deficiency; every kind when omitted
    #[arg(long)]
    kind: Option<Deficiency>,

    /// PNG image to transform
    #[arg(long, value_name = "PNG", conflicts_with = "color", requires = "out")]
    image: Option<PathBuf>,

    /// Where to write the transformed PNG
    #[arg(long, value_name = "PNG")]
    out: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl BlindnessArgs {
    fn execute(&self) -> CliResult<()> {
        if let (Some(input), Some(out)) = (&self.image, &self.out) {
            let kind = self.kind.ok_or_else(|| {
                CliError::validation("--kind is required when simulating an image")
            })?;
            let mut img = image::read_png(input).map_err(|e| CliError::service(&e))?;
            blindness::simulate_pixels(&mut img.pixels, kind);
            image::write_png(out, &img).map_err(|e| CliError::service(&e))?;
            println!("Wrote {} ({kind})", out.display());
            return Ok(());
        }

        let Some(color) = &self.color else {
            return Err(CliError::validation("Pass a COLOR or --image"));
        };
        let color = parse_color(color)?;
        let kinds: Vec<Deficiency> = match self.kind {
            Some(kind) => vec![kind],
            None => Deficiency::ALL.to_vec(),
        };
        let results: Vec<(Deficiency, String)> = kinds
            .into_iter()
            .map(|kind| (kind, blindness::simulate(color, kind).to_hex()))
            .collect();

        if self.json {
            let body: Vec<_> = results
                .iter()
                .map(|(kind, hex)| json!({ "kind": kind, "color": hex }))
                .collect();
            return print_json(&json!({ "original": color.to_hex(), "simulated": body }));
        }

        println!("{:<14} {}", "original", color.to_hex());
        for (kind, hex) in &results {
            println!("{kind:<14} {hex}");
        }
        Ok(())
    }
}

/// WCAG contrast
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// Text color
    #[arg(value_name = "FOREGROUND")]
    foreground: String,

    /// Background color
    #[arg(value_name = "BACKGROUND")]
    background: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl ContrastArgs {
    fn execute(&self) -> CliResult<()> {
        let report = contrast::contrast(parse_color(&self.foreground)?, parse_color(&self.background)?);

        if self.json {
            return print_json(&json!({
                "foreground": report.foreground.to_hex(),
                "background": report.background.to_hex(),
                "ratio": report.ratio,
                "aa_normal": report.aa_normal,
                "aa_large": report.aa_large,
                "aaa_normal": report.aaa_normal,
                "aaa_large": report.aaa_large,
            }));
        }

        let mark = |pass: bool| if pass { "pass" } else { "fail" };
        println!("Contrast ratio: {:.2}:1", report.ratio);
        println!("AA normal text:  {}", mark(report.aa_normal));
        println!("AA large text:   {}", mark(report.aa_large));
        println!("AAA normal text: {}", mark(report.aaa_normal));
        println!("AAA large text:  {}", mark(report.aaa_large));
        Ok(())
    }
}
