//! Minimal palette example: fit a curve through an anchor and list swatches.

use std::error::Error;

use superpalette::{DistributionRequest, EngineConfig, generate};

fn main() -> Result<(), Box<dyn Error>> {
    // snips-start: example
    // Anchor at 81% saturation, 78% value.
    let request = DistributionRequest::new(0.81, 0.78)
        .with_count(10)
        .with_black_white(true);
    let palette = generate(&request, &EngineConfig::default())?;
    println!("Fitted exponent: {:.3}", palette.exponent);

    for swatch in &palette.swatches {
        let (_, s, v) = swatch.main.hsv(0.0);
        println!(
            "{:>5}  arc {:.3}  S {s:5.1}%  V {v:5.1}%",
            swatch.label(),
            swatch.position.normalized_arc_length,
        );
    }
    // snips-end: example

    Ok(())
}
