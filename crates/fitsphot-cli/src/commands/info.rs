use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use fitsphot_core::detection::threshold::finite_range;
use fitsphot_core::io::load_fits;

#[derive(Args)]
pub struct InfoArgs {
    /// Input FITS file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let image = load_fits(&args.file)?;
    let header = &image.header;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", image.width(), image.height());
    println!("BITPIX:      {} ({:?})", image.bitpix.code(), image.bitpix);
    println!("Samples:     {:?}", image.sample_kind());

    if let Some(bzero) = header.bzero {
        println!("BZERO:       {}", bzero);
    }
    if let Some(bscale) = header.bscale {
        println!("BSCALE:      {}", bscale);
    }
    for (label, value) in [
        ("Object:", &header.object),
        ("Telescope:", &header.telescope),
        ("Instrument:", &header.instrument),
        ("Observed:", &header.date_obs),
    ] {
        if let Some(value) = value {
            println!("{:<13}{}", label, value);
        }
    }

    match finite_range(&image.data) {
        Some((lo, hi)) => println!("Range:       {} .. {}", lo, hi),
        None => println!("Range:       no finite samples"),
    }
    let blanks = image.data.iter().filter(|v| !v.is_finite()).count();
    if blanks > 0 {
        println!("Blank:       {} pixels", blanks);
    }

    Ok(())
}
