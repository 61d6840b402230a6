//! Computes the iBMB curve for a 4 m × 4 m office and saves it as a PNG.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example ibmb_curve --features plot -- ibmb_curve.png
//! ```

use std::{error::Error, path::PathBuf, process::ExitCode};

use ibmb_fire::{
    models::fire::ibmb::{Compartment, FireLoad, IbmbFire, IbmbInput, Openings, ThermalInertia},
    support::plot::RenderOptions,
};
use tracing_subscriber::EnvFilter;
use twine_core::Model;
use uom::si::{
    area::square_meter,
    energy::megajoule,
    f64::{Area, Energy, Length, ThermodynamicTemperature, Time},
    length::meter,
    thermodynamic_temperature::degree_celsius,
    time::second,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let save_path = std::env::args_os().nth(1).map(PathBuf::from);

    let input = IbmbInput {
        compartment: Compartment::new(
            Length::new::<meter>(4.0),
            Length::new::<meter>(4.0),
            Length::new::<meter>(3.0),
        )?,
        openings: Openings::new(1, Length::new::<meter>(3.2), Length::new::<meter>(2.5))?,
        fire_load: FireLoad::new(
            ThermodynamicTemperature::new::<degree_celsius>(20.0),
            Time::new::<second>(300.0),
            Energy::new::<megajoule>(511.0) / Area::new::<square_meter>(1.0),
            ThermalInertia::new(1500.0)?,
        )?,
    };

    let results = IbmbFire::default().call(&input)?;
    println!(
        "{} fire, {} samples, peak {:.0} °C",
        results.mode,
        results.curve.len(),
        results.temperatures.rise_end.get::<degree_celsius>()
    );

    let options = RenderOptions {
        show: save_path.is_none(),
        save_path,
        ..RenderOptions::default()
    };
    if let Some(path) = results.curve.render(&options)? {
        println!("chart written to {}", path.display());
    }

    Ok(())
}
