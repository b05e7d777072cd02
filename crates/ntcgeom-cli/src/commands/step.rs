use super::{alt_label, format_metrics, load_structure, select_steps, write_structure};
use crate::cli::{ApplyArgs, ConnectivityArgs, StepArgs};
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use ntcgeom::engine::connectivity::Connectivity;
use ntcgeom::engine::measure::{measure_nu_angles, measure_step, pseudorotation};
use ntcgeom::core::models::step::StepResidue;
use ntcgeom::engine::error::NtcError;
use ntcgeom::workflows::analysis::{self, AltConfConnectivities};
use ntcgeom::workflows::steps::{AltConfStep, extract_step};
use std::fmt::Write;
use tracing::info;

pub fn measure(args: StepArgs) -> Result<()> {
    let structure = load_structure(&args.input)?;
    for step in select_steps(&structure, &args)? {
        print!("{}", describe_measurement(&step)?);
    }
    Ok(())
}

fn describe_measurement(step: &AltConfStep) -> std::result::Result<String, NtcError> {
    let metrics = measure_step(&step.step)?;
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", step.step, alt_label(step));
    out.push_str(&format_metrics(&metrics));
    for (label, which) in [("P (first)", StepResidue::First), ("P (second)", StepResidue::Second)] {
        let nu = measure_nu_angles(&step.step, which)?;
        let _ = writeln!(out, "  {:<10} {:>9.2}", label, pseudorotation(&nu));
    }
    Ok(out)
}

pub fn apply(args: ApplyArgs, config: &AppConfig) -> Result<()> {
    let mut structure = load_structure(&args.step.input)?;
    let selected = select_steps(&structure, &args.step)?;
    let step = match selected.as_slice() {
        [only] => only,
        _ => {
            return Err(CliError::Argument(format!(
                "{} alternate conformation combinations match; choose one with --alt1/--alt2",
                selected.len()
            )));
        }
    };

    let moved = analysis::apply_conformer_to_structure(&mut structure, step, &args.ntc, &config.reshape())?;
    info!("Moved {} atom(s)", moved);

    let check = extract_step(&structure, step.first_residue, step.altconf1, step.altconf2)?;
    let reached = measure_step(&check.step).map_err(NtcError::from)?;
    println!("{} reshaped to {}", check.step, args.ntc);
    print!("{}", format_metrics(&reached));

    write_structure(&structure, &args.output)?;
    println!("Structure written to: {}", args.output.display());
    Ok(())
}

pub fn similarity(args: StepArgs, config: &AppConfig) -> Result<()> {
    let structure = load_structure(&args.input)?;
    let reshape = config.reshape();
    for step in select_steps(&structure, &args)? {
        let mut similarities = analysis::measure_similarities(&step.step, &reshape)?;
        similarities.sort_by(|a, b| a.rmsd.total_cmp(&b.rmsd));

        println!("{} [{}]", step.step, alt_label(&step));
        println!("  {:<6} {:>8} {:>10}", "NtC", "RMSD", "distance");
        for similarity in similarities {
            println!(
                "  {:<6} {:>8.3} {:>10.2}",
                similarity.ntc, similarity.rmsd, similarity.euclidean_distance
            );
        }
    }
    Ok(())
}

pub fn connectivity(args: ConnectivityArgs, config: &AppConfig) -> Result<()> {
    let structure = load_structure(&args.step.input)?;
    let reshape = config.reshape();
    for step in select_steps(&structure, &args.step)? {
        let result = analysis::measure_connectivity(&args.ntc, &step, &structure, &reshape)?;
        println!("{} [{}] as {}", step.step, alt_label(&step), args.ntc);
        print!("{}", format_side("previous", &result.previous, args.top));
        print!("{}", format_side("next", &result.next, args.top));
    }
    Ok(())
}

/// Lists the connectivities of one side, best joining conformers first.
fn format_side(side: &str, entries: &[AltConfConnectivities], top: Option<usize>) -> String {
    let mut out = String::new();
    if entries.is_empty() {
        let _ = writeln!(out, "  {}: no neighboring step", side);
        return out;
    }
    for entry in entries {
        let alt = entry.altconf.map(String::from).unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "  {} [{}]", side, alt);

        let mut ranked: Vec<&Connectivity> = entry.connectivities.iter().collect();
        ranked.sort_by(|a, b| gap(a).total_cmp(&gap(b)));
        for connectivity in ranked.into_iter().take(top.unwrap_or(usize::MAX)) {
            let _ = writeln!(
                out,
                "    {:<6} C5' {:>7.3}  O3' {:>7.3}",
                connectivity.ntc, connectivity.c5_distance, connectivity.o3_distance
            );
        }
    }
    out
}

fn gap(connectivity: &Connectivity) -> f64 {
    connectivity.c5_distance + connectivity.o3_distance
}
