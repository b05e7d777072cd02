use super::format_metrics;
use crate::cli::{ConformersArgs, ConformersCommands};
use crate::error::{CliError, Result};
use ntcgeom::core::conformers::{self, NTC_CLASSES, NtC};
use std::fmt::Write;

pub fn run(args: ConformersArgs) -> Result<()> {
    let output = match args.command {
        ConformersCommands::List { class } => list(class.as_deref())?,
        ConformersCommands::Show { name } => show(&name)?,
    };
    print!("{}", output);
    Ok(())
}

fn list(class: Option<&str>) -> Result<String> {
    let selected: Vec<&NtC> = match class {
        Some(class) => {
            let class = class.trim().to_ascii_uppercase();
            if !NTC_CLASSES.contains(&class.as_str()) {
                return Err(CliError::Argument(format!(
                    "Unknown conformer class '{}'. Known classes: {}",
                    class,
                    NTC_CLASSES.join(", ")
                )));
            }
            conformers::conformers_of_class(&class)
        }
        None => conformers::all().iter().collect(),
    };

    let mut out = String::new();
    for ntc in selected {
        let _ = writeln!(out, "{:<6} {}", ntc.name, ntc.class());
    }
    Ok(out)
}

fn show(name: &str) -> Result<String> {
    let ntc = conformers::lookup(name)
        .ok_or_else(|| CliError::Argument(format!("Unknown NtC conformer '{}'", name)))?;

    let mut out = String::new();
    let _ = writeln!(out, "{} (class {})", ntc.name, ntc.class());
    out.push_str(&format_metrics(&ntc.metrics));
    for (label, nu) in [("nu (first)", ntc.nu_first), ("nu (second)", ntc.nu_second)] {
        let values: Vec<_> = nu.iter().map(|v| format!("{:.1}", v)).collect();
        let _ = writeln!(out, "  {:<10} {}", label, values.join(" "));
    }
    Ok(out)
}
