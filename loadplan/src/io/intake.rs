use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Result, bail};
use log::{debug, info};
use stowage::entities::{Cargo, LoadInstance, TransportUnit};

/// Question and answer session that collects a transport unit and its cargo.
///
/// Unparsable answers are asked again. Input that parses but is rejected by
/// `stowage` (non-positive dimensions, inconsistent stacking) restarts the
/// current unit or pallet type. Reaching the end of the input is an error.
pub struct Intake<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Intake<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn read_instance(&mut self) -> Result<LoadInstance> {
        let unit = self.read_unit()?;
        let cargo = self.read_cargo()?;
        Ok(LoadInstance::new(unit, cargo))
    }

    pub fn read_unit(&mut self) -> Result<TransportUnit> {
        loop {
            let length = self.ask("Length of the transport unit (m): ")?;
            let width = self.ask("Width of the transport unit (m): ")?;
            let height = self.ask("Height of the transport unit (m): ")?;
            let max_weight = self.ask("Maximum payload of the transport unit (kg): ")?;
            match TransportUnit::try_new(length, width, height, max_weight) {
                Ok(unit) => return Ok(unit),
                Err(e) => writeln!(self.output, "{e}, please enter the unit again")?,
            }
        }
    }

    /// Collects pallet types until the user declines to add another one.
    pub fn read_cargo(&mut self) -> Result<Cargo> {
        let mut cargo = Cargo::new();
        loop {
            writeln!(self.output)?;
            let label = self.ask_line("Pallet type: ")?;
            let length = self.ask("Pallet length (m): ")?;
            let width = self.ask("Pallet width (m): ")?;
            let height = self.ask("Pallet height (m): ")?;
            let weight = self.ask("Pallet weight (kg): ")?;
            let stackable = self.ask_yes_no("Is it stackable (yes/no)? ")?;
            let stack_count = match stackable {
                true => self.ask("How many pallets can be stacked? ")?,
                false => 1,
            };
            let quantity = self.ask("Number of pallets of this type: ")?;

            match cargo.add_pallet_type(
                label, length, width, height, weight, stackable, quantity, stack_count,
            ) {
                Ok(pt) => debug!("[INTAKE] added {pt:?}"),
                Err(e) => {
                    writeln!(self.output, "{e}, please enter this pallet type again")?;
                    continue;
                }
            }

            if !self.ask_yes_no("Add another pallet type (yes/no)? ")? {
                break;
            }
        }
        info!("[INTAKE] collected {} pallet types", cargo.len());
        Ok(cargo)
    }

    fn ask_line(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input ended while waiting for an answer to {:?}", question.trim());
        }
        Ok(line.trim().to_string())
    }

    fn ask<T: FromStr>(&mut self, question: &str) -> Result<T> {
        loop {
            let answer = self.ask_line(question)?;
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "{answer:?} is not a valid number")?,
            }
        }
    }

    fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        loop {
            let answer = self.ask_line(question)?.to_lowercase();
            match answer.as_str() {
                "y" | "yes" | "s" | "si" | "sí" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "please answer yes or no")?,
            }
        }
    }
}
