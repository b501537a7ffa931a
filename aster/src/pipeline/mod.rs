mod align;
pub use align::{global_affine, global_linear};

mod msa;
pub use msa::{approx_msa, exact_msa, pairwise};

mod simulate;
pub use simulate::simulate;

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use thiserror::Error;

use libaster::align::structs::Msa;
use libaster::alphabet::Alphabet;
use libaster::scoring::Cost;
use libaster::structs::Sequence;

#[derive(Error, Debug)]
#[error("the scoring configuration does not define a {expected} gap model")]
pub struct GapModelMismatchError {
    pub expected: &'static str,
}

#[derive(Error, Debug)]
#[error("no fasta records in: {path}")]
pub struct EmptyFastaError {
    pub path: String,
}

/// The first record of a FASTA file.
pub(crate) fn first_record<P: AsRef<Path>>(path: P, alphabet: &Alphabet) -> Result<Sequence> {
    Sequence::from_fasta(&path, alphabet)?
        .into_iter()
        .next()
        .ok_or_else(|| {
            EmptyFastaError {
                path: path.as_ref().to_string_lossy().to_string(),
            }
            .into()
        })
}

#[derive(Serialize)]
struct CostReport {
    cost: Cost,
}

#[derive(Serialize)]
struct AlignmentReport {
    cost: Cost,
    records: Vec<RecordReport>,
}

#[derive(Serialize)]
struct RecordReport {
    name: String,
    alignment: String,
}

pub(crate) fn write_cost(out: &mut dyn Write, json: bool, cost: Cost) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &CostReport { cost })?;
        writeln!(out)?;
    } else {
        writeln!(out, "; The optimal cost of this alignment is {cost}")?;
    }

    Ok(())
}

pub(crate) fn write_msa(
    out: &mut dyn Write,
    json: bool,
    msa: &Msa,
    names: &[String],
    alphabet: &Alphabet,
) -> Result<()> {
    if json {
        let records = names
            .iter()
            .zip(msa.alignment.to_strings(alphabet)?)
            .map(|(name, alignment)| RecordReport {
                name: name.clone(),
                alignment,
            })
            .collect();

        serde_json::to_writer_pretty(
            &mut *out,
            &AlignmentReport {
                cost: msa.cost,
                records,
            },
        )?;
        writeln!(out)?;
    } else {
        write_cost(out, false, msa.cost)?;
        for (row, name) in names.iter().enumerate() {
            let record = Sequence::from_codes(msa.alignment.row(row).to_vec(), alphabet)?
                .named(name);
            writeln!(out, "{record}")?;
        }
    }

    Ok(())
}
