use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use libaster::alphabet::Alphabet;
use libaster::simulate::random_sequences;

use crate::args::SimulateArgs;
use crate::extension_traits::open_output;

#[derive(Serialize)]
struct SimulatedRecord {
    name: String,
    sequence: String,
}

pub fn simulate(args: &SimulateArgs) -> Result<()> {
    let alphabet = Alphabet::dna();
    let seqs = random_sequences(args.count, args.length, &alphabet, args.seed);

    let mut out = open_output(&args.output_args.outfile_path, args.output_args.allow_overwrite)?;

    if args.output_args.json {
        let records: Vec<SimulatedRecord> = seqs
            .iter()
            .map(|seq| {
                Ok(SimulatedRecord {
                    name: seq.name.clone(),
                    sequence: alphabet.decode(&seq.codes)?,
                })
            })
            .collect::<Result<_>>()?;

        serde_json::to_writer_pretty(&mut out, &records)?;
        writeln!(out)?;
    } else {
        for seq in &seqs {
            writeln!(out, "{seq}")?;
        }
    }

    Ok(())
}
