use std::{fs::File, io::BufReader};

use clap::Args;

use crate::instance::EmsrInstance;
use crate::protection::{emsr_a, emsr_b};
use crate::protection::emsr_a::pairwise_reserves;

#[derive(Debug, Args)]
pub struct Solve {
    /// The path to the instance file
    #[clap(short, long)]
    pub instance: String,
    /// If present, also print the EMSR-a pairwise reserve matrix
    #[clap(short, long)]
    pub matrix: bool,
}

impl Solve {
    pub fn solve(&self) {
        let instance: EmsrInstance = serde_json::from_reader(BufReader::new(File::open(&self.instance).unwrap())).unwrap();

        match emsr_a(&instance) {
            Ok(levels) => {
                if self.matrix {
                    for row in pairwise_reserves(&instance) {
                        println!("{row:?}");
                    }
                }
                println!("EMSR-a protection levels {levels:?}");
            },
            Err(e) => eprintln!("EMSR-a: {e}"),
        }

        match emsr_b(&instance) {
            Ok(levels) => println!("EMSR-b protection levels {levels:?}"),
            Err(e) => eprintln!("EMSR-b: {e}"),
        }
    }
}
