use std::{time::{SystemTime, UNIX_EPOCH}, fs::File, io::Write};

use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use rand_distr::{Uniform, Distribution};

use crate::instance::EmsrInstance;

#[derive(Debug, Args)]
pub struct EmsrGenerator {
    /// An optional seed to kickstart the instance generation
    #[clap(short='s', long)]
    seed: Option<u128>,
    /// The number of fare classes
    #[clap(short='k', long, default_value="4")]
    nb_classes: usize,
    /// The price of the highest fare class
    #[clap(long, default_value="1050")]
    top_price: f64,
    /// The price of the lowest fare class
    #[clap(long, default_value="520")]
    bottom_price: f64,
    /// The largest mean demand a single class can have
    #[clap(long, default_value="50")]
    max_mean_demand: f64,
    /// The demand std deviation of a class, as a fraction of its mean
    #[clap(long, default_value="0.3")]
    demand_spread: f64,
    /// The shared capacity, as a fraction of the total mean demand
    #[clap(long, default_value="0.8")]
    load_factor: f64,
    /// Name of the file where to generate the emsr instance
    #[clap(short, long)]
    output: Option<String>,
}

impl EmsrGenerator {

    pub fn generate(&mut self) {
        let mut rng = self.rng();

        let prices = self.generate_prices(&mut rng);
        let demand_means = self.generate_demand_means(&mut rng);
        let demand_std_devs = demand_means.iter().map(|mu| (mu * self.demand_spread * 10.0).round() / 10.0).collect();
        let capacity = (demand_means.iter().sum::<f64>() * self.load_factor).round();

        let instance = EmsrInstance {
            nb_classes: self.nb_classes,
            prices,
            demand_means,
            demand_std_devs,
            capacity,
        };

        let instance = serde_json::to_string_pretty(&instance).unwrap();

        if let Some(output) = self.output.as_ref() {
            File::create(output).unwrap().write_all(instance.as_bytes()).unwrap();
        } else {
            println!("{instance}");
        }
    }

    fn generate_prices(&self, rng: &mut impl Rng) -> Vec<f64> {
        if self.nb_classes <= 1 {
            return vec![self.top_price; self.nb_classes];
        }

        let rand_price = Uniform::new(self.bottom_price, self.top_price);

        // fares must be strictly decreasing, redraw on ties
        loop {
            let mut prices = vec![self.top_price];
            prices.extend((0..self.nb_classes - 2).map(|_| rand_price.sample(rng).round()));
            prices.push(self.bottom_price);
            prices[1..].sort_by(|a, b| b.partial_cmp(a).unwrap());

            if prices.windows(2).all(|w| w[0] > w[1]) {
                return prices;
            }
        }
    }

    fn generate_demand_means(&self, rng: &mut impl Rng) -> Vec<f64> {
        let rand_mean = Uniform::new(0.2 * self.max_mean_demand, self.max_mean_demand);

        (0..self.nb_classes).map(|_| (rand_mean.sample(rng) * 10.0).round() / 10.0).collect()
    }

    fn rng(&self) -> impl Rng {
        let init = self.seed.unwrap_or_else(|| SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_millis());
        let mut seed = [0_u8; 32];
        seed.iter_mut().zip(init.to_be_bytes().into_iter()).for_each(|(s, i)| *s = i);
        seed.iter_mut().rev().zip(init.to_le_bytes().into_iter()).for_each(|(s, i)| *s = i);
        ChaChaRng::from_seed(seed)
    }

}
