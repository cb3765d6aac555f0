//! Writes a deterministic synthetic sweep to `scopeMeasure.csv` so the
//! plotter can be exercised without bench hardware: a first-order high-pass
//! magnitude response with fc = 5 kHz plus a little measurement noise.

use serde::Serialize;

const OUTPUT_PATH: &str = "scopeMeasure.csv";
const CUTOFF_HZ: f64 = 5000.0;
const V_IN: f64 = 1.0;
const POINTS: usize = 60;
const NOISE_VOLTS: f64 = 0.002;

#[derive(Serialize)]
struct SweepRow {
    #[serde(rename = "Freq")]
    freq: f64,
    #[serde(rename = "V_i")]
    v_in: f64,
    #[serde(rename = "V_o")]
    v_out: f64,
}

/// |H(f)| of a first-order high-pass filter.
fn high_pass_magnitude(f: f64, fc: f64) -> f64 {
    let x = f / fc;
    x / (1.0 + x * x).sqrt()
}

/// Minimal deterministic PRNG (splitmix64) with Box-Muller gaussians.
struct NoiseGen {
    state: u64,
}

impl NoiseGen {
    fn new(seed: u64) -> Self {
        NoiseGen { state: seed }
    }

    fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        ((z ^ (z >> 31)) >> 11) as f64 / (1u64 << 53) as f64
    }

    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> anyhow::Result<()> {
    let mut rng = NoiseGen::new(42);

    // Log-spaced frequencies, 20 Hz → 20 kHz.
    let lo: f64 = 20.0;
    let hi: f64 = 20_000.0;
    let step = (hi / lo).powf(1.0 / (POINTS - 1) as f64);

    let mut writer = csv::Writer::from_path(OUTPUT_PATH)?;
    for i in 0..POINTS {
        let freq = lo * step.powi(i as i32);
        let clean = V_IN * high_pass_magnitude(freq, CUTOFF_HZ);
        // Keep the noisy amplitude positive so the gain stays defined.
        let v_out = (clean + rng.gauss(0.0, NOISE_VOLTS)).max(1e-6);

        writer.serialize(SweepRow {
            freq,
            v_in: V_IN,
            v_out,
        })?;
    }
    writer.flush()?;

    println!("Wrote {POINTS} sweep points to {OUTPUT_PATH}");
    Ok(())
}
