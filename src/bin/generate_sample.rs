/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let job_types: &[(&str, f64)] = &[
        ("FULL_TIME", 4200.0),
        ("PART_TIME", 1800.0),
        ("CONTRACT", 3500.0),
        ("INTERNSHIP", 900.0),
    ];
    let industries = [
        "IT",
        "Finance",
        "Healthcare",
        "Retail",
        "Manufacturing",
        "Education",
    ];

    let output_path = "sample_jobs.csv";
    let file = std::fs::File::create(output_path).expect("Failed to create output file");
    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record(["id", "job_type", "industry", "min_salary", "max_salary"])
        .expect("Failed to write header");

    let mut row_id: i64 = 0;
    for &(job_type, base_salary) in job_types {
        for &industry in &industries {
            for _ in 0..5 {
                let min = rng.gauss(base_salary, base_salary * 0.15).max(400.0) as u64;
                let spread = (rng.next_f64() * base_salary * 0.5) as u64;

                // Sprinkle in the dirt real exports carry: unknown salaries
                // and blank industries.
                let (min_cell, max_cell) = if rng.next_f64() < 0.05 {
                    ("invalid".to_string(), "invalid".to_string())
                } else {
                    (min.to_string(), (min + spread).to_string())
                };
                let industry_cell = if rng.next_f64() < 0.05 { "" } else { industry };

                writer
                    .write_record([
                        row_id.to_string(),
                        job_type.to_string(),
                        industry_cell.to_string(),
                        min_cell,
                        max_cell,
                    ])
                    .expect("Failed to write row");
                row_id += 1;
            }
        }
    }

    writer.flush().expect("Failed to flush output file");

    println!(
        "Wrote {} job listings ({} job types, {} industries) to {output_path}",
        row_id,
        job_types.len(),
        industries.len()
    );
}
