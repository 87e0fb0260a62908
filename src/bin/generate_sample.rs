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

    /// Uniform integer in `lo..=hi`.
    fn range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_u64() % (hi - lo + 1) as u64) as i64
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let franchises = [
        "Star Courier", "Mega Kart", "Dungeon Loop", "Pixel Rally",
        "Iron Harvest Moon", "Neon Drift",
    ];
    let consoles = ["NES", "SNES", "PS1", "PS2", "X360", "Wii", "PS4"];
    let genres = ["Action", "Racing", "Role-Playing", "Sports", "Puzzle"];
    let publishers = ["Nintendo", "Sony", "Sega", "Capcom", "Ubisoft"];

    let output_path = "sample_vgchartz.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "title",
            "console",
            "genre",
            "publisher",
            "total_sales",
            "release_date",
        ])
        .expect("Failed to write header");

    let mut rows: usize = 0;
    for franchise in &franchises {
        for &console in &consoles {
            let title = format!("{franchise} ({console})");
            let genre = genres[rng.range(0, genres.len() as i64 - 1) as usize];
            let publisher = publishers[rng.range(0, publishers.len() as i64 - 1) as usize];

            // Roughly one row in ten lacks a sales figure; one in ten has
            // no release date. Years deliberately overshoot the 1985-2018
            // window on both sides.
            let total_sales = if rng.next_f64() < 0.1 {
                String::new()
            } else {
                format!("{:.2}", rng.next_f64() * 20.0)
            };
            let release_date = if rng.next_f64() < 0.1 {
                String::new()
            } else {
                format!(
                    "{:04}-{:02}-{:02}",
                    rng.range(1980, 2022),
                    rng.range(1, 12),
                    rng.range(1, 28)
                )
            };

            writer
                .write_record([
                    title.as_str(),
                    console,
                    genre,
                    publisher,
                    total_sales.as_str(),
                    release_date.as_str(),
                ])
                .expect("Failed to write row");
            rows += 1;
        }
    }

    writer.flush().expect("Failed to flush output file");

    println!("Wrote {rows} rows to {output_path}");
}
