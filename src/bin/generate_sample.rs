use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// One generated record. Serialises to the same field names the viewer
/// reads from both JSON and CSV.
#[derive(Debug, Serialize)]
struct SampleCourse {
    id: String,
    title: String,
    department: String,
    level: u32,
    credits: u32,
    instructor: Option<String>,
    description: String,
    semester: String,
}

const DEPARTMENTS: [(&str, &str, &[&str]); 4] = [
    (
        "CS",
        "Computer Science",
        &["Programming", "Data Structures", "Operating Systems", "Compilers", "Networks"],
    ),
    (
        "MA",
        "Mathematics",
        &["Calculus", "Linear Algebra", "Topology", "Number Theory"],
    ),
    (
        "PH",
        "Physics",
        &["Mechanics", "Electromagnetism", "Quantum Physics", "Optics"],
    ),
    (
        "HI",
        "History",
        &["Ancient Rome", "Medieval Europe", "Modern Asia"],
    ),
];

const INSTRUCTORS: [&str; 6] = ["Hopper", "Noether", "Curie", "Turing", "Lovelace", "Gauss"];
const SEASONS: [&str; 4] = ["Winter", "Spring", "Summer", "Fall"];
const YEARS: [u32; 3] = [2024, 2025, 2026];
const LEVELS: [u32; 4] = [100, 200, 300, 400];

fn generate(rng: &mut SimpleRng) -> Vec<SampleCourse> {
    let mut courses = Vec::new();

    for (code, department, topics) in DEPARTMENTS {
        for (n, topic) in topics.iter().enumerate() {
            let level = LEVELS[n.min(LEVELS.len() - 1)];
            let instructor = if rng.chance(0.2) {
                None
            } else {
                Some(format!("Dr. {}", rng.pick(&INSTRUCTORS)))
            };
            let semester = if rng.chance(0.1) {
                "TBD".to_string()
            } else {
                format!("{} {}", rng.pick(&SEASONS), rng.pick(&YEARS))
            };

            courses.push(SampleCourse {
                id: format!("{code}{}", level + n as u32 + 1),
                title: format!("{topic} {}", ["I", "II"][n % 2]),
                department: department.to_string(),
                level,
                credits: *rng.pick(&[2, 3, 3, 4]),
                instructor,
                description: format!(
                    "An introduction to {} for {level}-level students.",
                    topic.to_lowercase()
                ),
                semester,
            });
        }
    }
    courses
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut rng = SimpleRng::new(42);
    let courses = generate(&mut rng);

    let json_path = out_dir.join("sample_courses.json");
    let json = serde_json::to_string_pretty(&courses).context("serialising courses")?;
    std::fs::write(&json_path, json)
        .with_context(|| format!("writing {}", json_path.display()))?;

    let csv_path = out_dir.join("sample_courses.csv");
    let mut writer = csv::Writer::from_path(&csv_path)
        .with_context(|| format!("creating {}", csv_path.display()))?;
    for course in &courses {
        writer.serialize(course).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;

    println!(
        "Wrote {} courses to {} and {}",
        courses.len(),
        json_path.display(),
        csv_path.display()
    );
    Ok(())
}
