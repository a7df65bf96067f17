//! Reading and generating branch traces.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use rand::prelude::*;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::branch::*;

/// Failures while reading a trace.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// A sequence of [BranchRecord] read from a text file.
///
/// Each line holds a program counter and an outcome, ie. `0x401a2c T`.
/// The program counter is hexadecimal when prefixed with `0x`, otherwise
/// decimal. Outcomes are `T`/`N` or `1`/`0`. Blank lines and anything after
/// a `#` are ignored.
#[derive(Clone, Debug, Default)]
pub struct BranchTrace {
    pub name: String,
    pub data: Vec<BranchRecord>,
}
impl BranchTrace {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let path = path.as_ref();
        let name = path.file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let f = File::open(path)?;
        Self::from_reader(&name, f)
    }

    pub fn from_reader(name: &str, reader: impl Read) -> Result<Self, TraceError> {
        let mut data = Vec::new();
        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            if let Some(record) = parse_line(&line)
                .map_err(|reason| TraceError::Parse { line: idx + 1, reason })?
            {
                data.push(record);
            }
        }
        Ok(Self { name: name.to_string(), data })
    }

    /// Return the number of records
    pub fn num_entries(&self) -> usize { self.data.len() }

    pub fn name(&self) -> &str { &self.name }

    /// Return a slice of records.
    pub fn as_slice(&self) -> &[BranchRecord] { &self.data }
}

fn parse_line(line: &str) -> Result<Option<BranchRecord>, String> {
    let line = match line.split_once('#') {
        Some((head, _)) => head,
        None => line,
    };
    let mut fields = line.split_whitespace();
    let (pc, outcome) = match (fields.next(), fields.next(), fields.next()) {
        (None, _, _) => return Ok(None),
        (Some(pc), Some(outcome), None) => (pc, outcome),
        _ => return Err("expected '<pc> <outcome>'".to_string()),
    };

    let pc = match pc.strip_prefix("0x").or_else(|| pc.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => pc.parse::<usize>(),
    }.map_err(|e| format!("bad program counter '{}': {}", pc, e))?;

    let outcome = match outcome {
        "T" | "t" | "1" => Outcome::T,
        "N" | "n" | "0" => Outcome::N,
        _ => return Err(format!("bad outcome '{}'", outcome)),
    };
    Ok(Some(BranchRecord::new(pc, outcome)))
}

/// Generates a trace from a set of branches with periodic outcome patterns.
///
/// Branches are visited round-robin. Each branch repeats its own pattern,
/// and every outcome is flipped with probability 'noise'.
#[derive(Debug)]
pub struct TraceGenerator {
    branches: Vec<(usize, Vec<Outcome>)>,
    noise: f64,
    rng: StdRng,
}
impl TraceGenerator {
    pub fn new(seed: u64, noise: f64) -> Self {
        Self {
            branches: Vec::new(),
            noise: noise.clamp(0.0, 1.0),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Add a branch at 'pc' which repeats 'pattern'.
    pub fn add_branch(&mut self, pc: usize, pattern: &[Outcome]) -> &mut Self {
        if !pattern.is_empty() {
            self.branches.push((pc, pattern.to_vec()));
        }
        self
    }

    /// Add a branch with a random pattern of length 'len'.
    pub fn add_random_branch(&mut self, pc: usize, len: usize) -> &mut Self {
        let pattern: Vec<Outcome> = (0..len)
            .map(|_| Outcome::from(self.rng.gen::<bool>()))
            .collect();
        self.add_branch(pc, &pattern)
    }

    /// Generate 'len' records.
    pub fn generate(&mut self, len: usize) -> Vec<BranchRecord> {
        let mut res = Vec::with_capacity(len);
        if self.branches.is_empty() {
            return res;
        }
        for i in 0..len {
            let (pc, pat) = &self.branches[i % self.branches.len()];
            let n = i / self.branches.len();
            let mut outcome = pat[n % pat.len()];
            if self.noise > 0.0 && self.rng.gen_bool(self.noise) {
                outcome = !outcome;
            }
            res.push(BranchRecord::new(*pc, outcome));
        }
        res
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use Outcome::*;

    #[test]
    fn parse_text_trace() {
        let text = "\
# pc outcome
0x1000 T
0x1000 n

4096 1   # decimal
0X2a 0
";
        let trace = BranchTrace::from_reader("test", text.as_bytes()).unwrap();
        assert_eq!(trace.name(), "test");
        assert_eq!(trace.as_slice(), [
            BranchRecord::new(0x1000, T),
            BranchRecord::new(0x1000, N),
            BranchRecord::new(4096, T),
            BranchRecord::new(0x2a, N),
        ]);
    }

    #[test]
    fn parse_errors_name_the_line() {
        let err = BranchTrace::from_reader("bad", "0x10 T\n0x10 X\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, TraceError::Parse { line: 2, .. }));

        let err = BranchTrace::from_reader("bad", "zz T\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, TraceError::Parse { line: 1, .. }));

        let err = BranchTrace::from_reader("bad", "0x10\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, TraceError::Parse { line: 1, .. }));
    }

    #[test]
    fn generator_round_robin() {
        let mut g = TraceGenerator::new(0, 0.0);
        g.add_branch(0x10, &[T, N]).add_branch(0x20, &[N]);
        let records = g.generate(6);
        let got: Vec<(usize, Outcome)> = records.iter()
            .map(|r| (r.pc, r.outcome))
            .collect();
        assert_eq!(got, [
            (0x10, T), (0x20, N),
            (0x10, N), (0x20, N),
            (0x10, T), (0x20, N),
        ]);
    }

    #[test]
    fn generator_is_seeded() {
        let build = || {
            let mut g = TraceGenerator::new(42, 0.1);
            g.add_random_branch(0x10, 7).add_random_branch(0x20, 3);
            g.generate(500)
        };
        assert_eq!(build(), build());
        assert!(TraceGenerator::new(1, 0.0).generate(10).is_empty());
    }
}
