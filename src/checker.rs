//! Randomised differential check of the linear scan against the quadratic
//! reference search.

use indicatif::ProgressBar;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::solution::{Pair, find_pair, find_pair_brute};

/// Longest input the generator will produce, matching the problem's
/// `nums.length <= 10^4` constraint.
pub const MAX_LEN_LIMIT: usize = 10_000;

/// A generated input with at least one qualifying pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub seed: u64,
    pub nums: Vec<i64>,
    pub target: i64,
    pub planted: Pair,
}

pub struct Generator {
    max_len: usize,
    value_bound: i64,
}

impl Generator {
    pub fn new(max_len: usize, value_bound: i64) -> Self {
        Self {
            max_len: max_len.clamp(2, MAX_LEN_LIMIT),
            value_bound: value_bound.clamp(1, i64::MAX / 2),
        }
    }

    pub fn generate(&self, seed: u64) -> Instance {
        let mut rng = StdRng::seed_from_u64(seed);

        let len = rng.random_range(2..=self.max_len);
        let nums: Vec<i64> = (0..len)
            .map(|_| rng.random_range(-self.value_bound..=self.value_bound))
            .collect();

        let second = rng.random_range(1..len);
        let first = rng.random_range(0..second);
        let target = nums[first] + nums[second];

        Instance {
            seed,
            nums,
            target,
            planted: Pair { first, second },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub instance: Instance,
    pub found: Option<Pair>,
    pub reference: Option<Pair>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub rounds: u64,
    pub mismatch: Option<Mismatch>,
}

/// Verify a single instance. Returns the reason it failed, if it did.
pub fn verify(instance: &Instance) -> Result<(), Mismatch> {
    let found = find_pair(&instance.nums, instance.target);
    let reference = find_pair_brute(&instance.nums, instance.target);

    let fail = |reason: String| Mismatch {
        instance: instance.clone(),
        found,
        reference,
        reason,
    };

    let Some(pair) = found else {
        return Err(fail("no pair found although one was planted".to_string()));
    };

    if pair.first >= pair.second {
        return Err(fail(format!("indices out of order: {pair}")));
    }
    if pair.second >= instance.nums.len() {
        return Err(fail(format!("index out of bounds: {pair}")));
    }
    if instance.nums[pair.first] + instance.nums[pair.second] != instance.target {
        return Err(fail(format!("{pair} does not sum to {}", instance.target)));
    }
    if found != reference {
        return Err(fail("disagrees with the reference search".to_string()));
    }

    Ok(())
}

/// Run `rounds` instances seeded `seed, seed + 1, ...`, stopping at the first mismatch.
pub fn check(generator: &Generator, seed: u64, rounds: u64, progress: &ProgressBar) -> CheckOutcome {
    check_instances(rounds, progress, |round| {
        generator.generate(seed.wrapping_add(round))
    })
}

fn check_instances(
    rounds: u64,
    progress: &ProgressBar,
    mut next: impl FnMut(u64) -> Instance,
) -> CheckOutcome {
    for round in 0..rounds {
        let instance = next(round);
        if let Err(mismatch) = verify(&instance) {
            log::warn!("mismatch at seed {}: {}", instance.seed, mismatch.reason);
            progress.abandon();
            return CheckOutcome {
                rounds: round + 1,
                mismatch: Some(mismatch),
            };
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    CheckOutcome {
        rounds,
        mismatch: None,
    }
}
