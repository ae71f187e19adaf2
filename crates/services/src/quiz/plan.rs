use rand::seq::SliceRandom;
use rand::{Rng, rng};

use tables_core::model::{Factor, Order, Problem};

/// Builds the nine problems for one table in the requested order.
#[derive(Debug, Clone, Copy)]
pub struct ProblemSetBuilder {
    multiplier: Factor,
    order: Order,
}

impl ProblemSetBuilder {
    #[must_use]
    pub fn new(multiplier: Factor) -> Self {
        Self {
            multiplier,
            order: Order::Ascending,
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// Build using the thread-local RNG for `Order::Random`.
    #[must_use]
    pub fn build(self) -> Vec<Problem> {
        let mut rng = rng();
        self.build_with_rng(&mut rng)
    }

    /// Build using a caller-provided RNG, so shuffled sets can be reproduced.
    ///
    /// - `Ascending` keeps `m × 1 .. m × 9`.
    /// - `Descending` reverses it.
    /// - `Random` applies a Fisher–Yates shuffle.
    pub fn build_with_rng<R: Rng + ?Sized>(self, rng: &mut R) -> Vec<Problem> {
        let mut problems: Vec<Problem> = Factor::all()
            .map(|factor| Problem::new(self.multiplier, factor))
            .collect();

        match self.order {
            Order::Ascending => {}
            Order::Descending => problems.reverse(),
            Order::Random => problems.as_mut_slice().shuffle(rng),
        }

        problems
    }
}

/// Generate the problem set for `multiplier` in `order`.
#[must_use]
pub fn generate_problems(multiplier: Factor, order: Order) -> Vec<Problem> {
    ProblemSetBuilder::new(multiplier).with_order(order).build()
}

/// Same as [`generate_problems`] with an injected random source.
pub fn generate_problems_with_rng<R: Rng + ?Sized>(
    multiplier: Factor,
    order: Order,
    rng: &mut R,
) -> Vec<Problem> {
    ProblemSetBuilder::new(multiplier)
        .with_order(order)
        .build_with_rng(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use tables_core::model::PROBLEMS_PER_SESSION;

    fn factor(value: u8) -> Factor {
        Factor::new(value).unwrap()
    }

    fn pairs(problems: &[Problem]) -> HashSet<(u8, u8)> {
        problems
            .iter()
            .map(|p| (p.multiplicand().value(), p.multiplier().value()))
            .collect()
    }

    #[test]
    fn every_table_and_order_yields_the_full_set() {
        for multiplier in Factor::all() {
            let expected: HashSet<(u8, u8)> =
                (1..=9).map(|i| (multiplier.value(), i)).collect();
            for order in Order::ALL {
                let problems = generate_problems(multiplier, order);
                assert_eq!(problems.len(), PROBLEMS_PER_SESSION);
                assert_eq!(pairs(&problems), expected, "{multiplier} / {order}");
            }
        }
    }

    #[test]
    fn ascending_counts_up() {
        let problems = generate_problems(factor(6), Order::Ascending);
        for (i, problem) in problems.iter().enumerate() {
            assert_eq!(usize::from(problem.multiplier().value()), i + 1);
        }
    }

    #[test]
    fn descending_counts_down() {
        let problems = generate_problems(factor(6), Order::Descending);
        for (i, problem) in problems.iter().enumerate() {
            assert_eq!(usize::from(problem.multiplier().value()), 9 - i);
        }
    }

    #[test]
    fn random_is_reproducible_with_fixed_seed() {
        let mut first_rng = StdRng::seed_from_u64(7);
        let mut second_rng = StdRng::seed_from_u64(7);

        let first = generate_problems_with_rng(factor(3), Order::Random, &mut first_rng);
        let second = generate_problems_with_rng(factor(3), Order::Random, &mut second_rng);

        assert_eq!(first, second);
        assert_eq!(pairs(&first), pairs(&generate_problems(factor(3), Order::Ascending)));
    }

    #[test]
    fn random_shuffles_across_seeds() {
        let ascending = generate_problems(factor(5), Order::Ascending);
        let shuffled_any = (0..16_u64).any(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_problems_with_rng(factor(5), Order::Random, &mut rng) != ascending
        });
        assert!(shuffled_any);
    }

    #[test]
    fn builder_defaults_to_ascending() {
        let problems = ProblemSetBuilder::new(factor(2)).build();
        assert_eq!(problems[0].answer(), 2);
        assert_eq!(problems[8].answer(), 18);
    }
}
