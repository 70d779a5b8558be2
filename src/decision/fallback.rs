//! Uniform random action for turns the geometry table does not cover

use rand::Rng;

use crate::core::types::Action;

pub fn random_action<R: Rng + ?Sized>(rng: &mut R) -> Action {
    let action = Action::random(rng);
    tracing::debug!("No table entry, falling back to random action {}", action);
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_fallback_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(random_action(&mut a), random_action(&mut b));
        }
    }

    #[test]
    fn test_fallback_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut counts = [0usize; 4];
        for _ in 0..4000 {
            let action = random_action(&mut rng);
            let slot = Action::ALL.iter().position(|a| *a == action).unwrap();
            counts[slot] += 1;
        }
        for count in counts {
            assert!((800..1200).contains(&count), "skewed counts: {:?}", counts);
        }
    }
}
