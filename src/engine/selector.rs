// src/engine/selector.rs

use std::collections::HashSet;

use rand::Rng;
use rand::seq::IteratorRandom;

use crate::models::question::Question;

/// Picks the next quiz question.
///
/// Eligible questions are those in `category` (any category when `None`)
/// whose id is not in `excluded`. One of them is drawn uniformly with `rng`;
/// `None` means the quiz is exhausted. Unknown categories simply have no
/// eligible questions.
pub fn next_question<'a, R: Rng + ?Sized>(
    questions: &'a [Question],
    category: Option<i64>,
    excluded: &HashSet<i64>,
    rng: &mut R,
) -> Option<&'a Question> {
    questions
        .iter()
        .filter(|q| category.is_none_or(|c| q.category == c))
        .filter(|q| !excluded.contains(&q.id))
        .choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;
    use std::collections::HashMap;

    fn q(id: i64, category: i64) -> Question {
        Question {
            id,
            question: format!("Question {}", id),
            answer: "A".to_string(),
            category,
            difficulty: 2,
        }
    }

    fn pool() -> Vec<Question> {
        vec![q(1, 1), q(2, 1), q(3, 2), q(4, 2), q(5, 3)]
    }

    #[test]
    fn every_eligible_question_gets_picked_eventually() {
        let questions = pool();
        let excluded = HashSet::from([2]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut hits: HashMap<i64, usize> = HashMap::new();

        for _ in 0..2000 {
            let picked = next_question(&questions, None, &excluded, &mut rng).unwrap();
            *hits.entry(picked.id).or_default() += 1;
        }

        assert!(!hits.contains_key(&2));
        for id in [1, 3, 4, 5] {
            assert!(hits[&id] > 300, "id {} picked {} times", id, hits[&id]);
        }
    }

    #[test]
    fn category_filter_is_applied() {
        let questions = pool();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let picked = next_question(&questions, Some(2), &HashSet::new(), &mut rng).unwrap();
            assert_eq!(picked.category, 2);
        }
    }

    #[test]
    fn exhausted_when_everything_is_excluded() {
        let questions = pool();
        let all: HashSet<i64> = questions.iter().map(|q| q.id).collect();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(next_question(&questions, None, &all, &mut rng).is_none());
    }

    #[test]
    fn unknown_category_is_exhausted_not_an_error() {
        let questions = pool();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(next_question(&questions, Some(99), &HashSet::new(), &mut rng).is_none());
    }

    #[test]
    fn unknown_excluded_ids_are_ignored() {
        let questions = pool();
        let excluded = HashSet::from([1, 2, 1000]);
        let mut rng = StdRng::seed_from_u64(5);
        let picked = next_question(&questions, Some(1), &excluded, &mut rng);
        assert!(picked.is_none());

        let picked = next_question(&questions, Some(3), &excluded, &mut rng).unwrap();
        assert_eq!(picked.id, 5);
    }

    #[test]
    fn zero_generator_picks_the_last_eligible_question() {
        // Every draw from this generator is 0, which keeps replacing the
        // candidate with the newest eligible question.
        let questions = pool();
        let mut rng = StepRng::new(0, 0);

        let picked = next_question(&questions, None, &HashSet::new(), &mut rng).unwrap();
        assert_eq!(picked.id, 5);

        let picked = next_question(&questions, None, &HashSet::from([5]), &mut rng).unwrap();
        assert_eq!(picked.id, 4);

        let picked = next_question(&questions, Some(1), &HashSet::new(), &mut rng).unwrap();
        assert_eq!(picked.id, 2);

        let picked = next_question(&questions, Some(1), &HashSet::from([2]), &mut rng).unwrap();
        assert_eq!(picked.id, 1);
    }

    #[test]
    fn same_seed_same_pick() {
        let questions = pool();
        let a = next_question(&questions, None, &HashSet::new(), &mut StdRng::seed_from_u64(42));
        let b = next_question(&questions, None, &HashSet::new(), &mut StdRng::seed_from_u64(42));
        assert_eq!(a.map(|q| q.id), b.map(|q| q.id));
    }

    #[test]
    fn repeated_turns_cover_the_category_without_repeats() {
        let questions = pool();
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = HashSet::new();

        while let Some(picked) = next_question(&questions, None, &seen, &mut rng) {
            assert!(seen.insert(picked.id));
        }

        assert_eq!(seen.len(), questions.len());
    }
}
