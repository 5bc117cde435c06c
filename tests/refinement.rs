use std::collections::{BTreeSet, HashSet};

use partition_refinement::{Error, PartitionRefinement, RefineVec};
use proptest::prelude::*;

type Sets = BTreeSet<BTreeSet<u32>>;

fn as_sets(sets: Vec<Vec<u32>>) -> Sets {
    sets.into_iter().map(|set| set.into_iter().collect()).collect()
}

fn sets_of(partition: &PartitionRefinement<u32>) -> Sets {
    as_sets(partition.collect_sets())
}

/// Splits every set of `model` by `query` the slow way.
fn refine_model(model: &Sets, query: &[u32]) -> Sets {
    let query: BTreeSet<u32> = query.iter().cloned().collect();
    let mut refined = Sets::new();

    for set in model {
        let inside: BTreeSet<u32> = set.intersection(&query).cloned().collect();
        let outside: BTreeSet<u32> = set.difference(&query).cloned().collect();
        for part in vec![inside, outside] {
            if !part.is_empty() {
                refined.insert(part);
            }
        }
    }

    refined
}

/// A universe `0 .. n` and a few queries without repeated elements.
fn universe_and_queries() -> impl Strategy<Value = (u32, Vec<Vec<u32>>)> {
    (0u32 .. 40).prop_flat_map(|n| {
        let element = 0 .. u32::max(n, 1);
        let queries = proptest::collection::vec(
            proptest::collection::vec(element, 0 .. 2 * n as usize + 1),
            0 .. 8,
        );

        (Just(n), queries)
    }).prop_map(|(n, queries)| {
        let queries = queries.into_iter()
            .map(|query| {
                let mut seen = HashSet::new();
                query.into_iter().filter(|&x| x < n && seen.insert(x)).collect()
            })
            .collect();

        (n, queries)
    })
}

#[test]
fn refines_the_first_ten_integers() {
    let mut partition: PartitionRefinement<u32> = PartitionRefinement::new(0 .. 10).unwrap();

    partition.refine(&[2, 3, 5, 7]).unwrap();
    assert_eq!(sets_of(&partition), as_sets(vec![vec![2, 3, 5, 7], vec![0, 1, 4, 6, 8, 9]]));

    partition.refine(&[0, 2, 4, 6, 8]).unwrap();
    assert_eq!(
        sets_of(&partition),
        as_sets(vec![vec![2], vec![3, 5, 7], vec![0, 4, 6, 8], vec![1, 9]]),
    );
    assert_eq!(partition.amount_of_sets(), 4);
    assert_eq!(partition.set_count(), 4);
}

#[test]
fn singleton_queries_discretize() {
    let n = 12;
    let mut partition: PartitionRefinement<u32> = PartitionRefinement::new(0 .. n).unwrap();

    for x in 0 .. n {
        partition.refine(&[x]).unwrap();
    }

    let sets = partition.collect_sets();
    assert_eq!(sets.len(), n as usize);
    assert!(sets.iter().all(|set| set.len() == 1));
    assert!((0 .. n).all(|x| partition.is_singleton(&x)));
}

#[test]
fn empty_query_changes_nothing() {
    let mut partition: PartitionRefinement<u32> = PartitionRefinement::new(0 .. 6).unwrap();
    partition.refine(&[1, 2]).unwrap();
    let before = partition.collect_sets();

    let empty: [u32; 0] = [];
    let splits = partition.refine(&empty).unwrap();

    assert!(splits.is_empty());
    assert_eq!(partition.collect_sets(), before);
    assert_eq!(partition.set_count(), 2);
}

#[test]
fn collecting_twice_gives_the_same_sets() {
    let mut partition: PartitionRefinement<u32> = PartitionRefinement::new(0 .. 8).unwrap();
    partition.refine(&[7, 1, 3]).unwrap();

    assert_eq!(partition.collect_sets(), partition.collect_sets());
}

#[test]
fn query_equal_to_a_set_gets_a_new_id() {
    let mut partition: PartitionRefinement<u32> = PartitionRefinement::new(0 .. 4).unwrap();

    let splits = partition.refine(&[3, 1, 0, 2]).unwrap();

    assert_eq!(splits.len(), 1);
    assert_eq!(splits[0].difference, 0);
    assert_eq!(splits[0].intersection, 1);
    assert_eq!(partition.len_of_set(0), 0);
    assert_eq!(partition.len_of_set(1), 4);
    assert_eq!(partition.set_of(&2), Some(1));
    assert_eq!(partition.collect_sets().len(), 1);
}

#[test]
fn unknown_elements_are_rejected_before_moving_anything() {
    let mut partition: PartitionRefinement<u32> = PartitionRefinement::new(0 .. 5).unwrap();
    let storage = partition.as_refine_vec().storage().to_vec();

    assert_eq!(partition.refine(&[1, 2, 9]), Err(Error::UnknownElement { position: 2 }));
    assert_eq!(partition.as_refine_vec().storage(), &storage[..]);
    assert_eq!(partition.set_count(), 1);
    assert_eq!(partition.set_of(&9), None);
    assert!(!partition.contains(&9));

    // The call can be retried without the unknown element.
    partition.refine(&[1, 2]).unwrap();
    assert!(partition.same_set(&1, &2));
    assert!(partition.other_sets(&0, &1));
}

#[test]
fn repeated_query_elements_are_rejected() {
    let mut partition: PartitionRefinement<u32> = PartitionRefinement::new(0 .. 5).unwrap();

    assert_eq!(
        partition.refine(&[4, 0, 4]),
        Err(Error::DuplicateQueryElement { position: 2 }),
    );
    assert_eq!(partition.amount_of_sets(), 1);
    assert_eq!(partition.set_count(), 1);
}

#[test]
fn repeated_universe_elements_are_rejected() {
    let error = PartitionRefinement::new(vec!["a", "b", "c", "b"]).unwrap_err();

    assert_eq!(error, Error::DuplicateElement { first: 1, position: 3 });
    assert_eq!(
        error.to_string(),
        "universe element at position 3 repeats the element at position 1",
    );
}

#[test]
fn instances_count_their_sets_independently() {
    let mut first: PartitionRefinement<u32> = PartitionRefinement::new(0 .. 4).unwrap();
    let mut second: PartitionRefinement<u32> = PartitionRefinement::new(0 .. 4).unwrap();

    first.refine(&[0]).unwrap();
    first.refine(&[1]).unwrap();
    let splits = second.refine(&[2]).unwrap();

    assert_eq!(first.set_count(), 3);
    assert_eq!(splits[0].intersection, 1);
}

proptest! {
    #[test]
    fn refinement_matches_the_model((n, queries) in universe_and_queries()) {
        let mut partition: PartitionRefinement<u32> = PartitionRefinement::new(0 .. n).unwrap();
        let mut model = if n == 0 {
            Sets::new()
        } else {
            as_sets(vec![(0 .. n).collect()])
        };

        for query in &queries {
            let amount_before = partition.amount_of_sets();
            partition.refine(query).unwrap();
            model = refine_model(&model, query);

            let sets = partition.collect_sets();

            // Every element is in exactly one set.
            let mut elements: Vec<u32> = sets.iter().flatten().cloned().collect();
            elements.sort();
            prop_assert_eq!(elements, (0 .. n).collect::<Vec<u32>>());

            // No set straddles the query.
            let query: HashSet<u32> = query.iter().cloned().collect();
            for set in &sets {
                let inside = set.iter().filter(|&&x| query.contains(&x)).count();
                prop_assert!(inside == 0 || inside == set.len());
            }

            prop_assert!(partition.amount_of_sets() >= amount_before);
            prop_assert!(partition.amount_of_sets() <= n as usize);
            prop_assert_eq!(as_sets(sets), model.clone());
        }
    }

    #[test]
    fn failed_refinements_leave_the_partition_alone(
        (n, queries) in universe_and_queries(),
        unknown in 40u32 .. 80,
    ) {
        let mut partition: PartitionRefinement<u32> = PartitionRefinement::new(0 .. n).unwrap();

        for query in &queries {
            let before = partition.clone();
            let mut bad = query.clone();
            bad.push(unknown);

            prop_assert_eq!(
                partition.refine(&bad),
                Err(Error::UnknownElement { position: query.len() }),
            );
            prop_assert_eq!(partition.as_refine_vec(), before.as_refine_vec());
            prop_assert_eq!(partition.set_count(), before.set_count());

            partition.refine(query).unwrap();
        }
    }
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use super::*;

    proptest! {
        #[test]
        fn arbitrary_partitions_refine_correctly(
            mut refine_vec in any::<RefineVec<u8>>(),
            picks in proptest::collection::vec(any::<bool>(), 0 .. 100),
        ) {
            let query: Vec<usize> = (0 .. refine_vec.len())
                .filter(|&index| picks.get(index).cloned().unwrap_or(false))
                .collect();
            let before = refine_vec.clone();

            let splits = refine_vec.refine(&query).unwrap();

            let in_query: HashSet<usize> = query.iter().cloned().collect();
            for first in 0 .. refine_vec.len() {
                for second in 0 .. refine_vec.len() {
                    let same_side = in_query.contains(&first) == in_query.contains(&second);
                    prop_assert_eq!(
                        refine_vec.same_set(first, second),
                        before.same_set(first, second) && same_side,
                    );
                }
            }

            for split in splits {
                prop_assert!(refine_vec.set(split.intersection).all(|(index, _)| in_query.contains(&index)));
                prop_assert!(refine_vec.set(split.difference).all(|(index, _)| !in_query.contains(&index)));
            }
        }
    }
}
