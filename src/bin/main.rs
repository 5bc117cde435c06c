extern crate partition_refinement;

use partition_refinement::{Error, PartitionRefinement};

fn main() -> Result<(), Error> {
    let mut partition: PartitionRefinement<u32> = PartitionRefinement::new(0 .. 10)?;
    println!("initial partition: {:?}", partition.collect_sets());

    for query in &[vec![2u32, 3, 5, 7], vec![0, 2, 4, 6, 8]] {
        println!("refining with {:?}", query);

        for split in partition.refine(query)? {
            let intersection: Vec<_> = partition.set(split.intersection).map(|(_, x)| x).collect();
            let difference: Vec<_> = partition.set(split.difference).map(|(_, x)| x).collect();
            println!("  S[{}] ∩ X = {:?}, S[{}] \\ X = {:?}",
                split.difference, intersection, split.difference, difference);
        }
    }

    println!("final partition: {:?}", partition.collect_sets());

    Ok(())
}
